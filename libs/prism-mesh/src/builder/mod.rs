//! # Prism Builder
//!
//! Assembles the prism mesh: layered vertex buffer, cap faces from the
//! selected triangulation strategy and side faces from index arithmetic.
//!
//! ## Winding
//!
//! Right-handed, y-up, face normal `(b - a) × (c - a)`. For a
//! counter-clockwise polygon and positive depth:
//!
//! - bottom cap `(a, c, b)` faces −Z
//! - top cap `(a + n, b + n, c + n)` faces +Z
//! - side `(i, next + n, i + n)` and `(i, next, next + n)` face outward
//!
//! A negative depth mirrors the solid, so every face is flipped to stay
//! outward facing.

use crate::config::ExtrudeConfig;
use crate::error::{MeshError, MeshResult};
use crate::mesh::{PrismLayout, PrismMesh};
use crate::polygon::Polygon;
use crate::triangulate::CapTriangulator;
use glam::DVec3;

/// Extrudes `polygon` by `depth` along Z.
///
/// # Errors
///
/// - [`MeshError::InvalidDepth`] if `depth` is NaN or infinite
/// - [`MeshError::TooManyPoints`] if the polygon exceeds `config.max_points`
/// - [`MeshError::DegenerateGeometry`] / [`MeshError::InvalidPolygon`] from
///   validation when `config.validate_simple` is set
/// - [`MeshError::TriangulationFailure`] from the cap strategy
///
/// # Cap winding
///
/// For a counter-clockwise cap triangle `(a, b, c)` the bottom cap emits
/// `(a, c, b)` and the top cap `(a+n, b+n, c+n)`, so both face away from the
/// solid in a right-handed, y-up frame. Renderers that expect the y-down
/// tuples `(a, b, c)` / `(a+n, c+n, b+n)` get them from
/// [`PrismMesh::flip_winding`], which reverses the side walls to match.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use prism_mesh::builder::build_prism;
/// use prism_mesh::config::ExtrudeConfig;
/// use prism_mesh::polygon::Polygon;
///
/// let square = Polygon::square(DVec2::ONE, false);
/// let mesh = build_prism(&square, 1.0, &ExtrudeConfig::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn build_prism(polygon: &Polygon, depth: f64, config: &ExtrudeConfig) -> MeshResult<PrismMesh> {
    if !depth.is_finite() {
        return Err(MeshError::InvalidDepth(depth));
    }

    let n = polygon.len();
    if n > config.max_points {
        return Err(MeshError::TooManyPoints {
            count: n,
            max: config.max_points,
        });
    }

    if config.validate_simple {
        polygon.validate(config.tolerance)?;
    }

    let caps = config.strategy.triangulate(polygon)?;

    let layout = PrismLayout::new(n);
    let vertices = build_vertices(polygon, depth);

    let mut triangles = Vec::with_capacity(2 * caps.len() + layout.side_triangle_count());

    for &[a, b, c] in &caps {
        triangles.push([
            layout.bottom_cap(a),
            layout.bottom_cap(c),
            layout.bottom_cap(b),
        ]);
        triangles.push([layout.top_cap(a), layout.top_cap(b), layout.top_cap(c)]);
    }

    for i in 0..n {
        let next = layout.next(i);
        triangles.push([layout.bottom(i), layout.top(next), layout.top(i)]);
        triangles.push([layout.bottom(i), layout.bottom(next), layout.top(next)]);
    }

    let mut mesh = PrismMesh::from_parts(layout, vertices, triangles);
    if depth < 0.0 {
        mesh.flip_winding();
    }

    Ok(mesh)
}

/// Vertex buffer in [`PrismLayout`] order.
fn build_vertices(polygon: &Polygon, depth: f64) -> Vec<DVec3> {
    let points = polygon.points();
    let centroid = polygon.centroid();

    let mut vertices = Vec::with_capacity(2 * points.len() + 2);
    vertices.extend(points.iter().map(|p| p.extend(0.0)));
    vertices.extend(points.iter().map(|p| p.extend(depth)));
    vertices.push(centroid.extend(0.0));
    vertices.push(centroid.extend(depth));
    vertices
}
