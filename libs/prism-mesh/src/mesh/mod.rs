//! # Prism Mesh
//!
//! Output mesh with layered vertices and triangle indices, plus the flat
//! buffer adapters renderers consume.
//!
//! All geometry is kept in f64. Conversion to f32 only happens in the buffer
//! adapters used at the rendering boundary.

mod layout;

pub use layout::PrismLayout;

use crate::error::{MeshError, MeshResult};
use config::constants::{DEFAULT_TEX_COORD, TEXTURE_INDEX};
use glam::DVec3;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A closed triangular prism mesh.
///
/// Vertices follow [`PrismLayout`]. Triangles are outward facing under the
/// right-handed convention: the normal `(b - a) × (c - a)` points out of the
/// solid.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use prism_mesh::extrude;
///
/// let mesh = extrude(&[DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y], 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert_eq!(mesh.points_f32().len(), 30);
/// ```
///
/// Deserialization goes through [`PrismMesh::try_from_parts`], so a decoded
/// mesh always satisfies its layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrismMesh {
    /// Layout the vertex buffer follows
    layout: PrismLayout,
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl PrismMesh {
    pub(crate) fn from_parts(
        layout: PrismLayout,
        vertices: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        Self {
            layout,
            vertices,
            triangles,
        }
    }

    /// Assembles a mesh from outside buffers, checking them first.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidMesh`] if the vertex count differs from
    ///   `layout.vertex_count()` or there are fewer triangles than side walls
    /// - [`MeshError::DegenerateGeometry`] from [`PrismMesh::validate`]
    pub fn try_from_parts(
        layout: PrismLayout,
        vertices: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
    ) -> MeshResult<Self> {
        if vertices.len() != layout.vertex_count() {
            return Err(MeshError::InvalidMesh {
                message: format!(
                    "layout for {} points needs {} vertices, got {}",
                    layout.point_count(),
                    layout.vertex_count(),
                    vertices.len()
                ),
            });
        }
        if triangles.len() < layout.side_triangle_count() {
            return Err(MeshError::InvalidMesh {
                message: format!(
                    "layout needs at least {} side triangles, got {} triangles",
                    layout.side_triangle_count(),
                    triangles.len()
                ),
            });
        }

        let mesh = Self::from_parts(layout, vertices, triangles);
        mesh.validate()?;
        Ok(mesh)
    }

    /// Vertex layout of this mesh.
    #[inline]
    pub fn layout(&self) -> PrismLayout {
        self.layout
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Number of side-wall triangles.
    pub fn side_triangle_count(&self) -> usize {
        self.layout.side_triangle_count()
    }

    /// Number of cap triangles, both caps together.
    pub fn cap_triangle_count(&self) -> usize {
        self.triangles
            .len()
            .saturating_sub(self.side_triangle_count())
    }

    // =========================================================================
    // BUFFER ADAPTERS
    // =========================================================================

    /// Flat vertex positions `[x, y, z, x, y, z, ...]` as f32.
    pub fn points_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Flat triangle indices `[i0, i1, i2, ...]`.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Flat face buffer of `(vertex, texture)` index pairs.
    ///
    /// Each triangle contributes `[v0, t, v1, t, v2, t]`; the texture index
    /// is always [`TEXTURE_INDEX`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use prism_mesh::extrude;
    ///
    /// let mesh = extrude(&[DVec2::ZERO, DVec2::X, DVec2::Y], 1.0).unwrap();
    /// let faces = mesh.faces_flat();
    /// assert_eq!(faces.len(), mesh.triangle_count() * 6);
    /// assert!(faces.iter().skip(1).step_by(2).all(|&t| t == 0));
    /// ```
    pub fn faces_flat(&self) -> Vec<u32> {
        self.triangles
            .iter()
            .flatten()
            .flat_map(|&v| [v, TEXTURE_INDEX])
            .collect()
    }

    /// Texture coordinate buffer: the single placeholder coordinate.
    pub fn tex_coords_f32(&self) -> Vec<f32> {
        DEFAULT_TEX_COORD.to_vec()
    }

    /// Reverses the orientation of every triangle.
    ///
    /// For renderers whose front faces use the opposite convention.
    pub fn flip_winding(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
    }

    // =========================================================================
    // ANALYSIS
    // =========================================================================

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Checks that every triangle references three distinct, existing
    /// vertices.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateGeometry`] naming the first offending
    /// triangle.
    pub fn validate(&self) -> MeshResult<()> {
        let count = self.vertices.len();

        for (index, &[a, b, c]) in self.triangles.iter().enumerate() {
            if let Some(&v) = [a, b, c].iter().find(|&&v| v as usize >= count) {
                return Err(MeshError::degenerate(
                    format!("triangle references vertex {v} but the mesh has {count} vertices"),
                    index,
                ));
            }
            if a == b || b == c || a == c {
                return Err(MeshError::degenerate(
                    format!("triangle repeats a vertex: [{a}, {b}, {c}]"),
                    index,
                ));
            }
        }

        Ok(())
    }

    /// Checks that the surface is closed and consistently oriented.
    ///
    /// Every directed edge must appear exactly once and its reverse exactly
    /// once across all triangles.
    pub fn is_closed(&self) -> bool {
        let mut edges: HashMap<(u32, u32), usize> =
            HashMap::with_capacity(self.triangles.len() * 3);

        for &[a, b, c] in &self.triangles {
            for edge in [(a, b), (b, c), (c, a)] {
                *edges.entry(edge).or_insert(0) += 1;
            }
        }

        edges
            .iter()
            .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
    }

    /// Signed enclosed volume by the divergence theorem.
    ///
    /// Positive for an outward-facing closed mesh. Triangles referencing a
    /// missing vertex contribute nothing; [`PrismMesh::validate`] reports them.
    pub fn signed_volume(&self) -> f64 {
        let vertex = |i: u32| self.vertices.get(i as usize).copied();

        self.triangles
            .iter()
            .filter_map(|&[a, b, c]| Some((vertex(a)?, vertex(b)?, vertex(c)?)))
            .map(|(a, b, c)| a.dot(b.cross(c)))
            .sum::<f64>()
            / 6.0
    }
}

impl<'de> Deserialize<'de> for PrismMesh {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Parts {
            layout: PrismLayout,
            vertices: Vec<DVec3>,
            triangles: Vec<[u32; 3]>,
        }

        let parts = Parts::deserialize(deserializer)?;
        Self::try_from_parts(parts.layout, parts.vertices, parts.triangles)
            .map_err(serde::de::Error::custom)
    }
}
