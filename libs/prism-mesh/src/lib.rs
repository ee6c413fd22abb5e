//! # Prism Mesh
//!
//! Extrudes a simple 2D polygon into a closed triangular prism mesh.
//!
//! ## Architecture
//!
//! ```text
//! Polygon (CCW boundary) + depth
//!       ↓
//! predicates → triangulate (cap triangles)
//!       ↓
//! builder (layered vertices, cap + side faces)
//!       ↓
//! PrismMesh (flat vertex, face and index buffers)
//! ```
//!
//! ## Algorithms
//!
//! - **Caps**: ear clipping over a linked ring of remaining points, or a
//!   centroid fan for convex input
//! - **Sides**: two triangles per boundary edge by index arithmetic
//! - **Validation**: zero-length edge and O(n²) self-intersection checks
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use prism_mesh::extrude;
//!
//! let arrow = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(100.0, 0.0),
//!     DVec2::new(100.0, 100.0),
//!     DVec2::new(50.0, 150.0),
//!     DVec2::new(0.0, 100.0),
//! ];
//! let mesh = extrude(&arrow, 20.0).unwrap();
//! assert_eq!(mesh.vertex_count(), 12);
//! assert_eq!(mesh.triangle_count(), 16);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod mesh;
pub mod polygon;
pub mod predicates;
pub mod triangulate;

pub use builder::build_prism;
pub use self::config::ExtrudeConfig;
pub use error::{MeshError, MeshResult};
pub use mesh::{PrismLayout, PrismMesh};
pub use polygon::{Polygon, Winding};
pub use triangulate::{CapTriangulator, TriangulationStrategy};

use glam::DVec2;

/// Extrudes boundary points by `depth` with the default configuration.
///
/// This is the main entry point: ear-clipped caps, full precondition
/// validation.
///
/// # Arguments
///
/// * `points` - Counter-clockwise boundary, at least three points
/// * `depth` - Extrusion distance along +Z (negative extrudes along −Z)
///
/// # Errors
///
/// See [`build_prism`].
pub fn extrude(points: &[DVec2], depth: f64) -> MeshResult<PrismMesh> {
    let polygon = Polygon::new(points.to_vec())?;
    build_prism(&polygon, depth, &ExtrudeConfig::default())
}
