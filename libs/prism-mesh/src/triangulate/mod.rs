//! # Cap Triangulation
//!
//! Splits a polygon's interior into triangles for the prism caps.
//!
//! Triangles are returned over *layer-local* indices: `0..n` address the
//! boundary points and `n` addresses the layer centroid. The mesh builder
//! maps these onto the bottom and top vertex layers. Every triangle is
//! counter-clockwise in the polygon plane.
//!
//! ## Strategies
//!
//! | Strategy | Triangles per cap | Input |
//! |----------|-------------------|-------|
//! | [`EarClipper`] | `n - 2` | any simple CCW polygon |
//! | [`FanTriangulator`] | `n` | convex CCW polygon |

mod ear_clip;
mod fan;
mod ring;

pub use ear_clip::EarClipper;
pub use fan::FanTriangulator;

pub(crate) use ear_clip::clip_ears;

use crate::error::MeshResult;
use crate::polygon::Polygon;
use serde::{Deserialize, Serialize};

/// Counter-clockwise triangle over layer-local indices.
pub type CapTriangle = [usize; 3];

/// Produces cap triangles for a polygon.
pub trait CapTriangulator {
    /// Triangulates the polygon interior.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MeshError::TriangulationFailure`] when the polygon
    /// cannot be triangulated by this strategy.
    fn triangulate(&self, polygon: &Polygon) -> MeshResult<Vec<CapTriangle>>;

    /// Number of triangles produced for a polygon with `point_count` points.
    fn triangle_count(&self, point_count: usize) -> usize;
}

/// Selectable cap triangulation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangulationStrategy {
    /// Ear clipping over the boundary points
    #[default]
    EarClipping,
    /// Fan from the layer centroid (convex polygons only)
    CentroidFan,
}

impl CapTriangulator for TriangulationStrategy {
    fn triangulate(&self, polygon: &Polygon) -> MeshResult<Vec<CapTriangle>> {
        match self {
            Self::EarClipping => EarClipper.triangulate(polygon),
            Self::CentroidFan => FanTriangulator.triangulate(polygon),
        }
    }

    fn triangle_count(&self, point_count: usize) -> usize {
        match self {
            Self::EarClipping => EarClipper.triangle_count(point_count),
            Self::CentroidFan => FanTriangulator.triangle_count(point_count),
        }
    }
}

/// Ear-clips a polygon using the default strategy.
///
/// # Example
///
/// ```rust
/// use prism_mesh::polygon::Polygon;
/// use prism_mesh::triangulate::triangulate;
///
/// let pentagon = Polygon::regular(1.0, 5);
/// assert_eq!(triangulate(&pentagon).unwrap().len(), 3);
/// ```
pub fn triangulate(polygon: &Polygon) -> MeshResult<Vec<CapTriangle>> {
    EarClipper.triangulate(polygon)
}
