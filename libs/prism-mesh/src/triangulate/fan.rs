//! # Centroid Fan
//!
//! Cheap cap triangulation for convex polygons: one triangle per boundary
//! edge, all sharing the layer centroid.

use super::{CapTriangle, CapTriangulator};
use crate::error::{MeshError, MeshResult};
use crate::polygon::{Polygon, Winding};
use crate::predicates::sign;

/// Fans each cap from its centroid vertex.
///
/// Produces `n` triangles per cap, each `(i, i + 1, centroid)` where the
/// centroid is the layer-local index `n`. Only valid for convex
/// counter-clockwise polygons; anything else is rejected rather than
/// producing overlapping triangles.
///
/// # Example
///
/// ```rust
/// use prism_mesh::polygon::Polygon;
/// use prism_mesh::triangulate::{CapTriangulator, FanTriangulator};
///
/// let hexagon = Polygon::regular(1.0, 6);
/// let triangles = FanTriangulator.triangulate(&hexagon).unwrap();
/// assert_eq!(triangles.len(), 6);
/// assert_eq!(triangles[5], [5, 0, 6]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanTriangulator;

impl CapTriangulator for FanTriangulator {
    fn triangulate(&self, polygon: &Polygon) -> MeshResult<Vec<CapTriangle>> {
        let n = polygon.len();
        if polygon.winding() != Winding::CounterClockwise {
            return Err(MeshError::triangulation(
                "centroid fan needs a counter-clockwise boundary with positive area",
                n,
            ));
        }

        let points = polygon.points();
        for i in 0..n {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            // Collinear runs are fine, clockwise turns are not
            if sign(points[i], prev, next) > 0.0 {
                return Err(MeshError::triangulation(
                    format!("centroid fan needs a convex polygon; point {i} is reflex"),
                    n,
                ));
            }
        }

        Ok((0..n).map(|i| [i, (i + 1) % n, n]).collect())
    }

    fn triangle_count(&self, point_count: usize) -> usize {
        point_count
    }
}
