//! # Ear Clipping
//!
//! Triangulates a simple counter-clockwise polygon by repeatedly cutting off
//! ears: three consecutive remaining points `(prev, tip, next)` that turn
//! counter-clockwise and whose triangle contains no other remaining point.
//!
//! ## Complexity
//!
//! Only non-convex vertices can lie inside a candidate ear, so containment
//! tests walk the ring but only evaluate vertices flagged non-convex. With `r`
//! such vertices a full pass costs O(n·r), giving O(n²·r) in the worst case
//! and O(n) for convex input.

use super::ring::RemainingPoints;
use super::{CapTriangle, CapTriangulator};
use crate::error::{MeshError, MeshResult};
use crate::polygon::{Polygon, Winding};
use crate::predicates::{is_convex_turn, point_in_triangle, sign};
use glam::DVec2;

/// Ear-clipping cap triangulator.
///
/// Produces `n - 2` triangles over boundary indices only; the layer centroid
/// is never referenced.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use prism_mesh::polygon::Polygon;
/// use prism_mesh::triangulate::{CapTriangulator, EarClipper};
///
/// let square = Polygon::square(DVec2::ONE, false);
/// let triangles = EarClipper.triangulate(&square).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EarClipper;

impl CapTriangulator for EarClipper {
    fn triangulate(&self, polygon: &Polygon) -> MeshResult<Vec<CapTriangle>> {
        match polygon.winding() {
            Winding::CounterClockwise => clip_ears(polygon.points()),
            Winding::Clockwise => Err(MeshError::triangulation(
                "boundary is clockwise; ear clipping needs counter-clockwise points",
                polygon.len(),
            )),
            Winding::Degenerate => Err(MeshError::triangulation(
                "boundary encloses zero area",
                polygon.len(),
            )),
        }
    }

    fn triangle_count(&self, point_count: usize) -> usize {
        point_count.saturating_sub(2)
    }
}

/// Clips ears until two points remain.
///
/// Does not check the winding. A boundary with no clippable ear (for example
/// a clockwise one) fails after one full pass without progress.
pub(crate) fn clip_ears(points: &[DVec2]) -> MeshResult<Vec<CapTriangle>> {
    let n = points.len();
    if n < 3 {
        return Err(MeshError::invalid_polygon(format!(
            "polygon needs at least 3 points, got {n}"
        )));
    }

    let mut ring = RemainingPoints::new(n);
    let mut reflex: Vec<bool> = (0..n)
        .map(|i| !is_convex_turn(points[ring.prev(i)], points[i], points[ring.next(i)]))
        .collect();

    let mut triangles = Vec::with_capacity(n - 2);
    let mut tip = 0;
    let mut misses = 0;

    while ring.len() > 2 {
        if misses >= ring.len() {
            return Err(MeshError::triangulation(
                "full pass over the remaining points found no valid ear",
                ring.len(),
            ));
        }

        let prev = ring.prev(tip);
        let next = ring.next(tip);

        if !reflex[tip] && !contains_reflex_point(points, &ring, &reflex, prev, tip, next) {
            triangles.push([prev, tip, next]);
            ring.remove(tip);

            // Only the two neighbours change their turn direction
            if ring.len() > 2 {
                reflex[prev] = !is_convex_turn(points[ring.prev(prev)], points[prev], points[next]);
                reflex[next] = !is_convex_turn(points[prev], points[next], points[ring.next(next)]);
            }

            tip = prev;
            misses = 0;
        } else {
            tip = next;
            misses += 1;
        }
    }

    Ok(triangles)
}

/// Checks whether any remaining non-convex point other than the ear's own
/// corners blocks the ear `(prev, tip, next)`.
///
/// A point blocks when it lies strictly inside the ear or on the open
/// diagonal `prev → next`; clipping past the latter would leave a ring that
/// touches itself.
fn contains_reflex_point(
    points: &[DVec2],
    ring: &RemainingPoints,
    reflex: &[bool],
    prev: usize,
    tip: usize,
    next: usize,
) -> bool {
    let (a, b, c) = (points[prev], points[tip], points[next]);

    ring.iter_from(ring.next(next))
        .take_while(|&v| v != prev)
        .filter(|&v| reflex[v])
        .any(|v| point_in_triangle(points[v], a, b, c) || on_open_segment(points[v], c, a))
}

/// True when `p` lies on segment `a-b`, excluding its endpoints.
fn on_open_segment(p: DVec2, a: DVec2, b: DVec2) -> bool {
    sign(p, a, b) == 0.0
        && p != a
        && p != b
        && p.cmpge(a.min(b)).all()
        && p.cmple(a.max(b)).all()
}
