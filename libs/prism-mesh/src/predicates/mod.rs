//! # Geometric Predicates
//!
//! Pure 2D predicates shared by polygon validation and ear clipping.
//!
//! All predicates evaluate the plain floating-point formula without
//! tolerance: results are exact for inputs whose products are representable,
//! and near-collinear configurations may be misclassified by rounding.

use glam::DVec2;

/// Signed-area proxy of the triangle `(p1, p2, p3)`.
///
/// Computes `(p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)`,
/// which is twice the signed area of the triangle in a y-up frame. The result
/// is negative when `p1` lies to the right of the directed line `p2 → p3`
/// (the triangle is clockwise), positive when it lies to the left, and zero
/// when the three points are collinear.
///
/// # Examples
///
/// ```rust
/// use glam::DVec2;
/// use prism_mesh::predicates::sign;
///
/// let below = sign(DVec2::new(0.0, -10.0), DVec2::ZERO, DVec2::new(100.0, 0.0));
/// assert!(below < 0.0);
///
/// let collinear = sign(DVec2::new(0.0, 1.0), DVec2::ZERO, DVec2::new(0.0, 2.0));
/// assert_eq!(collinear, 0.0);
/// ```
#[inline]
pub fn sign(p1: DVec2, p2: DVec2, p3: DVec2) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Checks whether `pt` lies strictly inside the triangle `(v1, v2, v3)`.
///
/// The point is inside when `sign(pt, v1, v2)`, `sign(pt, v2, v3)` and
/// `sign(pt, v3, v1)` are all strictly negative (clockwise triangle) or all
/// strictly positive (counter-clockwise triangle). A zero on any edge
/// classifies the point as outside, so points on an edge or a corner never
/// count as contained. Degenerate triangles contain nothing.
///
/// # Examples
///
/// ```rust
/// use glam::DVec2;
/// use prism_mesh::predicates::point_in_triangle;
///
/// let (a, b, c) = (DVec2::new(28.0, 36.0), DVec2::new(-127.0, 300.0), DVec2::new(347.0, 147.0));
/// assert!(point_in_triangle(DVec2::new(28.0, 37.0), a, b, c));
/// assert!(!point_in_triangle(DVec2::new(28.0, 35.0), a, b, c));
/// ```
pub fn point_in_triangle(pt: DVec2, v1: DVec2, v2: DVec2, v3: DVec2) -> bool {
    let s1 = sign(pt, v1, v2);
    let s2 = sign(pt, v2, v3);
    let s3 = sign(pt, v3, v1);

    (s1 < 0.0 && s2 < 0.0 && s3 < 0.0) || (s1 > 0.0 && s2 > 0.0 && s3 > 0.0)
}

/// Returns true when the path `prev → cur → next` turns counter-clockwise.
///
/// For a counter-clockwise polygon this is a convex vertex and a candidate
/// ear tip. Collinear and clockwise turns return false.
#[inline]
pub fn is_convex_turn(prev: DVec2, cur: DVec2, next: DVec2) -> bool {
    sign(cur, prev, next) < 0.0
}

/// Signed area of a closed boundary by the shoelace formula.
///
/// Positive for counter-clockwise boundaries, negative for clockwise ones.
/// Returns 0 for fewer than three points.
///
/// # Examples
///
/// ```rust
/// use glam::DVec2;
/// use prism_mesh::predicates::signed_area;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// assert_eq!(signed_area(&square), 1.0);
/// ```
pub fn signed_area(points: &[DVec2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut twice_area = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice_area += p.x * q.y - q.x * p.y;
    }
    twice_area * 0.5
}

/// Arithmetic mean of the given points.
///
/// Returns the origin for an empty slice.
pub fn centroid(points: &[DVec2]) -> DVec2 {
    if points.is_empty() {
        return DVec2::ZERO;
    }
    let sum = points.iter().fold(DVec2::ZERO, |acc, p| acc + *p);
    sum / points.len() as f64
}

/// Checks whether the closed segments `a-b` and `c-d` share any point.
///
/// Touching endpoints and collinear overlaps count as intersections.
pub fn segments_intersect(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> bool {
    let d1 = sign(a, b, c);
    let d2 = sign(a, b, d);
    let d3 = sign(c, d, a);
    let d4 = sign(c, d, b);

    if opposite_sides(d1, d2) && opposite_sides(d3, d4) {
        return true;
    }

    (d1 == 0.0 && within_bounds(c, a, b))
        || (d2 == 0.0 && within_bounds(d, a, b))
        || (d3 == 0.0 && within_bounds(a, c, d))
        || (d4 == 0.0 && within_bounds(b, c, d))
}

#[inline]
fn opposite_sides(s: f64, t: f64) -> bool {
    (s > 0.0 && t < 0.0) || (s < 0.0 && t > 0.0)
}

/// Bounding-box test for a point already known to be collinear with `a-b`.
#[inline]
fn within_bounds(p: DVec2, a: DVec2, b: DVec2) -> bool {
    let min = a.min(b);
    let max = a.max(b);
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}

#[cfg(test)]
mod tests;
