use super::*;
use approx::assert_relative_eq;

fn p(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

// =============================================================================
// SIGN
// =============================================================================

#[test]
fn test_sign_reference_points() {
    let a = p(0.0, 0.0);
    let b = p(100.0, 0.0);
    let c = p(0.0, 10.0);
    let d = p(0.0, -10.0);
    let e = p(100.0, 100.0);
    let f = p(3000.0, -1000.0);
    let g = p(3000.0, 1000.0);

    assert!(!(sign(c, a, b) < 0.0));
    assert!(sign(d, a, b) < 0.0);
    assert!(!(sign(c, a, e) < 0.0));
    assert!(sign(d, a, e) < 0.0);
    assert!(!(sign(g, a, b) < 0.0));
    assert!(sign(f, a, b) < 0.0);
}

#[test]
fn test_sign_collinear_is_zero() {
    assert_eq!(sign(p(0.0, 1.0), p(0.0, 0.0), p(0.0, 2.0)), 0.0);
    assert_eq!(sign(p(1.0, 1.0), p(2.0, 2.0), p(-3.0, -3.0)), 0.0);
}

#[test]
fn test_sign_antisymmetric_under_swaps() {
    let (a, b, c) = (p(1.5, -2.0), p(7.0, 3.25), p(-4.0, 9.0));
    let s = sign(a, b, c);
    assert_ne!(s, 0.0);
    assert_relative_eq!(sign(b, a, c), -s);
    assert_relative_eq!(sign(a, c, b), -s);
    assert_relative_eq!(sign(c, b, a), -s);
}

#[test]
fn test_sign_invariant_under_rotation_of_arguments() {
    let (a, b, c) = (p(1.5, -2.0), p(7.0, 3.25), p(-4.0, 9.0));
    let s = sign(a, b, c);
    assert_relative_eq!(sign(b, c, a), s);
    assert_relative_eq!(sign(c, a, b), s);
}

#[test]
fn test_sign_is_twice_signed_area() {
    // Counter-clockwise unit right triangle has area 0.5
    assert_eq!(sign(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)), 1.0);
}

// =============================================================================
// POINT IN TRIANGLE
// =============================================================================

#[test]
fn test_point_in_triangle_reference_triangle() {
    let v1 = p(28.0, 36.0);
    let v2 = p(-127.0, 300.0);
    let v3 = p(347.0, 147.0);

    let inside = [p(-20.0, 255.0), p(28.0, 37.0), p(187.5, 147.0), p(346.0, 147.0)];
    let outside = [
        p(0.0, 1.0),
        p(0.0, 0.0),
        p(-1000.0, -1000.0),
        p(28.0, 35.0),
        p(27.0, 37.0),
        p(29.0, 36.0),
    ];

    for (i, pt) in inside.iter().enumerate() {
        assert!(point_in_triangle(*pt, v1, v2, v3), "point {i} {pt} was outside the triangle");
    }
    for (i, pt) in outside.iter().enumerate() {
        assert!(!point_in_triangle(*pt, v1, v2, v3), "point {i} {pt} was inside the triangle");
    }
}

#[test]
fn test_point_in_triangle_both_windings() {
    let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    let centre = p(1.0, 1.0);
    assert!(point_in_triangle(centre, a, b, c));
    assert!(point_in_triangle(centre, a, c, b));
}

#[test]
fn test_point_in_triangle_excludes_boundary() {
    let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    // Edge midpoints
    assert!(!point_in_triangle(p(2.0, 0.0), a, b, c));
    assert!(!point_in_triangle(p(2.0, 2.0), a, b, c));
    assert!(!point_in_triangle(p(0.0, 2.0), a, b, c));
    // Corners
    assert!(!point_in_triangle(a, a, b, c));
    assert!(!point_in_triangle(b, a, b, c));
}

#[test]
fn test_point_in_degenerate_triangle() {
    let (a, b, c) = (p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0));
    assert!(!point_in_triangle(p(1.0, 1.0), a, b, c));
    assert!(!point_in_triangle(p(0.5, 0.7), a, b, c));
}

// =============================================================================
// CONVEXITY / AREA / CENTROID
// =============================================================================

#[test]
fn test_is_convex_turn() {
    assert!(is_convex_turn(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)));
    assert!(!is_convex_turn(p(1.0, 1.0), p(1.0, 0.0), p(0.0, 0.0)));
    assert!(!is_convex_turn(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)));
}

#[test]
fn test_signed_area_orientation() {
    let ccw = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 3.0), p(0.0, 3.0)];
    let cw: Vec<DVec2> = ccw.iter().rev().copied().collect();
    assert_relative_eq!(signed_area(&ccw), 6.0);
    assert_relative_eq!(signed_area(&cw), -6.0);
    assert_eq!(signed_area(&ccw[..2]), 0.0);
}

#[test]
fn test_centroid() {
    let square = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
    assert_eq!(centroid(&square), p(1.0, 1.0));
    assert_eq!(centroid(&[]), DVec2::ZERO);
}

// =============================================================================
// SEGMENT INTERSECTION
// =============================================================================

#[test]
fn test_segments_crossing() {
    assert!(segments_intersect(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0)));
}

#[test]
fn test_segments_touching_endpoint() {
    assert!(segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)));
    // T-junction: endpoint on the interior of the other segment
    assert!(segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(1.0, 5.0)));
}

#[test]
fn test_segments_disjoint() {
    assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)));
    assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0), p(3.0, -5.0)));
}

#[test]
fn test_segments_collinear() {
    // Overlapping
    assert!(segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)));
    // Same line, apart
    assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0)));
}
