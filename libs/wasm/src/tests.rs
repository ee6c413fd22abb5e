//! Tests for the WASM-facing extrusion helpers.

use super::*;
use prism_mesh::TriangulationStrategy;

const SQUARE: [f64; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];

/// Tests that extruding a unit square produces the expected buffers.
///
/// # Examples
/// ```
/// use prism_wasm::extrude_polygon_internal;
/// let mesh = extrude_polygon_internal(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0], 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
#[test]
fn extrude_square_produces_prism() {
    let mesh = extrude_polygon_internal(&SQUARE, 1.0).expect("extrusion succeeds");

    assert_eq!(mesh.vertex_count(), 10);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.vertex_buffer().len(), 30); // 10 vertices * 3 components
    assert_eq!(mesh.index_buffer().len(), 36); // 12 triangles * 3 indices
    assert_eq!(mesh.face_buffer().len(), 72); // 12 triangles * 3 (vertex, texture) pairs
    assert_eq!(mesh.tex_coord_buffer(), &[0.0, 0.0]);
    assert!(!mesh.is_empty());
}

/// Tests that mesh buffers contain valid data.
#[test]
fn extrude_buffers_valid() {
    let mesh = extrude_polygon_internal(&SQUARE, -4.0).expect("extrusion succeeds");

    for &v in mesh.vertex_buffer() {
        assert!(v.is_finite(), "Vertex value should be finite");
    }

    let vertex_count = mesh.vertex_count();
    for &idx in mesh.index_buffer() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }

    // Face buffer interleaves the same indices with texture index 0
    let from_faces: Vec<u32> = mesh.face_buffer().iter().step_by(2).copied().collect();
    assert_eq!(from_faces, mesh.index_buffer());
}

/// Ensures invalid input surfaces explicit errors.
#[test]
fn extrude_rejects_invalid_input() {
    let err = extrude_polygon_internal(&[0.0, 0.0, 1.0, 0.0], 1.0).unwrap_err();
    assert!(matches!(err, ExtrudeError::Mesh(MeshError::InvalidPolygon { .. })));

    let err = extrude_polygon_internal(&[0.0, 0.0, 1.0], 1.0).unwrap_err();
    assert!(err.to_string().contains("odd length"));

    let err = extrude_polygon_internal(&SQUARE, f64::NAN).unwrap_err();
    assert!(matches!(err, ExtrudeError::Mesh(MeshError::InvalidDepth(_))));
}

/// Clockwise input fails instead of hanging.
#[test]
fn extrude_rejects_clockwise() {
    let clockwise = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0];
    let err = extrude_polygon_internal(&clockwise, 1.0).unwrap_err();
    assert!(matches!(
        err,
        ExtrudeError::Mesh(MeshError::TriangulationFailure { .. })
    ));
}

#[test]
fn parse_config_applies_defaults() {
    let config = parse_config("{}").expect("empty object is valid");
    assert_eq!(config, ExtrudeConfig::default());

    let config = parse_config(r#"{"strategy": "centroid_fan"}"#).expect("valid strategy");
    assert_eq!(config.strategy, TriangulationStrategy::CentroidFan);
}

#[test]
fn parse_config_rejects_bad_input() {
    assert!(matches!(
        parse_config("not json"),
        Err(ExtrudeError::ConfigJson(_))
    ));
    assert!(matches!(
        parse_config(r#"{"max_points": 1}"#),
        Err(ExtrudeError::Mesh(MeshError::Config(_)))
    ));
}

#[test]
fn extrude_with_fan_config() {
    let config = parse_config(r#"{"strategy": "centroid_fan"}"#).expect("valid config");
    let mesh = extrude_with_config_internal(&SQUARE, 1.0, &config).expect("extrusion succeeds");
    assert_eq!(mesh.triangle_count(), 16);
}

#[test]
fn default_config_round_trips() {
    let config = parse_config(&default_config_json()).expect("default config parses");
    assert_eq!(config, ExtrudeConfig::default());
}
