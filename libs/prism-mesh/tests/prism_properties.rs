use approx::assert_relative_eq;
use glam::DVec2;
use prism_mesh::{
    build_prism, extrude, ExtrudeConfig, MeshError, Polygon, PrismMesh, TriangulationStrategy,
};

fn points(coords: &[f64]) -> Vec<DVec2> {
    coords
        .chunks_exact(2)
        .map(|xy| DVec2::new(xy[0], xy[1]))
        .collect()
}

fn arrow() -> Vec<DVec2> {
    points(&[0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 50.0, 150.0, 0.0, 100.0])
}

fn heart() -> Vec<DVec2> {
    points(&[
        0.0, 0.0, -50.0, 50.0, -100.0, 50.0, -200.0, 0.0, 0.0, -200.0, 200.0, 0.0, 100.0, 50.0,
        50.0, 50.0,
    ])
}

fn stairs() -> Vec<DVec2> {
    points(&[
        0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 200.0, 100.0, 200.0, 200.0, 175.0, 200.0, 175.0,
        125.0, 75.0, 125.0, 75.0, 25.0, 25.0, 25.0, 25.0, 100.0, 0.0, 100.0,
    ])
}

fn assert_watertight(mesh: &PrismMesh, area: f64, depth: f64) {
    let n = mesh.layout().point_count();
    assert_eq!(mesh.vertex_count(), 2 * n + 2);
    assert!(mesh.validate().is_ok());
    assert!(mesh.is_closed());
    assert_relative_eq!(mesh.signed_volume(), area * depth.abs(), max_relative = 1e-9);
}

#[test]
fn reference_polygons_extrude_to_closed_solids() {
    for (boundary, area) in [(arrow(), 12_500.0), (heart(), 52_500.0), (stairs(), 11_250.0)] {
        let n = boundary.len();
        let mesh = extrude(&boundary, 20.0).unwrap();
        assert_eq!(mesh.triangle_count(), 2 * (n - 2) + 2 * n);
        assert_watertight(&mesh, area, 20.0);
    }
}

#[test]
fn depth_sign_mirrors_the_solid() {
    let up = extrude(&heart(), 5.0).unwrap();
    let down = extrude(&heart(), -5.0).unwrap();

    assert_eq!(up.triangle_count(), down.triangle_count());
    for (u, d) in up.vertices().iter().zip(down.vertices()) {
        assert_eq!(u.x, d.x);
        assert_eq!(u.y, d.y);
        assert_eq!(u.z, -d.z);
    }
    assert_watertight(&down, 52_500.0, -5.0);
}

#[test]
fn strategies_enclose_the_same_volume() {
    let hexagon = Polygon::regular(3.0, 6);
    let ears = build_prism(&hexagon, 2.0, &ExtrudeConfig::default()).unwrap();
    let fan = build_prism(
        &hexagon,
        2.0,
        &ExtrudeConfig::default().with_strategy(TriangulationStrategy::CentroidFan),
    )
    .unwrap();

    assert_eq!(ears.triangle_count(), 16);
    assert_eq!(fan.triangle_count(), 24);
    assert!(fan.is_closed());
    assert_relative_eq!(ears.signed_volume(), fan.signed_volume(), max_relative = 1e-12);
}

#[test]
fn many_sided_polygon() {
    let circle = Polygon::regular(50.0, 360);
    let mesh = build_prism(&circle, 1.0, &ExtrudeConfig::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 2 * 358 + 720);
    assert_watertight(&mesh, circle.area(), 1.0);
}

#[test]
fn clockwise_input_fails_and_reversal_fixes_it() {
    let mut clockwise = arrow();
    clockwise[1..].reverse();

    assert!(matches!(
        extrude(&clockwise, 1.0),
        Err(MeshError::TriangulationFailure { .. })
    ));

    let fixed = Polygon::new(clockwise).unwrap().reversed();
    let mesh = build_prism(&fixed, 1.0, &ExtrudeConfig::default()).unwrap();
    assert_watertight(&mesh, 12_500.0, 1.0);
}

#[test]
fn polygon_deserializes_with_validation() {
    let polygon: Polygon = serde_json::from_str("[[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]]").unwrap();
    assert_relative_eq!(polygon.area(), 6.0);

    let short: Result<Polygon, _> = serde_json::from_str("[[0.0, 0.0], [4.0, 0.0]]");
    assert!(short.is_err());
}

#[test]
fn renderer_buffers_agree() {
    let mesh = extrude(&arrow(), 10.0).unwrap();
    let indices = mesh.indices_u32();
    let faces = mesh.faces_flat();

    assert_eq!(faces.len(), indices.len() * 2);
    for (pair, &index) in faces.chunks_exact(2).zip(&indices) {
        assert_eq!(pair, [index, 0]);
    }
    assert_eq!(mesh.points_f32().len(), mesh.vertex_count() * 3);
}
