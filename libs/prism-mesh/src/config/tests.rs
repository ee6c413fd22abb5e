use super::*;
use crate::error::MeshError;

#[test]
fn test_default_matches_global() {
    let config = ExtrudeConfig::default();
    assert_eq!(config, ExtrudeConfig::from(GlobalConfig::default()));
    assert_eq!(config.strategy, TriangulationStrategy::EarClipping);
    assert!(config.validate_simple);
}

#[test]
fn test_new_validates() {
    let config = ExtrudeConfig::new(1e-6, 64).unwrap();
    assert_eq!(config.max_points, 64);

    assert!(matches!(
        ExtrudeConfig::new(f64::NAN, 64),
        Err(MeshError::Config(_))
    ));
    assert!(matches!(
        ExtrudeConfig::new(1e-6, 2),
        Err(MeshError::Config(_))
    ));
}

#[test]
fn test_builders() {
    let config = ExtrudeConfig::default()
        .with_strategy(TriangulationStrategy::CentroidFan)
        .with_validation(false);
    assert_eq!(config.strategy, TriangulationStrategy::CentroidFan);
    assert!(!config.validate_simple);
}

#[test]
fn test_deserialize_with_defaults() {
    let config: ExtrudeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ExtrudeConfig::default());

    let config: ExtrudeConfig =
        serde_json::from_str(r#"{"strategy": "centroid_fan", "max_points": 16}"#).unwrap();
    assert_eq!(config.strategy, TriangulationStrategy::CentroidFan);
    assert_eq!(config.max_points, 16);
    assert_eq!(config.tolerance, EPSILON_TOLERANCE);
}

#[test]
fn test_checked_rejects_bad_values() {
    let config: ExtrudeConfig = serde_json::from_str(r#"{"tolerance": -1.0}"#).unwrap();
    assert!(config.checked().is_err());
    assert!(ExtrudeConfig::default().checked().is_ok());
}
