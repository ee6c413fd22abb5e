//! # Extrusion Configuration
//!
//! Per-call settings for [`crate::builder::build_prism`], layered on the
//! shared [`GlobalConfig`] defaults.

use crate::error::MeshResult;
use crate::triangulate::TriangulationStrategy;
use config::constants::{GlobalConfig, EPSILON_TOLERANCE, MAX_POLYGON_POINTS};
use serde::{Deserialize, Serialize};

/// Settings for one extrusion.
///
/// Deserializes with defaults for any missing field, so `{}` is a valid
/// configuration.
///
/// # Example
///
/// ```rust
/// use prism_mesh::config::ExtrudeConfig;
/// use prism_mesh::triangulate::TriangulationStrategy;
///
/// let config = ExtrudeConfig::default()
///     .with_strategy(TriangulationStrategy::CentroidFan)
///     .with_validation(false);
/// assert!(!config.validate_simple);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrudeConfig {
    /// Edges not longer than this are degenerate
    pub tolerance: f64,
    /// Largest accepted polygon
    pub max_points: usize,
    /// How the caps are triangulated
    pub strategy: TriangulationStrategy,
    /// Run the degenerate-edge and self-intersection checks before meshing
    pub validate_simple: bool,
}

impl ExtrudeConfig {
    /// Creates a configuration with checked tolerance and point limit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MeshError::Config`] when `tolerance` is negative or not
    /// finite, or `max_points` is outside the supported range.
    pub fn new(tolerance: f64, max_points: usize) -> MeshResult<Self> {
        let global = GlobalConfig::new(tolerance, max_points)?;
        Ok(Self::from(global))
    }

    /// Sets the cap triangulation strategy.
    pub fn with_strategy(mut self, strategy: TriangulationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables precondition validation.
    pub fn with_validation(mut self, validate_simple: bool) -> Self {
        self.validate_simple = validate_simple;
        self
    }

    /// Re-checks the numeric fields, for configurations that arrived through
    /// deserialization.
    pub fn checked(self) -> MeshResult<Self> {
        GlobalConfig::new(self.tolerance, self.max_points)?;
        Ok(self)
    }
}

impl From<GlobalConfig> for ExtrudeConfig {
    fn from(global: GlobalConfig) -> Self {
        Self {
            tolerance: global.tolerance,
            max_points: global.max_points,
            strategy: TriangulationStrategy::default(),
            validate_simple: true,
        }
    }
}

impl Default for ExtrudeConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_points: MAX_POLYGON_POINTS,
            strategy: TriangulationStrategy::EarClipping,
            validate_simple: true,
        }
    }
}

#[cfg(test)]
mod tests;
