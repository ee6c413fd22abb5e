//! # Error Types
//!
//! Error types for polygon validation, triangulation and prism assembly.
//!
//! ## Error Policy
//!
//! - No partial meshes: a build either returns the full mesh or an error
//! - No internal retries or silent fallbacks between strategies
//! - Errors carry enough context (indices, remaining counts) for debugging

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while turning a polygon into a prism mesh.
///
/// ## Example
///
/// ```rust
/// use glam::DVec2;
/// use prism_mesh::{extrude, MeshError};
///
/// let line = [DVec2::ZERO, DVec2::X];
/// match extrude(&line, 1.0) {
///     Err(MeshError::InvalidPolygon { message }) => assert!(message.contains("3 points")),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// The input is not a usable polygon boundary.
    ///
    /// Raised for fewer than three points, non-finite coordinates, malformed
    /// flat coordinate buffers and self-intersecting boundaries.
    #[error("Invalid polygon: {message}")]
    InvalidPolygon {
        /// What is wrong with the boundary
        message: String,
    },

    /// Ear clipping could not make progress.
    ///
    /// Raised for clockwise or zero-area input, for non-convex input to the
    /// centroid fan, and when a full pass over the remaining points finds no
    /// valid ear.
    #[error("Triangulation failed: {message} ({remaining} points remaining)")]
    TriangulationFailure {
        /// Why the triangulation stopped
        message: String,
        /// Points left in the working ring when it stopped
        remaining: usize,
    },

    /// The boundary contains a zero-length edge.
    #[error("Degenerate geometry at point {index}: {message}")]
    DegenerateGeometry {
        /// Description of the degeneracy
        message: String,
        /// Index of the edge's first point
        index: usize,
    },

    /// Mesh buffers disagree with their vertex layout.
    ///
    /// Raised when a mesh is assembled from outside parts, for example by
    /// deserialization.
    #[error("Invalid mesh: {message}")]
    InvalidMesh {
        /// What is inconsistent
        message: String,
    },

    /// The extrusion depth is NaN or infinite.
    #[error("Invalid extrusion depth: {0}")]
    InvalidDepth(f64),

    /// The polygon exceeds the configured point limit.
    #[error("Too many points: {count} (max: {max})")]
    TooManyPoints {
        /// Number of points supplied
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid polygon error.
    pub fn invalid_polygon(message: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            message: message.into(),
        }
    }

    /// Creates a triangulation failure.
    pub fn triangulation(message: impl Into<String>, remaining: usize) -> Self {
        Self::TriangulationFailure {
            message: message.into(),
            remaining,
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>, index: usize) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
            index,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = MeshError::triangulation("no valid ear", 5);
        assert!(err.to_string().contains("no valid ear"));
        assert!(err.to_string().contains("5 points remaining"));

        let err = MeshError::degenerate("zero-length edge", 3);
        assert!(err.to_string().contains("point 3"));

        let err = MeshError::TooManyPoints { count: 10, max: 4 };
        assert_eq!(err.to_string(), "Too many points: 10 (max: 4)");
    }

    #[test]
    fn test_invalid_mesh_display() {
        let err = MeshError::InvalidMesh {
            message: "layout needs 8 vertices, got 0".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid mesh: layout needs 8 vertices, got 0");
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidTolerance(-1.0).into();
        assert!(matches!(err, MeshError::Config(_)));
        assert!(err.to_string().contains("tolerance"));
    }

    /// Test error types are Send + Sync so they can cross thread boundaries.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
