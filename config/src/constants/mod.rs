//! Centralized configuration values shared across the extrusion workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used when checking polygon edges for degeneracy.
///
/// Two consecutive boundary points closer than this distance form a
/// zero-length edge.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Maximum number of boundary points accepted for a single polygon.
///
/// A prism over `n` points references `2n + 2` vertices, so the limit keeps
/// every index representable in a `u32` index buffer with plenty of headroom.
///
/// # Examples
/// ```
/// use config::constants::MAX_POLYGON_POINTS;
/// assert!(MAX_POLYGON_POINTS >= 1_000);
/// ```
pub const MAX_POLYGON_POINTS: usize = 1 << 20;

/// Smallest polygon that can be triangulated.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_POINTS;
/// assert_eq!(MIN_POLYGON_POINTS, 3);
/// ```
pub const MIN_POLYGON_POINTS: usize = 3;

/// Placeholder texture coordinate shared by every face corner.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TEX_COORD;
/// assert_eq!(DEFAULT_TEX_COORD, [0.0, 0.0]);
/// ```
pub const DEFAULT_TEX_COORD: [f32; 2] = [0.0, 0.0];

/// Texture index written next to every vertex index in the face buffer.
///
/// Always points at [`DEFAULT_TEX_COORD`].
///
/// # Examples
/// ```
/// use config::constants::TEXTURE_INDEX;
/// assert_eq!(TEXTURE_INDEX, 0);
/// ```
pub const TEXTURE_INDEX: u32 = 0;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Edge-length tolerance propagated into polygon validation.
    pub tolerance: f64,
    /// Upper bound on polygon size.
    pub max_points: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and point limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 4096).expect("valid config");
    /// assert_eq!(cfg.max_points, 4096);
    /// ```
    pub fn new(tolerance: f64, max_points: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_POLYGON_POINTS..=MAX_POLYGON_POINTS).contains(&max_points) {
            return Err(ConfigError::InvalidPointLimit(max_points));
        }
        Ok(Self {
            tolerance,
            max_points,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_points: MAX_POLYGON_POINTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the point limit is below a triangle or above
    /// [`MAX_POLYGON_POINTS`].
    InvalidPointLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and non-negative: {value}")
            }
            ConfigError::InvalidPointLimit(value) => {
                write!(
                    f,
                    "max_points must be within {MIN_POLYGON_POINTS}..={MAX_POLYGON_POINTS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
