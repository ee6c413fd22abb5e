//! # Config Crate
//!
//! Centralized configuration constants for polygon prism extrusion.
//! Tolerances, limits and buffer placeholders are defined here so the
//! geometry crates stay free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, MAX_POLYGON_POINTS};
//!
//! // Edges shorter than the tolerance are treated as degenerate
//! let edge_length: f64 = 1e-12;
//! assert!(edge_length <= EPSILON_TOLERANCE);
//!
//! // Every prism vertex index must fit into a u32 index buffer
//! assert!((2 * MAX_POLYGON_POINTS + 2) as u64 <= u32::MAX as u64);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
