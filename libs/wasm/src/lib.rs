//! WASM-facing entry points for polygon extrusion.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests call the `*_internal` helpers, which return
//! Rust error types instead of `JsValue`.
//!
//! ```
//! let mesh = prism_wasm::extrude_polygon_internal(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0], 1.0).unwrap();
//! assert_eq!(mesh.vertex_count(), 8);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use config::constants::MAX_POLYGON_POINTS;
use prism_mesh::{build_prism, ExtrudeConfig, MeshError, Polygon};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors surfaced at the JavaScript boundary.
#[derive(Debug, Error)]
pub enum ExtrudeError {
    /// Geometry or validation failure from the mesh builder.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The configuration string is not valid JSON for [`ExtrudeConfig`].
    #[error("Invalid configuration JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "prism-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Largest polygon the extruder accepts.
///
/// # Examples
/// ```
/// assert!(prism_wasm::max_polygon_points() >= 3);
/// ```
#[wasm_bindgen]
pub fn max_polygon_points() -> u32 {
    u32::try_from(MAX_POLYGON_POINTS).unwrap_or(u32::MAX)
}

/// Default extrusion configuration as JSON, for use as a template with
/// [`extrude_polygon_with_config`].
///
/// # Examples
/// ```
/// let json = prism_wasm::default_config_json();
/// assert!(json.contains("ear_clipping"));
/// ```
#[wasm_bindgen]
pub fn default_config_json() -> String {
    serde_json::to_string(&ExtrudeConfig::default()).unwrap_or_default()
}

/// Extrudes a polygon given as flat `[x0, y0, x1, y1, ...]` coordinates.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the polygon cannot be extruded.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = extrude_polygon(new Float64Array([0, 0, 1, 0, 1, 1, 0, 1]), 2.0);
/// // geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// ```
#[wasm_bindgen]
pub fn extrude_polygon(points: &[f64], depth: f64) -> Result<MeshHandle, JsValue> {
    extrude_polygon_internal(points, depth).map_err(to_js_error)
}

/// Extrudes a polygon with a JSON-encoded [`ExtrudeConfig`].
///
/// Missing fields take their defaults, so `"{}"` behaves like
/// [`extrude_polygon`].
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = extrude_polygon_with_config(points, 2.0, '{"strategy": "centroid_fan"}');
/// ```
#[wasm_bindgen]
pub fn extrude_polygon_with_config(
    points: &[f64],
    depth: f64,
    config_json: &str,
) -> Result<MeshHandle, JsValue> {
    parse_config(config_json)
        .and_then(|config| extrude_with_config_internal(points, depth, &config))
        .map_err(to_js_error)
}

/// Host-only helper behind [`extrude_polygon`].
///
/// # Examples
/// ```
/// let result = prism_wasm::extrude_polygon_internal(&[0.0, 0.0, 1.0, 0.0], 1.0);
/// assert!(result.is_err());
/// ```
pub fn extrude_polygon_internal(points: &[f64], depth: f64) -> Result<MeshHandle, ExtrudeError> {
    extrude_with_config_internal(points, depth, &ExtrudeConfig::default())
}

/// Host-only helper behind [`extrude_polygon_with_config`].
pub fn extrude_with_config_internal(
    points: &[f64],
    depth: f64,
    config: &ExtrudeConfig,
) -> Result<MeshHandle, ExtrudeError> {
    let polygon = Polygon::from_flat(points)?;
    let mesh = build_prism(&polygon, depth, config)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Parses and range-checks a JSON configuration.
pub fn parse_config(config_json: &str) -> Result<ExtrudeConfig, ExtrudeError> {
    let config: ExtrudeConfig = serde_json::from_str(config_json)?;
    Ok(config.checked()?)
}

fn to_js_error(err: ExtrudeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
