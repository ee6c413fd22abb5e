//! # Mesh Handle
//!
//! WASM-friendly wrapper for prism mesh buffers that can be transferred to
//! JavaScript.

use prism_mesh::PrismMesh;
use wasm_bindgen::prelude::*;

/// A handle to extruded mesh data that can be accessed from JavaScript.
///
/// Buffers are converted to f32/u32 once when the handle is created.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = extrude_polygon(new Float64Array([0, 0, 1, 0, 1, 1, 0, 1]), 1.0);
///
/// // Get counts
/// const vertexCount = mesh.vertex_count;
/// const triangleCount = mesh.triangle_count;
///
/// // Index-buffer renderers (Three.js)
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// // Renderers taking (vertex, texture) index pairs
/// const faces = mesh.faces();          // Uint32Array [v, 0, v, 0, v, 0, ...]
/// const texCoords = mesh.tex_coords(); // Float32Array [0, 0]
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Face buffer as [v, t, v, t, v, t, ...]
    faces: Vec<u32>,
    /// Placeholder texture coordinates
    tex_coords: Vec<f32>,
    /// Number of vertices
    vertex_count: u32,
    /// Number of triangles
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the face buffer as a Uint32Array.
    ///
    /// Format: [v, t, v, t, v, t, ...] with t always 0
    /// Length: triangle_count * 6
    #[wasm_bindgen]
    pub fn faces(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.faces[..])
    }

    /// Returns the texture coordinates as a Float32Array.
    #[wasm_bindgen]
    pub fn tex_coords(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.tex_coords[..])
    }

    /// Returns true if the mesh is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a prism mesh.
    pub fn from_mesh(mesh: &PrismMesh) -> Self {
        Self {
            vertices: mesh.points_f32(),
            indices: mesh.indices_u32(),
            faces: mesh.faces_flat(),
            tex_coords: mesh.tex_coords_f32(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    /// Vertex buffer without crossing into JavaScript.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    /// Index buffer without crossing into JavaScript.
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    /// Face buffer without crossing into JavaScript.
    pub fn face_buffer(&self) -> &[u32] {
        &self.faces
    }

    /// Texture coordinates without crossing into JavaScript.
    pub fn tex_coord_buffer(&self) -> &[f32] {
        &self.tex_coords
    }
}
