//! # Knob Handle
//!
//! WASM-friendly wrapper for a generated knob that can be transferred to
//! JavaScript.

use crate::diagnostics::Diagnostic;
use knob_mesh::{GeneratedKnob, MeshError, ShapeParameters};
use wasm_bindgen::prelude::*;

/// A generated knob: preview buffers, derived metrics and export bytes.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const knob = generate_knob(JSON.stringify({ diameter: 30, style: "Lobed" }));
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(knob.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(knob.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(knob.indices(), 1));
///
/// label.textContent = `${knob.volume_cc.toFixed(2)} cm³`;
/// download(knob.stl_bytes(), knob.suggested_filename());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct KnobHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Flat-shaded vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Binary STL export of the mesh
    stl: Vec<u8>,
    vertex_count: u32,
    triangle_count: u32,
    volume_cc: f64,
    filename: String,
    /// Parameters after range clamping
    params: ShapeParameters,
    /// Parameter adjustments made by clamping
    warnings: Vec<Diagnostic>,
}

#[wasm_bindgen]
impl KnobHandle {
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

    /// Returns the enclosed volume in cubic centimetres.
    #[wasm_bindgen(getter)]
    pub fn volume_cc(&self) -> f64 {
        self.volume_cc
    }

    /// Returns the vertex buffer as a Float32Array.
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the index buffer as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the normal buffer as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the binary STL file as a Uint8Array.
    pub fn stl_bytes(&self) -> Vec<u8> {
        self.stl.clone()
    }

    /// Returns the suggested download name.
    pub fn suggested_filename(&self) -> String {
        self.filename.clone()
    }

    /// Returns the clamped parameters as JSON, for syncing the controls.
    pub fn params_json(&self) -> String {
        serde_json::to_string(&self.params).unwrap_or_default()
    }

    /// Returns the number of clamping warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Returns a clamping warning by index.
    pub fn warning(&self, index: usize) -> Option<Diagnostic> {
        self.warnings.get(index).cloned()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }
}

impl KnobHandle {
    /// Creates a handle from a generated knob.
    pub fn from_knob(knob: &GeneratedKnob, warnings: Vec<Diagnostic>) -> Result<Self, MeshError> {
        let mesh = knob.mesh();
        let mut stl = Vec::with_capacity(84 + 50 * mesh.triangle_count());
        knob.write_stl(&mut stl)?;

        Ok(Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
            stl,
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
            volume_cc: knob.volume_cc(),
            filename: knob.suggested_filename(),
            params: knob.params().clone(),
            warnings,
        })
    }

    /// Clamping warnings as Rust values.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}
