//! # Knob Assembler
//!
//! Runs the pipeline for one parameter set and collects every emitted
//! triangle into a single mesh.
//!
//! ```text
//! ProfileSet → TopClosure::select → loft_shell → stitch shell
//!            → TopClosure::build → carve_cavity → close_base
//! ```

use crate::error::MeshError;
use crate::export::write_stl_binary;
use crate::mesh::Mesh;
use crate::ops::{carve_cavity, close_base, loft_shell, TopClosure};
use crate::params::ShapeParameters;
use crate::profile::ProfileSet;
use config::constants::MM3_PER_CC;
use std::io::Write;
use tracing::{debug, info};

/// A finished knob mesh together with the parameters it was built from.
#[derive(Debug, Clone)]
pub struct GeneratedKnob {
    mesh: Mesh,
    params: ShapeParameters,
    closure: TopClosure,
}

impl GeneratedKnob {
    /// The triangle mesh.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Parameters the mesh was generated from.
    #[inline]
    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// Top closure that was selected.
    #[inline]
    pub fn closure(&self) -> TopClosure {
        self.closure
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Enclosed volume in cubic centimetres.
    pub fn volume_cc(&self) -> f64 {
        self.mesh.signed_volume() / MM3_PER_CC
    }

    /// Suggested export file name, e.g. `Knob_Round_25.0mm.stl`.
    pub fn suggested_filename(&self) -> String {
        self.params.suggested_filename()
    }

    /// Writes the mesh as binary STL.
    pub fn write_stl<W: Write>(&self, writer: W) -> Result<(), MeshError> {
        write_stl_binary(&self.mesh, writer)
    }
}

/// Generates a knob mesh.
///
/// Parameters should already be range-clamped (see
/// [`ShapeParameters::clamped`]); only structurally impossible input is
/// rejected here. The result is deterministic: equal parameters give
/// bit-identical meshes.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] for non-finite or non-positive
/// dimensions, and propagates stitching errors.
///
/// # Example
///
/// ```rust
/// use knob_mesh::{generate_knob, ShapeParameters};
///
/// let knob = generate_knob(&ShapeParameters::default()).unwrap();
/// assert!(knob.volume_cc() > 0.0);
/// assert_eq!(knob.suggested_filename(), "Knob_Round_25.0mm.stl");
/// ```
pub fn generate_knob(params: &ShapeParameters) -> Result<GeneratedKnob, MeshError> {
    params.validate()?;

    let profiles = ProfileSet::build(params);
    let closure = TopClosure::select(params);
    let shell = loft_shell(params, &profiles, closure.dome_floor(&profiles));

    let segments = params.segments as usize;
    let mut mesh = Mesh::with_capacity(segments * 2 * (shell.rings.len() + 12));

    shell.stitch_into(&mut mesh)?;
    let span = closure.build(&mut mesh, params, &shell, &profiles)?;
    let outline = carve_cavity(&mut mesh, params, &profiles, span)?;
    close_base(&mut mesh, shell.bottom(), outline)?;

    debug!(
        degenerate = mesh.degenerate_triangle_count(),
        "assembled knob mesh"
    );

    let knob = GeneratedKnob {
        mesh,
        params: params.clone(),
        closure,
    };
    info!(
        triangles = knob.triangle_count(),
        volume_cc = knob.volume_cc(),
        "generated knob"
    );
    Ok(knob)
}
