//! # Knob Mesh
//!
//! Parametric mesh generation for 3D-printable rotary control knobs.
//! A [`ShapeParameters`] value goes in, a closed triangle mesh comes out.
//!
//! ## Architecture
//!
//! ```text
//! profile (2D outlines) → ops (shell, top closure, cavity, base) → Mesh → export (STL)
//! ```
//!
//! ## Pipeline
//!
//! - **Profiles**: circle, lobed/knurled, hex and D-shaft outlines sampled
//!   at a shared resolution
//! - **Shell**: boss, bottom cove, wall and roundover or dome rings
//! - **Top closure**: dome, finger dish, open ring or flat cap
//! - **Cavity**: shaft bore and nut pocket, facing inward
//! - **Base**: annulus between the shell and the cavity
//!
//! ## Usage
//!
//! ```rust
//! use knob_mesh::{generate_knob, KnobStyle, ShapeParameters};
//!
//! let params = ShapeParameters {
//!     style: KnobStyle::Lobed,
//!     lobes: 6,
//!     ..Default::default()
//! };
//! let knob = generate_knob(&params.clamped().unwrap().params).unwrap();
//!
//! let mut stl = Vec::new();
//! knob.write_stl(&mut stl).unwrap();
//! assert_eq!(stl.len(), 84 + 50 * knob.triangle_count());
//! ```

pub mod error;
pub mod export;
pub mod generate;
pub mod mesh;
pub mod ops;
pub mod params;
pub mod profile;

pub use error::MeshError;
pub use generate::{generate_knob, GeneratedKnob};
pub use mesh::Mesh;
pub use params::{
    Adjustment, Clamped, KnobStyle, NutLocation, NutSize, NutSpec, ShaftMode, ShapeParameters,
};
