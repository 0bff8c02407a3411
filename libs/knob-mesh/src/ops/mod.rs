//! # Mesh Operations
//!
//! The stages that turn profiles into a closed knob surface, in pipeline
//! order: shell loft, top closure, shaft cavity, base cap. All of them emit
//! triangles through the ring stitcher.

pub mod base;
pub mod cap;
pub mod cavity;
pub mod shell;
pub mod stitch;

pub use base::close_base;
pub use cap::{BoreSpan, TopClosure};
pub use cavity::carve_cavity;
pub use shell::{loft_shell, OuterShell, ShellLevels};
pub use stitch::{fan, stitch, Winding};
