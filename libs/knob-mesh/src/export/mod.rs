//! # Export
//!
//! Mesh file formats for slicers and other downstream tools.

pub mod stl;

pub use stl::{read_stl_binary, write_stl_binary};
