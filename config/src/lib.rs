//! # Config Crate
//!
//! Centralized configuration constants for the knob mesh pipeline.
//! Tessellation step counts, numeric guards, clearances and the accepted
//! parameter ranges are defined here so the engine and its front ends
//! agree on a single set of values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DIAMETER, DEFAULT_SEGMENTS, RESOLUTION_OPTIONS};
//!
//! // Clamp user input to the accepted range
//! let diameter = DIAMETER.clamp(120.0);
//! assert_eq!(diameter, DIAMETER.max);
//!
//! // The default resolution is one of the selectable options
//! assert!(RESOLUTION_OPTIONS.contains(&DEFAULT_SEGMENTS));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Millimetres**: Every length is expressed in mm

pub mod constants;
