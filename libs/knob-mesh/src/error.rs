//! # Mesh Errors
//!
//! Error types for knob mesh generation and export.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A parameter is non-finite or structurally impossible
    #[error("Invalid parameter `{field}`: {message}")]
    InvalidParameter { field: &'static str, message: String },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Adjacent rings handed to the stitcher differ in point count
    #[error("Ring size mismatch: {lower} points below, {upper} points above")]
    RingMismatch { lower: usize, upper: usize },

    /// Binary STL input is truncated or inconsistent
    #[error("Malformed STL: {message}")]
    MalformedStl { message: String },

    /// I/O failure while reading or writing a mesh file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a malformed STL error.
    pub fn malformed_stl(message: impl Into<String>) -> Self {
        Self::MalformedStl {
            message: message.into(),
        }
    }
}
