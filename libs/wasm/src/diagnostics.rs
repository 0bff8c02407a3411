//! WASM-compatible diagnostic types.
//!
//! Range clamping becomes warnings; failed generation becomes a single
//! error. Neither ever panics across the boundary.

use knob_mesh::{Adjustment, MeshError};
use std::fmt;
use wasm_bindgen::prelude::*;

/// Diagnostic severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const warning = knob.warning(0);
/// // console.log(warning.field(), warning.message());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    field: Option<String>,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns the parameter the diagnostic refers to, if any.
    pub fn field(&self) -> Option<String> {
        self.field.clone()
    }
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a warning attached to a parameter.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{label}: {}", self.message)
    }
}

impl From<&Adjustment> for Diagnostic {
    fn from(adjustment: &Adjustment) -> Self {
        Self::warning(adjustment.field, adjustment.to_string())
    }
}

impl From<MeshError> for Diagnostic {
    fn from(err: MeshError) -> Self {
        let field = match &err {
            MeshError::InvalidParameter { field, .. } => Some(field.to_string()),
            _ => None,
        };
        Self {
            severity: Severity::Error,
            message: format!("Generation failed: {err}"),
            field,
        }
    }
}
