//! WASM-facing entry points for the knob generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests call `generate_knob_internal`, which returns
//! Rust diagnostics instead of a `JsValue`.
//!
//! ```
//! let knob = knob_wasm::generate_knob_internal(r#"{ "diameter": 30 }"#).unwrap();
//! assert!(knob.triangle_count() > 0);
//! ```

use config::constants::DEFAULT_SEGMENTS;
use knob_mesh::{NutSize, ShapeParameters};
use std::panic::{self, AssertUnwindSafe};
use wasm_bindgen::prelude::*;

mod diagnostics;
mod mesh_handle;

pub use diagnostics::{Diagnostic, Severity};
pub use mesh_handle::KnobHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "knob-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default number of samples around each ring.
///
/// # Examples
/// ```
/// let segments = knob_wasm::default_segments();
/// assert_eq!(segments, 64);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Returns the nut sizes offered by the nut trap, as a JSON array of labels.
#[wasm_bindgen]
pub fn nut_sizes() -> String {
    let labels: Vec<&str> = NutSize::ALL.iter().map(|size| size.label()).collect();
    serde_json::to_string(&labels).unwrap_or_default()
}

/// Clamps the parameters and generates a knob.
///
/// Out-of-range values never fail: they are adjusted and reported through
/// the handle's warnings.
///
/// # Errors
/// Returns a JavaScript error string when the JSON cannot be read or the
/// mesh cannot be built.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const knob = generate_knob(JSON.stringify(params));
/// //   for (let i = 0; i < knob.warning_count(); i++) {
/// //     console.warn(knob.warning(i).message());
/// //   }
/// // } catch (error) {
/// //   console.error("Generation failed:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn generate_knob(params_json: &str) -> Result<KnobHandle, JsValue> {
    generate_knob_internal(params_json).map_err(|diagnostics| {
        let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
        JsValue::from_str(&messages.join("\n"))
    })
}

/// Internal implementation of [`generate_knob`].
///
/// Returns diagnostics on error for better error reporting.
pub fn generate_knob_internal(params_json: &str) -> Result<KnobHandle, Vec<Diagnostic>> {
    let raw: ShapeParameters = serde_json::from_str(params_json)
        .map_err(|err| vec![Diagnostic::error(format!("Invalid parameters: {err}"))])?;

    let clamped = raw.clamped().map_err(|err| vec![Diagnostic::from(err)])?;
    let warnings: Vec<Diagnostic> = clamped.adjustments.iter().map(Diagnostic::from).collect();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        knob_mesh::generate_knob(&clamped.params)
    }))
    .map_err(|payload| {
        vec![Diagnostic::error(format!(
            "Generation failed: {}",
            panic_message(payload.as_ref())
        ))]
    })?;

    let knob = outcome.map_err(|err| vec![Diagnostic::from(err)])?;
    KnobHandle::from_knob(&knob, warnings).map_err(|err| vec![Diagnostic::from(err)])
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
