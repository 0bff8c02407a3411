//! # Shape Parameters
//!
//! The immutable configuration aggregate consumed by the generator, plus the
//! range clamping applied by front ends before a generation request.
//!
//! Enumerations serialize with the names shown on the control surface, so a
//! panel can post its state as JSON directly:
//!
//! ```rust
//! use knob_mesh::{KnobStyle, ShaftMode, ShapeParameters};
//!
//! let json = r#"{ "diameter": 30.0, "style": "Lobed", "shaft_mode": "Nut Trap" }"#;
//! let params: ShapeParameters = serde_json::from_str(json).unwrap();
//! assert_eq!(params.style, KnobStyle::Lobed);
//! assert_eq!(params.shaft_mode, ShaftMode::NutTrap);
//! assert_eq!(params.height, 15.0);
//! ```

mod clamp;
mod nut;


pub use clamp::{Adjustment, Clamped};
pub use nut::{NutSize, NutSpec};

use crate::error::MeshError;
use config::constants::{
    DEFAULT_BOSS_DIAMETER, DEFAULT_DIAMETER, DEFAULT_HEIGHT, DEFAULT_HOLE_DEPTH,
    DEFAULT_LOBES, DEFAULT_LOBE_DEPTH, DEFAULT_SEGMENTS, DEFAULT_SHAFT_DIAMETER,
    DEFAULT_TOP_FILLET, DISH_DIAMETER_DEFAULT_RATIO, M3_BOLT_CLEARANCE, MIN_BOSS_HEIGHT,
    MIN_SEGMENTS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body profile family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KnobStyle {
    /// Circular body, optionally knurled with fine ridges.
    #[default]
    Round,
    /// Body with a small number of large lobes.
    Lobed,
}

impl fmt::Display for KnobStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnobStyle::Round => f.write_str("Round"),
            KnobStyle::Lobed => f.write_str("Lobed"),
        }
    }
}

/// How the knob attaches to its shaft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShaftMode {
    /// Round bore with one flat.
    #[default]
    #[serde(rename = "D-Shaft")]
    DShaft,
    /// Plain round bore.
    #[serde(rename = "Round Hole")]
    RoundHole,
    /// Hex pocket for a captive nut with a bolt clearance bore.
    #[serde(rename = "Nut Trap")]
    NutTrap,
}

/// Face the nut trap opens towards.
///
/// The pocket itself is always carved at the bottom; `Top` only changes the
/// shape of the top opening to the hex profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NutLocation {
    #[default]
    Bottom,
    Top,
}

/// Immutable shape description of one knob (lengths in millimetres).
///
/// Construct once per generation request, usually through
/// [`ShapeParameters::clamped`], and pass it by reference to
/// [`generate_knob`](crate::generate_knob).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParameters {
    /// Overall body diameter.
    pub diameter: f64,
    /// Body height above the boss.
    pub height: f64,
    /// Body profile family.
    pub style: KnobStyle,
    /// Lobe count (Lobed only).
    pub lobes: u32,
    /// Lobe protrusion ratio in `[0, 1]` (Lobed only).
    pub lobe_depth: f64,
    /// Knurl ridge count, 0 for a smooth body (Round only).
    pub knurl_ridges: u32,
    /// Horizontal inset of the top roundover.
    pub top_fillet_radius: f64,
    /// Vertical extent of the top roundover.
    pub top_fillet_height: f64,
    /// Horizontal inset of the bottom cove.
    pub bottom_fillet_radius: f64,
    /// Vertical extent of the bottom cove.
    pub bottom_fillet_height: f64,
    /// Replace the top roundover with a hemispherical cap.
    pub dome: bool,
    /// Depth of the finger dish carved into the top.
    pub recess_depth: f64,
    /// Dish diameter; `None` means 0.8 x body diameter.
    pub recess_diameter: Option<f64>,
    /// Height of the standoff boss under the body.
    pub boss_height: f64,
    /// Diameter of the standoff boss.
    pub boss_diameter: f64,
    /// Shaft attachment.
    pub shaft_mode: ShaftMode,
    /// Bore diameter (bolt clearance for nut traps); `None` picks the default.
    pub shaft_diameter: Option<f64>,
    /// Depth of a blind bore measured from z = 0.
    pub hole_depth: f64,
    /// Run the bore through the top.
    pub through_hole: bool,
    /// Nut captured by the trap.
    pub nut_size: NutSize,
    /// Face the trap opens towards.
    pub nut_location: NutLocation,
    /// Points per profile.
    pub segments: u32,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_DIAMETER,
            height: DEFAULT_HEIGHT,
            style: KnobStyle::Round,
            lobes: DEFAULT_LOBES,
            lobe_depth: DEFAULT_LOBE_DEPTH,
            knurl_ridges: 0,
            top_fillet_radius: DEFAULT_TOP_FILLET,
            top_fillet_height: DEFAULT_TOP_FILLET,
            bottom_fillet_radius: 0.0,
            bottom_fillet_height: 0.0,
            dome: false,
            recess_depth: 0.0,
            recess_diameter: None,
            boss_height: 0.0,
            boss_diameter: DEFAULT_BOSS_DIAMETER,
            shaft_mode: ShaftMode::DShaft,
            shaft_diameter: None,
            hole_depth: DEFAULT_HOLE_DEPTH,
            through_hole: false,
            nut_size: NutSize::M3,
            nut_location: NutLocation::Bottom,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl ShapeParameters {
    /// Default bore diameter for a shaft mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knob_mesh::{NutSize, ShaftMode, ShapeParameters};
    ///
    /// assert_eq!(ShapeParameters::default_shaft_diameter(ShaftMode::NutTrap, NutSize::M3), 3.2);
    /// assert_eq!(ShapeParameters::default_shaft_diameter(ShaftMode::NutTrap, NutSize::M4), 6.0);
    /// assert_eq!(ShapeParameters::default_shaft_diameter(ShaftMode::DShaft, NutSize::M3), 6.0);
    /// ```
    pub fn default_shaft_diameter(mode: ShaftMode, nut: NutSize) -> f64 {
        match (mode, nut) {
            (ShaftMode::NutTrap, NutSize::M3) => M3_BOLT_CLEARANCE,
            _ => DEFAULT_SHAFT_DIAMETER,
        }
    }

    /// Resolved bore diameter.
    pub fn shaft_diameter(&self) -> f64 {
        self.shaft_diameter
            .unwrap_or_else(|| Self::default_shaft_diameter(self.shaft_mode, self.nut_size))
    }

    /// Resolved dish diameter.
    pub fn recess_diameter(&self) -> f64 {
        self.recess_diameter
            .unwrap_or(self.diameter * DISH_DIAMETER_DEFAULT_RATIO)
    }

    /// Nut dimensions when the shaft mode is a nut trap.
    pub fn nut(&self) -> Option<NutSpec> {
        (self.shaft_mode == ShaftMode::NutTrap).then(|| self.nut_size.spec())
    }

    /// True when the top of the knob is left open over the bore.
    pub fn is_top_open(&self) -> bool {
        self.through_hole
            || (self.shaft_mode == ShaftMode::NutTrap && self.nut_location == NutLocation::Top)
    }

    /// Depth of a blind bore; nut traps always bore the full body height.
    pub fn effective_hole_depth(&self) -> f64 {
        match self.shaft_mode {
            ShaftMode::NutTrap => self.height,
            _ => self.hole_depth,
        }
    }

    /// True when a boss is tall enough to be built.
    pub fn has_boss(&self) -> bool {
        self.boss_height > MIN_BOSS_HEIGHT
    }

    /// True when the bottom cove is requested.
    pub fn has_bottom_fillet(&self) -> bool {
        self.bottom_fillet_radius > 0.0 || self.bottom_fillet_height > 0.0
    }

    /// True when the top roundover applies (never together with a dome).
    pub fn has_top_fillet(&self) -> bool {
        !self.dome && (self.top_fillet_radius > 0.0 || self.top_fillet_height > 0.0)
    }

    /// True when a finger dish is carved (never together with a dome).
    pub fn has_dish(&self) -> bool {
        !self.dome && self.recess_depth > 0.0
    }

    /// Suggested export file name encoding style and diameter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knob_mesh::ShapeParameters;
    ///
    /// assert_eq!(ShapeParameters::default().suggested_filename(), "Knob_Round_25.0mm.stl");
    /// ```
    pub fn suggested_filename(&self) -> String {
        format!("Knob_{}_{:?}mm.stl", self.style, self.diameter)
    }

    /// Checks the invariants the generator relies on.
    ///
    /// This does not clamp ranges; it only rejects input the algorithms cannot
    /// process at all (non-finite numbers, non-positive envelope, fewer than
    /// three segments).
    pub fn validate(&self) -> Result<(), MeshError> {
        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(MeshError::invalid_parameter(
                    field,
                    format!("must be finite, got {value}"),
                ));
            }
        }

        if self.diameter <= 0.0 {
            return Err(MeshError::invalid_parameter("diameter", "must be positive"));
        }
        if self.height <= 0.0 {
            return Err(MeshError::invalid_parameter("height", "must be positive"));
        }
        if self.shaft_diameter() <= 0.0 {
            return Err(MeshError::invalid_parameter("shaft_diameter", "must be positive"));
        }
        if self.segments < MIN_SEGMENTS {
            return Err(MeshError::invalid_parameter(
                "segments",
                format!("must be at least {MIN_SEGMENTS}, got {}", self.segments),
            ));
        }
        if self.style == KnobStyle::Lobed && self.lobes == 0 {
            return Err(MeshError::invalid_parameter("lobes", "must be at least 1"));
        }

        Ok(())
    }

    fn float_fields(&self) -> [(&'static str, f64); 13] {
        [
            ("diameter", self.diameter),
            ("height", self.height),
            ("lobe_depth", self.lobe_depth),
            ("top_fillet_radius", self.top_fillet_radius),
            ("top_fillet_height", self.top_fillet_height),
            ("bottom_fillet_radius", self.bottom_fillet_radius),
            ("bottom_fillet_height", self.bottom_fillet_height),
            ("recess_depth", self.recess_depth),
            ("recess_diameter", self.recess_diameter()),
            ("boss_height", self.boss_height),
            ("boss_diameter", self.boss_diameter),
            ("shaft_diameter", self.shaft_diameter()),
            ("hole_depth", self.hole_depth),
        ]
    }
}
