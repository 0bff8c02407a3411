//! Range clamping performed at the boundary before generation.

use super::{KnobStyle, ShaftMode, ShapeParameters};
use crate::error::MeshError;
use config::constants::{
    snap_to_option, Bounds, BOLT_CLEARANCE, BOSS_DIAMETER_MIN, BOSS_HEIGHT, DIAMETER,
    DISH_DEPTH, DISH_DIAMETER_MAX_RATIO, DISH_DIAMETER_MIN, FILLET, HEIGHT, HOLE_DEPTH_MIN,
    KNURL_RIDGE_OPTIONS, LOBES_MAX, LOBES_MIN, LOBE_DEPTH, RESOLUTION_OPTIONS, SHAFT_DIAMETER,
};
use std::fmt;
use tracing::warn;

/// One parameter value changed by clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    /// Field name as it appears in the serialized parameters.
    pub field: &'static str,
    /// Value supplied by the caller.
    pub requested: f64,
    /// Value the generator will use.
    pub applied: f64,
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} adjusted from {} to {}",
            self.field, self.requested, self.applied
        )
    }
}

/// Parameters after clamping, with a record of every change.
#[derive(Debug, Clone, PartialEq)]
pub struct Clamped {
    /// Range-clamped parameters, ready for generation.
    pub params: ShapeParameters,
    /// Changes applied, in field order.
    pub adjustments: Vec<Adjustment>,
}

#[derive(Default)]
struct Clamper {
    adjustments: Vec<Adjustment>,
}

impl Clamper {
    fn record(&mut self, field: &'static str, requested: f64, applied: f64) {
        if requested != applied {
            warn!(field, requested, applied, "parameter clamped");
            self.adjustments.push(Adjustment {
                field,
                requested,
                applied,
            });
        }
    }

    fn fit(&mut self, field: &'static str, value: f64, bounds: Bounds) -> f64 {
        let applied = bounds.clamp(value);
        self.record(field, value, applied);
        applied
    }

    fn fit_count(&mut self, field: &'static str, value: u32, min: u32, max: u32) -> u32 {
        let applied = value.clamp(min, max);
        self.record(field, f64::from(value), f64::from(applied));
        applied
    }

    fn snap(&mut self, field: &'static str, value: u32, options: &[u32]) -> u32 {
        let applied = snap_to_option(value, options);
        self.record(field, f64::from(value), f64::from(applied));
        applied
    }
}

impl ShapeParameters {
    /// Clamps every field into its accepted range.
    ///
    /// Dependent ranges (dish and boss diameter, hole depth) are evaluated
    /// against the already clamped diameter and height. Mutually exclusive
    /// features are resolved: lobed bodies drop knurling, domes drop the
    /// finger dish, nut traps bore the full height.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] for non-finite input, which
    /// has no meaningful clamp.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knob_mesh::ShapeParameters;
    ///
    /// let raw = ShapeParameters { diameter: 200.0, ..Default::default() };
    /// let clamped = raw.clamped().unwrap();
    /// assert_eq!(clamped.params.diameter, 80.0);
    /// assert_eq!(clamped.adjustments[0].field, "diameter");
    /// ```
    pub fn clamped(&self) -> Result<Clamped, MeshError> {
        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(MeshError::invalid_parameter(
                    field,
                    format!("must be finite, got {value}"),
                ));
            }
        }

        let mut c = Clamper::default();
        let mut p = self.clone();

        p.diameter = c.fit("diameter", p.diameter, DIAMETER);
        p.height = c.fit("height", p.height, HEIGHT);

        p.lobes = c.fit_count("lobes", p.lobes, LOBES_MIN, LOBES_MAX);
        p.lobe_depth = c.fit("lobe_depth", p.lobe_depth, LOBE_DEPTH);
        p.knurl_ridges = c.snap("knurl_ridges", p.knurl_ridges, &KNURL_RIDGE_OPTIONS);
        if p.style == KnobStyle::Lobed {
            c.record("knurl_ridges", f64::from(p.knurl_ridges), 0.0);
            p.knurl_ridges = 0;
        }

        p.top_fillet_radius = c.fit("top_fillet_radius", p.top_fillet_radius, FILLET);
        p.top_fillet_height = c.fit("top_fillet_height", p.top_fillet_height, FILLET);
        p.bottom_fillet_radius = c.fit("bottom_fillet_radius", p.bottom_fillet_radius, FILLET);
        p.bottom_fillet_height = c.fit("bottom_fillet_height", p.bottom_fillet_height, FILLET);

        p.recess_depth = c.fit("recess_depth", p.recess_depth, DISH_DEPTH);
        if p.dome {
            c.record("recess_depth", p.recess_depth, 0.0);
            p.recess_depth = 0.0;
        }
        let dish_bounds = Bounds::new(DISH_DIAMETER_MIN, p.diameter * DISH_DIAMETER_MAX_RATIO);
        p.recess_diameter = Some(c.fit("recess_diameter", p.recess_diameter(), dish_bounds));

        p.boss_height = c.fit("boss_height", p.boss_height, BOSS_HEIGHT);
        let boss_bounds = Bounds::new(BOSS_DIAMETER_MIN, p.diameter);
        p.boss_diameter = c.fit("boss_diameter", p.boss_diameter, boss_bounds);

        let shaft_bounds = match p.shaft_mode {
            ShaftMode::NutTrap => BOLT_CLEARANCE,
            _ => SHAFT_DIAMETER,
        };
        p.shaft_diameter = Some(c.fit("shaft_diameter", p.shaft_diameter(), shaft_bounds));

        p.hole_depth = match p.shaft_mode {
            ShaftMode::NutTrap => {
                c.record("hole_depth", p.hole_depth, p.height);
                p.height
            }
            _ => c.fit("hole_depth", p.hole_depth, Bounds::new(HOLE_DEPTH_MIN, p.height)),
        };

        p.segments = c.snap("segments", p.segments, &RESOLUTION_OPTIONS);

        Ok(Clamped {
            params: p,
            adjustments: c.adjustments,
        })
    }
}
