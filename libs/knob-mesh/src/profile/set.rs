//! Cross-sections shared by every stage of one generation.

use super::Profile;
use crate::params::{KnobStyle, NutLocation, ShaftMode, ShapeParameters};
use config::constants::{
    D_SHAFT_FLAT_RATIO, D_SHAFT_STANDARD_DIAMETER, D_SHAFT_STANDARD_FLAT, HEX_SIDES,
    KNURL_PROTRUSION,
};

/// All profiles a knob is built from, sampled at the same resolution.
#[derive(Debug, Clone)]
pub struct ProfileSet {
    /// Outer body cross-section (circle, knurled circle or lobed).
    pub body: Profile,
    /// Boss cross-section, when a boss is built.
    pub boss: Option<Profile>,
    /// Shaft bore cross-section.
    pub bore: Profile,
    /// Hex pocket cross-section for nut traps.
    pub pocket: Option<Profile>,
    /// Outline of the hole left in the top surface when it is open.
    pub opening: Profile,
}

impl ProfileSet {
    /// Builds every profile for a parameter set.
    pub fn build(params: &ShapeParameters) -> Self {
        let n = params.segments;

        let body = match params.style {
            KnobStyle::Lobed => {
                Profile::lobed(params.diameter, params.lobes, params.lobe_depth, n)
            }
            KnobStyle::Round if params.knurl_ridges > 0 => {
                Profile::lobed(params.diameter, params.knurl_ridges, KNURL_PROTRUSION, n)
            }
            KnobStyle::Round => Profile::circle(params.diameter, n),
        };

        let boss = params
            .has_boss()
            .then(|| Profile::circle(params.boss_diameter, n));

        let shaft = params.shaft_diameter();
        let bore = match params.shaft_mode {
            ShaftMode::DShaft => Profile::d_shaft(shaft, d_shaft_flat(shaft), n),
            ShaftMode::RoundHole | ShaftMode::NutTrap => Profile::circle(shaft, n),
        };

        let pocket = params
            .nut()
            .map(|nut| Profile::polygon(nut.pocket_width(), HEX_SIDES, n));

        let opening = match (&pocket, params.nut_location) {
            (Some(hex), NutLocation::Top) => hex.clone(),
            _ => bore.clone(),
        };

        Self {
            body,
            boss,
            bore,
            pocket,
            opening,
        }
    }

    /// True when the top opening differs from the bore outline.
    pub fn opening_is_pocket(&self) -> bool {
        self.opening != self.bore
    }
}

/// Flat-to-opposite distance of a D-shaft of the given diameter.
pub(crate) fn d_shaft_flat(diameter: f64) -> f64 {
    if diameter == D_SHAFT_STANDARD_DIAMETER {
        D_SHAFT_STANDARD_FLAT
    } else {
        diameter * D_SHAFT_FLAT_RATIO
    }
}
