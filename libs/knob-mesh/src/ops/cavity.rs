//! # Shaft Cavity
//!
//! Carves the bore and, for nut traps, the hex pocket at its base. All
//! cavity surfaces face into the hole.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::cap::BoreSpan;
use crate::ops::stitch::{fan, stitch, Winding};
use crate::params::ShapeParameters;
use crate::profile::{Profile, ProfileSet};
use config::constants::EPSILON;
use tracing::debug;

/// Builds the cavity walls and returns the outline it leaves in the base.
///
/// The nut pocket always sits at the bottom of the knob; a top nut location
/// only changes the opening. When the opening is the hex outline, a flat
/// ledge joins it to the narrower bore at the top.
pub fn carve_cavity<'a>(
    mesh: &mut Mesh,
    params: &ShapeParameters,
    profiles: &'a ProfileSet,
    span: BoreSpan,
) -> Result<&'a Profile, MeshError> {
    let bore = &profiles.bore;
    let mut z_bottom = 0.0;

    let base_outline = match (&profiles.pocket, params.nut()) {
        (Some(pocket), Some(nut)) => {
            let z_ceiling = nut.pocket_height();
            let ceiling = pocket.at(z_ceiling);
            stitch(mesh, &pocket.at(0.0), &ceiling, Winding::Inward)?;
            stitch(mesh, &ceiling, &bore.at(z_ceiling), Winding::Inward)?;
            z_bottom = z_ceiling;
            pocket
        }
        _ => bore,
    };

    if span.top_z > z_bottom + EPSILON {
        let top = bore.at(span.top_z);
        stitch(mesh, &bore.at(z_bottom), &top, Winding::Inward)?;

        if span.capped {
            fan(mesh, &top, top.center(), Winding::Inward)?;
        } else if profiles.opening_is_pocket() {
            stitch(mesh, &profiles.opening.at(span.top_z), &top, Winding::Outward)?;
        }
    }

    debug!(
        z_bottom,
        z_top = span.top_z,
        capped = span.capped,
        pocket = profiles.pocket.is_some(),
        "carved shaft cavity"
    );

    Ok(base_outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{NutLocation, ShaftMode};
    use approx::assert_relative_eq;

    #[test]
    fn test_blind_round_bore() {
        let params = ShapeParameters {
            shaft_mode: ShaftMode::RoundHole,
            ..Default::default()
        };
        let profiles = ProfileSet::build(&params);
        let mut mesh = Mesh::new();
        let span = BoreSpan {
            top_z: 10.0,
            capped: true,
        };
        let outline = carve_cavity(&mut mesh, &params, &profiles, span).unwrap();
        assert_eq!(outline, &profiles.bore);
        // wall + ceiling
        assert_eq!(mesh.triangle_count(), 64 * 3);
        // ceiling faces down into the hole
        for index in 128..192 {
            assert!(mesh.face_normal(index).z < -0.99);
        }
    }

    #[test]
    fn test_nut_trap_pocket_and_ledge() {
        let params = ShapeParameters {
            shaft_mode: ShaftMode::NutTrap,
            ..Default::default()
        };
        let profiles = ProfileSet::build(&params);
        let mut mesh = Mesh::new();
        let span = BoreSpan {
            top_z: 15.0,
            capped: false,
        };
        let outline = carve_cavity(&mut mesh, &params, &profiles, span).unwrap();
        assert_eq!(Some(outline), profiles.pocket.as_ref());
        // pocket wall, pocket ceiling, bore wall
        assert_eq!(mesh.triangle_count(), 64 * 6);
        for index in 128..256 {
            assert!(mesh.face_normal(index).z < -0.99);
        }
        let bore_bottom = mesh
            .vertices()
            .iter()
            .skip(256 * 3)
            .map(|v| v.z)
            .fold(f64::INFINITY, f64::min);
        assert_relative_eq!(bore_bottom, 2.6, epsilon = 1e-12);
    }

    #[test]
    fn test_hex_opening_gets_top_ledge() {
        let params = ShapeParameters {
            shaft_mode: ShaftMode::NutTrap,
            nut_location: NutLocation::Top,
            ..Default::default()
        };
        let profiles = ProfileSet::build(&params);
        let mut mesh = Mesh::new();
        let span = BoreSpan {
            top_z: 15.0,
            capped: false,
        };
        carve_cavity(&mut mesh, &params, &profiles, span).unwrap();
        assert_eq!(mesh.triangle_count(), 64 * 8);
        for index in 64 * 6..64 * 8 {
            assert!(mesh.face_normal(index).z > 0.99);
        }
    }

    #[test]
    fn test_bore_below_pocket_is_skipped() {
        let params = ShapeParameters {
            shaft_mode: ShaftMode::NutTrap,
            ..Default::default()
        };
        let profiles = ProfileSet::build(&params);
        let mut mesh = Mesh::new();
        let span = BoreSpan {
            top_z: 1.0,
            capped: true,
        };
        carve_cavity(&mut mesh, &params, &profiles, span).unwrap();
        assert_eq!(mesh.triangle_count(), 64 * 4);
    }
}
