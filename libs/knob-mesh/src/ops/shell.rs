//! # Shell Lofter
//!
//! Stacks body rings from the base upward: optional boss, bottom cove,
//! straight wall, then a top roundover or dome crown.
//!
//! ## Heights
//!
//! ```text
//! z_top    ─┐  end of crown (top roundover or dome)
//! z_crown  ─┤  end of straight wall
//! z_wall   ─┤  end of bottom cove
//! z_base   ─┤  top of boss (0 without boss)
//! 0        ─┘
//! ```

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::stitch::{stitch, Winding};
use crate::params::ShapeParameters;
use crate::profile::{ProfileSet, Ring};
use config::constants::{
    BOTTOM_FILLET_STEPS, DOME_STEPS, EPSILON, MIN_CAP_RADIUS, TOP_FILLET_STEPS,
};
use std::f64::consts::FRAC_PI_2;

/// Key heights of the outer shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellLevels {
    /// Bottom of the body (top of the boss).
    pub z_base: f64,
    /// Top of the bottom cove.
    pub z_wall: f64,
    /// Start of the crown (top roundover or dome).
    pub z_crown: f64,
    /// Top of the shell.
    pub z_top: f64,
}

impl ShellLevels {
    /// Computes the shell heights for a parameter set.
    ///
    /// The cove spans the full bottom fillet height and the roundover the
    /// full top fillet height. When the two overlap, the roundover starts at
    /// the top of the cove and the shell ends above `z_base + height`.
    pub fn new(params: &ShapeParameters) -> Self {
        let z_base = if params.has_boss() {
            params.boss_height
        } else {
            0.0
        };
        let z_nominal = z_base + params.height;

        let cove = if params.has_bottom_fillet() {
            params.bottom_fillet_height.max(0.0)
        } else {
            0.0
        };
        let z_wall = z_base + cove;

        let (z_crown, z_top) = if params.dome {
            (z_wall, z_nominal.max(z_wall))
        } else if params.has_top_fillet() {
            let roundover = params.top_fillet_height.max(0.0);
            let z_crown = z_wall.max(z_nominal - roundover);
            (z_crown, z_crown + roundover)
        } else {
            let z_crown = z_wall.max(z_nominal);
            (z_crown, z_crown)
        };

        Self {
            z_base,
            z_wall,
            z_crown,
            z_top,
        }
    }

    /// Vertical extent of the crown.
    #[inline]
    pub fn crown_height(&self) -> f64 {
        self.z_top - self.z_crown
    }

    /// Height at which the dome surface passes through `radius_factor`.
    ///
    /// Factor 1 is the dome's base, 0 its apex.
    pub fn dome_height_at(&self, radius_factor: f64) -> f64 {
        let f = radius_factor.clamp(0.0, 1.0);
        self.z_crown + self.crown_height() * (1.0 - f * f).sqrt()
    }
}

/// The lofted outer wall of a knob.
#[derive(Debug, Clone)]
pub struct OuterShell {
    /// Rings from bottom to top.
    pub rings: Vec<Ring>,
    /// Shell heights the rings were built from.
    pub levels: ShellLevels,
}

impl OuterShell {
    /// Lowest ring (the boss bottom or body base).
    pub fn bottom(&self) -> &Ring {
        &self.rings[0]
    }

    /// Highest ring, where the top closure starts.
    pub fn top(&self) -> &Ring {
        &self.rings[self.rings.len() - 1]
    }

    /// Emits the outward-facing strips between consecutive rings.
    pub fn stitch_into(&self, mesh: &mut Mesh) -> Result<(), MeshError> {
        for pair in self.rings.windows(2) {
            stitch(mesh, &pair[0], &pair[1], Winding::Outward)?;
        }
        Ok(())
    }
}

/// Lofts the outer shell.
///
/// `dome_floor` is the smallest radius factor a dome may shrink to; a dome
/// that reaches it stops there with its last ring left open. With a floor of
/// zero the dome stops before its rings collapse onto the axis and the top
/// closure fans the remaining ring.
pub fn loft_shell(params: &ShapeParameters, profiles: &ProfileSet, dome_floor: f64) -> OuterShell {
    let levels = ShellLevels::new(params);
    let body = &profiles.body;
    let mut rings = Vec::new();

    if let Some(boss) = &profiles.boss {
        rings.push(boss.at(0.0));
        rings.push(boss.at(levels.z_base));
    }

    let cove = levels.z_wall - levels.z_base;
    if cove > EPSILON {
        for s in 0..=BOTTOM_FILLET_STEPS {
            let t = f64::from(s) / f64::from(BOTTOM_FILLET_STEPS);
            let inset = params.bottom_fillet_radius * (1.0 - (t * FRAC_PI_2).sin());
            rings.push(body.inset(inset).at(levels.z_base + cove * t));
        }
    } else {
        rings.push(body.at(levels.z_base));
    }

    if levels.z_crown > levels.z_wall + EPSILON {
        rings.push(body.at(levels.z_crown));
    }

    let crown = levels.crown_height();
    if crown > EPSILON {
        if params.dome {
            let max_radius = body.max_radius();
            for s in 1..=DOME_STEPS {
                let t = f64::from(s) / f64::from(DOME_STEPS);
                let z = levels.z_crown + crown * t;
                let factor = (1.0 - t * t).max(0.0).sqrt();

                if dome_floor > 0.0 {
                    if factor <= dome_floor {
                        rings.push(body.scaled(dome_floor).at(z));
                        break;
                    }
                } else if factor * max_radius <= MIN_CAP_RADIUS {
                    break;
                }
                rings.push(body.scaled(factor).at(z));
            }
        } else if params.has_top_fillet() {
            for s in 1..=TOP_FILLET_STEPS {
                let t = f64::from(s) / f64::from(TOP_FILLET_STEPS);
                let inset = params.top_fillet_radius * (1.0 - (1.0 - t * t).max(0.0).sqrt());
                rings.push(body.inset(inset).at(levels.z_crown + crown * t));
            }
        }
    }

    tracing::debug!(
        rings = rings.len(),
        z_base = levels.z_base,
        z_crown = levels.z_crown,
        z_top = levels.z_top,
        "lofted outer shell"
    );

    OuterShell { rings, levels }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_top() -> ShapeParameters {
        ShapeParameters {
            top_fillet_radius: 0.0,
            top_fillet_height: 0.0,
            ..Default::default()
        }
    }

    fn loft(params: &ShapeParameters) -> OuterShell {
        loft_shell(params, &ProfileSet::build(params), 0.0)
    }

    #[test]
    fn test_plain_wall_is_two_rings() {
        let shell = loft(&flat_top());
        assert_eq!(shell.rings.len(), 2);
        assert_eq!(shell.bottom().z(), 0.0);
        assert_eq!(shell.top().z(), 15.0);
    }

    #[test]
    fn test_default_roundover() {
        let params = ShapeParameters::default();
        let shell = loft(&params);
        // base, wall top, 8 roundover steps
        assert_eq!(shell.rings.len(), 10);
        assert_eq!(shell.rings[1].z(), 13.0);
        assert_relative_eq!(shell.top().z(), 15.0, epsilon = 1e-12);
        assert_relative_eq!(shell.top().max_radius(), 10.5, epsilon = 1e-9);
    }

    #[test]
    fn test_boss_and_cove() {
        let params = ShapeParameters {
            boss_height: 4.0,
            bottom_fillet_radius: 1.5,
            bottom_fillet_height: 3.0,
            ..flat_top()
        };
        let shell = loft(&params);
        // boss 2, cove 7, wall top 1
        assert_eq!(shell.rings.len(), 10);
        assert_relative_eq!(shell.bottom().max_radius(), 5.0, epsilon = 1e-12);
        assert_eq!(shell.rings[1].z(), 4.0);
        assert_relative_eq!(shell.rings[2].max_radius(), 11.0, epsilon = 1e-9);
        assert_relative_eq!(shell.rings[8].max_radius(), 12.5, epsilon = 1e-9);
        assert_relative_eq!(shell.rings[8].z(), 7.0, epsilon = 1e-12);
        assert_eq!(shell.top().z(), 19.0);
    }

    #[test]
    fn test_thin_boss_is_ignored() {
        let params = ShapeParameters {
            boss_height: 0.05,
            ..flat_top()
        };
        let shell = loft(&params);
        assert_eq!(shell.rings.len(), 2);
        assert_eq!(shell.levels.z_base, 0.0);
    }

    #[test]
    fn test_dome_stops_before_apex() {
        let params = ShapeParameters {
            dome: true,
            ..Default::default()
        };
        let shell = loft(&params);
        // base + 11 dome rings; the collapsed 12th ring is left to the apex fan
        assert_eq!(shell.rings.len(), 12);
        assert!(shell.top().max_radius() > MIN_CAP_RADIUS);
        assert!(shell.top().z() < 15.0);
    }

    #[test]
    fn test_dome_floor_clamps_last_ring() {
        let params = ShapeParameters {
            dome: true,
            ..Default::default()
        };
        let floor = 3.0 / 12.5;
        let shell = loft_shell(&params, &ProfileSet::build(&params), floor);
        assert_relative_eq!(shell.top().max_radius(), 3.0, epsilon = 1e-9);
        assert!(shell.rings.len() <= 13);
    }

    #[test]
    fn test_dome_height_at() {
        let levels = ShellLevels::new(&ShapeParameters {
            dome: true,
            ..Default::default()
        });
        assert_eq!(levels.dome_height_at(1.0), 0.0);
        assert_eq!(levels.dome_height_at(0.0), 15.0);
        assert_relative_eq!(levels.dome_height_at(0.6), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_overlapping_fillets_extend_above_height() {
        let params = ShapeParameters {
            height: 5.0,
            bottom_fillet_radius: 1.0,
            bottom_fillet_height: 4.0,
            top_fillet_radius: 2.0,
            top_fillet_height: 2.0,
            ..Default::default()
        };
        let shell = loft(&params);
        assert_eq!(shell.levels.z_wall, 4.0);
        assert_eq!(shell.levels.z_crown, 4.0);
        // cove 7, roundover 8; no separate wall ring
        assert_eq!(shell.rings.len(), 15);
        for pair in shell.rings.windows(2) {
            assert!(pair[1].z() > pair[0].z());
        }
        assert_relative_eq!(shell.top().z(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(shell.top().max_radius(), 10.5, epsilon = 1e-9);
    }

    #[test]
    fn test_roundover_spans_fillet_height() {
        let params = ShapeParameters {
            top_fillet_radius: 2.0,
            top_fillet_height: 4.0,
            ..Default::default()
        };
        let shell = loft(&params);
        assert_eq!(shell.levels.z_crown, 11.0);
        // halfway up the roundover: inset = r(1 - sqrt(1 - 0.25))
        let mid = &shell.rings[2 + 3];
        assert_relative_eq!(mid.z(), 13.0, epsilon = 1e-12);
        let expected = 12.5 - 2.0 * (1.0 - 0.75_f64.sqrt());
        assert_relative_eq!(mid.max_radius(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_tall_cove_leaves_no_dome() {
        let params = ShapeParameters {
            height: 5.0,
            dome: true,
            bottom_fillet_radius: 1.0,
            bottom_fillet_height: 8.0,
            ..Default::default()
        };
        let shell = loft(&params);
        assert_eq!(shell.levels.z_top, 8.0);
        assert_eq!(shell.levels.crown_height(), 0.0);
        assert_eq!(shell.rings.len(), 7);
    }

    #[test]
    fn test_shell_stitch_emits_strips() {
        let shell = loft(&ShapeParameters::default());
        let mut mesh = Mesh::new();
        shell.stitch_into(&mut mesh).unwrap();
        assert_eq!(mesh.triangle_count(), 9 * 2 * 64);
    }
}
