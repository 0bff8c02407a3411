//! # Top Closure
//!
//! Closes the top of the outer shell. Exactly one closure is selected per
//! knob:
//!
//! | Variant | Top surface | Bore |
//! |---|---|---|
//! | `Dome { open: false }` | apex fan over the last dome ring | blind, capped |
//! | `Dome { open: true }` | dome stops at the opening, annulus to it | runs to the dome |
//! | `Dish { open: false }` | bowl closed by an apex fan | blind, capped |
//! | `Dish { open: true }` | bowl funnels into the opening | runs to the dish floor |
//! | `OpenRing` | flat annulus to the opening | runs to the top |
//! | `Flat` | apex fan over the top ring | blind, capped |
//!
//! A top is open when a through-hole or top nut trap is requested. A finger
//! dish also opens when a blind bore is deep enough to reach its floor; every
//! other blind bore stays capped below a closed top.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::shell::{OuterShell, ShellLevels};
use crate::ops::stitch::{fan, stitch, Winding};
use crate::params::ShapeParameters;
use crate::profile::{Profile, ProfileSet, Ring};
use config::constants::{DISH_STEPS, EPSILON, MIN_CAP_RADIUS, RADIAL_EPSILON};
use glam::DVec3;
use tracing::debug;

/// How the top of the shell is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopClosure {
    /// Hemispherical crown.
    Dome { open: bool },
    /// Finger dish carved into a flat or rounded top.
    Dish { open: bool },
    /// Flat top with the opening cut into it.
    OpenRing,
    /// Flat top closed by a fan.
    Flat,
}

/// Vertical extent of the shaft bore, decided by the top closure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoreSpan {
    /// Height where the bore ends.
    pub top_z: f64,
    /// True when the bore ends in its own ceiling instead of the opening.
    pub capped: bool,
}

impl TopClosure {
    /// Selects the closure for a parameter set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knob_mesh::ops::TopClosure;
    /// use knob_mesh::ShapeParameters;
    ///
    /// let params = ShapeParameters { through_hole: true, ..Default::default() };
    /// let closure = TopClosure::select(&params);
    /// assert_eq!(closure, TopClosure::OpenRing);
    /// ```
    pub fn select(params: &ShapeParameters) -> Self {
        let open = params.is_top_open()
            || (params.has_dish() && bore_reaches_dish_floor(params, &ShellLevels::new(params)));

        if params.dome {
            TopClosure::Dome { open }
        } else if params.has_dish() {
            TopClosure::Dish { open }
        } else if open {
            TopClosure::OpenRing
        } else {
            TopClosure::Flat
        }
    }

    /// True when the bore opens through the top surface.
    pub fn is_open(self) -> bool {
        match self {
            TopClosure::Dome { open } | TopClosure::Dish { open } => open,
            TopClosure::OpenRing => true,
            TopClosure::Flat => false,
        }
    }

    /// Smallest radius factor the dome may shrink to.
    pub fn dome_floor(self, profiles: &ProfileSet) -> f64 {
        match self {
            TopClosure::Dome { open: true } => {
                profiles.opening.max_radius() / profiles.body.min_radius()
            }
            _ => 0.0,
        }
    }

    /// Emits the top surface above the shell's last ring.
    pub fn build(
        self,
        mesh: &mut Mesh,
        params: &ShapeParameters,
        shell: &OuterShell,
        profiles: &ProfileSet,
    ) -> Result<BoreSpan, MeshError> {
        let top = shell.top();
        let blind = BoreSpan {
            top_z: params.effective_hole_depth(),
            capped: true,
        };

        let span = match self {
            TopClosure::Dome { open: false } => {
                close_with_apex(mesh, top, DVec3::new(0.0, 0.0, shell.levels.z_top))?;
                blind
            }
            TopClosure::Flat => {
                close_with_apex(mesh, top, top.center())?;
                blind
            }
            TopClosure::Dome { open: true } | TopClosure::OpenRing => {
                stitch(mesh, top, &profiles.opening.at(top.z()), Winding::Outward)?;
                BoreSpan {
                    top_z: top.z(),
                    capped: false,
                }
            }
            TopClosure::Dish { open } => {
                let z_end = carve_dish(mesh, params, shell, profiles, open)?;
                if open {
                    BoreSpan {
                        top_z: z_end,
                        capped: false,
                    }
                } else {
                    blind
                }
            }
        };

        debug!(closure = ?self, bore_top = span.top_z, capped = span.capped, "closed top");
        Ok(span)
    }
}

/// True when a blind bore reaches the floor of the finger dish.
fn bore_reaches_dish_floor(params: &ShapeParameters, levels: &ShellLevels) -> bool {
    params.effective_hole_depth() >= levels.z_top - params.recess_depth - EPSILON
}

fn close_with_apex(mesh: &mut Mesh, ring: &Ring, apex: DVec3) -> Result<(), MeshError> {
    if ring.max_radius() > MIN_CAP_RADIUS {
        fan(mesh, ring, apex, Winding::Outward)?;
    }
    Ok(())
}

/// Carves the finger dish and returns the height of its floor.
///
/// An open dish ends in the opening outline as soon as its radius reaches
/// the opening; a blind dish is closed by an apex fan at its centre.
fn carve_dish(
    mesh: &mut Mesh,
    params: &ShapeParameters,
    shell: &OuterShell,
    profiles: &ProfileSet,
    open: bool,
) -> Result<f64, MeshError> {
    let n = params.segments;
    let top = shell.top();
    let z_rim = top.z();
    let diameter = params.recess_diameter();
    let depth = params.recess_depth;

    let mut rim = Profile::circle(diameter, n).at(z_rim);
    stitch(mesh, top, &rim, Winding::Outward)?;

    let floor_radius = if open {
        profiles.opening.max_radius() + RADIAL_EPSILON
    } else {
        MIN_CAP_RADIUS
    };

    let mut z_end = z_rim - depth;
    for s in 1..DISH_STEPS {
        let t = f64::from(s) / f64::from(DISH_STEPS);
        let shrink = 1.0 - t;
        let radius = diameter / 2.0 * shrink;
        let z = z_rim - depth * (1.0 - shrink * shrink);
        if radius <= floor_radius {
            z_end = z;
            break;
        }
        let ring = Profile::circle(2.0 * radius, n).at(z);
        stitch(mesh, &rim, &ring, Winding::Outward)?;
        rim = ring;
    }

    if open {
        stitch(mesh, &rim, &profiles.opening.at(z_end), Winding::Outward)?;
    } else {
        fan(mesh, &rim, DVec3::new(0.0, 0.0, z_end), Winding::Outward)?;
    }

    Ok(z_end)
}
