//! # Profiles
//!
//! Closed 2D cross-sections sampled at a fixed number of angles, and the
//! rings obtained by placing them at a height.
//!
//! Every generator samples point `i` on the ray at angle `2πi/N`, so two
//! profiles of equal length can be stitched index-for-index regardless of
//! their shape.
//!
//! ## Example
//!
//! ```rust
//! use knob_mesh::profile::Profile;
//!
//! let circle = Profile::circle(20.0, 32);
//! assert_eq!(circle.len(), 32);
//! assert!((circle.max_radius() - 10.0).abs() < 1e-12);
//!
//! let ring = circle.at(5.0);
//! assert_eq!(ring.z(), 5.0);
//! ```

mod set;

#[cfg(test)]
mod tests;

pub use set::ProfileSet;

use config::constants::{LOBE_DEPTH_FACTOR, RADIAL_EPSILON};
use glam::{DVec2, DVec3};
use std::f64::consts::PI;

/// Sample angle of point `index` out of `segments`.
#[inline]
fn sample_angle(index: u32, segments: u32) -> f64 {
    2.0 * PI * f64::from(index) / f64::from(segments)
}

/// A closed loop of 2D points ordered by increasing angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<DVec2>,
}

impl Profile {
    /// Wraps an existing point loop.
    pub fn from_points(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Circle of the given diameter.
    pub fn circle(diameter: f64, segments: u32) -> Self {
        let radius = diameter / 2.0;
        let points = (0..segments)
            .map(|i| {
                let theta = sample_angle(i, segments);
                DVec2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        Self { points }
    }

    /// Cosine-modulated outline with `lobes` bumps.
    ///
    /// The outer radius is `diameter / 2`; the valleys sit at
    /// `r_outer * (1 - 0.6 * ratio)`. Used for lobed bodies and, with a
    /// small ratio and many lobes, for knurl ridges.
    pub fn lobed(diameter: f64, lobes: u32, ratio: f64, segments: u32) -> Self {
        let r_outer = diameter / 2.0;
        let r_inner = r_outer * (1.0 - LOBE_DEPTH_FACTOR * ratio);
        let mid = (r_outer + r_inner) / 2.0;
        let amplitude = (r_outer - r_inner) / 2.0;
        let lobes = f64::from(lobes);

        let points = (0..segments)
            .map(|i| {
                let theta = sample_angle(i, segments);
                let r = mid + amplitude * (lobes * theta).cos();
                DVec2::new(r * theta.cos(), r * theta.sin())
            })
            .collect();
        Self { points }
    }

    /// Flat-sided regular polygon with the given flat-to-flat width.
    ///
    /// The outline is sampled on the usual `N` rays instead of returning the
    /// polygon's corners, so it stitches against any other profile. A corner
    /// lies on the +x axis.
    pub fn polygon(width: f64, sides: u32, segments: u32) -> Self {
        let apothem = width / 2.0;
        let period = 2.0 * PI / f64::from(sides);

        let points = (0..segments)
            .map(|i| {
                let theta = sample_angle(i, segments);
                let from_bisector = theta.rem_euclid(period) - period / 2.0;
                let r = apothem / from_bisector.cos();
                DVec2::new(r * theta.cos(), r * theta.sin())
            })
            .collect();
        Self { points }
    }

    /// Circle with one flat, measured flat-to-opposite-side.
    ///
    /// The flat is perpendicular to +x at `flat_to_opposite - radius` from
    /// the centre; samples past it are moved along their ray onto the flat.
    pub fn d_shaft(diameter: f64, flat_to_opposite: f64, segments: u32) -> Self {
        let radius = diameter / 2.0;
        let cut = flat_to_opposite - radius;

        let points = (0..segments)
            .map(|i| {
                let theta = sample_angle(i, segments);
                let x = radius * theta.cos();
                if x > cut {
                    DVec2::new(cut, cut * theta.tan())
                } else {
                    DVec2::new(x, radius * theta.sin())
                }
            })
            .collect();
        Self { points }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the profile has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Profile points.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Largest distance of any point from the axis.
    pub fn max_radius(&self) -> f64 {
        self.points.iter().map(|p| p.length()).fold(0.0, f64::max)
    }

    /// Smallest distance of any point from the axis.
    pub fn min_radius(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.length())
            .fold(f64::INFINITY, f64::min)
    }

    /// Moves every point towards the axis by `amount`.
    ///
    /// Points within `RADIAL_EPSILON` of the axis are left alone, and no
    /// point is pulled past the axis.
    pub fn inset(&self, amount: f64) -> Self {
        let points = self
            .points
            .iter()
            .map(|&p| {
                let magnitude = p.length();
                if magnitude > RADIAL_EPSILON {
                    p * ((magnitude - amount) / magnitude).max(0.0)
                } else {
                    p
                }
            })
            .collect();
        Self { points }
    }

    /// Scales every point about the axis.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: self.points.iter().map(|&p| p * factor).collect(),
        }
    }

    /// Places the profile at height `z`.
    pub fn at(&self, z: f64) -> Ring {
        Ring {
            points: self.points.iter().map(|p| p.extend(z)).collect(),
            z,
        }
    }
}

/// A profile embedded at one height.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<DVec3>,
    z: f64,
}

impl Ring {
    /// Height shared by every point.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ring points.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Largest distance of any point from the z axis.
    pub fn max_radius(&self) -> f64 {
        self.points.iter().map(|p| p.truncate().length()).fold(0.0, f64::max)
    }

    /// Point on the axis at the ring's height.
    #[inline]
    pub fn center(&self) -> DVec3 {
        DVec3::new(0.0, 0.0, self.z)
    }
}
