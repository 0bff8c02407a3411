//! # Configuration Constants
//!
//! Centralized constants for the knob pipeline. All tessellation step counts,
//! numeric guards and parameter ranges are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Guards used before radial scaling and apex fans
//! - **Resolution**: Selectable segment counts and knurl ridge counts
//! - **Lofting**: Longitudinal step counts for fillets, dome and dish
//! - **Profiles**: Shape factors for lobes, knurls and D-shafts
//! - **Ranges**: Accepted input ranges and their defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of heights.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn same_height(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(same_height(15.0, 15.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Radius below which a profile point is treated as lying on the axis.
///
/// Radial insets divide by the point's distance from the axis; points
/// closer than this are left unscaled.
///
/// # Example
///
/// ```rust
/// use config::constants::RADIAL_EPSILON;
///
/// let magnitude = 0.0005;
/// let scale = if magnitude > RADIAL_EPSILON { 0.5 } else { 1.0 };
/// assert_eq!(scale, 1.0);
/// ```
pub const RADIAL_EPSILON: f64 = 0.001;

/// Minimum terminal ring radius for which an apex fan is emitted.
///
/// A ring that has already shrunk below this radius is treated as closed.
pub const MIN_CAP_RADIUS: f64 = 0.1;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default tessellation resolution (points per profile).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 3);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 64;

/// Smallest segment count that still forms a closed polygon.
pub const MIN_SEGMENTS: u32 = 3;

/// Tessellation resolutions offered by the control surface.
pub const RESOLUTION_OPTIONS: [u32; 3] = [32, 64, 128];

/// Knurl ridge counts offered for round knobs (0 disables knurling).
pub const KNURL_RIDGE_OPTIONS: [u32; 4] = [0, 32, 64, 128];

// =============================================================================
// LOFTING CONSTANTS
// =============================================================================

/// Steps of the concave bottom cove (emits `steps + 1` rings).
pub const BOTTOM_FILLET_STEPS: u32 = 6;

/// Steps of the convex top roundover.
pub const TOP_FILLET_STEPS: u32 = 8;

/// Steps of the hemispherical dome.
pub const DOME_STEPS: u32 = 12;

/// Steps of the finger dish bowl.
pub const DISH_STEPS: u32 = 5;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Fraction of the outer radius removed at full lobe depth.
///
/// # Example
///
/// ```rust
/// use config::constants::LOBE_DEPTH_FACTOR;
///
/// let r_outer = 12.5;
/// let r_inner = r_outer * (1.0 - LOBE_DEPTH_FACTOR * 0.3);
/// assert!(r_inner < r_outer);
/// ```
pub const LOBE_DEPTH_FACTOR: f64 = 0.6;

/// Protrusion ratio used for knurl ridges on round knobs.
pub const KNURL_PROTRUSION: f64 = 0.05;

/// Shaft diameter that uses the standard D-shaft flat.
pub const D_SHAFT_STANDARD_DIAMETER: f64 = 6.0;

/// Flat-to-opposite distance of a standard 6 mm D-shaft.
pub const D_SHAFT_STANDARD_FLAT: f64 = 4.5;

/// Flat-to-opposite distance as a fraction of diameter for other shafts.
pub const D_SHAFT_FLAT_RATIO: f64 = 0.75;

/// Side count of a nut pocket.
pub const HEX_SIDES: u32 = 6;

// =============================================================================
// FEATURE CONSTANTS
// =============================================================================

/// Boss heights at or below this value are ignored.
pub const MIN_BOSS_HEIGHT: f64 = 0.1;

/// Extra height added above a nut in its pocket.
pub const NUT_POCKET_CLEARANCE: f64 = 0.2;

/// Default bolt clearance diameter for an M3 nut trap.
pub const M3_BOLT_CLEARANCE: f64 = 3.2;

/// Cubic millimetres per cubic centimetre.
pub const MM3_PER_CC: f64 = 1000.0;

// =============================================================================
// PARAMETER RANGES
// =============================================================================

/// Closed numeric interval accepted for a parameter.
///
/// # Example
///
/// ```rust
/// use config::constants::Bounds;
///
/// let bounds = Bounds::new(2.0, 15.0);
/// assert_eq!(bounds.clamp(1.0), 2.0);
/// assert!(bounds.contains(6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
}

impl Bounds {
    /// Creates a new interval.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps a value into the interval.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Returns true if the value lies inside the interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Knob diameter (mm).
pub const DIAMETER: Bounds = Bounds::new(10.0, 80.0);
/// Default knob diameter (mm).
pub const DEFAULT_DIAMETER: f64 = 25.0;

/// Knob body height (mm).
pub const HEIGHT: Bounds = Bounds::new(5.0, 50.0);
/// Default knob body height (mm).
pub const DEFAULT_HEIGHT: f64 = 15.0;

/// Lobe count range for lobed knobs.
pub const LOBES_MIN: u32 = 3;
/// Upper lobe count.
pub const LOBES_MAX: u32 = 32;
/// Default lobe count.
pub const DEFAULT_LOBES: u32 = 5;

/// Lobe protrusion ratio.
pub const LOBE_DEPTH: Bounds = Bounds::new(0.01, 1.0);
/// Default lobe protrusion ratio.
pub const DEFAULT_LOBE_DEPTH: f64 = 0.3;

/// Fillet radius and height (mm), top and bottom.
pub const FILLET: Bounds = Bounds::new(0.0, 10.0);
/// Default top fillet radius and height (mm).
pub const DEFAULT_TOP_FILLET: f64 = 2.0;

/// Finger dish depth (mm).
pub const DISH_DEPTH: Bounds = Bounds::new(0.0, 10.0);
/// Smallest finger dish diameter (mm).
pub const DISH_DIAMETER_MIN: f64 = 5.0;
/// Largest dish diameter as a multiple of knob diameter.
pub const DISH_DIAMETER_MAX_RATIO: f64 = 1.2;
/// Default dish diameter as a multiple of knob diameter.
pub const DISH_DIAMETER_DEFAULT_RATIO: f64 = 0.8;

/// Boss height (mm).
pub const BOSS_HEIGHT: Bounds = Bounds::new(0.0, 10.0);
/// Smallest boss diameter (mm); the largest is the knob diameter.
pub const BOSS_DIAMETER_MIN: f64 = 5.0;
/// Default boss diameter (mm).
pub const DEFAULT_BOSS_DIAMETER: f64 = 10.0;

/// Shaft diameter for D-shaft and round holes (mm).
pub const SHAFT_DIAMETER: Bounds = Bounds::new(2.0, 15.0);
/// Bolt clearance diameter for nut traps (mm).
pub const BOLT_CLEARANCE: Bounds = Bounds::new(2.0, 10.0);
/// Default shaft diameter (mm).
pub const DEFAULT_SHAFT_DIAMETER: f64 = 6.0;

/// Smallest blind hole depth (mm); the largest is the knob height.
pub const HOLE_DEPTH_MIN: f64 = 1.0;
/// Default blind hole depth (mm).
pub const DEFAULT_HOLE_DEPTH: f64 = 10.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Snaps a value to the nearest entry of a fixed option set.
///
/// Ties resolve to the smaller option.
///
/// # Example
///
/// ```rust
/// use config::constants::{snap_to_option, RESOLUTION_OPTIONS};
///
/// assert_eq!(snap_to_option(100, &RESOLUTION_OPTIONS), 128);
/// assert_eq!(snap_to_option(40, &RESOLUTION_OPTIONS), 32);
/// ```
pub fn snap_to_option(value: u32, options: &[u32]) -> u32 {
    options
        .iter()
        .copied()
        .min_by_key(|option| option.abs_diff(value))
        .unwrap_or(value)
}
