//! # Nut Table
//!
//! Fixed lookup of hex nut dimensions keyed by nominal fastener size.

use config::constants::NUT_POCKET_CLEARANCE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hex nut dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutSpec {
    /// Flat-to-flat width of the nut.
    pub width: f64,
    /// Nut thickness.
    pub height: f64,
    /// Extra width added to the pocket for a press fit.
    pub tolerance: f64,
}

impl NutSpec {
    /// Flat-to-flat width of the pocket that captures this nut.
    #[inline]
    pub fn pocket_width(&self) -> f64 {
        self.width + self.tolerance
    }

    /// Height of the pocket, including the clearance above the nut.
    #[inline]
    pub fn pocket_height(&self) -> f64 {
        self.height + NUT_POCKET_CLEARANCE
    }
}

/// Nominal nut sizes supported by the nut trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NutSize {
    #[default]
    M3,
    M4,
    M5,
    M6,
    #[serde(rename = "1/4\"")]
    QuarterInch,
    M8,
}

const NUT_TABLE: [(NutSize, NutSpec); 6] = [
    (NutSize::M3, NutSpec { width: 5.5, height: 2.4, tolerance: 0.2 }),
    (NutSize::M4, NutSpec { width: 7.0, height: 3.2, tolerance: 0.2 }),
    (NutSize::M5, NutSpec { width: 8.0, height: 4.0, tolerance: 0.2 }),
    (NutSize::M6, NutSpec { width: 10.0, height: 5.0, tolerance: 0.25 }),
    (NutSize::QuarterInch, NutSpec { width: 11.11, height: 5.56, tolerance: 0.25 }),
    (NutSize::M8, NutSpec { width: 13.0, height: 6.5, tolerance: 0.3 }),
];

impl NutSize {
    /// Every supported size, smallest first.
    pub const ALL: [NutSize; 6] = [
        NutSize::M3,
        NutSize::M4,
        NutSize::M5,
        NutSize::M6,
        NutSize::QuarterInch,
        NutSize::M8,
    ];

    /// Dimensions of this nut.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knob_mesh::NutSize;
    ///
    /// let m3 = NutSize::M3.spec();
    /// assert_eq!(m3.width, 5.5);
    /// assert!((m3.pocket_width() - 5.7).abs() < 1e-12);
    /// ```
    pub const fn spec(self) -> NutSpec {
        NUT_TABLE[self as usize].1
    }

    /// Label shown by front ends.
    pub fn label(self) -> &'static str {
        match self {
            NutSize::M3 => "M3",
            NutSize::M4 => "M4",
            NutSize::M5 => "M5",
            NutSize::M6 => "M6",
            NutSize::QuarterInch => "1/4\"",
            NutSize::M8 => "M8",
        }
    }
}

impl fmt::Display for NutSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_keyed_in_declaration_order() {
        for (index, (size, _)) in NUT_TABLE.iter().enumerate() {
            assert_eq!(*size as usize, index);
            assert_eq!(NutSize::ALL[index], *size);
        }
    }

    #[test]
    fn test_m3_pocket() {
        let spec = NutSize::M3.spec();
        assert!((spec.pocket_width() - 5.7).abs() < 1e-12);
        assert!((spec.pocket_height() - 2.6).abs() < 1e-12);
    }

    #[test]
    fn test_sizes_grow_monotonically() {
        let widths: Vec<f64> = NutSize::ALL.iter().map(|n| n.spec().width).collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_quarter_inch_serde_name() {
        let json = serde_json::to_string(&NutSize::QuarterInch).unwrap();
        assert_eq!(json, "\"1/4\\\"\"");
        let parsed: NutSize = serde_json::from_str("\"M8\"").unwrap();
        assert_eq!(parsed, NutSize::M8);
    }
}
