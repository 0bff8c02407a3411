//! Tests for profile generators and the profile set.

use super::set::d_shaft_flat;
use super::*;
use crate::params::{KnobStyle, NutLocation, NutSize, ShaftMode, ShapeParameters};
use approx::assert_relative_eq;

fn angles(profile: &Profile) -> Vec<f64> {
    profile
        .points()
        .iter()
        .map(|p| p.y.atan2(p.x).rem_euclid(2.0 * PI))
        .collect()
}

fn assert_strictly_increasing(profile: &Profile) {
    let a = angles(profile);
    for pair in a.windows(2) {
        assert!(pair[1] > pair[0], "angles not increasing: {pair:?}");
    }
}

#[test]
fn test_every_generator_honours_segment_count_and_order() {
    for n in [3, 32, 64, 128] {
        let profiles = [
            Profile::circle(25.0, n),
            Profile::lobed(25.0, 5, 0.3, n),
            Profile::lobed(25.0, 64, 0.05, n),
            Profile::polygon(5.7, 6, n),
            Profile::d_shaft(6.0, 4.5, n),
        ];
        for profile in &profiles {
            assert_eq!(profile.len(), n as usize);
            assert_strictly_increasing(profile);
        }
    }
}

#[test]
fn test_circle_radius() {
    let circle = Profile::circle(25.0, 64);
    for p in circle.points() {
        assert_relative_eq!(p.length(), 12.5, epsilon = 1e-12);
    }
}

#[test]
fn test_lobed_extremes() {
    let lobed = Profile::lobed(25.0, 5, 0.3, 120);
    assert_relative_eq!(lobed.max_radius(), 12.5, epsilon = 1e-9);
    assert_relative_eq!(lobed.min_radius(), 12.5 * (1.0 - 0.18), epsilon = 1e-9);
    // lobe peak on +x
    assert_relative_eq!(lobed.points()[0].x, 12.5, epsilon = 1e-12);
}

#[test]
fn test_polygon_apothem_and_corner() {
    let hex = Profile::polygon(5.7, 6, 72);
    assert_relative_eq!(hex.min_radius(), 2.85, epsilon = 1e-9);
    let circumradius = 2.85 / (PI / 6.0).cos();
    assert_relative_eq!(hex.max_radius(), circumradius, epsilon = 1e-9);
    for p in hex.points() {
        assert!(p.length() <= circumradius + 1e-9);
    }
}

#[test]
fn test_polygon_points_lie_on_flats() {
    let hex = Profile::polygon(10.0, 6, 64);
    let period = PI / 3.0;
    for p in hex.points() {
        let theta = p.y.atan2(p.x).rem_euclid(2.0 * PI);
        let bisector = (theta / period).floor() * period + period / 2.0;
        let distance = p.x * bisector.cos() + p.y * bisector.sin();
        assert_relative_eq!(distance, 5.0, epsilon = 1e-9);
    }
}

#[test]
fn test_d_shaft_respects_flat() {
    for n in [32, 64, 128] {
        let d = Profile::d_shaft(6.0, 4.5, n);
        let cut = 4.5 - 3.0;
        for p in d.points() {
            assert!(p.x <= cut + 1e-12, "x = {} past flat {}", p.x, cut);
        }
        assert_relative_eq!(d.points()[0].x, cut, epsilon = 1e-12);
        assert_relative_eq!(d.max_radius(), 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_d_shaft_flat_distance() {
    assert_eq!(d_shaft_flat(6.0), 4.5);
    assert_relative_eq!(d_shaft_flat(8.0), 6.0);
}

#[test]
fn test_inset_and_scale() {
    let circle = Profile::circle(20.0, 16);
    assert_relative_eq!(circle.inset(2.0).max_radius(), 8.0, epsilon = 1e-12);
    assert_relative_eq!(circle.scaled(0.5).max_radius(), 5.0, epsilon = 1e-12);
    // never crosses the axis
    assert_relative_eq!(circle.inset(50.0).max_radius(), 0.0);
}

#[test]
fn test_inset_leaves_axis_points() {
    let tiny = Profile::from_points(vec![DVec2::new(0.0005, 0.0)]);
    assert_eq!(tiny.inset(1.0), tiny);
}

#[test]
fn test_ring_lifts_profile() {
    let ring = Profile::circle(10.0, 8).at(3.5);
    assert_eq!(ring.len(), 8);
    assert!(ring.points().iter().all(|p| p.z == 3.5));
    assert_relative_eq!(ring.max_radius(), 5.0, epsilon = 1e-12);
    assert_eq!(ring.center(), DVec3::new(0.0, 0.0, 3.5));
}

#[test]
fn test_profile_set_round_d_shaft() {
    let set = ProfileSet::build(&ShapeParameters::default());
    assert!(set.boss.is_none());
    assert!(set.pocket.is_none());
    assert!(!set.opening_is_pocket());
    assert_relative_eq!(set.body.max_radius(), 12.5, epsilon = 1e-12);
    assert!(set.bore.points().iter().all(|p| p.x <= 1.5 + 1e-12));
}

#[test]
fn test_profile_set_knurled_body() {
    let params = ShapeParameters {
        knurl_ridges: 32,
        ..Default::default()
    };
    let set = ProfileSet::build(&params);
    assert_relative_eq!(set.body.max_radius(), 12.5, epsilon = 1e-9);
    assert_relative_eq!(set.body.min_radius(), 12.5 * 0.97, epsilon = 1e-9);
}

#[test]
fn test_profile_set_nut_trap_on_top() {
    let params = ShapeParameters {
        style: KnobStyle::Lobed,
        shaft_mode: ShaftMode::NutTrap,
        nut_size: NutSize::M4,
        nut_location: NutLocation::Top,
        boss_height: 3.0,
        ..Default::default()
    };
    let set = ProfileSet::build(&params);
    let pocket = set.pocket.as_ref().unwrap();
    assert_relative_eq!(pocket.max_radius(), 3.6 / (PI / 6.0).cos(), epsilon = 1e-9);
    assert_eq!(&set.opening, pocket);
    assert!(set.opening_is_pocket());
    assert_relative_eq!(set.bore.max_radius(), 3.0, epsilon = 1e-12);
    assert_relative_eq!(set.boss.unwrap().max_radius(), 5.0, epsilon = 1e-12);
}
