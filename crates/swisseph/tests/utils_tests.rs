//! Angle arithmetic and formatting helpers.

mod support;

use proptest::prelude::*;
use std::f64::consts::PI;
use support::assert_close;
use swisseph::split_deg;

/// One full circle in centiseconds of arc
const CS_360: i32 = 360 * 360_000;

fn hms_cs(h: i32, m: i32, s: i32) -> i32 {
    (h * 3600 + m * 60 + s) * 100
}

#[test]
fn test_degnorm() {
    let cases = [(375.5, 15.5), (-10.0, 350.0), (360.0, 0.0), (720.5, 0.5), (0.0, 0.0)];
    for (input, expected) in cases {
        let got = swisseph::degnorm(input);
        assert_close(got, expected, 1e-9, &format!("degnorm({})", input));
        assert_eq!(swisseph::degnorm(got), got, "degnorm is idempotent");
    }
}

proptest! {
    #[test]
    fn prop_degnorm_range_and_idempotent(angle in -1e6..1e6f64) {
        let wrapped = swisseph::degnorm(angle);
        prop_assert!(wrapped >= 0.0);
        prop_assert!(wrapped < 360.0);
        prop_assert_eq!(swisseph::degnorm(wrapped), wrapped);
    }

    #[test]
    fn prop_difdeg2n_range(a in -1e4..1e4f64, b in -1e4..1e4f64) {
        let diff = swisseph::difdeg2n(a, b);
        prop_assert!((-180.0..180.0).contains(&diff), "difdeg2n({}, {}) = {}", a, b, diff);
    }
}

#[test]
fn test_radnorm() {
    assert_close(swisseph::radnorm(-PI), PI, 1e-12, "radnorm(-pi)");
    assert_close(swisseph::radnorm(5.0 * PI), PI, 1e-12, "radnorm(5pi)");
}

#[test]
fn test_differences() {
    assert_close(swisseph::difdegn(350.0, 10.0), 340.0, 1e-9, "difdegn");
    assert_close(swisseph::difdeg2n(350.0, 10.0), -20.0, 1e-9, "difdeg2n");
    assert_close(swisseph::difdeg2n(10.0, 350.0), 20.0, 1e-9, "difdeg2n");
    assert_close(swisseph::difrad2n(0.1, 2.0 * PI - 0.1), 0.2, 1e-12, "difrad2n");

    assert_eq!(swisseph::difcsn(100, 200), CS_360 - 100);
    assert_eq!(swisseph::difcs2n(100, 200), -100);
}

#[test]
fn test_midpoints_take_shorter_arc() {
    assert_close(swisseph::deg_midp(10.0, 350.0), 0.0, 1e-9, "deg_midp");
    assert_close(swisseph::deg_midp(100.0, 60.0), 80.0, 1e-9, "deg_midp");
    assert_close(swisseph::rad_midp(0.5, 0.1), 0.3, 1e-12, "rad_midp");
}

#[test]
fn test_centisecond_normalisation_and_rounding() {
    assert_eq!(swisseph::csnorm(-100), CS_360 - 100);
    assert_eq!(swisseph::csnorm(CS_360 + 5), 5);
    assert_eq!(swisseph::csroundsec(149), 100);
    assert_eq!(swisseph::csroundsec(150), 200);
}

#[test]
fn test_d2l_rounds_half_away_from_zero() {
    assert_eq!(swisseph::d2l(2.4), 2);
    assert_eq!(swisseph::d2l(2.5), 3);
    assert_eq!(swisseph::d2l(-2.6), -3);
}

#[test]
fn test_split_deg_zodiacal() {
    let split = swisseph::split_deg(123.456789, split_deg::ZODIACAL);
    assert_eq!(split.sign, 4);
    assert_eq!((split.degree, split.minute, split.second), (3, 27, 24));
    assert!((0.0..1.0).contains(&split.second_fraction));
}

#[test]
fn test_split_deg_rounds_to_seconds() {
    let split = swisseph::split_deg(10.999999, split_deg::ROUND_SEC);
    assert_eq!((split.degree, split.minute, split.second), (11, 0, 0));
}

#[test]
fn test_cs2timestr() {
    assert_eq!(swisseph::cs2timestr(hms_cs(12, 34, 56), b':', false), "12:34:56");
    assert_eq!(swisseph::cs2timestr(hms_cs(8, 5, 0), b':', true), "08:05");
}

#[test]
fn test_cs2lonlatstr_uses_direction_letters() {
    let east = swisseph::cs2lonlatstr(hms_cs(8, 33, 0), b'E', b'W');
    assert!(east.contains('E') && east.contains("33"), "{:?}", east);

    let west = swisseph::cs2lonlatstr(-hms_cs(8, 33, 0), b'E', b'W');
    assert!(west.contains('W'), "{:?}", west);
}

#[test]
fn test_cs2degstr() {
    let text = swisseph::cs2degstr(hms_cs(15, 30, 45));
    assert!(text.contains("15") && text.contains("30"), "{:?}", text);
}
