//! Angle normalisation, centisecond arithmetic and formatting

use crate::lock::with_native;
use crate::marshal::TextBuffer;
use crate::types::SplitDegree;
use std::os::raw::{c_char, c_int};
use swisseph_sys as ffi;

/// Normalise degrees to [0, 360)
pub fn degnorm(x: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_degnorm(x) })
}

/// Normalise radians to [0, 2π)
pub fn radnorm(x: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_radnorm(x) })
}

/// Midpoint of two angles in degrees, on the shorter arc
pub fn deg_midp(x1: f64, x0: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_deg_midp(x1, x0) })
}

/// Midpoint of two angles in radians, on the shorter arc
pub fn rad_midp(x1: f64, x0: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_rad_midp(x1, x0) })
}

/// Normalise centiseconds to [0, 360°)
pub fn csnorm(p: i32) -> i32 {
    with_native(|| unsafe { ffi::swe_csnorm(p) })
}

/// Difference `p1 - p2` in centiseconds, normalised to [0, 360°)
pub fn difcsn(p1: i32, p2: i32) -> i32 {
    with_native(|| unsafe { ffi::swe_difcsn(p1, p2) })
}

/// Difference `p1 - p2` in degrees, normalised to [0, 360)
pub fn difdegn(p1: f64, p2: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_difdegn(p1, p2) })
}

/// Difference `p1 - p2` in centiseconds, normalised to [-180°, 180°)
pub fn difcs2n(p1: i32, p2: i32) -> i32 {
    with_native(|| unsafe { ffi::swe_difcs2n(p1, p2) })
}

/// Difference `p1 - p2` in degrees, normalised to [-180, 180)
pub fn difdeg2n(p1: f64, p2: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_difdeg2n(p1, p2) })
}

/// Difference `p1 - p2` in radians, normalised to [-π, π)
pub fn difrad2n(p1: f64, p2: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_difrad2n(p1, p2) })
}

/// Round centiseconds to whole seconds, never rounding up to the next sign
pub fn csroundsec(x: i32) -> i32 {
    with_native(|| unsafe { ffi::swe_csroundsec(x) })
}

/// Round a double to the nearest integer
pub fn d2l(x: f64) -> i32 {
    with_native(|| unsafe { ffi::swe_d2l(x) })
}

/// Split decimal degrees into degrees, minutes, seconds and sign
///
/// `roundflag` combines [`crate::split_deg`] bits; with `ZODIACAL` or
/// `NAKSHATRA` the degrees are relative to the sign, whose index is in `sign`.
pub fn split_deg(ddeg: f64, roundflag: i32) -> SplitDegree {
    let (mut degree, mut minute, mut second, mut fraction, mut sign) = (0, 0, 0, 0.0, 0);
    with_native(|| unsafe {
        ffi::swe_split_deg(
            ddeg,
            roundflag,
            &mut degree,
            &mut minute,
            &mut second,
            &mut fraction,
            &mut sign,
        )
    });
    SplitDegree {
        degree,
        minute,
        second,
        second_fraction: fraction,
        sign,
    }
}

/// Format centiseconds of time as `hh:mm:ss`
///
/// With `suppress_zero`, zero seconds are left out.
pub fn cs2timestr(t: i32, separator: u8, suppress_zero: bool) -> String {
    let mut buf = TextBuffer::new();
    with_native(|| unsafe {
        ffi::swe_cs2timestr(
            t,
            separator as c_int,
            suppress_zero as i32,
            buf.as_mut_ptr(),
        )
    });
    buf.text()
}

/// Format centiseconds as a geographic longitude or latitude
///
/// `plus` and `minus` are the direction letters (`b'E'`/`b'W'`,
/// `b'N'`/`b'S'`).
pub fn cs2lonlatstr(t: i32, plus: u8, minus: u8) -> String {
    let mut buf = TextBuffer::new();
    with_native(|| unsafe {
        ffi::swe_cs2lonlatstr(t, plus as c_char, minus as c_char, buf.as_mut_ptr())
    });
    buf.text()
}

/// Format centiseconds as degrees, minutes and seconds within a sign
pub fn cs2degstr(t: i32) -> String {
    let mut buf = TextBuffer::new();
    with_native(|| unsafe { ffi::swe_cs2degstr(t, buf.as_mut_ptr()) });
    buf.text()
}
