//! Horizontal coordinates, refraction and ecliptic/equatorial transforms

use crate::lock::with_native;
use crate::types::{GeoPosition, Horizontal, Refraction};
use swisseph_sys as ffi;

/// Azimuth and altitude of a point given in ecliptic or equatorial coordinates
///
/// `calc_flag` is [`crate::coord::ECL2HOR`] or [`crate::coord::EQU2HOR`];
/// `coords` holds longitude/RA, latitude/declination and distance.
pub fn azalt(
    tjd_ut: f64,
    calc_flag: i32,
    position: GeoPosition,
    pressure: f64,
    temperature: f64,
    coords: [f64; 3],
) -> Horizontal {
    let mut geopos = position.to_native();
    let mut xin = coords;
    let mut xaz = [0.0f64; 3];
    with_native(|| unsafe {
        ffi::swe_azalt(
            tjd_ut,
            calc_flag,
            geopos.as_mut_ptr(),
            pressure,
            temperature,
            xin.as_mut_ptr(),
            xaz.as_mut_ptr(),
        )
    });
    Horizontal {
        azimuth: xaz[0],
        true_altitude: xaz[1],
        apparent_altitude: xaz[2],
    }
}

/// Ecliptic or equatorial coordinates of a point given by azimuth and true altitude
///
/// `calc_flag` is [`crate::coord::HOR2ECL`] or [`crate::coord::HOR2EQU`].
pub fn azalt_rev(
    tjd_ut: f64,
    calc_flag: i32,
    position: GeoPosition,
    azimuth: f64,
    true_altitude: f64,
) -> [f64; 2] {
    let mut geopos = position.to_native();
    let mut xin = [azimuth, true_altitude];
    let mut xout = [0.0f64; 3];
    with_native(|| unsafe {
        ffi::swe_azalt_rev(
            tjd_ut,
            calc_flag,
            geopos.as_mut_ptr(),
            xin.as_mut_ptr(),
            xout.as_mut_ptr(),
        )
    });
    [xout[0], xout[1]]
}

/// Convert between true and apparent altitude
///
/// `calc_flag` is [`crate::refraction::TRUE_TO_APP`] or
/// [`crate::refraction::APP_TO_TRUE`].
pub fn refrac(altitude: f64, pressure: f64, temperature: f64, calc_flag: i32) -> f64 {
    with_native(|| unsafe { ffi::swe_refrac(altitude, pressure, temperature, calc_flag) })
}

/// Refraction for an observer above sea level, including the dip of the horizon
pub fn refrac_extended(
    altitude: f64,
    geo_altitude: f64,
    pressure: f64,
    temperature: f64,
    lapse_rate: f64,
    calc_flag: i32,
) -> Refraction {
    let mut dret = [0.0f64; 4];
    let converted = with_native(|| unsafe {
        ffi::swe_refrac_extended(
            altitude,
            geo_altitude,
            pressure,
            temperature,
            lapse_rate,
            calc_flag,
            dret.as_mut_ptr(),
        )
    });
    Refraction {
        altitude: converted,
        true_altitude: dret[0],
        apparent_altitude: dret[1],
        refraction: dret[2],
        dip: dret[3],
    }
}

/// Rotate polar coordinates by the obliquity `eps` (degrees)
///
/// A positive `eps` converts equatorial to ecliptic, a negative one ecliptic
/// to equatorial.
pub fn cotrans(coords: [f64; 3], eps: f64) -> [f64; 3] {
    let mut out = [0.0f64; 3];
    with_native(|| unsafe { ffi::swe_cotrans(coords.as_ptr(), out.as_mut_ptr(), eps) });
    out
}

/// [`cotrans`] for a position with speeds
pub fn cotrans_sp(coords: [f64; 6], eps: f64) -> [f64; 6] {
    let mut out = [0.0f64; 6];
    with_native(|| unsafe { ffi::swe_cotrans_sp(coords.as_ptr(), out.as_mut_ptr(), eps) });
    out
}
