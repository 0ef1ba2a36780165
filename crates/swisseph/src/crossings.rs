//! Longitude crossings of the Sun, Moon and planets
//!
//! The native crossing functions return a Julian day and signal failure by
//! returning a time before the start of the search. Text left in the
//! diagnostic buffer alongside a valid time (an ephemeris fallback, say) is
//! logged as a warning.

use crate::error::{Error, Result};
use crate::lock::with_native;
use crate::marshal::ErrorBuffer;
use crate::types::MoonNodeCrossing;
use log::warn;
use swisseph_sys as ffi;

fn crossing_result(context: &str, serr: &ErrorBuffer, start: f64, time: f64) -> Result<f64> {
    if time < start {
        return Err(Error::native(ffi::ERR, serr.text()));
    }
    if let Some(message) = serr.message() {
        warn!("{}: {}", context, message);
    }
    Ok(time)
}

/// Next time (JD ET) the Sun reaches longitude `x2cross`
pub fn solcross(x2cross: f64, jd_et: f64, flag: i32) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let time = with_native(|| unsafe { ffi::swe_solcross(x2cross, jd_et, flag, serr.as_mut_ptr()) });
    crossing_result("swe_solcross", &serr, jd_et, time)
}

/// Next time (JD UT) the Sun reaches longitude `x2cross`
pub fn solcross_ut(x2cross: f64, jd_ut: f64, flag: i32) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let time =
        with_native(|| unsafe { ffi::swe_solcross_ut(x2cross, jd_ut, flag, serr.as_mut_ptr()) });
    crossing_result("swe_solcross_ut", &serr, jd_ut, time)
}

/// Next time (JD ET) the Moon reaches longitude `x2cross`
pub fn mooncross(x2cross: f64, jd_et: f64, flag: i32) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let time =
        with_native(|| unsafe { ffi::swe_mooncross(x2cross, jd_et, flag, serr.as_mut_ptr()) });
    crossing_result("swe_mooncross", &serr, jd_et, time)
}

/// Next time (JD UT) the Moon reaches longitude `x2cross`
pub fn mooncross_ut(x2cross: f64, jd_ut: f64, flag: i32) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let time =
        with_native(|| unsafe { ffi::swe_mooncross_ut(x2cross, jd_ut, flag, serr.as_mut_ptr()) });
    crossing_result("swe_mooncross_ut", &serr, jd_ut, time)
}

/// Next crossing of the ecliptic by the Moon (a node passage), ET
pub fn mooncross_node(jd_et: f64, flag: i32) -> Result<MoonNodeCrossing> {
    let mut serr = ErrorBuffer::new();
    let (mut longitude, mut latitude) = (0.0, 0.0);
    let time = with_native(|| unsafe {
        ffi::swe_mooncross_node(jd_et, flag, &mut longitude, &mut latitude, serr.as_mut_ptr())
    });
    let time = crossing_result("swe_mooncross_node", &serr, jd_et, time)?;
    Ok(MoonNodeCrossing {
        time,
        longitude,
        latitude,
    })
}

/// [`mooncross_node`] in UT
pub fn mooncross_node_ut(jd_ut: f64, flag: i32) -> Result<MoonNodeCrossing> {
    let mut serr = ErrorBuffer::new();
    let (mut longitude, mut latitude) = (0.0, 0.0);
    let time = with_native(|| unsafe {
        ffi::swe_mooncross_node_ut(jd_ut, flag, &mut longitude, &mut latitude, serr.as_mut_ptr())
    });
    let time = crossing_result("swe_mooncross_node_ut", &serr, jd_ut, time)?;
    Ok(MoonNodeCrossing {
        time,
        longitude,
        latitude,
    })
}

/// Next time (JD ET) a planet reaches heliocentric longitude `x2cross`
///
/// Searches backward when `backward` is set.
pub fn helio_cross(ipl: i32, x2cross: f64, jd_et: f64, iflag: i32, backward: bool) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let mut jd_cross = 0.0;
    let dir = if backward { -1 } else { 1 };
    let flag = with_native(|| unsafe {
        ffi::swe_helio_cross(ipl, x2cross, jd_et, iflag, dir, &mut jd_cross, serr.as_mut_ptr())
    });
    serr.check("swe_helio_cross", flag)?;
    Ok(jd_cross)
}

/// [`helio_cross`] in UT
pub fn helio_cross_ut(
    ipl: i32,
    x2cross: f64,
    jd_ut: f64,
    iflag: i32,
    backward: bool,
) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let mut jd_cross = 0.0;
    let dir = if backward { -1 } else { 1 };
    let flag = with_native(|| unsafe {
        ffi::swe_helio_cross_ut(ipl, x2cross, jd_ut, iflag, dir, &mut jd_cross, serr.as_mut_ptr())
    });
    serr.check("swe_helio_cross_ut", flag)?;
    Ok(jd_cross)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_message_with_valid_time_is_success() {
        let serr = ErrorBuffer::with_text("SwissEph file 'sepl_18.se1' not found\nusing Moshier eph.");
        let time = crossing_result("swe_solcross_ut", &serr, 2451545.0, 2451623.8).unwrap();
        assert_eq!(time, 2451623.8);
    }

    #[test]
    fn test_time_before_start_is_error() {
        let serr = ErrorBuffer::with_text("illegal planet number");
        let err = crossing_result("swe_solcross_ut", &serr, 2451545.0, 2451544.0).unwrap_err();
        assert_eq!(err.code(), Some(ffi::ERR));
        assert_eq!(err.native_message(), Some("illegal planet number"));
    }

    #[test]
    fn test_clean_crossing() {
        let serr = ErrorBuffer::new();
        assert_eq!(crossing_result("swe_mooncross", &serr, 0.0, 1.5).unwrap(), 1.5);
    }
}
