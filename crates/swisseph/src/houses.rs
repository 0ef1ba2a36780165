//! House cusps, house positions and Gauquelin sectors
//!
//! House systems are given by their ASCII code, see
//! [`crate::house_system`].

use crate::constants::house_system;
use crate::error::{Error, Result};
use crate::lock::with_native;
use crate::marshal::{static_string, ErrorBuffer};
use crate::types::{AngularPoints, Body, GeoPosition, Houses};
use std::os::raw::c_int;
use swisseph_sys as ffi;

type CuspArray = [f64; ffi::CUSP_ARRAY_LEN];
type AscmcArray = [f64; ffi::ASCMC_ARRAY_LEN];

fn cusp_slice(cusps: &CuspArray, hsys: u8, flag: i32) -> Vec<f64> {
    let count = if flag == ffi::OK {
        house_system::cusp_count(hsys)
    } else {
        12
    };
    cusps[1..=count].to_vec()
}

/// Output arrays of the `*_ex2` house functions
struct HouseBuffers {
    cusps: CuspArray,
    ascmc: AscmcArray,
    cusp_speed: CuspArray,
    ascmc_speed: AscmcArray,
}

impl HouseBuffers {
    fn new() -> Self {
        Self {
            cusps: [0.0; ffi::CUSP_ARRAY_LEN],
            ascmc: [0.0; ffi::ASCMC_ARRAY_LEN],
            cusp_speed: [0.0; ffi::CUSP_ARRAY_LEN],
            ascmc_speed: [0.0; ffi::ASCMC_ARRAY_LEN],
        }
    }

    fn into_houses(
        self,
        hsys: u8,
        flag: i32,
        warning: Option<String>,
        with_speeds: bool,
    ) -> Houses {
        let (cusp_speeds, point_speeds) = if with_speeds {
            (
                Some(cusp_slice(&self.cusp_speed, hsys, flag)),
                Some(AngularPoints::from_ascmc(&self.ascmc_speed)),
            )
        } else {
            (None, None)
        };
        Houses {
            flag,
            cusps: cusp_slice(&self.cusps, hsys, flag),
            points: AngularPoints::from_ascmc(&self.ascmc),
            cusp_speeds,
            point_speeds,
            warning,
        }
    }
}

fn houses_at(
    tjd_ut: f64,
    iflag: i32,
    latitude: f64,
    longitude: f64,
    hsys: u8,
    with_speeds: bool,
) -> Result<Houses> {
    let mut serr = ErrorBuffer::new();
    let mut buf = HouseBuffers::new();
    let flag = with_native(|| unsafe {
        ffi::swe_houses_ex2(
            tjd_ut,
            iflag,
            latitude,
            longitude,
            hsys as c_int,
            buf.cusps.as_mut_ptr(),
            buf.ascmc.as_mut_ptr(),
            buf.cusp_speed.as_mut_ptr(),
            buf.ascmc_speed.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_houses_ex2", flag)?;
    Ok(buf.into_houses(hsys, flag, warning, with_speeds))
}

fn houses_from_armc(
    armc: f64,
    latitude: f64,
    eps: f64,
    hsys: u8,
    with_speeds: bool,
) -> Result<Houses> {
    let mut serr = ErrorBuffer::new();
    let mut buf = HouseBuffers::new();
    let flag = with_native(|| unsafe {
        ffi::swe_houses_armc_ex2(
            armc,
            latitude,
            eps,
            hsys as c_int,
            buf.cusps.as_mut_ptr(),
            buf.ascmc.as_mut_ptr(),
            buf.cusp_speed.as_mut_ptr(),
            buf.ascmc_speed.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_houses_armc_ex2", flag)?;
    Ok(buf.into_houses(hsys, flag, warning, with_speeds))
}

/// House cusps for a date and geographic position
pub fn houses(tjd_ut: f64, latitude: f64, longitude: f64, hsys: u8) -> Result<Houses> {
    houses_at(tjd_ut, 0, latitude, longitude, hsys, false)
}

/// [`houses`] with calculation flags (sidereal, radians)
pub fn houses_ex(
    tjd_ut: f64,
    iflag: i32,
    latitude: f64,
    longitude: f64,
    hsys: u8,
) -> Result<Houses> {
    houses_at(tjd_ut, iflag, latitude, longitude, hsys, false)
}

/// [`houses_ex`] including the speeds of cusps and angular points
pub fn houses_ex2(
    tjd_ut: f64,
    iflag: i32,
    latitude: f64,
    longitude: f64,
    hsys: u8,
) -> Result<Houses> {
    houses_at(tjd_ut, iflag, latitude, longitude, hsys, true)
}

/// House cusps from a sidereal time (ARMC, degrees) and obliquity
pub fn houses_armc(armc: f64, latitude: f64, eps: f64, hsys: u8) -> Result<Houses> {
    houses_from_armc(armc, latitude, eps, hsys, false)
}

/// [`houses_armc`] including speeds
pub fn houses_armc_ex2(armc: f64, latitude: f64, eps: f64, hsys: u8) -> Result<Houses> {
    houses_from_armc(armc, latitude, eps, hsys, true)
}

/// House position of a point given by ecliptic longitude and latitude
///
/// The result is in [1, 13) (or [1, 37) for Gauquelin sectors); the
/// fractional part is the position within the house.
pub fn house_pos(
    armc: f64,
    geo_latitude: f64,
    eps: f64,
    hsys: u8,
    longitude: f64,
    latitude: f64,
) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let mut xpin = [longitude, latitude];
    let pos = with_native(|| unsafe {
        ffi::swe_house_pos(
            armc,
            geo_latitude,
            eps,
            hsys as c_int,
            xpin.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    if let Some(message) = serr.message() {
        return Err(Error::native(ffi::ERR, message));
    }
    Ok(pos)
}

/// Name of a house system, e.g. "Placidus"
pub fn house_name(hsys: u8) -> String {
    with_native(|| unsafe { static_string(ffi::swe_house_name(hsys as c_int)) })
}

/// Gauquelin sector position of a body
///
/// `method` selects the computation (0-5 in the native documentation:
/// with/without latitude, or from rising and setting times).
pub fn gauquelin_sector(
    tjd_ut: f64,
    body: &Body,
    iflag: i32,
    method: i32,
    position: GeoPosition,
    pressure: f64,
    temperature: f64,
) -> Result<f64> {
    let (ipl, mut star) = body.to_native()?;
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut dgsect = 0.0;
    let flag = with_native(|| unsafe {
        ffi::swe_gauquelin_sector(
            tjd_ut,
            ipl,
            star.as_mut_ptr(),
            iflag,
            method,
            geopos.as_mut_ptr(),
            pressure,
            temperature,
            &mut dgsect,
            serr.as_mut_ptr(),
        )
    });
    serr.check("swe_gauquelin_sector", flag)?;
    Ok(dgsect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> CuspArray {
        let mut cusps = [0.0; ffi::CUSP_ARRAY_LEN];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = i as f64;
        }
        cusps
    }

    #[test]
    fn test_cusps_skip_index_zero() {
        let cusps = cusp_slice(&numbered(), b'P', ffi::OK);
        assert_eq!(cusps.len(), 12);
        assert_eq!(cusps[0], 1.0);
        assert_eq!(cusps[11], 12.0);
    }

    #[test]
    fn test_gauquelin_returns_36_sectors() {
        let cusps = cusp_slice(&numbered(), b'G', ffi::OK);
        assert_eq!(cusps.len(), 36);
        assert_eq!(cusps[35], 36.0);
    }

    #[test]
    fn test_speeds_only_when_requested() {
        let plain = HouseBuffers::new().into_houses(b'P', ffi::OK, None, false);
        assert!(plain.cusp_speeds.is_none() && plain.point_speeds.is_none());

        let with_speeds = HouseBuffers::new().into_houses(b'G', ffi::OK, None, true);
        assert_eq!(with_speeds.cusp_speeds.map(|s| s.len()), Some(36));
        assert!(with_speeds.point_speeds.is_some());
    }
}
