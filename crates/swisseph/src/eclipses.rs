//! Solar and lunar eclipses, lunar occultations
//!
//! Searches start at `tjd_start` (JD UT) and run forward, or backward when
//! `backward` is set. The returned `flag` carries the [`crate::ecl`] type and
//! visibility bits of the event found.

use crate::error::Result;
use crate::lock::with_native;
use crate::marshal::{direction_flag, ErrorBuffer};
use crate::types::{Body, Eclipse, EclipseAttributes, EclipseLocation, EclipseTimes, GeoPosition};
use swisseph_sys as ffi;

type Tret = [f64; ffi::TRET_ARRAY_LEN];
type Attr = [f64; ffi::ATTR_ARRAY_LEN];

/// Next solar eclipse visible from a location
///
/// Times are local contacts: `begin` is the first and `end` the fourth
/// contact; totality (or annularity) runs from the second to the third.
/// `raw[5]`/`raw[6]` hold sunrise/sunset if they fall within the eclipse.
pub fn sol_eclipse_when_loc(
    tjd_start: f64,
    ifl: i32,
    position: GeoPosition,
    backward: bool,
) -> Result<Eclipse> {
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut tret: Tret = [0.0; ffi::TRET_ARRAY_LEN];
    let mut attr: Attr = [0.0; ffi::ATTR_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_sol_eclipse_when_loc(
            tjd_start,
            ifl,
            geopos.as_mut_ptr(),
            tret.as_mut_ptr(),
            attr.as_mut_ptr(),
            direction_flag(backward),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_sol_eclipse_when_loc", flag)?;
    Ok(Eclipse {
        flag,
        times: EclipseTimes::local(tret),
        attributes: attr,
        star_name: None,
        warning,
    })
}

/// Next solar eclipse anywhere on Earth
///
/// `ifltype` restricts the eclipse type (0 or [`crate::ecl::ALLTYPES_SOLAR`]
/// for any). `raw[6]`/`raw[7]` hold the begin and end of the centre line.
pub fn sol_eclipse_when_glob(
    tjd_start: f64,
    ifl: i32,
    ifltype: i32,
    backward: bool,
) -> Result<Eclipse> {
    let mut serr = ErrorBuffer::new();
    let mut tret: Tret = [0.0; ffi::TRET_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_sol_eclipse_when_glob(
            tjd_start,
            ifl,
            ifltype,
            tret.as_mut_ptr(),
            direction_flag(backward),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_sol_eclipse_when_glob", flag)?;
    Ok(Eclipse {
        flag,
        times: EclipseTimes::global(tret),
        attributes: [0.0; ffi::ATTR_ARRAY_LEN],
        star_name: None,
        warning,
    })
}

/// Attributes of a solar eclipse at a given time and place
///
/// `flag` is zero if there is no eclipse at that place and time.
pub fn sol_eclipse_how(tjd_ut: f64, ifl: i32, position: GeoPosition) -> Result<EclipseAttributes> {
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut attr: Attr = [0.0; ffi::ATTR_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_sol_eclipse_how(
            tjd_ut,
            ifl,
            geopos.as_mut_ptr(),
            attr.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_sol_eclipse_how", flag)?;
    Ok(EclipseAttributes {
        flag,
        attributes: attr,
        warning,
    })
}

/// Geographic position of maximum eclipse and of the central line
pub fn sol_eclipse_where(tjd_ut: f64, ifl: i32) -> Result<EclipseLocation> {
    let mut serr = ErrorBuffer::new();
    let mut geopos = [0.0f64; ffi::WHERE_GEOPOS_LEN];
    let mut attr: Attr = [0.0; ffi::ATTR_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_sol_eclipse_where(
            tjd_ut,
            ifl,
            geopos.as_mut_ptr(),
            attr.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_sol_eclipse_where", flag)?;
    Ok(EclipseLocation {
        flag,
        longitude: geopos[0],
        latitude: geopos[1],
        geopos,
        attributes: attr,
        star_name: None,
        warning,
    })
}

/// Next lunar eclipse
///
/// `begin`/`end` are the partial phase, `totality_*` the total phase;
/// `raw[6]`/`raw[7]` hold the penumbral phase.
pub fn lun_eclipse_when(
    tjd_start: f64,
    ifl: i32,
    ifltype: i32,
    backward: bool,
) -> Result<Eclipse> {
    let mut serr = ErrorBuffer::new();
    let mut tret: Tret = [0.0; ffi::TRET_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_lun_eclipse_when(
            tjd_start,
            ifl,
            ifltype,
            tret.as_mut_ptr(),
            direction_flag(backward),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_lun_eclipse_when", flag)?;
    Ok(Eclipse {
        flag,
        times: EclipseTimes::lunar(tret),
        attributes: [0.0; ffi::ATTR_ARRAY_LEN],
        star_name: None,
        warning,
    })
}

/// Next lunar eclipse visible from a location
///
/// `raw[8]`/`raw[9]` hold moonrise/moonset if they fall within the eclipse.
pub fn lun_eclipse_when_loc(
    tjd_start: f64,
    ifl: i32,
    position: GeoPosition,
    backward: bool,
) -> Result<Eclipse> {
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut tret: Tret = [0.0; ffi::TRET_ARRAY_LEN];
    let mut attr: Attr = [0.0; ffi::ATTR_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_lun_eclipse_when_loc(
            tjd_start,
            ifl,
            geopos.as_mut_ptr(),
            tret.as_mut_ptr(),
            attr.as_mut_ptr(),
            direction_flag(backward),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_lun_eclipse_when_loc", flag)?;
    Ok(Eclipse {
        flag,
        times: EclipseTimes::lunar(tret),
        attributes: attr,
        star_name: None,
        warning,
    })
}

/// Attributes of a lunar eclipse at a given time
pub fn lun_eclipse_how(tjd_ut: f64, ifl: i32, position: GeoPosition) -> Result<EclipseAttributes> {
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut attr: Attr = [0.0; ffi::ATTR_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_lun_eclipse_how(
            tjd_ut,
            ifl,
            geopos.as_mut_ptr(),
            attr.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_lun_eclipse_how", flag)?;
    Ok(EclipseAttributes {
        flag,
        attributes: attr,
        warning,
    })
}

/// Next occultation of a planet or star by the Moon visible from a location
pub fn lun_occult_when_loc(
    tjd_start: f64,
    body: &Body,
    ifl: i32,
    position: GeoPosition,
    backward: bool,
) -> Result<Eclipse> {
    let (ipl, mut star) = body.to_native()?;
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut tret: Tret = [0.0; ffi::TRET_ARRAY_LEN];
    let mut attr: Attr = [0.0; ffi::ATTR_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_lun_occult_when_loc(
            tjd_start,
            ipl,
            star.as_mut_ptr(),
            ifl,
            geopos.as_mut_ptr(),
            tret.as_mut_ptr(),
            attr.as_mut_ptr(),
            direction_flag(backward),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_lun_occult_when_loc", flag)?;
    Ok(Eclipse {
        flag,
        times: EclipseTimes::local(tret),
        attributes: attr,
        star_name: body.resolved_name(&star),
        warning,
    })
}

/// Next occultation of a planet or star by the Moon anywhere on Earth
pub fn lun_occult_when_glob(
    tjd_start: f64,
    body: &Body,
    ifl: i32,
    ifltype: i32,
    backward: bool,
) -> Result<Eclipse> {
    let (ipl, mut star) = body.to_native()?;
    let mut serr = ErrorBuffer::new();
    let mut tret: Tret = [0.0; ffi::TRET_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_lun_occult_when_glob(
            tjd_start,
            ipl,
            star.as_mut_ptr(),
            ifl,
            ifltype,
            tret.as_mut_ptr(),
            direction_flag(backward),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_lun_occult_when_glob", flag)?;
    Ok(Eclipse {
        flag,
        times: EclipseTimes::global(tret),
        attributes: [0.0; ffi::ATTR_ARRAY_LEN],
        star_name: body.resolved_name(&star),
        warning,
    })
}

/// Geographic position where an occultation is central at a given time
pub fn lun_occult_where(tjd_ut: f64, body: &Body, ifl: i32) -> Result<EclipseLocation> {
    let (ipl, mut star) = body.to_native()?;
    let mut serr = ErrorBuffer::new();
    let mut geopos = [0.0f64; ffi::WHERE_GEOPOS_LEN];
    let mut attr: Attr = [0.0; ffi::ATTR_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_lun_occult_where(
            tjd_ut,
            ipl,
            star.as_mut_ptr(),
            ifl,
            geopos.as_mut_ptr(),
            attr.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_lun_occult_where", flag)?;
    Ok(EclipseLocation {
        flag,
        longitude: geopos[0],
        latitude: geopos[1],
        geopos,
        attributes: attr,
        star_name: body.resolved_name(&star),
        warning,
    })
}
