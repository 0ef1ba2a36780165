//! Planetary positions and related quantities
//!
//! All functions take a Julian day, a body number from [`crate::planet`] and
//! a combination of [`crate::flag`] bits. The `_ut` variants take Universal
//! Time, the others Ephemeris Time (TT).

use crate::error::Result;
use crate::lock::with_native;
use crate::marshal::{static_string, ErrorBuffer, TextBuffer};
use crate::types::{
    Ayanamsa, EphemerisFile, NodesApsides, OrbitDistances, OrbitalElements, Phenomena, Position,
};
use swisseph_sys as ffi;

/// Position of a body at a Julian day ET
///
/// The returned `flag` may differ from `iflag`, for example when the Swiss
/// Ephemeris files are missing and the library falls back to the Moshier
/// ephemeris; the reason is in `warning`.
pub fn calc(tjd_et: f64, ipl: i32, iflag: i32) -> Result<Position> {
    let mut serr = ErrorBuffer::new();
    let mut xx = [0.0f64; ffi::XX_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_calc(tjd_et, ipl, iflag, xx.as_mut_ptr(), serr.as_mut_ptr())
    });
    let warning = serr.check("swe_calc", flag)?;
    Ok(Position {
        flag,
        data: xx,
        warning,
    })
}

/// Position of a body at a Julian day UT
pub fn calc_ut(tjd_ut: f64, ipl: i32, iflag: i32) -> Result<Position> {
    let mut serr = ErrorBuffer::new();
    let mut xx = [0.0f64; ffi::XX_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_calc_ut(tjd_ut, ipl, iflag, xx.as_mut_ptr(), serr.as_mut_ptr())
    });
    let warning = serr.check("swe_calc_ut", flag)?;
    Ok(Position {
        flag,
        data: xx,
        warning,
    })
}

/// Position of `ipl` as seen from the body `iplctr` (planetocentric)
pub fn calc_pctr(tjd_et: f64, ipl: i32, iplctr: i32, iflag: i32) -> Result<Position> {
    let mut serr = ErrorBuffer::new();
    let mut xx = [0.0f64; ffi::XX_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_calc_pctr(tjd_et, ipl, iplctr, iflag, xx.as_mut_ptr(), serr.as_mut_ptr())
    });
    let warning = serr.check("swe_calc_pctr", flag)?;
    Ok(Position {
        flag,
        data: xx,
        warning,
    })
}

/// Name of a body, e.g. "Mars"
pub fn planet_name(ipl: i32) -> String {
    let mut buf = TextBuffer::new();
    with_native(|| unsafe { ffi::swe_get_planet_name(ipl, buf.as_mut_ptr()) });
    buf.text()
}

/// Ayanamsa of the current sidereal mode at a Julian day ET
pub fn ayanamsa(tjd_et: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_get_ayanamsa(tjd_et) })
}

/// Ayanamsa of the current sidereal mode at a Julian day UT
pub fn ayanamsa_ut(tjd_ut: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_get_ayanamsa_ut(tjd_ut) })
}

/// Ayanamsa including nutation when `iflag` asks for it
pub fn ayanamsa_ex(tjd_et: f64, iflag: i32) -> Result<Ayanamsa> {
    let mut serr = ErrorBuffer::new();
    let mut daya = 0.0;
    let flag = with_native(|| unsafe {
        ffi::swe_get_ayanamsa_ex(tjd_et, iflag, &mut daya, serr.as_mut_ptr())
    });
    let warning = serr.check("swe_get_ayanamsa_ex", flag)?;
    Ok(Ayanamsa {
        flag,
        value: daya,
        warning,
    })
}

/// [`ayanamsa_ex`] at a Julian day UT
pub fn ayanamsa_ex_ut(tjd_ut: f64, iflag: i32) -> Result<Ayanamsa> {
    let mut serr = ErrorBuffer::new();
    let mut daya = 0.0;
    let flag = with_native(|| unsafe {
        ffi::swe_get_ayanamsa_ex_ut(tjd_ut, iflag, &mut daya, serr.as_mut_ptr())
    });
    let warning = serr.check("swe_get_ayanamsa_ex_ut", flag)?;
    Ok(Ayanamsa {
        flag,
        value: daya,
        warning,
    })
}

/// Name of a sidereal mode, `None` for an unknown mode
pub fn ayanamsa_name(sid_mode: i32) -> Option<String> {
    let name = with_native(|| unsafe { static_string(ffi::swe_get_ayanamsa_name(sid_mode)) });
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Phase, elongation, apparent diameter and magnitude at a Julian day ET
pub fn pheno(tjd_et: f64, ipl: i32, iflag: i32) -> Result<Phenomena> {
    let mut serr = ErrorBuffer::new();
    let mut attr = [0.0f64; ffi::ATTR_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_pheno(tjd_et, ipl, iflag, attr.as_mut_ptr(), serr.as_mut_ptr())
    });
    let warning = serr.check("swe_pheno", flag)?;
    Ok(Phenomena::from_attr(flag, attr, warning))
}

/// [`pheno`] at a Julian day UT
pub fn pheno_ut(tjd_ut: f64, ipl: i32, iflag: i32) -> Result<Phenomena> {
    let mut serr = ErrorBuffer::new();
    let mut attr = [0.0f64; ffi::ATTR_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_pheno_ut(tjd_ut, ipl, iflag, attr.as_mut_ptr(), serr.as_mut_ptr())
    });
    let warning = serr.check("swe_pheno_ut", flag)?;
    Ok(Phenomena::from_attr(flag, attr, warning))
}

/// Nodes and apsides of a body at a Julian day ET
///
/// `method` is a combination of [`crate::nodbit`] bits.
pub fn nod_aps(tjd_et: f64, ipl: i32, iflag: i32, method: i32) -> Result<NodesApsides> {
    let mut serr = ErrorBuffer::new();
    let mut nasc = [0.0f64; ffi::XX_ARRAY_LEN];
    let mut ndsc = [0.0f64; ffi::XX_ARRAY_LEN];
    let mut peri = [0.0f64; ffi::XX_ARRAY_LEN];
    let mut aphe = [0.0f64; ffi::XX_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_nod_aps(
            tjd_et,
            ipl,
            iflag,
            method,
            nasc.as_mut_ptr(),
            ndsc.as_mut_ptr(),
            peri.as_mut_ptr(),
            aphe.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_nod_aps", flag)?;
    Ok(NodesApsides {
        flag,
        ascending: nasc,
        descending: ndsc,
        perihelion: peri,
        aphelion: aphe,
        warning,
    })
}

/// [`nod_aps`] at a Julian day UT
pub fn nod_aps_ut(tjd_ut: f64, ipl: i32, iflag: i32, method: i32) -> Result<NodesApsides> {
    let mut serr = ErrorBuffer::new();
    let mut nasc = [0.0f64; ffi::XX_ARRAY_LEN];
    let mut ndsc = [0.0f64; ffi::XX_ARRAY_LEN];
    let mut peri = [0.0f64; ffi::XX_ARRAY_LEN];
    let mut aphe = [0.0f64; ffi::XX_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_nod_aps_ut(
            tjd_ut,
            ipl,
            iflag,
            method,
            nasc.as_mut_ptr(),
            ndsc.as_mut_ptr(),
            peri.as_mut_ptr(),
            aphe.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_nod_aps_ut", flag)?;
    Ok(NodesApsides {
        flag,
        ascending: nasc,
        descending: ndsc,
        perihelion: peri,
        aphelion: aphe,
        warning,
    })
}

/// Osculating orbital elements at a Julian day ET
pub fn orbital_elements(tjd_et: f64, ipl: i32, iflag: i32) -> Result<OrbitalElements> {
    let mut serr = ErrorBuffer::new();
    let mut dret = [0.0f64; ffi::DRET_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_get_orbital_elements(tjd_et, ipl, iflag, dret.as_mut_ptr(), serr.as_mut_ptr())
    });
    let warning = serr.check("swe_get_orbital_elements", flag)?;
    Ok(OrbitalElements {
        flag,
        elements: dret.to_vec(),
        warning,
    })
}

/// Maximum, minimum and current true distance of a body, AU
pub fn orbit_max_min_true_distance(tjd_et: f64, ipl: i32, iflag: i32) -> Result<OrbitDistances> {
    let mut serr = ErrorBuffer::new();
    let (mut dmax, mut dmin, mut dtrue) = (0.0, 0.0, 0.0);
    let flag = with_native(|| unsafe {
        ffi::swe_orbit_max_min_true_distance(
            tjd_et,
            ipl,
            iflag,
            &mut dmax,
            &mut dmin,
            &mut dtrue,
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_orbit_max_min_true_distance", flag)?;
    Ok(OrbitDistances {
        flag,
        max: dmax,
        min: dmin,
        current: dtrue,
        warning,
    })
}

/// Data of an ephemeris file the library currently has open
///
/// `ifno` selects the file: 0 planets, 1 Moon, 2 main asteroids, 3 other
/// asteroid, 4 planetary moon. `None` if no such file is open.
pub fn current_file_data(ifno: i32) -> Option<EphemerisFile> {
    let (mut start, mut end, mut denum) = (0.0, 0.0, 0);
    let path = with_native(|| unsafe {
        static_string(ffi::swe_get_current_file_data(
            ifno, &mut start, &mut end, &mut denum,
        ))
    });
    if path.is_empty() {
        None
    } else {
        Some(EphemerisFile {
            path,
            start,
            end,
            denum,
        })
    }
}
