//! Fixed stars
//!
//! Stars are looked up by traditional name (`"Aldebaran"`), by Bayer or
//! Flamsteed designation with a leading comma (`",alTau"`), or by sequence
//! number in the catalogue (`"5"`). The library rewrites the name buffer with
//! the resolved `"traditional name,designation"` which is returned as `name`.
//!
//! The `fixstar2` functions load the whole catalogue once and are much faster
//! for repeated lookups.

use crate::error::Result;
use crate::lock::with_native;
use crate::marshal::{ErrorBuffer, NameBuffer};
use crate::types::{FixedStar, StarMagnitude};
use std::os::raw::c_char;
use swisseph_sys as ffi;

type PositionFn = unsafe extern "C" fn(*mut c_char, f64, i32, *mut f64, *mut c_char) -> i32;
type MagnitudeFn = unsafe extern "C" fn(*mut c_char, *mut f64, *mut c_char) -> i32;

fn star_position(
    context: &str,
    native: PositionFn,
    star: &str,
    tjd: f64,
    iflag: i32,
) -> Result<FixedStar> {
    let mut name = NameBuffer::new(star)?;
    let mut serr = ErrorBuffer::new();
    let mut xx = [0.0f64; ffi::XX_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        native(
            name.as_mut_ptr(),
            tjd,
            iflag,
            xx.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check(context, flag)?;
    Ok(FixedStar {
        flag,
        name: name.text(),
        data: xx,
        warning,
    })
}

fn star_magnitude(context: &str, native: MagnitudeFn, star: &str) -> Result<StarMagnitude> {
    let mut name = NameBuffer::new(star)?;
    let mut serr = ErrorBuffer::new();
    let mut mag = 0.0;
    let flag =
        with_native(|| unsafe { native(name.as_mut_ptr(), &mut mag, serr.as_mut_ptr()) });
    let warning = serr.check(context, flag)?;
    Ok(StarMagnitude {
        flag,
        name: name.text(),
        magnitude: mag,
        warning,
    })
}

/// Position of a fixed star at a Julian day ET
pub fn fixstar(star: &str, tjd_et: f64, iflag: i32) -> Result<FixedStar> {
    star_position("swe_fixstar", ffi::swe_fixstar, star, tjd_et, iflag)
}

/// Position of a fixed star at a Julian day UT
pub fn fixstar_ut(star: &str, tjd_ut: f64, iflag: i32) -> Result<FixedStar> {
    star_position("swe_fixstar_ut", ffi::swe_fixstar_ut, star, tjd_ut, iflag)
}

/// Visual magnitude of a fixed star
pub fn fixstar_mag(star: &str) -> Result<StarMagnitude> {
    star_magnitude("swe_fixstar_mag", ffi::swe_fixstar_mag, star)
}

/// [`fixstar`] using the in-memory catalogue
pub fn fixstar2(star: &str, tjd_et: f64, iflag: i32) -> Result<FixedStar> {
    star_position("swe_fixstar2", ffi::swe_fixstar2, star, tjd_et, iflag)
}

/// [`fixstar_ut`] using the in-memory catalogue
pub fn fixstar2_ut(star: &str, tjd_ut: f64, iflag: i32) -> Result<FixedStar> {
    star_position("swe_fixstar2_ut", ffi::swe_fixstar2_ut, star, tjd_ut, iflag)
}

/// [`fixstar_mag`] using the in-memory catalogue
pub fn fixstar2_mag(star: &str) -> Result<StarMagnitude> {
    star_magnitude("swe_fixstar2_mag", ffi::swe_fixstar2_mag, star)
}
