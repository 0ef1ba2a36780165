//! Rising, setting and meridian transits

use crate::constants::rise;
use crate::error::Result;
use crate::lock::with_native;
use crate::marshal::{ErrorBuffer, NameBuffer};
use crate::types::{Body, GeoPosition, RiseTransit};
use swisseph_sys as ffi;

fn rise_transit_result(
    context: &str,
    flag: i32,
    serr: &ErrorBuffer,
    time: f64,
    body: &Body,
    star: &NameBuffer,
) -> Result<RiseTransit> {
    if flag == rise::CIRCUMPOLAR {
        return Ok(RiseTransit::Circumpolar);
    }
    serr.check(context, flag)?;
    Ok(RiseTransit::Event {
        flag,
        time,
        star_name: body.resolved_name(star),
    })
}

/// Next rise, set or transit of a body after `tjd_ut`
///
/// `rsmi` combines one of the `CALC_*` selectors of [`crate::rise`] with its
/// `BIT_*` options. `pressure` (mbar) and `temperature` (Celsius) feed the
/// refraction model; a zero pressure is estimated from the altitude.
pub fn rise_trans(
    tjd_ut: f64,
    body: &Body,
    epheflag: i32,
    rsmi: i32,
    position: GeoPosition,
    pressure: f64,
    temperature: f64,
) -> Result<RiseTransit> {
    let (ipl, mut star) = body.to_native()?;
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut tret = [0.0f64; ffi::TRET_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_rise_trans(
            tjd_ut,
            ipl,
            star.as_mut_ptr(),
            epheflag,
            rsmi,
            geopos.as_mut_ptr(),
            pressure,
            temperature,
            tret.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    rise_transit_result("swe_rise_trans", flag, &serr, tret[0], body, &star)
}

/// [`rise_trans`] against a horizon at `horizon_height` degrees
pub fn rise_trans_true_hor(
    tjd_ut: f64,
    body: &Body,
    epheflag: i32,
    rsmi: i32,
    position: GeoPosition,
    pressure: f64,
    temperature: f64,
    horizon_height: f64,
) -> Result<RiseTransit> {
    let (ipl, mut star) = body.to_native()?;
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut tret = [0.0f64; ffi::TRET_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_rise_trans_true_hor(
            tjd_ut,
            ipl,
            star.as_mut_ptr(),
            epheflag,
            rsmi,
            geopos.as_mut_ptr(),
            pressure,
            temperature,
            horizon_height,
            tret.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    rise_transit_result("swe_rise_trans_true_hor", flag, &serr, tret[0], body, &star)
}
