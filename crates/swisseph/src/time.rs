//! Calendar and time-scale conversions

use crate::constants::calendar;
use crate::error::{Error, Result};
use crate::lock::with_native;
use crate::marshal::ErrorBuffer;
use crate::types::{CalendarDate, DeltaT, JulianDayPair, UtcDateTime};
use chrono::{Datelike, NaiveDateTime, Timelike};
use log::warn;
use std::os::raw::c_char;
use swisseph_sys as ffi;

/// Julian day number of a calendar date
///
/// `gregflag` is [`calendar::GREGORIAN`] or [`calendar::JULIAN`]. The date is
/// not validated; see [`date_conversion`] for a checked variant.
pub fn julday(year: i32, month: i32, day: i32, hour: f64, gregflag: i32) -> f64 {
    with_native(|| unsafe { ffi::swe_julday(year, month, day, hour, gregflag) })
}

/// Calendar date of a Julian day number
pub fn revjul(jd: f64, gregflag: i32) -> CalendarDate {
    let (mut year, mut month, mut day, mut hour) = (0, 0, 0, 0.0);
    with_native(|| unsafe {
        ffi::swe_revjul(jd, gregflag, &mut year, &mut month, &mut day, &mut hour)
    });
    CalendarDate {
        year,
        month,
        day,
        hour,
    }
}

/// Validated calendar date to Julian day
///
/// `calendar` is `'g'` for Gregorian; the library reads any other value as
/// Julian. Fails with [`Error::InvalidDate`] when the date does not exist in
/// that calendar.
pub fn date_conversion(year: i32, month: i32, day: i32, hour: f64, calendar: char) -> Result<f64> {
    let c_calendar = u8::try_from(calendar).map_err(|_| {
        Error::InvalidInput(format!("Calendar {:?} does not fit in a C char", calendar))
    })?;
    let mut tjd = 0.0;
    let flag = with_native(|| unsafe {
        ffi::swe_date_conversion(year, month, day, hour, c_calendar as c_char, &mut tjd)
    });
    if flag == ffi::ERR {
        return Err(Error::InvalidDate {
            year,
            month,
            day,
            calendar,
        });
    }
    Ok(tjd)
}

/// UTC instant to Julian days in ET (TT) and UT1
///
/// Leap seconds are taken into account. Fails for an invalid date.
pub fn utc_to_jd(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
    gregflag: i32,
) -> Result<JulianDayPair> {
    let mut serr = ErrorBuffer::new();
    let mut dret = [0.0f64; 2];
    let flag = with_native(|| unsafe {
        ffi::swe_utc_to_jd(
            year,
            month,
            day,
            hour,
            minute,
            second,
            gregflag,
            dret.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    serr.check("swe_utc_to_jd", flag)?;
    Ok(JulianDayPair {
        et: dret[0],
        ut: dret[1],
    })
}

type UtcParts = (i32, i32, i32, i32, i32, f64);

fn utc_from_parts((year, month, day, hour, minute, second): UtcParts) -> UtcDateTime {
    UtcDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    }
}

/// Julian day ET (TT) to UTC
pub fn jdet_to_utc(tjd_et: f64, gregflag: i32) -> UtcDateTime {
    let mut p: UtcParts = (0, 0, 0, 0, 0, 0.0);
    with_native(|| unsafe {
        ffi::swe_jdet_to_utc(
            tjd_et, gregflag, &mut p.0, &mut p.1, &mut p.2, &mut p.3, &mut p.4, &mut p.5,
        )
    });
    utc_from_parts(p)
}

/// Julian day UT1 to UTC
pub fn jdut1_to_utc(tjd_ut: f64, gregflag: i32) -> UtcDateTime {
    let mut p: UtcParts = (0, 0, 0, 0, 0, 0.0);
    with_native(|| unsafe {
        ffi::swe_jdut1_to_utc(
            tjd_ut, gregflag, &mut p.0, &mut p.1, &mut p.2, &mut p.3, &mut p.4, &mut p.5,
        )
    });
    utc_from_parts(p)
}

/// Shift a broken-down time by a time zone offset
///
/// Local time to UTC uses a positive `timezone` (hours east); UTC to local
/// time uses the negated offset.
pub fn utc_time_zone(time: UtcDateTime, timezone: f64) -> UtcDateTime {
    let mut p: UtcParts = (0, 0, 0, 0, 0, 0.0);
    with_native(|| unsafe {
        ffi::swe_utc_time_zone(
            time.year,
            time.month,
            time.day,
            time.hour,
            time.minute,
            time.second,
            timezone,
            &mut p.0,
            &mut p.1,
            &mut p.2,
            &mut p.3,
            &mut p.4,
            &mut p.5,
        )
    });
    utc_from_parts(p)
}

/// Delta T (ET - UT) in days
pub fn deltat(tjd: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_deltat(tjd) })
}

/// Delta T in days, consistent with the ephemeris selected by `iflag`
///
/// The library reports a mismatch between the requested and the available
/// ephemeris as a warning; the value is still usable.
pub fn deltat_ex(tjd: f64, iflag: i32) -> DeltaT {
    let mut serr = ErrorBuffer::new();
    let value = with_native(|| unsafe { ffi::swe_deltat_ex(tjd, iflag, serr.as_mut_ptr()) });
    let warning = serr.message();
    if let Some(msg) = &warning {
        warn!("swe_deltat_ex: {}", msg);
    }
    DeltaT { value, warning }
}

/// Equation of time (LAT - LMT) in days
pub fn time_equ(tjd_ut: f64) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let mut te = 0.0;
    let flag = with_native(|| unsafe { ffi::swe_time_equ(tjd_ut, &mut te, serr.as_mut_ptr()) });
    serr.check("swe_time_equ", flag)?;
    Ok(te)
}

/// Local mean time to local apparent time
pub fn lmt_to_lat(tjd_lmt: f64, longitude: f64) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let mut tjd_lat = 0.0;
    let flag = with_native(|| unsafe {
        ffi::swe_lmt_to_lat(tjd_lmt, longitude, &mut tjd_lat, serr.as_mut_ptr())
    });
    serr.check("swe_lmt_to_lat", flag)?;
    Ok(tjd_lat)
}

/// Local apparent time to local mean time
pub fn lat_to_lmt(tjd_lat: f64, longitude: f64) -> Result<f64> {
    let mut serr = ErrorBuffer::new();
    let mut tjd_lmt = 0.0;
    let flag = with_native(|| unsafe {
        ffi::swe_lat_to_lmt(tjd_lat, longitude, &mut tjd_lmt, serr.as_mut_ptr())
    });
    serr.check("swe_lat_to_lmt", flag)?;
    Ok(tjd_lmt)
}

/// Greenwich apparent sidereal time, hours in [0, 24)
pub fn sidtime(tjd_ut: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_sidtime(tjd_ut) })
}

/// Sidereal time with caller-supplied obliquity and nutation (degrees)
pub fn sidtime0(tjd_ut: f64, eps: f64, nut: f64) -> f64 {
    with_native(|| unsafe { ffi::swe_sidtime0(tjd_ut, eps, nut) })
}

/// Day of week, Monday = 0 through Sunday = 6
pub fn day_of_week(jd: f64) -> i32 {
    with_native(|| unsafe { ffi::swe_day_of_week(jd) })
}

fn decimal_hour(dt: &NaiveDateTime) -> f64 {
    dt.hour() as f64
        + dt.minute() as f64 / 60.0
        + (dt.second() as f64 + dt.nanosecond() as f64 / 1e9) / 3600.0
}

/// Julian day of a proleptic Gregorian datetime
pub fn julday_from_datetime(dt: &NaiveDateTime) -> f64 {
    julday(
        dt.year(),
        dt.month() as i32,
        dt.day() as i32,
        decimal_hour(dt),
        calendar::GREGORIAN,
    )
}

/// [`utc_to_jd`] for a chrono datetime interpreted as UTC
pub fn utc_to_jd_from_datetime(dt: &NaiveDateTime) -> Result<JulianDayPair> {
    utc_to_jd(
        dt.year(),
        dt.month() as i32,
        dt.day() as i32,
        dt.hour() as i32,
        dt.minute() as i32,
        dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        calendar::GREGORIAN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_decimal_hour() {
        let dt = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(18, 30, 36)
            .unwrap();
        assert!((decimal_hour(&dt) - 18.51).abs() < 1e-12);
    }

    #[test]
    fn test_wide_calendar_char_is_invalid_input() {
        let err = date_conversion(2000, 1, 1, 0.0, '\u{011f}').unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
