//! Calendar and time-scale conversions against known reference values.

mod support;

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use support::{assert_close, jd, session, J2000};
use swisseph::{calendar, Error, UtcDateTime};

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

// =========================================================
// Julian day
// =========================================================

#[test]
fn test_julday_j2000() {
    let _eph = session();
    assert_eq!(swisseph::julday(2000, 1, 1, 12.0, calendar::GREGORIAN), J2000);
}

#[test]
fn test_revjul_j2000() {
    let _eph = session();
    let date = swisseph::revjul(J2000, calendar::GREGORIAN);
    assert_eq!((date.year, date.month, date.day), (2000, 1, 1));
    assert_close(date.hour, 12.0, 1e-9, "hour");
}

proptest! {
    #[test]
    fn prop_calendar_round_trip(
        year in -3000i32..3000,
        month in 1i32..=12,
        day in 1i32..=28,
        hour in 0.0f64..23.99,
        gregorian in any::<bool>(),
    ) {
        let _eph = session();
        let gregflag = if gregorian { calendar::GREGORIAN } else { calendar::JULIAN };
        let tjd = swisseph::julday(year, month, day, hour, gregflag);
        let back = swisseph::revjul(tjd, gregflag);
        prop_assert_eq!((back.year, back.month, back.day), (year, month, day));
        prop_assert!((back.hour - hour).abs() < 1e-6, "hour {} became {}", hour, back.hour);
    }
}

#[test]
fn test_julian_and_gregorian_differ_by_thirteen_days_in_2000() {
    let _eph = session();
    let greg = swisseph::julday(2000, 1, 1, 0.0, calendar::GREGORIAN);
    let jul = swisseph::julday(2000, 1, 1, 0.0, calendar::JULIAN);
    assert_eq!(jul - greg, 13.0);
}

#[test]
fn test_julday_from_datetime() {
    let _eph = session();
    let dt = datetime(2000, 1, 1, 18, 0, 0);
    assert_close(swisseph::julday_from_datetime(&dt), J2000 + 0.25, 1e-9, "JD");
}

// =========================================================
// Checked date conversion
// =========================================================

#[test]
fn test_date_conversion_valid() {
    let _eph = session();
    let tjd = swisseph::date_conversion(2000, 1, 1, 12.0, 'g').unwrap();
    assert_eq!(tjd, J2000);
}

#[test]
fn test_date_conversion_rejects_invalid_date() {
    let _eph = session();
    let err = swisseph::date_conversion(2023, 2, 30, 0.0, 'g').unwrap_err();
    match err {
        Error::InvalidDate {
            year,
            month,
            day,
            calendar,
        } => assert_eq!((year, month, day, calendar), (2023, 2, 30, 'g')),
        other => panic!("expected InvalidDate, got {:?}", other),
    }
}

#[test]
fn test_date_conversion_julian_leap_year() {
    let _eph = session();
    // 1900 is a leap year only in the Julian calendar
    assert!(swisseph::date_conversion(1900, 2, 29, 0.0, 'j').is_ok());
    assert!(swisseph::date_conversion(1900, 2, 29, 0.0, 'g').is_err());
}

#[test]
fn test_date_conversion_passes_calendar_through() {
    let _eph = session();
    // Anything other than 'g' is read as the Julian calendar
    let julian = swisseph::date_conversion(1900, 2, 29, 0.0, 'j').unwrap();
    let other = swisseph::date_conversion(1900, 2, 29, 0.0, 'x').unwrap();
    assert_eq!(other, julian);
}

// =========================================================
// UTC and time scales
// =========================================================

#[test]
fn test_utc_to_jd() {
    let _eph = session();
    let pair = swisseph::utc_to_jd(2000, 1, 1, 12, 0, 0.0, calendar::GREGORIAN).unwrap();
    assert_close(pair.et, J2000, 0.01, "ET");
    assert!(pair.et > pair.ut, "ET runs ahead of UT in 2000");
}

#[test]
fn test_utc_to_jd_invalid_date_is_error() {
    let _eph = session();
    let err = swisseph::utc_to_jd(2023, 13, 1, 0, 0, 0.0, calendar::GREGORIAN).unwrap_err();
    assert!(err.code().unwrap() < 0);
    assert!(!err.native_message().unwrap().is_empty());
}

#[test]
fn test_utc_round_trip_through_ut1() {
    let _eph = session();
    let expected = datetime(2010, 6, 15, 8, 30, 0);
    let pair = swisseph::utc_to_jd_from_datetime(&expected).unwrap();

    let back = swisseph::jdut1_to_utc(pair.ut, calendar::GREGORIAN);
    let dt = back.to_naive_datetime().unwrap();
    assert!((dt - expected).num_milliseconds().abs() < 10, "{} != {}", dt, expected);

    let back = swisseph::jdet_to_utc(pair.et, calendar::GREGORIAN);
    let dt = back.to_naive_datetime().unwrap();
    assert!((dt - expected).num_milliseconds().abs() < 10, "{} != {}", dt, expected);
}

#[test]
fn test_utc_time_zone_crosses_midnight() {
    let _eph = session();
    let local = UtcDateTime {
        year: 2000,
        month: 1,
        day: 1,
        hour: 0,
        minute: 30,
        second: 0.0,
    };
    let utc = swisseph::utc_time_zone(local, 1.0);
    assert_eq!((utc.year, utc.month, utc.day), (1999, 12, 31));
    assert_eq!((utc.hour, utc.minute), (23, 30));
    assert_close(utc.second, 0.0, 1e-6, "second");
}

#[test]
fn test_deltat_around_2000() {
    let _eph = session();
    let seconds = swisseph::deltat(J2000) * 86400.0;
    assert!((60.0..70.0).contains(&seconds), "delta T = {}s", seconds);

    let ex = swisseph::deltat_ex(J2000, swisseph::flag::MOSEPH);
    assert_close(ex.value * 86400.0, seconds, 1.0, "deltat_ex");
}

#[test]
fn test_time_equation_and_local_time() {
    let _eph = session();
    let te = swisseph::time_equ(J2000).unwrap();
    assert!(te.abs() < 20.0 / 1440.0, "equation of time {} days", te);

    let lmt = jd(2000, 6, 21, 12.0);
    let lat = swisseph::lmt_to_lat(lmt, 8.55).unwrap();
    let back = swisseph::lat_to_lmt(lat, 8.55).unwrap();
    assert_close(back, lmt, 1e-5, "LAT -> LMT");
}

#[test]
fn test_sidereal_time_range() {
    let _eph = session();
    for offset in 0..48 {
        let st = swisseph::sidtime(J2000 + offset as f64 * 0.37);
        assert!((0.0..24.0).contains(&st), "sidereal time {}", st);
    }
}

#[test]
fn test_sidtime0_matches_sidtime_with_true_obliquity() {
    let _eph = session();
    let tjd_et = J2000 + swisseph::deltat(J2000);
    let nut = swisseph::calc(tjd_et, swisseph::planet::ECL_NUT, swisseph::flag::MOSEPH).unwrap();
    // data[0] true obliquity, data[2] nutation in longitude
    let st0 = swisseph::sidtime0(J2000, nut.data[0], nut.data[2]);
    assert_close(st0, swisseph::sidtime(J2000), 1e-4, "sidtime0");
}

#[test]
fn test_day_of_week() {
    let _eph = session();
    // Saturday, with Monday = 0
    assert_eq!(swisseph::day_of_week(jd(2000, 1, 1, 0.0)), 5);
    assert_eq!(swisseph::day_of_week(jd(2024, 4, 8, 12.0)), 0);
}

#[test]
fn test_conversions_are_deterministic() {
    let _eph = session();
    let a = swisseph::utc_to_jd(1987, 3, 14, 3, 14, 15.9, calendar::GREGORIAN).unwrap();
    let b = swisseph::utc_to_jd(1987, 3, 14, 3, 14, 15.9, calendar::GREGORIAN).unwrap();
    assert_eq!(a.et.to_bits(), b.et.to_bits());
    assert_eq!(a.ut.to_bits(), b.ut.to_bits());
}
