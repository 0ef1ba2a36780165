//! House cusps, house positions and Gauquelin sectors.

mod support;

use support::{assert_close, session, J2000};
use swisseph::{flag, planet, sidm, Body, GeoPosition};

const LONDON_LAT: f64 = 51.5074;
const LONDON_LON: f64 = -0.1278;

fn true_obliquity(tjd_ut: f64) -> f64 {
    let tjd_et = tjd_ut + swisseph::deltat(tjd_ut);
    swisseph::calc(tjd_et, planet::ECL_NUT, flag::MOSEPH)
        .unwrap()
        .data[0]
}

#[test]
fn test_placidus_cusps_london() {
    let _eph = session();
    let h = swisseph::houses(J2000, LONDON_LAT, LONDON_LON, b'P').unwrap();
    assert_eq!(h.cusps.len(), 12);
    for cusp in &h.cusps {
        assert!((0.0..360.0).contains(cusp), "cusp {}", cusp);
    }
    assert_close(h.cusps[0], h.points.ascendant, 1e-9, "first cusp");
    assert_close(h.cusps[9], h.points.mc, 1e-9, "tenth cusp");
    assert!(h.cusp_speeds.is_none());
    assert!(h.warning.is_none());
}

#[test]
fn test_equal_houses_are_thirty_degrees_apart() {
    let _eph = session();
    let h = swisseph::houses(J2000, LONDON_LAT, LONDON_LON, b'E').unwrap();
    for pair in h.cusps.windows(2) {
        assert_close(swisseph::difdegn(pair[1], pair[0]), 30.0, 1e-9, "cusp spacing");
    }
}

#[test]
fn test_gauquelin_has_thirty_six_sectors() {
    let _eph = session();
    let h = swisseph::houses(J2000, LONDON_LAT, LONDON_LON, b'G').unwrap();
    assert_eq!(h.cusps.len(), 36);
}

#[test]
fn test_placidus_inside_polar_circle_is_error() {
    let _eph = session();
    let err = swisseph::houses(J2000, 80.0, 0.0, b'P').unwrap_err();
    assert!(err.code().unwrap() < 0);
    let message = err.native_message().unwrap();
    assert!(message.contains("polar"), "{}", message);

    let armc = swisseph::houses_armc(0.0, 80.0, 23.44, b'P').unwrap_err();
    assert!(!armc.native_message().unwrap().is_empty());
}

#[test]
fn test_houses_ex2_reports_speeds() {
    let _eph = session();
    let h = swisseph::houses_ex2(J2000, flag::MOSEPH, LONDON_LAT, LONDON_LON, b'P').unwrap();
    let speeds = h.cusp_speeds.expect("cusp speeds");
    assert_eq!(speeds.len(), 12);
    // The MC advances roughly 360 degrees per sidereal day
    let mc_speed = h.point_speeds.expect("point speeds").mc;
    assert!((300.0..420.0).contains(&mc_speed), "MC speed {}", mc_speed);
}

#[test]
fn test_sidereal_houses_shift_by_ayanamsa() {
    let _eph = session();
    swisseph::set_sid_mode(sidm::LAHIRI, 0.0, 0.0);
    let tropical = swisseph::houses_ex(J2000, 0, LONDON_LAT, LONDON_LON, b'P').unwrap();
    let sidereal =
        swisseph::houses_ex(J2000, flag::SIDEREAL, LONDON_LAT, LONDON_LON, b'P').unwrap();
    let ayanamsa = swisseph::ayanamsa_ut(J2000);
    let shift = swisseph::difdegn(tropical.points.ascendant, sidereal.points.ascendant);
    assert_close(shift, ayanamsa, 0.01, "ascendant shift");
}

#[test]
fn test_houses_armc_matches_houses() {
    let _eph = session();
    let h = swisseph::houses(J2000, LONDON_LAT, LONDON_LON, b'K').unwrap();
    let eps = true_obliquity(J2000);

    let from_armc = swisseph::houses_armc(h.points.armc, LONDON_LAT, eps, b'K').unwrap();
    for (a, b) in h.cusps.iter().zip(&from_armc.cusps) {
        assert_close(*b, *a, 1e-3, "cusp from ARMC");
    }

    let with_speeds = swisseph::houses_armc_ex2(h.points.armc, LONDON_LAT, eps, b'K').unwrap();
    assert_close(with_speeds.points.ascendant, h.points.ascendant, 1e-3, "ascendant");
    assert!(with_speeds.cusp_speeds.is_some());
}

#[test]
fn test_house_position_of_ascendant_is_first_cusp() {
    let _eph = session();
    let eps = true_obliquity(J2000);
    let h = swisseph::houses(J2000, LONDON_LAT, LONDON_LON, b'P').unwrap();

    let pos = swisseph::house_pos(
        h.points.armc,
        LONDON_LAT,
        eps,
        b'P',
        h.points.ascendant,
        0.0,
    )
    .unwrap();
    let offset = (pos - 1.0).abs().min((pos - 13.0).abs());
    assert!(offset < 1e-3, "house position {}", pos);

    let mc = swisseph::house_pos(h.points.armc, LONDON_LAT, eps, b'P', h.points.mc, 0.0).unwrap();
    assert_close(mc, 10.0, 1e-3, "MC house position");
}

#[test]
fn test_house_names() {
    let _eph = session();
    assert_eq!(swisseph::house_name(b'P'), "Placidus");
    assert_eq!(swisseph::house_name(b'K'), "Koch");
}

#[test]
fn test_gauquelin_sector_of_sun() {
    let _eph = session();
    let london = GeoPosition::new(LONDON_LON, LONDON_LAT, 0.0);
    let sector = swisseph::gauquelin_sector(
        J2000,
        &Body::Planet(planet::SUN),
        flag::MOSEPH,
        0,
        london,
        0.0,
        0.0,
    )
    .unwrap();
    assert!((1.0..37.0).contains(&sector), "sector {}", sector);
}

#[test]
fn test_houses_serialize_to_json() {
    let _eph = session();
    let h = swisseph::houses(J2000, LONDON_LAT, LONDON_LON, b'P').unwrap();
    let value = serde_json::to_value(&h).unwrap();
    assert_eq!(value["cusps"].as_array().map(Vec::len), Some(12));
    assert!(value["points"]["ascendant"].is_number());
}
