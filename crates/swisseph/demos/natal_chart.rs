//! Natal chart: planets, houses and house positions
//!
//! To run this example:
//! ```bash
//! cargo run -p swisseph --example natal_chart --features build-native -- 1990-07-15T14:30:00 51.5074 -0.1278
//! ```
//!
//! Arguments are a UTC date-time, latitude and longitude (east positive).
//! Without arguments a fixed chart is computed.

use std::env;

use anyhow::Context as _;
use chrono::NaiveDateTime;
use swisseph::{flag, planet, Ephemeris, EphemerisConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const SIGNS: [&str; 12] = [
    "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo", "Libra", "Scorpio", "Sagittarius",
    "Capricorn", "Aquarius", "Pisces",
];

fn format_position(longitude: f64) -> String {
    let split = swisseph::split_deg(longitude, swisseph::split_deg::ZODIACAL);
    format!(
        "{:2}°{:02}'{:02}\" {}",
        split.degree, split.minute, split.second, SIGNS[split.sign as usize % 12]
    )
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (when, latitude, longitude) = match args.as_slice() {
        [when, lat, lon] => (
            NaiveDateTime::parse_from_str(when, "%Y-%m-%dT%H:%M:%S")
                .with_context(|| format!("invalid date-time {:?}", when))?,
            lat.parse::<f64>().context("invalid latitude")?,
            lon.parse::<f64>().context("invalid longitude")?,
        ),
        _ => (
            NaiveDateTime::parse_from_str("1990-07-15T14:30:00", "%Y-%m-%dT%H:%M:%S")?,
            51.5074,
            -0.1278,
        ),
    };

    let _eph = Ephemeris::open(EphemerisConfig::from_env()?)?;
    let times = swisseph::utc_to_jd_from_datetime(&when)?;
    info!("Chart for {} UTC, JD(UT) {:.6}", when, times.ut);

    println!("=== Natal chart {} UTC, {:.4}N {:.4}E ===\n", when, latitude, longitude);

    let houses = swisseph::houses_ex(times.ut, 0, latitude, longitude, b'P')?;
    println!("House system: {}", swisseph::house_name(b'P'));
    println!("Ascendant: {}", format_position(houses.points.ascendant));
    println!("MC:        {}\n", format_position(houses.points.mc));

    for (i, cusp) in houses.cusps.iter().enumerate() {
        println!("House {:2}: {}", i + 1, format_position(*cusp));
    }

    let eps = swisseph::calc(times.et, planet::ECL_NUT, flag::MOSEPH)?.data[0];
    println!();
    for ipl in planet::SUN..=planet::PLUTO {
        let pos = swisseph::calc_ut(times.ut, ipl, flag::MOSEPH | flag::SPEED)?;
        let house = swisseph::house_pos(
            houses.points.armc,
            latitude,
            eps,
            b'P',
            pos.longitude(),
            pos.latitude(),
        )?;
        let retro = if pos.longitude_speed() < 0.0 { " R" } else { "" };
        println!(
            "{:<8} {}{:<2} house {:.2}",
            swisseph::planet_name(ipl),
            format_position(pos.longitude()),
            retro,
            house
        );
    }

    Ok(())
}
