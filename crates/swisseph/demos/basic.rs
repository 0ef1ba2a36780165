//! Planetary positions for a date
//!
//! To run this example:
//! ```bash
//! # Moshier ephemeris, no data files needed
//! cargo run -p swisseph --example basic --features build-native
//!
//! # Swiss Ephemeris data files
//! SE_EPHE_PATH=/usr/share/swisseph cargo run -p swisseph --example basic --features build-native
//! ```
//!
//! # Environment Variables
//!
//! - `SE_EPHE_PATH`, `SE_SID_MODE`, `SE_TOPO`: see `EphemerisConfig::from_env`
//! - `RUST_LOG`: log level (default: info)

use std::env;

use swisseph::{calendar, flag, planet, Ephemeris, EphemerisConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config = EphemerisConfig::from_env()?;
    let iflag = if config.ephe_path.is_some() {
        flag::SWIEPH | flag::SPEED
    } else {
        flag::MOSEPH | flag::SPEED
    };
    let _eph = Ephemeris::open(config)?;
    info!("Swiss Ephemeris {}", swisseph::version());

    let tjd = swisseph::julday(2000, 1, 1, 12.0, calendar::GREGORIAN);
    println!("=== Positions for JD {:.1} (UT) ===\n", tjd);
    println!("{:<10} {:>12} {:>12} {:>12} {:>10}", "Body", "Longitude", "Latitude", "Distance", "Speed");

    for ipl in planet::SUN..=planet::PLUTO {
        let pos = swisseph::calc_ut(tjd, ipl, iflag)?;
        let split = swisseph::split_deg(pos.longitude(), swisseph::split_deg::ZODIACAL);
        println!(
            "{:<10} {:>12.6} {:>12.6} {:>12.6} {:>10.6}   {:2}°{:02}'{:02}\" sign {}",
            swisseph::planet_name(ipl),
            pos.longitude(),
            pos.latitude(),
            pos.distance(),
            pos.longitude_speed(),
            split.degree,
            split.minute,
            split.second,
            split.sign + 1,
        );
    }

    let node = swisseph::calc_ut(tjd, planet::TRUE_NODE, iflag)?;
    println!("{:<10} {:>12.6}", "True Node", node.longitude());

    let date = swisseph::revjul(tjd, calendar::GREGORIAN);
    println!(
        "\nDelta T: {:.2}s, sidereal time: {:.4}h, date {}-{:02}-{:02}",
        swisseph::deltat(tjd) * 86400.0,
        swisseph::sidtime(tjd),
        date.year,
        date.month,
        date.day
    );

    Ok(())
}
