//! Sunrise, sunset and transits for a week
//!
//! To run this example:
//! ```bash
//! cargo run -p swisseph --example riseset --features build-native
//! ```

use std::env;

use swisseph::{calendar, flag, planet, rise, Body, GeoPosition, RiseTransit};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

fn hhmm(result: &RiseTransit) -> String {
    match result.time() {
        Some(tjd) => {
            let date = swisseph::revjul(tjd, calendar::GREGORIAN);
            let cs = (date.hour * 360_000.0).round() as i32;
            swisseph::cs2timestr(cs, b':', true)
        }
        None => "  --  ".to_string(),
    }
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

    let _eph = swisseph::Ephemeris::with_defaults();
    let zurich = GeoPosition::new(8.55, 47.37, 400.0);
    let sun = Body::Planet(planet::SUN);
    let moon = Body::Planet(planet::MOON);

    println!("=== Zurich, times in UT ===\n");
    println!("{:<12} {:>8} {:>8} {:>8} {:>8}", "Date", "Sunrise", "Noon", "Sunset", "Moonrise");

    let start = swisseph::julday(2024, 6, 17, 0.0, calendar::GREGORIAN);
    for day in 0..7 {
        let tjd = start + day as f64;
        let event = |body: &Body, rsmi: i32| {
            swisseph::rise_trans(tjd, body, flag::MOSEPH, rsmi, zurich, 1013.25, 15.0)
        };
        let sunrise = event(&sun, rise::CALC_RISE)?;
        let noon = event(&sun, rise::CALC_MTRANSIT)?;
        let sunset = event(&sun, rise::CALC_SET)?;
        let moonrise = event(&moon, rise::CALC_RISE)?;
        if moonrise.is_circumpolar() {
            warn!("Moon does not rise on day {}", day);
        }

        let date = swisseph::revjul(tjd, calendar::GREGORIAN);
        println!(
            "{}-{:02}-{:02}   {:>8} {:>8} {:>8} {:>8}",
            date.year,
            date.month,
            date.day,
            hhmm(&sunrise),
            hhmm(&noon),
            hhmm(&sunset),
            hhmm(&moonrise)
        );
    }

    Ok(())
}
