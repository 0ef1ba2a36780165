//! Upcoming solar and lunar eclipses
//!
//! To run this example:
//! ```bash
//! cargo run -p swisseph --example eclipses --features build-native
//! ```

use std::env;

use swisseph::{calendar, ecl, flag, Eclipse, GeoPosition};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn describe(tjd: f64) -> String {
    let utc = swisseph::jdut1_to_utc(tjd, calendar::GREGORIAN);
    match utc.to_naive_datetime() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("JD {:.5}", tjd),
    }
}

fn kind(eclipse: &Eclipse) -> &'static str {
    if eclipse.flag & ecl::TOTAL != 0 {
        "total"
    } else if eclipse.flag & ecl::ANNULAR != 0 {
        "annular"
    } else if eclipse.flag & ecl::PENUMBRAL != 0 {
        "penumbral"
    } else {
        "partial"
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
    let start = swisseph::julday(2024, 1, 1, 0.0, calendar::GREGORIAN);

    println!("=== Solar eclipses ===\n");
    let mut tjd = start;
    for _ in 0..4 {
        let eclipse = swisseph::sol_eclipse_when_glob(tjd, flag::MOSEPH, 0, false)?;
        let place = swisseph::sol_eclipse_where(eclipse.times.maximum, flag::MOSEPH)?;
        println!(
            "{} {:<8} greatest at {:.2}, {:.2}",
            describe(eclipse.times.maximum),
            kind(&eclipse),
            place.longitude,
            place.latitude
        );
        tjd = eclipse.times.maximum + 1.0;
    }

    println!("\n=== Lunar eclipses ===\n");
    let mut tjd = start;
    for _ in 0..4 {
        let eclipse = swisseph::lun_eclipse_when(tjd, flag::MOSEPH, 0, false)?;
        let duration = eclipse
            .times
            .totality_duration()
            .map(|d| format!("{:.0} min total", d * 1440.0))
            .unwrap_or_default();
        println!("{} {:<9} {}", describe(eclipse.times.maximum), kind(&eclipse), duration);
        tjd = eclipse.times.maximum + 1.0;
    }

    let dallas = GeoPosition::new(-96.797, 32.7767, 140.0);
    let local = swisseph::sol_eclipse_when_loc(start, flag::MOSEPH, dallas, false)?;
    info!("Next solar eclipse visible from Dallas: {}", describe(local.times.maximum));
    if let Some(d) = local.times.totality_duration() {
        println!("\nDallas: totality lasts {:.1} minutes", d * 1440.0);
    }

    Ok(())
}
