#![allow(dead_code, unused_macros)]

use std::collections::HashSet;
use std::path::PathBuf;
use swisseph::{calendar, Ephemeris, EphemerisConfig};

/// Julian day of 2000-01-01 12:00 TT
pub const J2000: f64 = 2451545.0;

/// Directory with Swiss Ephemeris data files, if the environment provides one
pub fn ephe_path() -> Option<PathBuf> {
    std::env::var_os("SE_EPHE_PATH")
        .map(PathBuf::from)
        .filter(|p| p.is_dir())
}

/// Skip the current test unless ephemeris files are available
macro_rules! require_ephe {
    () => {
        match support::ephe_path() {
            Some(path) => path,
            None => {
                eprintln!("SE_EPHE_PATH not set, skipping");
                return;
            }
        }
    };
}

/// Session with library defaults; closes the library when dropped
pub fn session() -> Ephemeris {
    Ephemeris::with_defaults()
}

/// Session reading data files from `path`
pub fn session_with_path(path: PathBuf) -> Ephemeris {
    Ephemeris::open(EphemerisConfig {
        ephe_path: Some(path),
        ..EphemerisConfig::default()
    })
    .expect("failed to open ephemeris session")
}

pub fn jd(year: i32, month: i32, day: i32, hour: f64) -> f64 {
    swisseph::julday(year, month, day, hour, calendar::GREGORIAN)
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {} ± {}, got {}",
        what,
        expected,
        tolerance,
        actual
    );
}

/// Runs `f` with environment variables temporarily modified.
///
/// Holds the native library lock for the duration, since the library reads
/// `SE_EPHE_PATH` itself. Variables are restored on unwind.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _access = swisseph::exclusive();
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
