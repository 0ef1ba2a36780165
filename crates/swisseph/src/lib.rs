//! # swisseph
//!
//! Safe Rust bindings to the Swiss Ephemeris astronomical library.
//!
//! Every function marshals its arguments into the native calling convention,
//! calls `libswe` and turns the fixed-size output buffers, rewritten name
//! buffers and diagnostic strings into Rust records. No ephemeris mathematics
//! is done on the Rust side.
//!
//! ## Features
//!
//! - Planetary, asteroid and fixed-star positions
//! - House cusps for all house systems, house positions, Gauquelin sectors
//! - Solar and lunar eclipses, lunar occultations
//! - Rise/set/transit times and heliacal events
//! - Calendar and time-scale conversions
//! - Angle normalisation and formatting helpers
//! - Configuration from TOML or the environment
//!
//! ## Errors and warnings
//!
//! A negative native return code becomes [`Error::Native`] carrying the
//! library's diagnostic text verbatim. Text the library writes on success
//! (for example when it falls back to the Moshier ephemeris) is kept in the
//! record's `warning` field and logged through `log` at warn level.
//!
//! ## Threads
//!
//! The native library keeps its state in process-wide globals. All calls
//! go through one reentrant lock; hold [`exclusive`] or an [`Ephemeris`]
//! session to keep a configuration change and the calculations depending on
//! it together.
//!
//! ## Example
//!
//! ```rust,ignore
//! use swisseph::{calendar, flag, planet};
//!
//! let jd = swisseph::julday(2000, 1, 1, 12.0, calendar::GREGORIAN);
//! let sun = swisseph::calc_ut(jd, planet::SUN, flag::SPEED)?;
//! println!("Sun longitude: {:.4}", sun.longitude());
//!
//! let houses = swisseph::houses(jd, 51.5074, -0.1278, b'P')?;
//! println!("Ascendant: {:.4}", houses.points.ascendant);
//! ```

mod calc;
mod config;
mod constants;
mod coords;
mod crossings;
mod eclipses;
mod error;
mod fixstars;
mod heliacal;
mod houses;
mod lock;
mod marshal;
mod riseset;
mod time;
mod types;
mod utils;

pub use calc::*;
pub use config::{
    close, library_path, package_version, set_delta_t_userdef, set_ephe_path, set_jpl_file,
    set_lapse_rate, set_sid_mode, set_tid_acc, set_topo, tid_acc, version, Ephemeris,
    EphemerisConfig, SiderealConfig,
};
pub use constants::*;
pub use coords::*;
pub use crossings::*;
pub use eclipses::*;
pub use error::{Error, Result};
pub use fixstars::*;
pub use heliacal::*;
pub use houses::*;
pub use lock::{exclusive, ExclusiveAccess};
pub use riseset::*;
pub use time::*;
pub use types::*;
pub use utils::*;

/// Raw bindings, for calls this crate does not wrap
pub use swisseph_sys as sys;
