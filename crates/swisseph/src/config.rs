//! Process-wide library configuration.
//!
//! The native library keeps its configuration (ephemeris path, JPL file,
//! sidereal mode, topocentric position, tidal acceleration, delta T override,
//! lapse rate) in globals that persist until [`close`]. The free setters here
//! change that state directly; [`EphemerisConfig`] groups the same settings so
//! they can be read from TOML or the environment and applied in one step, and
//! [`Ephemeris`] ties an applied configuration to the lifetime of a value.

use crate::error::{Error, Result};
use crate::lock::{exclusive, with_native, ExclusiveAccess};
use crate::marshal::{c_string, TextBuffer};
use crate::types::GeoPosition;
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::{CStr, CString};
use std::fs;
use std::path::{Path, PathBuf};
use std::ptr;
use swisseph_sys as ffi;

/// Set the directory (or `:`/`;` separated list) searched for ephemeris files
///
/// `None` restores the default: the `SE_EPHE_PATH` environment variable if
/// set, the compiled-in path otherwise.
pub fn set_ephe_path(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => push_ephe_path(&ephe_path_string(path)?),
        None => {
            with_native(|| unsafe { ffi::swe_set_ephe_path(ptr::null()) });
            debug!("Ephemeris path reset to default");
        }
    }
    Ok(())
}

/// Select the JPL ephemeris file used with [`crate::flag::JPLEPH`]
pub fn set_jpl_file(file_name: &str) -> Result<()> {
    push_jpl_file(&c_string(file_name, "JPL file name")?);
    Ok(())
}

fn ephe_path_string(path: &Path) -> Result<CString> {
    let text = path.to_str().ok_or_else(|| {
        Error::InvalidInput(format!("Ephemeris path is not valid UTF-8: {:?}", path))
    })?;
    c_string(text, "Ephemeris path")
}

fn push_ephe_path(c_path: &CStr) {
    with_native(|| unsafe { ffi::swe_set_ephe_path(c_path.as_ptr()) });
    debug!("Ephemeris path set to {}", c_path.to_string_lossy());
}

fn push_jpl_file(c_name: &CStr) {
    with_native(|| unsafe { ffi::swe_set_jpl_file(c_name.as_ptr()) });
    debug!("JPL file set to {}", c_name.to_string_lossy());
}

/// Path of the loaded native library (or executable, for static builds)
pub fn library_path() -> String {
    let mut buf = TextBuffer::new();
    with_native(|| unsafe { ffi::swe_get_library_path(buf.as_mut_ptr()) });
    buf.text()
}

/// Select the sidereal mode (ayanamsa)
///
/// `t0` and `ayan_t0` are only used with [`crate::sidm::USER`]: the reference
/// epoch and the ayanamsa value at that epoch.
pub fn set_sid_mode(mode: i32, t0: f64, ayan_t0: f64) {
    with_native(|| unsafe { ffi::swe_set_sid_mode(mode, t0, ayan_t0) });
    debug!("Sidereal mode set to {} (t0={}, ayan_t0={})", mode, t0, ayan_t0);
}

/// Set the observer position used with [`crate::flag::TOPOCTR`]
pub fn set_topo(longitude: f64, latitude: f64, altitude: f64) {
    with_native(|| unsafe { ffi::swe_set_topo(longitude, latitude, altitude) });
    debug!(
        "Topocentric position set to lon={} lat={} alt={}",
        longitude, latitude, altitude
    );
}

/// Override the tidal acceleration of the Moon (arcsec/cty^2)
///
/// [`crate::tidal::AUTOMATIC`] lets the library pick the value matching the
/// ephemeris in use.
pub fn set_tid_acc(t_acc: f64) {
    with_native(|| unsafe { ffi::swe_set_tid_acc(t_acc) });
    debug!("Tidal acceleration set to {}", t_acc);
}

/// Current tidal acceleration of the Moon
pub fn tid_acc() -> f64 {
    with_native(|| unsafe { ffi::swe_get_tid_acc() })
}

/// Use a fixed delta T (days) for all later conversions
///
/// [`crate::DELTAT_AUTOMATIC`] restores the built-in model.
pub fn set_delta_t_userdef(delta_t: f64) {
    with_native(|| unsafe { ffi::swe_set_delta_t_userdef(delta_t) });
    debug!("User delta T set to {}", delta_t);
}

/// Atmospheric lapse rate (K/m) used by refraction and heliacal functions
pub fn set_lapse_rate(lapse_rate: f64) {
    with_native(|| unsafe { ffi::swe_set_lapse_rate(lapse_rate) });
    debug!("Lapse rate set to {}", lapse_rate);
}

/// Close ephemeris files and reset the library's global state
pub fn close() {
    with_native(|| unsafe { ffi::swe_close() });
    debug!("Swiss Ephemeris closed");
}

/// Version of the native library, e.g. `2.10.03`
pub fn version() -> String {
    let mut buf = TextBuffer::new();
    with_native(|| unsafe { ffi::swe_version(buf.as_mut_ptr()) });
    buf.text()
}

/// Version of this crate
pub fn package_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Sidereal mode settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiderealConfig {
    pub mode: i32,
    #[serde(default)]
    pub t0: f64,
    #[serde(default)]
    pub ayan_t0: f64,
}

/// Library configuration that can be loaded and applied as a unit
///
/// Unset fields leave the corresponding library state untouched.
///
/// # Example
///
/// ```toml
/// ephe_path = "/usr/share/swisseph"
/// tid_acc = -25.8
///
/// [sidereal]
/// mode = 1
///
/// [topo]
/// longitude = 8.55
/// latitude = 47.37
/// altitude = 400.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// Directory searched for ephemeris files
    pub ephe_path: Option<PathBuf>,
    /// JPL ephemeris file name
    pub jpl_file: Option<String>,
    pub sidereal: Option<SiderealConfig>,
    /// Observer position for topocentric positions
    pub topo: Option<GeoPosition>,
    /// Tidal acceleration of the Moon
    pub tid_acc: Option<f64>,
    /// Fixed delta T in days
    pub delta_t: Option<f64>,
    /// Atmospheric lapse rate, K/m
    pub lapse_rate: Option<f64>,
}

impl EphemerisConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read configuration from environment variables
    ///
    /// - `SE_EPHE_PATH`: ephemeris directory
    /// - `SE_JPL_FILE`: JPL file name
    /// - `SE_SID_MODE`: `mode[,t0,ayan_t0]`
    /// - `SE_TOPO`: `longitude,latitude[,altitude]`
    /// - `SE_TID_ACC`: tidal acceleration
    /// - `SE_DELTA_T`: fixed delta T in days
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let sidereal = match var("SE_SID_MODE") {
            Some(raw) => {
                let parts = parse_floats("SE_SID_MODE", &raw)?;
                if parts.is_empty() || parts.len() > 3 || parts[0].fract() != 0.0 {
                    return Err(Error::Config(format!(
                        "SE_SID_MODE must be 'mode[,t0,ayan_t0]', got {:?}",
                        raw
                    )));
                }
                Some(SiderealConfig {
                    mode: parts[0] as i32,
                    t0: parts.get(1).copied().unwrap_or(0.0),
                    ayan_t0: parts.get(2).copied().unwrap_or(0.0),
                })
            }
            None => None,
        };

        let topo = match var("SE_TOPO") {
            Some(raw) => {
                let parts = parse_floats("SE_TOPO", &raw)?;
                if parts.len() < 2 || parts.len() > 3 {
                    return Err(Error::Config(format!(
                        "SE_TOPO must be 'longitude,latitude[,altitude]', got {:?}",
                        raw
                    )));
                }
                Some(GeoPosition::new(
                    parts[0],
                    parts[1],
                    parts.get(2).copied().unwrap_or(0.0),
                ))
            }
            None => None,
        };

        let tid_acc = var("SE_TID_ACC")
            .map(|raw| parse_float("SE_TID_ACC", &raw))
            .transpose()?;
        let delta_t = var("SE_DELTA_T")
            .map(|raw| parse_float("SE_DELTA_T", &raw))
            .transpose()?;

        Ok(Self {
            ephe_path: var("SE_EPHE_PATH").map(PathBuf::from),
            jpl_file: var("SE_JPL_FILE"),
            sidereal,
            topo,
            tid_acc,
            delta_t,
            lapse_rate: None,
        })
    }

    /// Push every set field into the native library
    ///
    /// The whole sequence runs under the native lock. Strings are converted
    /// before the first native call, so an invalid value leaves the library
    /// configuration untouched.
    pub fn apply(&self) -> Result<()> {
        let _access = exclusive();
        let ephe_path = self.ephe_path.as_deref().map(ephe_path_string).transpose()?;
        let jpl_file = self
            .jpl_file
            .as_deref()
            .map(|file| c_string(file, "JPL file name"))
            .transpose()?;

        if let Some(path) = &ephe_path {
            push_ephe_path(path);
        }
        if let Some(file) = &jpl_file {
            push_jpl_file(file);
        }
        if let Some(sid) = self.sidereal {
            set_sid_mode(sid.mode, sid.t0, sid.ayan_t0);
        }
        if let Some(topo) = self.topo {
            set_topo(topo.longitude, topo.latitude, topo.altitude);
        }
        if let Some(t_acc) = self.tid_acc {
            set_tid_acc(t_acc);
        }
        if let Some(dt) = self.delta_t {
            set_delta_t_userdef(dt);
        }
        if let Some(rate) = self.lapse_rate {
            set_lapse_rate(rate);
        }
        Ok(())
    }
}

fn parse_float(key: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("{} must be a number, got {:?}: {}", key, raw, e)))
}

fn parse_floats(key: &str, raw: &str) -> Result<Vec<f64>> {
    raw.split(',').map(|part| parse_float(key, part)).collect()
}

/// Exclusive, configured use of the native library
///
/// Opening a session takes the process-wide lock, applies the configuration
/// and keeps the lock until the session is dropped, at which point the
/// library is closed and its global state reset. Other threads calling into
/// the library block in the meantime.
///
/// # Example
///
/// ```rust,ignore
/// use swisseph::{Ephemeris, EphemerisConfig};
///
/// let eph = Ephemeris::open(EphemerisConfig::from_env()?)?;
/// let sun = swisseph::calc_ut(2451545.0, swisseph::planet::SUN, swisseph::flag::SPEED)?;
/// drop(eph);
/// ```
pub struct Ephemeris {
    config: EphemerisConfig,
    _access: ExclusiveAccess,
}

impl Ephemeris {
    /// Open a session with the given configuration
    pub fn open(config: EphemerisConfig) -> Result<Self> {
        let access = exclusive();
        if let Err(err) = config.apply() {
            close();
            return Err(err);
        }
        debug!("Ephemeris session opened: {:?}", config);
        Ok(Self {
            config,
            _access: access,
        })
    }

    /// Open a session with the library defaults
    pub fn with_defaults() -> Self {
        Self {
            config: EphemerisConfig::default(),
            _access: exclusive(),
        }
    }

    /// The configuration applied when the session was opened
    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }
}

impl Drop for Ephemeris {
    fn drop(&mut self) {
        // Runs before the guard field is dropped, so the lock is still held
        close();
        debug!("Ephemeris session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
ephe_path = "/usr/share/swisseph"
jpl_file = "de431.eph"
tid_acc = -25.8
delta_t = 0.0008

[sidereal]
mode = 255
t0 = 2451545.0
ayan_t0 = 23.5

[topo]
longitude = 8.55
latitude = 47.37
altitude = 400.0
"#;
        let config = EphemerisConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.ephe_path, Some(PathBuf::from("/usr/share/swisseph")));
        assert_eq!(config.jpl_file.as_deref(), Some("de431.eph"));
        assert_eq!(
            config.sidereal,
            Some(SiderealConfig {
                mode: 255,
                t0: 2451545.0,
                ayan_t0: 23.5
            })
        );
        assert_eq!(config.topo, Some(GeoPosition::new(8.55, 47.37, 400.0)));
        assert_eq!(config.tid_acc, Some(-25.8));
        assert_eq!(config.delta_t, Some(0.0008));
        assert_eq!(config.lapse_rate, None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EphemerisConfig::from_toml_str("").unwrap();
        assert_eq!(config, EphemerisConfig::default());
    }

    #[test]
    fn test_sidereal_defaults_epoch() {
        let config = EphemerisConfig::from_toml_str("[sidereal]\nmode = 1\n").unwrap();
        let sid = config.sidereal.unwrap();
        assert_eq!((sid.mode, sid.t0, sid.ayan_t0), (1, 0.0, 0.0));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = EphemerisConfig::from_toml_str("tid_acc = \"fast\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_env_lookup() {
        let config = EphemerisConfig::from_lookup(lookup(&[
            ("SE_EPHE_PATH", "/data/ephe"),
            ("SE_SID_MODE", "1"),
            ("SE_TOPO", "-0.1278, 51.5074"),
            ("SE_TID_ACC", "-25.82"),
        ]))
        .unwrap();
        assert_eq!(config.ephe_path, Some(PathBuf::from("/data/ephe")));
        assert_eq!(config.sidereal.map(|s| s.mode), Some(1));
        assert_eq!(config.topo, Some(GeoPosition::new(-0.1278, 51.5074, 0.0)));
        assert_eq!(config.tid_acc, Some(-25.82));
        assert_eq!(config.delta_t, None);
        assert_eq!(config.jpl_file, None);
    }

    #[test]
    fn test_env_empty_values_are_unset() {
        let config = EphemerisConfig::from_lookup(lookup(&[("SE_EPHE_PATH", "  ")])).unwrap();
        assert_eq!(config.ephe_path, None);
    }

    #[test]
    fn test_env_parse_errors() {
        let err = EphemerisConfig::from_lookup(lookup(&[("SE_TID_ACC", "fast")])).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("SE_TID_ACC")));

        let err = EphemerisConfig::from_lookup(lookup(&[("SE_TOPO", "8.55")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = EphemerisConfig::from_lookup(lookup(&[("SE_SID_MODE", "1.5")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_package_version() {
        assert_eq!(package_version(), env!("CARGO_PKG_VERSION"));
    }
}
