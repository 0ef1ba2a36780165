//! Result records and typed inputs

use crate::error::Result;
use crate::marshal::NameBuffer;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Position of a body as returned by the `calc` family
///
/// `data` holds longitude, latitude, distance and their daily speeds (or
/// right ascension/declination, or x/y/z, depending on the flags).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Flag actually used by the library (may differ from the request)
    pub flag: i32,
    pub data: [f64; 6],
    /// Diagnostic the library wrote on success, e.g. an ephemeris fallback
    pub warning: Option<String>,
}

impl Position {
    pub fn longitude(&self) -> f64 {
        self.data[0]
    }

    pub fn latitude(&self) -> f64 {
        self.data[1]
    }

    pub fn distance(&self) -> f64 {
        self.data[2]
    }

    pub fn longitude_speed(&self) -> f64 {
        self.data[3]
    }

    pub fn latitude_speed(&self) -> f64 {
        self.data[4]
    }

    pub fn distance_speed(&self) -> f64 {
        self.data[5]
    }
}

/// Ayanamsa value with the flag used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ayanamsa {
    pub flag: i32,
    pub value: f64,
    pub warning: Option<String>,
}

/// Planetary phenomena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phenomena {
    pub flag: i32,
    /// Phase angle (earth-planet-sun), degrees
    pub phase_angle: f64,
    /// Illuminated fraction of the disc
    pub phase: f64,
    /// Elongation of the planet, degrees
    pub elongation: f64,
    /// Apparent diameter of the disc, degrees
    pub apparent_diameter: f64,
    pub apparent_magnitude: f64,
    pub raw: [f64; 20],
    pub warning: Option<String>,
}

impl Phenomena {
    pub(crate) fn from_attr(flag: i32, attr: [f64; 20], warning: Option<String>) -> Self {
        Self {
            flag,
            phase_angle: attr[0],
            phase: attr[1],
            elongation: attr[2],
            apparent_diameter: attr[3],
            apparent_magnitude: attr[4],
            raw: attr,
            warning,
        }
    }
}

/// Nodes and apsides of a planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodesApsides {
    pub flag: i32,
    pub ascending: [f64; 6],
    pub descending: [f64; 6],
    pub perihelion: [f64; 6],
    pub aphelion: [f64; 6],
    pub warning: Option<String>,
}

/// Osculating Keplerian elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub flag: i32,
    /// The full 50-element native array
    pub elements: Vec<f64>,
    pub warning: Option<String>,
}

impl OrbitalElements {
    fn get(&self, index: usize) -> f64 {
        self.elements.get(index).copied().unwrap_or(0.0)
    }

    /// Semimajor axis, AU
    pub fn semimajor_axis(&self) -> f64 {
        self.get(0)
    }

    pub fn eccentricity(&self) -> f64 {
        self.get(1)
    }

    /// Inclination, degrees
    pub fn inclination(&self) -> f64 {
        self.get(2)
    }

    /// Longitude of the ascending node, degrees
    pub fn ascending_node(&self) -> f64 {
        self.get(3)
    }

    /// Argument of the perihelion, degrees
    pub fn perihelion_argument(&self) -> f64 {
        self.get(4)
    }

    /// Longitude of the perihelion, degrees
    pub fn perihelion_longitude(&self) -> f64 {
        self.get(5)
    }

    /// Mean anomaly at epoch, degrees
    pub fn mean_anomaly(&self) -> f64 {
        self.get(6)
    }

    /// Sidereal orbital period, tropical years
    pub fn sidereal_period(&self) -> f64 {
        self.get(10)
    }

    /// Mean daily motion, degrees/day
    pub fn mean_daily_motion(&self) -> f64 {
        self.get(11)
    }

    /// Perihelion distance, AU
    pub fn perihelion_distance(&self) -> f64 {
        self.get(15)
    }

    /// Aphelion distance, AU
    pub fn aphelion_distance(&self) -> f64 {
        self.get(16)
    }
}

/// Maximum, minimum and current true distance of a body, AU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitDistances {
    pub flag: i32,
    pub max: f64,
    pub min: f64,
    pub current: f64,
    pub warning: Option<String>,
}

/// Ephemeris file currently opened by the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisFile {
    pub path: String,
    /// First Julian day covered
    pub start: f64,
    /// Last Julian day covered
    pub end: f64,
    /// JPL ephemeris number the file is based on
    pub denum: i32,
}

/// Calendar date with a decimal hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: f64,
}

/// Broken-down UTC instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcDateTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl UtcDateTime {
    /// Convert to a chrono datetime, `None` if the fields are out of range
    ///
    /// A leap second (`second >= 60`) is carried as chrono's leap
    /// nanoseconds.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        let hour = u32::try_from(self.hour).ok()?;
        let minute = u32::try_from(self.minute).ok()?;
        if !(0.0..61.0).contains(&self.second) {
            return None;
        }
        let whole = self.second.trunc();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        let (sec, nanos) = if whole >= 60.0 {
            (59, nanos + 1_000_000_000)
        } else {
            (whole as u32, nanos)
        };
        NaiveDate::from_ymd_opt(self.year, month, day)?.and_hms_nano_opt(hour, minute, sec, nanos)
    }
}

impl From<NaiveDateTime> for UtcDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        use chrono::Datelike;
        Self {
            year: dt.year(),
            month: dt.month() as i32,
            day: dt.day() as i32,
            hour: dt.hour() as i32,
            minute: dt.minute() as i32,
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }
}

/// Julian day in Ephemeris Time and Universal Time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianDayPair {
    pub et: f64,
    pub ut: f64,
}

/// Delta T in days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaT {
    pub value: f64,
    /// Set when the ephemeris requested for the tidal acceleration was unavailable
    pub warning: Option<String>,
}

/// The angular points written into `ascmc`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngularPoints {
    pub ascendant: f64,
    pub mc: f64,
    pub armc: f64,
    pub vertex: f64,
    pub equatorial_ascendant: f64,
    /// Co-ascendant after W. Koch
    pub co_ascendant_koch: f64,
    /// Co-ascendant after M. Munkasey
    pub co_ascendant_munkasey: f64,
    /// Polar ascendant after M. Munkasey
    pub polar_ascendant: f64,
}

impl AngularPoints {
    pub(crate) fn from_ascmc(ascmc: &[f64; 10]) -> Self {
        use crate::constants::ascmc as idx;
        Self {
            ascendant: ascmc[idx::ASC],
            mc: ascmc[idx::MC],
            armc: ascmc[idx::ARMC],
            vertex: ascmc[idx::VERTEX],
            equatorial_ascendant: ascmc[idx::EQUASC],
            co_ascendant_koch: ascmc[idx::COASC1],
            co_ascendant_munkasey: ascmc[idx::COASC2],
            polar_ascendant: ascmc[idx::POLASC],
        }
    }
}

/// House cusps and angular points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Houses {
    pub flag: i32,
    /// Cusps of houses 1..=12 (1..=36 for Gauquelin sectors)
    pub cusps: Vec<f64>,
    pub points: AngularPoints,
    /// Only filled by the `*_ex2` variants
    pub cusp_speeds: Option<Vec<f64>>,
    pub point_speeds: Option<AngularPoints>,
    pub warning: Option<String>,
}

/// Position of a fixed star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStar {
    pub flag: i32,
    /// Name as resolved by the library, `traditional name,nomenclature name`
    pub name: String,
    pub data: [f64; 6],
    pub warning: Option<String>,
}

/// Visual magnitude of a fixed star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarMagnitude {
    pub flag: i32,
    pub name: String,
    pub magnitude: f64,
    pub warning: Option<String>,
}

/// Contact times of an eclipse or occultation, Julian day UT
///
/// Fields are zero where the event has no such phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipseTimes {
    pub maximum: f64,
    pub begin: f64,
    pub end: f64,
    pub totality_begin: f64,
    pub totality_end: f64,
    /// The native `tret` array as written
    pub raw: [f64; 10],
}

impl EclipseTimes {
    /// Local searches: maximum, then first to fourth contact
    pub(crate) fn local(tret: [f64; 10]) -> Self {
        Self {
            maximum: tret[0],
            begin: tret[1],
            totality_begin: tret[2],
            totality_end: tret[3],
            end: tret[4],
            raw: tret,
        }
    }

    /// Global searches: maximum, begin, end, totality begin/end
    pub(crate) fn global(tret: [f64; 10]) -> Self {
        Self {
            maximum: tret[0],
            begin: tret[2],
            end: tret[3],
            totality_begin: tret[4],
            totality_end: tret[5],
            raw: tret,
        }
    }

    /// Lunar eclipses: partial phase as begin/end, umbral totality
    pub(crate) fn lunar(tret: [f64; 10]) -> Self {
        Self {
            maximum: tret[0],
            begin: tret[2],
            end: tret[3],
            totality_begin: tret[4],
            totality_end: tret[5],
            raw: tret,
        }
    }

    /// Length of the total (or annular) phase in days
    pub fn totality_duration(&self) -> Option<f64> {
        if self.totality_begin > 0.0 && self.totality_end > self.totality_begin {
            Some(self.totality_end - self.totality_begin)
        } else {
            None
        }
    }

    /// Length of the whole event in days
    pub fn duration(&self) -> Option<f64> {
        if self.begin > 0.0 && self.end > self.begin {
            Some(self.end - self.begin)
        } else {
            None
        }
    }
}

/// Result of an eclipse or occultation search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eclipse {
    /// Eclipse type and visibility bits (see [`crate::ecl`])
    pub flag: i32,
    pub times: EclipseTimes,
    /// Zero for global searches, which do not compute attributes
    pub attributes: [f64; 20],
    /// Resolved star name for occultations of a fixed star
    pub star_name: Option<String>,
    pub warning: Option<String>,
}

/// Eclipse attributes at a given time and place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EclipseAttributes {
    pub flag: i32,
    pub attributes: [f64; 20],
    pub warning: Option<String>,
}

impl EclipseAttributes {
    /// Fraction of the solar diameter (or lunar diameter in umbra) covered
    pub fn magnitude(&self) -> f64 {
        self.attributes[0]
    }

    /// Fraction of the disc area covered (obscuration)
    pub fn obscuration(&self) -> f64 {
        self.attributes[2]
    }
}

/// Geographic position of the central line or maximum of an eclipse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EclipseLocation {
    pub flag: i32,
    pub longitude: f64,
    pub latitude: f64,
    /// Central line and limits of the umbra/penumbra as written by the library
    pub geopos: [f64; 10],
    pub attributes: [f64; 20],
    pub star_name: Option<String>,
    pub warning: Option<String>,
}

/// Outcome of a rise/transit/set search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiseTransit {
    Event {
        flag: i32,
        /// Julian day UT of the event
        time: f64,
        star_name: Option<String>,
    },
    /// The body stays above or below the horizon for the whole day
    Circumpolar,
}

impl RiseTransit {
    pub fn time(&self) -> Option<f64> {
        match self {
            RiseTransit::Event { time, .. } => Some(*time),
            RiseTransit::Circumpolar => None,
        }
    }

    pub fn is_circumpolar(&self) -> bool {
        matches!(self, RiseTransit::Circumpolar)
    }
}

/// Heliacal event found by `heliacal_ut`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeliacalEvent {
    pub flag: i32,
    /// Start of visibility, optimum visibility, end of visibility (JD UT, zero if not computed)
    pub times: [f64; 3],
    /// Remaining entries of the native result array
    pub details: Vec<f64>,
    pub warning: Option<String>,
}

/// Heliacal phenomena at a given time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeliacalPhenomena {
    pub flag: i32,
    /// The 50-element native array
    pub values: Vec<f64>,
    pub warning: Option<String>,
}

impl HeliacalPhenomena {
    /// Topocentric altitude of the object (unrefracted), degrees
    pub fn object_altitude(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    /// Geocentric arcus visionis, degrees
    pub fn arcus_visionis(&self) -> f64 {
        self.values.get(7).copied().unwrap_or(0.0)
    }
}

/// Limiting visual magnitude and the geometry it was computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualLimit {
    pub flag: i32,
    pub limiting_magnitude: f64,
    pub object_altitude: f64,
    pub object_azimuth: f64,
    pub sun_altitude: f64,
    pub sun_azimuth: f64,
    pub moon_altitude: f64,
    pub moon_azimuth: f64,
    pub object_magnitude: f64,
    pub raw: Vec<f64>,
    /// The library reported the object below the horizon
    pub object_below_horizon: bool,
    pub warning: Option<String>,
}

impl VisualLimit {
    pub(crate) fn from_dret(
        flag: i32,
        dret: &[f64; 50],
        object_below_horizon: bool,
        warning: Option<String>,
    ) -> Self {
        Self {
            flag,
            limiting_magnitude: dret[0],
            object_altitude: dret[1],
            object_azimuth: dret[2],
            sun_altitude: dret[3],
            sun_azimuth: dret[4],
            moon_altitude: dret[5],
            moon_azimuth: dret[6],
            object_magnitude: dret[7],
            raw: dret.to_vec(),
            object_below_horizon,
            warning,
        }
    }

    /// Whether the object is bright enough to be seen
    pub fn is_visible(&self) -> bool {
        !self.object_below_horizon && self.object_magnitude < self.limiting_magnitude
    }
}

/// Moon crossing one of its nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonNodeCrossing {
    pub time: f64,
    /// Lunar longitude at the crossing
    pub longitude: f64,
    /// Lunar latitude at the crossing (close to zero)
    pub latitude: f64,
}

/// Horizontal coordinates, degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Azimuth measured from south, clockwise via west
    pub azimuth: f64,
    pub true_altitude: f64,
    pub apparent_altitude: f64,
}

/// Result of the extended refraction computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Refraction {
    /// Converted altitude (the function value)
    pub altitude: f64,
    pub true_altitude: f64,
    pub apparent_altitude: f64,
    pub refraction: f64,
    /// Dip of the horizon
    pub dip: f64,
}

/// Degrees split into sexagesimal parts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitDegree {
    pub degree: i32,
    pub minute: i32,
    pub second: i32,
    pub second_fraction: f64,
    /// Sign of the value, or zodiac sign/nakshatra index with the matching flag
    pub sign: i32,
}

/// Geographic position of an observer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Degrees, east positive
    pub longitude: f64,
    /// Degrees, north positive
    pub latitude: f64,
    /// Meters above sea level
    #[serde(default)]
    pub altitude: f64,
}

impl GeoPosition {
    pub fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    pub(crate) fn to_native(self) -> [f64; 3] {
        [self.longitude, self.latitude, self.altitude]
    }
}

/// Atmospheric conditions for refraction and visibility
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    /// Pressure, mbar/hPa
    pub pressure: f64,
    /// Temperature, Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Meteorological range in km if >= 1, total extinction coefficient if
    /// below 1, derived from humidity if zero
    pub extinction: f64,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            pressure: 1013.25,
            temperature: 15.0,
            humidity: 40.0,
            extinction: 0.0,
        }
    }
}

impl Atmosphere {
    pub(crate) fn to_native(self) -> [f64; 4] {
        [
            self.pressure,
            self.temperature,
            self.humidity,
            self.extinction,
        ]
    }
}

/// Observer properties for heliacal calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Age in years
    pub age: f64,
    /// Snellen ratio of visual acuity
    pub snellen_ratio: f64,
    pub binocular: bool,
    /// Telescope magnification, zero for the naked eye
    pub magnification: f64,
    /// Optical aperture, mm
    pub aperture: f64,
    /// Optical transmission
    pub transmission: f64,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            age: 36.0,
            snellen_ratio: 1.0,
            binocular: true,
            magnification: 0.0,
            aperture: 0.0,
            transmission: 0.0,
        }
    }
}

impl Observer {
    pub(crate) fn to_native(self) -> [f64; 6] {
        [
            self.age,
            self.snellen_ratio,
            if self.binocular { 1.0 } else { 0.0 },
            self.magnification,
            self.aperture,
            self.transmission,
        ]
    }
}

/// Target of a search: a body number or a fixed star name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Planet(i32),
    Star(String),
}

impl Body {
    /// Body number and name buffer; an empty name selects the planet
    pub(crate) fn to_native(&self) -> Result<(i32, NameBuffer)> {
        match self {
            Body::Planet(ipl) => Ok((*ipl, NameBuffer::new("")?)),
            Body::Star(name) => Ok((crate::constants::planet::FIXSTAR, NameBuffer::new(name)?)),
        }
    }

    /// The star name the library resolved, for star targets
    pub(crate) fn resolved_name(&self, buf: &NameBuffer) -> Option<String> {
        match self {
            Body::Planet(_) => None,
            Body::Star(_) => Some(buf.text()),
        }
    }
}

impl From<i32> for Body {
    fn from(ipl: i32) -> Self {
        Body::Planet(ipl)
    }
}

impl From<&str> for Body {
    fn from(name: &str) -> Self {
        Body::Star(name.to_string())
    }
}
