//! Heliacal risings and settings, visibility limits
//!
//! Objects are named as strings: a planet name (`"venus"`, `"moon"`) or a
//! fixed star name as accepted by [`crate::fixstar`].

use crate::constants::heliacal_event;
use crate::error::{Error, Result};
use crate::lock::with_native;
use crate::marshal::{ErrorBuffer, NameBuffer};
use crate::types::{
    Atmosphere, GeoPosition, HeliacalEvent, HeliacalPhenomena, Observer, VisualLimit,
};
use log::warn;
use swisseph_sys as ffi;

/// Return code of `swe_vis_limit_mag` for an object below the horizon
const BELOW_HORIZON: i32 = -2;

/// Next heliacal event of an object
///
/// `event_type` is one of the [`crate::heliacal_event`] constants.
pub fn heliacal_ut(
    tjd_start: f64,
    position: GeoPosition,
    atmosphere: Atmosphere,
    observer: Observer,
    object: &str,
    event_type: i32,
    helflag: i32,
) -> Result<HeliacalEvent> {
    let mut name = NameBuffer::new(object)?;
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut datm = atmosphere.to_native();
    let mut dobs = observer.to_native();
    let mut dret = [0.0f64; ffi::DRET_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_heliacal_ut(
            tjd_start,
            geopos.as_mut_ptr(),
            datm.as_mut_ptr(),
            dobs.as_mut_ptr(),
            name.as_mut_ptr(),
            event_type,
            helflag,
            dret.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_heliacal_ut", flag)?;
    Ok(HeliacalEvent {
        flag,
        times: [dret[0], dret[1], dret[2]],
        details: dret[3..].to_vec(),
        warning,
    })
}

/// Heliacal phenomena (altitudes, arcus visionis, ...) at a given time
pub fn heliacal_pheno_ut(
    tjd_ut: f64,
    position: GeoPosition,
    atmosphere: Atmosphere,
    observer: Observer,
    object: &str,
    event_type: i32,
    helflag: i32,
) -> Result<HeliacalPhenomena> {
    let mut name = NameBuffer::new(object)?;
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut datm = atmosphere.to_native();
    let mut dobs = observer.to_native();
    let mut darr = [0.0f64; ffi::DRET_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_heliacal_pheno_ut(
            tjd_ut,
            geopos.as_mut_ptr(),
            datm.as_mut_ptr(),
            dobs.as_mut_ptr(),
            name.as_mut_ptr(),
            event_type,
            helflag,
            darr.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    let warning = serr.check("swe_heliacal_pheno_ut", flag)?;
    Ok(HeliacalPhenomena {
        flag,
        values: darr.to_vec(),
        warning,
    })
}

/// Limiting visual magnitude for an object at a given time
///
/// An object below the horizon is not an error: the result has
/// `object_below_horizon` set and the geometry the library computed.
pub fn vis_limit_mag(
    tjd_ut: f64,
    position: GeoPosition,
    atmosphere: Atmosphere,
    observer: Observer,
    object: &str,
    helflag: i32,
) -> Result<VisualLimit> {
    let mut name = NameBuffer::new(object)?;
    let mut serr = ErrorBuffer::new();
    let mut geopos = position.to_native();
    let mut datm = atmosphere.to_native();
    let mut dobs = observer.to_native();
    let mut dret = [0.0f64; ffi::DRET_ARRAY_LEN];
    let flag = with_native(|| unsafe {
        ffi::swe_vis_limit_mag(
            tjd_ut,
            geopos.as_mut_ptr(),
            datm.as_mut_ptr(),
            dobs.as_mut_ptr(),
            name.as_mut_ptr(),
            helflag,
            dret.as_mut_ptr(),
            serr.as_mut_ptr(),
        )
    });
    visual_limit(flag, &dret, serr.message())
}

fn visual_limit(flag: i32, dret: &[f64; 50], message: Option<String>) -> Result<VisualLimit> {
    match flag {
        BELOW_HORIZON => Ok(VisualLimit::from_dret(flag, dret, true, message)),
        f if f < 0 => Err(Error::native(f, message.unwrap_or_default())),
        _ => {
            if let Some(msg) = &message {
                warn!("swe_vis_limit_mag: {}", msg);
            }
            Ok(VisualLimit::from_dret(flag, dret, false, message))
        }
    }
}

/// Whether a heliacal event time is a real result
///
/// The library marks events it could not compute with a sentinel date.
pub fn is_valid_event_time(tjd: f64) -> bool {
    tjd > 0.0 && tjd < heliacal_event::TJD_INVALID
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dret() -> [f64; 50] {
        let mut d = [0.0; 50];
        d[0] = 6.5;
        d[1] = -12.0;
        d[7] = 1.2;
        d
    }

    #[test]
    fn test_below_horizon_is_not_an_error() {
        let limit = visual_limit(BELOW_HORIZON, &dret(), Some("object is below horizon".into()))
            .unwrap();
        assert!(limit.object_below_horizon);
        assert!(!limit.is_visible());
        assert_eq!(limit.object_altitude, -12.0);
    }

    #[test]
    fn test_error_keeps_native_text() {
        let err = visual_limit(-1, &dret(), Some("illegal object".into())).unwrap_err();
        assert_eq!(err.code(), Some(-1));
        assert_eq!(err.native_message(), Some("illegal object"));
    }

    #[test]
    fn test_visible_object() {
        let limit = visual_limit(0, &dret(), None).unwrap();
        assert!(!limit.object_below_horizon);
        assert_eq!(limit.limiting_magnitude, 6.5);
        assert!(limit.is_visible());
        assert_eq!(limit.raw.len(), 50);
    }

    #[test]
    fn test_event_time_validity() {
        assert!(is_valid_event_time(2451545.0));
        assert!(!is_valid_event_time(0.0));
        assert!(!is_valid_event_time(heliacal_event::TJD_INVALID));
    }
}
