//! # swisseph-sys
//!
//! Low-level FFI bindings to the Swiss Ephemeris C library (`libswe`).
//!
//! This crate provides raw, unsafe bindings to the C API as declared in
//! `swephexp.h`. For a safe, ergonomic API, use the `swisseph` crate instead.
//!
//! ## Safety
//!
//! All functions in this crate are unsafe. Users must ensure:
//! - Output pointers reference buffers at least as large as the library writes
//!   (`AS_MAXCH` for error strings, `SE_MAX_STNAME` for star names, the
//!   documented array lengths for doubles)
//! - Strings are null-terminated
//! - Calls are serialized: the library keeps process-wide mutable state
//!   (open ephemeris files, sidereal mode, topocentric position, caches)
//! - Pointers returned by `swe_house_name`, `swe_get_ayanamsa_name` and
//!   `swe_get_current_file_data` are not freed and are copied before the
//!   next call
//!
//! ## Example
//!
//! ```rust,ignore
//! use swisseph_sys::*;
//! use std::ffi::CStr;
//! use std::os::raw::c_char;
//!
//! unsafe {
//!     let mut buf = [0 as c_char; AS_MAXCH];
//!     let version = CStr::from_ptr(swe_version(buf.as_mut_ptr()));
//!     println!("Swiss Ephemeris version: {}", version.to_string_lossy());
//! }
//! ```

#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_double, c_int};

/// The library's `int32` type (`typedef int int32` on every supported target)
pub type int32 = c_int;

// ============================================================================
// Return Codes and Buffer Sizes
// ============================================================================

/// Success return code
pub const OK: int32 = 0;

/// Failure return code
pub const ERR: int32 = -1;

/// Size of every error-message and short-string buffer (`AS_MAXCH`)
pub const AS_MAXCH: usize = 256;

/// Size of the in/out star-name buffer (`SE_MAX_STNAME`)
pub const SE_MAX_STNAME: usize = 256;

/// Length of the `cusps` array accepted by the house functions (37 = 1 + 36 Gauquelin sectors)
pub const CUSP_ARRAY_LEN: usize = 37;

/// Length of the `ascmc` array written by the house functions
pub const ASCMC_ARRAY_LEN: usize = 10;

/// Position/speed vector length for `swe_calc` and friends
pub const XX_ARRAY_LEN: usize = 6;

/// Length of the `tret` array written by eclipse searches
pub const TRET_ARRAY_LEN: usize = 10;

/// Length of the `attr` array written by eclipse and phenomena functions
pub const ATTR_ARRAY_LEN: usize = 20;

/// Length of the `geopos` array written by the `*_where` functions
pub const WHERE_GEOPOS_LEN: usize = 10;

/// Length of the `dret` array written by heliacal and orbital-element functions
pub const DRET_ARRAY_LEN: usize = 50;

// ============================================================================
// FFI Function Declarations
// ============================================================================

extern "C" {
    // Library lifecycle and configuration
    pub fn swe_version(s: *mut c_char) -> *mut c_char;
    pub fn swe_get_library_path(s: *mut c_char) -> *mut c_char;
    pub fn swe_close();
    pub fn swe_set_ephe_path(path: *const c_char);
    pub fn swe_set_jpl_file(fname: *const c_char);
    pub fn swe_set_sid_mode(sid_mode: int32, t0: c_double, ayan_t0: c_double);
    pub fn swe_set_topo(geolon: c_double, geolat: c_double, geoalt: c_double);
    pub fn swe_set_tid_acc(t_acc: c_double);
    pub fn swe_get_tid_acc() -> c_double;
    pub fn swe_set_delta_t_userdef(dt: c_double);
    pub fn swe_set_lapse_rate(lapse_rate: c_double);

    // Planets
    pub fn swe_calc(
        tjd: c_double,
        ipl: c_int,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_calc_ut(
        tjd_ut: c_double,
        ipl: int32,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_calc_pctr(
        tjd: c_double,
        ipl: int32,
        iplctr: int32,
        iflag: int32,
        xxret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_get_planet_name(ipl: c_int, spname: *mut c_char) -> *mut c_char;

    pub fn swe_pheno(
        tjd: c_double,
        ipl: int32,
        iflag: int32,
        attr: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_pheno_ut(
        tjd_ut: c_double,
        ipl: int32,
        iflag: int32,
        attr: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_nod_aps(
        tjd_et: c_double,
        ipl: int32,
        iflag: int32,
        method: int32,
        xnasc: *mut c_double,
        xndsc: *mut c_double,
        xperi: *mut c_double,
        xaphe: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_nod_aps_ut(
        tjd_ut: c_double,
        ipl: int32,
        iflag: int32,
        method: int32,
        xnasc: *mut c_double,
        xndsc: *mut c_double,
        xperi: *mut c_double,
        xaphe: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_get_orbital_elements(
        tjd_et: c_double,
        ipl: int32,
        iflag: int32,
        dret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_orbit_max_min_true_distance(
        tjd_et: c_double,
        ipl: int32,
        iflag: int32,
        dmax: *mut c_double,
        dmin: *mut c_double,
        dtrue: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_get_current_file_data(
        ifno: c_int,
        tfstart: *mut c_double,
        tfend: *mut c_double,
        denum: *mut c_int,
    ) -> *const c_char;

    // Ayanamsa
    pub fn swe_get_ayanamsa(tjd_et: c_double) -> c_double;
    pub fn swe_get_ayanamsa_ut(tjd_ut: c_double) -> c_double;

    pub fn swe_get_ayanamsa_ex(
        tjd_et: c_double,
        iflag: int32,
        daya: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_get_ayanamsa_ex_ut(
        tjd_ut: c_double,
        iflag: int32,
        daya: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_get_ayanamsa_name(isidmode: int32) -> *const c_char;

    // Fixed stars
    pub fn swe_fixstar(
        star: *mut c_char,
        tjd: c_double,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_fixstar_ut(
        star: *mut c_char,
        tjd_ut: c_double,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_fixstar_mag(star: *mut c_char, mag: *mut c_double, serr: *mut c_char) -> int32;

    pub fn swe_fixstar2(
        star: *mut c_char,
        tjd: c_double,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_fixstar2_ut(
        star: *mut c_char,
        tjd_ut: c_double,
        iflag: int32,
        xx: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_fixstar2_mag(star: *mut c_char, mag: *mut c_double, serr: *mut c_char) -> int32;

    // Date and time
    pub fn swe_julday(
        year: c_int,
        month: c_int,
        day: c_int,
        hour: c_double,
        gregflag: c_int,
    ) -> c_double;

    pub fn swe_revjul(
        jd: c_double,
        gregflag: c_int,
        jyear: *mut c_int,
        jmon: *mut c_int,
        jday: *mut c_int,
        jut: *mut c_double,
    );

    pub fn swe_date_conversion(
        y: c_int,
        m: c_int,
        d: c_int,
        utime: c_double,
        c: c_char,
        tjd: *mut c_double,
    ) -> int32;

    pub fn swe_utc_to_jd(
        iyear: int32,
        imonth: int32,
        iday: int32,
        ihour: int32,
        imin: int32,
        dsec: c_double,
        gregflag: int32,
        dret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_jdet_to_utc(
        tjd_et: c_double,
        gregflag: int32,
        iyear: *mut int32,
        imonth: *mut int32,
        iday: *mut int32,
        ihour: *mut int32,
        imin: *mut int32,
        dsec: *mut c_double,
    );

    pub fn swe_jdut1_to_utc(
        tjd_ut: c_double,
        gregflag: int32,
        iyear: *mut int32,
        imonth: *mut int32,
        iday: *mut int32,
        ihour: *mut int32,
        imin: *mut int32,
        dsec: *mut c_double,
    );

    pub fn swe_utc_time_zone(
        iyear: int32,
        imonth: int32,
        iday: int32,
        ihour: int32,
        imin: int32,
        dsec: c_double,
        d_timezone: c_double,
        iyear_out: *mut int32,
        imonth_out: *mut int32,
        iday_out: *mut int32,
        ihour_out: *mut int32,
        imin_out: *mut int32,
        dsec_out: *mut c_double,
    );

    pub fn swe_deltat(tjd: c_double) -> c_double;
    pub fn swe_deltat_ex(tjd: c_double, iflag: int32, serr: *mut c_char) -> c_double;
    pub fn swe_time_equ(tjd: c_double, te: *mut c_double, serr: *mut c_char) -> int32;

    pub fn swe_lmt_to_lat(
        tjd_lmt: c_double,
        geolon: c_double,
        tjd_lat: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_lat_to_lmt(
        tjd_lat: c_double,
        geolon: c_double,
        tjd_lmt: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_sidtime(tjd_ut: c_double) -> c_double;
    pub fn swe_sidtime0(tjd_ut: c_double, eps: c_double, nut: c_double) -> c_double;
    pub fn swe_day_of_week(jd: c_double) -> c_int;

    // Houses
    pub fn swe_houses(
        tjd_ut: c_double,
        geolat: c_double,
        geolon: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
    ) -> c_int;

    pub fn swe_houses_ex(
        tjd_ut: c_double,
        iflag: int32,
        geolat: c_double,
        geolon: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
    ) -> c_int;

    pub fn swe_houses_ex2(
        tjd_ut: c_double,
        iflag: int32,
        geolat: c_double,
        geolon: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
        cusp_speed: *mut c_double,
        ascmc_speed: *mut c_double,
        serr: *mut c_char,
    ) -> c_int;

    pub fn swe_houses_armc(
        armc: c_double,
        geolat: c_double,
        eps: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
    ) -> c_int;

    pub fn swe_houses_armc_ex2(
        armc: c_double,
        geolat: c_double,
        eps: c_double,
        hsys: c_int,
        cusps: *mut c_double,
        ascmc: *mut c_double,
        cusp_speed: *mut c_double,
        ascmc_speed: *mut c_double,
        serr: *mut c_char,
    ) -> c_int;

    pub fn swe_house_pos(
        armc: c_double,
        geolat: c_double,
        eps: c_double,
        hsys: c_int,
        xpin: *mut c_double,
        serr: *mut c_char,
    ) -> c_double;

    pub fn swe_house_name(hsys: c_int) -> *const c_char;

    pub fn swe_gauquelin_sector(
        t_ut: c_double,
        ipl: int32,
        starname: *mut c_char,
        iflag: int32,
        imeth: int32,
        geopos: *mut c_double,
        atpress: c_double,
        attemp: c_double,
        dgsect: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    // Eclipses and occultations
    pub fn swe_sol_eclipse_when_loc(
        tjd_start: c_double,
        ifl: int32,
        geopos: *mut c_double,
        tret: *mut c_double,
        attr: *mut c_double,
        backward: int32,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_sol_eclipse_when_glob(
        tjd_start: c_double,
        ifl: int32,
        ifltype: int32,
        tret: *mut c_double,
        backward: int32,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_sol_eclipse_how(
        tjd_ut: c_double,
        ifl: int32,
        geopos: *mut c_double,
        attr: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_sol_eclipse_where(
        tjd_ut: c_double,
        ifl: int32,
        geopos: *mut c_double,
        attr: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_lun_eclipse_when(
        tjd_start: c_double,
        ifl: int32,
        ifltype: int32,
        tret: *mut c_double,
        backward: int32,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_lun_eclipse_when_loc(
        tjd_start: c_double,
        ifl: int32,
        geopos: *mut c_double,
        tret: *mut c_double,
        attr: *mut c_double,
        backward: int32,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_lun_eclipse_how(
        tjd_ut: c_double,
        ifl: int32,
        geopos: *mut c_double,
        attr: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_lun_occult_when_loc(
        tjd_start: c_double,
        ipl: int32,
        starname: *mut c_char,
        ifl: int32,
        geopos: *mut c_double,
        tret: *mut c_double,
        attr: *mut c_double,
        backward: int32,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_lun_occult_when_glob(
        tjd_start: c_double,
        ipl: int32,
        starname: *mut c_char,
        ifl: int32,
        ifltype: int32,
        tret: *mut c_double,
        backward: int32,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_lun_occult_where(
        tjd_ut: c_double,
        ipl: int32,
        starname: *mut c_char,
        ifl: int32,
        geopos: *mut c_double,
        attr: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    // Heliacal events
    pub fn swe_heliacal_ut(
        tjdstart_ut: c_double,
        geopos: *mut c_double,
        datm: *mut c_double,
        dobs: *mut c_double,
        object_name: *mut c_char,
        type_event: int32,
        iflag: int32,
        dret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_heliacal_pheno_ut(
        tjd_ut: c_double,
        geopos: *mut c_double,
        datm: *mut c_double,
        dobs: *mut c_double,
        object_name: *mut c_char,
        type_event: int32,
        helflag: int32,
        darr: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_vis_limit_mag(
        tjd_ut: c_double,
        geopos: *mut c_double,
        datm: *mut c_double,
        dobs: *mut c_double,
        object_name: *mut c_char,
        helflag: int32,
        dret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    // Crossings
    pub fn swe_solcross(x2cross: c_double, jd_et: c_double, flag: int32, serr: *mut c_char)
        -> c_double;

    pub fn swe_solcross_ut(
        x2cross: c_double,
        jd_ut: c_double,
        flag: int32,
        serr: *mut c_char,
    ) -> c_double;

    pub fn swe_mooncross(
        x2cross: c_double,
        jd_et: c_double,
        flag: int32,
        serr: *mut c_char,
    ) -> c_double;

    pub fn swe_mooncross_ut(
        x2cross: c_double,
        jd_ut: c_double,
        flag: int32,
        serr: *mut c_char,
    ) -> c_double;

    pub fn swe_mooncross_node(
        jd_et: c_double,
        flag: int32,
        xlon: *mut c_double,
        xlat: *mut c_double,
        serr: *mut c_char,
    ) -> c_double;

    pub fn swe_mooncross_node_ut(
        jd_ut: c_double,
        flag: int32,
        xlon: *mut c_double,
        xlat: *mut c_double,
        serr: *mut c_char,
    ) -> c_double;

    pub fn swe_helio_cross(
        ipl: int32,
        x2cross: c_double,
        jd_et: c_double,
        iflag: int32,
        dir: int32,
        jd_cross: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_helio_cross_ut(
        ipl: int32,
        x2cross: c_double,
        jd_ut: c_double,
        iflag: int32,
        dir: int32,
        jd_cross: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    // Rise, transit and set
    pub fn swe_rise_trans(
        tjd_ut: c_double,
        ipl: int32,
        starname: *mut c_char,
        epheflag: int32,
        rsmi: int32,
        geopos: *mut c_double,
        atpress: c_double,
        attemp: c_double,
        tret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    pub fn swe_rise_trans_true_hor(
        tjd_ut: c_double,
        ipl: int32,
        starname: *mut c_char,
        epheflag: int32,
        rsmi: int32,
        geopos: *mut c_double,
        atpress: c_double,
        attemp: c_double,
        horhgt: c_double,
        tret: *mut c_double,
        serr: *mut c_char,
    ) -> int32;

    // Coordinate transforms
    pub fn swe_azalt(
        tjd_ut: c_double,
        calc_flag: int32,
        geopos: *mut c_double,
        atpress: c_double,
        attemp: c_double,
        xin: *mut c_double,
        xaz: *mut c_double,
    );

    pub fn swe_azalt_rev(
        tjd_ut: c_double,
        calc_flag: int32,
        geopos: *mut c_double,
        xin: *mut c_double,
        xout: *mut c_double,
    );

    pub fn swe_refrac(inalt: c_double, atpress: c_double, attemp: c_double, calc_flag: int32)
        -> c_double;

    pub fn swe_refrac_extended(
        inalt: c_double,
        geoalt: c_double,
        atpress: c_double,
        attemp: c_double,
        lapse_rate: c_double,
        calc_flag: int32,
        dret: *mut c_double,
    ) -> c_double;

    pub fn swe_cotrans(xpo: *const c_double, xpn: *mut c_double, eps: c_double);
    pub fn swe_cotrans_sp(xpo: *const c_double, xpn: *mut c_double, eps: c_double);

    // Normalisation and formatting
    pub fn swe_degnorm(x: c_double) -> c_double;
    pub fn swe_radnorm(x: c_double) -> c_double;
    pub fn swe_deg_midp(x1: c_double, x0: c_double) -> c_double;
    pub fn swe_rad_midp(x1: c_double, x0: c_double) -> c_double;
    pub fn swe_csnorm(p: int32) -> int32;
    pub fn swe_difcsn(p1: int32, p2: int32) -> int32;
    pub fn swe_difdegn(p1: c_double, p2: c_double) -> c_double;
    pub fn swe_difcs2n(p1: int32, p2: int32) -> int32;
    pub fn swe_difdeg2n(p1: c_double, p2: c_double) -> c_double;
    pub fn swe_difrad2n(p1: c_double, p2: c_double) -> c_double;
    pub fn swe_csroundsec(x: int32) -> int32;
    pub fn swe_d2l(x: c_double) -> int32;

    pub fn swe_split_deg(
        ddeg: c_double,
        roundflag: int32,
        ideg: *mut int32,
        imin: *mut int32,
        isec: *mut int32,
        dsecfr: *mut c_double,
        isgn: *mut int32,
    );

    pub fn swe_cs2timestr(t: int32, sep: c_int, suppress_zero: int32, a: *mut c_char)
        -> *mut c_char;
    pub fn swe_cs2lonlatstr(t: int32, pchar: c_char, mchar: c_char, s: *mut c_char) -> *mut c_char;
    pub fn swe_cs2degstr(t: int32, a: *mut c_char) -> *mut c_char;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_codes() {
        assert_eq!(OK, 0);
        assert_eq!(ERR, -1);
    }

    #[test]
    fn test_buffer_sizes() {
        assert_eq!(AS_MAXCH, 256);
        assert_eq!(SE_MAX_STNAME, 256);
        assert!(CUSP_ARRAY_LEN > 36);
        assert_eq!(ASCMC_ARRAY_LEN, 10);
    }

    #[test]
    fn test_int32_is_four_bytes() {
        assert_eq!(std::mem::size_of::<int32>(), 4);
    }
}
