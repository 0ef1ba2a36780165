//! Build script for swisseph-sys
//!
//! This script handles finding a prebuilt Swiss Ephemeris library (`libswe`)
//! or compiling it from the C sources.

use std::env;
use std::path::{Path, PathBuf};

/// Library translation units of the Swiss Ephemeris distribution.
/// The command-line programs (swetest.c, swemini.c, ...) are left out.
#[allow(dead_code)]
const NATIVE_SOURCES: &[&str] = &[
    "swecl.c",
    "swedate.c",
    "swehel.c",
    "swehouse.c",
    "swejpl.c",
    "swemmoon.c",
    "swemplan.c",
    "sweph.c",
    "swephlib.c",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SWISSEPH_LIB_DIR");
    println!("cargo:rerun-if-env-changed=SWISSEPH_SRC_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // Strategy 1: Check for pre-built library via environment variable
    if let Ok(lib_dir) = env::var("SWISSEPH_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:rustc-link-lib=swe");
        link_system_deps();
        return;
    }

    // Strategy 2: Try pkg-config
    if try_pkg_config() {
        return;
    }

    // Strategy 3: Build from source if feature enabled
    if build_native(&out_dir) {
        return;
    }

    // Strategy 4: Look for library in common locations
    let search_paths = [
        "/usr/local/lib",
        "/usr/lib",
        "/usr/lib/x86_64-linux-gnu",
        "/usr/lib/aarch64-linux-gnu",
        "/opt/homebrew/lib",
    ];

    for path in &search_paths {
        for name in ["libswe.so", "libswe.a", "libswe.dylib"] {
            if PathBuf::from(path).join(name).exists() {
                println!("cargo:rustc-link-search=native={}", path);
                println!("cargo:rustc-link-lib=swe");
                link_system_deps();
                return;
            }
        }
    }

    // If we get here, we couldn't find the library
    eprintln!("Could not find the Swiss Ephemeris library (libswe).");
    eprintln!("Options:");
    eprintln!("  1. Set SWISSEPH_LIB_DIR to the directory containing libswe");
    eprintln!("  2. Install libswe system-wide (with a swisseph.pc for pkg-config)");
    eprintln!("  3. Enable the 'build-native' feature and set SWISSEPH_SRC_DIR");
    eprintln!("     to the directory holding the Swiss Ephemeris C sources");
    panic!("libswe not found");
}

fn try_pkg_config() -> bool {
    for name in ["swisseph", "libswe"] {
        if pkg_config::Config::new()
            .atleast_version("2.10")
            .probe(name)
            .is_ok()
        {
            println!("cargo:info=Found {} via pkg-config", name);
            return true;
        }
    }
    false
}

#[cfg(all(feature = "build-native", not(feature = "system-libs")))]
fn build_native(out_dir: &Path) -> bool {
    build_from_source(out_dir);
    true
}

#[cfg(not(all(feature = "build-native", not(feature = "system-libs"))))]
fn build_native(_out_dir: &Path) -> bool {
    false
}

#[cfg(all(feature = "build-native", not(feature = "system-libs")))]
fn build_from_source(out_dir: &Path) {
    let manifest = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("set by cargo"));

    let src_dir = env::var("SWISSEPH_SRC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| manifest.join("native"));

    if !src_dir.join("swephexp.h").exists() {
        panic!(
            "Swiss Ephemeris sources not found at: {}\n\
             Set SWISSEPH_SRC_DIR to the directory holding swephexp.h and the sw*.c files.",
            src_dir.display()
        );
    }

    let mut build = cc::Build::new();
    build
        .include(&src_dir)
        .warnings(false)
        .flag_if_supported("-Wno-unused-result")
        .flag_if_supported("-Wno-format")
        .opt_level(2);

    for file in NATIVE_SOURCES {
        let path = src_dir.join(file);
        println!("cargo:rerun-if-changed={}", path.display());
        build.file(path);
    }

    build.out_dir(out_dir).compile("swe");

    // Export the header location for downstream build scripts
    println!("cargo:include={}", src_dir.display());
    link_system_deps();
}

fn link_system_deps() {
    // The library uses libm for all of its trigonometry
    #[cfg(unix)]
    println!("cargo:rustc-link-lib=m");
}
