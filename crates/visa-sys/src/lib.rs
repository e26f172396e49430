//! Low-level FFI bindings for the VISA instrument-control library.
//!
//! VISA (Virtual Instrument Software Architecture) is the vendor-standardized
//! C API for GPIB, USB, serial and Ethernet test-and-measurement instruments.
//! This crate exposes the declarations of the installed `visa.h` and nothing
//! else: no safe wrapper, no session management.
//!
//! # Platform selection
//!
//! The header is chosen at build time from the target OS (see `visa-locate`):
//!
//! - Windows: `C:\Program Files (x86)\IVI Foundation\VISA\WinNT\Include\visa.h`
//! - macOS: `/Library/Frameworks/VISA.framework/Headers/visa.h`
//! - Linux: `/usr/include/visa.h`
//!
//! Any other target fails to build with `Unsupported platform`. Set
//! `VISA_INCLUDE_DIR`, `VISA_LIB_DIR` or `VISA_LIB_NAME` to point the build at a
//! non-default installation.
//!
//! # Features
//!
//! - `visa-sdk` (default): Generate bindings from the installed VISA header and
//!   link the VISA library. A missing header fails the build. With
//!   `--no-default-features`, fallback declarations are used so the crate
//!   compiles without VISA installed; calling any function panics.
//!
//! # Example (unsafe)
//!
//! ```no_run
//! use visa_sys::*;
//!
//! unsafe {
//!     let mut rm: ViSession = 0;
//!     if viOpenDefaultRM(&mut rm) >= 0 {
//!         println!("Resource manager session {}", rm);
//!         viClose(rm);
//!     }
//! }
//! ```

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(clippy::all)]

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
compile_error!("Unsupported platform: visa-sys supports windows, macos and linux");

// Include the generated bindings
#[cfg(feature = "visa-sdk")]
include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

#[cfg(not(feature = "visa-sdk"))]
mod fallback;
#[cfg(not(feature = "visa-sdk"))]
pub use fallback::*;

/// `target_os` of the platform branch taken by the build script.
pub const SELECTED_PLATFORM: &str = env!("VISA_SYS_PLATFORM");

/// Header the bindings were generated from; `None` without `visa-sdk`.
pub const SELECTED_HEADER: Option<&str> = option_env!("VISA_SYS_HEADER");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_platform_matches_target() {
        let expected = if cfg!(target_os = "windows") {
            "windows"
        } else if cfg!(target_os = "macos") {
            "macos"
        } else {
            "linux"
        };
        assert_eq!(SELECTED_PLATFORM, expected);
    }

    #[test]
    fn header_is_only_selected_with_sdk() {
        if cfg!(feature = "visa-sdk") {
            let header = SELECTED_HEADER.unwrap_or_default();
            assert!(header.ends_with("visa.h"), "unexpected header {header:?}");
        } else {
            assert_eq!(SELECTED_HEADER, None);
        }
    }

    #[test]
    fn core_constants_are_available() {
        assert_eq!(VI_SUCCESS as i64, 0);
        assert_eq!(VI_NULL as i64, 0);
        assert_eq!(VI_ATTR_TMO_VALUE as u64, 0x3FFF_001A);
        assert_eq!(VI_FIND_BUFLEN as usize, 256);
    }
}
