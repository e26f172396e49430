//! Build-time discovery of the VISA interface header.
//!
//! VISA (Virtual Instrument Software Architecture) is the vendor-standardized
//! C API for talking to GPIB, USB, serial and Ethernet test instruments. Each
//! vendor installs `visa.h` and its import library in an OS-specific place.
//! This crate decides, once per build, which of those places applies to the
//! compilation target:
//!
//! | Target | Default header |
//! |---|---|
//! | Windows | `C:\Program Files (x86)\IVI Foundation\VISA\WinNT\Include\visa.h` |
//! | macOS | `/Library/Frameworks/VISA.framework/Headers/visa.h` |
//! | Linux | `/usr/include/visa.h` |
//! | anything else | build error: `Unsupported platform` |
//!
//! The defaults are data ([`layout`]), and can be overridden through
//! [`LocateConfig`] (environment variables or a TOML file) without touching
//! source code.
//!
//! # Example (build script)
//!
//! ```no_run
//! use visa_locate::{locate, write_wrapper, Platform};
//!
//! # fn main() -> Result<(), visa_locate::LocateError> {
//! let platform = Platform::from_cargo_env()?;
//! let resolution = locate(platform)?;
//! let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap_or_default());
//! let wrapper = write_wrapper(&out_dir, &resolution)?;
//! for line in resolution.cargo_instructions() {
//!     println!("{line}");
//! }
//! # let _ = wrapper;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod layout;
#[cfg(feature = "logging")]
pub mod logging;
pub mod platform;
pub mod resolve;
pub mod wrapper;

pub use config::LocateConfig;
pub use error::{LocateError, LocateResult};
pub use layout::{InstallLayout, LinkDirective, HEADER_NAME};
pub use platform::Platform;
pub use resolve::{
    locate, Candidate, CandidateSource, FsProbe, HeaderProbe, PkgConfigHit, Resolution, Resolver,
};
pub use wrapper::{render_wrapper, write_wrapper, WRAPPER_NAME};
