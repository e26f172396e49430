//! Target platform identification.
//!
//! The platform is a closed set supplied by the toolchain: inside a build
//! script Cargo exposes the *target* OS through `CARGO_CFG_TARGET_OS`, which is
//! what must drive header selection when cross-compiling. Anything outside
//! the set is an [`LocateError::UnsupportedPlatform`].

use std::fmt;

use serde::Serialize;

use crate::error::{LocateError, LocateResult};

/// Operating systems with a known VISA install layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows (IVI Foundation VISA SDK).
    Windows,
    /// macOS (system-wide `VISA.framework`).
    MacOs,
    /// Linux (system include directory).
    Linux,
}

impl Platform {
    /// Fixed check order used when more than one identifier is present.
    pub const PRIORITY: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// The `target_os` value that identifies this platform.
    pub const fn identifier(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }

    /// Resolve a single `target_os` value.
    pub fn from_target_os(target_os: &str) -> LocateResult<Self> {
        Self::from_identifiers([target_os]).map_err(|_| LocateError::UnsupportedPlatform {
            target_os: target_os.to_string(),
        })
    }

    /// Resolve from a set of platform identifiers.
    ///
    /// Identifiers are matched against [`Platform::PRIORITY`] in order, so a
    /// set containing both `windows` and `linux` resolves to Windows.
    pub fn from_identifiers<I, S>(identifiers: I) -> LocateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = identifiers
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_lowercase())
            .collect();

        Self::PRIORITY
            .into_iter()
            .find(|platform| ids.iter().any(|id| id == platform.identifier()))
            .ok_or_else(|| LocateError::UnsupportedPlatform {
                target_os: ids.join(","),
            })
    }

    /// Platform of the compilation target, as seen from a build script.
    ///
    /// Falls back to the host OS when `CARGO_CFG_TARGET_OS` is unset, which
    /// only happens outside of Cargo.
    pub fn from_cargo_env() -> LocateResult<Self> {
        match std::env::var("CARGO_CFG_TARGET_OS") {
            Ok(target_os) => Self::from_target_os(&target_os),
            Err(_) => Self::current(),
        }
    }

    /// Platform this code was compiled for.
    pub fn current() -> LocateResult<Self> {
        Self::from_target_os(std::env::consts::OS)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        };
        write!(f, "{}", label)
    }
}
