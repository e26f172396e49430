//! Build configuration for VISA discovery, loaded with Figment.
//!
//! Configuration is layered, later sources overriding earlier ones:
//! 1. Built-in defaults (no overrides, pkg-config enabled)
//! 2. A TOML file named by `VISA_SYS_CONFIG`, if set
//! 3. Environment variables prefixed with `VISA_`
//! 4. The IVI Foundation `VXIPNPPATH` / `VXIPNPPATH64` variables
//!
//! # Example
//! ```no_run
//! use visa_locate::LocateConfig;
//!
//! // VISA_INCLUDE_DIR=/opt/keysight/include VISA_LIB_NAME=iovisa cargo build
//! let config = LocateConfig::load()?;
//! assert!(config.include_dir.is_some());
//! # Ok::<(), visa_locate::LocateError>(())
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::LocateResult;

/// Prefix of the environment overrides (`VISA_INCLUDE_DIR`, ...).
pub const ENV_PREFIX: &str = "VISA_";

/// Environment variable naming an optional TOML configuration file.
pub const CONFIG_FILE_ENV: &str = "VISA_SYS_CONFIG";

/// Every environment variable that influences discovery.
///
/// Build scripts emit `cargo:rerun-if-env-changed` for each of these.
pub const TRACKED_ENV_VARS: &[&str] = &[
    CONFIG_FILE_ENV,
    "VISA_INCLUDE_DIR",
    "VISA_LIB_DIR",
    "VISA_LIB_NAME",
    "VISA_PKG_CONFIG",
    "VXIPNPPATH",
    "VXIPNPPATH64",
];

const ENV_KEYS: &[&str] = &["include_dir", "lib_dir", "lib_name", "pkg_config"];

/// Discovery overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocateConfig {
    /// Directory containing `visa.h`. Takes precedence over everything else.
    pub include_dir: Option<PathBuf>,
    /// Native link search directory, tried before the layout's own.
    pub lib_dir: Option<PathBuf>,
    /// Library to link instead of the platform default.
    pub lib_name: Option<String>,
    /// Extra include directories tried before the built-in table.
    pub search_dirs: Vec<PathBuf>,
    /// Ask pkg-config for `visa` include paths (Linux only).
    pub pkg_config: bool,
    /// IVI `VXIPNPPATH` root (Windows).
    pub vxipnp_path: Option<PathBuf>,
    /// IVI `VXIPNPPATH64` root (Windows).
    pub vxipnp_path64: Option<PathBuf>,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            include_dir: None,
            lib_dir: None,
            lib_name: None,
            search_dirs: Vec::new(),
            pkg_config: true,
            vxipnp_path: None,
            vxipnp_path64: None,
        }
    }
}

impl LocateConfig {
    /// Load from the config file (if any) and the environment.
    pub fn load() -> LocateResult<Self> {
        Ok(Self::extract_from(&Self::figment())?.normalized())
    }

    /// The layered Figment used by [`LocateConfig::load`].
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(LocateConfig::default()));

        if let Some(path) = config_file() {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS))
            .merge(
                Env::raw()
                    .only(&["VXIPNPPATH", "VXIPNPPATH64"])
                    .map(|key| {
                        if key.as_str().eq_ignore_ascii_case("VXIPNPPATH64") {
                            "vxipnp_path64".into()
                        } else {
                            "vxipnp_path".into()
                        }
                    }),
            )
    }

    /// Extract a configuration from an arbitrary Figment.
    pub fn extract_from(figment: &Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    /// Treat empty strings as "unset".
    pub fn normalized(mut self) -> Self {
        fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
            path.filter(|p| !p.as_os_str().is_empty())
        }

        self.include_dir = non_empty(self.include_dir);
        self.lib_dir = non_empty(self.lib_dir);
        self.vxipnp_path = non_empty(self.vxipnp_path);
        self.vxipnp_path64 = non_empty(self.vxipnp_path64);
        self.lib_name = self
            .lib_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        self.search_dirs.retain(|p| !p.as_os_str().is_empty());
        self
    }
}

/// The TOML file named by `VISA_SYS_CONFIG`, if set.
///
/// Build scripts emit `cargo:rerun-if-changed` for it so edits to the file
/// re-run discovery.
pub fn config_file() -> Option<PathBuf> {
    let path = std::env::var_os(CONFIG_FILE_ENV).filter(|path| !path.is_empty())?;
    let cwd = std::env::current_dir().unwrap_or_default();
    Some(find_config_file(Path::new(&path), &cwd))
}

/// Resolve a config file path against `cwd`.
///
/// Relative paths are looked up in `cwd` and then each parent; the first
/// existing file wins. A file found nowhere resolves to `cwd/path`.
pub fn find_config_file(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    cwd.ancestors()
        .map(|dir| dir.join(path))
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| cwd.join(path))
}
