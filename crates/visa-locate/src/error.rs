//! Error types for VISA header discovery.
//!
//! `LocateError` covers every way a build can fail to bind against VISA:
//!
//! - **`UnsupportedPlatform`**: the target is not Windows, macOS or Linux. This is
//!   fatal by design; there is no generic fallback location to try.
//! - **`HeaderNotFound`**: the platform is supported but no candidate directory
//!   holds the vendor header. The error lists every directory probed so the
//!   developer can see which install locations were considered.
//! - **`OverrideMissingHeader`**: an explicit `VISA_INCLUDE_DIR` was given but does
//!   not contain the header. Overrides never fall through to the defaults.
//! - **`Config`**: the configuration file or environment could not be parsed.
//! - **`Io`**: the generated wrapper header could not be written.

use std::path::PathBuf;

use thiserror::Error;

use crate::platform::Platform;

/// Errors produced while resolving the VISA install layout.
#[derive(Error, Debug)]
pub enum LocateError {
    /// The target operating system has no known VISA install layout.
    #[error("Unsupported platform: target_os = {target_os:?} (VISA bindings support windows, macos and linux)")]
    UnsupportedPlatform {
        /// Target OS identifier as reported by the toolchain.
        target_os: String,
    },

    /// No candidate directory contained the VISA header.
    #[error(
        "VISA header `{header}` not found for {platform}; searched: {}. \
         Install a VISA implementation or set VISA_INCLUDE_DIR",
        display_paths(.searched)
    )]
    HeaderNotFound {
        /// Platform being resolved.
        platform: Platform,
        /// Header file name that was looked for.
        header: String,
        /// Directories probed, in priority order.
        searched: Vec<PathBuf>,
    },

    /// `VISA_INCLUDE_DIR` points at a directory without the header.
    #[error("VISA_INCLUDE_DIR={dir:?} does not contain `{header}`")]
    OverrideMissingHeader {
        /// Directory given by the override.
        dir: PathBuf,
        /// Header file name that was looked for.
        header: String,
    },

    /// Writing generated build inputs failed.
    #[error("I/O error while preparing VISA bindings: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("Invalid VISA build configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for LocateError {
    fn from(err: figment::Error) -> Self {
        LocateError::Config(Box::new(err))
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<none>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience alias used across the crate.
pub type LocateResult<T> = Result<T, LocateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_message_names_the_target() {
        let err = LocateError::UnsupportedPlatform {
            target_os: "freebsd".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unsupported platform"));
        assert!(msg.contains("freebsd"));
    }

    #[test]
    fn header_not_found_lists_search_order() {
        let err = LocateError::HeaderNotFound {
            platform: Platform::Linux,
            header: "visa.h".to_string(),
            searched: vec![PathBuf::from("/opt/a"), PathBuf::from("/usr/include")],
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/a, /usr/include"));
        assert!(msg.contains("VISA_INCLUDE_DIR"));
    }

    #[test]
    fn header_not_found_with_empty_search_list() {
        let err = LocateError::HeaderNotFound {
            platform: Platform::MacOs,
            header: "visa.h".to_string(),
            searched: Vec::new(),
        };
        assert!(err.to_string().contains("<none>"));
    }
}
