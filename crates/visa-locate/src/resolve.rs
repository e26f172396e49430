//! Header discovery.
//!
//! A [`Resolver`] turns a [`Platform`] and a [`LocateConfig`] into an ordered
//! list of [`Candidate`] directories and picks the first one that actually
//! holds `visa.h`. Exactly one [`Resolution`] comes out of a successful run.
//!
//! Candidate order:
//! 1. `VISA_INCLUDE_DIR` (exclusive: a miss is an error, not a fallthrough)
//! 2. `search_dirs` from the config file
//! 3. `VXIPNPPATH64` / `VXIPNPPATH` roots (Windows)
//! 4. pkg-config include paths for `visa` (Linux)
//! 5. The built-in table from [`crate::layout::default_layouts`]

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::LocateConfig;
use crate::error::{LocateError, LocateResult};
use crate::layout::{
    default_layouts, is_64bit, vxipnp_include_dir, windows_link, InstallLayout,
    LinkDirective, HEADER_NAME, WINDOWS_VISA_ROOT_X64, WINDOWS_VISA_ROOT_X86,
};
use crate::platform::Platform;

/// Checks whether a header file is present.
pub trait HeaderProbe {
    /// Returns `true` when `header` exists and is a regular file.
    fn header_exists(&self, header: &Path) -> bool;
}

/// [`HeaderProbe`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl HeaderProbe for FsProbe {
    fn header_exists(&self, header: &Path) -> bool {
        header.is_file()
    }
}

/// Where a candidate directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// `VISA_INCLUDE_DIR` / `include_dir`.
    Override,
    /// `search_dirs` from the configuration file.
    SearchDir,
    /// IVI `VXIPNPPATH` or `VXIPNPPATH64`.
    Vxipnp,
    /// pkg-config metadata for `visa`.
    PkgConfig,
    /// Built-in per-platform table.
    Default,
}

/// A directory that may hold the VISA header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Origin of this candidate.
    pub source: CandidateSource,
    /// Layout to use if the header is found here.
    pub layout: InstallLayout,
}

/// Include and link paths reported by pkg-config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PkgConfigHit {
    /// `-I` directories.
    pub include_paths: Vec<PathBuf>,
    /// `-L` directories.
    pub link_paths: Vec<PathBuf>,
}

/// The selected VISA install for this build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Platform the header was resolved for.
    pub platform: Platform,
    /// Which candidate won.
    pub source: CandidateSource,
    /// Directory holding the header (passed to clang as `-I`).
    pub include_dir: PathBuf,
    /// Absolute path of the selected header.
    pub header: PathBuf,
    /// Link instructions, with config overrides applied.
    pub link: LinkDirective,
}

impl Resolution {
    /// Link directives plus `cargo:include` metadata for dependents.
    pub fn cargo_instructions(&self) -> Vec<String> {
        let mut lines = self.link.cargo_instructions();
        lines.push(format!("cargo:include={}", self.include_dir.display()));
        lines
    }
}

/// Resolves the VISA header location for one platform.
#[derive(Debug, Clone)]
pub struct Resolver {
    platform: Platform,
    target_arch: String,
    config: LocateConfig,
    pkg_config: Option<PkgConfigHit>,
}

impl Resolver {
    /// Create a resolver for `platform`.
    ///
    /// The target architecture is taken from `CARGO_CFG_TARGET_ARCH` when
    /// running under Cargo, otherwise from the host.
    pub fn new(platform: Platform, config: LocateConfig) -> Self {
        let target_arch = std::env::var("CARGO_CFG_TARGET_ARCH")
            .unwrap_or_else(|_| std::env::consts::ARCH.to_string());
        Self {
            platform,
            target_arch,
            config,
            pkg_config: None,
        }
    }

    /// Override the target architecture.
    pub fn with_target_arch(mut self, target_arch: impl Into<String>) -> Self {
        self.target_arch = target_arch.into();
        self
    }

    /// Supply pkg-config results directly.
    pub fn with_pkg_config(mut self, hit: PkgConfigHit) -> Self {
        self.pkg_config = Some(hit);
        self
    }

    /// Query pkg-config for `visa` when enabled and on Linux.
    ///
    /// A missing `visa.pc` is normal (NI does not ship one) and only logged.
    pub fn probe_pkg_config(self) -> Self {
        if self.platform != Platform::Linux || !self.config.pkg_config {
            return self;
        }

        match pkg_config::Config::new()
            .cargo_metadata(false)
            .env_metadata(false)
            .probe("visa")
        {
            Ok(library) => {
                debug!(
                    include_paths = ?library.include_paths,
                    link_paths = ?library.link_paths,
                    "pkg-config found visa"
                );
                self.with_pkg_config(PkgConfigHit {
                    include_paths: library.include_paths,
                    link_paths: library.link_paths,
                })
            }
            Err(err) => {
                debug!(error = %err, "pkg-config has no visa package");
                self
            }
        }
    }

    /// Platform being resolved.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// All candidates, in the order they are probed.
    pub fn candidates(&self) -> Vec<Candidate> {
        let defaults = default_layouts(self.platform, &self.target_arch);
        let base_link = defaults
            .first()
            .map(|layout| layout.link.clone())
            .unwrap_or(LinkDirective::Dylib {
                search_dirs: Vec::new(),
                name: "visa".to_string(),
            });

        let layout_at = |include_dir: PathBuf, link: LinkDirective| InstallLayout {
            platform: self.platform,
            include_dir,
            link,
        };

        if let Some(dir) = &self.config.include_dir {
            return vec![Candidate {
                source: CandidateSource::Override,
                layout: layout_at(dir.clone(), base_link),
            }];
        }

        let mut candidates: Vec<Candidate> = self
            .config
            .search_dirs
            .iter()
            .map(|dir| Candidate {
                source: CandidateSource::SearchDir,
                layout: layout_at(dir.clone(), base_link.clone()),
            })
            .collect();

        if self.platform == Platform::Windows {
            candidates.extend(self.vxipnp_candidates());
        }

        if let Some(hit) = self.pkg_config.as_ref().filter(|_| self.platform == Platform::Linux) {
            let link = hit
                .link_paths
                .iter()
                .rev()
                .fold(base_link.clone(), |link, dir| link.with_search_dir(dir.clone()));
            candidates.extend(hit.include_paths.iter().map(|dir| Candidate {
                source: CandidateSource::PkgConfig,
                layout: layout_at(dir.clone(), link.clone()),
            }));
        }

        candidates.extend(defaults.into_iter().map(|layout| Candidate {
            source: CandidateSource::Default,
            layout,
        }));

        let mut seen: Vec<PathBuf> = Vec::new();
        candidates.retain(|c| {
            if seen.contains(&c.layout.include_dir) {
                false
            } else {
                seen.push(c.layout.include_dir.clone());
                true
            }
        });
        candidates
    }

    fn vxipnp_candidates(&self) -> Vec<Candidate> {
        let root_64 = self.config.vxipnp_path64.as_deref().map(path_str);
        let root_32 = self.config.vxipnp_path.as_deref().map(path_str);

        let link = if is_64bit(&self.target_arch) {
            windows_link(root_64.as_deref().unwrap_or(WINDOWS_VISA_ROOT_X64), &self.target_arch)
        } else {
            windows_link(root_32.as_deref().unwrap_or(WINDOWS_VISA_ROOT_X86), &self.target_arch)
        };

        let mut roots = Vec::new();
        if is_64bit(&self.target_arch) {
            if let Some(root) = &root_64 {
                roots.push(vxipnp_include_dir(root, true));
            }
        }
        if let Some(root) = &root_32 {
            roots.push(vxipnp_include_dir(root, false));
        }

        roots
            .into_iter()
            .map(|include_dir| Candidate {
                source: CandidateSource::Vxipnp,
                layout: InstallLayout {
                    platform: Platform::Windows,
                    include_dir,
                    link: link.clone(),
                },
            })
            .collect()
    }

    /// Pick the first candidate whose header exists.
    pub fn resolve(&self, probe: &dyn HeaderProbe) -> LocateResult<Resolution> {
        let mut searched = Vec::new();

        for candidate in self.candidates() {
            let header = candidate.layout.header_path();
            let found = probe.header_exists(&header);
            debug!(
                platform = %self.platform,
                source = ?candidate.source,
                header = %header.display(),
                found,
                "probing VISA header"
            );

            if found {
                let resolution = self.finish(candidate, header);
                info!(
                    platform = %resolution.platform,
                    source = ?resolution.source,
                    header = %resolution.header.display(),
                    "selected VISA header"
                );
                return Ok(resolution);
            }

            if candidate.source == CandidateSource::Override {
                return Err(LocateError::OverrideMissingHeader {
                    dir: candidate.layout.include_dir,
                    header: HEADER_NAME.to_string(),
                });
            }
            searched.push(candidate.layout.include_dir);
        }

        warn!(platform = %self.platform, searched = searched.len(), "no VISA header found");
        Err(LocateError::HeaderNotFound {
            platform: self.platform,
            header: HEADER_NAME.to_string(),
            searched,
        })
    }

    fn finish(&self, candidate: Candidate, header: PathBuf) -> Resolution {
        let mut link = candidate.layout.link;
        if let Some(dir) = &self.config.lib_dir {
            link = link.with_search_dir(dir.clone());
        }
        if let Some(name) = &self.config.lib_name {
            link = link.with_lib_name(name);
        }

        Resolution {
            platform: self.platform,
            source: candidate.source,
            include_dir: candidate.layout.include_dir,
            header,
            link,
        }
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Resolve the header for `platform` against the real filesystem.
///
/// This is what build scripts call: it loads [`LocateConfig`], consults
/// pkg-config where applicable and probes the candidates in order.
pub fn locate(platform: Platform) -> LocateResult<Resolution> {
    let config = LocateConfig::load()?;
    Resolver::new(platform, config)
        .probe_pkg_config()
        .resolve(&FsProbe)
}
