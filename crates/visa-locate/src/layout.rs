//! Platform → install layout table.
//!
//! Each supported platform maps to an ordered list of known install layouts.
//! The first entry is the location every VISA vendor's installer has
//! historically used on that OS; later entries cover other vendors and
//! 64-bit SDK trees. Windows paths are assembled as strings with `\` so the
//! table reads the same regardless of the host doing the cross-compile.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::platform::Platform;

/// File name of the VISA interface-definition header.
pub const HEADER_NAME: &str = "visa.h";

/// 32-bit IVI Foundation VISA root on Windows.
pub const WINDOWS_VISA_ROOT_X86: &str = r"C:\Program Files (x86)\IVI Foundation\VISA";
/// 64-bit IVI Foundation VISA root on Windows.
pub const WINDOWS_VISA_ROOT_X64: &str = r"C:\Program Files\IVI Foundation\VISA";
/// Headers directory of the system-wide VISA framework on macOS.
pub const MACOS_FRAMEWORK_HEADERS: &str = "/Library/Frameworks/VISA.framework/Headers";
/// Directory containing `VISA.framework` on macOS.
pub const MACOS_FRAMEWORKS_DIR: &str = "/Library/Frameworks";
/// System include directory on Linux.
pub const LINUX_INCLUDE_DIR: &str = "/usr/include";

/// How the VISA library is linked once the header is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LinkDirective {
    /// Link an Apple framework.
    Framework {
        /// Directory containing `<name>.framework`.
        search_dir: PathBuf,
        /// Framework name.
        name: String,
    },
    /// Link a shared library from one of several search directories.
    Dylib {
        /// Native search directories, in priority order.
        search_dirs: Vec<PathBuf>,
        /// Library name without prefix/extension.
        name: String,
    },
}

impl LinkDirective {
    /// Cargo build-script instructions for this directive.
    pub fn cargo_instructions(&self) -> Vec<String> {
        match self {
            LinkDirective::Framework { search_dir, name } => vec![
                format!("cargo:rustc-link-search=framework={}", search_dir.display()),
                format!("cargo:rustc-link-lib=framework={name}"),
            ],
            LinkDirective::Dylib { search_dirs, name } => {
                let mut lines: Vec<String> = search_dirs
                    .iter()
                    .map(|dir| format!("cargo:rustc-link-search=native={}", dir.display()))
                    .collect();
                lines.push(format!("cargo:rustc-link-lib=dylib={name}"));
                lines
            }
        }
    }

    /// Replace the library name (dylib only; frameworks keep theirs).
    pub fn with_lib_name(self, lib_name: &str) -> Self {
        match self {
            LinkDirective::Dylib { search_dirs, .. } => LinkDirective::Dylib {
                search_dirs,
                name: lib_name.to_string(),
            },
            framework => framework,
        }
    }

    /// Put `dir` in front of the search path.
    pub fn with_search_dir(self, dir: PathBuf) -> Self {
        match self {
            LinkDirective::Dylib {
                mut search_dirs,
                name,
            } => {
                search_dirs.retain(|d| d != &dir);
                search_dirs.insert(0, dir);
                LinkDirective::Dylib { search_dirs, name }
            }
            LinkDirective::Framework { name, .. } => LinkDirective::Framework {
                search_dir: dir,
                name,
            },
        }
    }
}

/// A directory expected to hold `visa.h`, plus how to link the matching library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallLayout {
    /// Platform this layout belongs to.
    pub platform: Platform,
    /// Directory expected to contain [`HEADER_NAME`].
    pub include_dir: PathBuf,
    /// Link instructions for the library shipped alongside the header.
    pub link: LinkDirective,
}

impl InstallLayout {
    /// Full path of the header inside [`InstallLayout::include_dir`].
    pub fn header_path(&self) -> PathBuf {
        header_path(self.platform, &self.include_dir)
    }
}

/// Join [`HEADER_NAME`] onto `dir` using the platform's separator.
pub fn header_path(platform: Platform, dir: &Path) -> PathBuf {
    match platform {
        Platform::Windows => {
            let dir = dir.to_string_lossy();
            PathBuf::from(format!(
                "{}\\{}",
                dir.trim_end_matches(['\\', '/']),
                HEADER_NAME
            ))
        }
        Platform::MacOs | Platform::Linux => dir.join(HEADER_NAME),
    }
}

/// Whether `target_arch` is a 64-bit Windows target.
pub fn is_64bit(target_arch: &str) -> bool {
    matches!(target_arch, "x86_64" | "aarch64")
}

fn win_path(root: &str, parts: &[&str]) -> PathBuf {
    let mut path = root.trim_end_matches(['\\', '/']).to_string();
    for part in parts {
        path.push('\\');
        path.push_str(part);
    }
    PathBuf::from(path)
}

/// Import-library link directive for a Windows VISA root and target width.
pub fn windows_link(root: &str, target_arch: &str) -> LinkDirective {
    if is_64bit(target_arch) {
        LinkDirective::Dylib {
            search_dirs: vec![win_path(root, &["Win64", "Lib_x64", "msc"])],
            name: "visa64".to_string(),
        }
    } else {
        LinkDirective::Dylib {
            search_dirs: vec![
                win_path(root, &["WinNT", "lib", "msc"]),
                win_path(root, &["WinNT", "Bin"]),
            ],
            name: "visa32".to_string(),
        }
    }
}

/// Include directory under an IVI `VXIPNPPATH`/`VXIPNPPATH64` root.
///
/// `wide` selects the `Win64` subtree used by `VXIPNPPATH64`.
pub fn vxipnp_include_dir(root: &str, wide: bool) -> PathBuf {
    if wide {
        win_path(root, &["Win64", "Include"])
    } else {
        win_path(root, &["WinNT", "Include"])
    }
}

/// Built-in layouts for `platform`, in priority order.
pub fn default_layouts(platform: Platform, target_arch: &str) -> Vec<InstallLayout> {
    match platform {
        Platform::Windows => {
            // Headers are arch-independent; the import library is not.
            let link_root = if is_64bit(target_arch) {
                WINDOWS_VISA_ROOT_X64
            } else {
                WINDOWS_VISA_ROOT_X86
            };
            vec![
                InstallLayout {
                    platform,
                    include_dir: win_path(WINDOWS_VISA_ROOT_X86, &["WinNT", "Include"]),
                    link: windows_link(link_root, target_arch),
                },
                InstallLayout {
                    platform,
                    include_dir: win_path(WINDOWS_VISA_ROOT_X64, &["Win64", "Include"]),
                    link: windows_link(link_root, target_arch),
                },
            ]
        }
        Platform::MacOs => vec![InstallLayout {
            platform,
            include_dir: PathBuf::from(MACOS_FRAMEWORK_HEADERS),
            link: LinkDirective::Framework {
                search_dir: PathBuf::from(MACOS_FRAMEWORKS_DIR),
                name: "VISA".to_string(),
            },
        }],
        Platform::Linux => {
            let link = LinkDirective::Dylib {
                search_dirs: linux_lib_dirs(target_arch),
                name: "visa".to_string(),
            };
            [LINUX_INCLUDE_DIR, "/usr/include/ni-visa", "/usr/local/include"]
                .into_iter()
                .map(|dir| InstallLayout {
                    platform,
                    include_dir: PathBuf::from(dir),
                    link: link.clone(),
                })
                .collect()
        }
    }
}

fn linux_lib_dirs(target_arch: &str) -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("/usr/lib")];
    if !target_arch.is_empty() {
        dirs.push(PathBuf::from(format!("/usr/lib/{target_arch}-linux-gnu")));
    }
    dirs.push(PathBuf::from("/usr/lib64"));
    dirs.push(PathBuf::from("/usr/local/lib"));
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_layout_is_historical_default() {
        let windows = default_layouts(Platform::Windows, "x86_64");
        assert_eq!(
            windows[0].header_path(),
            PathBuf::from(r"C:\Program Files (x86)\IVI Foundation\VISA\WinNT\Include\visa.h")
        );

        let macos = default_layouts(Platform::MacOs, "aarch64");
        assert_eq!(
            macos[0].header_path(),
            PathBuf::from("/Library/Frameworks/VISA.framework/Headers/visa.h")
        );

        let linux = default_layouts(Platform::Linux, "x86_64");
        assert_eq!(linux[0].header_path(), PathBuf::from("/usr/include/visa.h"));
    }

    #[test]
    fn every_platform_has_a_layout() {
        for platform in Platform::PRIORITY {
            let layouts = default_layouts(platform, "x86_64");
            assert!(!layouts.is_empty(), "{platform} has no layouts");
            assert!(layouts.iter().all(|l| l.platform == platform));
        }
    }

    #[test]
    fn windows_link_follows_target_width() {
        let x64 = &default_layouts(Platform::Windows, "x86_64")[0].link;
        assert_eq!(
            x64.cargo_instructions(),
            vec![
                r"cargo:rustc-link-search=native=C:\Program Files\IVI Foundation\VISA\Win64\Lib_x64\msc"
                    .to_string(),
                "cargo:rustc-link-lib=dylib=visa64".to_string(),
            ]
        );

        let x86 = &default_layouts(Platform::Windows, "x86")[0].link;
        let lines = x86.cargo_instructions();
        assert_eq!(lines.last().map(String::as_str), Some("cargo:rustc-link-lib=dylib=visa32"));
        assert!(lines[0].contains(r"(x86)\IVI Foundation\VISA\WinNT\lib\msc"));
    }

    #[test]
    fn macos_links_the_framework() {
        let link = &default_layouts(Platform::MacOs, "aarch64")[0].link;
        assert_eq!(
            link.cargo_instructions(),
            vec![
                "cargo:rustc-link-search=framework=/Library/Frameworks".to_string(),
                "cargo:rustc-link-lib=framework=VISA".to_string(),
            ]
        );
    }

    #[test]
    fn linux_searches_multiarch_dir() {
        let link = &default_layouts(Platform::Linux, "aarch64")[0].link;
        let lines = link.cargo_instructions();
        assert!(lines.contains(&"cargo:rustc-link-search=native=/usr/lib/aarch64-linux-gnu".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("cargo:rustc-link-lib=dylib=visa"));
    }

    #[test]
    fn vxipnp_root_trailing_separator_is_ignored() {
        let dir = vxipnp_include_dir(r"D:\VISA\", false);
        assert_eq!(dir, PathBuf::from(r"D:\VISA\WinNT\Include"));
        assert_eq!(
            header_path(Platform::Windows, &dir),
            PathBuf::from(r"D:\VISA\WinNT\Include\visa.h")
        );

        let wide = vxipnp_include_dir(r"D:\VISA", true);
        assert_eq!(wide, PathBuf::from(r"D:\VISA\Win64\Include"));
    }

    #[test]
    fn link_overrides() {
        let link = LinkDirective::Dylib {
            search_dirs: vec![PathBuf::from("/usr/lib"), PathBuf::from("/opt/visa/lib")],
            name: "visa".to_string(),
        }
        .with_search_dir(PathBuf::from("/opt/visa/lib"))
        .with_lib_name("rsvisa");

        assert_eq!(
            link,
            LinkDirective::Dylib {
                search_dirs: vec![PathBuf::from("/opt/visa/lib"), PathBuf::from("/usr/lib")],
                name: "rsvisa".to_string(),
            }
        );

        let framework = LinkDirective::Framework {
            search_dir: PathBuf::from(MACOS_FRAMEWORKS_DIR),
            name: "VISA".to_string(),
        }
        .with_lib_name("ignored");
        assert!(matches!(framework, LinkDirective::Framework { ref name, .. } if name == "VISA"));
    }
}
