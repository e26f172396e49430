//! Generated wrapper header fed to bindgen.
//!
//! The wrapper includes the resolved header by absolute path, so the choice
//! made by the resolver is the only one clang can see. It is include-guarded;
//! the vendor `visa.h` carries its own guard as well.

use std::path::{Path, PathBuf};

use crate::error::LocateResult;
use crate::resolve::Resolution;

/// File name of the wrapper written into `OUT_DIR`.
pub const WRAPPER_NAME: &str = "visa_wrapper.h";

/// Include guard macro of the wrapper.
pub const WRAPPER_GUARD: &str = "VISA_SYS_WRAPPER_H";

/// Render the wrapper header for a resolution.
pub fn render_wrapper(resolution: &Resolution) -> String {
    format!(
        "/* Generated by visa-locate for {platform}; do not edit. */\n\
         #ifndef {guard}\n\
         #define {guard}\n\
         #include \"{header}\"\n\
         #endif /* {guard} */\n",
        platform = resolution.platform,
        guard = WRAPPER_GUARD,
        header = include_path(&resolution.header),
    )
}

/// Write the wrapper into `out_dir` and return its path.
pub fn write_wrapper(out_dir: &Path, resolution: &Resolution) -> LocateResult<PathBuf> {
    let path = out_dir.join(WRAPPER_NAME);
    std::fs::write(&path, render_wrapper(resolution))?;
    Ok(path)
}

// Backslashes in a quoted header-name have implementation-defined meaning;
// clang on Windows accepts `/` separators, so use those.
fn include_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
