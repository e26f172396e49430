//! Build script for visa-sys FFI bindings.
//!
//! The target platform decides where the VISA header lives. This script:
//!
//! 1. Rejects any target other than Windows, macOS or Linux with an
//!    `Unsupported platform` error, regardless of features.
//! 2. With the `visa-sdk` feature (on by default): resolves the header through `visa-locate`,
//!    includes it via a generated wrapper, runs bindgen and emits the link
//!    directives for the matching VISA library. A missing header is fatal.
//! 3. With `--no-default-features`: includes nothing; `src/fallback.rs` provides the
//!    declarations so the workspace builds on machines without VISA.

use anyhow::Result;
use visa_locate::{
    config::{self, TRACKED_ENV_VARS},
    logging, Platform,
};

fn main() -> Result<()> {
    let _ = logging::init_build_logging();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", logging::LOG_ENV);
    for var in TRACKED_ENV_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
    if let Some(path) = config::config_file() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let platform = Platform::from_cargo_env()?;
    println!("cargo:rustc-env=VISA_SYS_PLATFORM={}", platform.identifier());

    #[cfg(feature = "visa-sdk")]
    generate_bindings(platform)?;

    #[cfg(not(feature = "visa-sdk"))]
    tracing::info!(%platform, "visa-sdk feature disabled, using fallback declarations");

    Ok(())
}

#[cfg(feature = "visa-sdk")]
fn generate_bindings(platform: Platform) -> Result<()> {
    use anyhow::Context;
    use std::env;
    use std::path::PathBuf;
    use visa_locate::LinkDirective;

    let resolution = visa_locate::locate(platform)?;

    let out_path = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR is not set")?);
    let wrapper = visa_locate::write_wrapper(&out_path, &resolution)?;

    println!("cargo:rerun-if-changed={}", resolution.header.display());
    println!("cargo:rustc-env=VISA_SYS_HEADER={}", resolution.header.display());

    let mut builder = bindgen::Builder::default()
        .header(wrapper.to_string_lossy())
        .clang_arg(format!("-I{}", resolution.include_dir.display()));

    // visa.h pulls in visatype.h relative to the framework on macOS
    if let LinkDirective::Framework { search_dir, .. } = &resolution.link {
        builder = builder.clang_arg(format!("-F{}", search_dir.display()));
    }

    let bindings = builder
        // VISA functions, types and constants
        .allowlist_function("vi.*")
        .allowlist_type("Vi.*")
        .allowlist_var("VI_.*")
        .derive_debug(true)
        .derive_default(true)
        .derive_copy(true)
        .generate_comments(true)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .generate()
        .context("Unable to generate VISA bindings")?;

    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .context("Couldn't write VISA bindings")?;

    for line in resolution.cargo_instructions() {
        println!("{line}");
    }

    Ok(())
}
