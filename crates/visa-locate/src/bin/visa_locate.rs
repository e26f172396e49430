//! Print which VISA header a build would use.
//!
//! Runs the same discovery as the `visa-sys` build script, against the real
//! filesystem, and reports the winner (or the full search list on failure).
//!
//! ```text
//! visa-locate                      # host platform, human readable
//! visa-locate --candidates         # list every candidate in probe order
//! visa-locate --target-os windows --target-arch x86 --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use visa_locate::{logging, FsProbe, HeaderProbe, LocateConfig, Platform, Resolver};

#[derive(Parser, Debug)]
#[command(name = "visa-locate", about = "Locate the VISA header and library for a target")]
struct Cli {
    /// Target OS identifier (defaults to the host).
    #[arg(long)]
    target_os: Option<String>,

    /// Target architecture (defaults to the host).
    #[arg(long)]
    target_arch: Option<String>,

    /// List every candidate directory instead of resolving.
    #[arg(long)]
    candidates: bool,

    /// Emit JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let _ = logging::init_build_logging();
    let cli = Cli::parse();

    let platform = match &cli.target_os {
        Some(os) => Platform::from_target_os(os)?,
        None => Platform::current()?,
    };
    let config = LocateConfig::load().context("loading VISA configuration")?;
    debug!(?config, "loaded configuration");

    let mut resolver = Resolver::new(platform, config).probe_pkg_config();
    if let Some(arch) = &cli.target_arch {
        resolver = resolver.with_target_arch(arch.as_str());
    }

    if cli.candidates {
        let candidates = resolver.candidates();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        } else {
            for candidate in &candidates {
                let header = candidate.layout.header_path();
                let mark = if FsProbe.header_exists(&header) { "found" } else { "-" };
                println!("{:<6} {:<11} {}", mark, format!("{:?}", candidate.source), header.display());
            }
        }
        return Ok(());
    }

    let resolution = resolver.resolve(&FsProbe)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("platform: {}", resolution.platform);
        println!("source:   {:?}", resolution.source);
        println!("header:   {}", resolution.header.display());
        for line in resolution.cargo_instructions() {
            println!("  {line}");
        }
    }
    Ok(())
}
