//! The build takes exactly one platform branch, and it agrees with `visa-locate`.

use visa_locate::Platform;

#[test]
fn exactly_one_branch_is_taken() {
    let branches: Vec<&str> = Platform::PRIORITY
        .iter()
        .map(|p| p.identifier())
        .filter(|id| *id == visa_sys::SELECTED_PLATFORM)
        .collect();
    assert_eq!(branches.len(), 1, "selected {:?}", visa_sys::SELECTED_PLATFORM);
}

#[test]
fn build_branch_matches_host_resolution() -> anyhow::Result<()> {
    let host = Platform::current()?;
    assert_eq!(host.identifier(), visa_sys::SELECTED_PLATFORM);
    Ok(())
}

#[cfg(feature = "visa-sdk")]
#[test]
fn bindings_come_from_an_existing_header() {
    let header = visa_sys::SELECTED_HEADER.unwrap_or_default();
    assert!(
        std::path::Path::new(header).is_file(),
        "bindings generated from missing header {header:?}"
    );
}

#[cfg(feature = "visa-sdk")]
#[test]
fn header_is_selected_when_bindings_are_generated() {
    assert!(
        visa_sys::SELECTED_HEADER.is_some(),
        "bindings generated for {} without a selected header",
        visa_sys::SELECTED_PLATFORM
    );
}

#[test]
fn plain_build_requires_the_header() -> anyhow::Result<()> {
    use figment::providers::{Format, Toml};

    let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
    let defaults: Vec<String> = figment::Figment::from(Toml::file(manifest))
        .extract_inner("features.default")?;
    assert!(
        defaults.iter().any(|feature| feature == "visa-sdk"),
        "default features {defaults:?} skip header discovery"
    );
    Ok(())
}
