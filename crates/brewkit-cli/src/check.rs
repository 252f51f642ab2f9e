//! Check command implementation

use std::path::Path;

use anyhow::{Context, Result};

use brewkit_core::{BuildConfig, BuildError, UploadArchive};

/// Run the check command: validate an upload zip or a bare manifest file.
pub fn run(path: &Path) -> Result<()> {
    println!("Checking: {}", path.display());

    let manifest_text = if path.extension().is_some_and(|ext| ext == "toml") {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?
    } else {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read upload: {}", path.display()))?;
        manifest_from_upload(bytes).map_err(|err| anyhow::anyhow!("{}: {err}", err.code()))?
    };

    let config = match BuildConfig::parse(&manifest_text) {
        Ok(config) => config,
        Err(err) => anyhow::bail!("{}: {err}", err.code()),
    };

    println!("✓ Title: {}", config.title);
    println!("✓ App version: {}", config.app_version);
    println!(
        "✓ Targets: {}",
        config
            .targets
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("✓ Custom icons: {}", config.icons.len());
    println!("\nManifest is valid!");

    Ok(())
}

fn manifest_from_upload(bytes: Vec<u8>) -> Result<String, BuildError> {
    let mut upload = UploadArchive::open(bytes)?;
    upload.manifest_text()
}
