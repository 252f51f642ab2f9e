//! Build command implementation

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use brewkit_core::{BuildConfig, BuildResult, UploadArchive};
use brewkit_engine::{AssetLayout, Orchestrator, ProcessRunner};

/// Run the build command
pub async fn run(upload: &Path, out: &Path, assets: &Path, timeout_secs: u64) -> Result<()> {
    println!("Building package: {}", upload.display());

    let bytes = std::fs::read(upload)
        .with_context(|| format!("Failed to read upload: {}", upload.display()))?;

    let archive = match build_archive(bytes, assets, timeout_secs).await {
        Ok(archive) => archive,
        Err(err) => anyhow::bail!("{}: {err}", err.code()),
    };

    std::fs::write(out, &archive)
        .with_context(|| format!("Failed to write output archive: {}", out.display()))?;

    println!("\n✓ Build complete!");
    println!("Output: {} ({} bytes)", out.display(), archive.len());

    Ok(())
}

async fn build_archive(bytes: Vec<u8>, assets: &Path, timeout_secs: u64) -> BuildResult<Vec<u8>> {
    let mut upload = UploadArchive::open(bytes)?;
    let config = BuildConfig::parse(&upload.manifest_text()?)?;
    let bundle = upload.game_bundle(&config)?;

    println!(
        "Title: {} (app version {}, {} target(s))",
        config.title,
        config.app_version,
        config.targets.len()
    );

    let runner = ProcessRunner::with_timeout(Duration::from_secs(timeout_secs));
    let orchestrator = Orchestrator::new(&runner, AssetLayout::new(assets));
    orchestrator.run(&config, &bundle).await
}
