//! Multi-target build orchestration.

use tracing::{info, warn};

use brewkit_core::{BuildConfig, BuildResult, GameBundle, Platform};

use crate::assets::AssetLayout;
use crate::logger::BuildLog;
use crate::packager;
use crate::runner::CommandRunner;
use crate::target::{Artifact, BuildTarget, TargetMetadata};

/// Drives one build request across all requested targets.
///
/// Targets build strictly in manifest order, each inside a private temporary
/// workspace that is reclaimed when the build finishes, success or failure.
/// One target's failure never aborts the run: it is recorded in the run log
/// and the remaining targets still build.
pub struct Orchestrator<'r> {
    runner: &'r dyn CommandRunner,
    assets: AssetLayout,
}

impl<'r> Orchestrator<'r> {
    /// Create an orchestrator over a command runner and asset layout.
    pub fn new(runner: &'r dyn CommandRunner, assets: AssetLayout) -> Self {
        Self { runner, assets }
    }

    /// Build every requested target and package the results.
    ///
    /// Returns the output archive bytes: one `{title}.{extension}` entry per
    /// successful target, in manifest order, plus exactly one `debug.log`
    /// entry with the run's diagnostic lines.
    pub async fn run(&self, config: &BuildConfig, bundle: &GameBundle) -> BuildResult<Vec<u8>> {
        let mut log = BuildLog::new();
        let mut entries: Vec<(String, Vec<u8>)> = Vec::new();

        for &platform in &config.targets {
            info!(platform = %platform, title = %config.title, "building target");

            match self.build_target(platform, config, bundle).await {
                Ok(artifact) => {
                    info!(
                        platform = %platform,
                        file = %artifact.file_name,
                        size = artifact.bytes.len(),
                        digest = %artifact.digest(),
                        "target built"
                    );
                    entries.push((artifact.file_name, artifact.bytes));
                }
                Err(err) => {
                    warn!(platform = %platform, code = err.code(), "target build failed");
                    log.crit(format!("{}: {}", err.code(), err));
                }
            }
        }

        packager::write_archive(&entries, &log)
    }

    async fn build_target(
        &self,
        platform: Platform,
        config: &BuildConfig,
        bundle: &GameBundle,
    ) -> BuildResult<Artifact> {
        // Workspace is reclaimed when the TempDir drops, on every path out.
        let workspace = tempfile::tempdir()?;

        let mut target = BuildTarget::new(platform, TargetMetadata::from(config), workspace.path());
        target.stage(&self.assets, &bundle.game, bundle.icon(platform))?;
        target.build(self.runner).await
    }
}
