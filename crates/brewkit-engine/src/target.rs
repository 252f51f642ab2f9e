//! Per-platform build targets.
//!
//! One [`BuildTarget`] exists per requested platform per request. The target
//! stages its inputs into a private workspace, then drives the platform's
//! command sequence through a [`CommandRunner`]. Platform behavior sits
//! behind the [`Console`] trait with one implementation per supported
//! platform; dispatch is the closed enumeration in [`console_for`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use brewkit_core::{BuildConfig, BuildError, BuildResult, Platform};

use crate::assets::AssetLayout;
use crate::runner::CommandRunner;

mod cafe;
mod ctr;
mod hac;

pub use cafe::CafeConsole;
pub use ctr::CtrConsole;
pub use hac::HacConsole;

/// File name the game content archive is staged under inside a workspace.
pub const GAME_FILE_NAME: &str = "game.zip";

/// Metadata merged from the validated config for one target build.
#[derive(Debug, Clone)]
pub struct TargetMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
    pub app_version: u32,
}

impl From<&BuildConfig> for TargetMetadata {
    fn from(config: &BuildConfig) -> Self {
        Self {
            title: config.title.clone(),
            author: config.author.clone(),
            description: config.description.clone(),
            app_version: config.app_version,
        }
    }
}

/// Platform-specific build behavior: the ordered command plan plus any
/// intermediate files the plan produces.
pub trait Console: Send + Sync {
    /// The platform this console builds for.
    fn platform(&self) -> Platform;

    /// Ordered command templates run by [`BuildTarget::build`].
    fn command_templates(&self) -> &'static [&'static str];

    /// Platform-specific intermediate files inside the workspace, exposed to
    /// templates as named arguments.
    fn intermediate_args(&self, workspace: &Path, meta: &TargetMetadata) -> Vec<(String, PathBuf)> {
        let _ = (workspace, meta);
        Vec::new()
    }
}

/// Closed dispatch from platform code to console implementation.
#[must_use]
pub fn console_for(platform: Platform) -> &'static dyn Console {
    match platform {
        Platform::Ctr => &CtrConsole,
        Platform::Hac => &HacConsole,
        Platform::Cafe => &CafeConsole,
    }
}

/// A successfully built artifact for one platform.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub platform: Platform,
    /// Output archive entry name, `{title}.{extension}`.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// SHA256 of the artifact bytes, hex-encoded.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.bytes);
        hex::encode(hasher.finalize())
    }
}

/// One platform build inside its private workspace.
///
/// Owned exclusively by the orchestrator for the lifetime of one target's
/// build; the workspace directory is discarded once the request completes.
pub struct BuildTarget {
    console: &'static dyn Console,
    meta: TargetMetadata,
    workspace: PathBuf,
    game_path: Option<PathBuf>,
    icon_path: Option<PathBuf>,
    runtime_path: Option<PathBuf>,
}

impl BuildTarget {
    /// Create a target for `platform` staged inside `workspace`.
    #[must_use]
    pub fn new(platform: Platform, meta: TargetMetadata, workspace: &Path) -> Self {
        Self {
            console: console_for(platform),
            meta,
            workspace: workspace.to_path_buf(),
            game_path: None,
            icon_path: None,
            runtime_path: None,
        }
    }

    /// The platform this target builds for.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.console.platform()
    }

    /// Path the staged icon resolves to, once staged.
    #[must_use]
    pub fn icon_path(&self) -> Option<&Path> {
        self.icon_path.as_deref()
    }

    /// Path the game content was staged under, once staged.
    #[must_use]
    pub fn game_path(&self) -> Option<&Path> {
        self.game_path.as_deref()
    }

    /// Where the toolchain is expected to leave the final artifact.
    #[must_use]
    pub fn artifact_path(&self) -> PathBuf {
        self.workspace
            .join(self.platform().artifact_name(&self.meta.title))
    }

    /// Stage the game content and icon into the workspace.
    ///
    /// Custom icon bytes are written as `icon.{icon_extension}`; without
    /// them the platform's bundled default icon asset is used. Resolving a
    /// missing support asset fails with `TOOLCHAIN_ASSET_MISSING`.
    pub fn stage(
        &mut self,
        assets: &AssetLayout,
        game: &[u8],
        icon: Option<&[u8]>,
    ) -> BuildResult<()> {
        let platform = self.platform();

        let game_path = self.workspace.join(GAME_FILE_NAME);
        fs::write(&game_path, game)?;
        self.game_path = Some(game_path);

        self.icon_path = Some(match icon {
            Some(bytes) => {
                let path = self
                    .workspace
                    .join(format!("icon.{}", platform.icon_extension()));
                fs::write(&path, bytes)?;
                path
            }
            None => assets.default_icon(platform)?,
        });

        self.runtime_path = Some(assets.runtime_binary(platform, self.meta.app_version)?);

        Ok(())
    }

    /// Run the platform's command sequence and collect the final artifact.
    ///
    /// Stops at the first failing command and propagates that failure. Once
    /// every command succeeded, the expected output file must exist;
    /// otherwise the build fails with `FINAL_ARTIFACT_MISSING`.
    pub async fn build(&self, runner: &dyn CommandRunner) -> BuildResult<Artifact> {
        let args = self.command_args()?;

        for template in self.console.command_templates() {
            runner.run(template, &args, &self.workspace).await?;
        }

        let artifact_path = self.artifact_path();
        if !artifact_path.exists() {
            return Err(BuildError::FinalArtifactMissing(artifact_path));
        }

        let bytes = fs::read(&artifact_path)?;
        Ok(Artifact {
            platform: self.platform(),
            file_name: self.platform().artifact_name(&self.meta.title),
            bytes,
        })
    }

    fn command_args(&self) -> BuildResult<BTreeMap<String, String>> {
        let (game, icon, runtime) = match (&self.game_path, &self.icon_path, &self.runtime_path) {
            (Some(game), Some(icon), Some(runtime)) => (game, icon, runtime),
            _ => {
                return Err(BuildError::CommandFailed(
                    "build target was not staged".to_string(),
                ));
            }
        };

        let mut args = BTreeMap::new();
        args.insert("title".to_string(), self.meta.title.clone());
        args.insert("author".to_string(), self.meta.author.clone());
        args.insert("description".to_string(), self.meta.description.clone());
        args.insert("version".to_string(), self.meta.app_version.to_string());
        args.insert("game".to_string(), game.to_string_lossy().into_owned());
        args.insert("icon".to_string(), icon.to_string_lossy().into_owned());
        args.insert("elf".to_string(), runtime.to_string_lossy().into_owned());
        args.insert(
            "output".to_string(),
            self.artifact_path().to_string_lossy().into_owned(),
        );

        for (key, path) in self.console.intermediate_args(&self.workspace, &self.meta) {
            args.insert(key, path.to_string_lossy().into_owned());
        }

        Ok(args)
    }
}
