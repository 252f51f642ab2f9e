//! brewkit-engine - Multi-target build orchestration
//!
//! This crate turns a validated [`BuildConfig`](brewkit_core::BuildConfig)
//! and a [`GameBundle`](brewkit_core::GameBundle) into a single output
//! archive by driving external cross-compilation toolchains:
//!
//! - [`CommandRunner`] / [`ProcessRunner`] - templated external command
//!   execution with structured failure classification
//! - [`Console`] + [`BuildTarget`] - per-platform staging and build plans
//! - [`Orchestrator`] - per-target isolation and result packaging
//! - [`BuildLog`] - run-scoped diagnostics that become `debug.log`
//! - [`AssetLayout`] - installed toolchain support files
//!
//! # Example
//!
//! ```no_run
//! use brewkit_core::{BuildConfig, GameBundle, UploadArchive};
//! use brewkit_engine::{AssetLayout, Orchestrator, ProcessRunner};
//!
//! # async fn build(upload_bytes: Vec<u8>) -> brewkit_core::BuildResult<Vec<u8>> {
//! let mut upload = UploadArchive::open(upload_bytes)?;
//! let config = BuildConfig::parse(&upload.manifest_text()?)?;
//! let bundle = upload.game_bundle(&config)?;
//!
//! let runner = ProcessRunner::new();
//! let orchestrator = Orchestrator::new(&runner, AssetLayout::new("/opt/brewkit/assets"));
//! orchestrator.run(&config, &bundle).await
//! # }
//! ```

mod assets;
mod logger;
mod orchestrator;
mod packager;
mod runner;
mod target;

#[cfg(test)]
mod testing;

pub use assets::AssetLayout;
pub use logger::BuildLog;
pub use orchestrator::Orchestrator;
pub use packager::{LOG_FILE_NAME, write_archive};
pub use runner::{CommandRunner, DEFAULT_COMMAND_TIMEOUT, ProcessRunner, substitute, tokenize};
pub use target::{
    Artifact, BuildTarget, CafeConsole, Console, CtrConsole, GAME_FILE_NAME, HacConsole,
    TargetMetadata, console_for,
};
