//! Error taxonomy for build requests.
//!
//! Every failure a request can produce maps onto one [`BuildError`] kind.
//! Each kind carries a stable code string (see [`BuildError::code`]) that
//! collaborators surface to clients and that the run log records for
//! per-target failures.

use std::path::PathBuf;

use thiserror::Error;

use crate::platform::Platform;

/// Result type alias for build operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Error type covering upload intake, manifest validation, and target builds.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No upload content was supplied at all.
    #[error("no content package was uploaded")]
    NoContentPackage,

    /// The upload is not a readable zip archive.
    #[error("uploaded content is not a zip archive")]
    ContentNotZip,

    /// The upload exceeds the configured size limit.
    #[error("uploaded content is {size} bytes, limit is {limit}")]
    ContentTooLarge { size: u64, limit: u64 },

    /// The upload does not contain a build manifest.
    #[error("no build manifest found in the uploaded package")]
    MissingManifest,

    /// The manifest text could not be decoded.
    #[error("invalid manifest data: {0}")]
    InvalidManifestData(String),

    /// The manifest schema version is older than the supported one.
    #[error("manifest schema version {found} is outdated, expected {supported}")]
    OutdatedConfig { found: String, supported: String },

    /// The manifest schema version does not match the supported one.
    #[error("manifest schema version {found} does not match supported {supported}")]
    ConfigVersionMismatch { found: String, supported: String },

    /// The requested application version is not supported.
    #[error("invalid application version specified: {0}")]
    InvalidVersionSpecified(String),

    /// The inner game content archive named by the manifest is absent.
    #[error("missing game content: {0}")]
    MissingGameContent(String),

    /// A requested target is not one of the supported platform codes.
    #[error("target is not valid: {0}")]
    TargetNotValid(String),

    /// The platform is disallowed for the requested application version.
    #[error("platform {platform} is not allowed for application version {app_version}")]
    PlatformDisallowed { platform: Platform, app_version: u32 },

    /// The access method used by the client is not permitted.
    #[error("access method not permitted: {0}")]
    MethodNotAllowed(String),

    /// A command template referenced an argument that was not provided.
    #[error("command argument not found: '{0}'")]
    CommandArgumentNotFound(String),

    /// An external command failed to execute or exited non-zero.
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// The executable named by a command template could not be located.
    #[error("command executable not found: '{0}'")]
    CommandExeNotFound(String),

    /// A toolchain support asset is missing from the installed layout.
    #[error("toolchain asset missing: {}", .0.display())]
    ToolchainAssetMissing(PathBuf),

    /// Commands reported success but the expected output file is absent.
    #[error("final artifact missing: {}", .0.display())]
    FinalArtifactMissing(PathBuf),

    /// I/O failure while staging or packaging.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive read/write failure outside of intake classification.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl BuildError {
    /// Stable code name surfaced to collaborators and recorded in run logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::NoContentPackage => "NO_CONTENT_PACKAGE",
            BuildError::ContentNotZip => "CONTENT_NON_ZIP_FILE",
            BuildError::ContentTooLarge { .. } => "CONTENT_ZIP_TOO_LARGE",
            BuildError::MissingManifest => "MISSING_CONFIG_FILE",
            BuildError::InvalidManifestData(_) => "INVALID_CONFIG_DATA",
            BuildError::OutdatedConfig { .. } => "OUTDATED_CONFIG",
            BuildError::ConfigVersionMismatch { .. } => "CONFIG_VERSION_MISMATCH",
            BuildError::InvalidVersionSpecified(_) => "INVALID_VERSION_SPECIFIED",
            BuildError::MissingGameContent(_) => "MISSING_GAME_CONTENT",
            BuildError::TargetNotValid(_) => "TARGET_NOT_VALID",
            BuildError::PlatformDisallowed { .. } => "PLATFORM_DISALLOWED",
            BuildError::MethodNotAllowed(_) => "INVALID_METHOD",
            BuildError::CommandArgumentNotFound(_) => "COMMAND_ARGUMENT_NOT_FOUND",
            BuildError::CommandFailed(_) => "COMMAND_FAILED",
            BuildError::CommandExeNotFound(_) => "COMMAND_EXE_NOT_FOUND",
            BuildError::ToolchainAssetMissing(_) => "TOOLCHAIN_ASSET_MISSING",
            BuildError::FinalArtifactMissing(_) => "FINAL_ARTIFACT_MISSING",
            BuildError::Io(_) => "IO_ERROR",
            BuildError::Archive(_) => "ARCHIVE_ERROR",
        }
    }

    /// Whether this error aborts the whole request.
    ///
    /// Fatal errors are returned to the collaborator before any target is
    /// built. Non-fatal errors are isolated to the target that produced them
    /// and recorded in the run log.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            BuildError::CommandArgumentNotFound(_)
                | BuildError::CommandFailed(_)
                | BuildError::CommandExeNotFound(_)
                | BuildError::ToolchainAssetMissing(_)
                | BuildError::FinalArtifactMissing(_)
        )
    }
}
