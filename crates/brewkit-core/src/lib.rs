//! brewkit-core - Data model and validation for the brewkit build service
//!
//! This crate owns everything a build request is made of before the engine
//! runs it:
//! - [`Platform`] - the closed set of supported console targets
//! - [`BuildError`] - the full request error taxonomy with stable code names
//! - [`BuildConfig`] - the validated build manifest
//! - [`UploadArchive`] / [`GameBundle`] - uploaded package intake
//!
//! The engine crate (`brewkit-engine`) consumes these types; no I/O against
//! external toolchains happens here.

mod error;
mod manifest;
mod platform;
mod upload;

pub use error::{BuildError, BuildResult};
pub use manifest::{
    BuildConfig, MANIFEST_FILE, SUPPORTED_APP_VERSION, SUPPORTED_CONFIG_VERSION, ValidationOptions,
};
pub use platform::Platform;
pub use upload::{DEFAULT_MAX_UPLOAD_BYTES, GameBundle, UploadArchive};
