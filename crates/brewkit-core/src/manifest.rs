//! Build manifest decoding and validation.
//!
//! The manifest (`brewkit.toml`) ships inside the uploaded package and names
//! the game title, the inner content archive, and the target platforms to
//! build for. Decoding produces a [`BuildConfig`]: every field is validated
//! here, before any target build starts, so downstream code never touches a
//! raw mapping.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::{BuildError, BuildResult};
use crate::platform::Platform;

/// Manifest file name inside the uploaded package.
pub const MANIFEST_FILE: &str = "brewkit.toml";

/// Manifest schema version this engine supports. Exact match required.
pub const SUPPORTED_CONFIG_VERSION: &str = "0.8.0";

/// The single application version current toolchains can package.
pub const SUPPORTED_APP_VERSION: u32 = 2;

#[derive(Debug, Deserialize)]
struct RawManifest {
    debug: DebugSection,
    metadata: MetadataSection,
    build: BuildSection,
}

#[derive(Debug, Deserialize)]
struct DebugSection {
    version: String,
}

#[derive(Debug, Deserialize)]
struct MetadataSection {
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icons: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct BuildSection {
    source: String,
    app_version: RawAppVersion,
    targets: Vec<String>,
}

/// The manifest historically accepted both `app_version = 2` and
/// `app_version = "2"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAppVersion {
    Number(i64),
    Text(String),
}

/// Optional validation rules beyond the fixed schema checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// (platform, app_version) pairs rejected during validation.
    pub disallow: Vec<(Platform, u32)>,
}

/// Validated build configuration, constructed once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Manifest schema version (already verified to match the supported one).
    pub config_version: String,
    /// Game title, used for output file names.
    pub title: String,
    /// Author shown by platform metadata tools. May be empty.
    pub author: String,
    /// Short description shown by platform metadata tools. May be empty.
    pub description: String,
    /// Application version the runtime binaries are selected by.
    pub app_version: u32,
    /// Base name of the inner game content archive.
    pub source: String,
    /// Requested target platforms, in manifest order.
    pub targets: Vec<Platform>,
    /// Per-platform icon references (POSIX-style paths inside the upload).
    pub icons: BTreeMap<Platform, String>,
}

impl BuildConfig {
    /// Decode and validate manifest text with default options.
    pub fn parse(text: &str) -> BuildResult<Self> {
        Self::parse_with(text, &ValidationOptions::default())
    }

    /// Decode and validate manifest text.
    ///
    /// Fails with `INVALID_CONFIG_DATA` on malformed TOML, with
    /// `OUTDATED_CONFIG`/`CONFIG_VERSION_MISMATCH` on a schema version other
    /// than [`SUPPORTED_CONFIG_VERSION`], with `INVALID_VERSION_SPECIFIED`
    /// on an unsupported app version, and with `TARGET_NOT_VALID` on an
    /// unknown platform code. All failures here are fatal to the request.
    pub fn parse_with(text: &str, options: &ValidationOptions) -> BuildResult<Self> {
        let raw: RawManifest = toml::from_str(text)
            .map_err(|err| BuildError::InvalidManifestData(err.to_string()))?;

        check_config_version(&raw.debug.version)?;
        let app_version = check_app_version(&raw.build.app_version)?;

        let mut targets = Vec::with_capacity(raw.build.targets.len());
        for code in &raw.build.targets {
            let platform = Platform::parse(code)
                .ok_or_else(|| BuildError::TargetNotValid(code.clone()))?;

            if options.disallow.contains(&(platform, app_version)) {
                return Err(BuildError::PlatformDisallowed {
                    platform,
                    app_version,
                });
            }

            targets.push(platform);
        }

        let mut icons = BTreeMap::new();
        for (code, path) in raw.metadata.icons {
            if path.is_empty() {
                continue;
            }
            match Platform::parse(&code) {
                Some(platform) => {
                    icons.insert(platform, path);
                }
                None => debug!(code = %code, "ignoring icon for unknown platform"),
            }
        }

        Ok(Self {
            config_version: raw.debug.version,
            title: raw.metadata.title,
            author: raw.metadata.author,
            description: raw.metadata.description,
            app_version,
            source: raw.build.source,
            targets,
            icons,
        })
    }

    /// Name of the inner game content archive inside the upload.
    #[must_use]
    pub fn game_archive_name(&self) -> String {
        format!("{}.zip", self.source)
    }
}

fn check_config_version(found: &str) -> BuildResult<()> {
    if found == SUPPORTED_CONFIG_VERSION {
        return Ok(());
    }

    let mismatch = || BuildError::ConfigVersionMismatch {
        found: found.to_string(),
        supported: SUPPORTED_CONFIG_VERSION.to_string(),
    };

    let found_parts = parse_version_triple(found).ok_or_else(mismatch)?;
    let supported_parts = match parse_version_triple(SUPPORTED_CONFIG_VERSION) {
        Some(parts) => parts,
        None => return Err(mismatch()),
    };

    if found_parts < supported_parts {
        Err(BuildError::OutdatedConfig {
            found: found.to_string(),
            supported: SUPPORTED_CONFIG_VERSION.to_string(),
        })
    } else {
        Err(mismatch())
    }
}

fn check_app_version(raw: &RawAppVersion) -> BuildResult<u32> {
    let value = match raw {
        RawAppVersion::Number(n) => *n,
        RawAppVersion::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| BuildError::InvalidVersionSpecified(s.clone()))?,
    };

    if value == i64::from(SUPPORTED_APP_VERSION) {
        Ok(SUPPORTED_APP_VERSION)
    } else {
        Err(BuildError::InvalidVersionSpecified(value.to_string()))
    }
}

fn parse_version_triple(version: &str) -> Option<(u64, u64, u64)> {
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

#[cfg(test)]
#[path = "manifest/manifest_tests.rs"]
mod manifest_tests;
