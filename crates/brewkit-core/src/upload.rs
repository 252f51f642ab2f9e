//! Uploaded package intake.
//!
//! An upload is a single zip archive containing the build manifest, the inner
//! game content archive named by it, and any referenced icon files. Intake
//! classifies the ways an upload can be unusable before the engine sees it;
//! every failure here is fatal to the request.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use tracing::debug;
use zip::ZipArchive;

use crate::error::{BuildError, BuildResult};
use crate::manifest::{BuildConfig, MANIFEST_FILE};
use crate::platform::Platform;

/// Default upload size limit (32 MiB), matching the public service setting.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 0x0200_0000;

/// Game bundle extracted from an upload: the inner content archive plus any
/// per-platform icon bytes the manifest referenced. Immutable for the
/// duration of one request.
#[derive(Debug, Clone)]
pub struct GameBundle {
    /// Raw bytes of the inner game content archive.
    pub game: Vec<u8>,
    /// Icon bytes keyed by platform, present only when the manifest named an
    /// icon file that exists in the upload.
    pub icons: BTreeMap<Platform, Vec<u8>>,
}

impl GameBundle {
    /// Icon bytes for one platform, if the upload carried them.
    #[must_use]
    pub fn icon(&self, platform: Platform) -> Option<&[u8]> {
        self.icons.get(&platform).map(Vec::as_slice)
    }
}

/// An opened upload archive.
#[derive(Debug)]
pub struct UploadArchive {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl UploadArchive {
    /// Open an upload with the default size limit.
    pub fn open(bytes: Vec<u8>) -> BuildResult<Self> {
        Self::open_with_limit(bytes, DEFAULT_MAX_UPLOAD_BYTES)
    }

    /// Open an upload, classifying empty, oversized, and non-zip content.
    pub fn open_with_limit(bytes: Vec<u8>, max_bytes: u64) -> BuildResult<Self> {
        if bytes.is_empty() {
            return Err(BuildError::NoContentPackage);
        }

        let size = bytes.len() as u64;
        if size > max_bytes {
            return Err(BuildError::ContentTooLarge {
                size,
                limit: max_bytes,
            });
        }

        let archive =
            ZipArchive::new(Cursor::new(bytes)).map_err(|_| BuildError::ContentNotZip)?;

        Ok(Self { archive })
    }

    /// Read the manifest text from the upload.
    pub fn manifest_text(&mut self) -> BuildResult<String> {
        let bytes = self.read_entry(MANIFEST_FILE, || BuildError::MissingManifest)?;

        String::from_utf8(bytes)
            .map_err(|_| BuildError::InvalidManifestData("manifest is not valid UTF-8".to_string()))
    }

    /// Extract the game bundle the validated config describes.
    ///
    /// Fails with `MISSING_GAME_CONTENT` when `<source>.zip` is absent. Icon
    /// references that do not resolve inside the upload are skipped; the
    /// engine falls back to the platform's default icon for those targets.
    pub fn game_bundle(&mut self, config: &BuildConfig) -> BuildResult<GameBundle> {
        let game_name = config.game_archive_name();
        let game = self.read_entry(&game_name, || BuildError::MissingGameContent(game_name.clone()))?;

        let mut icons = BTreeMap::new();
        for (&platform, path) in &config.icons {
            let normalized = normalize_icon_path(path);
            match self.try_read_entry(&normalized)? {
                Some(bytes) => {
                    icons.insert(platform, bytes);
                }
                None => {
                    debug!(platform = %platform, path = %normalized, "icon reference not found in upload");
                }
            }
        }

        Ok(GameBundle { game, icons })
    }

    fn read_entry(
        &mut self,
        name: &str,
        missing: impl FnOnce() -> BuildError,
    ) -> BuildResult<Vec<u8>> {
        self.try_read_entry(name)?.ok_or_else(missing)
    }

    fn try_read_entry(&mut self, name: &str) -> BuildResult<Option<Vec<u8>>> {
        let mut entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(_) => return Ok(None),
        };

        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }
}

/// Icon references are POSIX-style relative paths inside the upload; tolerate
/// Windows-authored manifests by normalizing separators.
fn normalize_icon_path(path: &str) -> String {
    path.replace('\\', "/")
}
