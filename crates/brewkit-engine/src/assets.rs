//! Installed toolchain support assets.
//!
//! Each platform keeps its support files under `{root}/{platform_code}/`:
//! the bundled default icon and the SDK-produced runtime binary, named by a
//! version-templated pattern. Resolving a path that does not exist is a hard
//! failure reported with the missing path, distinct from command failures.

use std::path::{Path, PathBuf};

use brewkit_core::{BuildError, BuildResult, Platform};

/// Root directory of the per-platform toolchain support assets.
#[derive(Debug, Clone)]
pub struct AssetLayout {
    root: PathBuf,
}

impl AssetLayout {
    /// Create a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an item inside a platform's asset directory.
    pub fn resolve(&self, platform: Platform, item: &str) -> BuildResult<PathBuf> {
        let path = self.root.join(platform.as_str()).join(item);
        if !path.exists() {
            return Err(BuildError::ToolchainAssetMissing(path));
        }
        Ok(path)
    }

    /// The bundled default icon for a platform.
    pub fn default_icon(&self, platform: Platform) -> BuildResult<PathBuf> {
        self.resolve(platform, &format!("icon.{}", platform.icon_extension()))
    }

    /// The runtime binary the external SDK produced for `app_version`.
    pub fn runtime_binary(&self, platform: Platform, app_version: u32) -> BuildResult<PathBuf> {
        self.resolve(platform, &format!("lovepotion_v{app_version}.elf"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn layout_with(entries: &[(&str, &[u8])]) -> (AssetLayout, TempDir) {
        let dir = TempDir::new().unwrap();
        for (name, bytes) in entries {
            let path = dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, bytes).unwrap();
        }
        (AssetLayout::new(dir.path()), dir)
    }

    #[test]
    fn AssetLayout___resolve___existing_asset___returns_path() {
        let (layout, _dir) = layout_with(&[("ctr/icon.png", b"default icon")]);

        let path = layout.default_icon(Platform::Ctr).unwrap();

        assert_eq!(fs::read(path).unwrap(), b"default icon");
    }

    #[test]
    fn AssetLayout___resolve___missing_asset___reports_path() {
        let (layout, _dir) = layout_with(&[]);

        let err = layout.default_icon(Platform::Cafe).unwrap_err();

        assert_eq!(err.code(), "TOOLCHAIN_ASSET_MISSING");
        assert!(err.to_string().contains("cafe"));
        assert!(err.to_string().contains("icon.png"));
    }

    #[test]
    fn AssetLayout___runtime_binary___is_version_templated() {
        let (layout, _dir) = layout_with(&[("hac/lovepotion_v2.elf", b"elf")]);

        assert!(layout.runtime_binary(Platform::Hac, 2).is_ok());
        let err = layout.runtime_binary(Platform::Hac, 3).unwrap_err();
        assert!(err.to_string().contains("lovepotion_v3.elf"));
    }
}
