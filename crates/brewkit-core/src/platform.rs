//! Target platform identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported console platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Handheld console (3DS family).
    Ctr,
    /// Hybrid console (Switch).
    Hac,
    /// Living-room console (Wii U).
    Cafe,
}

impl Platform {
    /// Get the platform code string (e.g., "ctr").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ctr => "ctr",
            Self::Hac => "hac",
            Self::Cafe => "cafe",
        }
    }

    /// Parse a platform from its code string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ctr" => Some(Self::Ctr),
            "hac" => Some(Self::Hac),
            "cafe" => Some(Self::Cafe),
            _ => None,
        }
    }

    /// Get the icon file extension expected by this platform's toolchain.
    #[must_use]
    pub fn icon_extension(&self) -> &'static str {
        match self {
            Self::Ctr => "png",
            Self::Hac => "jpg",
            Self::Cafe => "png",
        }
    }

    /// Get the packaged binary extension for this platform.
    ///
    /// # Example
    ///
    /// ```
    /// use brewkit_core::Platform;
    ///
    /// assert_eq!(Platform::Ctr.binary_extension(), "3dsx");
    /// assert_eq!(Platform::Hac.binary_extension(), "nro");
    /// ```
    #[must_use]
    pub fn binary_extension(&self) -> &'static str {
        match self {
            Self::Ctr => "3dsx",
            Self::Hac => "nro",
            Self::Cafe => "wuhb",
        }
    }

    /// Format the output file name for a given title.
    #[must_use]
    pub fn artifact_name(&self, title: &str) -> String {
        format!("{}.{}", title, self.binary_extension())
    }

    /// Get all supported platforms.
    #[must_use]
    pub fn all() -> &'static [Platform] {
        &[Self::Ctr, Self::Hac, Self::Cafe]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn Platform___parse___accepts_valid_codes() {
        assert_eq!(Platform::parse("ctr"), Some(Platform::Ctr));
        assert_eq!(Platform::parse("hac"), Some(Platform::Hac));
        assert_eq!(Platform::parse("cafe"), Some(Platform::Cafe));
    }

    #[test]
    fn Platform___parse___returns_none_for_invalid() {
        assert_eq!(Platform::parse("wii"), None);
        assert_eq!(Platform::parse(""), None);
        assert_eq!(Platform::parse("CTR"), None);
        assert_eq!(Platform::parse(" ctr"), None);
    }

    #[test]
    fn Platform___roundtrip___as_str_then_parse() {
        for &platform in Platform::all() {
            assert_eq!(Platform::parse(platform.as_str()), Some(platform));
        }
    }

    #[test]
    fn Platform___extensions___match_fixed_table() {
        assert_eq!(Platform::Ctr.binary_extension(), "3dsx");
        assert_eq!(Platform::Hac.binary_extension(), "nro");
        assert_eq!(Platform::Cafe.binary_extension(), "wuhb");

        assert_eq!(Platform::Ctr.icon_extension(), "png");
        assert_eq!(Platform::Hac.icon_extension(), "jpg");
        assert_eq!(Platform::Cafe.icon_extension(), "png");
    }

    #[test]
    fn Platform___artifact_name___joins_title_and_extension() {
        assert_eq!(Platform::Hac.artifact_name("SuperGame"), "SuperGame.nro");
    }

    #[test]
    fn Platform___all___returns_three_platforms() {
        assert_eq!(Platform::all().len(), 3);
    }
}
