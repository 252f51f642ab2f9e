//! Handheld console (3DS family) build plan.
//!
//! Two steps: bake title metadata and the icon into an SMDH blob, then link
//! the runtime ELF and the game content into the final `.3dsx`.

use std::path::{Path, PathBuf};

use brewkit_core::Platform;

use super::{Console, TargetMetadata};

pub struct CtrConsole;

impl Console for CtrConsole {
    fn platform(&self) -> Platform {
        Platform::Ctr
    }

    fn command_templates(&self) -> &'static [&'static str] {
        &[
            r#"smdhtool --create "{title}" "{description}" "{author}" "{icon}" "{smdh}""#,
            r#"3dsxtool "{elf}" "{output}" --smdh="{smdh}" --romfs="{game}""#,
        ]
    }

    fn intermediate_args(&self, workspace: &Path, meta: &TargetMetadata) -> Vec<(String, PathBuf)> {
        vec![(
            "smdh".to_string(),
            workspace.join(format!("{}.smdh", meta.title)),
        )]
    }
}
