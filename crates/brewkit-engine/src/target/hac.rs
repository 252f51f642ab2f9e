//! Hybrid console (Switch) build plan.
//!
//! Two steps: write the NACP control record, then convert the runtime ELF
//! into the final `.nro` with icon, control data, and game content attached.

use std::path::{Path, PathBuf};

use brewkit_core::Platform;

use super::{Console, TargetMetadata};

pub struct HacConsole;

impl Console for HacConsole {
    fn platform(&self) -> Platform {
        Platform::Hac
    }

    fn command_templates(&self) -> &'static [&'static str] {
        &[
            r#"nacptool --create "{title}" "{author}" "{version}" "{nacp}""#,
            r#"elf2nro "{elf}" "{output}" --icon="{icon}" --nacp="{nacp}" --romfs="{game}""#,
        ]
    }

    fn intermediate_args(&self, workspace: &Path, meta: &TargetMetadata) -> Vec<(String, PathBuf)> {
        vec![(
            "nacp".to_string(),
            workspace.join(format!("{}.nacp", meta.title)),
        )]
    }
}
