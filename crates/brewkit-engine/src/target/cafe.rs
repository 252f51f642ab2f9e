//! Living-room console (Wii U) build plan.
//!
//! A single step: `wuhbtool` packages the runtime binary, game content, and
//! icon into the final `.wuhb`.

use brewkit_core::Platform;

use super::Console;

pub struct CafeConsole;

impl Console for CafeConsole {
    fn platform(&self) -> Platform {
        Platform::Cafe
    }

    fn command_templates(&self) -> &'static [&'static str] {
        &[
            r#"wuhbtool "{elf}" "{output}" --content="{game}" --name="{title}" --short-name="{title}" --icon="{icon}""#,
        ]
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use std::path::Path;

    use super::super::TargetMetadata;
    use super::*;

    #[test]
    fn CafeConsole___plan___is_a_single_package_step() {
        let templates = CafeConsole.command_templates();

        assert_eq!(templates.len(), 1);
        assert!(templates[0].starts_with("wuhbtool"));
    }

    #[test]
    fn CafeConsole___intermediate_args___none_needed() {
        let meta = TargetMetadata {
            title: "Game".to_string(),
            author: String::new(),
            description: String::new(),
            app_version: 2,
        };

        assert!(CafeConsole.intermediate_args(Path::new("/ws"), &meta).is_empty());
    }
}
