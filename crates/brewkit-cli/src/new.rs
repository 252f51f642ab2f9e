//! New project command implementation
//!
//! Generates a starter game project: a build manifest plus a `game/`
//! directory ready to be zipped and uploaded.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

mod templates {
    pub const MANIFEST: &str = include_str!("../templates/brewkit.toml.tmpl");
    pub const MAIN_LUA: &str = include_str!("../templates/main.lua.tmpl");
}

/// Run the new command
pub fn run(name: &str, path: Option<PathBuf>) -> Result<()> {
    let project_dir = path.unwrap_or_else(|| PathBuf::from(name));

    if project_dir.exists() {
        anyhow::bail!("Directory already exists: {}", project_dir.display());
    }

    println!("Creating project: {}", project_dir.display());

    let game_dir = project_dir.join("game");
    fs::create_dir_all(&game_dir)
        .with_context(|| format!("Failed to create {}", game_dir.display()))?;

    fs::write(
        project_dir.join("brewkit.toml"),
        templates::MANIFEST.replace("{name}", name),
    )
    .context("Failed to write brewkit.toml")?;

    fs::write(
        game_dir.join("main.lua"),
        templates::MAIN_LUA.replace("{name}", name),
    )
    .context("Failed to write game/main.lua")?;

    println!("\n✓ Project created!");
    println!("Next steps:");
    println!("  1. Put your game sources under {}", game_dir.display());
    println!("  2. Zip the game directory as game.zip next to brewkit.toml");
    println!("  3. Zip both and run: brewkit build <project>.zip");

    Ok(())
}
