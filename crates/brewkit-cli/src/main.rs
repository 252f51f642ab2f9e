//! brewkit CLI - homebrew package builder
//!
//! Commands:
//! - `brewkit build` - Build an uploaded package into platform artifacts
//! - `brewkit check` - Validate an upload or a bare manifest
//! - `brewkit new` - Create a new game project skeleton
//! - `brewkit platforms` - List supported target platforms

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod build;
mod check;
mod new;
mod platforms;

#[derive(Parser)]
#[command(name = "brewkit")]
#[command(author, version, about = "Build homebrew game packages for console platforms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an uploaded package into platform artifacts
    Build {
        /// Path to the uploaded package (zip with manifest and game content)
        upload: PathBuf,

        /// Output archive path
        #[arg(short, long, default_value = "build.zip")]
        out: PathBuf,

        /// Toolchain asset root directory
        #[arg(short, long, default_value = "assets")]
        assets: PathBuf,

        /// Per-command timeout in seconds
        #[arg(long, default_value_t = 300)]
        timeout: u64,
    },

    /// Validate an uploaded package or a bare manifest file
    Check {
        /// Path to an upload zip or a manifest .toml
        path: PathBuf,
    },

    /// Create a new game project skeleton
    New {
        /// Project name (used as the game title)
        name: String,

        /// Project directory (default: ./<name>)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// List supported target platforms
    Platforms,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            upload,
            out,
            assets,
            timeout,
        } => build::run(&upload, &out, &assets, timeout).await,
        Commands::Check { path } => check::run(&path),
        Commands::New { name, path } => new::run(&name, path),
        Commands::Platforms => {
            platforms::run();
            Ok(())
        }
    }
}
