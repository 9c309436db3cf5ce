//! scribe3d - An in-scene 3D text editor overlay
//!
//! Main executable: mounts one editor and drives it from a window or a script

mod window;

use anyhow::{Context, Result};
use clap::Parser;
use scribe3d::{EditorConfig, SavedTexts, ScriptPlayer};
use scribe3d_core::DropdownPolicy;
use scribe3d_ui3d::EditorOverlay;
use std::{io, path::PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "In-scene 3D text editor", long_about = None)]
struct Args {
    /// Editor configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replay a JSON script instead of opening a window
    #[arg(long)]
    script: Option<PathBuf>,

    /// Initial text, overriding the configuration
    #[arg(long)]
    initial: Option<String>,

    /// Maximum buffer length in characters
    #[arg(long)]
    max_chars: Option<usize>,

    /// Opening one dropdown closes the other
    #[arg(long)]
    exclusive_dropdowns: bool,

    /// Print saved texts as JSON lines on exit
    #[arg(long)]
    print_saved: bool,

    /// Write the resolved configuration (file plus flags) to a TOML file and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting scribe3d v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = resolve_config(&args);
    let print_saved = args.print_saved;

    if let Some(path) = &args.write_config {
        config
            .save_to_path(path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        info!("Wrote editor config to {}", path.display());
        return Ok(());
    }

    let overlay = EditorOverlay::mount(
        Some(config.scene_context()),
        config.initial_text.clone(),
        config.session_options(),
    )
    .context("editor overlay could not be mounted")?;

    match args.script {
        Some(path) => {
            let player = ScriptPlayer::from_path(&path)?;
            let mut overlay = overlay;
            let mut saved = SavedTexts::new();
            player
                .run(&mut overlay, &mut saved)
                .with_context(|| format!("script {} failed", path.display()))?;
            info!(
                steps = player.steps().len(),
                handled = overlay.router().handled_count(),
                passthrough = overlay.router().passthrough_count(),
                "script finished"
            );
            if print_saved {
                saved.write_json_lines(io::stdout().lock())?;
            }
        }
        None => window::run(overlay, config.camera.fov_degrees, print_saved)?,
    }

    Ok(())
}

fn resolve_config(args: &Args) -> EditorConfig {
    let mut config = match &args.config {
        Some(path) => EditorConfig::load_from_path(path),
        None => EditorConfig::load(),
    };
    if let Some(initial) = &args.initial {
        config.initial_text = initial.clone();
    }
    if let Some(max_chars) = args.max_chars {
        config.max_chars = Some(max_chars);
    }
    if args.exclusive_dropdowns {
        config.dropdown_policy = DropdownPolicy::Exclusive;
    }
    config
}
