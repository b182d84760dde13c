//! Carousel - Entry Point
//!
//! Replays scroll input through the engine and prints one JSON object per
//! column for the resulting frame.

use carousel::carousel::{AssetMap, RotationMode};
use carousel::model::{ColumnIndex, ColumnTransform};
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Carousel - compute column placements for a rotating perspective carousel
#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(version)]
#[command(about = "Compute column transforms for a rotating perspective carousel")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rotation mode
    #[arg(long, value_enum)]
    pub mode: Option<RotationMode>,

    /// Number of columns on the ring (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: Option<u32>,

    /// Length of one content loop in scroll units
    #[arg(long)]
    pub period: Option<f64>,

    /// Scroll delta to apply; repeat for several deltas
    #[arg(short, long, allow_negative_numbers = true)]
    pub scroll: Vec<f64>,

    /// Aim the scroll target at this column (1-based)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub jump: Option<u32>,

    /// Number of smoothing frames to run after input
    #[arg(short, long, default_value = "0")]
    pub frames: u32,

    /// Frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f64,

    /// Asset handle for the next column; repeat for several columns
    #[arg(short, long)]
    pub asset: Vec<String>,

    /// Only print columns inside the visible arc
    #[arg(long)]
    pub visible_only: bool,
}

/// One output line.
#[derive(Debug, Serialize)]
struct ColumnRecord<'a> {
    #[serde(flatten)]
    transform: ColumnTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    asset: Option<&'a str>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = carousel::config::load_config_with_precedence(args.config.clone())?;
        let merged = carousel::config::merge_config(config_file);
        let with_env = carousel::config::apply_env_overrides(merged);

        let columns_override = args.columns.map(|c| c as usize);

        carousel::config::apply_cli_overrides(with_env, args.mode, columns_override, args.period)
    };

    carousel::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let mut controller = config.build_controller()?;

    for delta in &args.scroll {
        controller.on_scroll(*delta)?;
    }

    if let Some(column) = args.jump {
        controller.jump_to_column(ColumnIndex::new(column as usize - 1))?;
    }

    for _ in 0..args.frames {
        controller.tick(args.dt)?;
    }

    info!(
        state = ?controller.scroll_state(),
        rotation_deg = ?controller.rotation_deg(),
        "Frame computed"
    );

    let assets: AssetMap<String> = args.asset.into_iter().collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (transform, asset) in controller.column_transforms_with(&assets) {
        if args.visible_only && !transform.visible {
            continue;
        }
        let record = ColumnRecord {
            transform,
            asset: asset.map(String::as_str),
        };
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
    }

    Ok(())
}
