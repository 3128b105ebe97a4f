// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quick fivego demo - headless scripted game
//!
//! Black builds a diagonal while White answers beside it, until Black
//! completes five in a row.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use fivego_core::{BoardConfig, Color, RuleSet};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quick_demo", about = "Play a scripted five-in-a-row game")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = 7)]
    size: usize,

    /// Move-execution rules: freestyle or capture
    #[arg(long, default_value = "freestyle")]
    rules: RuleSet,

    /// JSON board config; overrides --size and --rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final board state as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => BoardConfig::load_from_file(path)?,
        None => BoardConfig {
            size: args.size,
            rules: args.rules,
        },
    };
    if config.size < 5 {
        bail!("the demo needs a board of at least 5x5, got {}", config.size);
    }

    let mut board = config.build()?;
    info!(size = board.size(), rules = ?board.rules(), "starting demo game");

    for i in 1..=5 {
        for (color, row, col) in [(Color::Black, i, i), (Color::White, i, i + 1)] {
            if col > board.size() || board.winner().is_some() {
                continue;
            }
            let point = board.pt(row, col);
            let legal = board.play_move(point, color);
            info!(?color, row, col, legal, "move");
        }
    }

    println!("{}", board);
    match board.winner() {
        Some(color) => info!(?color, "game won"),
        None => info!("no winner"),
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    }
    Ok(())
}
