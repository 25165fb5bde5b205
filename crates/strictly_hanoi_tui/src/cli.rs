//! Command-line interface for strictly_hanoi.

use clap::Parser;
use std::path::PathBuf;
use strictly_hanoi::BackgroundClick;

/// Strictly Hanoi - move the tower from peg 1 to peg 3
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Three-peg disk-transfer puzzle for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of disks (1-10)
    #[arg(short, long)]
    pub disks: Option<u8>,

    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "strictly_hanoi.toml")]
    pub config: PathBuf,

    /// Disable the terminal bell
    #[arg(long)]
    pub mute: bool,

    /// What a click outside every peg does to a selection (keep or cancel)
    #[arg(long)]
    pub background_click: Option<BackgroundClick>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
