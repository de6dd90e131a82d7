use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ratatui::style::Color;

use crate::animation::Motion;
use crate::figure::chain::NODES;

// ─── Figure Constants ───────────────────────────────────────────────────

/// Node gap divided by this gives the arm length.
pub const SIZE_FACTOR: f32 = 2.9;

/// Arm length divided by this gives a square's half extent.
pub const SQUARE_FACTOR: f32 = 4.5;

/// Delay between two animation frames.
pub const FRAME_DELAY: Duration = Duration::from_millis(20);

/// #673AB7
pub const FOREGROUND: Color = Color::Rgb(0x67, 0x3A, 0xB7);

/// #BDBDBD
pub const BACKGROUND: Color = Color::Rgb(0xBD, 0xBD, 0xBD);

// ─── CLI Arguments ──────────────────────────────────────────────────────

/// Tap to fold a chain of squares, one node at a time
#[derive(Parser, Debug, Clone)]
#[command(name = "squaretriup", version, about, long_about = None)]
pub struct CliArgs {
    /// Log file path (logging disabled if not specified)
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Log level filter, e.g. "debug" or "squaretriup=trace"
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

// ─── Config ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: FOREGROUND,
            background: BACKGROUND,
        }
    }
}

/// Everything the figure needs, fixed for the lifetime of the program.
#[derive(Debug, Clone)]
pub struct Config {
    pub nodes: usize,
    pub motion: Motion,
    pub size_factor: f32,
    pub square_factor: f32,
    pub frame_delay: Duration,
    pub palette: Palette,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nodes: NODES,
            motion: Motion::default(),
            size_factor: SIZE_FACTOR,
            square_factor: SQUARE_FACTOR,
            frame_delay: FRAME_DELAY,
            palette: Palette::default(),
            log_file: None,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Fixed figure constants with the logging options from the command line.
    pub fn from_cli(cli: &CliArgs) -> Self {
        Self {
            log_file: cli.log.clone(),
            log_level: cli.log_level.clone(),
            ..Default::default()
        }
    }
}
