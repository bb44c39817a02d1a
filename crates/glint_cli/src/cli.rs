use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scene and render settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Mirror and glass spheres, one centred sample, gamma 2.2
    Classic,
    /// Mirror sphere, 16 jittered samples, linear output
    Supersampled,
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A Whitted-style sphere ray tracer")]
pub struct Args {
    /// Scene file (JSON); overrides --preset
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Built-in scene used when no scene file is given
    #[arg(long, value_enum, default_value = "classic")]
    pub preset: Preset,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Jitter samples inside each pixel
    #[arg(long, conflicts_with = "no_jitter")]
    pub jitter: bool,

    /// Trace every sample through the pixel centre
    #[arg(long)]
    pub no_jitter: bool,

    /// Gamma applied before export
    #[arg(long, conflicts_with = "no_gamma")]
    pub gamma: Option<f32>,

    /// Export linear values without gamma correction
    #[arg(long)]
    pub no_gamma: bool,

    /// Add the ambient term on lit surfaces as well as shadowed ones
    #[arg(long, conflicts_with = "shadow_ambient_only")]
    pub ambient_always: bool,

    /// Apply the ambient term only in shadow
    #[arg(long)]
    pub shadow_ambient_only: bool,

    /// Maximum number of bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for sample jitter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render buckets in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Print the resolved scene and settings as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}
