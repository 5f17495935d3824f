use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
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

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "A Whitted-style ray tracer")]
pub struct Args {
    /// Scene file (JSON). Uses the built-in scene when omitted.
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Intensity applied to every light
    #[arg(short, long, default_value_t = 100.0)]
    pub intensity: f32,

    /// Specular (Blinn-Phong) power
    #[arg(short, long, default_value_t = 40.0)]
    pub power: f32,

    /// Ambient fraction of each surface's diffuse color
    #[arg(long, default_value_t = 0.25)]
    pub ambient: f32,

    /// Bucket edge length for parallel rendering
    #[arg(long, default_value_t = 64)]
    pub bucket_size: u32,

    /// Render on the calling thread in row-major order
    #[arg(long)]
    pub sequential: bool,

    /// Print the resolved scene as JSON and exit
    #[arg(long)]
    pub print_scene: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lumen"]);
        assert!(args.scene.is_none());
        assert_eq!(args.output, PathBuf::from("render.png"));
        assert_eq!((args.width, args.height), (1200, 800));
        assert_eq!(args.intensity, 100.0);
        assert_eq!(args.power, 40.0);
        assert_eq!(args.ambient, 0.25);
        assert!(!args.sequential);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "lumen",
            "--scene",
            "scenes/default.json",
            "-o",
            "out/frame.png",
            "--width",
            "320",
            "--height",
            "200",
            "-i",
            "150",
            "-p",
            "8",
            "--sequential",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.scene, Some(PathBuf::from("scenes/default.json")));
        assert_eq!(args.output, PathBuf::from("out/frame.png"));
        assert_eq!((args.width, args.height), (320, 200));
        assert_eq!(args.intensity, 150.0);
        assert_eq!(args.power, 8.0);
        assert!(args.sequential);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
