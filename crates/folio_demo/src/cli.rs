use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
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
#[derive(Parser, Debug)]
#[command(name = "folio_demo")]
#[command(about = "Render the folio sphere showcase")]
pub struct Args {
    /// JSON scene file (defaults to the built-in four-sphere scene)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Override the image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Write the full render as PNG
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["folio_demo"]);
        assert!(args.scene.is_none());
        assert!(args.output.is_none());
        assert!(matches!(args.log_level, LogLevel::Info));
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "folio_demo",
            "--scene",
            "demos/scene.json",
            "--width",
            "320",
            "--height",
            "240",
            "-o",
            "out.png",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.scene, Some(PathBuf::from("demos/scene.json")));
        assert_eq!(args.width, Some(320));
        assert_eq!(args.height, Some(240));
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
