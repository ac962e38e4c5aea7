//! Command-line arguments.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use halfblock_anim::config::{DEFAULT_BACKGROUND, DEFAULT_FRAME_DELAY_MS};
use halfblock_anim::{LoopMode, PlaybackConfig};

/// CLI arguments for the player
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "halfblock")]
#[command(version)]
#[command(about = "Play a palette-indexed pixel animation in the terminal", long_about = None)]
pub struct CliArgs {
    /// Time between frames in milliseconds
    #[arg(
        short = 'f',
        long = "frame-time",
        visible_alias = "f",
        value_name = "MS",
        default_value_t = DEFAULT_FRAME_DELAY_MS
    )]
    pub frame_time: u64,

    /// Background color (256-color palette index) for invalid or missing pixels
    #[arg(long = "bg", value_name = "INDEX", default_value_t = DEFAULT_BACKGROUND)]
    pub background: u8,

    /// Infinite loop
    #[arg(short = 'i', long = "infinite", visible_alias = "i")]
    pub infinite: bool,

    /// Animation file: a JSON array of frames of rows of palette indices
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl CliArgs {
    /// Parse process arguments, accepting the single-dash `-bg` spelling.
    pub fn parse_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Build the playback configuration for these arguments.
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig::new(
            Duration::from_millis(self.frame_time),
            self.background,
            LoopMode::from_infinite(self.infinite),
        )
    }
}

/// Rewrite Go-style flag spellings into forms clap understands.
///
/// - `-bg` and `-bg=N` become `--bg` and `--bg=N`; clap only knows
///   single-character short flags, so `-bg` would otherwise be read as `-b -g`
/// - `-i=BOOL` (also `--i=BOOL`, `--infinite=BOOL`) becomes `-i` when true and
///   is dropped when false; unparseable values are passed through for clap
///   to reject
///
/// Nothing after a `--` separator is touched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut seen_separator = false;
    args.into_iter()
        .filter_map(|arg| {
            if seen_separator {
                return Some(arg);
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    seen_separator = true;
                    None
                }
                Some(s) if s == "-bg" || s.starts_with("-bg=") => {
                    Some(Some(OsString::from(format!("-{s}"))))
                }
                Some(s) => infinite_value(s).map(|on| on.then(|| OsString::from("-i"))),
                None => None,
            };
            rewritten.unwrap_or(Some(arg))
        })
        .collect()
}

/// Value of an `-i=BOOL` style argument, if `arg` is one with a valid boolean.
fn infinite_value(arg: &str) -> Option<bool> {
    let (flag, value) = arg.split_once('=')?;
    if !matches!(flag, "-i" | "--i" | "--infinite") {
        return None;
    }
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
