//! # halfblock-anim
//!
//! Terminal playback for palette-indexed pixel animations.
//!
//! An animation is a JSON document of frames, each frame a list of rows,
//! each row a list of xterm 256-color palette indices. Two pixel rows are
//! folded into one terminal line with the lower half-block glyph `▄`, drawn
//! with the upper pixel as background and the lower pixel as foreground.
//!
//! This crate provides:
//! - Strict decoding of the `[frame][row][pixel]` document
//! - Palette index resolution with a configurable fallback color
//! - Half-block rasterization to ANSI escape sequences
//! - A playback loop with a fixed per-frame delay and optional looping
//! - SIGINT handling that restores the terminal before exiting (unix)
//!
//! ## Example
//!
//! ```rust,no_run
//! use halfblock_anim::{load_animation, Animator, PlaybackConfig, ThreadClock};
//!
//! let animation = load_animation("anim.json")?;
//! let config = PlaybackConfig::default();
//! Animator::new(&config, ThreadClock).play(&animation, &mut std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod animation;
mod color;
pub mod config;
mod data;
#[cfg(unix)]
pub mod interrupt;
mod loader;
mod parser;
pub mod render;

pub use animation::{write_cleanup, Animator, Clock, ThreadClock};
pub use color::{resolve_palette_index, PALETTE_SIZE};
pub use config::{LoopMode, PlaybackConfig};
pub use data::{Animation, Frame, Pixel, Row};
pub use loader::{load_animation, LoadError, LoadResult};
pub use parser::{parse_animation, ParseError};
pub use render::{render_frame, RenderConfig, RenderResult};
