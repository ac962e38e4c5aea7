//! Playback configuration.

use std::time::Duration;

use crate::render::RenderConfig;

/// Default delay before each frame, in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 100;

/// Default palette index for missing or invalid pixels.
pub const DEFAULT_BACKGROUND: u8 = 0;

/// Loop mode for animation playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    /// Stop after the last frame
    #[default]
    Once,
    /// Restart from the first frame forever
    Loop,
}

impl LoopMode {
    /// Map the "infinite" switch to a loop mode.
    pub fn from_infinite(infinite: bool) -> Self {
        if infinite {
            LoopMode::Loop
        } else {
            LoopMode::Once
        }
    }
}

/// Settings shared by the whole playback, fixed at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Wait applied before drawing each frame
    pub frame_delay: Duration,
    /// Palette index substituted for missing or invalid pixels
    pub background: u8,
    pub loop_mode: LoopMode,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(DEFAULT_FRAME_DELAY_MS),
            background: DEFAULT_BACKGROUND,
            loop_mode: LoopMode::Once,
        }
    }
}

impl PlaybackConfig {
    /// Create a new playback config.
    pub fn new(frame_delay: Duration, background: u8, loop_mode: LoopMode) -> Self {
        Self {
            frame_delay,
            background,
            loop_mode,
        }
    }

    /// Render settings derived from this config.
    #[inline]
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.background)
    }
}
