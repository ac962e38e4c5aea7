//! Playback loop: delay, clear, rasterize, repeat.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::{debug, trace};

use crate::render::{render_frame, CLEANUP, CLEAR_SCREEN};
use crate::{Animation, LoopMode, PlaybackConfig};

/// Source of the per-frame wait.
///
/// The binary sleeps on the current thread; tests substitute a clock that
/// only records the requested delays.
pub trait Clock {
    /// Block for `delay`.
    fn sleep(&self, delay: Duration);
}

/// Clock backed by [`std::thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&self, delay: Duration) {
        thread::sleep(delay);
    }
}

/// Drives an [`Animation`] to a terminal-like writer.
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use halfblock_anim::{parse_animation, Animator, LoopMode, PlaybackConfig, ThreadClock};
///
/// let animation = parse_animation(b"[[[1, 2]], [[3]]]").unwrap();
/// let config = PlaybackConfig::new(Duration::ZERO, 0, LoopMode::Once);
///
/// let mut out = Vec::new();
/// Animator::new(&config, ThreadClock).play(&animation, &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.ends_with("\x1b[?25h"));
/// ```
#[derive(Debug)]
pub struct Animator<'a, C: Clock> {
    config: &'a PlaybackConfig,
    clock: C,
}

impl<'a, C: Clock> Animator<'a, C> {
    /// Create an animator for the given configuration.
    pub fn new(config: &'a PlaybackConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Play the animation, then restore the terminal.
    ///
    /// Frames are drawn strictly in order, each one preceded by the
    /// configured delay and a screen clear. In [`LoopMode::Loop`] the same
    /// in-memory animation is replayed forever and this only returns on a
    /// write error; an empty animation then spins without drawing.
    pub fn play<W: Write>(&self, animation: &Animation, out: &mut W) -> io::Result<()> {
        let render_config = self.config.render_config();
        let mut pass: u64 = 0;

        loop {
            if !animation.is_empty() {
                debug!("playback pass {pass}: {} frames", animation.frame_count());
            }

            for (index, frame) in animation.frames().iter().enumerate() {
                self.clock.sleep(self.config.frame_delay);
                trace!("frame {index}: {} rows", frame.row_count());

                out.write_all(CLEAR_SCREEN.as_bytes())?;
                render_frame(frame, &render_config).write_to(out)?;
                out.flush()?;
            }

            if self.config.loop_mode == LoopMode::Once {
                break;
            }
            pass = pass.wrapping_add(1);
        }

        write_cleanup(out)
    }
}

/// Write the terminal restore sequence and flush.
pub fn write_cleanup<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEANUP.as_bytes())?;
    out.flush()
}
