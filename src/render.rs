//! Half-block rasterization of frames into ANSI escape sequences.
//!
//! Each terminal line carries two pixel rows: the lower half-block glyph is
//! drawn with the top pixel as background color and the bottom pixel as
//! foreground color.

use std::fmt::Write as _;
use std::io;

use crate::{resolve_palette_index, Frame, Row};

/// Reset attributes, home the cursor, clear the screen and hide the cursor.
///
/// Written before every frame.
pub const CLEAR_SCREEN: &str = "\x1b[0m\x1b[H\x1b[2J\x1b[?25l";

/// Reset attributes, home the cursor, clear the screen and show the cursor.
///
/// Written once playback ends, whether naturally or on interrupt.
pub const CLEANUP: &str = "\x1b[0m\x1b[H\x1b[2J\x1b[?25h";

/// Lower half block (U+2584).
pub const HALF_BLOCK: char = '\u{2584}';

/// Configuration for rendering a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Palette index used for missing or invalid pixels
    pub background: u8,
}

impl RenderConfig {
    /// Create a new render config with the given default background.
    pub fn new(background: u8) -> Self {
        Self { background }
    }
}

/// One terminal cell: two stacked pixels, already resolved to palette indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Upper pixel, drawn as the cell background
    pub top: u8,
    /// Lower pixel, drawn as the glyph foreground
    pub bottom: u8,
}

impl Cell {
    /// Append the escape sequence and glyph for this cell.
    pub fn write_escape(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "\x1b[0m\x1b[48;5;{};38;5;{}m{}",
            self.top, self.bottom, HALF_BLOCK
        );
    }
}

/// Two vertically adjacent rows folded into one terminal line.
#[derive(Clone, Copy, Debug)]
pub struct RowPair<'a> {
    /// Even-indexed row
    pub top: &'a Row,
    /// The row right below, absent for the last row of an odd-height frame
    pub bottom: Option<&'a Row>,
}

impl<'a> RowPair<'a> {
    /// Line width in cells: the longer of the two rows.
    pub fn width(&self) -> usize {
        self.top.len().max(self.bottom.map_or(0, Row::len))
    }

    /// Resolve every column of this pair.
    ///
    /// Top and bottom colors degrade to `background` independently, column
    /// by column.
    pub fn cells(&self, background: u8) -> impl Iterator<Item = Cell> + 'a {
        let top = self.top;
        let bottom = self.bottom;
        (0..self.width()).map(move |col| Cell {
            top: resolve_palette_index(top.get(col), background),
            bottom: resolve_palette_index(bottom.and_then(|row| row.get(col)), background),
        })
    }
}

/// Iterate a frame's rows two at a time.
///
/// A frame with `n` rows yields `ceil(n / 2)` pairs; odd rows only ever
/// appear as the bottom of a pair.
pub fn row_pairs(frame: &Frame) -> impl Iterator<Item = RowPair<'_>> {
    frame.rows().chunks(2).map(|pair| RowPair {
        top: &pair[0],
        bottom: pair.get(1),
    })
}

/// Render a single row pair to a line of escape sequences (no newline).
pub fn render_line(pair: &RowPair<'_>, background: u8) -> String {
    // Each cell is at most 27 bytes.
    let mut line = String::with_capacity(pair.width() * 27);
    for cell in pair.cells(background) {
        cell.write_escape(&mut line);
    }
    line
}

/// The rendered lines of one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// One entry per row pair, top to bottom, without newlines
    pub lines: Vec<String>,
}

impl RenderResult {
    /// Write every line followed by a newline.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Rasterize a frame.
///
/// ## Example
///
/// ```rust
/// use halfblock_anim::{parse_animation, render::{render_frame, RenderConfig}};
///
/// let animation = parse_animation(b"[[[0, 255], [7], [9]]]").unwrap();
/// let result = render_frame(&animation.frames()[0], &RenderConfig::new(0));
///
/// // Rows (0, 1) share the first line, row 2 is paired with nothing.
/// assert_eq!(result.lines.len(), 2);
/// assert!(result.lines[0].starts_with("\x1b[0m\x1b[48;5;0;38;5;7m"));
/// ```
pub fn render_frame(frame: &Frame, config: &RenderConfig) -> RenderResult {
    let lines = row_pairs(frame)
        .map(|pair| render_line(&pair, config.background))
        .collect();
    RenderResult { lines }
}
