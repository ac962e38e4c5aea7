//! Core data structures for palette-indexed animations.

use serde::Deserialize;

/// A single pixel value as it appeared in the source document.
///
/// The source format carries no per-value schema, so a leaf is either a
/// number (which may still be out of palette range) or something else
/// entirely. Resolution to a palette index happens at render time, see
/// [`Pixel::palette_index`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pixel {
    /// Any JSON number
    Number(f64),
    /// A non-numeric leaf (string, bool, null, array or object)
    Invalid,
}

/// One scanline of pixels.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pixels: Vec<Pixel>,
}

impl Row {
    /// Create a row from its pixels.
    pub fn new(pixels: Vec<Pixel>) -> Self {
        Self { pixels }
    }

    /// Build a row of numeric pixels.
    pub fn from_indices<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Self::new(values.into_iter().map(Pixel::Number).collect())
    }

    /// Number of pixels in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` when the row has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the pixel at column `col`.
    ///
    /// Returns None past the end of the row.
    #[inline]
    pub fn get(&self, col: usize) -> Option<Pixel> {
        self.pixels.get(col).copied()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

/// One complete screen state, top row first.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    rows: Vec<Row>,
}

impl Frame {
    /// Create a frame from its rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of pixel rows (not terminal lines).
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Width of the widest row, in pixels.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    /// Number of terminal lines this frame occupies once rows are paired.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.rows.len().div_ceil(2)
    }
}

/// An ordered sequence of frames, loaded once and never mutated.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Animation {
    frames: Vec<Frame>,
}

impl Animation {
    /// Create an animation from its frames.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Get the total number of frames.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` for the degenerate zero-frame animation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Get the frame at the given index.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }
}
