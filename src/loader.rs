//! Frame loading from disk.
//!
//! The whole document is read and decoded up front; playback never starts
//! from a partially loaded animation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::{parse_animation, Animation, ParseError};

/// Errors that can occur while loading an animation file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("open {}: {source}", .path.display())]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The file content is not a `[frame][row][pixel]` document
    #[error("decode {}: {source}", .path.display())]
    Decode {
        /// Path that was decoded
        path: PathBuf,
        /// Underlying JSON failure
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Decode { path, .. } => path,
        }
    }
}

/// Result type for frame loading operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and decode an animation file.
///
/// Has no side effects besides reading the file; in particular the terminal
/// is never touched, so a failing file leaves the screen as it was.
pub fn load_animation<P: AsRef<Path>>(path: P) -> LoadResult<Animation> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let animation = parse_animation(&bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "loaded {} ({} bytes): {} frames",
        path.display(),
        bytes.len(),
        animation.frame_count()
    );
    Ok(animation)
}
