//! Error types for WAV parsing and message extraction.

use crate::wav::ChunkTag;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or extracting a hidden message.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while reading the input or writing the message
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The input file could not be opened
    #[error("could not open wav file {}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// The output file could not be created
    #[error("could not create output file {}", path.display())]
    Create { path: PathBuf, source: io::Error },

    /// The stream ended before a chunk with the given tag was found
    #[error("'{0}' chunk not found before end of stream")]
    ChunkNotFound(ChunkTag),

    /// The `fmt ` chunk declares fewer than 16 bytes
    #[error("fmt chunk too small: {0} bytes")]
    FormatChunkTooSmall(u32),

    /// The audio is not linear PCM
    #[error("unsupported audio format tag {0:#06x}, only PCM is supported")]
    UnsupportedFormat(u16),

    /// The format parameters cannot describe any sample layout
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Samples are wider than the decoder can read
    #[error("unsupported sample width: {0} bytes")]
    UnsupportedSampleWidth(usize),

    /// The LSB count leaves no whole sample per character
    #[error("invalid LSB count {0}, expected 1 to 8")]
    InvalidLsbCount(u8),
}

impl Error {
    /// Create an invalid format error
    #[must_use]
    pub fn invalid_format<S: Into<String>>(msg: S) -> Self {
        Error::InvalidFormat(msg.into())
    }

    /// Whether the error means the input is not a usable PCM WAV file.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::ChunkNotFound(_)
                | Error::FormatChunkTooSmall(_)
                | Error::UnsupportedFormat(_)
                | Error::InvalidFormat(_)
                | Error::UnsupportedSampleWidth(_)
        )
    }

    /// Process exit code reported by the command-line tool.
    ///
    /// `2` for files that cannot be opened or read, `3` for format validation failures
    /// and `1` for invalid extraction parameters, which the command line rejects as
    /// argument errors.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io(_) | Error::Open { .. } | Error::Create { .. } => 2,
            e if e.is_format_error() => 3,
            _ => 1,
        }
    }
}
