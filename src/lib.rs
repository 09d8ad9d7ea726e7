//! # wavlsb
//!
//! The **wavlsb** library recovers text messages hidden in the least significant bits of
//! PCM samples inside a RIFF/WAVE container.
//!
//! ## Container parsing
//!
//! The [`wav`] module walks the chunk sequence of a WAVE file, reads the `fmt ` chunk and
//! stops at the first sample byte of the `data` chunk. See its [documentation][`wav`].
//!
//! ## Extraction
//!
//! The [`lsb`] module rebuilds the message from the low bits of consecutive samples,
//! most significant group first, until the `":)"` terminator or the end of the samples.
//! See its [documentation][`lsb`] for the bit layout.

use std::{fmt, io};

mod error;
pub mod lsb;
pub mod wav;

pub use error::{Error, Result};

/// A trait for objects able to reveal steganographic messages, or packages.
///
/// Packages are defined by a single required method, [`reveal`][Reveal::reveal],
/// which writes the hidden message to the output.
///
/// # Examples
///
/// [`lsb::Package`] reveals messages hidden in the samples of a WAV file.
pub trait Reveal {
    /// Writes the hidden message into `output`, returning a [`Summary`] of what was recovered.
    ///
    /// It is up to the implementations to establish a format and conditions under which
    /// the hidden message is interpreted and where it ends.
    ///
    /// # Errors
    ///
    /// This function returns any form of error encountered to the caller. If an error
    /// is returned, however, it is not guaranteed that no bytes were written.
    fn reveal<W: io::Write>(self, output: W) -> Result<Summary>;
}

/// Counts reported after a message has been revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of message bytes written.
    pub characters: usize,
    /// Number of samples the message was rebuilt from.
    pub samples: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} characters recovered from {} samples",
            self.characters, self.samples
        )
    }
}
