//! RIFF/WAVE container parsing.
//!
//! A WAVE file is a 12-byte RIFF header followed by a sequence of chunks, each made of a
//! 4-byte tag, a 4-byte little-endian length and the payload. Only two chunks matter here:
//!
//! - `fmt `, which carries the audio format, channel count, sample rate and bit depth, and
//! - `data`, which carries the interleaved little-endian samples.
//!
//! Any other chunk before or between them is skipped using its declared length.
//!
//! [`WavHeader::read`] leaves the reader on the first sample byte, ready to be handed to
//! [`lsb::Package`][crate::lsb::Package].
//!
//! ## Examples
//!
//! ```no_run
//! use std::fs::File;
//! use wavlsb::wav::WavHeader;
//!
//! let mut file = File::open("secret.wav")?;
//! let header = WavHeader::read(&mut file)?;
//!
//! println!("{} channels, {} bits", header.format.channels, header.format.bits_per_sample);
//! header.ensure_pcm()?;
//! # Ok::<(), wavlsb::Error>(())
//! ```

mod chunk;
mod header;

pub use chunk::{seek_chunk, ChunkHeader, ChunkTag};
pub use header::{AudioFormat, FormatDescriptor, WavHeader};
