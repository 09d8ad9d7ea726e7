//! Least significant bit extraction from PCM samples.
//!
//! The [`Package`] structure reveals a message hidden in the samples that follow a parsed
//! [`WavHeader`][crate::wav::WavHeader], configured by an [`Extraction`].
//!
//! ## Bit Layout
//!
//! With an LSB count of `n`, every message byte is spread over `8 / n` consecutive samples.
//! The low `n` bits of the first sample become the most significant bits of the byte, the
//! next sample supplies the following `n` bits, and so on down to bit zero. For example,
//! with `n = 2` the samples `..01`, `..10`, `..00`, `..01` rebuild `0b01_10_00_01`.
//!
//! Samples are consumed strictly in file order. Stereo files contribute both channels as
//! independent bit sources, so left and right samples alternate within a byte.
//!
//! The message ends right after the two-byte terminator `":)"`, or when the samples run out.
//!
//! ## Limitations
//!
//! LSB counts other than 1, 2 and 4 are accepted but decode with a 4-bit mask, and a data
//! chunk shorter than it claims keeps producing bytes from stale sample data. Both cases
//! produce garbage rather than an error.
//!
//! ## Examples
//!
//! ```no_run
//! use std::fs::File;
//! use wavlsb::{lsb, wav::WavHeader, Reveal};
//!
//! let mut file = File::open("secret.wav")?;
//! let header = WavHeader::read(&mut file)?;
//! header.ensure_pcm()?;
//!
//! let extraction = lsb::Extraction::new(2)?;
//! let summary = lsb::Package::new(extraction, &header, file)?
//!     .reveal(File::create("message.txt")?)?;
//!
//! println!("{summary}");
//! # Ok::<(), wavlsb::Error>(())
//! ```

mod mask;
mod package;
mod sample;

pub use mask::Extraction;
pub use package::{Characters, Package};
pub use sample::{Sample, SampleReader};
