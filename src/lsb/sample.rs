use crate::{Error, Result};
use std::io::{self, Read};
use tracing::warn;

/// A single channel sample, interpreted at its declared width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// 8-bit samples are unsigned in WAVE files
    U8(u8),
    /// 16-bit signed sample
    I16(i16),
    /// 24-bit sample, sign extended
    I24(i32),
    /// 32-bit signed sample
    I32(i32),
}

impl Sample {
    /// Interprets the little-endian `bytes` as a sample of `bytes.len()` bytes.
    ///
    /// Returns `None` if `bytes` is empty or longer than 4 bytes.
    #[must_use]
    pub fn from_le_bytes(bytes: &[u8]) -> Option<Self> {
        Some(match *bytes {
            [a] => Sample::U8(a),
            [a, b] => Sample::I16(i16::from_le_bytes([a, b])),
            [a, b, c] => Sample::I24(i32::from_le_bytes([0, a, b, c]) >> 8),
            [a, b, c, d] => Sample::I32(i32::from_le_bytes([a, b, c, d])),
            _ => return None,
        })
    }

    /// Lowest byte of the sample's bit pattern at its own width.
    #[must_use]
    pub fn low_byte(&self) -> u8 {
        match *self {
            Sample::U8(v) => v,
            Sample::I16(v) => v.to_le_bytes()[0],
            Sample::I24(v) | Sample::I32(v) => v.to_le_bytes()[0],
        }
    }
}

/// Reads fixed-width samples from a stream of interleaved PCM data.
///
/// Once the stream runs dry, the bytes that could not be read keep the value they had for
/// the previous sample. Callers that read past the end get stale data, not an error.
#[derive(Debug)]
pub struct SampleReader<R> {
    reader: R,
    buf: [u8; 4],
    width: usize,
    exhausted: bool,
}

impl<R: Read> SampleReader<R> {
    /// Creates a reader for samples of `width` bytes.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedSampleWidth`] unless `width` is between 1 and 4.
    pub fn new(reader: R, width: usize) -> Result<Self> {
        if !(1..=4).contains(&width) {
            return Err(Error::UnsupportedSampleWidth(width));
        }

        Ok(Self {
            reader,
            buf: [0; 4],
            width,
            exhausted: false,
        })
    }

    /// Width of one sample in bytes.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether a read has already come up short.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Reads the next sample.
    ///
    /// # Errors
    ///
    /// Any error of the underlying reader other than [`io::ErrorKind::Interrupted`].
    pub fn next_sample(&mut self) -> io::Result<Sample> {
        let mut filled = 0;

        while filled < self.width {
            match self.reader.read(&mut self.buf[filled..self.width]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        if filled < self.width && !self.exhausted {
            warn!(width = self.width, "sample data ended early, reusing stale bytes");
            self.exhausted = true;
        }

        Sample::from_le_bytes(&self.buf[..self.width]).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "unsupported sample width")
        })
    }
}
