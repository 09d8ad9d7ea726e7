use crate::{
    lsb::{Extraction, SampleReader},
    wav::WavHeader,
    Result, Reveal, Summary,
};
use std::io::{self, BufReader, BufWriter, Read, Write};
use tracing::{info, warn};

/// A WAV sample stream that contains a steganographic message.
///
/// It writes to the output in the [`reveal`][crate::Reveal::reveal] method until either
/// occurs:
///
/// 1. The terminator `":)"` was written, or
/// 2. Every whole byte the samples can hold was written.
///
/// # Examples
///
/// Revealing a message from an in-memory WAV file:
///
/// ```no_run
/// use std::io::Cursor;
/// use wavlsb::{lsb, wav::WavHeader, Reveal};
///
/// let mut wav = Cursor::new(std::fs::read("secret.wav")?);
/// let header = WavHeader::read(&mut wav)?;
///
/// let mut message = Vec::new();
/// let summary = lsb::Package::new(lsb::Extraction::new(1)?, &header, wav)?
///     .reveal(&mut message)?;
///
/// assert_eq!(summary.characters, message.len());
/// # Ok::<(), wavlsb::Error>(())
/// ```
#[derive(Debug)]
pub struct Package<R: Read> {
    samples: SampleReader<BufReader<R>>,
    extraction: Extraction,
    max_chars: usize,
}

impl<R: Read> Package<R> {
    /// Creates a new [`Package<R>`] reading the samples described by `header` from `reader`.
    ///
    /// The reader must be positioned on the first sample byte, as [`WavHeader::read`]
    /// leaves it.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedSampleWidth`][crate::Error::UnsupportedSampleWidth] if the
    /// header implies samples wider than 4 bytes or narrower than 1.
    pub fn new(extraction: Extraction, header: &WavHeader, reader: R) -> Result<Self> {
        let width = usize::try_from(header.bytes_per_sample()).unwrap_or(usize::MAX);
        let samples = SampleReader::new(BufReader::new(reader), width)?;

        let mut num_samples = usize::try_from(header.num_samples()).unwrap_or(usize::MAX);
        if header.format.channels == 2 {
            num_samples = num_samples.saturating_mul(2);
        }

        let max_chars = num_samples / extraction.samples_per_char();

        if !extraction.is_exact() {
            warn!(
                lsb_count = extraction.lsb_count(),
                "LSB count does not split a byte evenly, output will be unreadable"
            );
        }

        info!(
            width,
            num_samples,
            lsb_count = extraction.lsb_count(),
            max_chars,
            "extracting message"
        );

        Ok(Self {
            samples,
            extraction,
            max_chars,
        })
    }

    /// Upper bound on the length of the message, reached when no terminator is found.
    #[must_use]
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Turns the package into an iterator over the message bytes.
    #[must_use]
    pub fn characters(self) -> Characters<R> {
        Characters {
            samples: self.samples,
            extraction: self.extraction,
            remaining: self.max_chars,
            previous: None,
        }
    }
}

impl<R: Read> Reveal for Package<R> {
    fn reveal<W: Write>(self, output: W) -> Result<Summary> {
        let mut output = BufWriter::new(output);
        let samples_per_char = self.extraction.samples_per_char();

        let mut characters = 0usize;
        for byte in self.characters() {
            output.write_all(&[byte?])?;
            characters += 1;
        }

        output.flush()?;

        Ok(Summary {
            characters,
            samples: characters * samples_per_char,
        })
    }
}

/// Iterator over the bytes hidden in a [`Package`].
///
/// It yields each rebuilt byte in order and stops after the byte that completes `":)"`,
/// or once the samples cannot hold another whole byte. It is fused after the first
/// error.
#[derive(Debug)]
pub struct Characters<R: Read> {
    samples: SampleReader<BufReader<R>>,
    extraction: Extraction,
    remaining: usize,
    previous: Option<u8>,
}

impl<R: Read> Characters<R> {
    fn next_char(&mut self) -> io::Result<u8> {
        let mut byte = 0u8;

        for index in 0..self.extraction.samples_per_char() {
            let bits = self.samples.next_sample()?.low_byte();
            byte |= self.extraction.place(index, bits);
        }

        Ok(byte)
    }
}

impl<R: Read> Iterator for Characters<R> {
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let byte = match self.next_char() {
            Ok(byte) => byte,
            Err(e) => {
                self.remaining = 0;
                return Some(Err(e));
            }
        };

        if byte == b')' && self.previous == Some(b':') {
            self.remaining = 0;
        }
        self.previous = Some(byte);

        Some(Ok(byte))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<R: Read> std::iter::FusedIterator for Characters<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::{AudioFormat, FormatDescriptor};

    fn header(channels: u16, bits_per_sample: u16, data_len: u32) -> WavHeader {
        WavHeader {
            format: FormatDescriptor {
                audio_format: AudioFormat::Pcm,
                channels,
                sample_rate: 8000,
                byte_rate: 8000 * u32::from(channels * bits_per_sample / 8),
                block_align: channels * bits_per_sample / 8,
                bits_per_sample,
            },
            data_len,
        }
    }

    /// 8-bit samples carrying `message` in their low `lsb_count` bits.
    fn samples(message: &[u8], lsb_count: u8) -> Vec<u8> {
        let per_char = 8 / lsb_count;
        let mask = (1u8 << lsb_count) - 1;

        message
            .iter()
            .flat_map(|&byte| {
                (0..per_char).map(move |i| {
                    let shift = (per_char - i - 1) * lsb_count;
                    0b1010_0000 | ((byte >> shift) & mask)
                })
            })
            .collect()
    }

    fn reveal(data: &[u8], lsb_count: u8) -> (Vec<u8>, Summary) {
        let header = header(1, 8, data.len() as u32);
        let package = Package::new(Extraction::new(lsb_count).unwrap(), &header, data).unwrap();

        let mut message = Vec::new();
        let summary = package.reveal(&mut message).unwrap();
        (message, summary)
    }

    #[test]
    fn test_stops_after_terminator() {
        let (message, summary) = reveal(&samples(b"abc:)xyz", 2), 2);

        assert_eq!(message, b"abc:)");
        assert_eq!(summary, Summary { characters: 5, samples: 20 });
    }

    #[test]
    fn test_runs_to_exhaustion() {
        let (message, summary) = reveal(&samples(b"no end here)", 4), 4);

        assert_eq!(message, b"no end here)");
        assert_eq!(summary.characters, 12);
        assert_eq!(summary.samples, 24);
    }

    #[test]
    fn test_terminator_needs_colon_first() {
        let (message, _) = reveal(&samples(b"):):)", 1), 1);
        assert_eq!(message, b"):)");
    }

    #[test]
    fn test_ignores_trailing_partial_char() {
        let mut data = samples(b"hi", 1);
        data.extend_from_slice(&[1, 1, 1]);

        let (message, summary) = reveal(&data, 1);
        assert_eq!(message, b"hi");
        assert_eq!(summary.samples, 16);
    }

    #[test]
    fn test_stereo_doubles_sample_count() {
        let data = samples(b"LR", 4);
        let header = header(2, 16, data.len() as u32);

        // One 32-bit frame, read as two 16-bit samples.
        let package = Package::new(Extraction::new(4).unwrap(), &header, data.as_slice()).unwrap();
        assert_eq!(package.max_chars(), 1);
    }

    #[test]
    fn test_characters_fused_on_terminator() {
        let data = samples(b":)!", 2);
        let header = header(1, 8, data.len() as u32);
        let mut chars = Package::new(Extraction::new(2).unwrap(), &header, data.as_slice())
            .unwrap()
            .characters();

        assert_eq!(chars.next().unwrap().unwrap(), b':');
        assert_eq!(chars.next().unwrap().unwrap(), b')');
        assert!(chars.next().is_none());
        assert!(chars.next().is_none());
    }

    #[test]
    fn test_empty_data() {
        let (message, summary) = reveal(&[], 2);

        assert!(message.is_empty());
        assert_eq!(summary, Summary::default());
    }
}
