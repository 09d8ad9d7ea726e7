use super::chunk::{seek_chunk, ChunkTag};
use crate::{Error, Result};
use std::io::{Read, Seek, SeekFrom};
use tracing::{info, warn};

const FMT_LEN: u32 = 16;

/// Audio encoding declared in the `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// Linear PCM (tag 1)
    Pcm,
    /// Any other, compressed or float, encoding
    Other(u16),
}

impl From<u16> for AudioFormat {
    fn from(tag: u16) -> Self {
        match tag {
            1 => AudioFormat::Pcm,
            other => AudioFormat::Other(other),
        }
    }
}

impl From<AudioFormat> for u16 {
    fn from(format: AudioFormat) -> Self {
        match format {
            AudioFormat::Pcm => 1,
            AudioFormat::Other(tag) => tag,
        }
    }
}

/// Fields of the `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Encoding of the samples
    pub audio_format: AudioFormat,
    /// Number of interleaved channels
    pub channels: u16,
    /// Samples per second, informational only
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Bytes per frame, all channels included
    pub block_align: u16,
    /// Bit depth of one channel's sample
    pub bits_per_sample: u16,
}

impl FormatDescriptor {
    fn from_bytes(data: [u8; FMT_LEN as usize]) -> Self {
        let u16_at = |i: usize| u16::from_le_bytes([data[i], data[i + 1]]);
        let u32_at = |i: usize| u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);

        Self {
            audio_format: u16_at(0).into(),
            channels: u16_at(2),
            sample_rate: u32_at(4),
            byte_rate: u32_at(8),
            block_align: u16_at(12),
            bits_per_sample: u16_at(14),
        }
    }
}

/// Parsed WAVE header: the format plus the length of the sample data that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Contents of the `fmt ` chunk
    pub format: FormatDescriptor,
    /// Length of the `data` chunk in bytes
    pub data_len: u32,
}

impl WavHeader {
    /// Parses the container up to the start of the sample data.
    ///
    /// The reader must be at offset 0. On success it is left on the first sample byte.
    /// The top-level `RIFF`/`WAVE` tags are not enforced; a mismatch is only logged.
    ///
    /// # Errors
    ///
    /// [`Error::ChunkNotFound`] if the stream ends while looking for `fmt ` or `data`,
    /// [`Error::FormatChunkTooSmall`] and [`Error::InvalidFormat`] for `fmt ` chunks that
    /// cannot describe a sample layout, and [`Error::Io`] for read failures.
    ///
    /// A non-PCM format is *not* an error here, see [`WavHeader::is_pcm`].
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let mut riff = [0u8; 12];
        reader.read_exact(&mut riff).map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::ChunkNotFound(ChunkTag::RIFF),
            _ => e.into(),
        })?;

        let riff_tag = ChunkTag([riff[0], riff[1], riff[2], riff[3]]);
        let wave_tag = ChunkTag([riff[8], riff[9], riff[10], riff[11]]);
        if riff_tag != ChunkTag::RIFF || wave_tag != ChunkTag::WAVE {
            warn!(riff = %riff_tag, wave = %wave_tag, "unexpected container tags");
        }

        let fmt_len = seek_chunk(reader, ChunkTag::FMT)?;
        if fmt_len < FMT_LEN {
            return Err(Error::FormatChunkTooSmall(fmt_len));
        }

        let mut fmt = [0u8; FMT_LEN as usize];
        reader.read_exact(&mut fmt).map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::invalid_format("truncated fmt chunk"),
            _ => e.into(),
        })?;
        let format = FormatDescriptor::from_bytes(fmt);

        if fmt_len > FMT_LEN {
            reader.seek(SeekFrom::Current(i64::from(fmt_len - FMT_LEN)))?;
        }

        if format.channels == 0 {
            return Err(Error::invalid_format("zero channels"));
        }
        if format.bits_per_sample == 0 {
            return Err(Error::invalid_format("zero bits per sample"));
        }

        let data_len = seek_chunk(reader, ChunkTag::DATA)?;

        info!(
            audio_format = u16::from(format.audio_format),
            channels = format.channels,
            sample_rate = format.sample_rate,
            bits_per_sample = format.bits_per_sample,
            data_len,
            "located sample data"
        );

        Ok(Self { format, data_len })
    }

    /// Whether the samples are linear PCM, the only encoding that can be decoded.
    #[must_use]
    pub fn is_pcm(&self) -> bool {
        self.format.audio_format == AudioFormat::Pcm
    }

    /// Turns [`WavHeader::is_pcm`] into an error for callers that need to stop.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedFormat`] carrying the raw format tag.
    pub fn ensure_pcm(&self) -> Result<()> {
        if self.is_pcm() {
            Ok(())
        } else {
            Err(Error::UnsupportedFormat(self.format.audio_format.into()))
        }
    }

    /// Number of samples per channel held by the `data` chunk.
    #[must_use]
    pub fn num_samples(&self) -> u64 {
        (u64::from(self.data_len) * 8 / u64::from(self.format.channels))
            / u64::from(self.format.bits_per_sample)
    }

    /// Size in bits of one frame, all channels included, as derived from the data length.
    ///
    /// Zero when the data chunk holds no complete sample.
    #[must_use]
    pub fn sample_size(&self) -> u64 {
        match self.num_samples() {
            0 => 0,
            n => u64::from(self.data_len) / n * 8,
        }
    }

    /// Width in bytes of one channel's sample.
    ///
    /// Falls back to the declared bit depth when the data chunk is empty.
    #[must_use]
    pub fn bytes_per_sample(&self) -> u64 {
        match self.sample_size() {
            0 => u64::from(self.format.bits_per_sample) / 8,
            bits => bits / (8 * u64::from(self.format.channels)),
        }
    }
}
