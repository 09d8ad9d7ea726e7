use crate::{Error, Result};
use std::{
    fmt,
    io::{self, Read, Seek, SeekFrom},
};
use tracing::debug;

/// A 4-byte chunk identifier.
///
/// Tags are compared byte for byte; they may be space padded (`fmt `) or contain
/// bytes that are not printable at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkTag(pub [u8; 4]);

impl ChunkTag {
    /// Tag of the top-level container
    pub const RIFF: Self = Self(*b"RIFF");
    /// Form type of a WAVE container
    pub const WAVE: Self = Self(*b"WAVE");
    /// Format chunk, note the trailing space
    pub const FMT: Self = Self(*b"fmt ");
    /// Sample data chunk
    pub const DATA: Self = Self(*b"data");
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

/// Tag and declared payload length of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Chunk identifier
    pub tag: ChunkTag,
    /// Payload length in bytes, excluding this header
    pub size: u32,
}

impl ChunkHeader {
    /// Reads the next chunk header, or `None` if the stream ends before a full header.
    pub fn read<R: Read>(reader: &mut R) -> io::Result<Option<Self>> {
        let mut buf = [0u8; 8];

        match reader.read_exact(&mut buf) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e),
        }

        let [a, b, c, d, size @ ..] = buf;
        Ok(Some(Self {
            tag: ChunkTag([a, b, c, d]),
            size: u32::from_le_bytes(size),
        }))
    }
}

/// Skips chunks until one tagged `tag` is found, returning its declared size.
///
/// On success the reader is positioned at the first payload byte of the found chunk.
///
/// # Errors
///
/// [`Error::ChunkNotFound`] if the stream runs out first.
pub fn seek_chunk<R: Read + Seek>(reader: &mut R, tag: ChunkTag) -> Result<u32> {
    while let Some(header) = ChunkHeader::read(reader)? {
        if header.tag == tag {
            return Ok(header.size);
        }

        debug!(tag = %header.tag, size = header.size, "skipping chunk");
        reader.seek(SeekFrom::Current(i64::from(header.size)))?;
    }

    Err(Error::ChunkNotFound(tag))
}
