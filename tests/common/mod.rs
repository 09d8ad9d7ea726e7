//! Helpers for building WAV files with hidden messages.

#![allow(dead_code)]

/// Spreads `message` over samples, `lsb_count` bits each, most significant group first.
///
/// `cover` supplies the upper bits of each sample and is cycled as needed.
pub fn hide(message: &[u8], lsb_count: u32, cover: &[i32]) -> Vec<i32> {
    let per_char = 8 / lsb_count;
    let mask = (1i32 << lsb_count) - 1;

    message
        .iter()
        .flat_map(|&byte| {
            (0..per_char).map(move |i| (i32::from(byte) >> ((per_char - i - 1) * lsb_count)) & mask)
        })
        .zip(cover.iter().cycle())
        .map(|(bits, &sample)| (sample & !mask) | bits)
        .collect()
}

/// Encodes samples as little-endian values of `width` bytes.
pub fn pcm(samples: &[i32], width: usize) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|sample| sample.to_le_bytes().into_iter().take(width))
        .collect()
}

/// Builder for RIFF/WAVE files.
pub struct Wav {
    pub format_tag: u16,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub before_fmt: Vec<([u8; 4], Vec<u8>)>,
    pub before_data: Vec<([u8; 4], Vec<u8>)>,
    pub data: Vec<u8>,
}

impl Wav {
    pub fn pcm(channels: u16, bits_per_sample: u16, data: Vec<u8>) -> Self {
        Self {
            format_tag: 1,
            channels,
            bits_per_sample,
            before_fmt: Vec::new(),
            before_data: Vec::new(),
            data,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let block_align = self.channels * self.bits_per_sample / 8;

        let mut fmt = Vec::new();
        fmt.extend_from_slice(&self.format_tag.to_le_bytes());
        fmt.extend_from_slice(&self.channels.to_le_bytes());
        fmt.extend_from_slice(&44_100u32.to_le_bytes());
        fmt.extend_from_slice(&(44_100 * u32::from(block_align)).to_le_bytes());
        fmt.extend_from_slice(&block_align.to_le_bytes());
        fmt.extend_from_slice(&self.bits_per_sample.to_le_bytes());

        let mut body = b"WAVE".to_vec();
        for (tag, payload) in &self.before_fmt {
            chunk(&mut body, tag, payload);
        }
        chunk(&mut body, b"fmt ", &fmt);
        for (tag, payload) in &self.before_data {
            chunk(&mut body, tag, payload);
        }
        chunk(&mut body, b"data", &self.data);

        let mut bytes = b"RIFF".to_vec();
        bytes.extend_from_slice(&(body.len() as u32).to_le_bytes());
        bytes.extend(body);
        bytes
    }
}

fn chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(tag);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
}
