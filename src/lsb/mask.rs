use crate::{Error, Result};

/// Extraction parameters: how many low bits each sample carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction {
    lsb_count: u8,
}

impl Extraction {
    /// Creates parameters for `lsb_count` bits per sample.
    ///
    /// Only 1, 2 and 4 split a byte evenly with a matching mask. Other counts up to 8 are
    /// accepted and decode with the 4-bit mask, yielding unreadable output.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLsbCount`] for 0 or anything above 8, which leave no whole sample
    /// per byte.
    pub fn new(lsb_count: u8) -> Result<Self> {
        if !(1..=8).contains(&lsb_count) {
            return Err(Error::InvalidLsbCount(lsb_count));
        }

        Ok(Self { lsb_count })
    }

    /// Number of low bits taken from every sample.
    #[must_use]
    pub fn lsb_count(&self) -> u8 {
        self.lsb_count
    }

    /// Whether the count decodes meaningfully.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self.lsb_count, 1 | 2 | 4)
    }

    /// Mask isolating the bits of a sample that carry the message.
    ///
    /// Counts other than 1 and 2 all use the 4-bit mask.
    #[must_use]
    pub fn mask(&self) -> u8 {
        match self.lsb_count {
            1 => 0b1,
            2 => 0b11,
            _ => 0b1111,
        }
    }

    /// Number of consecutive samples that make up one byte.
    #[must_use]
    pub fn samples_per_char(&self) -> usize {
        usize::from(8 / self.lsb_count)
    }

    /// Moves the masked `bits` of the `index`-th sample of a byte into their position.
    ///
    /// The first sample lands in the most significant bits, later ones in successively
    /// lower positions. Bits shifted past bit 7 are dropped.
    #[must_use]
    pub fn place(&self, index: usize, bits: u8) -> u8 {
        let shift = if index == 0 {
            8 - u32::from(self.lsb_count)
        } else {
            (self.samples_per_char() - index - 1) as u32 * u32::from(self.lsb_count)
        };

        (u32::from(bits & self.mask()) << shift) as u8
    }
}
