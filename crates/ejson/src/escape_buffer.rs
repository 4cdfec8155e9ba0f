//! Decoding of four-digit `\uXXXX` escape sequences.
//!
//! The [`UnicodeEscapeBuffer`] accumulates hexadecimal nibbles into one UTF-16
//! code unit and hands it back once exactly four have been fed. Code units in
//! the surrogate range only become a `char` as a high/low pair, see
//! [`combine_surrogates`].

#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    unit: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one nibble (`0..16`).
    ///
    /// Returns `Some(unit)` once four nibbles have been accumulated, resetting
    /// the buffer for the next sequence.
    pub fn feed(&mut self, nibble: u8) -> Option<u16> {
        debug_assert!(nibble < 16, "nibble out of range: {nibble}");
        self.unit = (self.unit << 4) | u16::from(nibble);
        self.len += 1;
        if self.len == 4 {
            let unit = self.unit;
            *self = Self::default();
            Some(unit)
        } else {
            None
        }
    }
}

pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..0xDC00).contains(&unit)
}

pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..0xE000).contains(&unit)
}

/// Joins a UTF-16 surrogate pair into the scalar it encodes.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> Option<char> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return None;
    }
    let scalar = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(scalar)
}
