//! Reader for fixed-width integers packed into 64-bit words.
//!
//! The game packs palette indices least-significant-bit first into `i64`
//! words. Since 1.16 no value straddles a word boundary: when fewer than
//! `bits` bits remain in the current word, the remainder is padding and the
//! next value starts at bit 0 of the following word. The reader reproduces
//! that rule bit-for-bit.

/// Forward-only reader over a borrowed packed word array.
#[derive(Debug)]
pub struct BitBuffer<'a> {
    data: &'a [i64],
    bits: u32,
    mask: u64,
    word: usize,
    offset: u32,
}

impl<'a> BitBuffer<'a> {
    /// Wrap `data` for reading `bits`-wide values (1..=32).
    pub fn new(data: &'a [i64], bits: u32) -> Self {
        debug_assert!((1..=32).contains(&bits));
        Self {
            data,
            bits,
            mask: (1u64 << bits) - 1,
            word: 0,
            offset: 0,
        }
    }

    /// Read the next value, or `None` once the word array is exhausted.
    pub fn read(&mut self) -> Option<u32> {
        if self.offset + self.bits > 64 {
            // Remaining bits in this word are padding.
            self.word += 1;
            self.offset = 0;
        }
        let word = *self.data.get(self.word)? as u64;
        let value = (word >> self.offset) & self.mask;
        self.offset += self.bits;
        Some(value as u32)
    }

    /// Number of words needed to hold `entries` values at `bits` width under
    /// the no-straddle packing rule.
    pub fn words_for(entries: usize, bits: u32) -> usize {
        let per_word = (64 / bits) as usize;
        entries.div_ceil(per_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pack values the way the game does: LSB-first, skipping to the next
    /// word when a value would not fit.
    fn pack(values: &[u32], bits: u32) -> Vec<i64> {
        let per_word = (64 / bits) as usize;
        let mut words = vec![0u64; values.len().div_ceil(per_word)];
        for (i, &v) in values.iter().enumerate() {
            words[i / per_word] |= u64::from(v) << (bits * (i % per_word) as u32);
        }
        words.into_iter().map(|w| w as i64).collect()
    }

    #[test]
    fn reads_back_packed_values() {
        let values: Vec<u32> = (0..64).map(|i| i % 8).collect();
        let words = pack(&values, 3);
        let mut buf = BitBuffer::new(&words, 3);
        for &v in &values {
            assert_eq!(buf.read(), Some(v));
        }
    }

    #[test]
    fn no_value_straddles_a_word_boundary() {
        // With 5-bit values, 12 fit per word and the top 4 bits are padding.
        // Word 0 is all ones (every value reads 31), word 1 is all zeros.
        // If the 13th read straddled the boundary it would pick up padding
        // bits and answer nonzero.
        let words = [-1i64, 0];
        let mut buf = BitBuffer::new(&words, 5);
        for _ in 0..12 {
            assert_eq!(buf.read(), Some(31));
        }
        assert_eq!(buf.read(), Some(0));
    }

    #[test]
    fn exhaustion_returns_none() {
        let words = [0i64];
        let mut buf = BitBuffer::new(&words, 5);
        for _ in 0..12 {
            assert!(buf.read().is_some());
        }
        assert_eq!(buf.read(), None);
        assert_eq!(buf.read(), None);
    }

    #[test]
    fn full_width_values() {
        let words = [((0xDEAD_BEEFu64 << 32) | 0x1234_5678) as i64];
        let mut buf = BitBuffer::new(&words, 32);
        assert_eq!(buf.read(), Some(0x1234_5678));
        assert_eq!(buf.read(), Some(0xDEAD_BEEF));
        assert_eq!(buf.read(), None);
    }

    #[test]
    fn single_bit_width() {
        let words = [0b1010i64];
        let mut buf = BitBuffer::new(&words, 1);
        assert_eq!(buf.read(), Some(0));
        assert_eq!(buf.read(), Some(1));
        assert_eq!(buf.read(), Some(0));
        assert_eq!(buf.read(), Some(1));
    }

    #[test]
    fn word_counts() {
        // 64 quarts at 1 bit fit in one word; at 3 bits, 21 per word -> 4 words.
        assert_eq!(BitBuffer::words_for(64, 1), 1);
        assert_eq!(BitBuffer::words_for(64, 2), 2);
        assert_eq!(BitBuffer::words_for(64, 3), 4);
        assert_eq!(BitBuffer::words_for(64, 5), 6);
        assert_eq!(BitBuffer::words_for(4096, 5), 342);
    }
}
