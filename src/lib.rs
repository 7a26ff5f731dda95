pub mod error;
pub mod selector;
pub mod word;

pub use error::{EncodeError, SelectorError};
pub use selector::{entry_for, SelectorEntry};
pub use word::{decode, decode_into, encode, encode_entry, Slots, Word};

/// Number of low bits in a word holding the selector code.
pub const SELECTOR_BITS: u32 = 4;
/// Mask extracting the selector code from a word.
pub const SELECTOR_MASK: u64 = 0xF;
/// Number of bits left over for slots once the selector is stored.
pub const PAYLOAD_BITS: u32 = u64::BITS - SELECTOR_BITS;

const MASK: [u64; PAYLOAD_BITS as usize + 1] = {
    let mut table = [0u64; PAYLOAD_BITS as usize + 1];
    let mut i = 1;
    while i < table.len() {
        table[i] = (table[i - 1] << 1) | 1;
        i += 1;
    }
    table
};

// Fast Mask lookup. It's quicker to read in the mask value than it is to
// calculate it with a shift & subtract.
#[inline]
fn find_mask(bits: u32) -> u64 {
    debug_assert!(
        bits <= PAYLOAD_BITS,
        "Masking shouldn't be above {} bits at any point, got {}",
        PAYLOAD_BITS,
        bits
    );
    MASK[bits as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_table() {
        assert_eq!(find_mask(0), 0);
        assert_eq!(find_mask(1), 0x1);
        assert_eq!(find_mask(8), 0xFF);
        assert_eq!(find_mask(20), 0xF_FFFF);
        assert_eq!(find_mask(PAYLOAD_BITS), (1 << 60) - 1);
    }

    #[test]
    fn encode_one_value() {
        assert_eq!(encode(14, &[1]).unwrap(), 0x0000_0000_0000_001E);
    }

    #[test]
    fn decode_one_value() {
        assert_eq!(decode(0x0000_0000_0000_001E), vec![1]);
    }

    #[test]
    fn encode_multiple_values() {
        assert_eq!(encode(12, &[1, 2, 3]).unwrap(), 0x0000_3000_0200_001C);
    }

    #[test]
    fn decode_multiple_values() {
        assert_eq!(decode(0x0000_3000_0200_001C), vec![1, 2, 3]);
    }

    #[test]
    fn encode_max_values() {
        let values = vec![1; 60];
        assert_eq!(encode(1, &values).unwrap(), 0xFFFF_FFFF_FFFF_FFF1);
    }

    #[test]
    fn decode_max_values() {
        assert_eq!(decode(0xFFFF_FFFF_FFFF_FFF1), vec![1; 60]);
    }

    #[test]
    fn encode_with_trailing_padding() {
        let values = vec![1; 7];
        assert_eq!(encode(8, &values).unwrap(), 0x0010_1010_1010_1018);
    }

    #[test]
    fn decode_with_trailing_padding() {
        assert_eq!(decode(0x0010_1010_1010_1018), vec![1; 7]);
    }

    #[test]
    fn reserved_selectors() {
        assert_eq!(encode(0, &[]).unwrap(), 0);
        assert_eq!(encode(15, &[]).unwrap(), 0);
        assert_eq!(encode(0, &[1, 2, 3]).unwrap(), 0);
        assert_eq!(encode(200, &[u64::MAX]).unwrap(), 0);
        assert!(decode(0).is_empty());
        assert!(decode(0xF).is_empty());
        assert!(decode(0xFFFF_FFFF_FFFF_FFFF).is_empty());
    }
}
