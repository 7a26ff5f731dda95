use crate::error::SelectorError;
use crate::{find_mask, PAYLOAD_BITS};

/// One row of the Simple8b selector table: how many slots a word holds, and
/// how wide each slot is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectorEntry {
    code: u8,
    count: u8,
    bit_width: u8,
}

const fn entry(code: u8, count: u8, bit_width: u8) -> Option<SelectorEntry> {
    Some(SelectorEntry {
        code,
        count,
        bit_width,
    })
}

// Indexed by selector code. Codes 0 and 15 are reserved.
const TABLE: [Option<SelectorEntry>; 16] = [
    None,
    entry(1, 60, 1),
    entry(2, 30, 2),
    entry(3, 20, 3),
    entry(4, 15, 4),
    entry(5, 12, 5),
    entry(6, 10, 6),
    entry(7, 8, 7),
    entry(8, 7, 8),
    entry(9, 6, 10),
    entry(10, 5, 12),
    entry(11, 4, 15),
    entry(12, 3, 20),
    entry(13, 2, 30),
    entry(14, 1, 60),
    None,
];

// Every row must sit at its own code and fit in the payload.
const _: () = {
    let mut i = 0;
    while i < TABLE.len() {
        if let Some(e) = TABLE[i] {
            assert!(e.code as usize == i);
            assert!(e.count as u32 * e.bit_width as u32 <= PAYLOAD_BITS);
        }
        i += 1;
    }
};

/// Look up the table entry for a selector code. Returns `None` for the
/// reserved codes 0 and 15, and for anything that isn't a 4-bit code.
#[inline]
pub fn entry_for(code: u8) -> Option<SelectorEntry> {
    TABLE.get(code as usize).copied().flatten()
}

/// Iterate over every valid selector entry, in code order.
pub fn entries() -> impl Iterator<Item = SelectorEntry> {
    TABLE.iter().filter_map(|e| *e)
}

impl SelectorEntry {
    /// The 4-bit code stored in the low bits of a word.
    pub fn code(&self) -> u8 {
        self.code
    }

    /// Number of slots in the payload.
    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Width of each slot, in bits.
    pub fn bit_width(&self) -> u32 {
        self.bit_width as u32
    }

    /// Largest value a single slot can hold.
    #[inline]
    pub fn max_value(&self) -> u64 {
        find_mask(self.bit_width())
    }

    #[inline]
    pub fn fits(&self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// Payload bits covered by slots.
    pub fn used_bits(&self) -> u32 {
        self.count as u32 * self.bit_width()
    }

    /// Payload bits above the last slot. These are always zero in a
    /// well-formed word.
    pub fn padding_bits(&self) -> u32 {
        PAYLOAD_BITS - self.used_bits()
    }
}

impl TryFrom<u8> for SelectorEntry {
    type Error = SelectorError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        entry_for(code).ok_or(SelectorError::Invalid(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_table() {
        let expected: [(u8, usize, u32); 14] = [
            (1, 60, 1),
            (2, 30, 2),
            (3, 20, 3),
            (4, 15, 4),
            (5, 12, 5),
            (6, 10, 6),
            (7, 8, 7),
            (8, 7, 8),
            (9, 6, 10),
            (10, 5, 12),
            (11, 4, 15),
            (12, 3, 20),
            (13, 2, 30),
            (14, 1, 60),
        ];
        let actual: Vec<_> = entries()
            .map(|e| (e.code(), e.count(), e.bit_width()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn reserved_codes_have_no_entry() {
        assert_eq!(entry_for(0), None);
        assert_eq!(entry_for(15), None);
        for code in 16..=u8::MAX {
            assert_eq!(entry_for(code), None, "code {} should be invalid", code);
        }
    }

    #[test]
    fn try_from_reports_invalid_code() {
        assert_eq!(SelectorEntry::try_from(0), Err(SelectorError::Invalid(0)));
        assert_eq!(SelectorEntry::try_from(15), Err(SelectorError::Invalid(15)));
        assert_eq!(SelectorEntry::try_from(99), Err(SelectorError::Invalid(99)));
        let e = SelectorEntry::try_from(9).unwrap();
        assert_eq!((e.count(), e.bit_width()), (6, 10));
    }

    #[test]
    fn slot_limits() {
        let e = entry_for(8).unwrap();
        assert_eq!(e.max_value(), 0xFF);
        assert!(e.fits(255));
        assert!(!e.fits(256));
        assert_eq!(e.used_bits(), 56);
        assert_eq!(e.padding_bits(), 4);

        let e = entry_for(14).unwrap();
        assert_eq!(e.max_value(), (1 << 60) - 1);
        assert!(!e.fits(1 << 60));
        assert_eq!(e.padding_bits(), 0);
    }
}
