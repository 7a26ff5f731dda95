/*!
# Simple8b Words

A Simple8b word is a single `u64`. The low 4 bits hold a selector code, and the
remaining 60 bits are split into equally sized slots as described by that
selector's [entry][crate::SelectorEntry]. Slot 0 sits right above the selector,
and later slots climb toward the most significant bit. Any payload bits above
the last slot are padding and are always zero.

## Usage

The caller picks the selector; this module only packs and unpacks. A word
always decodes to a full set of slots, so values that were never written come
back as zeros and the logical length has to be carried alongside the word.

```
# use simple8b::*;
let word = encode(12, &[1, 2, 3]).unwrap();
assert_eq!(word, 0x0000_3000_0200_001C);
assert_eq!(decode(word), vec![1, 2, 3]);

// Selector 8 has 7 slots; unwritten ones decode as zero.
let word = encode(8, &[5, 6]).unwrap();
assert_eq!(decode(word), vec![5, 6, 0, 0, 0, 0, 0]);

// Decoding many words into one buffer.
let mut out = Vec::new();
decode_into(0x1E, &mut out);
decode_into(word, &mut out);
assert_eq!(out.len(), 8);
```

Reserved selector codes don't produce errors: encoding under one gives the zero
word, and decoding a word carrying one gives no values.
*/

use std::fmt;
use std::iter::FusedIterator;

use crate::error::EncodeError;
use crate::selector::{entry_for, SelectorEntry};
use crate::{PAYLOAD_BITS, SELECTOR_BITS, SELECTOR_MASK};

mod encoder;
pub use encoder::{encode, encode_entry};

mod decoder;
pub use decoder::{decode, decode_into};

/// A packed Simple8b word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Word(u64);

impl Word {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Pack `values` under `selector`. See [`encode`].
    pub fn encode(selector: u8, values: &[u64]) -> Result<Self, EncodeError> {
        encode(selector, values).map(Self)
    }

    /// The raw 64-bit word.
    pub const fn get(self) -> u64 {
        self.0
    }

    pub fn selector(self) -> u8 {
        (self.0 & SELECTOR_MASK) as u8
    }

    /// The 60 payload bits, shifted down to start at bit 0.
    pub fn payload(self) -> u64 {
        self.0 >> SELECTOR_BITS
    }

    /// Table entry for this word's selector, or `None` if it's reserved.
    pub fn entry(self) -> Option<SelectorEntry> {
        entry_for(self.selector())
    }

    /// Number of slots this word decodes to.
    pub fn len(self) -> usize {
        self.entry().map_or(0, |e| e.count())
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Read a single slot. Returns `None` past the last slot, or if the
    /// selector is reserved.
    pub fn slot(self, index: usize) -> Option<u64> {
        let entry = self.entry()?;
        if index >= entry.count() {
            return None;
        }
        let shift = index as u32 * entry.bit_width();
        debug_assert!(shift < PAYLOAD_BITS);
        Some((self.payload() >> shift) & entry.max_value())
    }

    /// Iterate over every slot in the word, lowest first.
    pub fn values(self) -> Slots {
        match self.entry() {
            Some(entry) => Slots {
                payload: self.payload(),
                mask: entry.max_value(),
                bit_width: entry.bit_width(),
                remaining: entry.count(),
            },
            None => Slots {
                payload: 0,
                mask: 0,
                bit_width: 0,
                remaining: 0,
            },
        }
    }

    /// True if the selector is valid and every padding bit is zero.
    pub fn is_well_formed(self) -> bool {
        match self.entry() {
            Some(entry) => (self.payload() >> entry.used_bits()) == 0,
            None => false,
        }
    }
}

impl From<u64> for Word {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Word> for u64 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl IntoIterator for Word {
    type Item = u64;
    type IntoIter = Slots;

    fn into_iter(self) -> Slots {
        self.values()
    }
}

/// Iterator over the slots of a [`Word`].
#[derive(Clone, Debug)]
pub struct Slots {
    payload: u64,
    mask: u64,
    bit_width: u32,
    remaining: usize,
}

impl Iterator for Slots {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let val = self.payload & self.mask;
        // bit_width never exceeds 60, so this can't overflow the shift
        self.payload >>= self.bit_width;
        self.remaining -= 1;
        Some(val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Slots {}

impl FusedIterator for Slots {}
