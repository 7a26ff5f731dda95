use super::*;

/// Unpack every slot of `word`.
///
/// The result always holds the selector's full slot count, including slots
/// that were never written. A reserved selector decodes to an empty vector.
pub fn decode(word: u64) -> Vec<u64> {
    let mut dst = Vec::new();
    decode_into(word, &mut dst);
    dst
}

/// Unpack every slot of `word`, appending to `dst`. Returns the number of
/// values appended.
pub fn decode_into(word: u64, dst: &mut Vec<u64>) -> usize {
    let slots = Word::new(word).values();
    let n = slots.len();
    dst.extend(slots);
    n
}
