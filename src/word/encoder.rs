use super::*;

/// Pack `values` into a single word under `selector`.
///
/// Value `i` lands in slot `i`. Slots past the end of `values` and any
/// padding bits are left zero. A reserved selector code yields the zero word
/// no matter what `values` holds.
///
/// Fails if there are more values than the selector has slots, or if any value
/// needs more bits than a slot provides.
pub fn encode(selector: u8, values: &[u64]) -> Result<u64, EncodeError> {
    match entry_for(selector) {
        Some(entry) => encode_entry(entry, values),
        None => Ok(0),
    }
}

/// Pack `values` under an already resolved selector entry.
pub fn encode_entry(entry: SelectorEntry, values: &[u64]) -> Result<u64, EncodeError> {
    let count = entry.count();
    if values.len() > count {
        return Err(EncodeError::TooManyValues {
            len: values.len(),
            count,
        });
    }

    let bit_width = entry.bit_width();
    let mut payload = 0u64;
    let mut shift = 0;
    for (index, &value) in values.iter().enumerate() {
        if !entry.fits(value) {
            return Err(EncodeError::ValueOutOfRange {
                index,
                value,
                bit_width,
            });
        }
        payload |= value << shift;
        shift += bit_width;
    }
    debug_assert!(shift <= PAYLOAD_BITS);

    Ok(u64::from(entry.code()) | (payload << SELECTOR_BITS))
}
