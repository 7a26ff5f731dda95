use thiserror::Error;

/// Failure while packing values into a Simple8b word.
///
/// Values are never truncated to fit a slot; anything that would lose bits is
/// reported here instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A value has bits set above the selector's slot width.
    #[error("value {value} at index {index} does not fit in {bit_width} bits")]
    ValueOutOfRange {
        index: usize,
        value: u64,
        bit_width: u32,
    },
    /// More values were given than the selector has slots.
    #[error("{len} values given, but the selector only has {count} slots")]
    TooManyValues { len: usize, count: usize },
}

/// Failure to resolve a selector code into a table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector code {0} is reserved or out of range")]
    Invalid(u8),
}
