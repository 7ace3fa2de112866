use thiserror::Error;

/// Errors that can occur when creating ULIDs out of foreign data or generating them.
#[derive(Debug, Error, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Error {
    /// The string or byte buffer does not have the size required by the target format.
    #[error("invalid length: expected {expected}, found {found}")]
    InvalidLength {
        /// The fixed size of the target format.
        expected: usize,
        /// The size of the given input.
        found: usize,
    },

    /// The string contains a character outside the ULID Base32 alphabet.
    #[error("invalid character: {byte:#04x}")]
    InvalidCharacter {
        /// The first offending input byte.
        byte: u8,
    },

    /// The entropy of a monotonic generator already holds all 80 bits set.
    #[error("entropy overflow: no further ULID fits into this timestamp")]
    EntropyOverflow,
}
