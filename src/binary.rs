use crate::Error;

/// Writes the low `N` bytes of `value` in network byte order (big endian).
///
/// Bits above `N * 8` are dropped.
pub fn encode<const N: usize>(value: u64) -> [u8; N] {
    debug_assert!(N <= size_of::<u64>());

    let mut buffer = [0; N];
    buffer.copy_from_slice(&value.to_be_bytes()[size_of::<u64>() - N..]);
    buffer
}

/// Reads exactly `N` big-endian bytes into an integer.
pub fn decode<const N: usize>(bytes: &[u8]) -> Result<u64, Error> {
    debug_assert!(N <= size_of::<u64>());

    if bytes.len() != N {
        return Err(Error::InvalidLength {
            expected: N,
            found: bytes.len(),
        });
    }

    Ok(bytes.iter().fold(0, |n, &byte| (n << 8) | u64::from(byte)))
}
