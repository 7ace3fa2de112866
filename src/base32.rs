use std::str::from_utf8_unchecked;

use crate::Error;

// cspell:disable-next-line
pub const ALPHABET: [u8; 32] = *b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const BITS_PER_SYMBOL: u32 = 5;
const SYMBOL_MASK: u64 = (1 << BITS_PER_SYMBOL) - 1;

/// The leading symbol of a ULID string carries only 3 bits of the 48-bit timestamp.
const FIRST_SYMBOL_MASK: u8 = 0x07;

#[rustfmt::skip]
const DECODE: [i8; 256] = [
    /* 0x00 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x10 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x20 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x30 */   0,  1,  2,  3,  4,  5,  6,  7,  8,  9, -1, -1, -1, -1, -1, -1,
    /* 0x40 */  -1, 10, 11, 12, 13, 14, 15, 16, 17, -1, 18, 19, -1, 20, 21, -1,
    /* 0x50 */  22, 23, 24, 25, 26, -1, 27, 28, 29, 30, 31, -1, -1, -1, -1, -1,
    /* 0x60 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x70 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x80 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0x90 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xA0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xB0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xC0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xD0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xE0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    /* 0xF0 */  -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
];

/// Writes `value` as `buffer.len()` symbols, most significant group first.
///
/// Bits above `buffer.len() * 5` are dropped.
pub fn encode(mut value: u64, buffer: &mut [u8]) {
    for byte in buffer.iter_mut().rev() {
        *byte = ALPHABET[(value & SYMBOL_MASK) as usize];
        value >>= BITS_PER_SYMBOL;
    }
}

/// Reads symbols back into an integer, the first symbol being the most significant group.
///
/// Only the canonical (uppercase) alphabet is accepted.
pub fn decode(symbols: &[u8]) -> Result<u64, Error> {
    debug_assert!(symbols.len() * BITS_PER_SYMBOL as usize <= u64::BITS as usize);

    symbols
        .iter()
        .try_fold(0, |n: u64, &byte| -> Result<u64, Error> {
            Ok((n << BITS_PER_SYMBOL) | symbol_value(byte)?)
        })
}

pub fn validate(buffer: &[u8; 26]) -> Result<(), Error> {
    match buffer.iter().find(|&&c| !is_valid_char(c)) {
        None => Ok(()),
        Some(&byte) => Err(Error::InvalidCharacter { byte }),
    }
}

pub fn canonicalize(buffer: &mut [u8; 26]) -> Result<&str, Error> {
    for byte in buffer.iter_mut() {
        *byte = normalize_char(*byte)?;
    }

    // Only the low 3 bits of the leading symbol survive parsing.
    let first = DECODE[usize::from(buffer[0])] as u8;
    buffer[0] = ALPHABET[usize::from(first & FIRST_SYMBOL_MASK)];

    // Safety: Above code guarantees valid UTF-8 (it returns early, when not)
    Ok(unsafe { from_utf8_unchecked(buffer) })
}

fn symbol_value(byte: u8) -> Result<u64, Error> {
    u64::try_from(DECODE[usize::from(byte)]).or(Err(Error::InvalidCharacter { byte }))
}

const fn is_valid_char(c: u8) -> bool {
    DECODE[c as usize] >= 0
}

const fn normalize_char(c: u8) -> Result<u8, Error> {
    match c {
        b'i' | b'I' | b'l' | b'L' => Ok(b'1'),
        b'o' | b'O' => Ok(b'0'),
        b'u' | b'U' => Err(Error::InvalidCharacter { byte: c }),
        other if other.is_ascii_alphanumeric() => Ok(other.to_ascii_uppercase()),
        _ => Err(Error::InvalidCharacter { byte: c }),
    }
}
