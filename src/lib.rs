//! # ULIDs with a Monotonic Generator
//!
//! This crate provides ULIDs (Universally Unique Lexicographically Sortable Identifiers):
//! 128-bit identifiers made of a 48-bit millisecond timestamp and 80 bits of entropy,
//! written as 26 Crockford Base32 symbols that sort in creation order.
//!
//! ## Generating ULIDs
//!
//! Random ULIDs with the current time are created with [`Ulid::random()`]:
//!
//! ```
//! # #[cfg(feature = "rand")]
//! # {
//! use ulid_mono::Ulid;
//!
//! let u = Ulid::random();
//!
//! println!("Generated ULID: {u}");
//! # }
//! ```
//!
//! The clock and the source of randomness can be replaced, see [`Clock`] and [`RandomSource`].
//!
//! To get ULIDs that are strictly increasing even within the same millisecond,
//! use a [`MonotonicGenerator`]. It increments the entropy of the previous ULID by one:
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use ulid_mono::{MonotonicGenerator, Ulid};
//!
//! let mut generator = MonotonicGenerator::new(Ulid::MIN);
//!
//! let u1 = generator.generate_at(1_700_000_000_000)?;
//! let u2 = generator.generate_at(1_700_000_000_000)?;
//!
//! assert!(u1 < u2);
//! # Ok(()) }
//! ```
//!
//! ## Parsing ULIDs from Strings
//!
//! ULIDs implement the [`std::str::FromStr`] trait and can be parsed with the [`str::parse()`] method.
//! Parsing is strict: only the 32 uppercase symbols of the alphabet are accepted.
//! Use [`canonicalize()`] to clean up lowercase or ambiguous input first.
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use ulid_mono::Ulid;
//!
// cspell:disable-next-line
//! let u: Ulid = "01H7PN3EH10123456789ABCDEF".parse()?;
//!
//! assert_eq!(u.timestamp_ms(), 1_691_903_703_585);
// cspell:disable-next-line
//! assert_eq!(u.as_str(), "01H7PN3EH10123456789ABCDEF");
//! # Ok(()) }
//! ```
//!
//! The leading symbol carries two bits more than the timestamp can hold.
//! Those bits are dropped, so `"8ZZZZZZZZZZZZZZZZZZZZZZZZZ"` parses to `"0ZZZZZZZZZZZZZZZZZZZZZZZZZ"`.
//!
//! ## Serializing and Deserializing using `Serde` (JSON)
//!
//! Once the `serde` feature is enabled, ULIDs implement the `Serialize` and `Deserialize` traits
//! and are written as strings:
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! # #[cfg(feature = "serde")]
//! # {
//! use ulid_mono::Ulid;
//! # use serde_derive as serde;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Example {
//!     id: Ulid,
//!     data: String,
//! }
//!
//! let e1 = Example {
//!     id: Ulid::from_u128(0x0189_F43F_638C_E637_8CAE_4223_18BD_567E),
//!     data: "Hello, World!".to_string(),
//! };
//!
//! let s = serde_json::to_string(&e1)?;
//!
// cspell:disable-next-line
//! assert_eq!(s, r#"{"id":"01H7T3YRWCWRVRSBJ24CCBTNKY","data":"Hello, World!"}"#);
//!
//! let e2: Example = serde_json::from_str(&s)?;
//!
//! assert_eq!(e1, e2);
//! # }
//! # Ok(()) }
//! ```
//!
//! ## Feature Flags
//!
//! - **`rand`**: Utilizes the `rand` crate as the source for random numbers, enabled by default.
//! - **`serde`**: Provides support for serialization and deserialization via `Serde`, optional.
//! - **`uuid`**: Conversions from and to [`uuid::Uuid`](https://docs.rs/uuid), optional.
//! - **`tracing`**: Emits `tracing` events from the [`MonotonicGenerator`], optional.
//!

mod base32;
mod binary;
mod clock;
mod entropy;
mod error;
mod generator;
mod random;
#[cfg(feature = "serde")]
mod serde;
mod timestamp;
mod ulid;
mod util;

use std::borrow::Cow;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entropy::{Entropy, EntropyValue};
pub use error::Error;
pub use generator::MonotonicGenerator;
pub use random::RandomSource;
pub use timestamp::Timestamp;
pub use ulid::Ulid;

/// Number of bits in the timestamp part.
pub const TIMESTAMP_BITS: u32 = 48;
/// Largest timestamp in milliseconds.
pub const TIMESTAMP_MAX: u64 = (1 << TIMESTAMP_BITS) - 1;
/// Number of Base32 symbols of the timestamp part.
pub const TIMESTAMP_SYMBOLS: usize = 10;
/// Number of bytes of the timestamp part.
pub const TIMESTAMP_BYTES: usize = 6;

/// Number of bits in the entropy part.
pub const ENTROPY_BITS: u32 = 80;
/// Number of bits in each half of the entropy.
pub const ENTROPY_VALUE_BITS: u32 = 40;
/// Largest value of an [`EntropyValue`].
pub const ENTROPY_VALUE_MAX: u64 = (1 << ENTROPY_VALUE_BITS) - 1;
/// Number of Base32 symbols of the entropy part.
pub const ENTROPY_SYMBOLS: usize = 16;
/// Number of Base32 symbols of an [`EntropyValue`].
pub const ENTROPY_VALUE_SYMBOLS: usize = 8;
/// Number of bytes of the entropy part.
pub const ENTROPY_BYTES: usize = 10;
/// Number of bytes of an [`EntropyValue`].
pub const ENTROPY_VALUE_BYTES: usize = 5;

/// Length of a ULID string.
pub const ULID_LENGTH: usize = 26;
/// Length of a binary ULID.
pub const ULID_BYTES: usize = 16;

/// Canonicalizes a ULID string by converting it to a standard format.
///
/// Takes a ULID string and returns the canonicalized version:
/// Letters 'i', 'l', and 'o' are replaced by their corresponding digits '1' and `0`,
/// all characters are converted into uppercase, and the surplus bits of the first symbol are cleared.
///
/// If the input is already in canonical form, it returns a borrowed version of the input string
/// without allocating a new `String`.
///
/// # Errors
///
/// The string must have a length of 26 and contain only symbols that can be mapped to the alphabet.
/// Otherwise an error is returned.
///
/// # Example
///
/// ```
// cspell:disable-next-line
/// let s = "olixjazthsfjzt7wd6j8ir92vn";
///
// cspell:disable-next-line
/// assert_eq!(ulid_mono::canonicalize(s), Ok("011XJAZTHSFJZT7WD6J81R92VN".into()));
/// ```
pub fn canonicalize(ulid: &str) -> Result<Cow<str>, Error> {
    let mut buffer = util::ulid_text(ulid)?;
    let cleaned = base32::canonicalize(&mut buffer)?;

    if cleaned == ulid {
        Ok(ulid.into())
    } else {
        Ok(cleaned.to_string().into())
    }
}

/// Checks a ULID string for validity.
///
/// A valid ULID string has a length of 26 and contains only uppercase symbols of the alphabet.
/// This is exactly what [`str::parse()`] accepts. A leading symbol above `7` is valid,
/// its surplus bits are dropped on parsing.
///
/// # Errors
///
/// If the ULID string is not valid, an appropriate error is returned.
///
/// # Example
///
/// ```
/// use ulid_mono::Error;
///
// cspell:disable-next-line
/// assert!(ulid_mono::validate("011XJAZTHSFJZT7WD6J81R92VN").is_ok());
/// assert!(ulid_mono::validate("8ZZZZZZZZZZZZZZZZZZZZZZZZZ").is_ok());
///
// cspell:disable-next-line
/// assert_eq!(ulid_mono::validate("olixjazthsfjzt7wd6j8ir92vn"), Err(Error::InvalidCharacter { byte: b'o' }));
/// assert_eq!(ulid_mono::validate("xxxx"), Err(Error::InvalidLength { expected: 26, found: 4 }));
/// ```
pub fn validate(ulid: &str) -> Result<(), Error> {
    base32::validate(&util::ulid_text(ulid)?)
}

#[cfg(test)]
mod tests;
