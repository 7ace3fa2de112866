use std::time::{Duration, SystemTime};

use crate::{base32, binary, Error, TIMESTAMP_BYTES, TIMESTAMP_MAX, TIMESTAMP_SYMBOLS};

/// The 48-bit timestamp part of a ULID.
///
/// Measured in milliseconds since the Unix epoch (1. January 1970).
/// Values wider than 48 bits are masked, never rejected:
///
/// ```
/// use ulid_mono::Timestamp;
///
/// assert_eq!(Timestamp::new(1 << 48).millis(), 0);
/// assert_eq!(Timestamp::new((1 << 48) + 5).millis(), 5);
/// ```
#[derive(Default, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The Unix epoch.
    pub const MIN: Self = Self(0);

    /// The last representable millisecond, somewhere in the year 10889.
    pub const MAX: Self = Self(TIMESTAMP_MAX);

    /// Creates a timestamp, keeping only the low 48 bits of `millis`.
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self(millis & TIMESTAMP_MAX)
    }

    /// Decodes the 10 leading symbols of a ULID string.
    ///
    /// Ten symbols carry 50 bits. The two surplus bits of the leading symbol are masked off,
    /// so `"8000000000"` decodes to the same timestamp as `"0000000000"`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidCharacter`] if a symbol is not in the ULID alphabet.
    pub fn from_base32(symbols: &[u8; TIMESTAMP_SYMBOLS]) -> Result<Self, Error> {
        Ok(Self::new(base32::decode(symbols)?))
    }

    /// Reads 6 big-endian bytes.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidLength`] unless exactly 6 bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self::new(binary::decode::<TIMESTAMP_BYTES>(bytes)?))
    }

    /// Returns the milliseconds since the Unix epoch.
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }

    /// Renders the timestamp as 10 Base32 symbols.
    #[must_use]
    pub fn to_base32(self) -> [u8; TIMESTAMP_SYMBOLS] {
        let mut buffer = [0; TIMESTAMP_SYMBOLS];
        self.write_base32(&mut buffer);
        buffer
    }

    /// Renders the timestamp as 6 big-endian bytes.
    #[must_use]
    pub fn to_bytes(self) -> [u8; TIMESTAMP_BYTES] {
        binary::encode(self.0)
    }

    /// Returns the timestamp as a [`SystemTime`].
    ///
    /// Returns `None` if the platform cannot represent the point in time.
    #[must_use]
    pub fn to_system_time(self) -> Option<SystemTime> {
        SystemTime::UNIX_EPOCH.checked_add(Duration::from_millis(self.0))
    }

    pub(crate) fn write_base32(self, buffer: &mut [u8]) {
        debug_assert_eq!(buffer.len(), TIMESTAMP_SYMBOLS);
        base32::encode(self.0, buffer);
    }
}

impl From<u64> for Timestamp {
    fn from(millis: u64) -> Self {
        Self::new(millis)
    }
}

impl From<Timestamp> for u64 {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.millis()
    }
}
