use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::{from_utf8_unchecked, FromStr},
    time::SystemTime,
};

use crate::{
    util, Clock, Entropy, Error, RandomSource, Timestamp, ENTROPY_BITS, ENTROPY_BYTES, TIMESTAMP_BYTES,
    TIMESTAMP_SYMBOLS, ULID_BYTES, ULID_LENGTH,
};

/// A Universally Unique Lexicographically Sortable Identifier.
///
/// A `Ulid` is an immutable pair of a 48-bit [`Timestamp`] and an 80-bit [`Entropy`].
/// The canonical 26 character string is rendered once on construction, and ordering,
/// equality and hashing are all defined on that string. Because the ULID alphabet is in
/// ascending order, comparing strings gives the same result as comparing the 128-bit values:
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use ulid_mono::Ulid;
///
// cspell:disable-next-line
/// let u1: Ulid = "01BX5ZZKBKACTAV9WEVGEMMVRY".parse()?;
// cspell:disable-next-line
/// let u2: Ulid = "01BX5ZZKBKACTAV9WEVGEMMVRZ".parse()?;
///
/// assert!(u1 < u2);
/// assert!(u1.to_u128() < u2.to_u128());
/// # Ok(()) }
/// ```
///
/// Parsing is strict: the string must consist of exactly 26 characters of the uppercase
/// alphabet `0123456789ABCDEFGHJKMNPQRSTVWXYZ`. Timestamps do not fit the 50 bits of the
/// leading 10 characters exactly; surplus bits of the first character are silently dropped:
///
/// ```
/// use ulid_mono::Ulid;
///
/// let u: Ulid = "8ZZZZZZZZZZZZZZZZZZZZZZZZZ".parse().unwrap();
///
/// assert_eq!(u.to_string(), "0ZZZZZZZZZZZZZZZZZZZZZZZZZ");
/// ```
#[derive(Clone, Copy)]
pub struct Ulid {
    text: [u8; ULID_LENGTH],
    timestamp: Timestamp,
    entropy: Entropy,
}

impl Ulid {
    /// The smallest [`Ulid`], `"00000000000000000000000000"`.
    pub const MIN: Self = Self {
        text: [b'0'; ULID_LENGTH],
        timestamp: Timestamp::MIN,
        entropy: Entropy::ZERO,
    };

    /// The largest [`Ulid`], `"7ZZZZZZZZZZZZZZZZZZZZZZZZZ"`.
    pub const MAX: Self = {
        let mut text = [b'Z'; ULID_LENGTH];
        text[0] = b'7';
        Self {
            text,
            timestamp: Timestamp::MAX,
            entropy: Entropy::MAX,
        }
    };

    /// Assembles a `Ulid` from its timestamp and entropy parts.
    ///
    /// # Example
    ///
    /// ```
    /// use ulid_mono::{Entropy, Timestamp, Ulid};
    ///
    /// let u = Ulid::new(Timestamp::new(1_691_903_703_585), Entropy::ZERO);
    ///
    /// assert_eq!(u.to_string(), "01H7PN3EH10000000000000000");
    /// ```
    #[must_use]
    pub fn new(timestamp: Timestamp, entropy: Entropy) -> Self {
        let mut text = [0; ULID_LENGTH];
        let (ts_text, entropy_text) = text.split_at_mut(TIMESTAMP_SYMBOLS);

        timestamp.write_base32(ts_text);
        entropy.write_base32(entropy_text);

        Self {
            text,
            timestamp,
            entropy,
        }
    }

    /// Creates a `Ulid` from a timestamp in milliseconds and 10 bytes of entropy.
    ///
    /// The timestamp is masked to 48 bits.
    #[must_use]
    pub fn from_parts(timestamp: u64, entropy: [u8; ENTROPY_BYTES]) -> Self {
        Self::new(Timestamp::new(timestamp), Entropy::from(entropy))
    }

    /// Generates a random `Ulid` for the current time.
    ///
    /// This uses the system clock and [`rand::thread_rng()`], and is only available
    /// with the `rand` feature. Consecutive calls are *not* monotonic; use a
    /// [`MonotonicGenerator`](crate::MonotonicGenerator) for that.
    ///
    /// # Example
    ///
    /// ```
    /// use ulid_mono::Ulid;
    ///
    /// let u = Ulid::random();
    ///
    /// assert!(u.timestamp_ms() > 1704067200000); // 1st January 2024
    /// ```
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut crate::SystemClock, &mut rand::thread_rng())
    }

    /// Generates a random `Ulid` for the given timestamp in milliseconds.
    ///
    /// Draws exactly 10 bytes from `source`. The timestamp is masked to 48 bits.
    #[must_use]
    pub fn random_at(timestamp: u64, source: &mut impl RandomSource) -> Self {
        let mut entropy = [0; ENTROPY_BYTES];
        source.fill_bytes(&mut entropy);
        Self::from_parts(timestamp, entropy)
    }

    /// Generates a random `Ulid` with the time read from `clock`.
    #[must_use]
    pub fn random_with(clock: &mut impl Clock, source: &mut impl RandomSource) -> Self {
        Self::random_at(clock.now_millis(), source)
    }

    /// Returns the timestamp part of a `Ulid` in milliseconds since the Unix epoch.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use ulid_mono::Ulid;
    ///
    // cspell:disable-next-line
    /// let u: Ulid = "01H7PN3EH10123456789ABCDEF".parse()?;
    ///
    /// assert_eq!(u.timestamp_ms(), 1691903703585);
    /// # Ok(()) }
    /// ```
    #[must_use]
    pub const fn timestamp_ms(&self) -> u64 {
        self.timestamp.millis()
    }

    /// Returns the timestamp part of a `Ulid`.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the random part of a `Ulid`, as incremented by the [`MonotonicGenerator`](crate::MonotonicGenerator).
    #[must_use]
    pub const fn entropy(&self) -> Entropy {
        self.entropy
    }

    /// Returns the 10 entropy bytes in network byte order (big endian).
    #[must_use]
    pub fn entropy_bytes(&self) -> [u8; ENTROPY_BYTES] {
        self.entropy.to_bytes()
    }

    /// Returns the timestamp part of a `Ulid` as a [`SystemTime`].
    ///
    /// Returns `None` if the timestamp cannot be represented by [`SystemTime`] on this platform.
    #[must_use]
    pub fn datetime(&self) -> Option<SystemTime> {
        self.timestamp.to_system_time()
    }

    /// Returns the canonical 26 character representation.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        // Safety: `text` only ever holds symbols of the ASCII alphabet.
        unsafe { from_utf8_unchecked(&self.text) }
    }

    /// Converts a `Ulid` into binary bytes.
    ///
    /// The bytes are in network byte order (big endian): 6 timestamp bytes followed by 10 entropy bytes.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use ulid_mono::Ulid;
    ///
    // cspell:disable-next-line
    /// let u: Ulid = "01H7T3YRWCWRVRSBJ24CCBTNKY".parse()?;
    ///
    /// assert_eq!(
    ///     u.to_bytes(),
    ///     [0x01, 0x89, 0xF4, 0x3F, 0x63, 0x8C, 0xE6, 0x37, 0x8C, 0xAE, 0x42, 0x23, 0x18, 0xBD, 0x56, 0x7E]
    /// );
    /// # Ok(()) }
    /// ```
    #[must_use]
    pub fn to_bytes(&self) -> [u8; ULID_BYTES] {
        self.to_u128().to_be_bytes()
    }

    /// Creates a `Ulid` from exactly 16 bytes in network byte order (big endian).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidLength`] if `bytes` is not 16 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = util::as_array::<ULID_BYTES>(bytes)?;
        let (timestamp, entropy) = bytes.split_at(TIMESTAMP_BYTES);

        Ok(Self::new(Timestamp::from_bytes(timestamp)?, Entropy::from_bytes(entropy)?))
    }

    /// Converts a `Ulid` into a `u128` integer.
    ///
    /// This is also the numeric value of the UUID with the same 16 bytes.
    #[must_use]
    pub const fn to_u128(&self) -> u128 {
        ((self.timestamp.millis() as u128) << ENTROPY_BITS) | self.entropy.to_u128()
    }

    /// Creates a `Ulid` from a `u128` integer.
    ///
    /// # Example
    ///
    /// ```
    /// use ulid_mono::Ulid;
    ///
    /// let u = Ulid::from_u128(0x0189_F43F_638C_E637_8CAE_4223_18BD_567E);
    ///
    // cspell:disable-next-line
    /// assert_eq!(u.to_string(), "01H7T3YRWCWRVRSBJ24CCBTNKY");
    /// ```
    #[must_use]
    pub fn from_u128(n: u128) -> Self {
        Self::new(Timestamp::new((n >> ENTROPY_BITS) as u64), Entropy::from_u128(n))
    }

    /// Reinterprets the 128 bits of a UUID as a `Ulid`.
    ///
    /// No field is transformed: the UUID's big-endian bytes become the ULID's bytes.
    /// This method is only available with the `uuid` feature.
    #[cfg(feature = "uuid")]
    #[must_use]
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self::from_u128(uuid.as_u128())
    }

    /// Reinterprets the 128 bits of a `Ulid` as a UUID.
    ///
    /// This method is only available with the `uuid` feature.
    #[cfg(feature = "uuid")]
    #[must_use]
    pub fn to_uuid(&self) -> uuid::Uuid {
        uuid::Uuid::from_u128(self.to_u128())
    }
}

impl Default for Ulid {
    fn default() -> Self {
        Self::MIN
    }
}

impl PartialEq for Ulid {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Ulid {}

impl PartialOrd for Ulid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ulid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Hash for Ulid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        util::debug_ulid("Ulid", self.as_str(), self.timestamp, self.entropy, f)
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ulid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = util::ulid_text(s)?;
        let (timestamp, entropy) = text.split_at(TIMESTAMP_SYMBOLS);

        let timestamp = Timestamp::from_base32(util::as_array(timestamp)?)?;
        let entropy = Entropy::from_base32(util::as_array(entropy)?)?;

        Ok(Self::new(timestamp, entropy))
    }
}

impl TryFrom<&str> for Ulid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl AsRef<str> for Ulid {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Ulid> for String {
    fn from(ulid: Ulid) -> Self {
        ulid.as_str().to_owned()
    }
}

impl From<Ulid> for u128 {
    fn from(ulid: Ulid) -> Self {
        ulid.to_u128()
    }
}

impl From<u128> for Ulid {
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl From<Ulid> for [u8; ULID_BYTES] {
    fn from(ulid: Ulid) -> Self {
        ulid.to_bytes()
    }
}

impl From<[u8; ULID_BYTES]> for Ulid {
    fn from(bytes: [u8; ULID_BYTES]) -> Self {
        Self::from_u128(u128::from_be_bytes(bytes))
    }
}

impl TryFrom<&[u8]> for Ulid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Ulid {
    fn from(uuid: uuid::Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

#[cfg(feature = "uuid")]
impl From<Ulid> for uuid::Uuid {
    fn from(ulid: Ulid) -> Self {
        ulid.to_uuid()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Sequence(u8);

    impl RandomSource for Sequence {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = self.0;
                self.0 = self.0.wrapping_add(1);
            }
        }
    }

    #[test]
    fn test_binary_layout() {
        let u = Ulid::random_at(0x0102_0304_0506, &mut Sequence(7));

        let expected: [u8; 16] = std::array::from_fn(|index| index as u8 + 1);
        assert_eq!(u.to_bytes(), expected);
        assert_eq!(u.entropy_bytes(), [7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(Ulid::from_bytes(&expected), Ok(u));
        assert_eq!(Ulid::from(expected), u);
    }

    #[test]
    fn test_from_bytes_length() {
        assert_eq!(
            Ulid::from_bytes(&[0; 15]),
            Err(Error::InvalidLength { expected: 16, found: 15 })
        );
        assert_eq!(
            Ulid::try_from(&[0; 17][..]),
            Err(Error::InvalidLength { expected: 16, found: 17 })
        );
    }

    #[test]
    fn test_random_at_masks_timestamp() {
        let u = Ulid::random_at((1 << 48) | 42, &mut Sequence(0));
        assert_eq!(u.timestamp_ms(), 42);
    }

    #[test]
    fn test_random_with_clock() {
        let u = Ulid::random_with(&mut crate::FixedClock(1_691_903_703_585), &mut Sequence(0));
        assert_eq!(u.timestamp_ms(), 1_691_903_703_585);
        assert!(u.as_str().starts_with("01H7PN3EH1"));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(Ulid::MIN, Ulid::from_u128(0));
        assert_eq!(Ulid::MAX, Ulid::from_u128(u128::MAX));
        assert_eq!(Ulid::MAX.as_str(), "7ZZZZZZZZZZZZZZZZZZZZZZZZZ");
        assert_eq!(Ulid::default(), Ulid::MIN);
    }

    #[test]
    fn test_u128() {
        let n = 0x0189_F43F_638C_E637_8CAE_4223_18BD_567E_u128;
        assert_eq!(Ulid::from_u128(n).to_u128(), n);
        assert_eq!(u128::from(Ulid::from(n)), n);
    }

    #[test]
    fn test_hash_follows_string() {
        let u1 = Ulid::from_u128(12345);
        let u2: Ulid = u1.to_string().parse().unwrap();

        let set: HashSet<Ulid> = [u1, u2].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_string_conversions() {
        let u = Ulid::from_u128(1);
        assert_eq!(String::from(u), "00000000000000000000000001");
        assert_eq!(u.as_ref(), "00000000000000000000000001");
        assert_eq!(Ulid::try_from("00000000000000000000000001"), Ok(u));
    }

    #[test]
    fn test_debug_fmt() {
        // cspell:disable-next-line
        let u: Ulid = "01H7PN3EH10123456789ABCDEF".parse().unwrap();

        assert_eq!(
            format!("{u:?}"),
            r#"Ulid { string: "01H7PN3EH10123456789ABCDEF", timestamp: "2023-08-13T05:15:03.585Z", entropy: "00443214C74254B635CF" }"# // cspell:disable-line
        );
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_uuid() {
        let uuid = uuid::Uuid::parse_str("0189F43F-638C-E637-8CAE-422318BD567E").unwrap();
        // cspell:disable-next-line
        let u: Ulid = "01H7T3YRWCWRVRSBJ24CCBTNKY".parse().unwrap();

        assert_eq!(u.to_uuid(), uuid);
        assert_eq!(Ulid::from_uuid(uuid), u);
        assert_eq!(uuid::Uuid::from(u), uuid);
        assert_eq!(Ulid::from(uuid), u);
    }
}
