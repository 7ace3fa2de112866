use crate::{
    base32, binary, Error, ENTROPY_BYTES, ENTROPY_SYMBOLS, ENTROPY_VALUE_BITS, ENTROPY_VALUE_BYTES,
    ENTROPY_VALUE_MAX, ENTROPY_VALUE_SYMBOLS,
};

/// One 40-bit half of the entropy.
///
/// Arithmetic on an `EntropyValue` wraps around at 2<sup>40</sup>.
#[derive(Default, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct EntropyValue(u64);

impl EntropyValue {
    /// All 40 bits cleared.
    pub const ZERO: Self = Self(0);

    /// All 40 bits set.
    pub const MAX: Self = Self(ENTROPY_VALUE_MAX);

    /// Creates a value, keeping only the low 40 bits of `value`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value & ENTROPY_VALUE_MAX)
    }

    /// Returns the value as an integer below `2^40`.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns `(self + 1) mod 2^40`.
    ///
    /// A result of [`EntropyValue::ZERO`] means the increment carried out.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// Returns `true` if all 40 bits are set.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == ENTROPY_VALUE_MAX
    }

    fn from_base32(symbols: &[u8]) -> Result<Self, Error> {
        Ok(Self::new(base32::decode(symbols)?))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self::new(binary::decode::<ENTROPY_VALUE_BYTES>(bytes)?))
    }
}

/// The 80-bit random part of a ULID.
///
/// Stored as two 40-bit halves, so that the logical value is `msb * 2^40 + lsb`.
/// Incrementing ripples a carry out of `lsb` into `msb`; a carry out of `msb` is lost.
///
/// # Example
///
/// ```
/// use ulid_mono::{Entropy, EntropyValue};
///
/// let entropy = Entropy::from_parts(EntropyValue::new(0), EntropyValue::MAX);
///
/// assert_eq!(entropy.increment(), Entropy::from_parts(EntropyValue::new(1), EntropyValue::ZERO));
/// ```
#[derive(Default, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entropy {
    msb: EntropyValue,
    lsb: EntropyValue,
}

impl Entropy {
    /// All 80 bits cleared.
    pub const ZERO: Self = Self::from_parts(EntropyValue::ZERO, EntropyValue::ZERO);

    /// All 80 bits set.
    pub const MAX: Self = Self::from_parts(EntropyValue::MAX, EntropyValue::MAX);

    /// Combines the most and least significant halves.
    #[must_use]
    pub const fn from_parts(msb: EntropyValue, lsb: EntropyValue) -> Self {
        Self { msb, lsb }
    }

    /// Reads 10 big-endian bytes, the first 5 being the most significant half.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidLength`] unless exactly 10 bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != ENTROPY_BYTES {
            return Err(Error::InvalidLength {
                expected: ENTROPY_BYTES,
                found: bytes.len(),
            });
        }

        let (msb, lsb) = bytes.split_at(ENTROPY_VALUE_BYTES);

        Ok(Self::from_parts(
            EntropyValue::from_bytes(msb)?,
            EntropyValue::from_bytes(lsb)?,
        ))
    }

    /// Decodes the 16 trailing symbols of a ULID string, 8 symbols per half.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidCharacter`] if a symbol is not in the ULID alphabet.
    pub fn from_base32(symbols: &[u8; ENTROPY_SYMBOLS]) -> Result<Self, Error> {
        let (msb, lsb) = symbols.split_at(ENTROPY_VALUE_SYMBOLS);

        Ok(Self::from_parts(
            EntropyValue::from_base32(msb)?,
            EntropyValue::from_base32(lsb)?,
        ))
    }

    /// The upper 40 bits, encoded as symbols 11 to 18 of a ULID string.
    #[must_use]
    pub const fn msb(self) -> EntropyValue {
        self.msb
    }

    /// The lower 40 bits, encoded as the last 8 symbols of a ULID string.
    #[must_use]
    pub const fn lsb(self) -> EntropyValue {
        self.lsb
    }

    /// Returns the entropy incremented by one, wrapping around to [`Entropy::ZERO`] after [`Entropy::MAX`].
    #[must_use]
    pub const fn increment(self) -> Self {
        let lsb = self.lsb.increment();

        let msb = if lsb.get() == 0 {
            self.msb.increment()
        } else {
            self.msb
        };

        Self { msb, lsb }
    }

    /// Tests if all 80 bits are set, i.e. whether another increment would wrap around.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.msb.is_full() && self.lsb.is_full()
    }

    /// Renders the entropy as 10 big-endian bytes.
    #[must_use]
    pub fn to_bytes(self) -> [u8; ENTROPY_BYTES] {
        let mut buffer = [0; ENTROPY_BYTES];
        let (msb, lsb) = buffer.split_at_mut(ENTROPY_VALUE_BYTES);
        msb.copy_from_slice(&binary::encode::<ENTROPY_VALUE_BYTES>(self.msb.get()));
        lsb.copy_from_slice(&binary::encode::<ENTROPY_VALUE_BYTES>(self.lsb.get()));
        buffer
    }

    /// Renders the entropy as 16 Base32 symbols.
    #[must_use]
    pub fn to_base32(self) -> [u8; ENTROPY_SYMBOLS] {
        let mut buffer = [0; ENTROPY_SYMBOLS];
        self.write_base32(&mut buffer);
        buffer
    }

    /// Returns the 80 bits as an integer.
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        ((self.msb.get() as u128) << ENTROPY_VALUE_BITS) | self.lsb.get() as u128
    }

    /// Creates the entropy from the low 80 bits of `n`.
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self::from_parts(
            EntropyValue::new((n >> ENTROPY_VALUE_BITS) as u64),
            EntropyValue::new(n as u64),
        )
    }

    pub(crate) fn write_base32(self, buffer: &mut [u8]) {
        debug_assert_eq!(buffer.len(), ENTROPY_SYMBOLS);
        let (msb, lsb) = buffer.split_at_mut(ENTROPY_VALUE_SYMBOLS);
        base32::encode(self.msb.get(), msb);
        base32::encode(self.lsb.get(), lsb);
    }
}

impl From<[u8; ENTROPY_BYTES]> for Entropy {
    fn from(bytes: [u8; ENTROPY_BYTES]) -> Self {
        Self::from_u128(bytes.iter().fold(0, |n, &byte| (n << 8) | u128::from(byte)))
    }
}

impl From<Entropy> for [u8; ENTROPY_BYTES] {
    fn from(entropy: Entropy) -> Self {
        entropy.to_bytes()
    }
}
