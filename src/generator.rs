use std::iter::FusedIterator;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Clock, Entropy, Error, Timestamp, Ulid};

/// A generator for strictly increasing ULIDs.
///
/// The generator keeps a cursor of timestamp and entropy, seeded from an initial [`Ulid`].
/// Each step increments the entropy by one and pairs it with either the stored timestamp or
/// a timestamp given by the caller. The first generated ULID is the seed plus one.
///
/// The generator never rolls over into the next millisecond on its own: once the entropy
/// has all 80 bits set, every further step fails with [`Error::EntropyOverflow`] until the
/// generator is [reseeded](MonotonicGenerator::reseed). The entropy is not reset when the
/// timestamp changes either.
///
/// A `MonotonicGenerator` is not synchronized. To share one between threads, put it
/// behind a [`Mutex`](std::sync::Mutex).
///
/// # Example
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use ulid_mono::{MonotonicGenerator, Ulid};
///
// cspell:disable-next-line
/// let seed: Ulid = "01BX5ZZKBKACTAV9WEVGEMMVRY".parse()?;
/// let mut generator = MonotonicGenerator::new(seed);
///
// cspell:disable-next-line
/// assert_eq!(generator.generate()?.to_string(), "01BX5ZZKBKACTAV9WEVGEMMVRZ");
// cspell:disable-next-line
/// assert_eq!(generator.generate()?.to_string(), "01BX5ZZKBKACTAV9WEVGEMMVS0");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct MonotonicGenerator {
    timestamp: Timestamp,
    entropy: Entropy,
}

impl MonotonicGenerator {
    /// Creates a generator that continues after `seed`.
    #[must_use]
    pub const fn new(seed: Ulid) -> Self {
        Self {
            timestamp: seed.timestamp(),
            entropy: seed.entropy(),
        }
    }

    /// Replaces the cursor with `seed`, e.g. after an [`Error::EntropyOverflow`].
    pub fn reseed(&mut self, seed: Ulid) {
        *self = Self::new(seed);
    }

    /// Returns the most recent ULID (or the seed) without advancing.
    #[must_use]
    pub fn peek(&self) -> Ulid {
        Ulid::new(self.timestamp, self.entropy)
    }

    /// Generates the next ULID with the stored timestamp.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EntropyOverflow`] if the entropy cannot be incremented any further.
    pub fn generate(&mut self) -> Result<Ulid, Error> {
        self.step(self.timestamp)
    }

    /// Generates the next ULID with the given timestamp in milliseconds.
    ///
    /// The timestamp is masked to 48 bits and becomes the stored timestamp for later calls.
    /// The result is only guaranteed to sort after previous ULIDs if `timestamp` is not
    /// smaller than the stored one.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EntropyOverflow`] if the entropy cannot be incremented any further.
    /// On failure the stored timestamp is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use ulid_mono::{MonotonicGenerator, Ulid};
    ///
    /// let mut generator = MonotonicGenerator::new(Ulid::MIN);
    ///
    /// let u1 = generator.generate_at(1000)?;
    /// let u2 = generator.generate_at(1001)?;
    ///
    /// assert_eq!(u1.timestamp_ms(), 1000);
    /// assert_eq!(u2.timestamp_ms(), 1001);
    /// assert_eq!(u2.entropy().to_u128(), 2);
    /// # Ok(()) }
    /// ```
    pub fn generate_at(&mut self, timestamp: u64) -> Result<Ulid, Error> {
        self.step(Timestamp::new(timestamp))
    }

    /// Generates the next ULID with the time read from `clock`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EntropyOverflow`] if the entropy cannot be incremented any further.
    pub fn generate_now(&mut self, clock: &mut impl Clock) -> Result<Ulid, Error> {
        self.generate_at(clock.now_millis())
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn step(&mut self, timestamp: Timestamp) -> Result<Ulid, Error> {
        if self.entropy.is_full() {
            #[cfg(feature = "tracing")]
            tracing::warn!(timestamp = timestamp.millis(), "ULID entropy exhausted");

            return Err(Error::EntropyOverflow);
        }

        self.entropy = self.entropy.increment();
        self.timestamp = timestamp;

        Ok(Ulid::new(self.timestamp, self.entropy))
    }
}

#[cfg(feature = "rand")]
impl Default for MonotonicGenerator {
    /// Creates a generator seeded with [`Ulid::random()`].
    fn default() -> Self {
        Self::new(Ulid::random())
    }
}

/// Yields ULIDs with the stored timestamp until the entropy overflows.
impl Iterator for MonotonicGenerator {
    type Item = Ulid;

    fn next(&mut self) -> Option<Self::Item> {
        self.generate().ok()
    }
}

impl FusedIterator for MonotonicGenerator {}
