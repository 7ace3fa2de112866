#[cfg(feature = "rand")]
use rand::RngCore;

/// Trait for sources of random bytes.
///
/// The entropy of a ULID is drawn from a `RandomSource`. With the `rand` feature enabled
/// every [`rand::RngCore`] is a `RandomSource`, and [`rand::thread_rng()`] is used by default.
/// Sources are expected to be cryptographically secure, but any implementation may be
/// injected, e.g. a fixed one for deterministic tests:
///
/// ```
/// use ulid_mono::{RandomSource, Ulid};
///
/// struct Zeros;
///
/// impl RandomSource for Zeros {
///     fn fill_bytes(&mut self, dest: &mut [u8]) {
///         dest.fill(0);
///     }
/// }
///
/// let u = Ulid::random_at(0, &mut Zeros);
///
/// assert_eq!(u.to_string(), "00000000000000000000000000");
/// ```
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

#[cfg(feature = "rand")]
impl<R: RngCore> RandomSource for R {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RngCore::fill_bytes(self, dest);
    }
}
