use std::time::SystemTime;

/// Trait for sources of the current time.
///
/// A `Clock` yields milliseconds since the Unix epoch. [`SystemClock`] is used by default;
/// [`FixedClock`] always reports the same instant.
pub trait Clock {
    /// Returns the current timestamp in milliseconds since the Unix epoch.
    fn now_millis(&mut self) -> u64;
}

/// The system wall clock.
///
/// A system clock set before the Unix epoch reports `0`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&mut self) -> u64 {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .ok()
            .and_then(|since_epoch| u64::try_from(since_epoch.as_millis()).ok())
            .unwrap_or_default()
    }
}

/// A clock that is stuck at a given millisecond.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&mut self) -> u64 {
        self.0
    }
}
