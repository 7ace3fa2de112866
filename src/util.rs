use std::fmt::{self, Formatter};

use crate::{Entropy, Error, Timestamp, ULID_LENGTH};

pub fn as_array<const N: usize>(bytes: &[u8]) -> Result<&[u8; N], Error> {
    bytes.try_into().or(Err(Error::InvalidLength {
        expected: N,
        found: bytes.len(),
    }))
}

/// Maps a ULID string onto its 26 symbol bytes.
///
/// The length is counted in characters. A non-ASCII character is stood in for by its
/// leading UTF-8 byte, which is never a valid symbol.
pub fn ulid_text(s: &str) -> Result<[u8; ULID_LENGTH], Error> {
    if s.is_ascii() {
        return as_array(s.as_bytes()).copied();
    }

    let found = s.chars().count();
    if found != ULID_LENGTH {
        return Err(Error::InvalidLength {
            expected: ULID_LENGTH,
            found,
        });
    }

    let mut text = [0; ULID_LENGTH];
    for (byte, c) in text.iter_mut().zip(s.chars()) {
        let mut utf8 = [0; 4];
        *byte = c.encode_utf8(&mut utf8).as_bytes()[0];
    }
    Ok(text)
}

pub fn debug_ulid(
    name: &str,
    string: &str,
    timestamp: Timestamp,
    entropy: Entropy,
    f: &mut Formatter<'_>,
) -> fmt::Result {
    struct Millis(u64);
    impl fmt::Debug for Millis {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "\"{ts}\"", ts = timestamp_to_string(self.0))
        }
    }

    struct Randomness(u128);
    impl fmt::Debug for Randomness {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "\"{:020X}\"", self.0)
        }
    }

    f.debug_struct(name)
        .field("string", &string)
        .field("timestamp", &Millis(timestamp.millis()))
        .field("entropy", &Randomness(entropy.to_u128()))
        .finish()
}

fn timestamp_to_string(millis: u64) -> String {
    const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

    let (days, millis) = (millis / MILLIS_PER_DAY, millis % MILLIS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    let (hours, millis) = (millis / 3_600_000, millis % 3_600_000);
    let (minutes, millis) = (millis / 60_000, millis % 60_000);
    let (seconds, millis) = (millis / 1000, millis % 1000);

    format!("{year:04}-{month:02}-{day:02}T{hours:02}:{minutes:02}:{seconds:02}.{millis:03}Z")
}

/// Converts days since 1970-01-01 into a proleptic Gregorian `(year, month, day)`.
///
/// Years are counted from March, so that the leap day is the last day of a year.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    const DAYS_PER_ERA: u64 = 146_097; // 400 years
    const DAYS_0000_03_01_TO_1970: u64 = 719_468;

    let days = days + DAYS_0000_03_01_TO_1970;
    let era = days / DAYS_PER_ERA;
    let day_of_era = days % DAYS_PER_ERA;

    let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);

    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 {
        month_from_march + 3
    } else {
        month_from_march - 9
    };
    let year = era * 400 + year_of_era + u64::from(month <= 2);

    (year, month, day)
}
