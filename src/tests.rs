use proptest::prelude::*;

use crate::*;

#[test]
const fn test_send_sync() {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}

    assert_send::<Ulid>();
    assert_sync::<Ulid>();

    assert_send::<MonotonicGenerator>();
    assert_sync::<MonotonicGenerator>();

    assert_send::<Error>();
    assert_sync::<Error>();
}

#[test]
fn test_string_round_trip() {
    // cspell:disable-next-line
    let s = "01BX5ZZKBKACTAV9WEVGEMMVRY";
    let u: Ulid = s.parse().unwrap();

    assert_eq!(u.to_string(), s);
    assert_eq!(u.as_str(), s);
}

#[test]
fn test_max_value() {
    let u: Ulid = "7ZZZZZZZZZZZZZZZZZZZZZZZZZ".parse().unwrap();

    assert_eq!(u.timestamp_ms(), (1 << 48) - 1);
    assert!(u.entropy().is_full());
    assert_eq!(u, Ulid::MAX);
}

#[test]
fn test_overflowing_first_symbol() {
    let u: Ulid = "8ZZZZZZZZZZZZZZZZZZZZZZZZZ".parse().unwrap();

    assert_eq!(u.as_str(), "0ZZZZZZZZZZZZZZZZZZZZZZZZZ");
    assert_eq!(u.timestamp_ms(), (1 << 45) - 1);

    assert_eq!(
        canonicalize("8ZZZZZZZZZZZZZZZZZZZZZZZZZ"),
        Ok("0ZZZZZZZZZZZZZZZZZZZZZZZZZ".into())
    );
}

#[test]
fn test_invalid_length() {
    assert_eq!("1".parse::<Ulid>(), Err(Error::InvalidLength { expected: 26, found: 1 }));
    assert_eq!("".parse::<Ulid>(), Err(Error::InvalidLength { expected: 26, found: 0 }));
    assert_eq!(
        "000000000000000000000000000".parse::<Ulid>(),
        Err(Error::InvalidLength { expected: 26, found: 27 })
    );
}

#[test]
fn test_invalid_character() {
    assert_eq!(
        "??????????????????????????".parse::<Ulid>(),
        Err(Error::InvalidCharacter { byte: b'?' })
    );

    // Excluded letters and lowercase are rejected by the parser.
    for c in ['I', 'L', 'O', 'U', 'a', 'z'] {
        let s = format!("0000000000000000000000000{c}");
        assert_eq!(s.parse::<Ulid>(), Err(Error::InvalidCharacter { byte: c as u8 }));
    }

    // 26 characters, 27 bytes.
    let s = "ä0000000000000000000000000";
    assert_eq!(s.parse::<Ulid>(), Err(Error::InvalidCharacter { byte: 0xC3 }));
    assert_eq!(validate(s), Err(Error::InvalidCharacter { byte: 0xC3 }));
    assert_eq!(canonicalize(s), Err(Error::InvalidCharacter { byte: 0xC3 }));

    // An earlier invalid symbol is reported first.
    assert_eq!(
        "?ä000000000000000000000000".parse::<Ulid>(),
        Err(Error::InvalidCharacter { byte: b'?' })
    );
}

#[test]
fn test_length_counts_characters() {
    // 25 characters, 26 bytes.
    let s = "ä000000000000000000000000";
    assert_eq!(s.len(), 26);

    let error = Error::InvalidLength { expected: 26, found: 25 };
    assert_eq!(s.parse::<Ulid>(), Err(error));
    assert_eq!(validate(s), Err(error));
    assert_eq!(canonicalize(s), Err(error));
}

#[test]
fn test_decode_example() {
    // cspell:disable-next-line
    let u: Ulid = "01H7PN3EH10123456789ABCDEF".parse().unwrap();

    assert_eq!(u.timestamp_ms(), 1_691_903_703_585);
    assert_eq!(u.entropy_bytes(), [0x00, 0x44, 0x32, 0x14, 0xC7, 0x42, 0x54, 0xB6, 0x35, 0xCF]);
    assert_eq!(u.entropy().msb(), EntropyValue::new(0x00_4432_14C7));
    assert_eq!(u.entropy().lsb(), EntropyValue::new(0x42_54B6_35CF));
}

#[test]
fn test_ordering() {
    let u1 = Ulid::from_parts(1, [0xFF; 10]);
    let u2 = Ulid::from_parts(2, [0x00; 10]);
    let u3 = Ulid::from_parts(2, [0x00, 0, 0, 0, 0, 0, 0, 0, 0, 1]);

    assert!(u1 < u2);
    assert!(u2 < u3);
    assert!(u1.as_str() < u2.as_str());
    assert!(u2.as_str() < u3.as_str());
}

#[test]
fn test_uuid_interop() {
    let n = 0x0189_F43F_638C_E637_8CAE_4223_18BD_567E_u128;
    let u = Ulid::from_u128(n);

    // cspell:disable-next-line
    assert_eq!(u.as_str(), "01H7T3YRWCWRVRSBJ24CCBTNKY");
    assert_eq!(u.to_u128(), n);
    assert_eq!(u.to_bytes(), n.to_be_bytes());
}

#[test]
fn test_generator_sequence() {
    // cspell:disable-next-line
    let mut generator = MonotonicGenerator::new("01BX5ZZKBKACTAV9WEVGEMMVRY".parse().unwrap());

    // cspell:disable-next-line
    assert_eq!(generator.generate().unwrap().as_str(), "01BX5ZZKBKACTAV9WEVGEMMVRZ");
    // cspell:disable-next-line
    assert_eq!(generator.generate().unwrap().as_str(), "01BX5ZZKBKACTAV9WEVGEMMVS0");
}

#[test]
fn test_generator_overflow() {
    // cspell:disable-next-line
    let mut generator = MonotonicGenerator::new("01BX5ZZKBKZZZZZZZZZZZZZZZY".parse().unwrap());

    // cspell:disable-next-line
    assert_eq!(generator.generate().unwrap().as_str(), "01BX5ZZKBKZZZZZZZZZZZZZZZZ");
    assert_eq!(generator.generate(), Err(Error::EntropyOverflow));
}

#[test]
fn test_generator_timestamp_override() {
    let mut generator = MonotonicGenerator::new(Ulid::from_parts(1000, [0; 10]));

    let u = generator.generate_at(2000).unwrap();
    assert_eq!(u.timestamp_ms(), 2000);
    assert_eq!(u.entropy().to_u128(), 1);

    let u = generator.generate().unwrap();
    assert_eq!(u.timestamp_ms(), 2000);
    assert_eq!(u.entropy().to_u128(), 2);
}

#[test]
fn test_canonicalize() {
    // cspell:disable-next-line
    let canonical = "01H7PN3EH10123456789ABCDEF";

    assert!(matches!(canonicalize(canonical), Ok(std::borrow::Cow::Borrowed(_))));
    // cspell:disable-next-line
    assert_eq!(canonicalize("0ih7pn3eh1o123456789abcdef"), Ok(canonical.into()));

    assert_eq!(
        canonicalize("0000000000000000000000000u"),
        Err(Error::InvalidCharacter { byte: b'u' })
    );
    assert_eq!(canonicalize("0"), Err(Error::InvalidLength { expected: 26, found: 1 }));
}

#[test]
fn test_validate() {
    assert_eq!(validate(Ulid::MIN.as_str()), Ok(()));
    assert_eq!(validate(Ulid::MAX.as_str()), Ok(()));
    assert_eq!(
        validate("0000000000000000000000000-"),
        Err(Error::InvalidCharacter { byte: b'-' })
    );
}

#[cfg(feature = "rand")]
#[test]
fn test_random_uniques() {
    let u1 = Ulid::random();
    let u2 = Ulid::random();

    assert_ne!(u1, u2);
}

fn ulid_string() -> impl Strategy<Value = String> {
    "[0-7][0-9A-HJKMNP-TV-Z]{25}"
}

proptest! {
    #[test]
    fn prop_string_round_trip(s in ulid_string()) {
        let u: Ulid = s.parse().unwrap();
        prop_assert_eq!(u.as_str(), s.as_str());
        let lower = s.to_lowercase();
        prop_assert_eq!(canonicalize(&lower), Ok(s.as_str().into()));
    }

    #[test]
    fn prop_binary_round_trip(bytes in any::<[u8; 16]>()) {
        let u = Ulid::from(bytes);
        prop_assert_eq!(u.to_bytes(), bytes);
        prop_assert_eq!(Ulid::from_u128(u.to_u128()), u);
        prop_assert_eq!(u.as_str().parse::<Ulid>(), Ok(u));
    }

    #[test]
    fn prop_timestamp_orders_first(
        t1 in 0..(1_u64 << 48),
        t2 in 0..(1_u64 << 48),
        e1 in any::<[u8; 10]>(),
        e2 in any::<[u8; 10]>(),
    ) {
        prop_assume!(t1 < t2);
        prop_assert!(Ulid::from_parts(t1, e1) < Ulid::from_parts(t2, e2));
    }

    #[test]
    fn prop_order_matches_integer(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(Ulid::from_u128(a).cmp(&Ulid::from_u128(b)), a.cmp(&b));
    }
}
