use proptest::prelude::*;
use base128::{
    Varint, ZigZag, try_skip, zigzag,
    required_bytes_u32, required_bytes_u32_portable,
    required_bytes_u64, required_bytes_u64_portable,
    try_read_i32, try_read_i64, try_read_u64,
    try_write_i64_min,
};

fn roundtrip<T: Varint + PartialEq + std::fmt::Debug>(value: T) -> Result<(), TestCaseError> {
    let (buf, len) = value.encode();
    prop_assert_eq!(len, value.required_bytes());
    prop_assert!(len <= T::MAX_BYTES);
    prop_assert_eq!(T::read(&buf.as_ref()[..len]), Ok((value, len)));
    prop_assert_eq!(try_skip(&buf.as_ref()[..len]), Some(len));
    Ok(())
}

proptest! {
    #[test]
    fn roundtrip_u64(v in any::<u64>()) {
        roundtrip(v)?;
    }

    #[test]
    fn roundtrip_i64(v in any::<i64>()) {
        roundtrip(v)?;
        roundtrip(ZigZag(v))?;
    }

    #[test]
    fn roundtrip_32(u in any::<u32>(), i in any::<i32>()) {
        roundtrip(u)?;
        roundtrip(i)?;
        roundtrip(ZigZag(i))?;
    }

    #[test]
    fn roundtrip_narrow(a in any::<u8>(), b in any::<i8>(), c in any::<u16>(), d in any::<i16>()) {
        roundtrip(a)?;
        roundtrip(b)?;
        roundtrip(ZigZag(b))?;
        roundtrip(c)?;
        roundtrip(d)?;
        roundtrip(ZigZag(d))?;
    }

    #[test]
    fn fast_required_bytes_matches_portable(v in any::<u64>()) {
        prop_assert_eq!(required_bytes_u64(v), required_bytes_u64_portable(v));
        prop_assert_eq!(required_bytes_u32(v as u32), required_bytes_u32_portable(v as u32));
    }

    #[test]
    fn zigzag_is_a_bijection(v in any::<i64>(), w in any::<i32>()) {
        prop_assert_eq!(zigzag::decode_64(zigzag::encode_64(v)), v);
        prop_assert_eq!(zigzag::encode_64(zigzag::decode_64(v as u64)), v as u64);
        prop_assert_eq!(zigzag::decode_32(zigzag::encode_32(w)), w);
        // small magnitudes of either sign map to small codes
        prop_assert!(zigzag::encode_64(v) / 2 <= v.unsigned_abs());
    }

    #[test]
    fn narrow_agrees_with_wide(bytes in proptest::collection::vec(any::<u8>(), 0..8)) {
        // an i8 read succeeds exactly when the i32 read does and the value is in range
        let wide = try_read_i32(&bytes);
        let narrow = <i8 as Varint>::try_read(&bytes);
        match wide {
            Ok(Some((value, read))) => match i8::try_from(value) {
                Ok(value) => prop_assert_eq!(narrow, Ok(Some((value, read)))),
                Err(_) => prop_assert!(narrow.unwrap_err().is_overflow()),
            },
            Ok(None) => prop_assert_eq!(narrow, Ok(None)),
            Err(err) => prop_assert_eq!(narrow, Err(err)),
        }
    }

    #[test]
    fn padded_values_decode_unchanged(v in any::<i64>(), min_bytes in 1usize..=10) {
        let mut buf = [0u8; 10];
        let len = try_write_i64_min(&mut buf, v, min_bytes).unwrap().unwrap();
        prop_assert_eq!(len, v.required_bytes().max(min_bytes));
        prop_assert_eq!(try_read_i64(&buf[..len]), Ok(Some((v, len))));
    }

    #[test]
    fn skip_consumes_what_read_does(bytes in proptest::collection::vec(any::<u8>(), 0..16)) {
        if let Ok(Some((_, read))) = try_read_u64(&bytes) {
            prop_assert_eq!(try_skip(&bytes), Some(read));
        }
        // past ten continuation bytes the decoder reports overflow instead
        if try_skip(&bytes).is_none() && bytes.len() < 10 {
            prop_assert_eq!(try_read_u64(&bytes), Ok(None));
        }
    }
}
