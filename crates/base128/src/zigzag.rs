//! ZigZag transform: maps signed integers to unsigned ones so that values of small
//! magnitude, negative or positive, stay small (`0 → 0, -1 → 1, 1 → 2, -2 → 3, …`).
use core::fmt::{self, Debug, Display};

#[inline(always)]
pub const fn encode_32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

#[inline(always)]
pub const fn decode_32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

#[inline(always)]
pub const fn encode_64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline(always)]
pub const fn decode_64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Marks a signed value to be written ZigZag-encoded instead of two's complement.
///
/// ```
/// use base128::{Varint, ZigZag};
///
/// let (buf, len) = ZigZag(-1i64).encode();
/// assert_eq!(&buf[..len], &[0x01]);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ZigZag<T>(pub T);

impl<T> ZigZag<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Debug> Debug for ZigZag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ZigZag").field(&self.0).finish()
    }
}

impl<T: Display> Display for ZigZag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

macro_rules! zigzag_from {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for ZigZag<$ty> {
            #[inline]
            fn from(n: $ty) -> Self {
                Self(n)
            }
        }

        impl From<ZigZag<$ty>> for $ty {
            #[inline]
            fn from(n: ZigZag<$ty>) -> Self {
                n.0
            }
        }
    )*};
}

zigzag_from!(i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_interleave() {
        assert_eq!(encode_64(0), 0);
        assert_eq!(encode_64(-1), 1);
        assert_eq!(encode_64(1), 2);
        assert_eq!(encode_64(-2), 3);
        assert_eq!(encode_32(2), 4);
        assert_eq!(encode_32(-3), 5);
    }

    #[test]
    fn extremes() {
        assert_eq!(encode_64(i64::MAX), u64::MAX - 1);
        assert_eq!(encode_64(i64::MIN), u64::MAX);
        assert_eq!(encode_32(i32::MAX), u32::MAX - 1);
        assert_eq!(encode_32(i32::MIN), u32::MAX);

        assert_eq!(decode_64(u64::MAX), i64::MIN);
        assert_eq!(decode_64(u64::MAX - 1), i64::MAX);
        assert_eq!(decode_32(u32::MAX), i32::MIN);
        assert_eq!(decode_32(u32::MAX - 1), i32::MAX);
    }

    #[test]
    fn inverse() {
        for v in [0i64, 1, -1, 63, -64, 64, -65, i64::MAX, i64::MIN, 1 << 40, -(1 << 40)] {
            assert_eq!(decode_64(encode_64(v)), v);
        }
        for v in [0i32, 1, -1, 8191, -8192, i32::MAX, i32::MIN] {
            assert_eq!(decode_32(encode_32(v)), v);
        }
    }

    #[test]
    fn wrapper_conversions() {
        let z: ZigZag<i16> = (-5i16).into();
        assert_eq!(i16::from(z), -5);
        assert_eq!(z.into_inner(), -5);
        assert_eq!(format!("{z:?}"), "ZigZag(-5)");
        assert_eq!(z.to_string(), "-5");
    }
}
