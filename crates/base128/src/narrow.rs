//! 8 and 16-bit varints. They share the wire format of their 32-bit counterparts: writes
//! widen the value, reads decode 32 bits and range-check the result.
use std::io::{self, Read};

use crate::utils::Base128Error;
use crate::varint32::{
    read_i32_from, read_i32_zigzag_from, read_u32_from, required_bytes_i32, required_bytes_u32,
    try_read_i32, try_read_i32_zigzag, try_read_u32, try_write_i32, try_write_i32_min,
    try_write_i32_zigzag, try_write_i32_zigzag_min, try_write_u32, try_write_u32_min,
};

#[inline(always)]
fn fit<W, N>(value: W, read: usize) -> Result<N, Base128Error>
where
    N: TryFrom<W> + NarrowBits,
{
    N::try_from(value).map_err(|_| Base128Error::does_not_fit(N::BITS, read))
}

pub(crate) trait NarrowBits {
    const BITS: u32;
}

macro_rules! impl_narrow {
    (
        $ty:ident as $wide:ident {
            try_write: $try_write:ident => $wide_write:ident,
            try_write_min: $try_write_min:ident => $wide_write_min:ident,
            try_read: $try_read:ident => $wide_read:ident,
            read_from: $read_from:ident => $wide_read_from:ident,
            required_bytes: $required:ident => $wide_required:ident $(,)?
        }
    ) => {
        #[inline]
        pub fn $try_write(destination: &mut [u8], value: $ty) -> Option<usize> {
            $wide_write(destination, $wide::from(value))
        }

        #[inline]
        pub fn $try_write_min(
            destination: &mut [u8],
            value: $ty,
            min_bytes: usize,
        ) -> Result<Option<usize>, Base128Error> {
            $wide_write_min(destination, $wide::from(value), min_bytes)
        }

        #[inline]
        pub fn $try_read(source: &[u8]) -> Result<Option<($ty, usize)>, Base128Error> {
            match $wide_read(source)? {
                Some((value, read)) => Ok(Some((fit(value, read)?, read))),
                None => Ok(None),
            }
        }

        pub fn $read_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<($ty, usize)> {
            let (value, read) = $wide_read_from(reader)?;
            Ok((fit(value, read)?, read))
        }

        #[inline(always)]
        pub const fn $required(value: $ty) -> usize {
            $wide_required(value as $wide)
        }
    };
}

impl NarrowBits for u8 {
    const BITS: u32 = u8::BITS;
}
impl NarrowBits for i8 {
    const BITS: u32 = i8::BITS;
}
impl NarrowBits for u16 {
    const BITS: u32 = u16::BITS;
}
impl NarrowBits for i16 {
    const BITS: u32 = i16::BITS;
}

impl_narrow!(u8 as u32 {
    try_write: try_write_u8 => try_write_u32,
    try_write_min: try_write_u8_min => try_write_u32_min,
    try_read: try_read_u8 => try_read_u32,
    read_from: read_u8_from => read_u32_from,
    required_bytes: required_bytes_u8 => required_bytes_u32,
});

impl_narrow!(i8 as i32 {
    try_write: try_write_i8 => try_write_i32,
    try_write_min: try_write_i8_min => try_write_i32_min,
    try_read: try_read_i8 => try_read_i32,
    read_from: read_i8_from => read_i32_from,
    required_bytes: required_bytes_i8 => required_bytes_i32,
});

impl_narrow!(i8 as i32 {
    try_write: try_write_i8_zigzag => try_write_i32_zigzag,
    try_write_min: try_write_i8_zigzag_min => try_write_i32_zigzag_min,
    try_read: try_read_i8_zigzag => try_read_i32_zigzag,
    read_from: read_i8_zigzag_from => read_i32_zigzag_from,
    required_bytes: required_bytes_i8_zigzag => required_bytes_i32,
});

impl_narrow!(u16 as u32 {
    try_write: try_write_u16 => try_write_u32,
    try_write_min: try_write_u16_min => try_write_u32_min,
    try_read: try_read_u16 => try_read_u32,
    read_from: read_u16_from => read_u32_from,
    required_bytes: required_bytes_u16 => required_bytes_u32,
});

impl_narrow!(i16 as i32 {
    try_write: try_write_i16 => try_write_i32,
    try_write_min: try_write_i16_min => try_write_i32_min,
    try_read: try_read_i16 => try_read_i32,
    read_from: read_i16_from => read_i32_from,
    required_bytes: required_bytes_i16 => required_bytes_i32,
});

impl_narrow!(i16 as i32 {
    try_write: try_write_i16_zigzag => try_write_i32_zigzag,
    try_write_min: try_write_i16_zigzag_min => try_write_i32_zigzag_min,
    try_read: try_read_i16_zigzag => try_read_i32_zigzag,
    read_from: read_i16_zigzag_from => read_i32_zigzag_from,
    required_bytes: required_bytes_i16_zigzag => required_bytes_i32,
});
