//! `Varint` – one trait over every supported width, allocation free.
use std::io::{self, Read};

use crate::narrow::*;
use crate::utils::Base128Error;
use crate::varint32::*;
use crate::varint64::*;
use crate::zigzag::ZigZag;

/// An integer type with a Base128 wire representation.
///
/// Implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`, `i64` (two's complement
/// groups) and for [`ZigZag`] wrapping the signed ones.
pub trait Varint: Copy + Sized {
    /// Longest encoding of any value of this type.
    const MAX_BYTES: usize;

    /// Stack buffer of `MAX_BYTES` bytes.
    type Buf: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn try_write(self, destination: &mut [u8]) -> Option<usize>;

    fn try_write_min(
        self,
        destination: &mut [u8],
        min_bytes: usize,
    ) -> Result<Option<usize>, Base128Error>;

    fn try_read(source: &[u8]) -> Result<Option<(Self, usize)>, Base128Error>;

    /// Pulls one value from `reader` byte by byte; returns it with the bytes consumed.
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<(Self, usize)>;

    fn required_bytes(self) -> usize;

    /// Like [`Varint::try_write`] but a short destination is an error.
    fn write(self, destination: &mut [u8]) -> Result<usize, Base128Error> {
        self.try_write(destination)
            .ok_or(Base128Error::BufferTooSmall {
                required: self.required_bytes(),
                available: destination.len(),
            })
    }

    fn write_min(self, destination: &mut [u8], min_bytes: usize) -> Result<usize, Base128Error> {
        self.try_write_min(destination, min_bytes)?
            .ok_or(Base128Error::BufferTooSmall {
                required: self.required_bytes().max(min_bytes),
                available: destination.len(),
            })
    }

    /// Like [`Varint::try_read`] but a truncated source is an error.
    fn read(source: &[u8]) -> Result<(Self, usize), Base128Error> {
        Self::try_read(source)?.ok_or(Base128Error::InsufficientInput {
            available: source.len(),
        })
    }

    /// Encode into a stack buffer; returns (buffer, length_used).
    #[inline]
    fn encode(self) -> (Self::Buf, usize) {
        let mut buf = Self::Buf::default();
        match self.try_write(buf.as_mut()) {
            Some(len) => (buf, len),
            None => unreachable!("{} bytes hold any varint of this width", Self::MAX_BYTES),
        }
    }

    #[inline]
    fn encoded_len(self) -> usize {
        self.required_bytes()
    }
}

macro_rules! impl_varint {
    ($( ($ty:ty, $max:expr, $try_write:ident, $try_write_min:ident, $try_read:ident, $read_from:ident, $required:ident) ),* $(,)?) => {$(
        impl Varint for $ty {
            const MAX_BYTES: usize = $max;
            type Buf = [u8; $max];

            #[inline]
            fn try_write(self, destination: &mut [u8]) -> Option<usize> {
                $try_write(destination, self)
            }

            #[inline]
            fn try_write_min(
                self,
                destination: &mut [u8],
                min_bytes: usize,
            ) -> Result<Option<usize>, Base128Error> {
                $try_write_min(destination, self, min_bytes)
            }

            #[inline]
            fn try_read(source: &[u8]) -> Result<Option<(Self, usize)>, Base128Error> {
                $try_read(source)
            }

            fn read_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<(Self, usize)> {
                $read_from(reader)
            }

            #[inline]
            fn required_bytes(self) -> usize {
                $required(self)
            }
        }
    )*};
}

macro_rules! impl_varint_zigzag {
    ($( ($ty:ty, $max:expr, $try_write:ident, $try_write_min:ident, $try_read:ident, $read_from:ident, $required:ident) ),* $(,)?) => {$(
        impl Varint for ZigZag<$ty> {
            const MAX_BYTES: usize = $max;
            type Buf = [u8; $max];

            #[inline]
            fn try_write(self, destination: &mut [u8]) -> Option<usize> {
                $try_write(destination, self.0)
            }

            #[inline]
            fn try_write_min(
                self,
                destination: &mut [u8],
                min_bytes: usize,
            ) -> Result<Option<usize>, Base128Error> {
                $try_write_min(destination, self.0, min_bytes)
            }

            #[inline]
            fn try_read(source: &[u8]) -> Result<Option<(Self, usize)>, Base128Error> {
                Ok($try_read(source)?.map(|(value, read)| (ZigZag(value), read)))
            }

            fn read_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<(Self, usize)> {
                let (value, read) = $read_from(reader)?;
                Ok((ZigZag(value), read))
            }

            #[inline]
            fn required_bytes(self) -> usize {
                $required(self.0)
            }
        }
    )*};
}

impl_varint!(
    (u64, MAX_BYTES_64, try_write_u64, try_write_u64_min, try_read_u64, read_u64_from, required_bytes_u64),
    (i64, MAX_BYTES_64, try_write_i64, try_write_i64_min, try_read_i64, read_i64_from, required_bytes_i64),
    (u32, MAX_BYTES_32, try_write_u32, try_write_u32_min, try_read_u32, read_u32_from, required_bytes_u32),
    (i32, MAX_BYTES_32, try_write_i32, try_write_i32_min, try_read_i32, read_i32_from, required_bytes_i32),
    (u16, MAX_BYTES_32, try_write_u16, try_write_u16_min, try_read_u16, read_u16_from, required_bytes_u16),
    (i16, MAX_BYTES_32, try_write_i16, try_write_i16_min, try_read_i16, read_i16_from, required_bytes_i16),
    (u8, MAX_BYTES_32, try_write_u8, try_write_u8_min, try_read_u8, read_u8_from, required_bytes_u8),
    (i8, MAX_BYTES_32, try_write_i8, try_write_i8_min, try_read_i8, read_i8_from, required_bytes_i8),
);

impl_varint_zigzag!(
    (i64, MAX_BYTES_64, try_write_i64_zigzag, try_write_i64_zigzag_min, try_read_i64_zigzag, read_i64_zigzag_from, required_bytes_i64),
    (i32, MAX_BYTES_32, try_write_i32_zigzag, try_write_i32_zigzag_min, try_read_i32_zigzag, read_i32_zigzag_from, required_bytes_i32),
    (i16, MAX_BYTES_32, try_write_i16_zigzag, try_write_i16_zigzag_min, try_read_i16_zigzag, read_i16_zigzag_from, required_bytes_i16_zigzag),
    (i8, MAX_BYTES_32, try_write_i8_zigzag, try_write_i8_zigzag_min, try_read_i8_zigzag, read_i8_zigzag_from, required_bytes_i8_zigzag),
);
