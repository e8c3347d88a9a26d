//! 32-bit varints: up to four full 7-bit groups followed by a terminal byte that may
//! only carry the four remaining bits.
use std::io::{self, Read};

use crate::io::pull;
use crate::utils::{fits_unsigned, is_sign_extended, padding, Base128Error};
use crate::zigzag;

/// Longest encoding of a 32-bit value.
pub const MAX_BYTES_32: usize = 5;

const FULL_GROUPS: usize = 4;
const TERMINAL_BITS: u32 = 32 - 7 * FULL_GROUPS as u32;

/* -------------------------------------------------------------------------- */
/*                                  encode                                    */
/* -------------------------------------------------------------------------- */

// `pad` is the index of the first byte allowed to terminate the value.
#[inline(always)]
fn emit_unsigned(destination: &mut [u8], mut value: u32, pad: usize) -> Option<usize> {
    for (idx, slot) in destination.iter_mut().enumerate() {
        if value & !0x7F == 0 && pad <= idx {
            *slot = value as u8;
            return Some(idx + 1);
        }
        *slot = (value & 0x7F) as u8 | 0x80;
        value >>= 7;
    }
    None
}

#[inline(always)]
fn emit_signed(destination: &mut [u8], mut value: i32, pad: usize) -> Option<usize> {
    // sign bit replicated over bits 6..32: 0 for positive values, -64 for negative ones
    let insignificant = (value & i32::MIN) >> 25;

    for (idx, slot) in destination.iter_mut().enumerate() {
        if value & !0x3F == insignificant && pad <= idx {
            *slot = (value & 0x7F) as u8;
            return Some(idx + 1);
        }
        *slot = (value & 0x7F) as u8 | 0x80;
        value >>= 7;
    }
    None
}

/// 32-bit counterpart of [`crate::varint64::try_write_u64`].
#[inline]
pub fn try_write_u32(destination: &mut [u8], value: u32) -> Option<usize> {
    emit_unsigned(destination, value, 0)
}

/// Like [`try_write_u32`] but keeps emitting continuation bytes until at least
/// `min_bytes` (1 to 5) bytes are written.
#[inline]
pub fn try_write_u32_min(
    destination: &mut [u8],
    value: u32,
    min_bytes: usize,
) -> Result<Option<usize>, Base128Error> {
    let pad = padding(min_bytes, MAX_BYTES_32)?;
    Ok(emit_unsigned(destination, value, pad))
}

#[inline]
pub fn try_write_i32(destination: &mut [u8], value: i32) -> Option<usize> {
    emit_signed(destination, value, 0)
}

#[inline]
pub fn try_write_i32_min(
    destination: &mut [u8],
    value: i32,
    min_bytes: usize,
) -> Result<Option<usize>, Base128Error> {
    let pad = padding(min_bytes, MAX_BYTES_32)?;
    Ok(emit_signed(destination, value, pad))
}

#[inline]
pub fn try_write_i32_zigzag(destination: &mut [u8], value: i32) -> Option<usize> {
    emit_unsigned(destination, zigzag::encode_32(value), 0)
}

#[inline]
pub fn try_write_i32_zigzag_min(
    destination: &mut [u8],
    value: i32,
    min_bytes: usize,
) -> Result<Option<usize>, Base128Error> {
    try_write_u32_min(destination, zigzag::encode_32(value), min_bytes)
}

/* -------------------------------------------------------------------------- */
/*                                  decode                                    */
/* -------------------------------------------------------------------------- */

/// Byte-at-a-time 32-bit decoder, see [`crate::varint64::Decoder64`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Decoder32 {
    acc: u32,
    read: usize,
}

impl Decoder32 {
    pub const fn new() -> Self {
        Self { acc: 0, read: 0 }
    }

    pub const fn read(&self) -> usize {
        self.read
    }

    #[inline(always)]
    fn shift_in(&mut self, byte: u8) {
        // the continuation bit lands past bit 31 and falls off
        self.acc = (self.acc >> 7) | (u32::from(byte) << 25);
        self.read += 1;
    }

    #[inline(always)]
    fn finish<T>(&mut self, value: T) -> Result<Option<T>, Base128Error> {
        *self = Self::new();
        Ok(Some(value))
    }

    #[inline(always)]
    fn overflow<T>(&mut self) -> Result<Option<T>, Base128Error> {
        let read = self.read + 1;
        *self = Self::new();
        Err(Base128Error::terminal_byte(32, read))
    }

    #[inline]
    pub fn feed_unsigned(&mut self, byte: u8) -> Result<Option<u32>, Base128Error> {
        if self.read < FULL_GROUPS {
            self.shift_in(byte);
            if byte & 0x80 == 0 {
                let value = self.acc >> (32 - 7 * self.read);
                return self.finish(value);
            }
            return Ok(None);
        }

        if !fits_unsigned(byte, TERMINAL_BITS) {
            return self.overflow();
        }
        let value = (self.acc >> TERMINAL_BITS) | (u32::from(byte) << 28);
        self.finish(value)
    }

    #[inline]
    pub fn feed_signed(&mut self, byte: u8) -> Result<Option<i32>, Base128Error> {
        if self.read < FULL_GROUPS {
            self.shift_in(byte);
            if byte & 0x80 == 0 {
                let value = (self.acc as i32) >> (32 - 7 * self.read);
                return self.finish(value);
            }
            return Ok(None);
        }

        if !is_sign_extended(byte, TERMINAL_BITS) {
            return self.overflow();
        }
        let value = ((self.acc >> TERMINAL_BITS) | (u32::from(byte) << 28)) as i32;
        self.finish(value)
    }
}

#[inline]
pub fn try_read_u32(source: &[u8]) -> Result<Option<(u32, usize)>, Base128Error> {
    let mut decoder = Decoder32::new();
    for (idx, &byte) in source.iter().enumerate() {
        if let Some(value) = decoder.feed_unsigned(byte)? {
            return Ok(Some((value, idx + 1)));
        }
    }
    Ok(None)
}

#[inline]
pub fn try_read_i32(source: &[u8]) -> Result<Option<(i32, usize)>, Base128Error> {
    let mut decoder = Decoder32::new();
    for (idx, &byte) in source.iter().enumerate() {
        if let Some(value) = decoder.feed_signed(byte)? {
            return Ok(Some((value, idx + 1)));
        }
    }
    Ok(None)
}

#[inline]
pub fn try_read_i32_zigzag(source: &[u8]) -> Result<Option<(i32, usize)>, Base128Error> {
    Ok(try_read_u32(source)?.map(|(value, read)| (zigzag::decode_32(value), read)))
}

pub fn read_u32_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<(u32, usize)> {
    let mut decoder = Decoder32::new();
    pull(reader, |byte| decoder.feed_unsigned(byte))
}

pub fn read_i32_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<(i32, usize)> {
    let mut decoder = Decoder32::new();
    pull(reader, |byte| decoder.feed_signed(byte))
}

pub fn read_i32_zigzag_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<(i32, usize)> {
    let (value, read) = read_u32_from(reader)?;
    Ok((zigzag::decode_32(value), read))
}

/* -------------------------------------------------------------------------- */
/*                              required bytes                                */
/* -------------------------------------------------------------------------- */

/// Number of bytes [`try_write_u32`] produces for `value`.
#[inline(always)]
pub const fn required_bytes_u32(value: u32) -> usize {
    (31 - (value | 1).leading_zeros() as usize) / 7 + 1
}

/// Shift-only reference for [`required_bytes_u32`].
pub const fn required_bytes_u32_portable(mut value: u32) -> usize {
    let mut required = 1;
    value >>= 7;
    while value != 0 {
        required += 1;
        value >>= 7;
    }
    required
}

/// Works for both the two's complement and the ZigZag encoding.
#[inline(always)]
pub const fn required_bytes_i32(value: i32) -> usize {
    required_bytes_u32(zigzag::encode_32(value))
}
