//! 64-bit varints: up to nine full 7-bit groups followed by a terminal byte that may
//! only carry the one remaining bit.
use std::io::{self, Read};

use crate::io::pull;
use crate::utils::{fits_unsigned, is_sign_extended, padding, Base128Error};
use crate::zigzag;

/// Longest encoding of a 64-bit value.
pub const MAX_BYTES_64: usize = 10;

const FULL_GROUPS: usize = 9;
const TERMINAL_BITS: u32 = 64 - 7 * FULL_GROUPS as u32;

/* -------------------------------------------------------------------------- */
/*                                  encode                                    */
/* -------------------------------------------------------------------------- */

// `pad` is the index of the first byte allowed to terminate the value.
#[inline(always)]
fn emit_unsigned(destination: &mut [u8], mut value: u64, pad: usize) -> Option<usize> {
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
fn emit_signed(destination: &mut [u8], mut value: i64, pad: usize) -> Option<usize> {
    // sign bit replicated over bits 6..64: 0 for positive values, -64 for negative ones
    let insignificant = (value & i64::MIN) >> 57;

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

/// Writes `value` and returns the number of bytes used, or `None` when `destination` is
/// too short. After a `None` the contents of `destination` are unspecified.
#[inline]
pub fn try_write_u64(destination: &mut [u8], value: u64) -> Option<usize> {
    emit_unsigned(destination, value, 0)
}

/// Like [`try_write_u64`] but keeps emitting continuation bytes until at least
/// `min_bytes` (1 to 10) bytes are written.
#[inline]
pub fn try_write_u64_min(
    destination: &mut [u8],
    value: u64,
    min_bytes: usize,
) -> Result<Option<usize>, Base128Error> {
    let pad = padding(min_bytes, MAX_BYTES_64)?;
    Ok(emit_unsigned(destination, value, pad))
}

#[inline]
pub fn try_write_i64(destination: &mut [u8], value: i64) -> Option<usize> {
    emit_signed(destination, value, 0)
}

#[inline]
pub fn try_write_i64_min(
    destination: &mut [u8],
    value: i64,
    min_bytes: usize,
) -> Result<Option<usize>, Base128Error> {
    let pad = padding(min_bytes, MAX_BYTES_64)?;
    Ok(emit_signed(destination, value, pad))
}

#[inline]
pub fn try_write_i64_zigzag(destination: &mut [u8], value: i64) -> Option<usize> {
    emit_unsigned(destination, zigzag::encode_64(value), 0)
}

#[inline]
pub fn try_write_i64_zigzag_min(
    destination: &mut [u8],
    value: i64,
    min_bytes: usize,
) -> Result<Option<usize>, Base128Error> {
    try_write_u64_min(destination, zigzag::encode_64(value), min_bytes)
}

/* -------------------------------------------------------------------------- */
/*                                  decode                                    */
/* -------------------------------------------------------------------------- */

/// Byte-at-a-time decoder shared by the slice and stream entry points.
///
/// Every byte is shifted in at the top of the accumulator, so after `n` groups the value
/// sits in the upper `7 * n` bits and a single final shift aligns it. The decoder resets
/// itself once it yields a value or an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Decoder64 {
    acc: u64,
    read: usize,
}

impl Decoder64 {
    pub const fn new() -> Self {
        Self { acc: 0, read: 0 }
    }

    /// Bytes fed since the last value was produced.
    pub const fn read(&self) -> usize {
        self.read
    }

    #[inline(always)]
    fn shift_in(&mut self, byte: u8) {
        // the continuation bit lands past bit 63 and falls off
        self.acc = (self.acc >> 7) | (u64::from(byte) << 57);
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
        Err(Base128Error::terminal_byte(64, read))
    }

    #[inline]
    pub fn feed_unsigned(&mut self, byte: u8) -> Result<Option<u64>, Base128Error> {
        if self.read < FULL_GROUPS {
            self.shift_in(byte);
            if byte & 0x80 == 0 {
                let value = self.acc >> (64 - 7 * self.read);
                return self.finish(value);
            }
            return Ok(None);
        }

        if !fits_unsigned(byte, TERMINAL_BITS) {
            return self.overflow();
        }
        let value = (self.acc >> 1) | (u64::from(byte) << 63);
        self.finish(value)
    }

    #[inline]
    pub fn feed_signed(&mut self, byte: u8) -> Result<Option<i64>, Base128Error> {
        if self.read < FULL_GROUPS {
            self.shift_in(byte);
            if byte & 0x80 == 0 {
                let value = (self.acc as i64) >> (64 - 7 * self.read);
                return self.finish(value);
            }
            return Ok(None);
        }

        if !is_sign_extended(byte, TERMINAL_BITS) {
            return self.overflow();
        }
        let value = ((self.acc >> 1) | (u64::from(byte) << 63)) as i64;
        self.finish(value)
    }
}

/// Reads one value from the front of `source`.
///
/// Returns `Ok(None)` when `source` ends before the terminal byte and
/// [`Base128Error::Overflow`] when the value does not fit into 64 bits.
#[inline]
pub fn try_read_u64(source: &[u8]) -> Result<Option<(u64, usize)>, Base128Error> {
    let mut decoder = Decoder64::new();
    for (idx, &byte) in source.iter().enumerate() {
        if let Some(value) = decoder.feed_unsigned(byte)? {
            return Ok(Some((value, idx + 1)));
        }
    }
    Ok(None)
}

#[inline]
pub fn try_read_i64(source: &[u8]) -> Result<Option<(i64, usize)>, Base128Error> {
    let mut decoder = Decoder64::new();
    for (idx, &byte) in source.iter().enumerate() {
        if let Some(value) = decoder.feed_signed(byte)? {
            return Ok(Some((value, idx + 1)));
        }
    }
    Ok(None)
}

#[inline]
pub fn try_read_i64_zigzag(source: &[u8]) -> Result<Option<(i64, usize)>, Base128Error> {
    Ok(try_read_u64(source)?.map(|(value, read)| (zigzag::decode_64(value), read)))
}

pub fn read_u64_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<(u64, usize)> {
    let mut decoder = Decoder64::new();
    pull(reader, |byte| decoder.feed_unsigned(byte))
}

pub fn read_i64_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<(i64, usize)> {
    let mut decoder = Decoder64::new();
    pull(reader, |byte| decoder.feed_signed(byte))
}

pub fn read_i64_zigzag_from<R: Read + ?Sized>(reader: &mut R) -> io::Result<(i64, usize)> {
    let (value, read) = read_u64_from(reader)?;
    Ok((zigzag::decode_64(value), read))
}

/* -------------------------------------------------------------------------- */
/*                              required bytes                                */
/* -------------------------------------------------------------------------- */

/// Number of bytes [`try_write_u64`] produces for `value`.
#[inline(always)]
pub const fn required_bytes_u64(value: u64) -> usize {
    (63 - (value | 1).leading_zeros() as usize) / 7 + 1
}

/// Reference implementation of [`required_bytes_u64`] that only shifts.
pub const fn required_bytes_u64_portable(mut value: u64) -> usize {
    let mut required = 1;
    value >>= 7;
    while value != 0 {
        required += 1;
        value >>= 7;
    }
    required
}

/// Number of bytes [`try_write_i64`] (and [`try_write_i64_zigzag`]) produces for `value`.
///
/// Two's complement and ZigZag need the same number of significant bits, so this is the
/// unsigned count of the ZigZag value.
#[inline(always)]
pub const fn required_bytes_i64(value: i64) -> usize {
    required_bytes_u64(zigzag::encode_64(value))
}
