//! Sequential stream adapters over [`std::io::Read`] and [`std::io::Write`].
//!
//! Writes encode into a fixed stack buffer and copy the used prefix to the stream. Reads
//! pull one byte at a time into the same decoder the slice API uses.
use std::io::{self, Read, Write};

use crate::debug_log;
use crate::utils::Base128Error;
use crate::varint::Varint;

#[inline(always)]
fn next_byte<R: Read + ?Sized>(reader: &mut R) -> io::Result<u8> {
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// Consumes the rest of a value whose terminal byte has not been seen yet.
fn drain<R: Read + ?Sized>(reader: &mut R) -> io::Result<usize> {
    let mut drained = 0;
    loop {
        let byte = next_byte(reader)?;
        drained += 1;
        if byte & 0x80 == 0 {
            return Ok(drained);
        }
    }
}

/// Drives `feed` with bytes from `reader` until it yields a value.
///
/// On overflow the remainder of the malformed value is consumed first so the stream is
/// left just past it; running out of input at any point is `UnexpectedEof`.
pub(crate) fn pull<R, T, F>(reader: &mut R, mut feed: F) -> io::Result<(T, usize)>
where
    R: Read + ?Sized,
    F: FnMut(u8) -> Result<Option<T>, Base128Error>,
{
    let mut read = 0;
    loop {
        let byte = next_byte(reader)?;
        read += 1;
        match feed(byte) {
            Ok(Some(value)) => return Ok((value, read)),
            Ok(None) => (),
            Err(err) => {
                if byte & 0x80 != 0 {
                    let _drained = drain(reader)?;
                    debug_log!("base128: drained {} bytes of oversized value", _drained);
                }
                return Err(err.into());
            }
        }
    }
}

pub trait Base128Read: Read {
    /// Reads one varint of type `T`.
    ///
    /// ```
    /// use base128::{Base128Read, ZigZag};
    ///
    /// let mut input: &[u8] = &[0xAC, 0x02, 0x03];
    /// assert_eq!(input.read_varint::<u32>().unwrap(), 300);
    /// assert_eq!(input.read_varint::<ZigZag<i8>>().unwrap(), ZigZag(-2));
    /// ```
    fn read_varint<T: Varint>(&mut self) -> io::Result<T> {
        T::read_from(self).map(|(value, _)| value)
    }

    /// Consumes one varint without decoding it and returns its length.
    fn skip_varint(&mut self) -> io::Result<usize> {
        drain(self)
    }
}

impl<R: Read + ?Sized> Base128Read for R {}

pub trait Base128Write: Write {
    /// Writes `value` and returns the number of bytes it took.
    fn write_varint<T: Varint>(&mut self, value: T) -> io::Result<usize> {
        let (buf, len) = value.encode();
        self.write_all(&buf.as_ref()[..len])?;
        Ok(len)
    }

    /// Writes `value` padded to at least `min_bytes` bytes.
    fn write_varint_min<T: Varint>(&mut self, value: T, min_bytes: usize) -> io::Result<usize> {
        let mut buf = T::Buf::default();
        let len = value.write_min(buf.as_mut(), min_bytes)?;
        self.write_all(&buf.as_ref()[..len])?;
        Ok(len)
    }
}

impl<W: Write + ?Sized> Base128Write for W {}
