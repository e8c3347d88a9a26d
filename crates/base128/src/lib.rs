//! Base128 variable-length integers.
//!
//! Each byte carries seven payload bits, least significant group first; bit 7 is set on
//! every byte except the last. Signed values are written as two's complement groups and
//! stop as soon as the remaining bits are pure sign extension, or can be mapped through
//! [`ZigZag`] first so that small magnitudes of either sign stay short.
//!
//! ```
//! use base128::{Varint, ZigZag};
//!
//! let (buf, len) = 300u32.encode();
//! assert_eq!(&buf[..len], &[0xAC, 0x02]);
//! assert_eq!(u32::read(&buf[..len]).unwrap(), (300, 2));
//! assert_eq!(ZigZag(-1i64).encoded_len(), 1);
//! ```
pub mod utils;
pub mod zigzag;
pub mod varint32;
pub mod varint64;
pub mod narrow;
mod skip;
mod varint;
mod io;

#[cfg(feature = "python")]
mod pyo3;

pub use utils::{Base128Error, OverflowCause};
pub use zigzag::ZigZag;
pub use varint::Varint;
pub use skip::try_skip;
pub use io::{Base128Read, Base128Write};

pub use varint32::{
    Decoder32,
    MAX_BYTES_32,
    try_write_u32, try_write_u32_min,
    try_write_i32, try_write_i32_min,
    try_write_i32_zigzag, try_write_i32_zigzag_min,
    try_read_u32, try_read_i32, try_read_i32_zigzag,
    read_u32_from, read_i32_from, read_i32_zigzag_from,
    required_bytes_u32, required_bytes_u32_portable, required_bytes_i32,
};

pub use varint64::{
    Decoder64,
    MAX_BYTES_64,
    try_write_u64, try_write_u64_min,
    try_write_i64, try_write_i64_min,
    try_write_i64_zigzag, try_write_i64_zigzag_min,
    try_read_u64, try_read_i64, try_read_i64_zigzag,
    read_u64_from, read_i64_from, read_i64_zigzag_from,
    required_bytes_u64, required_bytes_u64_portable, required_bytes_i64,
};
