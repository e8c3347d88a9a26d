use std::io;

#[macro_export]
#[cfg(feature = "debug")]
macro_rules! debug_log {
    ($($args:tt)*) => {{
        println!("{}", format_args!($($args)*));
    }};
}

#[macro_export]
#[cfg(not(feature = "debug"))]
macro_rules! debug_log {
    ($($args:tt)*) => {{}};
}

/// Why a complete varint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowCause {
    /// The terminal byte carries bits beyond the target width.
    TerminalByte,
    /// The value decoded fine as 32-bit but is out of range for a narrower type.
    DoesNotFit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Base128Error {
    #[error("value is too big or too small for a {bits}-bit integer ({cause:?} after {read} bytes)")]
    Overflow {
        bits: u32,
        read: usize,
        cause: OverflowCause,
    },

    #[error("source ended after {available} bytes, before the terminal byte")]
    InsufficientInput { available: usize },

    #[error("destination holds {available} bytes but {required} are required")]
    BufferTooSmall { required: usize, available: usize },

    #[error("min_bytes must be between 1 and {max}, got {min_bytes}")]
    InvalidArgument { min_bytes: usize, max: usize },
}

impl Base128Error {
    pub(crate) const fn terminal_byte(bits: u32, read: usize) -> Self {
        Self::Overflow {
            bits,
            read,
            cause: OverflowCause::TerminalByte,
        }
    }

    pub(crate) const fn does_not_fit(bits: u32, read: usize) -> Self {
        Self::Overflow {
            bits,
            read,
            cause: OverflowCause::DoesNotFit,
        }
    }

    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}

impl From<Base128Error> for io::Error {
    fn from(err: Base128Error) -> Self {
        let kind = match err {
            Base128Error::InsufficientInput { .. } => io::ErrorKind::UnexpectedEof,
            Base128Error::Overflow { .. } => io::ErrorKind::InvalidData,
            Base128Error::BufferTooSmall { .. } => io::ErrorKind::WriteZero,
            Base128Error::InvalidArgument { .. } => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}

/// Validates `min_bytes` and turns it into the index of the first byte allowed to be terminal.
#[inline]
pub(crate) const fn padding(min_bytes: usize, max: usize) -> Result<usize, Base128Error> {
    if min_bytes == 0 || min_bytes > max {
        return Err(Base128Error::InvalidArgument { min_bytes, max });
    }
    Ok(min_bytes - 1)
}

/// True when bits `significant..7` of `byte` replicate bit `significant - 1` and the
/// continuation bit is clear, i.e. `byte` is a valid signed terminal byte.
#[inline(always)]
pub(crate) const fn is_sign_extended(byte: u8, significant: u32) -> bool {
    let shift = 8 - significant;
    let extended = (((byte << shift) as i8) >> shift) as u8 & 0x7F;
    extended == byte
}

/// True when `byte` only uses its low `significant` bits.
#[inline(always)]
pub(crate) const fn fits_unsigned(byte: u8, significant: u32) -> bool {
    byte >> significant == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_bounds() {
        assert_eq!(padding(1, 5), Ok(0));
        assert_eq!(padding(5, 5), Ok(4));
        assert_eq!(
            padding(0, 5),
            Err(Base128Error::InvalidArgument { min_bytes: 0, max: 5 })
        );
        assert_eq!(
            padding(11, 10),
            Err(Base128Error::InvalidArgument { min_bytes: 11, max: 10 })
        );
    }

    #[test]
    fn sign_extension_of_terminal_bytes() {
        // 64-bit terminal byte: one significant bit
        assert!(is_sign_extended(0x00, 1));
        assert!(is_sign_extended(0x7F, 1));
        assert!(!is_sign_extended(0x01, 1));
        assert!(!is_sign_extended(0x7E, 1));
        assert!(!is_sign_extended(0x80, 1));

        // 32-bit terminal byte: four significant bits
        assert!(is_sign_extended(0x07, 4));
        assert!(is_sign_extended(0x78, 4));
        assert!(is_sign_extended(0x7F, 4));
        assert!(!is_sign_extended(0x08, 4));
        assert!(!is_sign_extended(0x70, 4));
        assert!(!is_sign_extended(0x10, 4));
    }

    #[test]
    fn unsigned_terminal_bytes() {
        assert!(fits_unsigned(0x01, 1));
        assert!(!fits_unsigned(0x02, 1));
        assert!(fits_unsigned(0x0F, 4));
        assert!(!fits_unsigned(0x10, 4));
    }

    #[test]
    fn errors_map_to_io_kinds() {
        let err: io::Error = Base128Error::terminal_byte(64, 10).into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        let err: io::Error = Base128Error::InsufficientInput { available: 3 }.into();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
