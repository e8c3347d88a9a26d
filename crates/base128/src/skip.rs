/// Steps over one varint of any width without decoding it.
///
/// Returns the number of bytes the value occupies, or `None` when `source` ends before
/// the terminal byte. The magnitude is never checked, so a value too large for any
/// integer type is skipped all the same.
#[inline]
pub fn try_skip(source: &[u8]) -> Option<usize> {
    source
        .iter()
        .position(|&byte| byte & 0x80 == 0)
        .map(|idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::try_skip;
    use crate::varint64::try_read_u64;

    #[test]
    fn skips_single_value() {
        assert_eq!(try_skip(&[0x00]), Some(1));
        assert_eq!(try_skip(&[0xAC, 0x02]), Some(2));
        assert_eq!(try_skip(&[0xAC, 0x02, 0x7F, 0x80]), Some(2));
    }

    #[test]
    fn stops_on_the_byte_just_consumed() {
        // the terminal byte is the first one, the continuation byte after it belongs to
        // the next value
        assert_eq!(try_skip(&[0x01, 0x80]), Some(1));
        assert_eq!(try_skip(&[0x80, 0x01, 0x80, 0x80]), Some(2));
    }

    #[test]
    fn truncated_input() {
        assert_eq!(try_skip(&[]), None);
        assert_eq!(try_skip(&[0x80]), None);
        assert_eq!(try_skip(&[0xFF; 12]), None);
    }

    #[test]
    fn ignores_magnitude() {
        let oversized = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x02];
        assert!(try_read_u64(&oversized).is_err());
        assert_eq!(try_skip(&oversized), Some(10));

        let very_long = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E];
        assert_eq!(try_skip(&very_long), Some(11));
    }
}
