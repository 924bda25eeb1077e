//! Small helpers for callers working with raw value content.

/// Interpret the first two bytes of `content` as a big-endian `u16`.
///
/// Returns `None` when fewer than two bytes are present. Bytes past the
/// second are ignored.
///
/// # Examples
///
/// ```
/// use snmp_decode::util::parse_u16;
///
/// assert_eq!(parse_u16(&[0x01, 0x02]), Some(0x0102));
/// assert_eq!(parse_u16(&[0xFF, 0xFF, 0x00]), Some(u16::MAX));
/// assert_eq!(parse_u16(&[0x01]), None);
/// ```
pub fn parse_u16(content: &[u8]) -> Option<u16> {
    match content {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}
