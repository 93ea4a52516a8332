/// Decodes a record string field.
///
/// Characters are taken from the start of `bytes` up to, not including, the first
/// byte outside the inclusive range 32..=127. This is not NUL-specific: any control
/// or high byte ends the string, and everything after it is discarded.
///
/// ```
/// use miff_container::read_truncated_string;
///
/// assert_eq!(read_truncated_string(b"TEX_DOOR\0\0"), "TEX_DOOR");
/// assert_eq!(read_truncated_string(b"ab\ncd"), "ab");
/// ```
pub fn read_truncated_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| (32..=127).contains(&b))
        .map(|&b| char::from(b))
        .collect()
}
