//! String helpers for fixed-capacity setting buffers.
//!
//! String-like settings declare a buffer `size` that counts a terminator
//! slot, so a buffer of `size` bytes holds at most `size - 1` bytes of text.

/// Returns the longest prefix of `s` that fits a buffer of `size` bytes.
///
/// The cut never splits a UTF-8 sequence; if the byte limit falls inside a
/// multi-byte character, that character is dropped entirely.
///
/// # Examples
///
/// ```
/// use novade_settings::utils::string_utils::truncate_to_size;
///
/// assert_eq!(truncate_to_size("overlay", 8), "overlay");
/// assert_eq!(truncate_to_size("overlays/gamepad", 8), "overlays");
/// assert_eq!(truncate_to_size("anything", 0), "");
/// ```
pub fn truncate_to_size(s: &str, size: usize) -> &str {
    let limit = size.saturating_sub(1);
    if s.len() <= limit {
        return s;
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
