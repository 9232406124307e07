//! Letter classification for key input

/// Returns the key as a letter if it is a single ASCII alphabetic character
///
/// Anything else (digits, punctuation, accented letters, multi-character
/// key names) is not a letter and must never populate a cell.
///
/// # Examples
/// ```
/// use wordgrid::core::letter::as_letter;
///
/// assert_eq!(as_letter("a"), Some('a'));
/// assert_eq!(as_letter("Q"), Some('Q'));
/// assert_eq!(as_letter("7"), None);
/// assert_eq!(as_letter("Tab"), None);
/// ```
#[must_use]
pub fn as_letter(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_letter(c) => Some(c),
        _ => None,
    }
}

/// Check if a character is an ASCII letter
#[inline]
#[must_use]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}
