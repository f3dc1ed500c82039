//! Character-shift obfuscation for the activity panel
//!
//! Every character except a space is replaced by the next Unicode scalar
//! value. This is decoration, not cryptography, and there is no decoder.
//!
//! `char` cannot hold surrogates, so `U+D7FF` steps over the surrogate block
//! to `U+E000`. `char::MAX` has no successor and is left unchanged. Both rules
//! keep the output the same length, in characters, as the input.

/// Shift a single character by one code point
#[must_use]
pub fn shift_char(c: char) -> char {
    if c == ' ' {
        return c;
    }

    // The two explicit arms are the only inputs whose successor is not a `char`.
    match c {
        '\u{D7FF}' => '\u{E000}',
        char::MAX => char::MAX,
        _ => char::from_u32(u32::from(c) + 1).unwrap_or(c),
    }
}

/// Encode `text` by shifting each non-space character up by one
///
/// ```
/// use tracker_core::encode;
///
/// assert_eq!(encode("all due in time, andre"), "bmm evf jo ujnf- boesf");
/// ```
#[must_use]
pub fn encode(text: &str) -> String {
    text.chars().map(shift_char).collect()
}
