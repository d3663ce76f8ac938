//! Character classification.

/// Returns `true` iff `r` is an ASCII letter or digit.
///
/// Only the ranges `A-Z`, `a-z` and `0-9` count. Non-ASCII letters and digits (`'é'`, `'٣'`) are
/// separators like any other punctuation, so names normalize the same way regardless of script.
pub fn is_alpha_num(r: char) -> bool {
    matches!(r, 'A'..='Z' | 'a'..='z' | '0'..='9')
}

/// Returns `true` iff every char of `s` is an ASCII digit.
///
/// The empty string has no char that fails the test, so `looks_like_integer("")` is `true`.
pub fn looks_like_integer(s: &str) -> bool {
    s.chars().all(|r| r.is_ascii_digit())
}
