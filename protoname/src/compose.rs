//! Composite name builders: whitespace removal, word capitalization and sanitization combined into
//! package and service names.

use crate::{classify::is_alpha_num, upper};

/// The suffix appended to every service name.
const SERVICE_SUFFIX: &str = "Service";

/// Remove all whitespace from `s`.
///
/// With `title`, the first char and every char following a removed whitespace run are
/// upper-cased: `"pet store"` becomes `"PetStore"` instead of `"petstore"`. No other char changes
/// case.
pub fn concat_spaces(s: &str, title: bool) -> String {
    let mut result = String::with_capacity(s.len());
    let mut was_space = true;

    for r in s.chars() {
        if r.is_whitespace() {
            was_space = true;
            continue;
        }

        if was_space && title {
            result.push(upper(r));
        } else {
            result.push(r);
        }
        was_space = false;
    }

    result
}

/// Replace every char that is not an ASCII letter or digit with `_`. Case is left untouched.
pub fn clean_characters(s: &str) -> String {
    s.chars()
        .map(|r| if is_alpha_num(r) { r } else { '_' })
        .collect()
}

/// Upper-case the first letter of every word, leaving the rest of each word as-is.
///
/// ASCII letters, digits and `_` continue a word and any other ASCII char separates words. Outside
/// ASCII, letters and digits continue a word and whitespace separates words.
pub fn title(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev = ' ';

    for r in s.chars() {
        if is_word_separator(prev) {
            result.push(upper(r));
        } else {
            result.push(r);
        }
        prev = r;
    }

    result
}

fn is_word_separator(r: char) -> bool {
    if r.is_ascii() {
        return !(r.is_ascii_alphanumeric() || r == '_');
    }
    if r.is_alphabetic() || r.is_numeric() {
        return false;
    }
    r.is_whitespace()
}

/// Capitalize each word, then sanitize: `"petId"` becomes `"PetId"`, `"v1:batch"` becomes
/// `"V1_Batch"`.
pub fn clean_and_title(s: &str) -> String {
    clean_characters(&title(s))
}

/// Derive a protobuf package name: whitespace removed, lower-cased, then sanitized.
///
/// `"Pet Store!"` becomes `"petstore_"`.
pub fn package_name(s: &str) -> String {
    clean_characters(&concat_spaces(s, false).to_lowercase())
}

/// Derive a protobuf service name: whitespace removed with title-casing, then suffixed with
/// `Service` and sanitized.
///
/// `"pet store"` becomes `"PetStoreService"`.
pub fn service_name(s: &str) -> String {
    clean_characters(&format!("{}{SERVICE_SUFFIX}", concat_spaces(s, true)))
}


#[cfg(test)]
mod property_tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn prop_clean_characters_is_idempotent(s: String) -> bool {
            let once = clean_characters(&s);
            clean_characters(&once) == once
        }

        fn prop_concat_spaces_removes_whitespace(s: String, title: bool) -> bool {
            !concat_spaces(&s, title).chars().any(char::is_whitespace)
        }

        fn prop_package_name_has_no_upper_case(s: String) -> bool {
            !package_name(&s).chars().any(|r| r.is_ascii_uppercase())
        }

        fn prop_service_name_ends_with_suffix(s: String) -> bool {
            service_name(&s).ends_with(SERVICE_SUFFIX)
        }
    }
}
