//! Enum constant names from enum label text.

use tracing::trace;

use crate::{case::all_caps, classify::is_alpha_num};

/// Canonicalize an enum label into an identifier.
///
/// `&` reads as the word `AND`. Runs of whitespace and underscores become a single `_` and any
/// other punctuation is dropped. A trailing run leaves nothing behind, a leading one leaves a
/// single `_`. Case is not changed; see [`enum_value_name`] for the upper-cased constant.
///
/// ```rust
/// use protoname::normalize_enum_name;
///
/// assert_eq!(normalize_enum_name("Cats & Dogs"), "Cats_AND_Dogs");
/// assert_eq!(normalize_enum_name("in-progress "), "inprogress");
/// ```
pub fn normalize_enum_name(label: &str) -> String {
    let label = label.replace('&', " AND ");

    let mut words = String::with_capacity(label.len());
    let mut was_space = false;
    for r in label.chars() {
        if is_alpha_num(r) {
            words.push(r);
            was_space = false;
        } else if r.is_whitespace() || r == '_' {
            if !was_space {
                words.push('_');
            }
            was_space = true;
        }
    }

    let mut result = String::with_capacity(words.len());
    let mut was_non_alnum = false;
    for r in words.chars() {
        if !is_alpha_num(r) {
            was_non_alnum = true;
            continue;
        }
        if was_non_alnum {
            result.push('_');
        }
        was_non_alnum = false;
        result.push(r);
    }

    result
}

/// The protobuf enum constant for `label`, optionally scoped by `prefix`.
///
/// The label is normalized with [`normalize_enum_name`]; when `prefix` is not empty it is joined in
/// front with `_`. The whole name is then upper-cased with [`all_caps`].
///
/// ```rust
/// use protoname::enum_value_name;
///
/// assert_eq!(enum_value_name("", "Cats & Dogs"), "CATS_AND_DOGS");
/// assert_eq!(enum_value_name("pet kind", "cat"), "PET_KIND_CAT");
/// ```
pub fn enum_value_name(prefix: &str, label: &str) -> String {
    let normalized = normalize_enum_name(label);
    let name = if prefix.is_empty() {
        all_caps(&normalized)
    } else {
        all_caps(&format!("{prefix}_{normalized}"))
    };

    trace!(prefix, label, %name, "derived enum value name");
    name
}


#[cfg(test)]
mod property_tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn prop_normalized_names_are_identifiers(s: String) -> bool {
            let name = normalize_enum_name(&s);
            name.chars().all(|r| is_alpha_num(r) || r == '_')
                && !name.ends_with('_')
                && !name.contains("__")
        }

        fn prop_normalize_is_idempotent(s: String) -> bool {
            let once = normalize_enum_name(&s);
            normalize_enum_name(&once) == once
        }
    }
}
