//! Primitive casers. Each one scans its input by char and treats any char rejected by
//! [`is_alpha_num`] as a word boundary.

use crate::classify::is_alpha_num;

/// Convert a string to SCREAMING_SNAKE_CASE.
///
/// Every separator char becomes exactly one `_`, consecutive separators are not collapsed.
pub fn all_caps(s: &str) -> String {
    s.chars()
        .map(|r| if is_alpha_num(r) { r.to_ascii_uppercase() } else { '_' })
        .collect()
}

/// Convert a string to snake_case.
///
/// Separators become `_`. Only the char right after a separator is lower-cased; an upper-case
/// letter that does not follow a separator keeps its case, so `"XMLParser"` is left untouched.
pub fn snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut was_underscore = false;

    for r in s.chars() {
        if !is_alpha_num(r) {
            result.push('_');
            was_underscore = true;
        } else if was_underscore {
            result.push(r.to_ascii_lowercase());
            was_underscore = false;
        } else {
            result.push(r);
        }
    }

    result
}

/// Convert a string to PascalCase.
///
/// Separators are dropped. The first char of the output and every char following a separator
/// are upper-cased, all other chars keep their case: `"foo_bar"` becomes `"FooBar"` and
/// `"XMLHttp"` stays `"XMLHttp"`.
pub fn camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut first = true;
    let mut was_underscore = false;

    for r in s.chars() {
        if !is_alpha_num(r) {
            was_underscore = true;
            continue;
        }

        if first || was_underscore {
            result.push(r.to_ascii_uppercase());
        } else {
            result.push(r);
        }
        first = false;
        was_underscore = false;
    }

    result
}


#[cfg(test)]
mod property_tests {
    use quickcheck::quickcheck;

    use super::*;

    fn alnum(s: &str) -> String {
        s.chars().filter(|r| is_alpha_num(*r)).collect()
    }

    quickcheck! {
        fn prop_casers_preserve_char_count(s: String) -> bool {
            let n = s.chars().count();
            all_caps(&s).chars().count() == n && snake_case(&s).chars().count() == n
        }

        fn prop_outputs_are_identifiers(s: String) -> bool {
            let ident = |out: String| out.chars().all(|r| is_alpha_num(r) || r == '_');
            ident(all_caps(&s)) && ident(snake_case(&s)) && camel_case(&s).chars().all(is_alpha_num)
        }

        fn prop_all_caps_is_idempotent(s: String) -> bool {
            let once = all_caps(&s);
            all_caps(&once) == once
        }

        fn prop_snake_case_is_idempotent(s: String) -> bool {
            let once = snake_case(&s);
            snake_case(&once) == once
        }

        fn prop_camel_case_is_idempotent(s: String) -> bool {
            let once = camel_case(&s);
            camel_case(&once) == once
        }

        fn prop_alnum_input_is_fixed_point(s: String) -> bool {
            let s = alnum(&s);
            let upper = s.to_ascii_uppercase();
            snake_case(&s) == s && all_caps(&upper) == upper
        }
    }
}
