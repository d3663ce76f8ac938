//! Blank-line normalization between top-level declarations of a rendered `.proto` document.

use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    /// Each pattern with the text it is rewritten to: one blank line before the keyword.
    static ref DECLARATION_GAPS: [(Regex, &'static [u8]); 4] = [
        (Regex::new(r"\}\n*message ").unwrap(), b"}\n\nmessage ".as_slice()),
        (Regex::new(r"\}\n*enum ").unwrap(), b"}\n\nenum ".as_slice()),
        (Regex::new(r";\n*message ").unwrap(), b";\n\nmessage ".as_slice()),
        (Regex::new(r"\}\n*service ").unwrap(), b"}\n\nservice ".as_slice()),
    ];
}

/// Put exactly one blank line between a closing `}` (or a `;`) and a following `message`, `enum`
/// or `service` declaration, however many newlines separated them before.
///
/// ```rust
/// use protoname::clean_spacing;
///
/// let rendered = b"syntax = \"proto3\";message Pet {\n}\n\n\n\nenum Kind {\n}\n";
/// let expected = b"syntax = \"proto3\";\n\nmessage Pet {\n}\n\nenum Kind {\n}\n";
/// assert_eq!(clean_spacing(rendered), expected);
/// ```
pub fn clean_spacing(output: &[u8]) -> Vec<u8> {
    DECLARATION_GAPS
        .iter()
        .fold(output.to_vec(), |output, (pattern, replacement)| {
            pattern.replace_all(&output, *replacement).into_owned()
        })
}
