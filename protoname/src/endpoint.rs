//! RPC method names for API endpoints.

use tracing::trace;

use crate::{case::camel_case, classify::is_alpha_num, compose::clean_and_title};

/// Suffix stripped from paths before they are tokenized.
const JSON_PATH_SUFFIX: &str = ".json";

/// Suffix stripped from normalized operation identifiers.
const JSON_OPERATION_SUFFIX: &str = "_json";

/// A single operation of an API description, as far as naming is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    /// The URL path, possibly with `{param}` placeholders.
    pub path: String,
    /// The HTTP method.
    pub verb: String,
    /// The explicit operation identifier. Empty means the name is derived from path and verb.
    #[cfg_attr(feature = "serde", serde(rename = "operationId", default))]
    pub operation_id: String,
}

impl Endpoint {
    /// Create an endpoint without an operation identifier.
    pub fn new(path: impl Into<String>, verb: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            verb: verb.into(),
            operation_id: String::new(),
        }
    }

    /// Set the operation identifier, which takes precedence over path-derived naming.
    pub fn with_operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = operation_id.into();
        self
    }

    /// The RPC method name for this endpoint. See [`compile_endpoint_name`].
    pub fn rpc_name(&self) -> String {
        compile_endpoint_name(self)
    }
}

/// Derive the RPC method name of an endpoint.
pub fn compile_endpoint_name(endpoint: &Endpoint) -> String {
    path_method_to_name(&endpoint.path, &endpoint.verb, &endpoint.operation_id)
}

/// Derive an RPC method name from a path and HTTP method, or from `operation_id` when it is not
/// empty.
///
/// The path loses a trailing `.json` and any query string, `_ - . /` split words and the
/// placeholder delimiters `{ } [ ] ( )` are dropped, keeping the parameter name as a word. Each
/// word is title-cased and sanitized, then prefixed with the title-cased method.
///
/// ```rust
/// use protoname::path_method_to_name;
///
/// assert_eq!(path_method_to_name("/pets/{petId}", "get", ""), "GetPetsPetId");
/// assert_eq!(path_method_to_name("/pets/{petId}", "get", "showPetById"), "Showpetbyid");
/// ```
pub fn path_method_to_name(path: &str, method: &str, operation_id: &str) -> String {
    if !operation_id.is_empty() {
        return operation_id_to_name(operation_id);
    }

    let mut path = path.strip_suffix(JSON_PATH_SUFFIX).unwrap_or(path);
    // Query strings are illegal in swagger paths, but some tooling tolerates them.
    if let Some(i) = path.rfind('?').filter(|&i| i > 0) {
        path = &path[..i];
    }

    let words: String = path
        .chars()
        .filter_map(|r| match r {
            '_' | '-' | '.' | '/' => Some(' '),
            // Placeholder delimiters only; other punctuation is left for `clean_and_title`.
            '{' | '}' | '[' | ']' | '(' | ')' => None,
            r => Some(r),
        })
        .collect();

    let mut name = clean_and_title(method);
    for word in words.split_whitespace() {
        name.push_str(&clean_and_title(word));
    }

    trace!(path, method, %name, "derived rpc name from path");
    name
}

/// Turn an explicit operation identifier into a PascalCase RPC name.
///
/// The identifier is lower-cased, every separator run ahead of a word becomes one `_`, a trailing
/// `_json` is dropped and the result is camel-cased: `"List Pets"` becomes `"ListPets"`.
pub fn operation_id_to_name(id: &str) -> String {
    let mut normalized = String::with_capacity(id.len());
    let mut was_non_alnum = false;

    for r in id.chars() {
        if !is_alpha_num(r) {
            was_non_alnum = true;
            continue;
        }
        if was_non_alnum {
            normalized.push('_');
        }
        was_non_alnum = false;
        normalized.push(r.to_ascii_lowercase());
    }

    let trimmed = normalized
        .strip_suffix(JSON_OPERATION_SUFFIX)
        .unwrap_or(&normalized);
    let name = camel_case(trimmed);

    trace!(operation_id = id, %name, "derived rpc name from operation id");
    name
}
