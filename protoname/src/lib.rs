//! This library derives protobuf-safe identifiers from the free-form strings found in an API
//! description: URL paths, HTTP verbs, operation identifiers and enum literal text.
//!
//! The functions are layered, each group building on the one below:
//! - [`classify`]: the ASCII-only alphanumeric predicate everything else is defined in terms of.
//! - [`case`]: primitive casers ([`all_caps`], [`snake_case`], [`camel_case`]).
//! - [`compose`]: whitespace handling and sanitization ([`package_name`], [`service_name`], ...).
//! - [`endpoint`] and [`enums`]: RPC method names and enum constant names.
//! - [`spacing`]: a cosmetic pass over the rendered `.proto` text.
//!
//! Every function is total. Degenerate input (an empty string, a path with no segments) yields an
//! empty or minimal name instead of an error; callers that must reject such names check the result.
//!
//! ```rust
//! use protoname::{Endpoint, normalize_enum_name, path_method_to_name, service_name};
//!
//! assert_eq!(path_method_to_name("/pets/{petId}", "get", ""), "GetPetsPetId");
//! assert_eq!(Endpoint::new("/pets.json", "list").rpc_name(), "ListPets");
//! assert_eq!(service_name("pet store"), "PetStoreService");
//! assert_eq!(normalize_enum_name("Cats & Dogs"), "Cats_AND_Dogs");
//! ```

pub mod case;
pub mod classify;
pub mod compose;
pub mod endpoint;
pub mod enums;
pub mod spacing;

pub use case::{all_caps, camel_case, snake_case};
pub use classify::{is_alpha_num, looks_like_integer};
pub use compose::{
    clean_and_title, clean_characters, concat_spaces, package_name, service_name, title,
};
pub use endpoint::{Endpoint, compile_endpoint_name, operation_id_to_name, path_method_to_name};
pub use enums::{enum_value_name, normalize_enum_name};
pub use spacing::clean_spacing;

/// Upper-case a single char, keeping it as-is when the mapping is not one-to-one.
pub(crate) fn upper(r: char) -> char {
    let mut mapped = r.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => r,
    }
}
