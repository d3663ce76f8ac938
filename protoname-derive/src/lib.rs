use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod expand;

/// This macro derives the protobuf enum constant names of a unit-only enum.
///
/// It generates `PROTO_NAMES`, the constant names in declaration order, and `proto_name(&self)`.
/// Each name is `protoname::enum_value_name(prefix, label)`, computed when the macro expands.
///
/// - `#[proto_enum(prefix = "...")]` on the enum scopes every constant with a prefix.
/// - `#[proto(label = "...")]` on a variant overrides the label, which defaults to the variant
///   identifier.
///
/// ```rust
/// use protoname_derive::ProtoEnum;
///
/// #[derive(ProtoEnum)]
/// #[proto_enum(prefix = "pet kind")]
/// enum PetKind {
///     Cat,
///     #[proto(label = "Cats & Dogs")]
///     Both,
/// }
///
/// assert_eq!(PetKind::PROTO_NAMES, ["PET_KIND_CAT", "PET_KIND_CATS_AND_DOGS"]);
/// assert_eq!(PetKind::Both.proto_name(), "PET_KIND_CATS_AND_DOGS");
/// ```
#[proc_macro_derive(ProtoEnum, attributes(proto_enum, proto))]
pub fn proto_enum(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    expand::expand(&input)
        .unwrap_or_else(|err| err.write_errors())
        .into()
}
