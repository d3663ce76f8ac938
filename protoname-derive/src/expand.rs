use std::collections::HashMap;

use darling::{FromDeriveInput, FromVariant, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, Visibility, ext::IdentExt};

#[derive(FromDeriveInput, Debug)]
#[darling(attributes(proto_enum), supports(enum_unit))]
struct ProtoEnumAttr {
    ident: Ident,
    vis: Visibility,
    generics: Generics,
    data: Data<ProtoVariant, Ignored>,
    /// Scopes every constant of the enum, e.g. `prefix = "pet kind"` gives `PET_KIND_CAT`.
    prefix: Option<String>,
}

#[derive(FromVariant, Debug)]
#[darling(attributes(proto))]
struct ProtoVariant {
    ident: Ident,
    /// The enum label to derive the constant name from. Defaults to the variant identifier.
    label: Option<String>,
}

impl ProtoVariant {
    fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.ident.unraw().to_string())
    }
}

pub(crate) fn expand(input: &DeriveInput) -> darling::Result<TokenStream> {
    let attr = ProtoEnumAttr::from_derive_input(input)?;
    let prefix = attr.prefix.as_deref().unwrap_or_default();

    let variants = attr
        .data
        .take_enum()
        .ok_or_else(|| darling::Error::custom("Expected an enum").with_span(&attr.ident))?;

    let mut errors = darling::Error::accumulator();
    let mut seen: HashMap<String, &Ident> = HashMap::with_capacity(variants.len());
    let mut names = Vec::with_capacity(variants.len());

    for variant in &variants {
        let label = variant.label();

        if protoname::normalize_enum_name(&label).is_empty() {
            errors.push(
                darling::Error::custom(format!(
                    "Label '{label}' contains no ASCII letters or digits"
                ))
                .with_span(&variant.ident),
            );
            continue;
        }

        let name = protoname::enum_value_name(prefix, &label);
        if let Some(other) = seen.get(&name) {
            errors.push(
                darling::Error::custom(format!(
                    "Variants '{other}' and '{}' both map to the constant '{name}'",
                    variant.ident
                ))
                .with_span(&variant.ident),
            );
            continue;
        }

        seen.insert(name.clone(), &variant.ident);
        names.push(name);
    }

    errors.finish()?;

    let ident = &attr.ident;
    let vis = &attr.vis;
    let (impl_generics, ty_generics, where_clause) = attr.generics.split_for_impl();
    let variant_idents = variants.iter().map(|variant| &variant.ident);

    let doc = format!("The protobuf enum constant names of [`{ident}`], in declaration order.");

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #[doc = #doc]
            #vis const PROTO_NAMES: &'static [&'static str] = &[#(#names),*];

            /// The protobuf enum constant name of this variant.
            #vis fn proto_name(&self) -> &'static str {
                match *self {
                    #(Self::#variant_idents => #names,)*
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn expands_names_in_declaration_order() {
        let input: DeriveInput = parse_quote! {
            #[proto_enum(prefix = "status")]
            pub enum Status {
                Available,
                #[proto(label = "in progress")]
                InProgress,
            }
        };

        let output: String = expand(&input)
            .unwrap()
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        assert!(output.contains(r#"&["STATUS_AVAILABLE","STATUS_IN_PROGRESS"]"#));
        assert!(output.contains("pubfnproto_name"));
    }

    #[test]
    fn rejects_colliding_names() {
        let input: DeriveInput = parse_quote! {
            enum Animal {
                #[proto(label = "cats & dogs")]
                Pets,
                #[proto(label = "Cats and Dogs")]
                AlsoPets,
            }
        };

        let err = expand(&input).unwrap_err();
        assert!(err.to_string().contains("both map to the constant 'CATS_AND_DOGS'"));
    }

    #[test]
    fn rejects_labels_without_identifier_chars() {
        let input: DeriveInput = parse_quote! {
            enum Punctuation {
                #[proto(label = "!?")]
                Bang,
            }
        };

        let err = expand(&input).unwrap_err();
        assert!(err.to_string().contains("contains no ASCII letters or digits"));
    }

    #[test]
    fn rejects_non_unit_variants() {
        let input: DeriveInput = parse_quote! {
            enum Shape {
                Circle(f64),
            }
        };

        assert!(expand(&input).is_err());
    }

    #[test]
    fn rejects_structs() {
        let input: DeriveInput = parse_quote! {
            struct NotAnEnum {
                field: u8,
            }
        };

        assert!(expand(&input).is_err());
    }
}
