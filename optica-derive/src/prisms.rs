//! Implementation of the `#[derive(Prisms)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(name, &input.generics, data_enum.variants.iter()),
        Data::Struct(_) => syn::Error::new_spanned(
            name,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Prisms cannot be derived for unions.").to_compile_error()
        }
    }
}

/// Generates prism methods for an enum's variants.
fn generate_enum_prisms<'v>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'v Variant>,
) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants.map(generate_variant_prism).collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// How a variant's payload is taken apart and put back together.
struct Payload {
    focus_type: TokenStream2,
    pattern: TokenStream2,
    focus: TokenStream2,
}

fn payload(variant: &Variant) -> Payload {
    let variant_name = &variant.ident;
    match &variant.fields {
        Fields::Unit => Payload {
            focus_type: quote! { () },
            pattern: quote! { Self::#variant_name },
            focus: quote! { () },
        },
        Fields::Unnamed(fields) => {
            let types: Vec<_> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let bindings: Vec<_> = (0..types.len()).map(|index| format_ident!("v{}", index)).collect();
            Payload {
                focus_type: quote! { (#(#types),*) },
                pattern: quote! { Self::#variant_name(#(#bindings),*) },
                focus: quote! { (#(#bindings),*) },
            }
        }
        Fields::Named(fields) => {
            let types: Vec<_> = fields.named.iter().map(|field| &field.ty).collect();
            let names: Vec<_> = fields.named.iter().filter_map(|field| field.ident.as_ref()).collect();
            Payload {
                focus_type: quote! { (#(#types),*) },
                pattern: quote! { Self::#variant_name { #(#names),* } },
                focus: quote! { (#(#names),*) },
            }
        }
    }
}

/// Generates a prism method for a single enum variant.
///
/// The same pattern destructures the source and, read as an expression,
/// rebuilds it from the focus.
fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let doc = format!("Returns a prism focusing on the `{variant_name}` variant.");
    let Payload {
        focus_type,
        pattern,
        focus,
    } = payload(variant);

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        #[allow(unused_parens)]
        pub fn #method_name() -> ::optica::optics::SimplePrism<
            Self,
            #focus_type,
            ::optica::optics::FnPrism<Self, #focus_type>,
        > {
            ::optica::optics::prism(
                (|focus: #focus_type| {
                    let #focus = focus;
                    #pattern
                }) as fn(#focus_type) -> Self,
                (|source: Self| match source {
                    #pattern => ::core::result::Result::Ok(#focus),
                    #[allow(unreachable_patterns)]
                    other => ::core::result::Result::Err(other),
                }) as fn(Self) -> ::core::result::Result<#focus_type, Self>,
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase() || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand_source(source: &str) -> String {
        let input: DeriveInput = syn::parse_str(source).unwrap();
        expand(&input).to_string().replace(' ', "")
    }

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("none", "none")]
    #[case("A", "a")]
    fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[test]
    fn test_every_variant_shape_gets_a_prism() {
        let expanded = expand_source(
            "enum Event { Quit, Key(char), Move(i32, i32), Click { x: i32, y: i32 } }",
        );
        assert!(expanded.contains("fnquit_prism()"));
        assert!(expanded.contains("fnkey_prism()"));
        assert!(expanded.contains("Self::Move(v0,v1)=>::core::result::Result::Ok((v0,v1))"));
        assert!(expanded.contains("Self::Click{x,y}=>::core::result::Result::Ok((x,y))"));
    }

    #[test]
    fn test_struct_is_rejected() {
        let expanded = expand_source("struct Point { x: i32 }");
        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains("#[derive(Lenses)]forstructs"));
    }
}
