mod enums;

use enums::generate_enum;
use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Implements `cadence::Enum` and `Display` for a fieldless enum.
///
/// Variants are indexed in declaration order. `#[name = "..."]` overrides the label of a variant.
#[proc_macro_derive(Enum, attributes(name))]
pub fn derive_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input);

    generate_enum(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
