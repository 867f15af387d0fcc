use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Ident, Lit, LitStr, Meta};

pub fn generate_enum(input: DeriveInput) -> syn::Result<TokenStream> {
    let enum_id = input.ident.clone();
    let variants = parse_variants(&input)?;

    let variant_count = variants.len();
    let from_index_cases = variants.iter().enumerate().map(|(index, variant)| {
        let id = &variant.id;
        quote! { #index => Some(Self::#id), }
    });
    let index_cases = variants.iter().enumerate().map(|(index, variant)| {
        let id = &variant.id;
        quote! { Self::#id => #index, }
    });
    let name_cases: Vec<_> = variants.iter().map(|variant| {
        let id = &variant.id;
        let name = &variant.name;
        quote! { Self::#id => #name, }
    }).collect();
    let from_name_cases = variants.iter().map(|variant| {
        let id = &variant.id;
        let name = &variant.name;
        quote! { #name => Some(Self::#id), }
    });

    Ok(quote! {
        impl ::std::fmt::Display for #enum_id {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(::cadence::Enum::name(self))
            }
        }

        impl ::cadence::Enum for #enum_id {
            const COUNT: usize = #variant_count;

            fn from_index(index: usize) -> Option<Self> {
                match index {
                    #(#from_index_cases)*
                    _ => None,
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    #(#from_name_cases)*
                    _ => None,
                }
            }

            fn index(&self) -> usize {
                match self {
                    #(#index_cases)*
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    #(#name_cases)*
                }
            }
        }
    })
}

struct Variant {
    id: Ident,
    name: LitStr,
}

fn parse_variants(input: &DeriveInput) -> syn::Result<Vec<Variant>> {
    let Data::Enum(body) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "Enum can only be derived for enums"));
    };

    body.variants.iter()
        .map(|variant| {
            if !variant.fields.is_empty() {
                return Err(syn::Error::new_spanned(variant, "Enum variants can't have fields"));
            }

            let mut name = LitStr::new(&variant.ident.to_string(), variant.ident.span());

            for attr in variant.attrs.iter().filter(|attr| attr.path().is_ident("name")) {
                let Meta::NameValue(name_value) = &attr.meta else {
                    return Err(syn::Error::new_spanned(attr, "expected #[name = \"...\"]"));
                };

                let Expr::Lit(lit) = &name_value.value else {
                    return Err(syn::Error::new_spanned(&name_value.value, "expected a string literal"));
                };

                let Lit::Str(str_lit) = &lit.lit else {
                    return Err(syn::Error::new_spanned(&lit.lit, "expected a string literal"));
                };

                name = str_lit.clone();
            }

            Ok(Variant {
                id: variant.ident.clone(),
                name,
            })
        })
        .collect()
}
