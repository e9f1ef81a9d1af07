use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr, Path};

/// Registers a concrete model with the discriminator registry of the given family,
/// keyed by the model's `ODATA_TYPE`.
#[proc_macro_attribute]
pub fn register_discriminator(attr: TokenStream, item: TokenStream) -> TokenStream {
    let family = parse_macro_input!(attr as Path);
    let input = parse_macro_input!(item as DeriveInput);
    let name = &input.ident;

    let fn_name = format_ident!("register_{}", name.to_string().to_case(Case::Snake));

    let expanded = quote! {
        #input

        #[ctor::ctor]
        fn #fn_name() {
            crate::serialization::register_discriminator::<#family, #name>();
        }
    };

    expanded.into()
}

/// Derives `EnumCodec`, `Display` and `FromStr` for a fieldless enum. The variant's position is its
/// ordinal and its wire name defaults to the lowerCamelCase variant name, `#[wire(rename = "...")]`
/// overrides it.
#[proc_macro_derive(WireEnum, attributes(wire))]
pub fn derive_wire_enum(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match expand_wire_enum(&input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_wire_enum(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(input, "WireEnum can only be derived for enums"));
    };

    let mut idents = Vec::with_capacity(data.variants.len());
    let mut wire_names = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(variant, "WireEnum variants cannot carry fields"));
        }
        if let Some((_, discriminant)) = &variant.discriminant {
            return Err(syn::Error::new_spanned(discriminant, "WireEnum ordinals follow declaration order"));
        }

        let mut wire_name = variant.ident.to_string().to_case(Case::Camel);
        for attr in variant.attrs.iter().filter(|attr| attr.path().is_ident("wire")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    wire_name = value.value();
                    Ok(())
                } else {
                    Err(meta.error("unsupported wire attribute, expected `rename`"))
                }
            })?;
        }

        idents.push(&variant.ident);
        wire_names.push(wire_name);
    }

    Ok(quote! {
        impl crate::serialization::EnumCodec for #name {
            const NAME: &'static str = #name_str;
            const VALUES: &'static [&'static str] = &[#(#wire_names),*];
            const VARIANTS: &'static [Self] = &[#(#name::#idents),*];

            fn index(self) -> usize {
                self as usize
            }

            fn lookup() -> &'static ::std::collections::HashMap<&'static str, Self> {
                static LOOKUP: ::std::sync::LazyLock<::std::collections::HashMap<&'static str, #name>> =
                    ::std::sync::LazyLock::new(|| {
                        <#name as crate::serialization::EnumCodec>::VARIANTS
                            .iter()
                            .map(|variant| (<#name as crate::serialization::EnumCodec>::VALUES[*variant as usize], *variant))
                            .collect()
                    });
                &LOOKUP
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(crate::serialization::EnumCodec::encode(*self))
            }
        }

        impl ::std::str::FromStr for #name {
            type Err = crate::serialization::DeserializationError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                <#name as crate::serialization::EnumCodec>::decode(value)
            }
        }
    })
}
