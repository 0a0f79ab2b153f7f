//! `#[derive(Record)]` for tagfig.
//!
//! Emits the static field schema (`Field::SHAPE`) and the by-name field
//! accessor (`Record::field_mut`) for a struct with named fields. Only fields
//! carrying a `#[config("...")]` or bare `#[config]` attribute are described;
//! the annotation string is passed through verbatim and parsed at runtime.
//!
//! `Record::reset` is implemented through `Default`, so deriving structs must
//! also implement `Default`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Meta, parse_macro_input};

#[proc_macro_derive(Record, attributes(config))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct TaggedField {
    ident: syn::Ident,
    ty: syn::Type,
    tag: String,
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut tagged = Vec::new();
    for field in fields {
        if let (Some(ident), Some(tag)) = (&field.ident, config_tag(&field.attrs)?) {
            tagged.push(TaggedField {
                ident: ident.clone(),
                ty: field.ty.clone(),
                tag,
            });
        }
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let defs = tagged.iter().map(|f| {
        let name = f.ident.unraw().to_string();
        let tag = &f.tag;
        let ty = &f.ty;
        quote! {
            ::tagfig::FieldDef {
                name: #name,
                tag: ::core::option::Option::Some(#tag),
                shape: <#ty as ::tagfig::Field>::SHAPE,
            }
        }
    });

    let arms = tagged.iter().map(|f| {
        let name = f.ident.unraw().to_string();
        let field = &f.ident;
        quote! {
            #name => ::core::option::Option::Some(::tagfig::Field::slot(&mut self.#field)),
        }
    });

    Ok(quote! {
        impl #impl_generics ::tagfig::Field for #ident #ty_generics #where_clause {
            const SHAPE: ::tagfig::Shape = ::tagfig::Shape::Record(&[#(#defs),*]);

            fn slot(&mut self) -> ::tagfig::Slot<'_> {
                ::tagfig::Slot::Record(self)
            }
        }

        impl #impl_generics ::tagfig::Record for #ident #ty_generics #where_clause {
            fn field_mut(&mut self, name: &str) -> ::core::option::Option<::tagfig::Slot<'_>> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn reset(&mut self) {
                *self = ::core::default::Default::default();
            }
        }
    })
}

/// Read the annotation from a field's attributes.
///
/// `#[config("...")]` yields the literal, bare `#[config]` yields an empty
/// annotation, no attribute yields `None`.
fn config_tag(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut found: Option<String> = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[config] attribute; combine the pairs with `;`",
            ));
        }
        let tag = match &attr.meta {
            Meta::Path(_) => String::new(),
            Meta::List(_) => attr.parse_args::<LitStr>()?.value(),
            Meta::NameValue(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected #[config(\"key:value;...\")] or #[config]",
                ));
            }
        };
        found = Some(tag);
    }
    Ok(found)
}
