//! Struct-specific `Describe` derivation.
//!
//! A struct always describes as a `Record`: named fields keep their (renamed)
//! identifiers, tuple fields are named `0`, `1`, ... and unit structs have no
//! fields at all.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{spanned::Spanned, DataStruct, Fields, Member, Result};

use crate::{
    container::ContainerOptions,
    crate_path,
    strategy::parse_field_options,
    transform::{field_name, generate_field_entry, DeriveContext},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) describe_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    name: &Ident,
    data: DataStruct,
    generics: &syn::Generics,
    options: &ContainerOptions,
) -> Result<StructDeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        rename_all: options.rename_all,
        used_generics: &mut used_generics,
    };

    let mut entries = Vec::new();
    let fields: Vec<syn::Field> = match data.fields {
        Fields::Named(fields) => fields.named.into_iter().collect(),
        Fields::Unnamed(fields) => fields.unnamed.into_iter().collect(),
        Fields::Unit => Vec::new(),
    };
    for (index, field) in fields.iter().enumerate() {
        let field_options = parse_field_options(&field.attrs)?;
        if field_options.skip {
            continue;
        }
        let member = field
            .ident
            .clone()
            .map_or_else(|| Member::Unnamed(index.into()), Member::Named);
        let emitted = field_name(field.ident.as_ref(), index, &field_options, ctx.rename_all);
        let access = quote! { &self.#member };
        entries.push(generate_field_entry(
            &mut ctx,
            &field.ty,
            &emitted,
            &access,
            field.span(),
            &field_options,
        ));
    }

    let record_path = crate_path("Record");
    let value_path = crate_path("Value");
    let rendering = if options.display {
        quote! { .with_rendering(::std::string::ToString::to_string(self)) }
    } else {
        quote! {}
    };

    Ok(StructDeriveOutput {
        describe_body: quote! {
            #value_path::Record(
                #record_path::new(stringify!(#name))
                    #rendering
                    #(#entries)*
            )
        },
        used_generics,
    })
}
