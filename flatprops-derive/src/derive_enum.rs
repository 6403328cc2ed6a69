//! Enum-specific `Describe` derivation.
//!
//! Unit variants describe as leaves holding the variant name; the variant
//! marked `#[default]` is the enum's zero value. Variants with data describe
//! as records named `Enum::Variant` that render as the variant name.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    container::ContainerOptions,
    crate_path,
    strategy::{parse_field_options, parse_variant_options},
    transform::{field_name, generate_field_entry, variant_name, DeriveContext},
};

pub(crate) struct EnumDeriveOutput {
    pub(crate) describe_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    generics: &syn::Generics,
    options: &ContainerOptions,
) -> Result<EnumDeriveOutput> {
    let mut used_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        rename_all: options.rename_all,
        used_generics: &mut used_generics,
    };

    let value_path = crate_path("Value");
    let leaf_path = crate_path("Leaf");
    let record_path = crate_path("Record");

    if data.variants.is_empty() {
        return Ok(EnumDeriveOutput {
            describe_body: quote! { match *self {} },
            used_generics,
        });
    }

    let mut arms = Vec::new();
    for variant in data.variants {
        let variant_options = parse_variant_options(&variant.attrs)?;
        let variant_ident = &variant.ident;
        let emitted = variant_name(
            variant_ident,
            variant_options.rename.as_ref(),
            ctx.rename_all,
        );
        let is_default = variant_options.is_default;
        let rendering = if options.display {
            quote! { ::std::string::ToString::to_string(self) }
        } else {
            quote! { #emitted }
        };

        let (pattern, entries) = match &variant.fields {
            Fields::Unit => {
                arms.push(quote! {
                    Self::#variant_ident => #value_path::Leaf(
                        #leaf_path::with_default(#rendering, #is_default)
                    ),
                });
                continue;
            }
            Fields::Named(fields) => {
                let mut bindings = Vec::new();
                let mut entries = Vec::new();
                for (index, field) in fields.named.iter().enumerate() {
                    let field_options = parse_field_options(&field.attrs)?;
                    if field_options.skip {
                        continue;
                    }
                    let Some(binding) = field.ident.clone() else {
                        return Err(syn::Error::new(
                            field.span(),
                            "named field should have an identifier",
                        ));
                    };
                    let emitted_field =
                        field_name(Some(&binding), index, &field_options, ctx.rename_all);
                    let access = quote! { #binding };
                    entries.push(generate_field_entry(
                        &mut ctx,
                        &field.ty,
                        &emitted_field,
                        &access,
                        field.span(),
                        &field_options,
                    ));
                    bindings.push(binding);
                }
                (quote! { Self::#variant_ident { #(#bindings,)* .. } }, entries)
            }
            Fields::Unnamed(fields) => {
                let mut patterns = Vec::new();
                let mut entries = Vec::new();
                for (index, field) in fields.unnamed.iter().enumerate() {
                    let field_options = parse_field_options(&field.attrs)?;
                    if field_options.skip {
                        patterns.push(quote! { _ });
                        continue;
                    }
                    let binding = format_ident!("field_{}", index);
                    let emitted_field = field_name(None, index, &field_options, ctx.rename_all);
                    let access = quote! { #binding };
                    entries.push(generate_field_entry(
                        &mut ctx,
                        &field.ty,
                        &emitted_field,
                        &access,
                        field.span(),
                        &field_options,
                    ));
                    patterns.push(quote! { #binding });
                }
                (quote! { Self::#variant_ident(#(#patterns),*) }, entries)
            }
        };

        arms.push(quote! {
            #pattern => #value_path::Record(
                #record_path::new(concat!(stringify!(#name), "::", stringify!(#variant_ident)))
                    .with_rendering(#rendering)
                    .with_default(#is_default)
                    #(#entries)*
            ),
        });
    }

    Ok(EnumDeriveOutput {
        describe_body: quote! {
            match self {
                #(#arms)*
            }
        },
        used_generics,
    })
}
