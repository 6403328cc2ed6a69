//! Shared field entry generation for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::ext::IdentExt;

use crate::{
    crate_path,
    generics::collect_generics_from_type,
    rename::RenameRule,
    strategy::{FieldOptions, Sensitivity},
    types::declared_type_name,
};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) rename_all: Option<RenameRule>,
    pub(crate) used_generics: &'a mut Vec<Ident>,
}

/// Emitted name of a field: explicit rename, then `rename_all`, then the
/// identifier itself. Tuple fields are named by position.
pub(crate) fn field_name(
    ident: Option<&Ident>,
    index: usize,
    options: &FieldOptions,
    rename_all: Option<RenameRule>,
) -> String {
    if let Some(rename) = &options.rename {
        return rename.clone();
    }
    match ident {
        Some(ident) => {
            let declared = ident.unraw().to_string();
            apply_rule(declared, rename_all)
        }
        None => index.to_string(),
    }
}

/// Emitted name of an enum variant.
pub(crate) fn variant_name(
    ident: &Ident,
    rename: Option<&String>,
    rename_all: Option<RenameRule>,
) -> String {
    if let Some(rename) = rename {
        return rename.clone();
    }
    apply_rule(ident.unraw().to_string(), rename_all)
}

fn apply_rule(declared: String, rename_all: Option<RenameRule>) -> String {
    match rename_all {
        Some(rule) => rule.apply(&declared),
        None => declared,
    }
}

fn sensitivity_tokens(sensitivity: &Sensitivity) -> TokenStream {
    let sensitivity_path = crate_path("Sensitivity");
    match sensitivity {
        Sensitivity::Plain => quote! { #sensitivity_path::None },
        Sensitivity::Sensitive => quote! { #sensitivity_path::SensitiveInfo },
        Sensitivity::Classify(classification) => {
            let classification_path = crate_path("Classification");
            quote! { <#classification as #classification_path>::SENSITIVITY }
        }
    }
}

/// Generates one `.field(descriptor, value)` builder call.
///
/// `access` must evaluate to a reference to the field.
///
/// | Annotation | Descriptor tag |
/// |------------|----------------|
/// | None | `Sensitivity::None` |
/// | `#[sensitive]` | `Sensitivity::SensitiveInfo` |
/// | `#[sensitive(Class)]` | `<Class as Classification>::SENSITIVITY` |
pub(crate) fn generate_field_entry(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    name: &str,
    access: &TokenStream,
    span: Span,
    options: &FieldOptions,
) -> TokenStream {
    collect_generics_from_type(ty, ctx.generics, ctx.used_generics);

    let descriptor_path = crate_path("FieldDescriptor");
    let describe_path = crate_path("Describe");
    let declared_type = declared_type_name(ty);
    let sensitivity = sensitivity_tokens(&options.sensitivity);
    quote_spanned! { span =>
        .field(
            #descriptor_path::new(#name, #declared_type, #sensitivity),
            #describe_path::describe(#access),
        )
    }
}
