//! Generic type parameter handling and trait bound management.
//!
//! This module adds `Describe` bounds only for generics that appear in
//! described (non-skipped) fields.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` fields are explicitly skipped when collecting generics:
//!
//! ```ignore
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T should NOT require Describe
//! }
//! ```
//!
//! `PhantomData` itself has no `Describe` impl, so such fields must also be
//! marked `#[describe(skip)]`; the bound is left off either way.

use syn::{parse_quote, Ident};

use crate::{crate_path, types::is_phantom_data};

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            if is_phantom_data(ty) {
                return;
            }
            if let Some(qself) = &path.qself {
                collect_generics_from_type(&qself.ty, generics, result);
            }
            for segment in &path.path.segments {
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }
            }
            if let Some(first) = path.path.segments.first() {
                // Check if this type identifier matches a generic parameter
                for param in generics.type_params() {
                    if first.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                        result.push(param.ident.clone());
                    }
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        _ => {}
    }
}

/// Adds `Describe` bounds to generic parameters used in described fields.
pub(crate) fn add_describe_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            let describe_path = crate_path("Describe");
            param.bounds.push(parse_quote!(#describe_path));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn collect(ty: proc_macro2::TokenStream, generics: proc_macro2::TokenStream) -> Vec<String> {
        let ty: syn::Type = syn::parse2(ty).expect("should parse as Type");
        let generics: syn::Generics = syn::parse2(generics).expect("should parse as Generics");
        let mut result = Vec::new();
        collect_generics_from_type(&ty, &generics, &mut result);
        result.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn nested_generic_is_collected_once() {
        assert_eq!(
            collect(quote! { HashMap<K, Vec<V>> }, quote! { <K, V> }),
            vec!["K", "V"]
        );
        assert_eq!(collect(quote! { (T, Option<T>) }, quote! { <T> }), vec!["T"]);
    }

    #[test]
    fn references_and_slices_are_walked() {
        assert_eq!(collect(quote! { &'a [T] }, quote! { <'a, T> }), vec!["T"]);
    }

    #[test]
    fn phantom_data_is_ignored() {
        assert!(collect(quote! { PhantomData<T> }, quote! { <T> }).is_empty());
    }

    #[test]
    fn concrete_types_collect_nothing() {
        assert!(collect(quote! { Vec<String> }, quote! { <T> }).is_empty());
    }
}
