//! Type utilities for the derive macro.

use quote::ToTokens;

/// Renders a type the way it reads in source, for `FieldDescriptor::declared_type`.
///
/// Token streams print with spaces between every token (`Vec < String >`);
/// spaces next to punctuation are dropped, then `,` and `;` get one back.
pub(crate) fn declared_type_name(ty: &syn::Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    for (index, &ch) in chars.iter().enumerate() {
        if ch == ' ' {
            let previous = index.checked_sub(1).map(|i| chars[i]);
            let next = chars.get(index + 1).copied();
            let glue_before = matches!(previous, Some('<' | '(' | '[' | '&' | ':' | ',' | ';'));
            let glue_after = matches!(next, Some('<' | '>' | ',' | ')' | ']' | ':' | ';'));
            if glue_before || glue_after {
                continue;
            }
        }
        out.push(ch);
    }
    out.replace(',', ", ").replace(';', "; ")
}

/// Checks if a type is `PhantomData<..>`, which never needs bounds.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn parse_type(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    #[test]
    fn generic_types_read_like_source() {
        let ty = parse_type(quote! { Option<Vec<String>> });
        assert_eq!(declared_type_name(&ty), "Option<Vec<String>>");
    }

    #[test]
    fn map_types_keep_a_space_after_commas() {
        let ty = parse_type(quote! { std::collections::HashMap<String, i32> });
        assert_eq!(
            declared_type_name(&ty),
            "std::collections::HashMap<String, i32>"
        );
    }

    #[test]
    fn references_keep_lifetime_spacing() {
        let ty = parse_type(quote! { &'a str });
        assert_eq!(declared_type_name(&ty), "&'a str");
    }

    #[test]
    fn arrays_read_like_source() {
        let ty = parse_type(quote! { [u8; 4] });
        assert_eq!(declared_type_name(&ty), "[u8; 4]");
    }

    #[test]
    fn phantom_data_detected() {
        assert!(is_phantom_data(&parse_type(quote! { PhantomData<T> })));
        assert!(is_phantom_data(&parse_type(
            quote! { std::marker::PhantomData<T> }
        )));
        assert!(!is_phantom_data(&parse_type(quote! { Vec<T> })));
    }
}
