//! Derive macros for `flatprops`.
//!
//! This crate generates the describing code behind `#[derive(Describe)]`. It:
//! - reads `#[sensitive(...)]` and `#[describe(...)]` attributes
//! - emits a `Describe` implementation that snapshots the value as a
//!   `flatprops::Value`
//!
//! It does **not** flatten anything. Key building, casing and redaction live
//! in the main `flatprops` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

#[cfg(feature = "slog")]
use proc_macro2::Span;
use proc_macro2::{Ident, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod rename;
mod strategy;
mod transform;
mod types;
use container::parse_container_options;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_describe_bounds;

/// Derives `flatprops::Describe` (and, with the `slog` feature, `slog::Value`)
/// for structs and enums.
///
/// # Container Attributes
///
/// - `#[describe(display)]` - Render the value through its `Display` impl
///   wherever it is emitted as a single string (field-less records, mapping
///   values, unit variants). Without it the type or variant name is used.
/// - `#[describe(rename_all = "...")]` - Convert field names (structs) or
///   variant names (enums). Accepts `PascalCase`, `camelCase`, `snake_case`,
///   `lowercase`, `UPPERCASE`, `SCREAMING_SNAKE_CASE` and `kebab-case`.
///
/// # Field Attributes
///
/// - **No annotation**: The field is described with `Sensitivity::None`.
/// - `#[sensitive]`: The field is tagged as sensitive information.
/// - `#[sensitive(Classification)]`: The tag comes from the marker type, e.g.
///   `#[sensitive(Email)]` is personal data and `#[sensitive(Secret)]` is
///   sensitive information.
/// - `#[describe(skip)]`: The field is left out entirely.
/// - `#[describe(rename = "...")]`: The field is emitted under another name.
///
/// # Variant Attributes
///
/// - `#[default]`: Marks the enum's zero value (pair it with `#[derive(Default)]`).
/// - `#[describe(rename = "...")]`: The variant is emitted under another name.
///
/// Unions are rejected at compile time.
///
/// # Additional Generated Impls
///
/// - `slog::Value` (behind `cfg(feature = "slog")`): logs the value's flat
///   properties with redaction enabled, through
///   `flatprops::slog::IntoFlatProperties`. The derive first looks for a
///   top-level `slog` crate; if not found, it checks the `FLATPROPS_SLOG_CRATE`
///   env var for an alternate path (e.g., `my_log::slog`). If neither is
///   available, compilation fails with a clear error.
#[proc_macro_derive(Describe, attributes(describe, sensitive))]
pub fn derive_describe(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the flatprops crate root.
///
/// Handles crate renaming (e.g., `props = { package = "flatprops", ... }`).
/// Inside flatprops itself (unit tests and doctests alike) the crate is
/// reachable as `::flatprops` through its `extern crate self` alias.
fn crate_root() -> TokenStream {
    match crate_name("flatprops") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::flatprops },
    }
}

/// Returns the token stream to reference the slog crate root.
///
/// Handles crate renaming (e.g., `my_slog = { package = "slog", ... }`).
/// If the top-level `slog` crate is not available, falls back to the
/// `FLATPROPS_SLOG_CRATE` env var, which should be a path like `my_log::slog`.
#[cfg(feature = "slog")]
fn slog_crate() -> Result<TokenStream> {
    match crate_name("slog") {
        Ok(FoundCrate::Itself) => Ok(quote! { crate }),
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            Ok(quote! { ::#ident })
        }
        Err(_) => {
            let env_value = std::env::var("FLATPROPS_SLOG_CRATE").map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    "slog support is enabled, but no top-level `slog` crate was found. \
Set the FLATPROPS_SLOG_CRATE env var to a path (e.g., `my_log::slog`) or add \
`slog` as a direct dependency.",
                )
            })?;
            let path = syn::parse_str::<syn::Path>(&env_value).map_err(|_| {
                syn::Error::new(
                    Span::call_site(),
                    format!("FLATPROPS_SLOG_CRATE must be a valid Rust path (got `{env_value}`)"),
                )
            })?;
            Ok(quote! { #path })
        }
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    describe_body: TokenStream,
    used_generics: Vec<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let options = parse_container_options(&attrs)?;

    let derive_output = match data {
        Data::Struct(data) => {
            let output = derive_struct(&ident, data, &generics, &options)?;
            DeriveOutput {
                describe_body: output.describe_body,
                used_generics: output.used_generics,
            }
        }
        Data::Enum(data) => {
            let output = derive_enum(&ident, data, &generics, &options)?;
            DeriveOutput {
                describe_body: output.describe_body,
                used_generics: output.used_generics,
            }
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Describe` cannot be derived for unions",
            ));
        }
    };

    let describe_generics = add_describe_bounds(generics, &derive_output.used_generics);
    let (impl_generics, ty_generics, where_clause) = describe_generics.split_for_impl();
    let describe_path = crate_path("Describe");
    let value_path = crate_path("Value");
    let describe_body = &derive_output.describe_body;

    // Only generate slog impl when the slog feature is enabled on flatprops-derive.
    #[cfg(feature = "slog")]
    let slog_impl = {
        let slog_crate = slog_crate()?;
        let crate_root = crate_root();
        quote! {
            impl #impl_generics #slog_crate::Value for #ident #ty_generics #where_clause {
                fn serialize(
                    &self,
                    record: &#slog_crate::Record<'_>,
                    key: #slog_crate::Key,
                    serializer: &mut dyn #slog_crate::Serializer,
                ) -> #slog_crate::Result {
                    let properties = #crate_root::slog::IntoFlatProperties::flat_properties(self);
                    #slog_crate::Value::serialize(&properties, record, key, serializer)
                }
            }
        }
    };

    #[cfg(not(feature = "slog"))]
    let slog_impl = quote! {};

    Ok(quote! {
        impl #impl_generics #describe_path for #ident #ty_generics #where_clause {
            fn describe(&self) -> #value_path {
                #describe_body
            }
        }

        #slog_impl
    })
}
