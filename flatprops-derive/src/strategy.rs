//! Parsing of field and variant attributes.
//!
//! This module maps attribute syntax to descriptor data and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

/// Sensitivity declared on a field via `#[sensitive(...)]`.
///
/// | Attribute | Sensitivity | Descriptor tag |
/// |-----------|-------------|----------------|
/// | None | `Plain` | `Sensitivity::None` |
/// | `#[sensitive]` | `Sensitive` | `Sensitivity::SensitiveInfo` |
/// | `#[sensitive(Class)]` | `Classify(Class)` | `<Class as Classification>::SENSITIVITY` |
#[derive(Clone, Debug)]
pub(crate) enum Sensitivity {
    /// No annotation: the field is emitted as-is.
    Plain,
    /// Bare `#[sensitive]`.
    Sensitive,
    /// `#[sensitive(Classification)]`: the marker type decides the tag.
    Classify(syn::Path),
}

/// Everything the derive needs to know about one field.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) sensitivity: Sensitivity,
    pub(crate) skip: bool,
    pub(crate) rename: Option<String>,
}

/// Options parsed from attributes on an enum variant.
#[derive(Clone, Debug, Default)]
pub(crate) struct VariantOptions {
    /// The variant carries `#[default]`, so it is the enum's zero value.
    pub(crate) is_default: bool,
    pub(crate) rename: Option<String>,
}

fn set_sensitivity(target: &mut Option<Sensitivity>, next: Sensitivity, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[sensitive] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

fn parse_sensitivity(attr: &Attribute, target: &mut Option<Sensitivity>) -> Result<()> {
    match &attr.meta {
        Meta::Path(_) => set_sensitivity(target, Sensitivity::Sensitive, attr.span()),
        Meta::List(list) => match syn::parse2::<syn::Path>(list.tokens.clone()) {
            Ok(path) => set_sensitivity(target, Sensitivity::Classify(path), attr.span()),
            Err(_) => Err(syn::Error::new(
                attr.span(),
                "expected a classification type (e.g., #[sensitive(Email)])",
            )),
        },
        Meta::NameValue(_) => Err(syn::Error::new(
            attr.span(),
            "name-value syntax is not supported for #[sensitive]",
        )),
    }
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut sensitivity: Option<Sensitivity> = None;
    let mut skip = false;
    let mut rename = None;

    for attr in attrs {
        if attr.path().is_ident("sensitive") {
            parse_sensitivity(attr, &mut sensitivity)?;
        } else if attr.path().is_ident("describe") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    rename = Some(value.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown field option; expected `skip` or `rename = \"...\"`"))
                }
            })?;
        }
    }

    Ok(FieldOptions {
        sensitivity: sensitivity.unwrap_or(Sensitivity::Plain),
        skip,
        rename,
    })
}

pub(crate) fn parse_variant_options(attrs: &[Attribute]) -> Result<VariantOptions> {
    let mut options = VariantOptions::default();

    for attr in attrs {
        if attr.path().is_ident("default") {
            options.is_default = true;
        } else if attr.path().is_ident("sensitive") {
            return Err(syn::Error::new(
                attr.span(),
                "#[sensitive] belongs on fields, not on enum variants",
            ));
        } else if attr.path().is_ident("describe") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    options.rename = Some(value.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown variant option; expected `rename = \"...\"`"))
                }
            })?;
        }
    }

    Ok(options)
}
