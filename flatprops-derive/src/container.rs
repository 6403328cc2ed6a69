//! Container-level attribute parsing for `#[derive(Describe)]`.
//!
//! This module handles attributes on the struct/enum itself, not on fields.

use syn::{Attribute, LitStr, Meta, Result};

use crate::rename::RenameRule;

/// Options parsed from container-level `#[describe(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// If true, the value renders through its `Display` impl instead of its type name.
    pub(crate) display: bool,
    /// Case conversion for field names (structs) or variant names (enums).
    pub(crate) rename_all: Option<RenameRule>,
}

/// Parses container-level `#[describe(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if attr.path().is_ident("sensitive") {
            return Err(syn::Error::new_spanned(
                attr,
                "#[sensitive] belongs on fields; mark the fields that hold sensitive data",
            ));
        }
        if !attr.path().is_ident("describe") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                // Bare #[describe] on container - currently no meaning, ignore
            }
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("display") {
                        options.display = true;
                        Ok(())
                    } else if meta.path.is_ident("rename_all") {
                        let value: LitStr = meta.value()?.parse()?;
                        let rule = RenameRule::from_name(&value.value()).ok_or_else(|| {
                            syn::Error::new(
                                value.span(),
                                format!(
                                    "unknown rename rule `{}`; expected {}",
                                    value.value(),
                                    RenameRule::NAMES
                                ),
                            )
                        })?;
                        options.rename_all = Some(rule);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `display` or `rename_all`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[describe]",
                ));
            }
        }
    }

    Ok(options)
}
