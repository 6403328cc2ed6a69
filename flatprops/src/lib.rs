//! Flatten arbitrary values into delimited key paths for telemetry properties.
//!
//! This crate projects a value graph (records, nested records, sequences,
//! maps, optional values, parsed JSON) onto one flat `path -> string` map:
//!
//! ```text
//! PropA          = "propA"
//! PropD:PropE    = "propE"
//! PropD:PropF[0] = "1"
//! ```
//!
//! ```rust
//! use flatprops::{flatten, Describe, Email, FlattenOptions};
//!
//! #[derive(Describe)]
//! struct Signup {
//!     plan: String,
//!     #[sensitive(Email)]
//!     email: String,
//! }
//!
//! let signup = Signup { plan: "pro".into(), email: "a@example.com".into() };
//! let flat = flatten(&signup, &FlattenOptions::new().with_redaction(true));
//! assert_eq!(flat["plan"], "pro");
//! assert_eq!(flat["email"], "*****");
//! ```
//!
//! The pieces:
//! - **Describe**: `#[derive(Describe)]` emits a field-descriptor table per type,
//!   so no runtime reflection is needed.
//! - **Classification**: `#[sensitive(Email)]`-style markers tag declared fields;
//!   a [`SensitivityClassifier`] decides what gets masked.
//! - **Flattening**: [`flatten`] / [`Flattener`] apply casing, delimiter, prefix
//!   and redaction.
//!
//! Key rules:
//! - Casing applies to the fully joined path.
//! - Null and zero-valued fields are emitted as `""` and never expanded.
//! - Sequence elements are keyed `name[i]`.
//! - Only record-field leaves are redacted; mapping entries pass through.
//!
//! What it does not do:
//! - decide whether to log, or talk to any backend
//! - detect cycles (`Rc` loops recurse until the stack is exhausted)

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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else,
    clippy::new_without_default
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use flatprops_derive::Describe;

#[allow(unused_extern_crates)]
extern crate self as flatprops;

// Module declarations
mod classification;
pub mod event;
mod flatten;
#[cfg(feature = "slog")]
pub mod slog;
pub mod token;
mod value;

// Re-exports
pub use classification::{
    AccountId, ApiToken, Classification, CreditCard, DateOfBirth, Email, IpAddress, NationalId,
    PersonalData, PhoneNumber, Pii, Secret, Sensitivity, SensitiveInfo, SessionId,
};
pub use flatten::{
    flatten, flatten_value, Casing, FlatMap, FlattenOptions, Flattener, OptionsError,
    ParseCasingError, DEFAULT_DELIMITER, DOT_DELIMITER, REDACTION_MARKER,
};
pub use token::{Scalar, Token};
pub use value::{
    DeclaredSensitivity, Describe, Field, FieldDescriptor, Leaf, Record, SensitivityClassifier,
    Value,
};
