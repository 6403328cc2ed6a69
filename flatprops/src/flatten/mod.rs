//! Flattening entrypoints.
//!
//! - **`casing`**: key casing policy
//! - **`options`**: delimiter, prefix, casing and redaction settings
//! - **`walk`**: the traversal itself
//!
//! [`flatten`] is the common case. [`Flattener`] pairs options with a custom
//! [`SensitivityClassifier`] and can be shared across threads.

mod casing;
mod options;
mod walk;

use std::collections::BTreeMap;

pub use casing::{Casing, ParseCasingError};
pub use options::{FlattenOptions, OptionsError, DEFAULT_DELIMITER, DOT_DELIMITER};

use crate::value::{DeclaredSensitivity, Describe, SensitivityClassifier, Value};
use walk::Walk;

/// Flattened output: rendered key path to rendered value.
pub type FlatMap = BTreeMap<String, String>;

/// Replacement text for redacted values.
pub const REDACTION_MARKER: &str = "*****";

/// Flattens `value` using the sensitivity recorded in its field descriptors.
///
/// ```rust
/// use flatprops::{flatten, FlattenOptions};
///
/// let flat = flatten(&vec![1, 2], &FlattenOptions::new().with_key_prefix("ids"));
/// assert_eq!(flat["ids[0]"], "1");
/// assert_eq!(flat["ids[1]"], "2");
/// ```
pub fn flatten<T>(value: &T, options: &FlattenOptions) -> FlatMap
where
    T: Describe + ?Sized,
{
    flatten_value(&value.describe(), options)
}

/// Flattens an already described value.
pub fn flatten_value(value: &Value, options: &FlattenOptions) -> FlatMap {
    flatten_with(value, options, &DeclaredSensitivity)
}

fn flatten_with<C>(value: &Value, options: &FlattenOptions, classifier: &C) -> FlatMap
where
    C: SensitivityClassifier + ?Sized,
{
    let mut walk = Walk::new(options, classifier);
    walk.value(value, options.key_prefix());
    walk.finish()
}

/// Reusable flattening configuration.
#[derive(Clone, Debug, Default)]
pub struct Flattener<C = DeclaredSensitivity> {
    options: FlattenOptions,
    classifier: C,
}

impl Flattener {
    pub fn new(options: FlattenOptions) -> Self {
        Self {
            options,
            classifier: DeclaredSensitivity,
        }
    }
}

impl<C> Flattener<C>
where
    C: SensitivityClassifier,
{
    /// Replaces the classifier consulted for redaction.
    pub fn with_classifier<D>(self, classifier: D) -> Flattener<D>
    where
        D: SensitivityClassifier,
    {
        Flattener {
            options: self.options,
            classifier,
        }
    }

    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn flatten<T>(&self, value: &T) -> FlatMap
    where
        T: Describe + ?Sized,
    {
        self.flatten_value(&value.describe())
    }

    pub fn flatten_value(&self, value: &Value) -> FlatMap {
        flatten_with(value, &self.options, &self.classifier)
    }
}
