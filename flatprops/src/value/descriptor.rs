//! Static field metadata and the classifier that reads it.

use crate::classification::Sensitivity;

/// Describes one declared field: its emitted name, declared type, and sensitivity.
///
/// Descriptors are `'static` and `Copy`; the derive emits them as constants
/// so classification is a property of the declaration, never of the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    declared_type: &'static str,
    sensitivity: Sensitivity,
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        declared_type: &'static str,
        sensitivity: Sensitivity,
    ) -> Self {
        Self {
            name,
            declared_type,
            sensitivity,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The field's type as written in the declaration.
    pub const fn declared_type(&self) -> &'static str {
        self.declared_type
    }

    pub const fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }
}

/// Decides whether a declared field is personal data or sensitive information.
///
/// The flattener masks a field when either predicate returns `true`.
/// Implementations must be total: they are called for every redactable leaf.
pub trait SensitivityClassifier {
    fn is_personal_data(&self, field: &FieldDescriptor) -> bool;

    fn is_sensitive_info(&self, field: &FieldDescriptor) -> bool;

    /// Returns `true` if the field should be masked when redaction is enabled.
    fn is_sensitive(&self, field: &FieldDescriptor) -> bool {
        self.is_personal_data(field) || self.is_sensitive_info(field)
    }
}

/// Classifier that trusts the sensitivity recorded in each descriptor.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclaredSensitivity;

impl SensitivityClassifier for DeclaredSensitivity {
    fn is_personal_data(&self, field: &FieldDescriptor) -> bool {
        field.sensitivity() == Sensitivity::PersonalData
    }

    fn is_sensitive_info(&self, field: &FieldDescriptor) -> bool {
        field.sensitivity() == Sensitivity::SensitiveInfo
    }
}

impl<C> SensitivityClassifier for &C
where
    C: SensitivityClassifier + ?Sized,
{
    fn is_personal_data(&self, field: &FieldDescriptor) -> bool {
        (**self).is_personal_data(field)
    }

    fn is_sensitive_info(&self, field: &FieldDescriptor) -> bool {
        (**self).is_sensitive_info(field)
    }
}
