//! The value model the flattener walks.
//!
//! - **`descriptor`**: static per-field metadata and the sensitivity classifier seam
//! - **`describe`**: the [`Describe`] capability and its std implementations
//!
//! A [`Value`] is an owned snapshot. Building one never touches the source
//! beyond reading it, so flattening cannot mutate caller data.

mod describe;
mod descriptor;

pub use describe::Describe;
pub use descriptor::{DeclaredSensitivity, FieldDescriptor, SensitivityClassifier};

use crate::token::Token;

/// A described value, tagged by shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absent value (`None`, JSON `null`).
    #[default]
    Null,
    /// Terminal value rendered by its own string conversion.
    Leaf(Leaf),
    /// Ordered elements, homogeneous or not.
    Sequence(Vec<Value>),
    /// Key/value entries. Keys are already rendered to strings.
    Mapping(Vec<(String, Value)>),
    /// Named fields known at compile or registration time.
    Record(Record),
    /// Dynamically typed node, normalized before it is flattened.
    Token(Token),
}

impl Value {
    /// Builds a leaf from any displayable value. The leaf is never a zero value.
    pub fn leaf(value: impl std::fmt::Display) -> Self {
        Value::Leaf(Leaf::new(value.to_string()))
    }

    /// Terminal-type check: numbers, strings, booleans, dates, enums.
    pub fn is_system_type(&self) -> bool {
        matches!(self, Value::Leaf(_))
    }

    /// Sequence-like or map-like values.
    pub fn is_enumerable(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    /// `true` for null and for values equal to their type's zero value.
    pub fn is_null_or_default(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Leaf(leaf) => leaf.is_default(),
            Value::Record(record) => record.is_default(),
            Value::Sequence(_) | Value::Mapping(_) | Value::Token(_) => false,
        }
    }

    /// Plain string conversion, used for mapping entries and field-less records.
    ///
    /// Containers have no meaningful rendering and produce an empty string.
    pub(crate) fn render(&self) -> String {
        match self {
            Value::Leaf(leaf) => leaf.text.clone(),
            Value::Record(record) => record.rendered.clone(),
            Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Token(_) => {
                String::new()
            }
        }
    }
}

/// A rendered terminal value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf {
    text: String,
    is_default: bool,
}

impl Leaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_default: false,
        }
    }

    /// Builds a leaf and records whether the source equals its type's zero value.
    pub fn with_default(text: impl Into<String>, is_default: bool) -> Self {
        Self {
            text: text.into(),
            is_default,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// A value with named fields.
///
/// Generated by `#[derive(Describe)]`, or built by hand:
///
/// ```rust
/// use flatprops::{FieldDescriptor, Record, Sensitivity, Value};
///
/// const USER: FieldDescriptor = FieldDescriptor::new("User", "String", Sensitivity::PersonalData);
///
/// let record = Record::new("Login").field(USER, Value::leaf("alice"));
/// assert_eq!(record.fields().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    type_name: &'static str,
    rendered: String,
    fields: Vec<Field>,
    is_default: bool,
}

impl Record {
    /// Creates an empty record that renders as its type name.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            rendered: type_name.to_string(),
            fields: Vec::new(),
            is_default: false,
        }
    }

    /// Overrides the string rendering used when the record is emitted as a leaf.
    #[must_use]
    pub fn with_rendering(mut self, rendered: impl Into<String>) -> Self {
        self.rendered = rendered.into();
        self
    }

    /// Marks the whole record as its type's zero value.
    #[must_use]
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Appends a field. Fields are visited in insertion order.
    #[must_use]
    pub fn field(mut self, descriptor: FieldDescriptor, value: Value) -> Self {
        self.fields.push(Field { descriptor, value });
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// One declared field of a [`Record`].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub descriptor: FieldDescriptor,
    pub value: Value,
}
