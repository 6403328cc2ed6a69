//! Traversal: turns one [`Value`] tree into flat `path -> string` entries.
//!
//! Dispatch, in order:
//!
//! | Shape | Emitted |
//! |-------|---------|
//! | `Null` (top level) | nothing |
//! | `Token` | normalized, then dispatched again |
//! | `Mapping` | one entry per key under the prefix; nested mappings recurse, sequences go through the field handler |
//! | `Record` | each declared field through the field handler; a field-less record is a leaf |
//! | `Sequence` | element `i` flattened under `prefix[i]` |
//! | `Leaf` | `{prefix: text}` |
//!
//! The field handler is where zero values collapse to `""` and where
//! redaction is applied. A mapping-valued field contributes its entries at the
//! field's own level (`{parent}:{entryKey}`); the field name itself is not
//! part of the path. Mapping entries never reach the sensitivity check.

use std::borrow::Cow;

use super::{FlatMap, FlattenOptions, REDACTION_MARKER};
use crate::value::{FieldDescriptor, Record, SensitivityClassifier, Value};

pub(crate) struct Walk<'a, C: ?Sized> {
    options: &'a FlattenOptions,
    classifier: &'a C,
    out: FlatMap,
}

impl<'a, C> Walk<'a, C>
where
    C: SensitivityClassifier + ?Sized,
{
    pub(crate) fn new(options: &'a FlattenOptions, classifier: &'a C) -> Self {
        Self {
            options,
            classifier,
            out: FlatMap::new(),
        }
    }

    pub(crate) fn finish(self) -> FlatMap {
        self.out
    }

    /// Flattens `value` with no field context.
    pub(crate) fn value(&mut self, value: &Value, prefix: &str) {
        match value {
            Value::Null => {}
            Value::Token(token) => self.value(&token.normalize(), prefix),
            Value::Mapping(entries) => self.mapping(entries, prefix),
            Value::Record(record) => self.record(record, prefix),
            Value::Sequence(items) => {
                let key = self.options.casing().apply(prefix);
                self.sequence(items, &key);
            }
            Value::Leaf(leaf) => {
                let key = self.options.casing().apply(prefix);
                self.emit(key, leaf.as_str().to_string());
            }
        }
    }

    fn mapping(&mut self, entries: &[(String, Value)], prefix: &str) {
        for (entry_key, entry) in entries {
            let entry = normalized(entry);
            match entry.as_ref() {
                Value::Mapping(inner) => {
                    let item_key = self.key(prefix, entry_key);
                    self.mapping(inner, &item_key);
                }
                other if other.is_enumerable() => self.field(entry_key, None, other, prefix),
                other => {
                    let item_key = self.key(prefix, entry_key);
                    self.emit(item_key, other.render());
                }
            }
        }
    }

    fn record(&mut self, record: &Record, prefix: &str) {
        if record.fields().is_empty() {
            let key = self.options.casing().apply(prefix);
            self.emit(key, record.rendered().to_string());
            return;
        }
        for field in record.fields() {
            self.field(
                field.descriptor.name(),
                Some(&field.descriptor),
                &field.value,
                prefix,
            );
        }
    }

    fn sequence(&mut self, items: &[Value], key: &str) {
        for (index, item) in items.iter().enumerate() {
            self.value(item, &format!("{key}[{index}]"));
        }
    }

    /// Emits one named field found under `parent`.
    ///
    /// `descriptor` is `None` for mapping entries, which are never redacted.
    fn field(
        &mut self,
        name: &str,
        descriptor: Option<&FieldDescriptor>,
        value: &Value,
        parent: &str,
    ) {
        let key = self.key(parent, name);
        if value.is_null_or_default() {
            self.emit(key, String::new());
            return;
        }
        match value {
            Value::Token(token) => self.field(name, descriptor, &token.normalize(), parent),
            // Entries sit beside the field, keyed from `parent`.
            Value::Mapping(entries) => self.mapping(entries, parent),
            Value::Sequence(items) => self.sequence(items, &key),
            Value::Record(record) => self.record(record, &key),
            leaf if leaf.is_system_type() => {
                let masked = self.options.redact()
                    && descriptor.is_some_and(|field| self.classifier.is_sensitive(field));
                let rendered = if masked {
                    REDACTION_MARKER.to_string()
                } else {
                    leaf.render()
                };
                self.emit(key, rendered);
            }
            Value::Leaf(_) | Value::Null => self.emit(key, String::new()),
        }
    }

    fn key(&self, prefix: &str, name: &str) -> String {
        let joined = if prefix.is_empty() {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("{prefix}{}{name}", self.options.delimiter()))
        };
        self.options.casing().apply(&joined)
    }

    // Paths are derived structurally; a repeated key means the input reused
    // a name and the later entry wins.
    fn emit(&mut self, key: String, value: String) {
        self.out.insert(key, value);
    }
}

fn normalized(value: &Value) -> Cow<'_, Value> {
    match value {
        Value::Token(token) => Cow::Owned(token.normalize()),
        other => Cow::Borrowed(other),
    }
}
