//! Dynamically typed nodes (parsed JSON and similar).
//!
//! Dynamic nodes have no declared field set, so the flattener cannot walk them
//! as records. [`Token::normalize`] converts them into plain
//! Mapping/Sequence/Leaf values first:
//!
//! | Token | Value |
//! |-------|-------|
//! | `Object` | `Mapping`, entry order preserved |
//! | `Array` | `Sequence` of normalized elements |
//! | `Scalar(Null)` | `Null` |
//! | other scalars | `Leaf` |
//!
//! Normalized scalars are never zero values: a JSON `0` or `false` renders
//! as-is wherever it appears.

use crate::value::{Leaf, Value};

/// A dynamically typed node.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Object(Vec<(String, Token)>),
    Array(Vec<Token>),
    Scalar(Scalar),
}

/// Terminal token content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    Null,
    Bool(bool),
    /// A number kept in its textual form so no precision is lost.
    Number(String),
    String(String),
}

impl Token {
    /// Recursively converts this node into the flattener's value model.
    pub fn normalize(&self) -> Value {
        match self {
            Token::Object(entries) => Value::Mapping(
                entries
                    .iter()
                    .map(|(key, token)| (key.clone(), token.normalize()))
                    .collect(),
            ),
            Token::Array(items) => Value::Sequence(items.iter().map(Token::normalize).collect()),
            Token::Scalar(scalar) => scalar.normalize(),
        }
    }

    /// Parses a JSON document into a token tree.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(Token::from(value))
    }
}

impl Scalar {
    fn normalize(&self) -> Value {
        match self {
            Scalar::Null => Value::Null,
            Scalar::Bool(value) => Value::Leaf(Leaf::new(value.to_string())),
            Scalar::Number(text) | Scalar::String(text) => Value::Leaf(Leaf::new(text.clone())),
        }
    }
}

#[cfg(feature = "json")]
impl From<&serde_json::Value> for Token {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Token::Scalar(Scalar::Null),
            Json::Bool(flag) => Token::Scalar(Scalar::Bool(*flag)),
            Json::Number(number) => Token::Scalar(Scalar::Number(number.to_string())),
            Json::String(text) => Token::Scalar(Scalar::String(text.clone())),
            Json::Array(items) => Token::Array(items.iter().map(Token::from).collect()),
            Json::Object(entries) => Token::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Token::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Token {
    fn from(value: serde_json::Value) -> Self {
        Token::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(text: &str) -> Token {
        Token::Scalar(Scalar::String(text.to_string()))
    }

    #[test]
    fn object_becomes_mapping_in_entry_order() {
        let token = Token::Object(vec![
            ("b".to_string(), string("2")),
            ("a".to_string(), string("1")),
        ]);
        assert_eq!(
            token.normalize(),
            Value::Mapping(vec![
                ("b".to_string(), Value::leaf("2")),
                ("a".to_string(), Value::leaf("1")),
            ])
        );
    }

    #[test]
    fn nested_arrays_are_normalized_recursively() {
        let token = Token::Array(vec![
            Token::Array(vec![string("x")]),
            Token::Object(vec![("k".to_string(), Token::Scalar(Scalar::Null))]),
        ]);
        assert_eq!(
            token.normalize(),
            Value::Sequence(vec![
                Value::Sequence(vec![Value::leaf("x")]),
                Value::Mapping(vec![("k".to_string(), Value::Null)]),
            ])
        );
    }

    #[test]
    fn scalars_are_not_zero_values() {
        let zero = Token::Scalar(Scalar::Number("0".to_string())).normalize();
        assert!(!zero.is_null_or_default());
        let no = Token::Scalar(Scalar::Bool(false)).normalize();
        assert_eq!(no, Value::leaf("false"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_strings_render_without_quotes() {
        let token = Token::from_json_str(r#"{"name": "alice", "age": 30, "ok": true}"#).unwrap();
        let Value::Mapping(entries) = token.normalize() else {
            panic!("expected a mapping");
        };
        assert!(entries.contains(&("name".to_string(), Value::leaf("alice"))));
        assert!(entries.contains(&("age".to_string(), Value::leaf("30"))));
        assert!(entries.contains(&("ok".to_string(), Value::leaf("true"))));
    }

    #[cfg(feature = "json")]
    #[test]
    fn invalid_json_is_reported() {
        assert!(Token::from_json_str("{not json").is_err());
    }
}
