//! The [`Describe`] capability: how a Rust value presents itself to the flattener.
//!
//! | Rust type | Shape |
//! |-----------|-------|
//! | integers, floats, `bool`, `char`, strings, IP addresses, dates | `Leaf` |
//! | `Option<T>` | `Null` or the inner shape |
//! | `Vec`, slices, arrays, `VecDeque`, sets | `Sequence` |
//! | `HashMap`, `BTreeMap` with displayable keys | `Mapping` |
//! | `#[derive(Describe)]` structs and data enums | `Record` |
//! | `serde_json::Value` | `Token` |
//!
//! Zero values (`0`, `false`, `'\0'`, `""`) are flagged on the leaf so the
//! flattener can emit them as empty strings, the same way it emits null.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    fmt::Display,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    rc::Rc,
    sync::Arc,
};

use super::{Leaf, Value};
use crate::token::Token;

/// Types that can be projected into a [`Value`] tree.
///
/// Derive it with `#[derive(Describe)]` for your own records; the derive
/// emits one [`FieldDescriptor`](super::FieldDescriptor) per declared field.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Describe`",
    label = "this type cannot be flattened",
    note = "use `#[derive(Describe)]` on the type definition",
    note = "or skip the field with `#[describe(skip)]`"
)]
pub trait Describe {
    fn describe(&self) -> Value;
}

// =============================================================================
// Leaves
// =============================================================================

macro_rules! impl_describe_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe(&self) -> Value {
                    Value::Leaf(Leaf::with_default(self.to_string(), *self == 0))
                }
            }
        )*
    };
}

impl_describe_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_describe_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                #[allow(clippy::float_cmp)]
                fn describe(&self) -> Value {
                    Value::Leaf(Leaf::with_default(self.to_string(), *self == 0.0))
                }
            }
        )*
    };
}

impl_describe_float!(f32, f64);

impl Describe for bool {
    fn describe(&self) -> Value {
        Value::Leaf(Leaf::with_default(self.to_string(), !*self))
    }
}

impl Describe for char {
    fn describe(&self) -> Value {
        Value::Leaf(Leaf::with_default(self.to_string(), *self == '\0'))
    }
}

impl Describe for str {
    fn describe(&self) -> Value {
        Value::Leaf(Leaf::with_default(self, self.is_empty()))
    }
}

impl Describe for String {
    fn describe(&self) -> Value {
        self.as_str().describe()
    }
}

macro_rules! impl_describe_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe(&self) -> Value {
                    Value::leaf(self)
                }
            }
        )*
    };
}

impl_describe_display!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone};

    use super::{Describe, Leaf, Value};

    impl<Tz> Describe for DateTime<Tz>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        fn describe(&self) -> Value {
            let is_default = self.naive_utc() == NaiveDateTime::default();
            Value::Leaf(Leaf::with_default(
                self.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                is_default,
            ))
        }
    }

    macro_rules! impl_describe_naive {
        ($($ty:ty),* $(,)?) => {
            $(
                impl Describe for $ty {
                    fn describe(&self) -> Value {
                        Value::Leaf(Leaf::with_default(self.to_string(), *self == <$ty>::default()))
                    }
                }
            )*
        };
    }

    impl_describe_naive!(NaiveDate, NaiveTime, NaiveDateTime);
}

// =============================================================================
// Wrappers
// =============================================================================

impl<T> Describe for Option<T>
where
    T: Describe,
{
    fn describe(&self) -> Value {
        self.as_ref().map_or(Value::Null, Describe::describe)
    }
}

impl<T> Describe for &T
where
    T: Describe + ?Sized,
{
    fn describe(&self) -> Value {
        (**self).describe()
    }
}

impl<T> Describe for Box<T>
where
    T: Describe + ?Sized,
{
    fn describe(&self) -> Value {
        (**self).describe()
    }
}

impl<T> Describe for Rc<T>
where
    T: Describe + ?Sized,
{
    fn describe(&self) -> Value {
        (**self).describe()
    }
}

impl<T> Describe for Arc<T>
where
    T: Describe + ?Sized,
{
    fn describe(&self) -> Value {
        (**self).describe()
    }
}

impl<B> Describe for Cow<'_, B>
where
    B: Describe + ToOwned + ?Sized,
{
    fn describe(&self) -> Value {
        (**self).describe()
    }
}

// =============================================================================
// Sequences
// =============================================================================

fn sequence<'a, T, I>(items: I) -> Value
where
    T: Describe + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Value::Sequence(items.into_iter().map(Describe::describe).collect())
}

impl<T> Describe for [T]
where
    T: Describe,
{
    fn describe(&self) -> Value {
        sequence(self)
    }
}

impl<T, const N: usize> Describe for [T; N]
where
    T: Describe,
{
    fn describe(&self) -> Value {
        sequence(self)
    }
}

impl<T> Describe for Vec<T>
where
    T: Describe,
{
    fn describe(&self) -> Value {
        sequence(self)
    }
}

impl<T> Describe for VecDeque<T>
where
    T: Describe,
{
    fn describe(&self) -> Value {
        sequence(self)
    }
}

impl<T> Describe for BTreeSet<T>
where
    T: Describe,
{
    fn describe(&self) -> Value {
        sequence(self)
    }
}

impl<T, S> Describe for HashSet<T, S>
where
    T: Describe,
{
    fn describe(&self) -> Value {
        sequence(self)
    }
}

// =============================================================================
// Mappings
// =============================================================================

fn mapping<'a, K, V, I>(entries: I) -> Value
where
    K: Display + 'a,
    V: Describe + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    Value::Mapping(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.describe()))
            .collect(),
    )
}

impl<K, V> Describe for BTreeMap<K, V>
where
    K: Display,
    V: Describe,
{
    fn describe(&self) -> Value {
        mapping(self)
    }
}

impl<K, V, S> Describe for HashMap<K, V, S>
where
    K: Display,
    V: Describe,
{
    fn describe(&self) -> Value {
        mapping(self)
    }
}

// =============================================================================
// Already-described values
// =============================================================================

impl Describe for Value {
    fn describe(&self) -> Value {
        self.clone()
    }
}

impl Describe for Token {
    fn describe(&self) -> Value {
        Value::Token(self.clone())
    }
}

#[cfg(feature = "json")]
impl Describe for serde_json::Value {
    fn describe(&self) -> Value {
        Value::Token(Token::from(self))
    }
}
