//! Conversions from Rust types into [`Value`]s.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::error::Error;
use crate::number::Number;
use crate::value::{Array, Object, Value};

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Value {
                    Value::Number(Number::from(i))
                }
            }
        )*
    };
}

from_integer!(i8 i16 i32 u8 u16 u32);

/// The checked double conversion; fails on infinities and NaN.
impl TryFrom<f64> for Value {
    type Error = Error;

    fn try_from(n: f64) -> Result<Value, Error> {
        Number::from_f64(n).map(Value::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(Arc::new(s.as_bytes().to_vec()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(Arc::new(s.into_bytes()))
    }
}

/// Takes ownership of the elements; no per-element copies are made.
impl From<Array> for Value {
    fn from(elements: Array) -> Value {
        Value::array(elements)
    }
}

/// Takes ownership of the members; no per-member copies are made.
impl From<Object> for Value {
    fn from(members: Object) -> Value {
        Value::object(members)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Value {
        Value::array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Value {
        Value::object(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

/// Types that know how to wrap themselves as a [`Value`].
///
/// Implement this for your own types to let them (and containers of them)
/// participate in [`json!`](crate::json) literals and the `From`
/// conversions:
///
/// ```
/// use ujson::{json, ToJson, Value};
///
/// struct Book {
///     title: String,
///     year: i32,
/// }
///
/// impl ToJson for Book {
///     fn to_json(&self) -> Value {
///         json!({"title": self.title.as_str(), "year": self.year})
///     }
/// }
///
/// let shelf = vec![
///     Book { title: "Elements of Programming".to_owned(), year: 2009 },
/// ];
/// assert_eq!(
///     ujson::to_string(&shelf.to_json()).unwrap(),
///     r#"[{"title":"Elements of Programming","year":2009}]"#
/// );
/// ```
pub trait ToJson {
    /// Builds a value describing `self`.
    fn to_json(&self) -> Value;
}

impl ToJson for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }
}

impl ToJson for Number {
    fn to_json(&self) -> Value {
        Value::Number(*self)
    }
}

impl ToJson for bool {
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! to_json_integer {
    ($($ty:ty)*) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> Value {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

to_json_integer!(i8 i16 i32 u8 u16 u32);

/// # Panics
///
/// Panics if the value is infinite or NaN; the hook has no error channel.
/// Use [`Value::try_from`] or [`Number::from_f64`] where non-finite input is
/// possible.
impl ToJson for f64 {
    fn to_json(&self) -> Value {
        match Number::from_f64(*self) {
            Ok(n) => Value::Number(n),
            Err(_) => panic!("JSON numbers must be finite"),
        }
    }
}

impl ToJson for f32 {
    fn to_json(&self) -> Value {
        f64::from(*self).to_json()
    }
}

impl ToJson for str {
    fn to_json(&self) -> Value {
        Value::from(self)
    }
}

impl ToJson for String {
    fn to_json(&self) -> Value {
        Value::from(self.as_str())
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> Value {
        match self {
            Some(inner) => inner.to_json(),
            None => Value::Null,
        }
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> Value {
        Value::array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> Value {
        self.as_slice().to_json()
    }
}

impl<T: ToJson> ToJson for BTreeMap<String, T> {
    fn to_json(&self) -> Value {
        Value::object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl<T: ToJson> ToJson for HashMap<String, T> {
    fn to_json(&self) -> Value {
        Value::object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}
