//! The tree of values a JSON document parses into.

use core::fmt::{self, Display};
use core::mem;
use core::str;
use std::io;
use std::sync::Arc;

use crate::error::{Error, ErrorCode, Result};
use crate::number::Number;

mod from;
mod partial_eq;
mod serde;

pub use self::from::ToJson;

/// An ordered sequence of values.
pub type Array = Vec<Value>;

/// An ordered sequence of key/value members.
///
/// Keys are not required to be unique; members keep their insertion order
/// through serialization. Equality of object-valued [`Value`]s is
/// order-independent.
pub type Object = Vec<(String, Value)>;

/// Represents one JSON value.
///
/// String, array, and object payloads sit behind atomically reference-counted
/// pointers: cloning a `Value` clones a handle, never the payload, and two
/// owners on different threads may be dropped concurrently. A payload is only
/// ever written through a uniquely-owned handle (see the `take_*` casts), so
/// sharing is not observable.
///
/// String payloads are byte vectors rather than `String`s because
/// [`Value::string_unchecked`] admits unvalidated bytes; the serializer
/// re-checks them.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The `null` keyword.
    #[default]
    Null,
    /// The `true` and `false` keywords.
    Bool(bool),
    /// A finite double.
    Number(Number),
    /// A byte string, well-formed UTF-8 unless constructed unchecked. May
    /// contain NUL bytes.
    String(Arc<Vec<u8>>),
    /// An ordered sequence of values.
    Array(Arc<Array>),
    /// An ordered sequence of key/value members.
    Object(Arc<Object>),
}

/// The six tags a [`Value`] can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    /// The `null` keyword.
    Null,
    /// The `true` and `false` keywords.
    Boolean,
    /// A finite double.
    Number,
    /// A byte string.
    String,
    /// An ordered sequence of values.
    Array,
    /// An ordered sequence of key/value members.
    Object,
}

impl Value {
    /// Returns the tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Returns true if this value is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Builds a string value, validating that the bytes are well-formed
    /// UTF-8. NUL bytes are fine.
    ///
    /// ```
    /// assert!(ujson::Value::string("Sk\u{e5}l!").is_ok());
    /// assert!(ujson::Value::string(b"\xFF".to_vec()).unwrap_err().is_string());
    /// ```
    pub fn string(bytes: impl Into<Vec<u8>>) -> Result<Value> {
        let bytes = bytes.into();
        match str::from_utf8(&bytes) {
            Ok(_) => Ok(Value::String(Arc::new(bytes))),
            Err(_) => Err(Error::new(ErrorCode::InvalidUtf8)),
        }
    }

    /// Builds a string value without validating the bytes.
    ///
    /// Everything else keeps working on such a value, but serializing it
    /// fails if the bytes turn out not to be well-formed UTF-8.
    pub fn string_unchecked(bytes: impl Into<Vec<u8>>) -> Value {
        Value::String(Arc::new(bytes.into()))
    }

    /// Builds a number value. Fails if the double is infinite or NaN.
    pub fn number(n: f64) -> Result<Value> {
        Number::from_f64(n).map(Value::Number)
    }

    /// Wraps an array, taking ownership of the elements.
    pub fn array(elements: Array) -> Value {
        Value::Array(Arc::new(elements))
    }

    /// Wraps an object, taking ownership of the members.
    pub fn object(members: Object) -> Value {
        Value::Object(Arc::new(members))
    }

    /// If this value is a boolean, returns it.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If this value is a number, returns it as a double.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If this value is a string holding well-formed UTF-8, returns it.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(bytes) => str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// If this value is a string, returns its bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// If this value is an array, returns its elements.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// If this value is an object, returns its members.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Returns the boolean held by this value; fails with a cast error on
    /// any other tag.
    pub fn bool_cast(&self) -> Result<bool> {
        self.as_bool().ok_or_else(wrong_type)
    }

    /// Returns the double held by this value; fails with a cast error on any
    /// other tag.
    pub fn double_cast(&self) -> Result<f64> {
        self.as_f64().ok_or_else(wrong_type)
    }

    /// Returns the number held by this value as an `i32`.
    ///
    /// Fails with a cast error if the value is not a number, or if the
    /// double is non-integral or outside the `i32` range.
    pub fn int32_cast(&self) -> Result<i32> {
        let n = self.double_cast()?;
        let i = n as i32;
        if f64::from(i) == n {
            Ok(i)
        } else {
            Err(Error::new(ErrorCode::IntegerOutOfRange))
        }
    }

    /// Returns the number held by this value as a `u32`.
    ///
    /// Fails with a cast error if the value is not a number, or if the
    /// double is non-integral or outside the `u32` range.
    pub fn uint32_cast(&self) -> Result<u32> {
        let n = self.double_cast()?;
        let u = n as u32;
        if f64::from(u) == n {
            Ok(u)
        } else {
            Err(Error::new(ErrorCode::IntegerOutOfRange))
        }
    }

    /// Returns the bytes of the string held by this value; fails with a cast
    /// error on any other tag.
    pub fn string_cast(&self) -> Result<&[u8]> {
        match self {
            Value::String(bytes) => Ok(bytes),
            _ => Err(wrong_type()),
        }
    }

    /// Returns the elements of the array held by this value; fails with a
    /// cast error on any other tag.
    pub fn array_cast(&self) -> Result<&Array> {
        match self {
            Value::Array(elements) => Ok(elements),
            _ => Err(wrong_type()),
        }
    }

    /// Returns the members of the object held by this value; fails with a
    /// cast error on any other tag.
    pub fn object_cast(&self) -> Result<&Object> {
        match self {
            Value::Object(members) => Ok(members),
            _ => Err(wrong_type()),
        }
    }

    /// Consuming form of [`bool_cast`](Value::bool_cast): on success the
    /// value is left `null`; on failure it is untouched.
    pub fn take_bool(&mut self) -> Result<bool> {
        let b = self.bool_cast()?;
        *self = Value::Null;
        Ok(b)
    }

    /// Consuming form of [`double_cast`](Value::double_cast).
    pub fn take_double(&mut self) -> Result<f64> {
        let n = self.double_cast()?;
        *self = Value::Null;
        Ok(n)
    }

    /// Consuming form of [`int32_cast`](Value::int32_cast).
    pub fn take_int32(&mut self) -> Result<i32> {
        let i = self.int32_cast()?;
        *self = Value::Null;
        Ok(i)
    }

    /// Consuming form of [`uint32_cast`](Value::uint32_cast).
    pub fn take_uint32(&mut self) -> Result<u32> {
        let u = self.uint32_cast()?;
        *self = Value::Null;
        Ok(u)
    }

    /// Moves the string payload out, leaving the value `null`.
    ///
    /// A uniquely-owned payload transfers without copying; a payload shared
    /// with other handles is cloned. On failure the value is untouched.
    pub fn take_string(&mut self) -> Result<Vec<u8>> {
        match mem::replace(self, Value::Null) {
            Value::String(shared) => Ok(unwrap_or_clone(shared)),
            other => {
                *self = other;
                Err(wrong_type())
            }
        }
    }

    /// Moves the array payload out, leaving the value `null`. Sharing
    /// behaves as in [`take_string`](Value::take_string).
    pub fn take_array(&mut self) -> Result<Array> {
        match mem::replace(self, Value::Null) {
            Value::Array(shared) => Ok(unwrap_or_clone(shared)),
            other => {
                *self = other;
                Err(wrong_type())
            }
        }
    }

    /// Moves the object payload out, leaving the value `null`. Sharing
    /// behaves as in [`take_string`](Value::take_string).
    pub fn take_object(&mut self) -> Result<Object> {
        match mem::replace(self, Value::Null) {
            Value::Object(shared) => Ok(unwrap_or_clone(shared)),
            other => {
                *self = other;
                Err(wrong_type())
            }
        }
    }

    /// If this value is an object, returns the value of the first member
    /// with the given key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => find(members, key),
            _ => None,
        }
    }

    /// Exchanges the contents of two values in O(1).
    pub fn swap(&mut self, other: &mut Value) {
        mem::swap(self, other);
    }
}

/// Returns the value of the first member with the given key, if any.
///
/// Later duplicates are not considered.
pub fn find<'a>(object: &'a [(String, Value)], key: &str) -> Option<&'a Value> {
    object
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}

/// Equivalent to [`find`].
pub fn at<'a>(object: &'a [(String, Value)], key: &str) -> Option<&'a Value> {
    find(object, key)
}

fn wrong_type() -> Error {
    Error::new(ErrorCode::WrongType)
}

fn unwrap_or_clone<T: Clone>(shared: Arc<T>) -> T {
    Arc::try_unwrap(shared).unwrap_or_else(|shared| (*shared).clone())
}

struct WriterFormatter<'a, 'b: 'a> {
    inner: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b> io::Write for WriterFormatter<'a, 'b> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // The serializer hands every fragment to the writer whole, and each
        // fragment is valid UTF-8 on its own.
        let s = unsafe { str::from_utf8_unchecked(buf) };
        self.inner
            .write_str(s)
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "fmt error"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Display for Value {
    /// Renders the value as JSON text: the compact form with `{}`, the
    /// indented form with `{:#}`. Fails if a string payload is not
    /// well-formed UTF-8.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let alternate = f.alternate();
        let mut wr = WriterFormatter { inner: f };
        let result = if alternate {
            crate::ser::to_writer_pretty(&mut wr, self)
        } else {
            crate::ser::to_writer(&mut wr, self)
        };
        result.map_err(|_| fmt::Error)
    }
}
