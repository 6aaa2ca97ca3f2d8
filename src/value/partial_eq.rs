use super::{Object, Value};

/// Structural equality.
///
/// Values of different tags are unequal. Objects compare as multisets: both
/// member lists are stable-sorted by key and compared pairwise, so insertion
/// order does not matter but duplicate keys do.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => object_eq(a, b),
            _ => false,
        }
    }
}

/// `Number` excludes NaN, so equality is reflexive.
impl Eq for Value {}

fn object_eq(lhs: &Object, rhs: &Object) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }
    // Members are usually in matching order; sort only when they are not.
    if lhs.iter().zip(rhs.iter()).all(|(a, b)| a == b) {
        return true;
    }
    let mut lhs_sorted: Vec<&(String, Value)> = lhs.iter().collect();
    let mut rhs_sorted: Vec<&(String, Value)> = rhs.iter().collect();
    lhs_sorted.sort_by(|a, b| a.0.cmp(&b.0));
    rhs_sorted.sort_by(|a, b| a.0.cmp(&b.0));
    lhs_sorted == rhs_sorted
}

// Comparisons against plain Rust values, so assertions and lookups can be
// written without wrapping both sides.

/// A string payload matches text when the bytes agree; a payload that is not
/// well-formed UTF-8 can never equal a `str`.
fn str_eq(value: &Value, text: &str) -> bool {
    match value.as_bytes() {
        Some(bytes) => bytes == text.as_bytes(),
        None => false,
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        str_eq(self, other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        str_eq(self, other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        str_eq(self, other)
    }
}

impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        str_eq(other, self)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        str_eq(other, self)
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        str_eq(other, self)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other.as_bool() == Some(*self)
    }
}

macro_rules! number_eq {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    self.as_f64() == Some(f64::from(*other))
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other.as_f64() == Some(f64::from(*self))
                }
            }

            impl PartialEq<$ty> for &Value {
                fn eq(&self, other: &$ty) -> bool {
                    self.as_f64() == Some(f64::from(*other))
                }
            }

            impl PartialEq<$ty> for &mut Value {
                fn eq(&self, other: &$ty) -> bool {
                    self.as_f64() == Some(f64::from(*other))
                }
            }
        )*
    };
}

number_eq!(i8 i16 i32 u8 u16 u32 f32 f64);
