//! A strict, self-contained JSON codec over a shared value tree.
//!
//! This crate parses JSON text into a six-variant [`Value`] tree and
//! serializes such trees back to text. The parser accepts exactly the RFC
//! grammar: numbers must be finite doubles, strings must be well-formed
//! UTF-8 (surrogate escapes must pair up), and nothing may precede or follow
//! the single top-level value. The serializer emits either UTF-8 or pure
//! ASCII with `\uXXXX` escapes, compact or indented.
//!
//! String, array, and object payloads are reference counted: cloning a
//! `Value` is cheap, and the consuming `take_*` casts move a uniquely-owned
//! payload out without copying.
//!
//! # Parsing
//!
//! ```
//! use ujson::Value;
//!
//! let value = ujson::from_str(r#"{"a": true, "b": [1, 2]}"#)?;
//! assert_eq!(value.get("a"), Some(&Value::Bool(true)));
//! assert_eq!(ujson::to_string(&value)?, r#"{"a":true,"b":[1,2]}"#);
//! # Ok::<(), ujson::Error>(())
//! ```
//!
//! # Building and writing
//!
//! ```
//! use ujson::{json, Encoding, WriteOptions};
//!
//! let value = json!({"greeting": "Sk\u{e5}l! \u{1f37b}"});
//!
//! // UTF-8 passes through; ASCII escapes everything above U+007E.
//! assert_eq!(
//!     ujson::to_string(&value)?,
//!     "{\"greeting\":\"Sk\u{e5}l! \u{1f37b}\"}"
//! );
//! let ascii = WriteOptions { indent_amount: 0, encoding: Encoding::Ascii };
//! assert_eq!(
//!     ujson::to_string_with(&value, &ascii)?,
//!     r#"{"greeting":"Sk\u00E5l! \uD83C\uDF7B"}"#
//! );
//! # Ok::<(), ujson::Error>(())
//! ```

#![deny(missing_docs)]

pub use crate::de::{from_reader, from_slice, from_str};
pub use crate::error::{Category, Error, Result};
pub use crate::number::Number;
pub use crate::ser::{
    to_string, to_string_pretty, to_string_with, to_vec, to_vec_pretty, to_vec_with, to_writer,
    to_writer_pretty, to_writer_with, CompactFormatter, Encoding, Formatter, PrettyFormatter,
    Serializer, WriteOptions,
};
pub use crate::value::{at, find, Array, Object, ToJson, Value, ValueType};

#[macro_use]
mod macros;

mod de;
mod error;
mod number;
mod read;
mod ser;
mod value;
