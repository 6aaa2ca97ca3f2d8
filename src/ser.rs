//! Serialize [`Value`] trees as JSON text.

use std::io;

use crate::error::{Error, ErrorCode, Result};
use crate::value::Value;

/// How code points outside ASCII are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Every code point above U+007E becomes a `\uXXXX` escape, with a
    /// surrogate pair for code points above U+FFFF. The output is plain
    /// ASCII.
    Ascii,
    /// Code points pass through as their UTF-8 bytes.
    Utf8,
}

/// Options controlling the textual form of serialized output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level. Zero produces the compact single-line form.
    pub indent_amount: usize,
    /// How non-ASCII content is written.
    pub encoding: Encoding,
}

impl WriteOptions {
    /// Compact single-line output, UTF-8 strings.
    pub fn compact() -> WriteOptions {
        WriteOptions {
            indent_amount: 0,
            encoding: Encoding::Utf8,
        }
    }

    /// Four spaces per nesting level, UTF-8 strings.
    pub fn indented_utf8() -> WriteOptions {
        WriteOptions {
            indent_amount: 4,
            encoding: Encoding::Utf8,
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions::compact()
    }
}

/// A structure for serializing a value tree as JSON text.
pub struct Serializer<W, F = CompactFormatter> {
    writer: W,
    formatter: F,
    encoding: Encoding,
}

impl<W> Serializer<W>
where
    W: io::Write,
{
    /// Creates a serializer producing the compact form.
    pub fn new(writer: W) -> Self {
        Serializer::with_formatter(writer, CompactFormatter, Encoding::Utf8)
    }
}

impl<W> Serializer<W, PrettyFormatter>
where
    W: io::Write,
{
    /// Creates a serializer producing the indented form.
    pub fn pretty(writer: W) -> Self {
        Serializer::with_formatter(writer, PrettyFormatter::new(), Encoding::Utf8)
    }
}

impl<W, F> Serializer<W, F>
where
    W: io::Write,
    F: Formatter,
{
    /// Creates a serializer with an explicit formatter and encoding.
    pub fn with_formatter(writer: W, formatter: F, encoding: Encoding) -> Self {
        Serializer {
            writer,
            formatter,
            encoding,
        }
    }

    /// Unwrap the `Writer` from the `Serializer`.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes one value tree.
    ///
    /// Fails if any string payload is not well-formed UTF-8; this re-check
    /// covers strings constructed with validation disabled.
    pub fn serialize(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.writer.write_all(b"null").map_err(From::from),
            Value::Bool(true) => self.writer.write_all(b"true").map_err(From::from),
            Value::Bool(false) => self.writer.write_all(b"false").map_err(From::from),
            Value::Number(number) => number.write(&mut self.writer).map_err(From::from),
            Value::String(bytes) => escape_bytes(&mut self.writer, bytes, self.encoding),
            Value::Array(elements) => {
                if elements.is_empty() {
                    return self.writer.write_all(b"[]").map_err(From::from);
                }
                self.formatter.open(&mut self.writer, b'[')?;
                let mut first = true;
                for element in elements.iter() {
                    self.formatter.comma(&mut self.writer, first)?;
                    first = false;
                    self.serialize(element)?;
                }
                self.formatter.close(&mut self.writer, b']')?;
                Ok(())
            }
            Value::Object(members) => {
                if members.is_empty() {
                    return self.writer.write_all(b"{}").map_err(From::from);
                }
                self.formatter.open(&mut self.writer, b'{')?;
                let mut first = true;
                for (key, member) in members.iter() {
                    self.formatter.comma(&mut self.writer, first)?;
                    first = false;
                    escape_bytes(&mut self.writer, key.as_bytes(), self.encoding)?;
                    self.formatter.colon(&mut self.writer)?;
                    self.serialize(member)?;
                }
                self.formatter.close(&mut self.writer, b'}')?;
                Ok(())
            }
        }
    }
}

/// This trait abstracts away serializing the JSON control characters, which
/// allows the user to optionally pretty print the JSON output.
pub trait Formatter {
    /// Called when serializing a '{' or '['.
    fn open<W>(&mut self, writer: &mut W, ch: u8) -> io::Result<()>
    where
        W: io::Write;

    /// Called before each array element or object member, including the
    /// first.
    fn comma<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: io::Write;

    /// Called between an object key and its value.
    fn colon<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write;

    /// Called when serializing a '}' or ']'.
    fn close<W>(&mut self, writer: &mut W, ch: u8) -> io::Result<()>
    where
        W: io::Write;
}

/// This structure compacts a JSON value with no extra whitespace.
#[derive(Clone, Debug, Default)]
pub struct CompactFormatter;

impl Formatter for CompactFormatter {
    fn open<W>(&mut self, writer: &mut W, ch: u8) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(&[ch])
    }

    fn comma<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b",")
        }
    }

    fn colon<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(b":")
    }

    fn close<W>(&mut self, writer: &mut W, ch: u8) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(&[ch])
    }
}

/// This structure pretty prints a JSON value to make it human readable.
#[derive(Clone, Debug)]
pub struct PrettyFormatter {
    current_indent: usize,
    indent_amount: usize,
}

impl PrettyFormatter {
    /// Construct a pretty printer formatter that uses four spaces for
    /// indentation.
    pub fn new() -> Self {
        PrettyFormatter::with_indent(4)
    }

    /// Construct a pretty printer formatter that uses `indent_amount` spaces
    /// per nesting level.
    pub fn with_indent(indent_amount: usize) -> Self {
        PrettyFormatter {
            current_indent: 0,
            indent_amount,
        }
    }
}

impl Default for PrettyFormatter {
    fn default() -> Self {
        PrettyFormatter::new()
    }
}

impl Formatter for PrettyFormatter {
    fn open<W>(&mut self, writer: &mut W, ch: u8) -> io::Result<()>
    where
        W: io::Write,
    {
        self.current_indent += 1;
        writer.write_all(&[ch])
    }

    fn comma<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(if first { b"\n" } else { b",\n" })?;
        indent(writer, self.current_indent * self.indent_amount)
    }

    fn colon<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(b": ")
    }

    fn close<W>(&mut self, writer: &mut W, ch: u8) -> io::Result<()>
    where
        W: io::Write,
    {
        self.current_indent -= 1;
        writer.write_all(b"\n")?;
        indent(writer, self.current_indent * self.indent_amount)?;
        writer.write_all(&[ch])
    }
}

fn indent<W>(wr: &mut W, mut n: usize) -> io::Result<()>
where
    W: io::Write,
{
    const SPACES: [u8; 16] = [b' '; 16];
    while n > 0 {
        let chunk = n.min(SPACES.len());
        wr.write_all(&SPACES[..chunk])?;
        n -= chunk;
    }
    Ok(())
}

const BB: u8 = b'b'; // \x08
const TT: u8 = b't'; // \x09
const NN: u8 = b'n'; // \x0A
const FF: u8 = b'f'; // \x0C
const RR: u8 = b'r'; // \x0D
const QU: u8 = b'"'; // \x22
const BS: u8 = b'\\'; // \x5C
const U: u8 = b'u'; // \x00...\x1F except the ones above

// Lookup table of escape sequences. A value of b'x' at index i means that
// byte i is escaped as "\x" in JSON. A value of 0 means that byte i is not
// escaped.
#[rustfmt::skip]
static ESCAPE: [u8; 256] = [
    //  1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    U,  U,  U,  U,  U,  U,  U,  U, BB, TT, NN,  U, FF, RR,  U,  U, // 0
    U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U, // 1
    0,  0, QU,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 2
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 3
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 4
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, BS,  0,  0,  0, // 5
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 6
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 7
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 8
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 9
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // A
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // B
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // C
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // D
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // E
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // F
];

static HEX_DIGITS: [u8; 16] = *b"0123456789ABCDEF";

/// Writes a quoted JSON string literal. The bytes must be well-formed UTF-8;
/// strings constructed with validation disabled are rejected here.
fn escape_bytes<W>(wr: &mut W, bytes: &[u8], encoding: Encoding) -> Result<()>
where
    W: io::Write,
{
    let value = match core::str::from_utf8(bytes) {
        Ok(value) => value,
        Err(_) => return Err(Error::new(ErrorCode::InvalidUtf8)),
    };
    wr.write_all(b"\"")?;
    match encoding {
        Encoding::Utf8 => escape_utf8(wr, value)?,
        Encoding::Ascii => escape_ascii(wr, value)?,
    }
    wr.write_all(b"\"")?;
    Ok(())
}

/// Escapes quotes, backslashes, and control characters; everything else is
/// copied through byte for byte.
fn escape_utf8<W>(wr: &mut W, value: &str) -> io::Result<()>
where
    W: io::Write,
{
    let bytes = value.as_bytes();
    let mut start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let escape = ESCAPE[byte as usize];
        if escape == 0 {
            continue;
        }

        if start < i {
            wr.write_all(&bytes[start..i])?;
        }

        if escape == U {
            wr.write_all(&[
                b'\\',
                b'u',
                b'0',
                b'0',
                HEX_DIGITS[(byte >> 4) as usize],
                HEX_DIGITS[(byte & 0xF) as usize],
            ])?;
        } else {
            wr.write_all(&[b'\\', escape])?;
        }

        start = i + 1;
    }

    if start != bytes.len() {
        wr.write_all(&bytes[start..])?;
    }

    Ok(())
}

/// Escapes everything `escape_utf8` does, plus every code point above U+007E
/// as `\uXXXX` with surrogate pairs for the supplementary planes.
fn escape_ascii<W>(wr: &mut W, value: &str) -> io::Result<()>
where
    W: io::Write,
{
    let bytes = value.as_bytes();
    let mut start = 0;

    for (i, ch) in value.char_indices() {
        let n = ch as u32;
        if (0x20..0x7F).contains(&n) && ch != '"' && ch != '\\' {
            continue;
        }

        if start < i {
            wr.write_all(&bytes[start..i])?;
        }

        match ch {
            '"' => wr.write_all(b"\\\"")?,
            '\\' => wr.write_all(b"\\\\")?,
            '\u{8}' => wr.write_all(b"\\b")?,
            '\t' => wr.write_all(b"\\t")?,
            '\n' => wr.write_all(b"\\n")?,
            '\u{c}' => wr.write_all(b"\\f")?,
            '\r' => wr.write_all(b"\\r")?,
            _ if n > 0xFFFF => {
                // Split into a UTF-16 surrogate pair.
                let lead = 0xD800 + ((n - 0x1_0000) >> 10);
                let trail = 0xDC00 + ((n - 0x1_0000) & 0x3FF);
                write_unit_escape(wr, lead as u16)?;
                write_unit_escape(wr, trail as u16)?;
            }
            _ => write_unit_escape(wr, n as u16)?,
        }

        start = i + ch.len_utf8();
    }

    if start != bytes.len() {
        wr.write_all(&bytes[start..])?;
    }

    Ok(())
}

fn write_unit_escape<W>(wr: &mut W, unit: u16) -> io::Result<()>
where
    W: io::Write,
{
    wr.write_all(&[
        b'\\',
        b'u',
        HEX_DIGITS[(unit >> 12) as usize],
        HEX_DIGITS[(unit >> 8 & 0xF) as usize],
        HEX_DIGITS[(unit >> 4 & 0xF) as usize],
        HEX_DIGITS[(unit & 0xF) as usize],
    ])
}

/// Writes a value in the compact form.
pub fn to_writer<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    let mut ser = Serializer::new(writer);
    ser.serialize(value)
}

/// Writes a value in the indented form.
pub fn to_writer_pretty<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    let mut ser = Serializer::pretty(writer);
    ser.serialize(value)
}

/// Writes a value under explicit options.
pub fn to_writer_with<W>(writer: W, value: &Value, options: &WriteOptions) -> Result<()>
where
    W: io::Write,
{
    if options.indent_amount == 0 {
        Serializer::with_formatter(writer, CompactFormatter, options.encoding).serialize(value)
    } else {
        let formatter = PrettyFormatter::with_indent(options.indent_amount);
        Serializer::with_formatter(writer, formatter, options.encoding).serialize(value)
    }
}

/// Serializes a value into a byte buffer in the compact form.
pub fn to_vec(value: &Value) -> Result<Vec<u8>> {
    let mut writer = Vec::with_capacity(128);
    to_writer(&mut writer, value)?;
    Ok(writer)
}

/// Serializes a value into a byte buffer in the indented form.
pub fn to_vec_pretty(value: &Value) -> Result<Vec<u8>> {
    let mut writer = Vec::with_capacity(128);
    to_writer_pretty(&mut writer, value)?;
    Ok(writer)
}

/// Serializes a value into a byte buffer under explicit options.
pub fn to_vec_with(value: &Value, options: &WriteOptions) -> Result<Vec<u8>> {
    let mut writer = Vec::with_capacity(128);
    to_writer_with(&mut writer, value, options)?;
    Ok(writer)
}

/// Serializes a value into a string in the compact form.
///
/// ```
/// use ujson::json;
///
/// let value = json!({"a": true, "b": null});
/// assert_eq!(ujson::to_string(&value)?, r#"{"a":true,"b":null}"#);
/// # Ok::<(), ujson::Error>(())
/// ```
pub fn to_string(value: &Value) -> Result<String> {
    let vec = to_vec(value)?;
    // The serializer only emits valid UTF-8.
    Ok(unsafe { String::from_utf8_unchecked(vec) })
}

/// Serializes a value into a string in the indented form.
pub fn to_string_pretty(value: &Value) -> Result<String> {
    let vec = to_vec_pretty(value)?;
    // The serializer only emits valid UTF-8.
    Ok(unsafe { String::from_utf8_unchecked(vec) })
}

/// Serializes a value into a string under explicit options.
pub fn to_string_with(value: &Value, options: &WriteOptions) -> Result<String> {
    let vec = to_vec_with(value, options)?;
    // The serializer only emits valid UTF-8.
    Ok(unsafe { String::from_utf8_unchecked(vec) })
}
