//! Parse JSON documents into [`Value`] trees.

use std::io;
use std::str;
use std::sync::Arc;

use crate::error::{Error, ErrorCode, Result};
use crate::number::Number;
use crate::read::SliceRead;
use crate::value::{Object, Value};

/// Nesting of arrays and objects deeper than this fails with a syntax error.
const MAX_DEPTH: usize = 512;

/// Parses a value tree out of a byte slice containing one JSON document.
///
/// The whole input is consumed: leading and trailing whitespace is accepted,
/// anything else around the top-level value is an error. NUL bytes inside the
/// slice are not special.
///
/// ```
/// let value = ujson::from_slice(b"[1,2,3]")?;
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
/// # Ok::<(), ujson::Error>(())
/// ```
pub fn from_slice(bytes: &[u8]) -> Result<Value> {
    let mut parser = Parser {
        read: SliceRead::new(bytes),
        scratch: Vec::new(),
        remaining_depth: MAX_DEPTH,
    };
    parser.parse()
}

/// Parses a value tree out of a string containing one JSON document.
pub fn from_str(s: &str) -> Result<Value> {
    from_slice(s.as_bytes())
}

/// Reads the whole stream into memory and parses it as one JSON document.
///
/// The parser is not incremental, so there is nothing to be gained from
/// feeding it a reader in pieces; buffering the input up front keeps the
/// error positions exact.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Value> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(Error::io)?;
    from_slice(&bytes)
}

struct Parser<'a> {
    read: SliceRead<'a>,
    /// Reused buffer for unescaping string literals.
    scratch: Vec<u8>,
    remaining_depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.read.peek().is_some() {
            return Err(self.error(ErrorCode::TrailingCharacters));
        }
        Ok(value)
    }

    fn error(&self, code: ErrorCode) -> Error {
        self.read.error(code)
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.read.peek() {
            self.read.discard();
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let peek = match self.read.peek() {
            Some(ch) => ch,
            None => return Err(self.error(ErrorCode::EofWhileParsing)),
        };
        match peek {
            b'n' => {
                self.read.discard();
                self.parse_ident(b"ull")?;
                Ok(Value::Null)
            }
            b't' => {
                self.read.discard();
                self.parse_ident(b"rue")?;
                Ok(Value::Bool(true))
            }
            b'f' => {
                self.read.discard();
                self.parse_ident(b"alse")?;
                Ok(Value::Bool(false))
            }
            b'"' => {
                self.read.discard();
                let bytes = self.parse_string()?;
                Ok(Value::String(Arc::new(bytes)))
            }
            b'-' | b'0'..=b'9' => self.parse_number(),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            _ => Err(self.error(ErrorCode::ExpectedValue)),
        }
    }

    fn parse_ident(&mut self, ident: &[u8]) -> Result<()> {
        for expected in ident {
            match self.read.next() {
                Some(next) if next == *expected => {}
                _ => return Err(self.error(ErrorCode::ExpectedIdent)),
            }
        }
        Ok(())
    }

    /// Unescapes a string literal whose opening quote has been consumed.
    fn parse_string(&mut self) -> Result<Vec<u8>> {
        self.scratch.clear();
        self.read.parse_str_bytes(&mut self.scratch)?;
        Ok(self.scratch.clone())
    }

    fn parse_key(&mut self) -> Result<String> {
        let bytes = self.parse_string()?;
        // parse_str_bytes has already validated the content.
        String::from_utf8(bytes).map_err(|_| self.error(ErrorCode::InvalidUtf8))
    }

    /// Scans a numeric literal with the strict JSON grammar, then lets the
    /// platform convert the lexeme to a double.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.read.byte_offset();

        if self.read.peek() == Some(b'-') {
            self.read.discard();
        }

        // Integer part: a bare zero, or a nonzero digit followed by any run.
        match self.read.next() {
            Some(b'0') => {}
            Some(b'1'..=b'9') => {
                while let Some(b'0'..=b'9') = self.read.peek() {
                    self.read.discard();
                }
            }
            _ => return Err(self.error(ErrorCode::InvalidNumber)),
        }

        if self.read.peek() == Some(b'.') {
            self.read.discard();
            self.parse_digits()?;
        }

        if let Some(b'e' | b'E') = self.read.peek() {
            self.read.discard();
            if let Some(b'+' | b'-') = self.read.peek() {
                self.read.discard();
            }
            self.parse_digits()?;
        }

        // The scanned lexeme is plain ASCII.
        let lexeme = str::from_utf8(self.read.span(start))
            .map_err(|_| self.error(ErrorCode::InvalidNumber))?;
        let n: f64 = lexeme
            .parse()
            .map_err(|_| self.error(ErrorCode::InvalidNumber))?;
        if n.is_infinite() {
            return Err(self.error(ErrorCode::NumberOutOfRange));
        }
        Ok(Value::Number(Number::from_finite(n)))
    }

    /// One or more decimal digits.
    fn parse_digits(&mut self) -> Result<()> {
        match self.read.next() {
            Some(b'0'..=b'9') => {}
            _ => return Err(self.error(ErrorCode::InvalidNumber)),
        }
        while let Some(b'0'..=b'9') = self.read.peek() {
            self.read.discard();
        }
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.read.discard();
        self.recurse()?;

        let mut array = Vec::new();
        self.skip_whitespace();
        if self.read.peek() == Some(b']') {
            self.read.discard();
            self.remaining_depth += 1;
            return Ok(Value::Array(Arc::new(array)));
        }
        loop {
            array.push(self.parse_value()?);
            self.skip_whitespace();
            match self.read.next() {
                Some(b',') => {}
                Some(b']') => break,
                Some(_) => return Err(self.error(ErrorCode::ExpectedArrayCommaOrEnd)),
                None => return Err(self.error(ErrorCode::EofWhileParsing)),
            }
        }
        self.remaining_depth += 1;
        Ok(Value::Array(Arc::new(array)))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.read.discard();
        self.recurse()?;

        let mut object = Object::new();
        self.skip_whitespace();
        if self.read.peek() == Some(b'}') {
            self.read.discard();
            self.remaining_depth += 1;
            return Ok(Value::Object(Arc::new(object)));
        }
        loop {
            self.skip_whitespace();
            match self.read.next() {
                Some(b'"') => {}
                Some(_) => return Err(self.error(ErrorCode::KeyMustBeAString)),
                None => return Err(self.error(ErrorCode::EofWhileParsing)),
            }
            let key = self.parse_key()?;
            self.skip_whitespace();
            match self.read.next() {
                Some(b':') => {}
                Some(_) => return Err(self.error(ErrorCode::ExpectedColon)),
                None => return Err(self.error(ErrorCode::EofWhileParsing)),
            }
            let value = self.parse_value()?;
            // Duplicate keys are kept; callers see members in source order.
            object.push((key, value));
            self.skip_whitespace();
            match self.read.next() {
                Some(b',') => {}
                Some(b'}') => break,
                Some(_) => return Err(self.error(ErrorCode::ExpectedObjectCommaOrEnd)),
                None => return Err(self.error(ErrorCode::EofWhileParsing)),
            }
        }
        self.remaining_depth += 1;
        Ok(Value::Object(Arc::new(object)))
    }

    fn recurse(&mut self) -> Result<()> {
        self.remaining_depth -= 1;
        if self.remaining_depth == 0 {
            return Err(self.error(ErrorCode::RecursionLimitExceeded));
        }
        Ok(())
    }
}
