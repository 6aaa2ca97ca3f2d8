//! A finite double-precision JSON number.

use core::fmt::{self, Debug, Display};
use core::str;
use std::io;

use crate::error::{Error, ErrorCode, Result};

/// Represents a JSON number: a finite IEEE-754 binary64.
///
/// Infinities and NaN are unrepresentable; the checked constructor is the
/// only way in.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Number {
    n: f64,
}

/// `Number` excludes NaN, so equality is reflexive.
impl Eq for Number {}

impl Number {
    /// Converts a double to a `Number`. Fails if the value is infinite or
    /// NaN.
    ///
    /// ```
    /// use ujson::Number;
    ///
    /// assert_eq!(Number::from_f64(2.5).unwrap().as_f64(), 2.5);
    /// assert!(Number::from_f64(f64::INFINITY).unwrap_err().is_number());
    /// ```
    pub fn from_f64(n: f64) -> Result<Number> {
        if n.is_finite() {
            Ok(Number { n })
        } else {
            Err(Error::new(ErrorCode::NonFiniteNumber))
        }
    }

    /// Wraps a double already known to be finite.
    pub(crate) fn from_finite(n: f64) -> Number {
        debug_assert!(n.is_finite());
        Number { n }
    }

    /// Returns the number as a double.
    pub fn as_f64(self) -> f64 {
        self.n
    }

    /// Writes the shortest decimal that parses back to the same double.
    ///
    /// Integral values are written without a fractional part; negative zero
    /// keeps its sign.
    pub(crate) fn write<W: io::Write>(self, wr: &mut W) -> io::Result<()> {
        let n = self.n;
        if n == 0.0 {
            return wr.write_all(if n.is_sign_negative() { b"-0" } else { b"0" });
        }
        let i = n as i64;
        // The i64::MAX guard skips values saturated by the cast.
        if i != i64::MAX && i as f64 == n {
            let mut buf = itoa::Buffer::new();
            return wr.write_all(buf.format(i).as_bytes());
        }
        let mut buf = ryu::Buffer::new();
        wr.write_all(buf.format_finite(n).as_bytes())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Number {
                fn from(i: $ty) -> Number {
                    Number { n: f64::from(i) }
                }
            }
        )*
    };
}

impl_from_integer!(i8 i16 i32 u8 u16 u32);

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; 24];
        let mut cursor = io::Cursor::new(&mut buf[..]);
        self.write(&mut cursor).map_err(|_| fmt::Error)?;
        let len = cursor.position() as usize;
        f.write_str(str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?)
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Number").field(&self.n).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    fn emit(n: f64) -> String {
        let mut out = Vec::new();
        Number::from_f64(n).unwrap().write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn integral_doubles_have_no_fraction() {
        assert_eq!(emit(0.0), "0");
        assert_eq!(emit(1024.0), "1024");
        assert_eq!(emit(-4321.0), "-4321");
        assert_eq!(emit(1e16), "10000000000000000");
        assert_eq!(emit(-9223372036854775808.0), "-9223372036854775808");
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        assert_eq!(emit(-0.0), "-0");
    }

    #[test]
    fn shortest_round_trip() {
        assert_eq!(emit(core::f64::consts::PI), "3.141592653589793");
        assert_eq!(emit(0.01), "0.01");
        assert_eq!(emit(2e-2), "0.02");
        for &n in &[1.23e3, 2.23e-2, 0.1, 1.0 / 3.0, 1e300, 5e-324] {
            assert_eq!(emit(n).parse::<f64>().unwrap(), n);
        }
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(Number::from_f64(f64::INFINITY).is_err());
        assert!(Number::from_f64(f64::NEG_INFINITY).is_err());
        assert!(Number::from_f64(f64::NAN).is_err());
    }
}
