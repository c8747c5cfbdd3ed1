//! Numeric target types and their parse primitive.
//!
//! Every type a [`Var`](crate::Var) can resolve to implements [`Numeric`]. The
//! trait is sealed: the set of supported kinds is closed, and each kind has
//! a matching [`Value`] variant so defaults can be stored in one registry.

use std::fmt;

/// Why a raw string could not become a number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// Nothing but whitespace.
    Empty,
    /// Not a number of the requested kind.
    Malformed,
    /// A number, but not representable in the requested kind.
    OutOfRange,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::Empty => write!(f, "empty value"),
            ParseFailure::Malformed => write!(f, "malformed number"),
            ParseFailure::OutOfRange => write!(f, "number out of range"),
        }
    }
}

/// The closed set of numeric kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl NumericKind {
    /// Rust spelling of the type, e.g. `"u16"`.
    pub fn type_name(self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::I128 => "i128",
            NumericKind::Isize => "isize",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::U128 => "u128",
            NumericKind::Usize => "usize",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A numeric value tagged with its kind.
///
/// This is what the default registry stores. Reading it back as the wrong
/// type is detected through [`Numeric::from_value`] returning `None`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Value {
    pub fn kind(&self) -> NumericKind {
        match self {
            Value::I8(_) => NumericKind::I8,
            Value::I16(_) => NumericKind::I16,
            Value::I32(_) => NumericKind::I32,
            Value::I64(_) => NumericKind::I64,
            Value::I128(_) => NumericKind::I128,
            Value::Isize(_) => NumericKind::Isize,
            Value::U8(_) => NumericKind::U8,
            Value::U16(_) => NumericKind::U16,
            Value::U32(_) => NumericKind::U32,
            Value::U64(_) => NumericKind::U64,
            Value::U128(_) => NumericKind::U128,
            Value::Usize(_) => NumericKind::Usize,
            Value::F32(_) => NumericKind::F32,
            Value::F64(_) => NumericKind::F64,
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// A type an environment variable can be parsed into.
///
/// Implemented for all primitive integer and floating point types. It cannot
/// be implemented outside this crate.
pub trait Numeric:
    Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static + private::Sealed
{
    /// The kind tag matching this type.
    const KIND: NumericKind;

    /// The zero value, returned when every fallback is exhausted.
    const ZERO: Self;

    /// Parse a raw environment string.
    fn parse(raw: &str) -> Result<Self, ParseFailure>;

    fn into_value(self) -> Value;

    /// `None` if `value` holds a different kind.
    fn from_value(value: Value) -> Option<Self>;

    /// Whether this equals [`Numeric::ZERO`]. For floats `-0.0` is zero and
    /// NaN is not.
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Split an integer literal into its sign, radix and digits.
///
/// Returns `(negative, radix, digits)`. The digits still have to be checked
/// by the caller.
fn split_int_literal(raw: &str) -> Result<(bool, u32, &str), ParseFailure> {
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        Some("0o") | Some("0O") => (8, &rest[2..]),
        Some("0b") | Some("0B") => (2, &rest[2..]),
        _ => (10, rest),
    };

    // from_str_radix would accept a second sign here
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseFailure::Malformed);
    }

    Ok((negative, radix, digits))
}

macro_rules! impl_signed {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::$kind;
            const ZERO: Self = 0;

            fn parse(raw: &str) -> Result<Self, ParseFailure> {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(ParseFailure::Empty);
                }
                let (negative, radix, digits) = split_int_literal(raw)?;
                let parsed = if negative {
                    <$ty>::from_str_radix(&format!("-{digits}"), radix)
                } else {
                    <$ty>::from_str_radix(digits, radix)
                };
                parsed.map_err(|_| ParseFailure::OutOfRange)
            }

            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::$kind;
            const ZERO: Self = 0;

            fn parse(raw: &str) -> Result<Self, ParseFailure> {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(ParseFailure::Empty);
                }
                // unsigned literals carry no sign, not even "-0" or "+5"
                if raw.starts_with('+') {
                    return Err(ParseFailure::Malformed);
                }
                let (negative, radix, digits) = split_int_literal(raw)?;
                if negative {
                    return Err(ParseFailure::OutOfRange);
                }
                <$ty>::from_str_radix(digits, radix).map_err(|_| ParseFailure::OutOfRange)
            }

            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Numeric for $ty {
            const KIND: NumericKind = NumericKind::$kind;
            const ZERO: Self = 0.0;

            fn parse(raw: &str) -> Result<Self, ParseFailure> {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(ParseFailure::Empty);
                }
                let parsed: $ty = raw.parse().map_err(|_| ParseFailure::Malformed)?;
                // "1e400" parses to infinity; only an explicit "inf" may
                if parsed.is_infinite() && !raw.to_ascii_lowercase().contains("inf") {
                    return Err(ParseFailure::OutOfRange);
                }
                Ok(parsed)
            }

            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    )*};
}

impl_signed!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
);

impl_unsigned!(
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
);

impl_float!(f32 => F32, f64 => F64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_integers() {
        assert_eq!(i32::parse("42"), Ok(42));
        assert_eq!(i32::parse("-42"), Ok(-42));
        assert_eq!(i32::parse("+7"), Ok(7));
        assert_eq!(u64::parse("  18446744073709551615 \n"), Ok(u64::MAX));
        assert_eq!(i8::parse("-128"), Ok(i8::MIN));
    }

    #[test]
    fn test_parse_radix_prefixes() {
        assert_eq!(u32::parse("0xff"), Ok(255));
        assert_eq!(u32::parse("0XFF"), Ok(255));
        assert_eq!(i16::parse("-0x10"), Ok(-16));
        assert_eq!(u8::parse("0o17"), Ok(15));
        assert_eq!(u8::parse("0b1010"), Ok(10));
        assert_eq!(i64::parse("0x"), Err(ParseFailure::Malformed));
        assert_eq!(u8::parse("0b102"), Err(ParseFailure::Malformed));
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed() {
        assert_eq!(i32::parse(""), Err(ParseFailure::Empty));
        assert_eq!(i32::parse("   "), Err(ParseFailure::Empty));
        assert_eq!(i32::parse("abc"), Err(ParseFailure::Malformed));
        assert_eq!(i32::parse("42abc"), Err(ParseFailure::Malformed));
        assert_eq!(i32::parse("4 2"), Err(ParseFailure::Malformed));
        assert_eq!(i32::parse("--1"), Err(ParseFailure::Malformed));
        assert_eq!(i32::parse("+-1"), Err(ParseFailure::Malformed));
        assert_eq!(i32::parse("3.5"), Err(ParseFailure::Malformed));
        assert_eq!(f64::parse("pi"), Err(ParseFailure::Malformed));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(u8::parse("256"), Err(ParseFailure::OutOfRange));
        assert_eq!(i8::parse("-129"), Err(ParseFailure::OutOfRange));
        assert_eq!(u32::parse("-1"), Err(ParseFailure::OutOfRange));
        assert_eq!(usize::parse("-0x1"), Err(ParseFailure::OutOfRange));
        assert_eq!(u32::parse("-0"), Err(ParseFailure::OutOfRange));
        assert_eq!(u64::parse("-abc"), Err(ParseFailure::Malformed));
        assert_eq!(i32::parse("-0"), Ok(0));
        assert_eq!(f32::parse("1e40"), Err(ParseFailure::OutOfRange));
        assert_eq!(f64::parse("-1e400"), Err(ParseFailure::OutOfRange));
    }

    #[test]
    fn test_unsigned_rejects_any_sign() {
        assert_eq!(u8::parse("+5"), Err(ParseFailure::Malformed));
        assert_eq!(u16::parse("+0x10"), Err(ParseFailure::Malformed));
        assert_eq!(u64::parse("-0x0"), Err(ParseFailure::OutOfRange));
        assert_eq!(i8::parse("+5"), Ok(5));
    }

    #[test]
    fn test_leading_zeros_and_separators() {
        // leading zeros are decimal, not octal
        assert_eq!(u32::parse("010"), Ok(10));
        assert_eq!(i32::parse("-007"), Ok(-7));
        assert_eq!(u32::parse("1_000"), Err(ParseFailure::Malformed));
        assert_eq!(i64::parse("0x_ff"), Err(ParseFailure::Malformed));
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(f32::parse("1.618"), Ok(1.618));
        assert_eq!(f64::parse("-2.75"), Ok(-2.75));
        assert_eq!(f64::parse("1e3"), Ok(1000.0));
        assert_eq!(f64::parse("42"), Ok(42.0));
        assert_eq!(f64::parse("inf"), Ok(f64::INFINITY));
        assert!(f64::parse("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_is_zero() {
        assert!(0i32.is_zero());
        assert!(!1u8.is_zero());
        assert!((-0.0f64).is_zero());
        assert!(!f32::NAN.is_zero());
    }

    #[test]
    fn test_value_round_trip_checks_kind() {
        let value = 7u16.into_value();
        assert_eq!(value.kind(), NumericKind::U16);
        assert_eq!(u16::from_value(value), Some(7));
        assert_eq!(i16::from_value(value), None);
        assert_eq!(u32::from_value(value), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NumericKind::Usize.to_string(), "usize");
        assert_eq!(<f32 as Numeric>::KIND.to_string(), "f32");
        assert_eq!(ParseFailure::OutOfRange.to_string(), "number out of range");
    }
}
