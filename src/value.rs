//! Conversion of a single input field into a concrete target type.
//!
//! [`FromField`] is implemented once per supported type. Its `KIND`
//! constant places the type in a [`ValueKind`] so specifier checks resolve
//! per monomorphized type, and the marker traits ([`SignedInteger`],
//! [`UnsignedInteger`], [`FloatingPoint`], [`Textual`]) expose the same
//! categories as trait bounds for compile-time assertions.

use std::borrow::Cow;
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::ScanError;

/// Category a target type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    SignedInteger,
    UnsignedInteger,
    FloatingPoint,
    Text,
    /// A user type outside the built-in categories. Only `{}` accepts it.
    Custom,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ValueKind::SignedInteger => "a signed integer type",
            ValueKind::UnsignedInteger => "an unsigned integer type",
            ValueKind::FloatingPoint => "a floating-point type",
            ValueKind::Text => "a string-like type",
            ValueKind::Custom => "a custom type",
        };
        f.write_str(description)
    }
}

/// A type that can be produced from one input field.
///
/// The lifetime lets textual targets borrow straight from the scanned input.
///
/// # Examples
///
/// ```
/// use typescan::{FromField, ScanError, ValueKind, scan};
///
/// #[derive(Debug, PartialEq)]
/// struct Flag(bool);
///
/// impl<'a> FromField<'a> for Flag {
///     const KIND: ValueKind = ValueKind::Custom;
///
///     fn from_field(field: &'a str) -> Result<Self, ScanError> {
///         Ok(Flag(field == "on"))
///     }
/// }
///
/// let (flag,) = scan::<(Flag,)>("debug=on", "debug={}").unwrap().into_values();
/// assert_eq!(flag, Flag(true));
/// ```
pub trait FromField<'a>: Sized {
    /// Category used to accept or reject a conversion specifier.
    const KIND: ValueKind;

    /// Converts the whole field, without trimming.
    fn from_field(field: &'a str) -> Result<Self, ScanError>;
}

/// Types accepted by `{%d}`.
pub trait SignedInteger {}

/// Types accepted by `{%u}`.
pub trait UnsignedInteger {}

/// Types accepted by `{%f}`.
pub trait FloatingPoint {}

/// Types accepted by `{%s}`.
pub trait Textual {}

fn parse_integer<T>(field: &str) -> Result<T, ScanError>
where
    T: FromStr<Err = ParseIntError>,
{
    // `FromStr` accepts a leading '+'; numerals here may only carry '-'.
    if field.starts_with('+') {
        return Err(ScanError::not_a_number::<T>(field));
    }
    field.parse().map_err(|error: ParseIntError| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ScanError::out_of_range::<T>(field),
        // Unsigned parsing reports "-1" as an invalid digit.
        _ if is_negative_numeral(field) => ScanError::out_of_range::<T>(field),
        _ => ScanError::not_a_number::<T>(field),
    })
}

fn is_negative_numeral(field: &str) -> bool {
    field
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn names_infinity(field: &str) -> bool {
    let unsigned = field.strip_prefix('-').unwrap_or(field);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// True if the mantissa has a non-zero digit, i.e. the numeral is not zero.
fn has_nonzero_mantissa(field: &str) -> bool {
    field
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
}

macro_rules! impl_integer {
    ($kind:expr, $marker:ident => $($ty:ty),* $(,)?) => {
        $(
            impl<'a> FromField<'a> for $ty {
                const KIND: ValueKind = $kind;

                #[inline]
                fn from_field(field: &'a str) -> Result<Self, ScanError> {
                    parse_integer(field)
                }
            }

            impl $marker for $ty {}
        )*
    };
}

impl_integer!(ValueKind::SignedInteger, SignedInteger => i8, i16, i32, i64, i128, isize);
impl_integer!(ValueKind::UnsignedInteger, UnsignedInteger => u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> FromField<'a> for $ty {
                const KIND: ValueKind = ValueKind::FloatingPoint;

                fn from_field(field: &'a str) -> Result<Self, ScanError> {
                    if field.starts_with('+') {
                        return Err(ScanError::not_a_number::<$ty>(field));
                    }
                    let value: $ty = field
                        .parse()
                        .map_err(|_| ScanError::not_a_number::<$ty>(field))?;
                    // Overflow parses to infinity and underflow to zero instead of failing.
                    let overflow = value.is_infinite() && !names_infinity(field);
                    let underflow = value == 0.0 && has_nonzero_mantissa(field);
                    if overflow || underflow {
                        return Err(ScanError::out_of_range::<$ty>(field));
                    }
                    Ok(value)
                }
            }

            impl FloatingPoint for $ty {}
        )*
    };
}

impl_float!(f32, f64);

impl<'a> FromField<'a> for &'a str {
    const KIND: ValueKind = ValueKind::Text;

    #[inline]
    fn from_field(field: &'a str) -> Result<Self, ScanError> {
        Ok(field)
    }
}

impl<'a> FromField<'a> for String {
    const KIND: ValueKind = ValueKind::Text;

    #[inline]
    fn from_field(field: &'a str) -> Result<Self, ScanError> {
        Ok(field.to_owned())
    }
}

impl<'a> FromField<'a> for Box<str> {
    const KIND: ValueKind = ValueKind::Text;

    #[inline]
    fn from_field(field: &'a str) -> Result<Self, ScanError> {
        Ok(field.into())
    }
}

impl<'a> FromField<'a> for Cow<'a, str> {
    const KIND: ValueKind = ValueKind::Text;

    #[inline]
    fn from_field(field: &'a str) -> Result<Self, ScanError> {
        Ok(Cow::Borrowed(field))
    }
}

impl Textual for &str {}
impl Textual for String {}
impl Textual for Box<str> {}
impl Textual for Cow<'_, str> {}
