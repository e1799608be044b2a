//! Error type returned by every failing scan.
//!
//! A scan fails as a whole: the first failing check produces one
//! [`ScanError`] and no values are returned alongside it. The variants group
//! failures for convenience, but the rendered message is meant for humans
//! and is not a stable format.

use std::io;

use thiserror::Error;

use crate::value::ValueKind;

/// The reason a scan failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Placeholder content is neither empty nor `%` followed by one character.
    #[error("invalid format specifier {0:?}: expected \"%<char>\"")]
    InvalidSpecifier(String),

    /// The specifier asks for a category the target type does not belong to.
    #[error("conversion specifier %{specifier} requires {required}")]
    IncompatibleSpecifier { specifier: char, required: ValueKind },

    /// `%` followed by a letter that is not one of `d`, `u`, `f`, `s`.
    #[error("unknown conversion specifier '%{0}'")]
    UnknownSpecifier(char),

    /// A literal run of the format was not found in the unconsumed input.
    #[error("literal text {literal:?} not found in remaining input {remaining:?}")]
    LiteralMismatch { literal: String, remaining: String },

    /// Placeholders, input fields and declared types disagree in number.
    #[error(
        "placeholder/type count mismatch: {placeholders} placeholder(s), \
         {fields} input field(s), {types} declared type(s)"
    )]
    ArityMismatch {
        placeholders: usize,
        fields: usize,
        types: usize,
    },

    /// The field is not a valid numeral for the target type.
    #[error("{field:?} is not a number of type {type_name}")]
    NotANumber {
        field: String,
        type_name: &'static str,
    },

    /// The field is a valid numeral that the target type cannot represent.
    #[error("{field:?} is out of range for type {type_name}")]
    OutOfRange {
        field: String,
        type_name: &'static str,
    },
}

impl ScanError {
    pub(crate) fn literal_mismatch(literal: &str, remaining: &str) -> Self {
        Self::LiteralMismatch {
            literal: literal.to_owned(),
            remaining: remaining.to_owned(),
        }
    }

    pub(crate) fn not_a_number<T: ?Sized>(field: &str) -> Self {
        Self::NotANumber {
            field: field.to_owned(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub(crate) fn out_of_range<T: ?Sized>(field: &str) -> Self {
        Self::OutOfRange {
            field: field.to_owned(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl From<ScanError> for io::Error {
    fn from(error: ScanError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, error)
    }
}
