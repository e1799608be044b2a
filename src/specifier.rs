//! Conversion specifiers (`%d`, `%u`, `%f`, `%s`) and their validation
//! against a target type.

use std::fmt;

use crate::error::ScanError;
use crate::value::{FromField, ValueKind};

/// A recognised conversion specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    /// `%d`
    SignedInteger,
    /// `%u`
    UnsignedInteger,
    /// `%f`
    FloatingPoint,
    /// `%s`
    String,
}

impl Specifier {
    /// Maps a conversion letter to its specifier.
    pub fn from_letter(letter: char) -> Result<Self, ScanError> {
        match letter {
            'd' => Ok(Self::SignedInteger),
            'u' => Ok(Self::UnsignedInteger),
            'f' => Ok(Self::FloatingPoint),
            's' => Ok(Self::String),
            other => Err(ScanError::UnknownSpecifier(other)),
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::SignedInteger => 'd',
            Self::UnsignedInteger => 'u',
            Self::FloatingPoint => 'f',
            Self::String => 's',
        }
    }

    /// The only category this specifier accepts.
    pub const fn required_kind(self) -> ValueKind {
        match self {
            Self::SignedInteger => ValueKind::SignedInteger,
            Self::UnsignedInteger => ValueKind::UnsignedInteger,
            Self::FloatingPoint => ValueKind::FloatingPoint,
            Self::String => ValueKind::Text,
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.letter())
    }
}

/// The raw text between `{` and `}` of one placeholder.
///
/// Segments are kept unparsed until their field is reached, so a malformed
/// specifier late in the format does not mask an earlier field's error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSegment<'f> {
    text: &'f str,
}

impl<'f> FormatSegment<'f> {
    pub(crate) const fn new(text: &'f str) -> Self {
        Self { text }
    }

    pub const fn as_str(&self) -> &'f str {
        self.text
    }

    /// `{}`: the target type alone decides how to parse.
    pub const fn is_inferred(&self) -> bool {
        self.text.is_empty()
    }

    /// Parses the segment as `%<letter>`. `Ok(None)` for an empty segment.
    pub fn specifier(&self) -> Result<Option<Specifier>, ScanError> {
        if self.is_inferred() {
            return Ok(None);
        }

        let mut chars = self.text.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('%'), Some(letter), None) => Specifier::from_letter(letter).map(Some),
            _ => Err(ScanError::InvalidSpecifier(self.text.to_owned())),
        }
    }

    /// Checks that `T` may be scanned under this segment.
    pub fn validate<'a, T: FromField<'a>>(&self) -> Result<(), ScanError> {
        match self.specifier()? {
            Some(specifier) if specifier.required_kind() != T::KIND => {
                Err(ScanError::IncompatibleSpecifier {
                    specifier: specifier.letter(),
                    required: specifier.required_kind(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Validates, then converts `field` into `T`.
    pub fn parse<'a, T: FromField<'a>>(&self, field: &'a str) -> Result<T, ScanError> {
        self.validate::<T>()?;
        T::from_field(field)
    }
}
