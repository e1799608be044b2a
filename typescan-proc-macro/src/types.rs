//! Core types for compile-time format analysis.

/// Conversion specifier written as `%<letter>` inside a placeholder.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Specifier {
    SignedInteger,
    UnsignedInteger,
    FloatingPoint,
    String,
}

impl Specifier {
    /// Marker trait in the runtime crate that types under this specifier
    /// must implement.
    pub fn marker_trait(self) -> &'static str {
        match self {
            Specifier::SignedInteger => "SignedInteger",
            Specifier::UnsignedInteger => "UnsignedInteger",
            Specifier::FloatingPoint => "FloatingPoint",
            Specifier::String => "Textual",
        }
    }
}

/// A placeholder in a format string.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Placeholder {
    /// `{}`: the declared type decides.
    Inferred,

    /// `{%d}`, `{%u}`, `{%f}` or `{%s}`.
    Specified(Specifier),
}

/// Token type for compile-time tokenization of format strings.
///
/// Uses `Box<str>` for text since literals never change after tokenization.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FormatToken {
    /// A literal run that must be found in the input.
    Text(Box<str>),

    /// A placeholder that captures one field.
    Placeholder(Placeholder),
}
