//! Specifier validation for placeholder contents.

use crate::types::{Placeholder, Specifier};

/// Interprets the text between `{` and `}`.
///
/// Errors carry the message to report at the format literal.
pub fn parse_placeholder(content: &str) -> Result<Placeholder, String> {
    if content.is_empty() {
        return Ok(Placeholder::Inferred);
    }

    let mut chars = content.chars();
    let letter = match (chars.next(), chars.next(), chars.next()) {
        (Some('%'), Some(letter), None) => letter,
        _ => {
            return Err(format!(
                "Invalid format specifier '{content}': expected '%<char>'. \
                 Use '{{}}' to infer the conversion from the declared type."
            ));
        }
    };

    match letter {
        'd' => Ok(Placeholder::Specified(Specifier::SignedInteger)),
        'u' => Ok(Placeholder::Specified(Specifier::UnsignedInteger)),
        'f' => Ok(Placeholder::Specified(Specifier::FloatingPoint)),
        's' => Ok(Placeholder::Specified(Specifier::String)),
        other => Err(format!(
            "Unknown conversion specifier '%{other}'. Supported: %d, %u, %f, %s"
        )),
    }
}
