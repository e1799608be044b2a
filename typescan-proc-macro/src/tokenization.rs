//! Format string tokenization at compile-time.
//!
//! Follows the runtime tokenizer exactly: a placeholder runs from a `{` to
//! the next `}`, and an unclosed `{` turns the rest of the format into
//! literal text.

use crate::constants::{MAX_FORMAT_STRING_LEN, MAX_PLACEHOLDERS, TOKENS_INITIAL_CAPACITY};
use crate::types::FormatToken;
use crate::validation::parse_placeholder;
use syn::LitStr;

/// Tokenize format string into text/placeholders.
///
/// Enforces `MAX_FORMAT_STRING_LEN` and `MAX_PLACEHOLDERS`, and validates
/// every specifier.
pub fn tokenize_format_string(
    format_str: &str,
    format_lit: &LitStr,
) -> syn::Result<Vec<FormatToken>> {
    if format_str.len() > MAX_FORMAT_STRING_LEN {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "Format string too long ({} bytes). Maximum allowed: {} bytes.",
                format_str.len(),
                MAX_FORMAT_STRING_LEN
            ),
        ));
    }

    let mut tokens: Vec<FormatToken> = Vec::with_capacity(TOKENS_INITIAL_CAPACITY);
    let mut placeholder_count = 0;
    let mut rest = format_str;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
            break;
        };

        if open > 0 {
            tokens.push(FormatToken::Text(rest[..open].into()));
        }

        let content = &rest[open + 1..close];
        let placeholder = parse_placeholder(content)
            .map_err(|message| syn::Error::new(format_lit.span(), message))?;

        placeholder_count += 1;
        if placeholder_count > MAX_PLACEHOLDERS {
            return Err(syn::Error::new(
                format_lit.span(),
                format!(
                    "Too many placeholders in format string. Maximum allowed: {MAX_PLACEHOLDERS}."
                ),
            ));
        }
        tokens.push(FormatToken::Placeholder(placeholder));
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        tokens.push(FormatToken::Text(rest.into()));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Placeholder, Specifier};

    fn tokenize(format: &str) -> syn::Result<Vec<FormatToken>> {
        let format_lit = LitStr::new(format, proc_macro2::Span::call_site());
        tokenize_format_string(format, &format_lit)
    }

    #[test]
    fn test_tokenization_basic() {
        let tokens = tokenize("{%d} text {}").unwrap();
        assert_eq!(
            tokens,
            vec![
                FormatToken::Placeholder(Placeholder::Specified(Specifier::SignedInteger)),
                FormatToken::Text(" text ".into()),
                FormatToken::Placeholder(Placeholder::Inferred),
            ]
        );
    }

    #[test]
    fn test_unclosed_brace_is_text() {
        let tokens = tokenize("{} -{> x").unwrap();
        assert_eq!(
            tokens,
            vec![
                FormatToken::Placeholder(Placeholder::Inferred),
                FormatToken::Text(" -{> x".into()),
            ]
        );
    }

    #[test]
    fn test_stray_closing_brace_is_text() {
        let tokens = tokenize("a}b{%s}").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], FormatToken::Text("a}b".into()));
    }

    #[test]
    fn test_invalid_specifier_rejected() {
        assert!(tokenize("{d}").is_err());
        assert!(tokenize("{%df}").is_err());
        assert!(tokenize("x {%q}").is_err());
    }

    #[test]
    fn test_max_placeholders_at_boundary() {
        let at_limit = "{} ".repeat(MAX_PLACEHOLDERS);
        let tokens = tokenize(&at_limit).unwrap();
        let placeholder_count = tokens
            .iter()
            .filter(|t| matches!(t, FormatToken::Placeholder(_)))
            .count();
        assert_eq!(placeholder_count, MAX_PLACEHOLDERS);

        let over_limit = "{} ".repeat(MAX_PLACEHOLDERS + 1);
        assert!(tokenize(&over_limit).is_err());
    }

    #[test]
    fn test_format_too_long() {
        let long = "x".repeat(MAX_FORMAT_STRING_LEN + 1);
        assert!(tokenize(&long).is_err());
    }
}
