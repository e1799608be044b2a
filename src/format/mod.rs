//! Format template tokenization and input segmentation.

use log::trace;

use crate::error::ScanError;
use crate::options::LiteralMatch;
use crate::specifier::FormatSegment;

mod format_parser;

/// A tokenized format template.
///
/// Holds, in order, each placeholder together with the literal run preceding
/// it, and the literal text after the last placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFormat<'f> {
    placeholders: Vec<format_parser::Placeholder<'f>>,
    trailing: &'f str,
}

impl<'f> InputFormat<'f> {
    /// Tokenizes a format template. Tokenization itself cannot fail: any text
    /// that is not a complete `{...}` placeholder is literal.
    pub fn new(format: &'f str) -> Self {
        let (trailing, placeholders) = match format_parser::tokenize(format) {
            Ok(tokens) => tokens,
            // `many0` stops at the first non-matching token instead of failing.
            Err(_) => (format, Vec::new()),
        };
        trace!(
            "tokenized format {format:?}: {} placeholder(s), trailing literal {trailing:?}",
            placeholders.len()
        );
        Self {
            placeholders,
            trailing,
        }
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// Placeholder contents, left to right.
    pub fn segments(&self) -> Vec<FormatSegment<'f>> {
        self.placeholders
            .iter()
            .map(|&(_, specifier)| FormatSegment::new(specifier))
            .collect()
    }

    /// Slices `input` into one field per placeholder.
    ///
    /// A field's end is only known once the literal after it is found, so
    /// each literal match emits the field of the *previous* placeholder.
    /// Placeholders with no literal between them share one field, which
    /// leaves fewer fields than segments. The text after the last literal
    /// match is always emitted as a field, even when the format has no
    /// placeholders, so such a format never lines up with a type list.
    pub fn input_fields<'i>(
        &self,
        input: &'i str,
        literal_match: LiteralMatch,
    ) -> Result<Vec<&'i str>, ScanError> {
        let anchored = literal_match == LiteralMatch::Anchored;
        let mut remaining = input;
        let mut fields = Vec::with_capacity(self.placeholders.len() + 1);

        // Without placeholders an anchored literal is the whole input.
        if anchored && self.placeholders.is_empty() && remaining != self.trailing {
            return Err(ScanError::literal_mismatch(self.trailing, remaining));
        }

        for (index, &(literal, _)) in self.placeholders.iter().enumerate() {
            if literal.is_empty() {
                continue;
            }
            let leading = index == 0;
            let position = if anchored && leading {
                remaining
                    .starts_with(literal)
                    .then_some(0)
                    .ok_or_else(|| ScanError::literal_mismatch(literal, remaining))?
            } else {
                find_literal(remaining, literal)?
            };
            if !leading {
                fields.push(&remaining[..position]);
            }
            remaining = &remaining[position + literal.len()..];
        }

        let last_field = if self.trailing.is_empty() {
            remaining
        } else if anchored {
            remaining
                .strip_suffix(self.trailing)
                .ok_or_else(|| ScanError::literal_mismatch(self.trailing, remaining))?
        } else {
            let position = find_literal(remaining, self.trailing)?;
            &remaining[..position]
        };
        fields.push(last_field);

        trace!("segmented input {input:?} into fields {fields:?}");
        Ok(fields)
    }
}

fn find_literal(remaining: &str, literal: &str) -> Result<usize, ScanError> {
    remaining
        .find(literal)
        .ok_or_else(|| ScanError::literal_mismatch(literal, remaining))
}
