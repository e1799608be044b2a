use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_until},
    multi::many0,
    sequence::{delimited, pair},
};

/// One literal run followed by the content of the placeholder that closes it.
pub(super) type Placeholder<'f> = (&'f str, &'f str);

/// Splits `format` into `(literal, specifier)` pairs plus the trailing literal.
///
/// A `{` without a later `}` ends tokenization: it and everything after it
/// become part of the trailing literal.
pub(super) fn tokenize(format: &str) -> IResult<&str, Vec<Placeholder<'_>>> {
    many0(literal_and_placeholder).parse(format)
}

fn literal_and_placeholder(input: &str) -> IResult<&str, Placeholder<'_>> {
    pair(take_until("{"), placeholder).parse(input)
}

fn placeholder(input: &str) -> IResult<&str, &str> {
    delimited(tag("{"), take_until("}"), tag("}")).parse(input)
}
