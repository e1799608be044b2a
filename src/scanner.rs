//! Fixed-arity scanning into tuples of typed values.

use log::trace;

use crate::error::ScanError;
use crate::format::InputFormat;
use crate::options::ScanOptions;
use crate::specifier::FormatSegment;
use crate::types::ScanResult;
use crate::value::FromField;

/// A tuple of [`FromField`] types that a scan can produce.
///
/// Implemented for tuples of up to twelve elements, including `()`.
pub trait ScanTuple<'a>: Sized {
    /// Number of fields the tuple consumes.
    const ARITY: usize;

    /// Validates and parses each field in order, stopping at the first error.
    ///
    /// Fails with [`ScanError::ArityMismatch`] unless both slices hold exactly
    /// [`ARITY`](Self::ARITY) elements.
    fn from_fields(segments: &[FormatSegment<'_>], fields: &[&'a str]) -> Result<Self, ScanError>;
}

fn check_arity(types: usize, segments: usize, fields: usize) -> Result<(), ScanError> {
    if segments == types && fields == types {
        Ok(())
    } else {
        Err(ScanError::ArityMismatch {
            placeholders: segments,
            fields,
            types,
        })
    }
}

macro_rules! impl_scan_tuple {
    ($arity:expr $(, $index:tt $ty:ident)*) => {
        impl<'a, $($ty: FromField<'a>),*> ScanTuple<'a> for ($($ty,)*) {
            const ARITY: usize = $arity;

            #[allow(unused_variables)]
            fn from_fields(
                segments: &[FormatSegment<'_>],
                fields: &[&'a str],
            ) -> Result<Self, ScanError> {
                check_arity(Self::ARITY, segments.len(), fields.len())?;
                // Tuple fields evaluate left to right, so `?` fails fast.
                Ok(($(segments[$index].parse::<$ty>(fields[$index])?,)*))
            }
        }
    };
}

impl_scan_tuple!(0);
impl_scan_tuple!(1, 0 A);
impl_scan_tuple!(2, 0 A, 1 B);
impl_scan_tuple!(3, 0 A, 1 B, 2 C);
impl_scan_tuple!(4, 0 A, 1 B, 2 C, 3 D);
impl_scan_tuple!(5, 0 A, 1 B, 2 C, 3 D, 4 E);
impl_scan_tuple!(6, 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_scan_tuple!(7, 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_scan_tuple!(8, 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_scan_tuple!(9, 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_scan_tuple!(10, 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
impl_scan_tuple!(11, 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K);
impl_scan_tuple!(12, 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L);

/// Scans `input` against `format` with default [`ScanOptions`].
///
/// `T` is the tuple of target types, one per placeholder. See the crate
/// documentation for the format mini-language.
///
/// # Examples
///
/// ```
/// use typescan::scan;
///
/// let (id, name, score) = scan::<(i32, String, f64)>("7 foo 2.5", "{%d} {%s} {%f}")
///     .unwrap()
///     .into_values();
/// assert_eq!((id, name.as_str(), score), (7, "foo", 2.5));
///
/// assert!(scan::<(u32,)>("-1", "{%u}").is_err());
/// ```
pub fn scan<'a, T: ScanTuple<'a>>(input: &'a str, format: &str) -> Result<ScanResult<T>, ScanError> {
    scan_with(input, format, &ScanOptions::default())
}

/// Scans `input` against `format` with explicit options.
pub fn scan_with<'a, T: ScanTuple<'a>>(
    input: &'a str,
    format: &str,
    options: &ScanOptions,
) -> Result<ScanResult<T>, ScanError> {
    let format = InputFormat::new(format);
    let fields = format.input_fields(input, options.literal_match)?;
    let segments = format.segments();
    check_arity(T::ARITY, segments.len(), fields.len())?;

    trace!("parsing {} field(s)", T::ARITY);
    T::from_fields(&segments, &fields).map(ScanResult::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LiteralMatch;

    #[test]
    fn placeholder_type_count_mismatch() {
        assert_eq!(
            scan::<(i32, i32)>("1", "{}"),
            Err(ScanError::ArityMismatch {
                placeholders: 1,
                fields: 1,
                types: 2,
            })
        );
        assert!(scan::<(i32,)>("1 2", "{} {}").is_err());
        assert!(scan::<(i32, i32)>("12", "{}{}").is_err());
    }

    #[test]
    fn literal_mismatch_wins_over_arity() {
        assert!(matches!(
            scan::<(i32, i32)>("foo1bar", "foo {%d} baz"),
            Err(ScanError::LiteralMismatch { .. })
        ));
    }

    #[test]
    fn first_failing_field_is_reported() {
        // The second field would also fail, but only the first error surfaces.
        assert_eq!(
            scan::<(u8, u8)>("x,y", "{},{%d}"),
            Err(ScanError::not_a_number::<u8>("x"))
        );
        // A malformed specifier after a bad field is never looked at.
        assert!(matches!(
            scan::<(i32, i32)>("a b", "{} {bogus}"),
            Err(ScanError::NotANumber { .. })
        ));
    }

    #[test]
    fn literal_only_format_is_a_count_mismatch() {
        assert_eq!(
            scan::<()>("say hello", "hello"),
            Err(ScanError::ArityMismatch {
                placeholders: 0,
                fields: 1,
                types: 0,
            })
        );
        assert!(scan::<()>("", "").is_err());
        assert!(matches!(
            scan::<()>("bye", "hello"),
            Err(ScanError::LiteralMismatch { .. })
        ));
        let anchored = ScanOptions::new().with_literal_match(LiteralMatch::Anchored);
        assert!(matches!(
            scan_with::<()>("anything", "", &anchored),
            Err(ScanError::LiteralMismatch { .. })
        ));
    }

    #[test]
    fn from_fields_rejects_wrong_lengths() {
        let segments = [FormatSegment::new("")];
        assert!(<(i32, i32)>::from_fields(&segments, &["1"]).is_err());
        assert_eq!(<(i32,)>::from_fields(&segments, &["1"]), Ok((1,)));
    }

    #[test]
    fn scan_with_anchored_literals() {
        let options = ScanOptions::new().with_literal_match(LiteralMatch::Anchored);
        assert!(scan_with::<(u64,)>("100kg", "{}kg", &options).is_ok());
        assert!(scan_with::<(u64,)>("100kg extra", "{}kg", &options).is_err());
        assert!(scan::<(u64,)>("100kg extra", "{}kg").is_ok());
    }
}
