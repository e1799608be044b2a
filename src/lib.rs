//! Statically-typed scanf-style parsing.
//!
//! A format template such as `"{%d} {%s} {%f}"` is matched against an input
//! string, and each placeholder's text is converted into the type declared
//! for it. The result is a tuple whose shape is fixed at compile time.
//!
//! ```
//! use typescan::scan;
//!
//! let (count,) = scan::<(i64,)>("100kg", "{%d}kg").unwrap().into_values();
//! assert_eq!(count, 100);
//! ```
//!
//! # Architecture
//!
//! Scanning runs in three stages:
//! 1. **Tokenization**: the format is split into literal runs and placeholder
//!    contents (`format` module, built on `nom`)
//! 2. **Segmentation**: each literal run is located in the unconsumed input,
//!    and the text between matches becomes the field of one placeholder
//! 3. **Typed parsing**: fields are checked against their specifier and
//!    converted, strictly left to right, stopping at the first error
//!    (`specifier`, `value` and `scanner` modules)
//!
//! # Format mini-language
//!
//! - `{}`: type inferred from the declared type
//! - `{%d}`: signed integer
//! - `{%u}`: unsigned integer
//! - `{%f}`: floating point
//! - `{%s}`: text (`String`, `&str`, `Box<str>`, `Cow<str>`)
//! - Any other text is literal and must be found in the input.
//!
//! A `{` with no closing `}` after it, and everything following it, is
//! literal text.
//!
//! # Compile-time checking
//!
//! The [`scan!`] macro checks a literal format at compile time: malformed and
//! unknown specifiers, placeholder/type count and specifier/type category
//! are all rejected before the program runs.
//!
//! ```
//! use typescan::scan;
//!
//! let (x, y) = scan!("x=10, y=-3", "x={%u}, y={%d}", u32, i32).unwrap().into_values();
//! assert_eq!((x, y), (10, -3));
//! ```
//!
//! ```compile_fail
//! use typescan::scan;
//!
//! // `%u` requires an unsigned integer type.
//! let _ = scan!("5", "{%u}", i32);
//! ```
//!
//! # Known Limitations
//!
//! - **Substring search**: literals are found anywhere in the unconsumed
//!   input, so a field containing the next literal's text is cut short, and
//!   text around the outermost literals is ignored. [`LiteralMatch::Anchored`]
//!   pins the outer literals to the input's ends.
//! - **Consecutive placeholders**: `{}{}` has no literal to split on and
//!   always fails with a count mismatch.
//! - **Placeholder-free formats**: the text around the literal still forms
//!   one field, so such a format never matches any type list.
//! - **No escapes**: `{{` and `}}` are not supported.

#![forbid(unsafe_code)]

extern crate self as typescan;

mod error;
mod format;
mod options;
mod scanner;
mod specifier;
mod types;
mod value;

pub use error::ScanError;
pub use format::InputFormat;
pub use options::{LiteralMatch, ScanOptions};
pub use scanner::{ScanTuple, scan, scan_with};
pub use specifier::{FormatSegment, Specifier};
pub use types::ScanResult;
pub use value::{FloatingPoint, FromField, SignedInteger, Textual, UnsignedInteger, ValueKind};

pub use typescan_proc_macro::scan;
