//! Procedural macro for compile-time checked `typescan` scans.
//!
//! The format string is analyzed during expansion with the same rules the
//! runtime tokenizer uses:
//! 1. **Tokenization**: literal text and placeholders are identified, and
//!    every specifier is validated
//! 2. **Checking**: placeholder count must equal the number of listed types,
//!    and each `%d`/`%u`/`%f`/`%s` placeholder gets a trait-bound assertion
//!    for its type
//! 3. **Expansion**: the macro becomes a call to `typescan::scan`
//!
//! The implementation is organized into focused modules:
//! - `constants`: compile-time limits
//! - `types`: core type definitions
//! - `validation`: specifier validation
//! - `parsing`: macro argument parsing
//! - `tokenization`: format string tokenization
//! - `codegen`: code generation

#![forbid(unsafe_code)]

mod codegen;
mod constants;
mod parsing;
mod tokenization;
mod types;
mod validation;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use codegen::generate_scan_implementation;
use parsing::ScanArgs;

/// Scans a string against a literal format, with the format checked at
/// compile time.
///
/// # Syntax
///
/// ```ignore
/// scan!(input_expr, "format string", Type1, Type2, ...)
/// ```
///
/// - `input_expr`: expression that evaluates to a `&str`
/// - `format string`: string literal with `{}`, `{%d}`, `{%u}`, `{%f}` or `{%s}` placeholders
/// - `Type1, ...`: one target type per placeholder, in order
///
/// # Returns
///
/// `Result<typescan::ScanResult<(Type1, Type2, ...)>, typescan::ScanError>`,
/// exactly as `typescan::scan::<(Type1, Type2, ...)>` would.
///
/// # Compile errors
///
/// - Malformed (`{d}`, `{%df}`) or unknown (`{%x}`) specifiers
/// - Placeholder count differing from the number of types
/// - A format with no placeholders at all
/// - Consecutive placeholders with no literal between them
/// - A specifier whose category the type does not belong to, e.g. `{%u}` with `i32`
///
/// # Examples
///
/// ```ignore
/// use typescan::scan;
///
/// let (name, age) = scan!("Bob: 30", "{%s}: {%u}", String, u8)?.into_values();
/// ```
#[proc_macro]
pub fn scan(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ScanArgs);

    match generate_scan_implementation(&args) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}
