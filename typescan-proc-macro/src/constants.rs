//! Compile-time limits for the `scan!` macro.

/// Maximum length of a format string in bytes.
///
/// Keeps macro expansion cheap for pathological literals.
pub const MAX_FORMAT_STRING_LEN: usize = 10_000;

/// Maximum number of placeholders.
///
/// Matches the largest tuple arity `typescan::ScanTuple` is implemented for.
pub const MAX_PLACEHOLDERS: usize = 12;

/// Initial capacity hint for the token vector.
///
/// Most format strings have 2-4 tokens, so this avoids initial reallocations.
pub const TOKENS_INITIAL_CAPACITY: usize = 4;
