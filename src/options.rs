//! Scan configuration.
//!
//! ```rust
//! use typescan::{LiteralMatch, ScanOptions, scan_with};
//!
//! let options = ScanOptions::new().with_literal_match(LiteralMatch::Anchored);
//! assert!(scan_with::<(u32,)>("id=7", "id={}", &options).is_ok());
//! assert!(scan_with::<(u32,)>("xid=7", "id={}", &options).is_err());
//! ```

/// How literal runs of the format are located in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LiteralMatch {
    /// Each literal is found by substring search in the unconsumed input.
    /// Text before a leading literal and after a trailing literal is ignored.
    #[default]
    Search,
    /// A leading literal must start the input and a trailing literal must end
    /// it. Interior literals still close the preceding field at their first
    /// occurrence.
    Anchored,
}

/// Options for [`scan_with`](crate::scan_with).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ScanOptions {
    pub literal_match: LiteralMatch,
}

impl ScanOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_literal_match(mut self, literal_match: LiteralMatch) -> Self {
        self.literal_match = literal_match;
        self
    }
}
