//! Result type of a successful scan.

/// The values of a successful scan, one per declared type, in declaration
/// order.
///
/// Once built it is never modified; read through [`values`](Self::values) or
/// take ownership with [`into_values`](Self::into_values), typically to
/// destructure the tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScanResult<T> {
    values: T,
}

impl<T> ScanResult<T> {
    pub(crate) fn new(values: T) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    pub fn into_values(self) -> T {
        self.values
    }
}
