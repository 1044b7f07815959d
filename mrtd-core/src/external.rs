//! Integration points outside the codec
//!
//! Both capabilities are specified as callable no-ops: they take nothing,
//! return nothing, and never fail. Harnesses built against this crate can
//! wire them in today and pick up real behavior when it lands.

/// Capture an MRZ from an optical scanner
///
/// Placeholder for optical capture; currently a no-op.
pub fn scan_mrz() {}

/// Look up a record in an external document database
///
/// Placeholder for registry lookup; currently a no-op.
pub fn query_database() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stubs_are_callable() {
        scan_mrz();
        query_database();
    }
}
