//! Offset cursor for the paginated Jira search endpoint.
//!
//! Jira's search responses carry `startAt`, `maxResults` and `total`; the
//! cursor advances by the server-reported page size and stops once the
//! offset reaches the reported total. The first request always happens
//! because the total is unknown until a response arrives.

use crate::error::Error;

/// Pagination state for one project's issue fetch. Exists only for the
/// duration of the loop and is discarded once all issues are collected.
#[derive(Debug, Clone, Default)]
pub struct PageCursor {
    /// Offset to request next (0-based).
    pub start_at: u64,
    /// Server-reported total, unknown before the first response.
    pub total: Option<u64>,
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one page response: remember the reported total and advance
    /// the offset by the reported page size.
    ///
    /// A zero page size would re-request the same offset forever; jump
    /// straight to the end instead and let the count check report any
    /// shortfall.
    pub fn advance(&mut self, max_results: u64, total: u64) {
        if max_results == 0 {
            self.start_at = total;
        } else {
            self.start_at += max_results;
        }
        self.total = Some(total);
    }

    /// True once every page has been requested.
    pub fn exhausted(&self) -> bool {
        match self.total {
            Some(total) => self.start_at >= total,
            None => false,
        }
    }
}

/// Verify the pagination invariant: the number of issues accumulated across
/// all pages must equal the server-reported total.
pub fn check_total(expected: u64, actual: u64) -> Result<(), Error> {
    if expected != actual {
        return Err(Error::CountMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_always_happens() {
        let cursor = PageCursor::new();
        assert!(!cursor.exhausted());
        assert_eq!(cursor.start_at, 0);
    }

    #[test]
    fn test_empty_result_exhausts_after_first_page() {
        let mut cursor = PageCursor::new();
        cursor.advance(50, 0);
        assert!(cursor.exhausted());
    }

    #[test]
    fn test_single_page_exhausts() {
        let mut cursor = PageCursor::new();
        cursor.advance(50, 2);
        assert!(cursor.exhausted());
        assert_eq!(cursor.start_at, 50);
    }

    #[test]
    fn test_multiple_pages_advance_by_page_size() {
        let mut cursor = PageCursor::new();

        cursor.advance(50, 120);
        assert!(!cursor.exhausted());
        assert_eq!(cursor.start_at, 50);

        cursor.advance(50, 120);
        assert!(!cursor.exhausted());
        assert_eq!(cursor.start_at, 100);

        cursor.advance(50, 120);
        assert!(cursor.exhausted());
    }

    #[test]
    fn test_zero_page_size_does_not_loop() {
        let mut cursor = PageCursor::new();
        cursor.advance(0, 5);
        assert!(cursor.exhausted());
        // The accumulated issues then fall short of the reported total,
        // which surfaces as a count mismatch rather than a hang.
        assert!(check_total(5, 1).is_err());
    }

    #[test]
    fn test_check_total_ok() {
        assert!(check_total(3, 3).is_ok());
        assert!(check_total(0, 0).is_ok());
    }

    #[test]
    fn test_check_total_mismatch() {
        let err = check_total(10, 7).unwrap_err();
        assert_eq!(
            err,
            Error::CountMismatch {
                expected: 10,
                actual: 7
            }
        );
    }
}
