//! Error types for sink operations.

use std::fmt;

/// Error returned by sink construction and by [`Sink::accept`](crate::Sink::accept).
///
/// Every variant signals a caller logic error. Nothing in this crate retries
/// or recovers from one internally.
///
/// # Examples
///
/// ```rust
/// use downstream::{Nil, Sink, SinkError};
///
/// let mut sink = Nil;
/// assert!(!Sink::<i32>::can_accept(&mut sink));
/// assert_eq!(Sink::<i32>::accept(&mut sink, &1), Err(SinkError::Exhausted));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// `accept` was called while `can_accept` reported false.
    Exhausted,
    /// A page was requested with a negative page number.
    InvalidPageNumber(isize),
    /// A page was requested with a page size that is zero or negative.
    InvalidPageSize(isize),
    /// The window of the requested page does not fit in `usize`.
    PageOutOfRange {
        /// Zero-based page number.
        page: usize,
        /// Items per page.
        size: usize,
    },
}

impl SinkError {
    /// Returns true if this error is a precondition violation on `accept`.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "sink can't accept any more values"),
            Self::InvalidPageNumber(page) => {
                write!(f, "page number must be non-negative, got {}", page)
            }
            Self::InvalidPageSize(size) => {
                write!(f, "page size must be positive, got {}", size)
            }
            Self::PageOutOfRange { page, size } => {
                write!(f, "page {} of size {} is out of range", page, size)
            }
        }
    }
}

impl std::error::Error for SinkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_display() {
        assert_eq!(
            format!("{}", SinkError::Exhausted),
            "sink can't accept any more values"
        );
        assert!(SinkError::Exhausted.is_exhausted());
    }

    #[test]
    fn test_page_errors_display() {
        let display = format!("{}", SinkError::InvalidPageNumber(-1));
        assert!(display.contains("non-negative"));
        assert!(display.contains("-1"));

        let display = format!("{}", SinkError::InvalidPageSize(0));
        assert!(display.contains("positive"));
        assert!(!SinkError::InvalidPageSize(0).is_exhausted());

        let display = format!("{}", SinkError::PageOutOfRange { page: 7, size: 3 });
        assert!(display.contains("page 7 of size 3"));
    }

    #[test]
    fn test_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(SinkError::Exhausted);
        assert!(err.source().is_none());
    }
}
