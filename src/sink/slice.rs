//! Window sink forwarding a half-open range of offered values.

use std::ops::Range;

use crate::error::SinkError;
use crate::sink::{ensure_can_accept, FinalizeSink, Sink};

/// Forwards the `start`th through `end - 1`th values it is offered, counting
/// from zero, and then stops.
///
/// Every offered value counts toward the window, including the ones before
/// `start` that are discarded. Once `end` values have been offered, or the
/// inner sink is exhausted, this sink is exhausted. If `end <= start` the
/// inner sink never sees a value.
///
/// Created by [`SinkExt::slice`](crate::SinkExt::slice) or [`Slice::new`].
#[derive(Debug, Clone)]
pub struct Slice<S> {
    inner: S,
    start: usize,
    end: usize,
    idx: usize,
}

impl<S> Slice<S> {
    /// Wrap `inner` with the window `[start, end)`. Negative bounds count as 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use downstream::{append_to, SinkExt, Slice};
    ///
    /// let mut kept = Vec::new();
    /// let mut sink = Slice::new(append_to(&mut kept), -1, 3);
    /// sink.feed(10..20).unwrap();
    /// assert_eq!(kept, vec![10, 11, 12]);
    /// ```
    pub fn new(inner: S, start: isize, end: isize) -> Self {
        let start = usize::try_from(start).unwrap_or(0);
        let end = usize::try_from(end).unwrap_or(0);
        Slice::with_range(inner, start..end)
    }

    /// Wrap `inner` with an already normalized window.
    pub fn with_range(inner: S, window: Range<usize>) -> Self {
        Slice {
            inner,
            start: window.start,
            end: window.end,
            idx: 0,
        }
    }

    /// The window as a range of offered indexes.
    pub fn window(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of values offered so far.
    pub fn offered(&self) -> usize {
        self.idx
    }

    /// The wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Mutable access to the wrapped sink.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T: ?Sized, S: Sink<T>> Sink<T> for Slice<S> {
    fn can_accept(&mut self) -> bool {
        self.inner.can_accept() && self.idx < self.end
    }

    fn accept(&mut self, value: &T) -> Result<(), SinkError> {
        ensure_can_accept::<T, _>(self)?;
        if self.idx >= self.start {
            self.inner.accept(value)?;
        }
        self.idx += 1;
        Ok(())
    }
}

impl<T: ?Sized, S: FinalizeSink<T>> FinalizeSink<T> for Slice<S> {
    fn finalize(&mut self) {
        self.inner.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{append_to, SinkExt};
    use crate::testing::feed_counting;

    fn window(start: isize, end: isize) -> Vec<i32> {
        let mut kept = Vec::new();
        feed_counting(&mut append_to(&mut kept).slice(start, end));
        kept
    }

    #[test]
    fn test_slice_forwards_window() {
        assert_eq!(window(0, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(window(3, 7), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_slice_negative_bounds() {
        assert_eq!(window(-1, 5), vec![0, 1, 2, 3, 4]);
        assert!(window(5, -1).is_empty());
        assert!(window(-3, -1).is_empty());
        assert!(window(-1, -3).is_empty());
        assert!(window(-2, 0).is_empty());
        assert!(window(0, -2).is_empty());
    }

    #[test]
    fn test_inverted_window_still_counts_offers() {
        let mut kept: Vec<i32> = Vec::new();
        let mut sink = append_to(&mut kept).slice(5, 3);
        assert_eq!(feed_counting(&mut sink), 3);
        assert_eq!(sink.offered(), 3);
        assert!(!sink.can_accept());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_pre_start_values_count_toward_end() {
        let mut kept = Vec::new();
        let mut sink = Slice::with_range(append_to(&mut kept), 2..4);
        for n in ["a", "b", "c", "d"] {
            sink.accept(&n).unwrap();
        }
        assert_eq!(sink.accept(&"e"), Err(SinkError::Exhausted));
        assert_eq!(sink.window(), 2..4);
        assert_eq!(kept, vec!["c", "d"]);
    }

    #[test]
    fn test_slice_stops_when_inner_stops() {
        let mut kept = Vec::new();
        let mut sink = append_to(&mut kept).slice(0, 3).slice(0, 100);
        assert_eq!(feed_counting(&mut sink), 3);
        assert_eq!(kept, vec![0, 1, 2]);
    }
}
