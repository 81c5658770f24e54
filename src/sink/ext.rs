//! Extension trait providing combinator methods for all Sinks.

use std::borrow::Borrow;

use crate::error::SinkError;
use crate::sink::{BoxedSink, MapFilter, Sink, Slice, TakeWhile};

/// Extension trait providing combinator methods for all sinks.
///
/// This trait is automatically implemented for every type that implements
/// [`Sink`]. You don't need to implement it yourself.
///
/// # Example
///
/// ```rust
/// use downstream::chain::filter;
/// use downstream::{append_to, SinkExt};
///
/// let mut odds = Vec::new();
/// let offered = append_to(&mut odds)
///     .slice(0, 3)
///     .map_filter(filter(|n: &i32| n % 2 == 1))
///     .feed(0..)
///     .unwrap();
/// assert_eq!(offered, 6);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub trait SinkExt<T: ?Sized>: Sink<T> {
    /// Forward only the values offered at positions `[start, end)`.
    ///
    /// Negative bounds are treated as 0. See [`Slice`].
    fn slice(self, start: isize, end: isize) -> Slice<Self>
    where
        Self: Sized,
    {
        Slice::new(self, start, end)
    }

    /// Run every value through `chain` and forward what survives.
    ///
    /// See [`MapFilter`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use downstream::chain::mapper;
    /// use downstream::{append_to, SinkExt};
    ///
    /// let mut lengths = Vec::new();
    /// append_to(&mut lengths)
    ///     .map_filter(mapper(|s: &str, len: &mut usize| {
    ///         *len = s.len();
    ///         true
    ///     }))
    ///     .feed(["one", "three"])
    ///     .unwrap();
    /// assert_eq!(lengths, vec![3, 5]);
    /// ```
    fn map_filter<C>(self, chain: C) -> MapFilter<Self, C>
    where
        Self: Sized,
    {
        MapFilter::new(self, chain)
    }

    /// Forward values through `chain` until it drops one, then stop.
    ///
    /// See [`TakeWhile`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use downstream::chain::filter;
    /// use downstream::{append_to, SinkExt};
    ///
    /// let mut small = Vec::new();
    /// append_to(&mut small)
    ///     .take_while(filter(|n: &i32| *n < 3))
    ///     .feed([1, 2, 3, 1])
    ///     .unwrap();
    /// assert_eq!(small, vec![1, 2]);
    /// ```
    fn take_while<C>(self, chain: C) -> TakeWhile<Self, C>
    where
        Self: Sized,
    {
        TakeWhile::new(self, chain)
    }

    /// Erase this sink's type.
    fn boxed<'a>(self) -> BoxedSink<'a, T>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Offer values from `items` for as long as this sink can accept them.
    ///
    /// Returns how many values were passed to `accept`. Stops early, without
    /// pulling another item, once `can_accept` is false.
    ///
    /// # Errors
    ///
    /// Returns the first error an `accept` call reports.
    fn feed<I>(&mut self, items: I) -> Result<usize, SinkError>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut items = items.into_iter();
        let mut offered = 0;
        while self.can_accept() {
            let Some(item) = items.next() else {
                break;
            };
            self.accept(item.borrow())?;
            offered += 1;
        }
        Ok(offered)
    }
}

impl<T: ?Sized, S: Sink<T> + ?Sized> SinkExt<T> for S {}
