//! Sink applying a map/filter chain before forwarding.

use crate::chain::{Concat, MapFilterer};
use crate::error::SinkError;
use crate::sink::{ensure_can_accept, FinalizeSink, Sink};

/// Runs every accepted value through a chain and forwards what survives.
///
/// Dropped values are consumed silently. Values that pass are forwarded as
/// the chain's output, which after a mapper step is the mapper's scratch
/// cell rather than the original value.
///
/// Calling [`map_filter`](MapFilter::map_filter) on a `MapFilter` merges the
/// new chain in front of the existing one instead of wrapping again.
///
/// # Example
///
/// ```rust
/// use downstream::chain::*;
/// use downstream::{append_to, Sink, SinkExt};
///
/// let mut evens = Vec::new();
/// let mut sink = append_to(&mut evens).map_filter(
///     chain()
///         .filter(|n: &i32| n % 2 == 0)
///         .map(|n: &i32, out: &mut String| {
///             *out = n.to_string();
///             true
///         }),
/// );
/// for n in [1, 2, 4] {
///     if sink.can_accept() {
///         sink.accept(&n).unwrap();
///     }
/// }
/// assert_eq!(evens, vec!["2", "4"]);
/// ```
#[derive(Debug, Clone)]
pub struct MapFilter<S, C> {
    inner: S,
    chain: C,
}

impl<S, C> MapFilter<S, C> {
    /// Wrap `inner` so that values pass through `chain` first.
    pub fn new(inner: S, chain: C) -> Self {
        MapFilter { inner, chain }
    }

    /// Run `chain` before this sink's own chain, without another layer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use downstream::chain::*;
    /// use downstream::{append_to, SinkExt};
    ///
    /// let mut out = Vec::new();
    /// let mut sink = append_to(&mut out)
    ///     .map_filter(filter(|n: &i32| n % 3 == 0))
    ///     .map_filter(filter(|n: &i32| n % 2 == 0));
    /// assert_eq!(sink.chain().len(), 2);
    /// sink.feed(0..13).unwrap();
    /// assert_eq!(out, vec![0, 6, 12]);
    /// ```
    pub fn map_filter<C0>(self, chain: C0) -> MapFilter<S, C0::Output>
    where
        C0: Concat<C>,
    {
        MapFilter {
            inner: self.inner,
            chain: chain.concat(self.chain),
        }
    }

    /// The chain applied to every value.
    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// The wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T: ?Sized, S, C> Sink<T> for MapFilter<S, C>
where
    C: MapFilterer<T>,
    S: Sink<C::Output>,
{
    fn can_accept(&mut self) -> bool {
        self.inner.can_accept()
    }

    fn accept(&mut self, value: &T) -> Result<(), SinkError> {
        ensure_can_accept::<T, _>(self)?;
        match self.chain.map_filter(value) {
            Some(current) => self.inner.accept(current),
            None => Ok(()),
        }
    }
}

impl<T: ?Sized, S, C> FinalizeSink<T> for MapFilter<S, C>
where
    C: MapFilterer<T>,
    S: FinalizeSink<C::Output>,
{
    fn finalize(&mut self) {
        self.inner.finalize()
    }
}
