//! BoxedSink for type erasure.

use crate::sink::Sink;

/// A type-erased sink, for storing different sink types together.
///
/// [`Compose`](crate::Compose) holds its children as `BoxedSink`s. Because
/// `Sink` is implemented for `&mut S`, a borrowed sink can be boxed too, which
/// lets the caller keep using it once the composite is gone.
///
/// # Example
///
/// ```rust
/// use downstream::{append_to, BoxedSink, SinkExt};
///
/// let mut evens = Vec::new();
/// let mut odds = Vec::new();
/// let mut sinks: Vec<BoxedSink<'_, i32>> = vec![
///     append_to(&mut evens).map_filter(downstream::chain::filter(|n: &i32| n % 2 == 0)).boxed(),
///     append_to(&mut odds).map_filter(downstream::chain::filter(|n: &i32| n % 2 == 1)).boxed(),
/// ];
/// for n in 0..6 {
///     for sink in sinks.iter_mut() {
///         sink.accept(&n).unwrap();
///     }
/// }
/// drop(sinks);
/// assert_eq!(evens, vec![0, 2, 4]);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub type BoxedSink<'a, T> = Box<dyn Sink<T> + 'a>;
