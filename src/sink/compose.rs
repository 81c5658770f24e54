//! Fan-out sink broadcasting each value to several children.

use std::fmt;

use crate::error::SinkError;
use crate::sink::{ensure_can_accept, BoxedSink, Nil, Sink};

/// Sends every accepted value to each of its children, in order.
///
/// Children that can no longer accept are removed the next time this sink is
/// asked whether it can accept, so the set of children only ever shrinks. The
/// composite can accept as long as at least one child can.
///
/// Use [`compose`] to build one; it avoids the wrapper for zero or one child.
pub struct Compose<'a, T: ?Sized> {
    sinks: Vec<BoxedSink<'a, T>>,
}

impl<'a, T: ?Sized> Compose<'a, T> {
    /// Fan out to `sinks`, visiting them in the given order.
    pub fn new(sinks: Vec<BoxedSink<'a, T>>) -> Self {
        Compose { sinks }
    }

    /// Number of children not yet found exhausted.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Returns true if every child has been pruned.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn prune(&mut self) {
        #[cfg(feature = "tracing")]
        let before = self.sinks.len();
        self.sinks.retain_mut(|sink| sink.can_accept());
        #[cfg(feature = "tracing")]
        {
            let remaining = self.sinks.len();
            if remaining < before {
                tracing::debug!(
                    pruned = before - remaining,
                    remaining,
                    "pruned exhausted sinks"
                );
            }
        }
    }
}

impl<T: ?Sized> fmt::Debug for Compose<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl<T: ?Sized> Sink<T> for Compose<'_, T> {
    fn can_accept(&mut self) -> bool {
        self.prune();
        !self.sinks.is_empty()
    }

    fn accept(&mut self, value: &T) -> Result<(), SinkError> {
        ensure_can_accept::<T, _>(self)?;
        for sink in self.sinks.iter_mut() {
            sink.accept(value)?;
        }
        Ok(())
    }
}

/// Combine `sinks` into one sink that fans each value out to all of them.
///
/// With no sinks the result is [`Nil`]; with exactly one it is that sink,
/// unwrapped; otherwise it is a [`Compose`].
///
/// # Example
///
/// ```rust
/// use downstream::{append_to, compose, SinkExt};
///
/// let mut first_two = Vec::new();
/// let mut first_four = Vec::new();
/// let mut both = compose(vec![
///     append_to(&mut first_two).slice(0, 2).boxed(),
///     append_to(&mut first_four).slice(0, 4).boxed(),
/// ]);
/// assert_eq!(both.feed(0..).unwrap(), 4);
/// drop(both);
/// assert_eq!(first_two, vec![0, 1]);
/// assert_eq!(first_four, vec![0, 1, 2, 3]);
/// ```
pub fn compose<'a, T: ?Sized + 'a>(mut sinks: Vec<BoxedSink<'a, T>>) -> BoxedSink<'a, T> {
    if sinks.len() > 1 {
        return Box::new(Compose::new(sinks));
    }
    match sinks.pop() {
        Some(only) => only,
        None => Box::new(Nil),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{filter, mapper};
    use crate::sink::{append_boxed_to, append_to, sink_fn, SinkExt};
    use crate::testing::{feed_counting, Recorder};

    #[test]
    fn test_compose_zero_is_nil() {
        let mut sink = compose::<i32>(Vec::new());
        assert!(!sink.can_accept());
        assert_eq!(sink.accept(&1), Err(SinkError::Exhausted));
    }

    fn address<S: ?Sized>(sink: &S) -> *const () {
        (sink as *const S).cast()
    }

    #[test]
    fn test_compose_one_is_unwrapped() {
        let mut values: Vec<i32> = Vec::new();
        let only: BoxedSink<'_, i32> = append_to(&mut values).boxed();
        let before = address(&*only);
        let composed = compose(vec![only]);
        assert_eq!(address(&*composed), before);
    }

    #[test]
    fn test_compose_prunes_exhausted_children() {
        let mut one: Recorder<i32> = Recorder::with_limit(1);
        let mut three: Recorder<i32> = Recorder::with_limit(3);
        let mut sink: Compose<'_, i32> =
            Compose::new(vec![Box::new(&mut one), Box::new(&mut three), Box::new(Nil)]);

        assert!(sink.can_accept());
        assert_eq!(sink.len(), 2);
        sink.accept(&1).unwrap();
        assert!(sink.can_accept());
        assert_eq!(sink.len(), 1);
        sink.accept(&2).unwrap();
        sink.accept(&3).unwrap();
        assert!(!sink.can_accept());
        assert!(sink.is_empty());
        assert_eq!(sink.accept(&4), Err(SinkError::Exhausted));
        drop(sink);

        assert_eq!(one.values(), &[1]);
        assert_eq!(three.values(), &[1, 2, 3]);
    }

    #[test]
    fn test_compose_exhausts_when_child_used_up_elsewhere() {
        let mut strs: Vec<String> = Vec::new();
        let mut ints: Recorder<i32> = Recorder::with_limit(3);
        {
            let mut sink = compose::<i32>(vec![
                append_to(&mut strs)
                    .slice(0, 1)
                    .map_filter(mapper(|n: &i32, out: &mut String| {
                        *out = n.to_string();
                        true
                    }))
                    .boxed(),
                Box::new(&mut ints),
                Box::new(Nil),
            ]);
            assert!(sink.can_accept());
            sink.accept(&1).unwrap();
            assert!(sink.can_accept());
            sink.accept(&2).unwrap();
            assert!(sink.can_accept());
        }
        // use up the recorder on its own
        ints.accept(&3).unwrap();
        assert!(!ints.can_accept());

        assert_eq!(strs, vec!["1"]);
        assert_eq!(ints.values(), &[1, 2, 3]);
    }

    #[test]
    fn test_children_visited_in_order() {
        let mut order = Vec::new();
        {
            let log = std::cell::RefCell::new(&mut order);
            let mut sink = compose::<i32>(vec![
                Box::new(sink_fn(|n: &i32| log.borrow_mut().push(("a", *n)))),
                Box::new(sink_fn(|n: &i32| log.borrow_mut().push(("b", *n)))),
            ]);
            sink.accept(&1).unwrap();
            sink.accept(&2).unwrap();
        }
        assert_eq!(order, vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]);
    }

    #[test]
    fn test_fan_out_mixed_children() {
        let mut zero_to_five = Vec::new();
        let mut three_to_seven = Vec::new();
        let mut sevens = Vec::new();
        let mut times_ten = Vec::new();
        let mut boxed: Vec<Box<i32>> = Vec::new();
        let mut sink = compose::<i32>(vec![
            Box::new(Nil),
            append_to(&mut times_ten)
                .slice(0, 100)
                .map_filter(mapper(|n: &i32, out: &mut i32| {
                    *out = n * 10;
                    true
                }))
                .boxed(),
            append_to(&mut zero_to_five).slice(0, 5).boxed(),
            append_to(&mut three_to_seven).slice(3, 7).boxed(),
            append_boxed_to(&mut boxed).slice(1, 3).boxed(),
            append_to(&mut sevens)
                .slice(1, 4)
                .map_filter(filter(|n: &i32| n % 7 == 0))
                .boxed(),
        ]);
        feed_counting(&mut sink);
        drop(sink);

        assert_eq!(zero_to_five, vec![0, 1, 2, 3, 4]);
        assert_eq!(three_to_seven, vec![3, 4, 5, 6]);
        assert_eq!(boxed, vec![Box::new(1), Box::new(2)]);
        assert_eq!(sevens, vec![7, 14, 21]);
        assert_eq!(times_ten.len(), 100);
        assert_eq!(times_ten[1], 10);
        assert_eq!(times_ten[2], 20);
    }
}
