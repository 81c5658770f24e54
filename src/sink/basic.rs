//! The always-exhausted and always-open sinks.

use std::fmt;

use crate::error::SinkError;
use crate::sink::Sink;

/// A sink that accepts nothing.
///
/// `can_accept` is always false and `accept` always fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nil;

impl<T: ?Sized> Sink<T> for Nil {
    fn can_accept(&mut self) -> bool {
        false
    }

    fn accept(&mut self, _value: &T) -> Result<(), SinkError> {
        Err(SinkError::Exhausted)
    }
}

/// A sink that hands every value to a callback and never runs out.
///
/// Created by [`sink_fn`].
#[derive(Clone, Copy)]
pub struct SinkFn<F>(F);

impl<F> fmt::Debug for SinkFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkFn").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Sink<T> for SinkFn<F>
where
    F: FnMut(&T),
{
    fn can_accept(&mut self) -> bool {
        true
    }

    fn accept(&mut self, value: &T) -> Result<(), SinkError> {
        (self.0)(value);
        Ok(())
    }
}

/// Create a sink that calls `f` with each value it accepts.
///
/// # Example
///
/// ```rust
/// use downstream::{sink_fn, Sink};
///
/// let mut total = 0;
/// let mut sink = sink_fn(|n: &i32| total += n);
/// sink.accept(&4).unwrap();
/// sink.accept(&5).unwrap();
/// assert!(Sink::<i32>::can_accept(&mut sink));
/// drop(sink);
/// assert_eq!(total, 9);
/// ```
pub fn sink_fn<T: ?Sized, F>(f: F) -> SinkFn<F>
where
    F: FnMut(&T),
{
    SinkFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ensure_can_accept;

    #[test]
    fn test_nil_never_accepts() {
        let mut nil = Nil;
        assert!(!Sink::<i32>::can_accept(&mut nil));
        assert_eq!(nil.accept(&3), Err(SinkError::Exhausted));
        assert_eq!(
            ensure_can_accept::<i32, _>(&mut nil),
            Err(SinkError::Exhausted)
        );
    }

    #[test]
    fn test_sink_fn_is_always_open() {
        let mut seen = Vec::new();
        let mut sink = sink_fn(|s: &str| seen.push(s.len()));
        assert_eq!(ensure_can_accept::<str, _>(&mut sink), Ok(()));
        sink.accept("abc").unwrap();
        sink.accept("").unwrap();
        assert!(Sink::<str>::can_accept(&mut sink));
        drop(sink);
        assert_eq!(seen, vec![3, 0]);
    }
}
