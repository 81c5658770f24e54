//! Sink and FinalizeSink trait definitions.

use crate::error::SinkError;

/// A single-pass consumer of values pushed to it one at a time.
///
/// Callers drive a sink by checking [`can_accept`](Sink::can_accept) and then
/// calling [`accept`](Sink::accept) with the next value, until `can_accept`
/// reports false.
///
/// # Contract
///
/// - Once `can_accept` returns false it returns false for the rest of the
///   sink's life.
/// - `accept` returns [`SinkError::Exhausted`] if `can_accept` would return
///   false. Implementations check this with [`ensure_can_accept`].
///
/// `can_accept` takes `&mut self` because composite sinks update their own
/// bookkeeping when asked (a fan-out drops children that are done).
///
/// # Example
///
/// ```rust
/// use downstream::{append_to, Sink, SinkExt};
///
/// let mut firsts = Vec::new();
/// let mut sink = append_to(&mut firsts).slice(0, 2);
/// for n in [7, 8, 9] {
///     if sink.can_accept() {
///         sink.accept(&n).unwrap();
///     }
/// }
/// assert_eq!(firsts, vec![7, 8]);
/// ```
pub trait Sink<T: ?Sized> {
    /// Returns true if this sink can accept another value.
    fn can_accept(&mut self) -> bool;

    /// Accept the value `value` refers to.
    fn accept(&mut self, value: &T) -> Result<(), SinkError>;
}

/// A sink that must be told when its caller is done with it.
///
/// After the first call to [`finalize`](FinalizeSink::finalize) the sink is
/// exhausted and any deferred work (such as trimming an over-allocated
/// buffer) has been done. Later calls do nothing.
pub trait FinalizeSink<T: ?Sized>: Sink<T> {
    /// Stop accepting values and settle any deferred state.
    fn finalize(&mut self);
}

/// Check the `accept` precondition of `sink`.
///
/// Returns [`SinkError::Exhausted`] if `sink` can't accept a value. Composite
/// sinks call this first thing in `accept`.
///
/// # Example
///
/// ```rust
/// use downstream::{ensure_can_accept, Nil, SinkError};
///
/// assert_eq!(ensure_can_accept::<i32, _>(&mut Nil), Err(SinkError::Exhausted));
/// ```
pub fn ensure_can_accept<T, S>(sink: &mut S) -> Result<(), SinkError>
where
    T: ?Sized,
    S: Sink<T> + ?Sized,
{
    if sink.can_accept() {
        Ok(())
    } else {
        Err(SinkError::Exhausted)
    }
}

impl<T: ?Sized, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    #[inline]
    fn can_accept(&mut self) -> bool {
        (**self).can_accept()
    }

    #[inline]
    fn accept(&mut self, value: &T) -> Result<(), SinkError> {
        (**self).accept(value)
    }
}

impl<T: ?Sized, S: FinalizeSink<T> + ?Sized> FinalizeSink<T> for &mut S {
    fn finalize(&mut self) {
        (**self).finalize()
    }
}

impl<T: ?Sized, S: Sink<T> + ?Sized> Sink<T> for Box<S> {
    #[inline]
    fn can_accept(&mut self) -> bool {
        (**self).can_accept()
    }

    #[inline]
    fn accept(&mut self, value: &T) -> Result<(), SinkError> {
        (**self).accept(value)
    }
}

impl<T: ?Sized, S: FinalizeSink<T> + ?Sized> FinalizeSink<T> for Box<S> {
    fn finalize(&mut self) {
        (**self).finalize()
    }
}
