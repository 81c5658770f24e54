//! Testing utilities for code that drives or implements sinks.
//!
//! This module provides a recording sink with an optional limit, a helper
//! that feeds `0, 1, 2, ...` to a sink until it stops, an assertion macro
//! for exhausted sinks, and property-based testing support.
//!
//! # Examples
//!
//! ## Recorder
//!
//! ```rust
//! use downstream::testing::{feed_counting, Recorder};
//! use downstream::SinkExt;
//!
//! let mut recorder: Recorder<i32> = Recorder::new();
//! feed_counting(&mut (&mut recorder).slice(2, 5));
//! assert_eq!(recorder.values(), &[2, 3, 4]);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use downstream::assert_exhausted;
//! use downstream::testing::Recorder;
//!
//! let mut recorder: Recorder<i32> = Recorder::with_limit(0);
//! assert_exhausted!(recorder, 1);
//! ```

use crate::error::SinkError;
use crate::sink::Sink;

/// Feed `0, 1, 2, ...` to `sink` for as long as it can accept.
///
/// Returns how many values were offered.
///
/// # Panics
///
/// Panics if `accept` fails right after `can_accept` returned true, which
/// breaks the sink contract.
pub fn feed_counting<S: Sink<i32> + ?Sized>(sink: &mut S) -> usize {
    let mut offered = 0;
    let mut n: i32 = 0;
    while sink.can_accept() {
        if let Err(err) = sink.accept(&n) {
            panic!("sink refused {} right after can_accept: {}", n, err);
        }
        offered += 1;
        n += 1;
    }
    offered
}

/// A sink that records clones of what it accepts, up to an optional limit.
///
/// # Example
///
/// ```rust
/// use downstream::testing::Recorder;
/// use downstream::{Sink, SinkExt};
///
/// let mut recorder: Recorder<&str> = Recorder::with_limit(2);
/// assert_eq!(recorder.feed(["a", "b", "c"]), Ok(2));
/// assert!(!recorder.can_accept());
/// assert_eq!(recorder.values(), &["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorder<T> {
    values: Vec<T>,
    limit: Option<usize>,
}

impl<T> Recorder<T> {
    /// Create a recorder that accepts any number of values.
    pub fn new() -> Self {
        Recorder {
            values: Vec::new(),
            limit: None,
        }
    }

    /// Create a recorder that stops after `limit` values.
    pub fn with_limit(limit: usize) -> Self {
        Recorder {
            values: Vec::new(),
            limit: Some(limit),
        }
    }

    /// The values accepted so far, in order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Take the recorded values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Sink<T> for Recorder<T> {
    fn can_accept(&mut self) -> bool {
        self.limit.is_none_or(|limit| self.values.len() < limit)
    }

    fn accept(&mut self, value: &T) -> Result<(), SinkError> {
        crate::sink::ensure_can_accept::<T, _>(self)?;
        self.values.push(value.clone());
        Ok(())
    }
}

/// Assert that a sink is exhausted by offering it a value.
///
/// This macro will panic unless `accept` returns [`SinkError::Exhausted`].
///
/// # Example
///
/// ```rust
/// use downstream::{append_to, assert_exhausted, SinkExt};
///
/// let mut out = Vec::new();
/// let mut sink = append_to(&mut out).slice(0, 1);
/// sink.feed([1]).unwrap();
/// assert_exhausted!(sink, 2);
/// ```
#[macro_export]
macro_rules! assert_exhausted {
    ($sink:expr, $value:expr) => {
        match $crate::Sink::accept(&mut $sink, &$value) {
            Err($crate::SinkError::Exhausted) => {}
            other => {
                panic!("Expected exhausted sink, accept returned {:?}", other);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::sink::PageSpec;

#[cfg(feature = "proptest")]
impl Arbitrary for PageSpec {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        strategies::page_specs(1_000, 100).boxed()
    }
}

/// Proptest strategies for sink parameters.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::sink::PageSpec;

    /// Slice bounds in `[-max, max]`, including empty and inverted windows.
    pub fn window_bounds(max: isize) -> impl Strategy<Value = (isize, isize)> {
        (-max..=max, -max..=max)
    }

    /// Valid page descriptors with `page <= max_page` and `1 <= size <= max_size`.
    pub fn page_specs(max_page: isize, max_size: isize) -> impl Strategy<Value = PageSpec> {
        (0..=max_page, 1..=max_size).prop_map(|(page, size)| PageSpec::new(page, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Nil, SinkExt};

    #[test]
    fn feed_counting_counts_offers() {
        let mut recorder = Recorder::with_limit(4);
        assert_eq!(feed_counting(&mut recorder), 4);
        assert_eq!(recorder.values(), &[0, 1, 2, 3]);
    }

    #[test]
    fn feed_counting_exhausted_sink() {
        assert_eq!(feed_counting(&mut Nil), 0);
    }

    #[test]
    fn recorder_without_limit() {
        let mut recorder = Recorder::new();
        recorder.feed(0..100).unwrap();
        assert!(recorder.can_accept());
        assert_eq!(recorder.into_values().len(), 100);
    }

    #[test]
    fn recorder_rejects_past_limit() {
        let mut recorder: Recorder<i32> = Recorder::with_limit(1);
        recorder.accept(&1).unwrap();
        assert_eq!(recorder.accept(&2), Err(SinkError::Exhausted));
        assert_eq!(recorder.values(), &[1]);
    }

    #[test]
    fn assert_exhausted_macro() {
        let mut nil = Nil;
        assert_exhausted!(nil, 1);
    }

    #[test]
    #[should_panic(expected = "Expected exhausted sink")]
    fn assert_exhausted_panics_on_open_sink() {
        let mut recorder: Recorder<i32> = Recorder::new();
        assert_exhausted!(recorder, 1);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;

        proptest! {
            #[test]
            fn arbitrary_page_specs_are_valid(spec in any::<PageSpec>()) {
                prop_assert!(spec.bounds().is_ok());
            }

            #[test]
            fn window_bounds_stay_in_range((start, end) in strategies::window_bounds(50)) {
                prop_assert!((-50..=50).contains(&start));
                prop_assert!((-50..=50).contains(&end));
            }
        }
    }
}
