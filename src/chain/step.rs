//! The identity chain and the two kinds of single steps.

use std::fmt;

use crate::chain::{Chain, MapFilterer};

/// The chain with no steps. Every value passes through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Chain for Identity {
    fn len(&self) -> usize {
        0
    }
}

impl<T: ?Sized> MapFilterer<T> for Identity {
    type Output = T;

    #[inline]
    fn map_filter<'a>(&'a mut self, value: &'a T) -> Option<&'a T> {
        Some(value)
    }
}

/// A step that keeps values for which the predicate returns true.
///
/// Filters hold no state, so copies of a filter are interchangeable.
#[derive(Clone, Copy)]
pub struct Filter<F>(F);

impl<F> Filter<F> {
    /// Wrap a predicate.
    pub fn new(predicate: F) -> Self {
        Filter(predicate)
    }
}

impl<F> fmt::Debug for Filter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

impl<F> Chain for Filter<F> {
    fn len(&self) -> usize {
        1
    }
}

impl<T: ?Sized, F> MapFilterer<T> for Filter<F>
where
    F: Fn(&T) -> bool,
{
    type Output = T;

    #[inline]
    fn map_filter<'a>(&'a mut self, value: &'a T) -> Option<&'a T> {
        if (self.0)(value) {
            Some(value)
        } else {
            None
        }
    }
}

/// A step that computes a new value from the current one.
///
/// The mapper function leaves its first argument alone and writes its result
/// into the second, returning false to drop the value. The second argument is
/// a scratch cell owned by this step and reused on every application.
///
/// Cloning a mapper gives the clone a fresh scratch cell, so the two never
/// observe each other's results.
pub struct Mapper<F, U> {
    f: F,
    scratch: U,
}

impl<F, U: Default> Mapper<F, U> {
    /// Wrap a mapper function with a default-initialized scratch cell.
    pub fn new(f: F) -> Self {
        Mapper {
            f,
            scratch: U::default(),
        }
    }
}

impl<F: Clone, U: Default> Clone for Mapper<F, U> {
    fn clone(&self) -> Self {
        Mapper::new(self.f.clone())
    }
}

impl<F, U: fmt::Debug> fmt::Debug for Mapper<F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("scratch", &self.scratch)
            .finish_non_exhaustive()
    }
}

impl<F, U> Chain for Mapper<F, U> {
    fn len(&self) -> usize {
        1
    }
}

impl<T: ?Sized, F, U> MapFilterer<T> for Mapper<F, U>
where
    F: Fn(&T, &mut U) -> bool,
{
    type Output = U;

    #[inline]
    fn map_filter<'a>(&'a mut self, value: &'a T) -> Option<&'a U> {
        if (self.f)(value, &mut self.scratch) {
            Some(&self.scratch)
        } else {
            None
        }
    }
}

/// Create the identity chain, the starting point for building chains.
///
/// # Example
///
/// ```rust
/// use downstream::chain::*;
///
/// let mut id = chain();
/// let value = String::from("unchanged");
/// assert!(std::ptr::eq(MapFilterer::<String>::map_filter(&mut id, &value).unwrap(), &value));
/// ```
pub fn chain() -> Identity {
    Identity
}

/// Create a single filter step.
///
/// # Example
///
/// ```rust
/// use downstream::chain::*;
///
/// let mut sevens = filter(|n: &i32| n % 7 == 0);
/// assert_eq!(sevens.map_filter(&14), Some(&14));
/// assert_eq!(sevens.map_filter(&15), None);
/// ```
pub fn filter<T: ?Sized, F>(predicate: F) -> Filter<F>
where
    F: Fn(&T) -> bool,
{
    Filter::new(predicate)
}

/// Create a single mapper step.
///
/// # Example
///
/// ```rust
/// use downstream::chain::*;
///
/// let mut times_ten = mapper(|n: &i32, out: &mut i32| {
///     *out = n * 10;
///     true
/// });
/// assert_eq!(times_ten.map_filter(&4), Some(&40));
/// ```
pub fn mapper<T: ?Sized, U: Default, F>(f: F) -> Mapper<F, U>
where
    F: Fn(&T, &mut U) -> bool,
{
    Mapper::new(f)
}
