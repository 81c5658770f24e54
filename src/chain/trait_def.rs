//! Core chain traits.

/// A sequence of zero or more map/filter steps.
///
/// `len` is the effective number of steps once nested chains have been
/// spliced together, so it ignores identity chains.
///
/// # Example
///
/// ```rust
/// use downstream::chain::*;
///
/// let evens = chain().filter(|n: &i32| n % 2 == 0);
/// let squares = evens.map(|n: &i32, out: &mut i32| {
///     *out = n * n;
///     true
/// });
/// assert_eq!(squares.len(), 2);
/// assert_eq!(chain().len(), 0);
/// ```
pub trait Chain {
    /// Number of steps in this chain.
    fn len(&self) -> usize;

    /// Returns true for the identity chain.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A chain that can be applied to values of type `T`.
///
/// Applying a chain runs its steps left to right. A filter step either passes
/// the current reference through or drops the value. A mapper step writes
/// into its own scratch cell and, on success, the scratch cell becomes the
/// current value for every following step. The first step that reports false
/// stops the chain and the value is dropped.
///
/// The returned reference borrows the chain mutably, so it cannot outlive the
/// next application. Use [`map_filter_owned`](MapFilterer::map_filter_owned)
/// to keep a result around.
///
/// # Example
///
/// ```rust
/// use downstream::chain::*;
///
/// let mut to_string = chain()
///     .filter(|n: &i32| n % 2 == 0)
///     .map(|n: &i32, out: &mut String| {
///         *out = n.to_string();
///         true
///     });
///
/// assert_eq!(to_string.map_filter(&3), None);
/// assert_eq!(to_string.map_filter(&4).map(String::as_str), Some("4"));
/// ```
pub trait MapFilterer<T: ?Sized>: Chain {
    /// The type of value the chain produces.
    type Output: ?Sized;

    /// Apply the chain to `value`. Returns `None` if the value is dropped.
    fn map_filter<'a>(&'a mut self, value: &'a T) -> Option<&'a Self::Output>;

    /// Apply the chain and copy the result out of any scratch cell.
    fn map_filter_owned(&mut self, value: &T) -> Option<<Self::Output as ToOwned>::Owned>
    where
        Self::Output: ToOwned,
    {
        self.map_filter(value).map(ToOwned::to_owned)
    }
}
