//! Sequencing of steps into flat chains.
//!
//! Chains are kept as a right-leaning list of [`Then`] nodes ending in a
//! single step. [`Concat`] splices one chain onto another so that appending
//! never nests a chain inside a chain:
//!
//! - appending to the identity chain yields the appended chain itself
//! - appending the identity chain yields the receiver unchanged
//! - appending to a `Then` pushes the new steps down to its last step

use crate::chain::{Chain, Filter, Identity, MapFilterer, Mapper};

/// A step followed by the rest of a chain.
///
/// Only built through [`Concat`], which keeps the sequence flat.
#[derive(Clone, Debug)]
pub struct Then<A, B>(A, B);

impl<A: Chain, B: Chain> Chain for Then<A, B> {
    fn len(&self) -> usize {
        self.0.len() + self.1.len()
    }
}

impl<T: ?Sized, A, B> MapFilterer<T> for Then<A, B>
where
    A: MapFilterer<T>,
    B: MapFilterer<A::Output>,
{
    type Output = B::Output;

    #[inline]
    fn map_filter<'a>(&'a mut self, value: &'a T) -> Option<&'a B::Output> {
        let Then(first, rest) = self;
        let current = first.map_filter(value)?;
        rest.map_filter(current)
    }
}

/// Splice `Next` onto the end of a chain.
pub trait Concat<Next> {
    /// The flattened chain.
    type Output: Chain;

    /// Append `next` after the steps of `self`.
    fn concat(self, next: Next) -> Self::Output;
}

impl<Next: Chain> Concat<Next> for Identity {
    type Output = Next;

    fn concat(self, next: Next) -> Next {
        next
    }
}

impl<A: Chain, B, Next> Concat<Next> for Then<A, B>
where
    B: Concat<Next>,
{
    type Output = Then<A, B::Output>;

    fn concat(self, next: Next) -> Self::Output {
        Then(self.0, self.1.concat(next))
    }
}

macro_rules! impl_concat_for_step {
    ($step:ident<$($param:ident),+>) => {
        impl<$($param),+> Concat<Identity> for $step<$($param),+> {
            type Output = Self;

            fn concat(self, _: Identity) -> Self {
                self
            }
        }

        impl<$($param,)+ G> Concat<Filter<G>> for $step<$($param),+> {
            type Output = Then<Self, Filter<G>>;

            fn concat(self, next: Filter<G>) -> Self::Output {
                Then(self, next)
            }
        }

        impl<$($param,)+ G, V> Concat<Mapper<G, V>> for $step<$($param),+> {
            type Output = Then<Self, Mapper<G, V>>;

            fn concat(self, next: Mapper<G, V>) -> Self::Output {
                Then(self, next)
            }
        }

        impl<$($param,)+ C: Chain, D: Chain> Concat<Then<C, D>> for $step<$($param),+> {
            type Output = Then<Self, Then<C, D>>;

            fn concat(self, next: Then<C, D>) -> Self::Output {
                Then(self, next)
            }
        }
    };
}

impl_concat_for_step!(Filter<F>);
impl_concat_for_step!(Mapper<F, U>);

/// Builder methods for extending chains.
///
/// Implemented for every chain. Each method returns the flattened chain, so
/// `chain().filter(f).then(chain().map(g))` has the same steps as
/// `chain().filter(f).map(g)`.
///
/// # Example
///
/// ```rust
/// use downstream::chain::*;
///
/// let even = chain().filter(|n: &i32| n % 2 == 0);
/// let mut even_squares = even.clone().map(|n: &i32, out: &mut i32| {
///     *out = n * n;
///     true
/// });
///
/// assert_eq!(even_squares.len(), 2);
/// assert_eq!(even_squares.map_filter(&6), Some(&36));
/// assert_eq!(even_squares.map_filter(&7), None);
/// ```
pub trait ChainExt: Chain + Sized {
    /// Append another chain, splicing in its steps.
    fn then<Next>(self, next: Next) -> <Self as Concat<Next>>::Output
    where
        Self: Concat<Next>,
    {
        self.concat(next)
    }

    /// Append a filter step.
    fn filter<T: ?Sized, F>(self, predicate: F) -> <Self as Concat<Filter<F>>>::Output
    where
        F: Fn(&T) -> bool,
        Self: Concat<Filter<F>>,
    {
        self.concat(Filter::new(predicate))
    }

    /// Append a mapper step with a default-initialized scratch cell.
    fn map<T: ?Sized, U: Default, F>(self, f: F) -> <Self as Concat<Mapper<F, U>>>::Output
    where
        F: Fn(&T, &mut U) -> bool,
        Self: Concat<Mapper<F, U>>,
    {
        self.concat(Mapper::new(f))
    }
}

impl<C: Chain> ChainExt for C {}
