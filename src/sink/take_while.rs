//! Sink that stops at the first value its chain drops.

use crate::chain::MapFilterer;
use crate::error::SinkError;
use crate::sink::{ensure_can_accept, FinalizeSink, Sink};

/// Forwards values through a chain until the chain drops one, then stops for
/// good.
///
/// Values that pass the chain are forwarded as the chain's output, so a
/// mapper in the chain transforms what the inner sink sees. The value that
/// the chain drops is not forwarded, and from then on `can_accept` is false
/// even if the inner sink could take more.
///
/// Created by [`SinkExt::take_while`](crate::SinkExt::take_while).
#[derive(Debug, Clone)]
pub struct TakeWhile<S, C> {
    inner: S,
    chain: C,
    done: bool,
}

impl<S, C> TakeWhile<S, C> {
    /// Wrap `inner` so it stops at the first value `chain` drops.
    pub fn new(inner: S, chain: C) -> Self {
        TakeWhile {
            inner,
            chain,
            done: false,
        }
    }

    /// Returns true once the chain has dropped a value.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T: ?Sized, S, C> Sink<T> for TakeWhile<S, C>
where
    C: MapFilterer<T>,
    S: Sink<C::Output>,
{
    fn can_accept(&mut self) -> bool {
        !self.done && self.inner.can_accept()
    }

    fn accept(&mut self, value: &T) -> Result<(), SinkError> {
        ensure_can_accept::<T, _>(self)?;
        match self.chain.map_filter(value) {
            Some(current) => self.inner.accept(current),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("take-while chain dropped a value, stopping");
                self.done = true;
                Ok(())
            }
        }
    }
}

impl<T: ?Sized, S, C> FinalizeSink<T> for TakeWhile<S, C>
where
    C: MapFilterer<T>,
    S: FinalizeSink<C::Output>,
{
    fn finalize(&mut self) {
        self.inner.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{chain, filter, ChainExt};
    use crate::sink::{append_to, Page, SinkExt};
    use crate::testing::feed_counting;

    #[test]
    fn test_take_while_stops_at_first_failure() {
        let mut kept = Vec::new();
        let mut sink = append_to(&mut kept).take_while(filter(|n: &i32| *n < 5));
        assert_eq!(feed_counting(&mut sink), 6);
        assert!(sink.is_done());
        assert!(!sink.can_accept());
        assert_eq!(sink.accept(&1), Err(SinkError::Exhausted));
        assert_eq!(kept, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_take_while_under_map() {
        let mut kept = Vec::new();
        let sink = append_to(&mut kept).take_while(filter(|n: &i32| *n < 50));
        let mut sink = sink.map_filter(chain().map(|n: &i32, out: &mut i32| {
            *out = n * 10;
            true
        }));
        feed_counting(&mut sink);
        assert_eq!(kept, vec![0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_take_while_inner_finishes_first() {
        let mut kept = Vec::new();
        let mut sink = append_to(&mut kept)
            .slice(0, 3)
            .take_while(filter(|n: &i32| *n < 10));
        assert_eq!(feed_counting(&mut sink), 3);
        assert!(!sink.is_done());
        assert_eq!(kept, vec![0, 1, 2]);
    }

    #[test]
    fn test_take_while_forwards_mapped_values() {
        let mut kept: Vec<String> = Vec::new();
        let mut sink = append_to(&mut kept).take_while(chain().map(|n: &i32, out: &mut String| {
            *out = format!("#{}", n);
            *n != 3
        }));
        feed_counting(&mut sink);
        assert_eq!(kept, vec!["#0", "#1", "#2"]);
    }

    #[test]
    fn test_take_while_finalizes_inner_page() {
        let mut items: Vec<i32> = Vec::new();
        let mut page = Page::new(0, 3, &mut items).unwrap();
        {
            let mut sink = (&mut page).take_while(filter(|n: &i32| *n < 2));
            assert_eq!(feed_counting(&mut sink), 3);
            sink.finalize();
            assert!(!sink.can_accept());
            assert_eq!(sink.accept(&0), Err(SinkError::Exhausted));
        }
        assert_eq!(page.has_more_pages(), Some(false));
        assert_eq!(items, vec![0, 1]);
    }
}
