//! Push-based sinks for single-pass consumption of values.
//!
//! A sink receives values one at a time. The caller asks
//! [`can_accept`](Sink::can_accept) before each value and stops once it is
//! false, so a sink that only wants a handful of values can end a long or
//! expensive iteration early.
//!
//! # Overview
//!
//! Terminal sinks store values:
//!
//! - [`append_to`] and [`append_boxed_to`] append to a caller-owned buffer
//! - [`AmortizedAppend`] appends with doubling growth and needs finalizing
//! - [`Page`] collects one page of a sequence and reports if more follow
//! - [`sink_fn`] hands each value to a callback
//! - [`Nil`] accepts nothing
//!
//! Wrapping sinks shape the stream on its way through:
//!
//! - [`SinkExt::slice`] forwards a window of offered values
//! - [`SinkExt::map_filter`] applies a [`chain`](crate::chain)
//! - [`SinkExt::take_while`] stops at the first value a chain drops
//! - [`compose`] fans every value out to several sinks
//!
//! # Example
//!
//! ```rust
//! use downstream::chain::filter;
//! use downstream::{append_to, compose, FinalizeSink, Page, SinkExt};
//!
//! let mut first_page = Vec::new();
//! let mut multiples_of_seven = Vec::new();
//! let mut page = Page::new(0, 3, &mut first_page).unwrap();
//! {
//!     let mut both = compose::<i32>(vec![
//!         (&mut page).boxed(),
//!         append_to(&mut multiples_of_seven)
//!             .map_filter(filter(|n: &i32| n % 7 == 0))
//!             .slice(0, 20)
//!             .boxed(),
//!     ]);
//!     both.feed(0..).unwrap();
//! }
//! page.finalize();
//! assert_eq!(page.has_more_pages(), Some(true));
//! assert_eq!(first_page, vec![0, 1, 2]);
//! assert_eq!(multiples_of_seven, vec![0, 7, 14]);
//! ```

mod append;
mod basic;
mod boxed;
mod compose;
mod ext;
mod map_filter;
mod page;
mod slice;
mod take_while;
mod trait_def;


pub use append::{append_boxed_to, append_to, AmortizedAppend, AppendBoxedTo, AppendTo};
pub use basic::{sink_fn, Nil, SinkFn};
pub use boxed::BoxedSink;
pub use compose::{compose, Compose};
pub use ext::SinkExt;
pub use map_filter::MapFilter;
pub use page::{Page, PageSpec, DEFAULT_PAGE_SIZE};
pub use slice::Slice;
pub use take_while::TakeWhile;
pub use trait_def::{ensure_can_accept, FinalizeSink, Sink};
