//! # Downstream
//!
//! Push-based sinks for consuming sequences one value at a time.
//!
//! A producer offers values to a [`Sink`] one by one and asks
//! [`can_accept`](Sink::can_accept) before each. Sinks can be windowed,
//! filtered, mapped, cut short, fanned out and paginated, and the producer
//! stops as soon as nothing downstream wants more.
//!
//! ## Quick Example
//!
//! ```rust
//! use downstream::chain::*;
//! use downstream::{append_to, FinalizeSink, Page, SinkExt};
//!
//! // Second page of the even numbers, rendered as text.
//! let mut page_items: Vec<String> = Vec::new();
//! let mut page = Page::new(1, 3, &mut page_items).unwrap();
//! let mut sink = (&mut page).map_filter(
//!     chain()
//!         .filter(|n: &i32| n % 2 == 0)
//!         .map(|n: &i32, text: &mut String| {
//!             *text = n.to_string();
//!             true
//!         }),
//! );
//! sink.feed(0..).unwrap();
//! sink.finalize();
//!
//! assert_eq!(page.has_more_pages(), Some(true));
//! assert_eq!(page_items, vec!["6", "8", "10"]);
//! ```
//!
//! ## Modules
//!
//! - [`sink`]: the [`Sink`] trait and every sink and combinator
//! - [`chain`]: map/filter chains used by [`SinkExt::map_filter`] and [`SinkExt::take_while`]
//! - [`buffer`]: the growable sequences terminal sinks append to
//! - [`stream`]: driving a sink from an async stream
//! - [`testing`]: helpers for testing sinks

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod buffer;
pub mod chain;
pub mod error;
pub mod sink;
pub mod stream;
pub mod testing;

// Re-exports
pub use buffer::Buffer;
pub use error::SinkError;
pub use sink::{
    append_boxed_to, append_to, compose, ensure_can_accept, sink_fn, AmortizedAppend,
    AppendBoxedTo, AppendTo, BoxedSink, Compose, FinalizeSink, MapFilter, Nil, Page, PageSpec,
    Sink, SinkExt, SinkFn, Slice, TakeWhile,
};
pub use stream::feed_stream;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::chain::{chain, filter, mapper, Chain, ChainExt, MapFilterer};
    pub use crate::error::SinkError;
    pub use crate::sink::{
        append_boxed_to, append_to, compose, sink_fn, AmortizedAppend, BoxedSink, FinalizeSink,
        Nil, Page, PageSpec, Sink, SinkExt,
    };
    pub use crate::stream::feed_stream;
}
