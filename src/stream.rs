//! Driving sinks from asynchronous streams.
//!
//! Sinks are synchronous, but values often arrive from a
//! [`Stream`](futures::Stream). [`feed_stream`] polls the stream only while
//! the sink can accept, so an exhausted sink stops the stream from being
//! polled any further.

use std::borrow::Borrow;

use futures::{Stream, StreamExt};

use crate::error::SinkError;
use crate::sink::Sink;

/// Offer values from `stream` to `sink` until one of them runs out.
///
/// Returns how many values were passed to `accept`. The stream is not polled
/// again once `sink` reports it can't accept.
///
/// # Errors
///
/// Returns the first error an `accept` call reports.
///
/// # Example
///
/// ```rust
/// use downstream::{append_to, feed_stream, SinkExt};
///
/// # tokio_test::block_on(async {
/// let mut firsts = Vec::new();
/// let mut sink = append_to(&mut firsts).slice(0, 3);
/// let offered = feed_stream(&mut sink, futures::stream::iter(10..)).await;
/// assert_eq!(offered, Ok(3));
/// assert_eq!(firsts, vec![10, 11, 12]);
/// # });
/// ```
pub async fn feed_stream<T, S, St>(sink: &mut S, stream: St) -> Result<usize, SinkError>
where
    T: ?Sized,
    S: Sink<T> + ?Sized,
    St: Stream,
    St::Item: Borrow<T>,
{
    let mut stream = std::pin::pin!(stream);
    let mut offered = 0;
    while sink.can_accept() {
        let Some(item) = stream.next().await else {
            break;
        };
        sink.accept(item.borrow())?;
        offered += 1;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(offered, "stream feed finished");
    Ok(offered)
}
