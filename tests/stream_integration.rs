//! Integration tests for feeding sinks from async streams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use downstream::chain::mapper;
use downstream::{append_to, compose, feed_stream, FinalizeSink, Page, Sink, SinkError, SinkExt};
use futures::stream::{self, StreamExt};
use tokio::sync::mpsc;

#[tokio::test]
async fn channel_producer_stops_when_page_is_full() {
    let (tx, mut rx) = mpsc::channel::<u32>(4);
    let sent = Arc::new(AtomicUsize::new(0));
    let sent_clone = sent.clone();
    let producer = tokio::spawn(async move {
        for n in 0..1_000 {
            if tx.send(n).await.is_err() {
                break;
            }
            sent_clone.fetch_add(1, Ordering::SeqCst);
        }
    });

    let mut items: Vec<u32> = Vec::new();
    let mut page = Page::new(0, 5, &mut items).unwrap();
    let source = stream::poll_fn(|cx| rx.poll_recv(cx));
    let offered = feed_stream(&mut page, source).await;
    page.finalize();
    drop(rx);
    producer.await.unwrap();

    assert_eq!(offered, Ok(6));
    assert_eq!(page.has_more_pages(), Some(true));
    assert_eq!(items, vec![0, 1, 2, 3, 4]);
    assert!(sent.load(Ordering::SeqCst) < 1_000);
}

#[tokio::test]
async fn slow_stream_into_fan_out() {
    let mut labels: Vec<String> = Vec::new();
    let mut firsts: Vec<u64> = Vec::new();
    {
        let mut sink = compose::<u64>(vec![
            append_to(&mut labels)
                .slice(0, 3)
                .map_filter(mapper(|n: &u64, label: &mut String| {
                    *label = format!("tick-{}", n);
                    true
                }))
                .boxed(),
            append_to(&mut firsts).slice(0, 2).boxed(),
        ]);
        let ticks = stream::iter(0u64..).then(|n| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            n
        });
        assert_eq!(feed_stream(&mut *sink, ticks).await, Ok(3));
    }
    assert_eq!(labels, vec!["tick-0", "tick-1", "tick-2"]);
    assert_eq!(firsts, vec![0, 1]);
}

#[tokio::test]
async fn exhausted_sink_never_polls() {
    let polled = AtomicUsize::new(0);
    let mut out: Vec<i32> = Vec::new();
    let mut sink = append_to(&mut out).slice(0, 0);
    let source = stream::iter(0..10).inspect(|_| {
        polled.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(feed_stream(&mut sink, source).await, Ok(0));
    assert_eq!(polled.load(Ordering::SeqCst), 0);
    assert_eq!(sink.accept(&1), Err(SinkError::Exhausted));
}
