//! Demonstrates fanning one pass over a sequence out to several consumers
//!
//! Run with: cargo run --example fan_out

use downstream::chain::{chain, ChainExt};
use downstream::{append_to, compose, sink_fn, AmortizedAppend, FinalizeSink, SinkExt};

fn main() {
    let mut pulled = 0u64;
    let mut first_ten = Vec::new();
    let mut squares_of_sevens = Vec::new();
    let mut collected = Vec::new();
    let mut all = AmortizedAppend::new(&mut collected);

    {
        let mut sink = compose::<u64>(vec![
            append_to(&mut first_ten).slice(0, 10).boxed(),
            append_to(&mut squares_of_sevens)
                .slice(0, 5)
                .map_filter(chain().filter(|n: &u64| n % 7 == 0).map(
                    |n: &u64, square: &mut u64| {
                        *square = n * n;
                        true
                    },
                ))
                .boxed(),
            (&mut all).slice(0, 30).boxed(),
            sink_fn(|n: &u64| {
                if n % 10 == 0 {
                    println!("reached {}", n);
                }
            })
            .slice(0, 25)
            .boxed(),
        ]);

        // An endless producer: the sinks decide when to stop.
        let offered = sink
            .feed((0u64..).inspect(|_| pulled += 1))
            .unwrap_or_default();
        println!("offered {} values", offered);
    }
    all.finalize();

    println!("pulled from producer: {}", pulled);
    println!("first ten:            {:?}", first_ten);
    println!("squares of sevens:    {:?}", squares_of_sevens);
    println!("collected:            {} values", collected.len());
}
