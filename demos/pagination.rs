//! Demonstrates paging through a filtered listing with tracing enabled
//!
//! Run with: cargo run --example pagination --features tracing

use downstream::chain::{chain, ChainExt};
use downstream::{FinalizeSink, Page, PageSpec, SinkError, SinkExt};

#[derive(Clone, Debug, Default)]
struct Book {
    title: String,
    year: u16,
}

fn catalogue() -> Vec<Book> {
    (0..47)
        .map(|n| Book {
            title: format!("Volume {}", n + 1),
            year: 1990 + (n * 7 % 35) as u16,
        })
        .collect()
}

fn list_page(books: &[Book], spec: PageSpec, out: &mut Vec<String>) -> Result<bool, SinkError> {
    let mut page = Page::from_spec(spec, out)?;
    let mut sink = (&mut page).map_filter(
        chain()
            .filter(|book: &Book| book.year >= 2000)
            .map(|book: &Book, line: &mut String| {
                line.clear();
                line.push_str(&book.title);
                line.push_str(" (");
                line.push_str(&book.year.to_string());
                line.push(')');
                true
            }),
    );
    sink.feed(books)?;
    sink.finalize();
    Ok(page.has_more_pages() == Some(true))
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let books = catalogue();
    let mut lines = Vec::new();
    let mut spec = PageSpec {
        size: 8,
        ..PageSpec::default()
    };

    loop {
        match list_page(&books, spec, &mut lines) {
            Ok(more) => {
                tracing::info!(page = spec.page, count = lines.len(), "listed page");
                for line in &lines {
                    println!("  {}", line);
                }
                if !more {
                    break;
                }
                spec.page += 1;
            }
            Err(e) => {
                tracing::error!("listing failed: {}", e);
                break;
            }
        }
    }

    match list_page(&books, PageSpec::new(0, 0), &mut lines) {
        Ok(_) => tracing::warn!("zero-sized page was accepted"),
        Err(e) => tracing::info!("rejected as expected: {}", e),
    }
}
