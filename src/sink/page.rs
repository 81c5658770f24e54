//! Pagination sink: collect one page of a sequence and detect whether more
//! pages follow.

use std::ops::Range;

use crate::buffer::Buffer;
use crate::error::SinkError;
use crate::sink::{AmortizedAppend, FinalizeSink, Sink, Slice};

/// Default number of items per page for [`PageSpec::default`].
pub const DEFAULT_PAGE_SIZE: isize = 20;

/// Most slots reserved up front; larger pages grow as items arrive.
const MAX_RESERVED_SLOTS: usize = 1024;

/// Which page to fetch: a zero-based page number and a page size.
///
/// Fields are signed so that descriptors taken from untrusted input (query
/// strings, JSON bodies) can be rejected with a clear error instead of
/// wrapping around.
///
/// # Example
///
/// ```rust
/// use downstream::PageSpec;
///
/// assert_eq!(PageSpec::new(2, 5).bounds(), Ok(10..16));
/// assert!(PageSpec::new(-1, 5).bounds().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageSpec {
    /// Zero-based page number.
    pub page: isize,
    /// Items per page.
    pub size: isize,
}

impl PageSpec {
    /// Describe page `page` with `size` items per page.
    pub fn new(page: isize, size: isize) -> Self {
        PageSpec { page, size }
    }

    /// The window of offered indexes this page reads, including the lookahead slot.
    ///
    /// Page `p` of size `n` covers `[p * n, p * n + n + 1)`. The last index is
    /// the lookahead slot: it is only there to find out whether another page exists.
    pub fn bounds(&self) -> Result<Range<usize>, SinkError> {
        let (page, size) = self.checked()?;
        let out_of_range = SinkError::PageOutOfRange { page, size };
        let start = page.checked_mul(size).ok_or(out_of_range)?;
        let end = start
            .checked_add(size)
            .and_then(|end| end.checked_add(1))
            .ok_or(out_of_range)?;
        Ok(start..end)
    }

    fn checked(&self) -> Result<(usize, usize), SinkError> {
        let page = usize::try_from(self.page).map_err(|_| SinkError::InvalidPageNumber(self.page))?;
        let size = match usize::try_from(self.size) {
            Ok(size) if size > 0 => size,
            _ => return Err(SinkError::InvalidPageSize(self.size)),
        };
        Ok((page, size))
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        PageSpec::new(0, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageState {
    Accepting,
    Finalized { has_more_pages: bool },
}

/// Collects one page of a sequence into a buffer.
///
/// The buffer is cleared on construction. The page reads one item past its
/// end, the lookahead slot, to learn whether another page follows. Both the buffer
/// contents and [`has_more_pages`](Page::has_more_pages) are only meaningful
/// after [`finalize`](FinalizeSink::finalize), which removes the lookahead item
/// if one was collected.
///
/// # Example
///
/// ```rust
/// use downstream::{FinalizeSink, Page, SinkExt};
///
/// let mut items = Vec::new();
/// let mut page = Page::new(3, 5, &mut items).unwrap();
/// page.feed(0..).unwrap();
/// page.finalize();
/// assert_eq!(page.has_more_pages(), Some(true));
/// assert_eq!(items, vec![15, 16, 17, 18, 19]);
/// ```
#[derive(Debug)]
pub struct Page<'a, B> {
    sink: Slice<AmortizedAppend<'a, B>>,
    spec: PageSpec,
    size: usize,
    state: PageState,
}

impl<'a, B> Page<'a, B>
where
    B: Buffer,
    B::Item: Default,
{
    /// Collect page `page` of `size` items into `buffer`.
    ///
    /// Fails if `page` is negative, `size` is not positive, the page lies
    /// beyond `usize::MAX`, or the buffer can't be allocated. On failure the
    /// buffer is left as it was.
    pub fn new(page: isize, size: isize, buffer: &'a mut B) -> Result<Self, SinkError> {
        Self::from_spec(PageSpec::new(page, size), buffer)
    }

    /// Collect the page `spec` describes into `buffer`.
    pub fn from_spec(spec: PageSpec, buffer: &'a mut B) -> Result<Self, SinkError> {
        let window = spec.bounds()?;
        let size = window.len() - 1;
        buffer
            .try_ensure_capacity(window.len().min(MAX_RESERVED_SLOTS))
            .map_err(|_| SinkError::PageOutOfRange {
                page: window.start / size,
                size,
            })?;
        buffer.clear();
        Ok(Page {
            sink: Slice::with_range(AmortizedAppend::new(buffer), window),
            spec,
            size,
            state: PageState::Accepting,
        })
    }
}

impl<B> Page<'_, B> {
    /// The page this sink collects.
    pub fn spec(&self) -> PageSpec {
        self.spec
    }

    /// Whether another page follows this one, once finalized.
    ///
    /// Returns `None` until [`finalize`](FinalizeSink::finalize) has been called.
    pub fn has_more_pages(&self) -> Option<bool> {
        match self.state {
            PageState::Accepting => None,
            PageState::Finalized { has_more_pages } => Some(has_more_pages),
        }
    }

    /// The collected page, once finalized.
    pub fn items(&self) -> Option<&B> {
        match self.state {
            PageState::Accepting => None,
            PageState::Finalized { .. } => Some(self.sink.inner().buffer()),
        }
    }

    /// Returns true once [`finalize`](FinalizeSink::finalize) has run.
    pub fn is_finalized(&self) -> bool {
        matches!(self.state, PageState::Finalized { .. })
    }
}

impl<B> Sink<B::Item> for Page<'_, B>
where
    B: Buffer,
    B::Item: Clone + Default,
{
    fn can_accept(&mut self) -> bool {
        match self.state {
            PageState::Accepting => self.sink.can_accept(),
            PageState::Finalized { .. } => false,
        }
    }

    fn accept(&mut self, value: &B::Item) -> Result<(), SinkError> {
        match self.state {
            PageState::Accepting => self.sink.accept(value),
            PageState::Finalized { .. } => Err(SinkError::Exhausted),
        }
    }
}

impl<B> FinalizeSink<B::Item> for Page<'_, B>
where
    B: Buffer,
    B::Item: Clone + Default,
{
    fn finalize(&mut self) {
        if self.is_finalized() {
            return;
        }
        let append = self.sink.inner_mut();
        append.finalize();
        let buffer = append.buffer_mut();
        let has_more_pages = buffer.len() == self.size + 1;
        if has_more_pages {
            buffer.truncate(self.size);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            page = self.spec.page,
            size = self.size,
            items = buffer.len(),
            has_more_pages,
            "page finalized"
        );
        self.state = PageState::Finalized { has_more_pages };
    }
}
