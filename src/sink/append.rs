//! Terminal sinks that collect values into a caller-owned [`Buffer`].

use crate::buffer::Buffer;
use crate::error::SinkError;
use crate::sink::{FinalizeSink, Sink};

/// Fewest slots [`AmortizedAppend`] exposes.
const MIN_SLOTS: usize = 4;

/// Appends a clone of every accepted value to a buffer.
///
/// Always accepts. Growth is left to the buffer, one element at a time.
#[derive(Debug)]
pub struct AppendTo<'a, B> {
    buffer: &'a mut B,
}

impl<'a, B: Buffer> AppendTo<'a, B> {
    /// Append to `buffer`, after anything already in it.
    pub fn new(buffer: &'a mut B) -> Self {
        AppendTo { buffer }
    }
}

impl<B> Sink<B::Item> for AppendTo<'_, B>
where
    B: Buffer,
    B::Item: Clone,
{
    fn can_accept(&mut self) -> bool {
        true
    }

    fn accept(&mut self, value: &B::Item) -> Result<(), SinkError> {
        self.buffer.push(value.clone());
        Ok(())
    }
}

/// Create a sink that appends clones of accepted values to `buffer`.
///
/// # Example
///
/// ```rust
/// use downstream::{append_to, SinkExt};
///
/// let mut words = vec!["existing".to_string()];
/// append_to(&mut words).feed(["a", "b"].map(String::from)).unwrap();
/// assert_eq!(words, vec!["existing", "a", "b"]);
/// ```
pub fn append_to<B: Buffer>(buffer: &mut B) -> AppendTo<'_, B> {
    AppendTo::new(buffer)
}

/// Appends every accepted value to a buffer of boxes, one allocation each.
#[derive(Debug)]
pub struct AppendBoxedTo<'a, B> {
    buffer: &'a mut B,
}

impl<'a, B: Buffer> AppendBoxedTo<'a, B> {
    /// Append boxed copies to `buffer`, after anything already in it.
    pub fn new(buffer: &'a mut B) -> Self {
        AppendBoxedTo { buffer }
    }
}

impl<T, B> Sink<T> for AppendBoxedTo<'_, B>
where
    T: Clone,
    B: Buffer<Item = Box<T>>,
{
    fn can_accept(&mut self) -> bool {
        true
    }

    fn accept(&mut self, value: &T) -> Result<(), SinkError> {
        self.buffer.push(Box::new(value.clone()));
        Ok(())
    }
}

/// Create a sink that boxes a copy of each accepted value and appends the box.
///
/// # Example
///
/// ```rust
/// use downstream::{append_boxed_to, SinkExt};
///
/// let mut boxes: Vec<Box<i32>> = Vec::new();
/// append_boxed_to(&mut boxes).feed([1, 2]).unwrap();
/// assert_eq!(boxes, vec![Box::new(1), Box::new(2)]);
/// ```
pub fn append_boxed_to<B: Buffer>(buffer: &mut B) -> AppendBoxedTo<'_, B> {
    AppendBoxedTo::new(buffer)
}

/// Appends to a buffer, growing it by doubling rather than one slot at a time.
///
/// On construction the buffer grows to at least `max(4, 2 * len)` slots if
/// needed, and all of its capacity is exposed as writable slots filled with
/// `Default` values. Each accepted value is cloned into the next
/// unused slot, reusing whatever the slot already owns. When the slots run
/// out the buffer doubles again.
///
/// The buffer is over-long until [`finalize`](FinalizeSink::finalize), which
/// truncates it to the values actually written. Values already in the buffer
/// before construction are kept.
///
/// # Example
///
/// ```rust
/// use downstream::{AmortizedAppend, FinalizeSink, SinkExt};
///
/// let mut values = vec![0];
/// let mut sink = AmortizedAppend::new(&mut values);
/// sink.feed([1, 2, 3, 4, 5]).unwrap();
/// sink.finalize();
/// assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
/// ```
#[derive(Debug)]
pub struct AmortizedAppend<'a, B> {
    buffer: &'a mut B,
    len: usize,
    finalized: bool,
}

impl<'a, B> AmortizedAppend<'a, B>
where
    B: Buffer,
    B::Item: Default,
{
    /// Wrap `buffer`, exposing spare or doubled capacity as slots.
    pub fn new(buffer: &'a mut B) -> Self {
        let len = buffer.len();
        let mut sink = AmortizedAppend {
            buffer,
            len,
            finalized: false,
        };
        sink.expose_slots();
        sink
    }

    fn expose_slots(&mut self) {
        let slots = self.buffer.len();
        let target = MIN_SLOTS.max(slots.saturating_mul(2));
        if self.buffer.capacity() < target {
            #[cfg(feature = "tracing")]
            tracing::trace!(from = slots, to = target, "growing append buffer");
            self.buffer.ensure_capacity(target);
        }
        // zero-sized items report unbounded capacity
        let exposed = if size_of::<B::Item>() == 0 {
            target
        } else {
            self.buffer.capacity().max(target)
        };
        self.buffer.resize_with(exposed, Default::default);
    }
}

impl<'a, B> AmortizedAppend<'a, B> {
    /// Number of values in the buffer that are real, as opposed to spare slots.
    pub fn logical_len(&self) -> usize {
        self.len
    }

    /// Returns true once [`finalize`](FinalizeSink::finalize) has run.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// The underlying buffer, including unused slots before finalize.
    pub fn buffer(&self) -> &B {
        &*self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut B {
        &mut *self.buffer
    }
}

impl<B> Sink<B::Item> for AmortizedAppend<'_, B>
where
    B: Buffer,
    B::Item: Clone + Default,
{
    fn can_accept(&mut self) -> bool {
        !self.finalized
    }

    fn accept(&mut self, value: &B::Item) -> Result<(), SinkError> {
        if self.finalized {
            return Err(SinkError::Exhausted);
        }
        if self.len == self.buffer.len() {
            self.expose_slots();
        }
        match self.buffer.get_mut(self.len) {
            Some(slot) => slot.clone_from(value),
            None => self.buffer.push(value.clone()),
        }
        self.len += 1;
        Ok(())
    }
}

impl<B> FinalizeSink<B::Item> for AmortizedAppend<'_, B>
where
    B: Buffer,
    B::Item: Clone + Default,
{
    fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;
        self.buffer.truncate(self.len);
    }
}
