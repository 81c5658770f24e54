//! Growable ordered sequences that terminal sinks write into.
//!
//! Terminal sinks never touch memory layout directly. Everything they need
//! from the caller's output collection goes through [`Buffer`], which is
//! implemented for [`Vec`] and [`VecDeque`].
//!
//! # Example
//!
//! ```rust
//! use downstream::Buffer;
//!
//! let mut values = vec![1, 2, 3];
//! Buffer::resize_with(&mut values, 5, Default::default);
//! assert_eq!(values, vec![1, 2, 3, 0, 0]);
//! Buffer::truncate(&mut values, 2);
//! assert_eq!(values, vec![1, 2]);
//! ```

use std::collections::{TryReserveError, VecDeque};

/// A growable ordered sequence owned by the caller.
pub trait Buffer {
    /// The element type.
    type Item;

    /// Number of elements currently exposed.
    fn len(&self) -> usize;

    /// Returns true if no elements are exposed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements the sequence can hold without reallocating.
    fn capacity(&self) -> usize;

    /// Reserve room for at least `additional` more elements.
    fn reserve(&mut self, additional: usize);

    /// Reserve room for at least `additional` more elements, reporting
    /// allocation failure instead of aborting.
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError>;

    /// Append one element.
    fn push(&mut self, item: Self::Item);

    /// Shorten to `len` elements. No-op if already shorter.
    fn truncate(&mut self, len: usize);

    /// Set the length to `len`, keeping existing elements up to the overlap
    /// and filling new slots from `f`.
    fn resize_with<F: FnMut() -> Self::Item>(&mut self, len: usize, f: F);

    /// Mutable access to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Remove every element, keeping the allocation.
    fn clear(&mut self) {
        self.truncate(0);
    }

    /// Grow the allocation so that `capacity() >= capacity`.
    fn ensure_capacity(&mut self, capacity: usize) {
        let len = self.len();
        if self.capacity() < capacity {
            self.reserve(capacity - len);
        }
    }

    /// Like [`ensure_capacity`](Buffer::ensure_capacity), but reports
    /// allocation failure instead of aborting.
    fn try_ensure_capacity(&mut self, capacity: usize) -> Result<(), TryReserveError> {
        let len = self.len();
        if self.capacity() < capacity {
            self.try_reserve(capacity - len)?;
        }
        Ok(())
    }
}

impl<T> Buffer for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional)
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        Vec::try_reserve(self, additional)
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }

    fn resize_with<F: FnMut() -> T>(&mut self, len: usize, f: F) {
        Vec::resize_with(self, len, f)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
}

impl<T> Buffer for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn capacity(&self) -> usize {
        VecDeque::capacity(self)
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional)
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        VecDeque::try_reserve(self, additional)
    }

    fn push(&mut self, item: T) {
        self.push_back(item)
    }

    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len)
    }

    fn resize_with<F: FnMut() -> T>(&mut self, len: usize, f: F) {
        VecDeque::resize_with(self, len, f)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_capacity_grows_only_when_needed() {
        let mut values: Vec<i32> = Vec::with_capacity(10);
        values.push(1);
        values.ensure_capacity(4);
        assert!(Buffer::capacity(&values) >= 10);

        values.ensure_capacity(32);
        assert!(Buffer::capacity(&values) >= 32);
        assert_eq!(values, vec![1]);
    }

    #[test]
    fn test_try_ensure_capacity_reports_overflow() {
        let mut values: Vec<u64> = vec![1, 2];
        assert!(values.try_ensure_capacity(usize::MAX).is_err());
        assert_eq!(values, vec![1, 2]);

        let mut deque: VecDeque<u64> = VecDeque::new();
        assert!(deque.try_ensure_capacity(usize::MAX).is_err());
        assert!(deque.try_ensure_capacity(16).is_ok());
        assert!(Buffer::capacity(&deque) >= 16);
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut values = vec![1, 2, 3];
        let cap = values.capacity();
        Buffer::clear(&mut values);
        assert!(Buffer::is_empty(&values));
        assert_eq!(values.capacity(), cap);
    }

    #[test]
    fn test_vec_deque() {
        let mut values: VecDeque<String> = VecDeque::new();
        Buffer::push(&mut values, "a".to_string());
        Buffer::resize_with(&mut values, 3, String::new);
        if let Some(slot) = Buffer::get_mut(&mut values, 2) {
            slot.push('c');
        }
        assert_eq!(values, ["a", "", "c"]);
        Buffer::truncate(&mut values, 1);
        assert_eq!(Buffer::len(&values), 1);
    }
}
