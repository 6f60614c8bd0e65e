#[cfg(test)]
mod tests;

use alloc::{collections::TryReserveError, vec::Vec};
use core::mem;

/// Contiguous stack storage backed by `alloc::vec::Vec`.
///
/// The tracked `limit` is the logical capacity of the stack and is kept
/// separate from the `Vec`'s own capacity so that growth remains an explicit,
/// fallible operation rather than an implicit side effect of `push`.
pub struct VecStackStorage<T> {
  data:  Vec<T>,
  limit: usize,
}

impl<T> VecStackStorage<T> {
  /// Creates a storage buffer with the provided capacity limit.
  ///
  /// # Errors
  ///
  /// Returns the allocator's [`TryReserveError`] when the backing buffer
  /// cannot be obtained.
  pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)?;
    Ok(Self { data, limit: capacity })
  }

  /// Returns the number of initialized elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Returns whether the storage currently holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Returns the configured capacity limit.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.limit
  }

  /// Returns whether every slot up to the limit is occupied.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.data.len() == self.limit
  }

  /// Pushes an element onto the end of the storage without additional checks.
  pub fn push(&mut self, value: T) {
    debug_assert!(self.len() < self.limit);
    self.data.push(value);
  }

  /// Pops the last element from storage.
  pub fn pop(&mut self) -> Option<T> {
    self.data.pop()
  }

  /// Returns a reference to the last element if it exists.
  pub fn peek(&self) -> Option<&T> {
    self.data.last()
  }

  /// Attempts to grow the capacity limit to `new_capacity`.
  ///
  /// Non-increasing targets are a no-op. On failure the existing elements and
  /// the current limit are left untouched.
  ///
  /// # Errors
  ///
  /// Returns the allocator's [`TryReserveError`] when the larger buffer
  /// cannot be obtained.
  pub fn try_grow(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
    if new_capacity <= self.limit {
      return Ok(());
    }
    let additional = new_capacity - self.data.len();
    self.data.try_reserve(additional)?;
    self.limit = new_capacity;
    Ok(())
  }

  /// Occupied slots in push order, bottom of the stack first.
  pub(crate) fn as_slice(&self) -> &[T] {
    &self.data
  }

  /// Takes every stored element out, leaving the storage empty.
  pub(crate) fn take_items(&mut self) -> Vec<T> {
    mem::take(&mut self.data)
  }
}
