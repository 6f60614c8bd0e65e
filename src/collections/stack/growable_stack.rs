
use alloc::{format, string::String};

use tracing::{debug, warn};

use super::{PushOutcome, StackError, StackHooks, VecStackStorage};

const LOG_TARGET: &str = "growstack::stack";

/// Growable LIFO stack over owned elements.
///
/// Construction is the only way to obtain a handle and [`destroy`] (or plain
/// `drop`) is the only way out, so operations never observe an absent or
/// already-destroyed stack. Capacity doubles on demand and never shrinks.
///
/// ```
/// use growstack_rs::collections::stack::GrowableStack;
///
/// let mut stack = GrowableStack::new(2)?;
/// stack.push(1)?;
/// stack.push(2)?;
/// assert_eq!(stack.pop()?, 2);
/// # Ok::<(), growstack_rs::collections::stack::StackError<i32>>(())
/// ```
///
/// [`destroy`]: GrowableStack::destroy
pub struct GrowableStack<T> {
  storage: VecStackStorage<T>,
  hooks:   StackHooks<T>,
}

impl<T> GrowableStack<T> {
  /// Creates a stack with the given initial capacity and no hooks.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::ZeroCapacity`] for a zero capacity and
  /// [`StackError::AllocError`] when the backing storage cannot be obtained.
  pub fn new(initial_capacity: usize) -> Result<Self, StackError<T>> {
    Self::with_hooks(initial_capacity, StackHooks::new())
  }

  /// Creates a stack with the given initial capacity and hook set.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::ZeroCapacity`] for a zero capacity and
  /// [`StackError::AllocError`] when the backing storage cannot be obtained.
  pub fn with_hooks(initial_capacity: usize, hooks: StackHooks<T>) -> Result<Self, StackError<T>> {
    if initial_capacity == 0 {
      warn!(target: LOG_TARGET, "capacity must be positive");
      return Err(StackError::ZeroCapacity);
    }
    let storage = match VecStackStorage::try_with_capacity(initial_capacity) {
      | Ok(storage) => storage,
      | Err(_) => {
        warn!(target: LOG_TARGET, capacity = initial_capacity, "failed to allocate backing storage");
        return Err(StackError::AllocError);
      },
    };
    debug!(target: LOG_TARGET, capacity = initial_capacity, "stack created");
    Ok(Self { storage, hooks })
  }

  /// Pushes an element onto the top of the stack, doubling capacity when full.
  ///
  /// Growth must yield a capacity greater than the current length for the
  /// push to proceed. A failed growth leaves the stack unchanged at its
  /// prior capacity and hands the rejected element back inside the error.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::GrowError`] when the backing storage cannot grow.
  pub fn push(&mut self, item: T) -> Result<PushOutcome, StackError<T>> {
    if self.storage.is_full() {
      let new_capacity = self.storage.capacity().saturating_mul(2);
      if new_capacity <= self.storage.len() {
        return Err(StackError::GrowError(item));
      }
      if self.storage.try_grow(new_capacity).is_err() {
        warn!(target: LOG_TARGET, capacity = new_capacity, "failed to grow backing storage");
        return Err(StackError::GrowError(item));
      }
      self.storage.push(item);
      return Ok(PushOutcome::GrewTo { capacity: new_capacity });
    }
    self.storage.push(item);
    Ok(PushOutcome::Pushed)
  }

  /// Pops the most recently pushed element, transferring ownership to the caller.
  ///
  /// Capacity never decreases on pop.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when no elements are stored.
  pub fn pop(&mut self) -> Result<T, StackError<T>> {
    match self.storage.pop() {
      | Some(item) => Ok(item),
      | None => {
        debug!(target: LOG_TARGET, "stack is empty");
        Err(StackError::Empty)
      },
    }
  }

  /// Returns a borrowed view of the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when no elements are stored.
  pub fn peek(&self) -> Result<&T, StackError<T>> {
    match self.storage.peek() {
      | Some(item) => Ok(item),
      | None => {
        debug!(target: LOG_TARGET, "stack is empty");
        Err(StackError::Empty)
      },
    }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.storage.len()
  }

  /// Returns the current capacity of the backing storage.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  /// Indicates whether the stack is full.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.storage.is_full()
  }

  /// Renders the stack top to bottom through the printer hook.
  ///
  /// The output carries size and capacity metadata:
  /// `Stack (Size: 2, Capacity: 4) - TOP -> [b | a] <- BOTTOM`.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::MissingPrinter`] when no printer hook was bound at
  /// construction.
  pub fn render(&self) -> Result<String, StackError<T>> {
    let Some(printer) = self.hooks.printer.as_ref() else {
      debug!(target: LOG_TARGET, "no printer hook installed");
      return Err(StackError::MissingPrinter);
    };
    let mut out = format!("Stack (Size: {}, Capacity: {}) - TOP -> [", self.len(), self.capacity());
    for (pos, item) in self.storage.as_slice().iter().rev().enumerate() {
      if pos > 0 {
        out.push_str(" | ");
      }
      out.push_str(&printer(item));
    }
    out.push_str("] <- BOTTOM");
    Ok(out)
  }

  /// Destroys the stack, running the finalizer hook over every remaining
  /// element in bottom-to-top order.
  ///
  /// Plain `drop` performs the identical pass; this method only makes the
  /// end of the lifecycle explicit at the call site.
  pub fn destroy(self) {
    drop(self);
  }
}

impl<T> Drop for GrowableStack<T> {
  fn drop(&mut self) {
    let items = self.storage.take_items();
    debug!(target: LOG_TARGET, remaining = items.len(), "stack destroyed");
    if let Some(finalizer) = self.hooks.finalizer.as_mut() {
      for item in items {
        finalizer(item);
      }
    }
  }
}
