use core::fmt;

/// Errors that occur during stack operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError<T> {
  /// The requested initial capacity was zero. Stacks always own at least one slot.
  ZeroCapacity,
  /// The allocator refused to provide the initial backing storage.
  AllocError,
  /// The backing storage could not grow to make room. Contains the element that
  /// was rejected; the stack itself is unchanged.
  GrowError(T),
  /// The stack contains no elements.
  Empty,
  /// No printer hook was installed, so elements cannot be rendered.
  MissingPrinter,
}

impl<T> StackError<T> {
  /// Extracts the payload carried by variants that preserve the element on failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::GrowError(item) => Some(item),
      | Self::ZeroCapacity | Self::AllocError | Self::Empty | Self::MissingPrinter => None,
    }
  }
}

impl<T> fmt::Display for StackError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::ZeroCapacity => f.write_str("initial capacity must be positive"),
      | Self::AllocError => f.write_str("failed to allocate backing storage"),
      | Self::GrowError(_) => f.write_str("failed to grow backing storage"),
      | Self::Empty => f.write_str("stack is empty"),
      | Self::MissingPrinter => f.write_str("no printer hook installed"),
    }
  }
}

impl<T: fmt::Debug> core::error::Error for StackError<T> {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn grow_error_carries_rejected_item() {
    let error = StackError::GrowError(42);
    assert_eq!(error.into_item(), Some(42));
  }

  #[test]
  fn other_variants_carry_nothing() {
    assert_eq!(StackError::<i32>::ZeroCapacity.into_item(), None);
    assert_eq!(StackError::<i32>::AllocError.into_item(), None);
    assert_eq!(StackError::<i32>::Empty.into_item(), None);
    assert_eq!(StackError::<i32>::MissingPrinter.into_item(), None);
  }

  #[test]
  fn display_messages_identify_the_condition() {
    assert_eq!(StackError::<i32>::ZeroCapacity.to_string(), "initial capacity must be positive");
    assert_eq!(StackError::<i32>::Empty.to_string(), "stack is empty");
    assert_eq!(StackError::GrowError(7).to_string(), "failed to grow backing storage");
    assert_eq!(StackError::<i32>::MissingPrinter.to_string(), "no printer hook installed");
  }
}
