use super::*;

#[test]
fn try_with_capacity_creates_empty_storage() {
  let storage: VecStackStorage<i32> = VecStackStorage::try_with_capacity(10).unwrap();
  assert_eq!(storage.len(), 0);
  assert_eq!(storage.capacity(), 10);
  assert!(storage.is_empty());
  assert!(!storage.is_full());
}

#[test]
fn push_and_pop_operations() {
  let mut storage = VecStackStorage::try_with_capacity(5).unwrap();

  storage.push(1);
  storage.push(2);
  storage.push(3);

  assert_eq!(storage.len(), 3);
  assert!(!storage.is_empty());

  assert_eq!(storage.pop(), Some(3));
  assert_eq!(storage.pop(), Some(2));
  assert_eq!(storage.pop(), Some(1));
  assert_eq!(storage.pop(), None);
  assert!(storage.is_empty());
}

#[test]
fn peek_returns_last_element() {
  let mut storage = VecStackStorage::try_with_capacity(5).unwrap();

  assert_eq!(storage.peek(), None);

  storage.push(10);
  assert_eq!(storage.peek(), Some(&10));

  storage.push(20);
  assert_eq!(storage.peek(), Some(&20));

  storage.pop();
  assert_eq!(storage.peek(), Some(&10));
}

#[test]
fn is_full_tracks_the_limit() {
  let mut storage = VecStackStorage::try_with_capacity(2).unwrap();

  storage.push(1);
  assert!(!storage.is_full());
  storage.push(2);
  assert!(storage.is_full());
}

#[test]
fn try_grow_increases_capacity() {
  let mut storage = VecStackStorage::try_with_capacity(5).unwrap();

  storage.push(1);
  storage.push(2);

  assert_eq!(storage.capacity(), 5);

  assert!(storage.try_grow(10).is_ok());
  assert_eq!(storage.capacity(), 10);

  // Growing to same or smaller capacity is no-op
  assert!(storage.try_grow(8).is_ok());
  assert_eq!(storage.capacity(), 10);

  // Data should be preserved
  assert_eq!(storage.len(), 2);
  assert_eq!(storage.pop(), Some(2));
  assert_eq!(storage.pop(), Some(1));
}

#[test]
fn failed_grow_leaves_storage_untouched() {
  let mut storage = VecStackStorage::try_with_capacity(2).unwrap();

  storage.push(1);
  storage.push(2);

  assert!(storage.try_grow(usize::MAX).is_err());

  assert_eq!(storage.capacity(), 2);
  assert_eq!(storage.len(), 2);
  assert_eq!(storage.pop(), Some(2));
  assert_eq!(storage.pop(), Some(1));
}

#[test]
fn as_slice_is_bottom_first() {
  let mut storage = VecStackStorage::try_with_capacity(3).unwrap();

  storage.push('a');
  storage.push('b');
  storage.push('c');

  assert_eq!(storage.as_slice(), &['a', 'b', 'c']);
}

#[test]
fn take_items_drains_in_push_order() {
  let mut storage = VecStackStorage::try_with_capacity(3).unwrap();

  storage.push(1);
  storage.push(2);
  storage.push(3);

  let items = storage.take_items();
  assert_eq!(items.as_slice(), &[1, 2, 3]);
  assert!(storage.is_empty());
}
