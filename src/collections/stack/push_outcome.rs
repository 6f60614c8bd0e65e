/// Observable result of a successful push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
  /// The element was stored without growing the backing storage.
  Pushed,
  /// The backing storage doubled before the element was stored.
  GrewTo {
    /// Capacity after growth.
    capacity: usize,
  },
}
