use alloc::{boxed::Box, string::String};

/// Renders a single element for display.
pub type ElementPrinter<T> = Box<dyn Fn(&T) -> String>;

/// Consumes a single element when the stack is destroyed.
pub type ElementFinalizer<T> = Box<dyn FnMut(T)>;

/// Optional per-element capabilities bound to a stack at construction.
///
/// Both hooks are optional: a stack without a printer reports rendering as
/// unsupported, and a stack without a finalizer lets remaining elements drop
/// through their own `Drop` glue.
pub struct StackHooks<T> {
  pub(crate) printer:   Option<ElementPrinter<T>>,
  pub(crate) finalizer: Option<ElementFinalizer<T>>,
}

impl<T> StackHooks<T> {
  /// Creates an empty hook set.
  #[must_use]
  pub const fn new() -> Self {
    Self { printer: None, finalizer: None }
  }

  /// Installs the printer hook.
  #[must_use]
  pub fn with_printer(mut self, printer: impl Fn(&T) -> String + 'static) -> Self {
    self.printer = Some(Box::new(printer));
    self
  }

  /// Installs the finalizer hook.
  #[must_use]
  pub fn with_finalizer(mut self, finalizer: impl FnMut(T) + 'static) -> Self {
    self.finalizer = Some(Box::new(finalizer));
    self
  }

  /// Indicates whether a printer hook is installed.
  #[must_use]
  pub const fn has_printer(&self) -> bool {
    self.printer.is_some()
  }

  /// Indicates whether a finalizer hook is installed.
  #[must_use]
  pub const fn has_finalizer(&self) -> bool {
    self.finalizer.is_some()
  }
}

impl<T> Default for StackHooks<T> {
  fn default() -> Self {
    Self::new()
  }
}
