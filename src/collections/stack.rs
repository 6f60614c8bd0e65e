//! Growable LIFO stack and its supporting types.

mod growable_stack;
mod push_outcome;
mod stack_error;
mod stack_hooks;
mod storage;

pub use growable_stack::GrowableStack;
pub use push_outcome::PushOutcome;
pub use stack_error::StackError;
pub use stack_hooks::{ElementFinalizer, ElementPrinter, StackHooks};
pub use storage::VecStackStorage;
