//! Collection types provided by this crate.

pub mod stack;

pub use stack::{ElementFinalizer, ElementPrinter, GrowableStack, PushOutcome, StackError, StackHooks, VecStackStorage};
