//! Storage layer backing the stack facade.

mod vec_stack_storage;

pub use vec_stack_storage::VecStackStorage;
