#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![no_std]

//! Growable LIFO collections with explicit lifecycle and diagnostic hooks.
//!
//! The crate is `no_std` and relies on `alloc` for its backing storage. The
//! default `std` feature only forwards to `tracing/std` so diagnostics can
//! reach a standard subscriber.

extern crate alloc;

pub mod collections;
