#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![no_std]

//! Foundation crate for the cygnet runtime.
//!
//! Provides the shared-handle aliases, spinlock wrapper, and timing
//! abstractions the actor crates build on. Everything here is `no_std`;
//! runtime-specific implementations (OS clocks, timer threads) live in the
//! std crates and satisfy the traits defined here.

extern crate alloc;

pub mod sync;
pub mod timing;
