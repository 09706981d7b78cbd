#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::dbg_macro)]

//! Std runtime for the cygnet actor core.
//!
//! Supplies the pieces the `no_std` core leaves abstract: a fixed worker
//! pool draining mailboxes, a monotonic clock over [`std::time::Instant`],
//! a timer thread for receive timeouts, and a `tracing` bridge for the
//! event stream logger. [`StdActorRuntime`] wires them into a ready
//! [`cygnet_actor_core_rs::ActorSystem`].

mod monotonic_clock;
mod runtime;
mod thread_pool_executor;
mod thread_timer;
#[cfg(feature = "tokio-executor")]
mod tokio_executor;
mod tracing_log_writer;

pub use monotonic_clock::MonotonicClock;
pub use runtime::{StdActorRuntime, StdActorRuntimeBuilder};
pub use thread_pool_executor::ThreadPoolExecutor;
pub use thread_timer::ThreadTimer;
#[cfg(feature = "tokio-executor")]
pub use tokio_executor::TokioExecutor;
pub use tracing_log_writer::TracingLogWriter;
