//! Injectable time sources and one-shot timers.
//!
//! The runtime core never reads an OS clock directly; it asks a [`Clock`] for
//! a monotonic instant and a [`TimerDriver`] for one-shot callbacks. Std
//! runtimes provide real implementations, tests use [`ManualClock`] and
//! [`ManualTimer`] for deterministic control.

mod clock;
mod manual_clock;
mod manual_timer;
mod timer_driver;
mod timer_handle;

pub use clock::Clock;
pub use manual_clock::ManualClock;
pub use manual_timer::ManualTimer;
pub use timer_driver::{TimerDriver, TimerTask};
pub use timer_handle::TimerHandle;
