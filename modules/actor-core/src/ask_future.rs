//! Deadline-aware reply future returned by `ask`.

use core::hint::spin_loop;
use core::time::Duration;

use cygnet_utils_core_rs::{sync::ArcShared, timing::Clock};

use crate::{
  actor_future::ActorFuture,
  ask_error::{AskError, AskResult},
};

/// Reply future with an attached deadline.
///
/// Completes with the first reply, with the failure the target raised while
/// handling the request, or with [`AskError::TimedOut`] once the deadline
/// passes. A reply arriving after the timeout is discarded.
#[derive(Clone)]
pub struct AskFuture {
  future:   ActorFuture<AskResult>,
  clock:    ArcShared<dyn Clock>,
  deadline: Duration,
}

impl AskFuture {
  pub(crate) fn new(future: ActorFuture<AskResult>, clock: ArcShared<dyn Clock>, timeout: Duration) -> Self {
    let deadline = clock.now().saturating_add(timeout);
    Self { future, clock, deadline }
  }

  /// Returns the absolute deadline on the system clock.
  #[must_use]
  pub const fn deadline(&self) -> Duration {
    self.deadline
  }

  /// Returns `true` once a result has been produced.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.future.is_completed()
  }

  /// Takes the result if one is available, faulting the future with
  /// [`AskError::TimedOut`] when the deadline has already passed.
  pub fn try_result(&self) -> Option<AskResult> {
    if let Some(result) = self.future.try_take() {
      return Some(result);
    }
    if self.clock.now() >= self.deadline {
      // Either we fault the future first or a racing reply beat us to it.
      self.future.complete(Err(AskError::TimedOut));
      return self.future.try_take();
    }
    None
  }

  /// Blocks until a reply, a failure, or the deadline produces a result.
  pub fn wait(self) -> AskResult {
    loop {
      if let Some(result) = self.try_result() {
        return result;
      }
      spin_loop();
    }
  }
}
