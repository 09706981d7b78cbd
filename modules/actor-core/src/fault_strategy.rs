//! Fault-handling strategy installed on a supervisor reference.

use core::time::Duration;

use crate::{actor_error::ActorError, trapped_errors::TrappedErrors};

/// Determines how a supervisor reacts to failures of its linked children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FaultStrategy {
  /// Restart only the failing child when its failure is trapped.
  OneForOne {
    /// Failure codes this strategy intercepts.
    trap:        TrappedErrors,
    /// Restart budget within the window; `None` removes the limit.
    max_retries: Option<u32>,
    /// Rolling window the budget applies to; `None` makes it cumulative.
    window:      Option<Duration>,
  },
  /// Restart every linked child when one trapped failure occurs.
  AllForOne {
    /// Failure codes this strategy intercepts.
    trap:        TrappedErrors,
    /// Restart budget within the window; `None` removes the limit.
    max_retries: Option<u32>,
    /// Rolling window the budget applies to; `None` makes it cumulative.
    window:      Option<Duration>,
  },
  /// Failures are not trapped; failing children are stopped.
  #[default]
  NoStrategy,
}

impl FaultStrategy {
  /// Creates a one-for-one strategy.
  #[must_use]
  pub const fn one_for_one(trap: TrappedErrors, max_retries: Option<u32>, window: Option<Duration>) -> Self {
    Self::OneForOne { trap, max_retries, window }
  }

  /// Creates an all-for-one strategy.
  #[must_use]
  pub const fn all_for_one(trap: TrappedErrors, max_retries: Option<u32>, window: Option<Duration>) -> Self {
    Self::AllForOne { trap, max_retries, window }
  }

  /// Returns `true` when `error` is trapped by this strategy.
  #[must_use]
  pub fn traps(&self, error: &ActorError) -> bool {
    match self {
      | Self::OneForOne { trap, .. } | Self::AllForOne { trap, .. } => trap.traps(error),
      | Self::NoStrategy => false,
    }
  }

  /// Returns `true` when a trapped failure affects every linked child.
  #[must_use]
  pub const fn is_all_for_one(&self) -> bool {
    matches!(self, Self::AllForOne { .. })
  }

  /// Returns the restart budget carried by this strategy.
  #[must_use]
  pub const fn budget(&self) -> (Option<u32>, Option<Duration>) {
    match self {
      | Self::OneForOne { max_retries, window, .. } | Self::AllForOne { max_retries, window, .. } => {
        (*max_retries, *window)
      },
      | Self::NoStrategy => (None, None),
    }
  }
}

#[cfg(test)]
mod tests;
