//! Lifecycle policy controlling how failures dispose of an actor.

/// Declares whether a failing actor is eligible for restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LifeCycle {
  /// Restart on failure when the supervisor strategy allows it.
  Permanent,
  /// Stop on failure; never restart.
  Temporary,
  /// No explicit choice; treated as [`LifeCycle::Permanent`].
  #[default]
  Undefined,
}

impl LifeCycle {
  /// Returns `true` when a failure must stop the actor instead of
  /// restarting it.
  #[must_use]
  pub const fn is_temporary(self) -> bool {
    matches!(self, Self::Temporary)
  }
}
