//! Errors produced when starting an actor reference.

use core::fmt;

use crate::actor_error::ActorError;

/// Failures reported by `ActorRef::start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartError {
  /// The reference has been shut down; shutdown is terminal.
  AlreadyShutdown,
  /// The actor's `pre_start` hook failed; the reference was shut down.
  InitializationFailed(ActorError),
  /// The reference kind does not support being started.
  Unsupported,
}

impl fmt::Display for StartError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::AlreadyShutdown => f.write_str("reference is already shut down"),
      | Self::InitializationFailed(error) => write!(f, "pre_start failed: {error}"),
      | Self::Unsupported => f.write_str("reference kind cannot be started"),
    }
  }
}
