//! Errors produced when spawning actors through the system.

use alloc::string::String;
use core::fmt;

use crate::start_error::StartError;

/// Failures reported by `ActorSystem::spawn` and `ActorSystem::actor_of`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpawnError {
  /// Another live reference already owns the requested name.
  DuplicateName(String),
  /// The system has been shut down.
  Terminated,
  /// The reference was created but failed to start.
  Start(StartError),
}

impl fmt::Display for SpawnError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::DuplicateName(name) => write!(f, "name already registered: {name}"),
      | Self::Terminated => f.write_str("actor system is shut down"),
      | Self::Start(error) => write!(f, "spawned actor failed to start: {error}"),
    }
  }
}
