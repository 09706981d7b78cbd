//! Actor system facade.

use alloc::{format, string::ToString};

use cygnet_utils_core_rs::sync::ArcShared;

use crate::{
  actor_cell::ActorCell, actor_ref::ActorRef, name_registry_error::NameRegistryError, pid::Pid, props::Props,
  spawn_error::SpawnError, system_config::ActorSystemConfig, system_state::SystemState,
};

/// Entry point for creating and looking up actor references.
///
/// Systems are plain values over shared state, not ambient globals; tests
/// construct a fresh one per scenario. The registry lives as long as the
/// system and is torn down by [`ActorSystem::shutdown`].
#[derive(Clone)]
pub struct ActorSystem {
  state: ArcShared<SystemState>,
}

impl ActorSystem {
  /// Creates a system from the provided runtime configuration.
  #[must_use]
  pub fn new(config: &ActorSystemConfig) -> Self {
    Self { state: ArcShared::new(SystemState::new(config)) }
  }

  /// Wraps existing system state in a handle.
  #[must_use]
  pub const fn from_state(state: ArcShared<SystemState>) -> Self {
    Self { state }
  }

  /// Returns the shared system state.
  #[must_use]
  pub const fn state(&self) -> &ArcShared<SystemState> {
    &self.state
  }

  /// Creates an unstarted reference registered under `name`.
  ///
  /// This is the entry point deployment components use: create the
  /// reference first, call `start` on it when the actor should go live.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::DuplicateName`] when the name is taken and
  /// [`SpawnError::Terminated`] after shutdown.
  pub fn spawn(&self, props: &Props, name: &str) -> Result<ActorRef, SpawnError> {
    self.spawn_internal(props, Some(name))
  }

  /// Creates an unstarted reference without a display name.
  ///
  /// # Errors
  ///
  /// Returns [`SpawnError::Terminated`] after shutdown.
  pub fn spawn_unnamed(&self, props: &Props) -> Result<ActorRef, SpawnError> {
    self.spawn_internal(props, None)
  }

  /// Creates a reference registered under `name` and starts it.
  ///
  /// # Errors
  ///
  /// Returns the spawn failures of [`ActorSystem::spawn`] plus
  /// [`SpawnError::Start`] when the actor's `pre_start` fails.
  pub fn actor_of(&self, props: &Props, name: &str) -> Result<ActorRef, SpawnError> {
    let reference = self.spawn(props, name)?;
    reference.start().map_err(SpawnError::Start)?;
    Ok(reference)
  }

  /// Looks a reference up by display name.
  #[must_use]
  pub fn lookup(&self, name: &str) -> Option<ActorRef> {
    self.state.lookup(name)
  }

  /// Looks a reference up by identifier.
  #[must_use]
  pub fn lookup_pid(&self, pid: Pid) -> Option<ActorRef> {
    self.state.lookup_pid(pid)
  }

  /// Stops every registered reference and tears the registry down.
  ///
  /// Spawning after shutdown fails with [`SpawnError::Terminated`]; the
  /// call is idempotent.
  pub fn shutdown(&self) {
    self.state.mark_terminated();
    for reference in self.state.actor_refs() {
      reference.stop();
    }
  }

  fn spawn_internal(&self, props: &Props, name: Option<&str>) -> Result<ActorRef, SpawnError> {
    if self.state.is_terminated() {
      return Err(SpawnError::Terminated);
    }

    let pid = self.state.allocate_pid();
    let display_name = match name {
      | Some(name) => name.to_string(),
      | None => format!("anonymous-{}", pid.raw()),
    };
    let cell = ActorCell::create(self.state.clone(), pid, display_name, props);
    let reference = cell.actor_ref();

    self.state.register(pid, name.map(ToString::to_string), reference.clone()).map_err(|error| match error {
      | NameRegistryError::DuplicateName(taken) => SpawnError::DuplicateName(taken),
    })?;

    Ok(reference)
  }
}

#[cfg(test)]
mod tests;
