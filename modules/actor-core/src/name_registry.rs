//! Process-wide registry of live actor references.

use alloc::{string::String, vec::Vec};

use hashbrown::HashMap;

use crate::{actor_ref::ActorRef, name_registry_error::NameRegistryError, pid::Pid};

struct RegistryEntry {
  reference: ActorRef,
  name:      Option<String>,
}

/// Maps display names and identifiers to live references.
///
/// The registry holds the strong handles keeping free-standing actors
/// alive; unregistering a reference at stop releases them.
pub struct NameRegistry {
  by_name: HashMap<String, Pid>,
  by_pid:  HashMap<Pid, RegistryEntry>,
}

impl NameRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { by_name: HashMap::new(), by_pid: HashMap::new() }
  }

  /// Registers a reference, optionally under a display name.
  ///
  /// # Errors
  ///
  /// Returns [`NameRegistryError::DuplicateName`] when the name is taken.
  pub fn register(&mut self, pid: Pid, name: Option<String>, reference: ActorRef) -> Result<(), NameRegistryError> {
    if let Some(name) = &name {
      if self.by_name.contains_key(name) {
        return Err(NameRegistryError::DuplicateName(name.clone()));
      }
      self.by_name.insert(name.clone(), pid);
    }
    self.by_pid.insert(pid, RegistryEntry { reference, name });
    Ok(())
  }

  /// Removes a reference, releasing its name.
  pub fn unregister(&mut self, pid: Pid) {
    if let Some(entry) = self.by_pid.remove(&pid) {
      if let Some(name) = entry.name {
        self.by_name.remove(&name);
      }
    }
  }

  /// Looks a reference up by display name.
  #[must_use]
  pub fn lookup(&self, name: &str) -> Option<ActorRef> {
    let pid = self.by_name.get(name)?;
    self.by_pid.get(pid).map(|entry| entry.reference.clone())
  }

  /// Looks a reference up by identifier.
  #[must_use]
  pub fn lookup_pid(&self, pid: Pid) -> Option<ActorRef> {
    self.by_pid.get(&pid).map(|entry| entry.reference.clone())
  }

  /// Enumerates every registered reference.
  #[must_use]
  pub fn actor_refs(&self) -> Vec<ActorRef> {
    self.by_pid.values().map(|entry| entry.reference.clone()).collect()
  }

  /// Returns the number of registered references.
  #[must_use]
  pub fn len(&self) -> usize {
    self.by_pid.len()
  }

  /// Returns `true` when no references are registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.by_pid.is_empty()
  }
}

impl Default for NameRegistry {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests;
