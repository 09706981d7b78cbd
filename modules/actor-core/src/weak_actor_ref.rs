//! Non-owning actor handle used for supervisor back-references.

use cygnet_utils_core_rs::sync::WeakShared;

use crate::{actor_ref::ActorRef, actor_ref_backend::ActorRefBackend, pid::Pid};

/// Weak counterpart of [`ActorRef`].
///
/// Children hold their supervisor through this type so the parent-to-child
/// ownership edge stays the only strong one in the tree.
#[derive(Clone)]
pub struct WeakActorRef {
  pid:     Option<Pid>,
  backend: Option<WeakShared<dyn ActorRefBackend>>,
}

impl WeakActorRef {
  /// Creates a weak handle that will never upgrade.
  #[must_use]
  pub const fn dangling() -> Self {
    Self { pid: None, backend: None }
  }

  pub(crate) const fn new(pid: Option<Pid>, backend: WeakShared<dyn ActorRefBackend>) -> Self {
    Self { pid, backend: Some(backend) }
  }

  /// Returns the identifier associated with the handle if it is known.
  #[must_use]
  pub const fn pid(&self) -> Option<Pid> {
    self.pid
  }

  /// Attempts to recover a strong handle; returns `None` once the actor has
  /// been reclaimed.
  #[must_use]
  pub fn upgrade(&self) -> Option<ActorRef> {
    let backend = self.backend.as_ref()?.upgrade()?;
    Some(ActorRef::from_parts(self.pid, backend))
  }
}
