//! Actor handle abstraction used by message envelopes and user code.

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use cygnet_utils_core_rs::sync::ArcShared;

use crate::{
  actor_error::ActorError, actor_ref_backend::ActorRefBackend, any_message::AnyMessage, ask_error::AskError,
  ask_future::AskFuture, lifecycle_status::LifecycleStatus, link_error::LinkError, pid::Pid, send_error::SendError,
  start_error::StartError, system_message::SystemMessage, weak_actor_ref::WeakActorRef,
};

/// Lightweight handle pointing at an actor cell or a virtual reply endpoint.
///
/// Handles are cheap to clone and compare equal when they identify the same
/// actor. The handle survives restarts; its identity never changes.
#[derive(Clone)]
pub struct ActorRef {
  pid:     Option<Pid>,
  backend: Option<ArcShared<dyn ActorRefBackend>>,
}

impl ActorRef {
  /// Creates a dangling handle that is not associated with any actor.
  #[must_use]
  pub const fn dangling() -> Self {
    Self { pid: None, backend: None }
  }

  /// Creates a handle backed by the provided identifier and backend.
  #[must_use]
  pub fn new(pid: Pid, backend: ArcShared<dyn ActorRefBackend>) -> Self {
    Self { pid: Some(pid), backend: Some(backend) }
  }

  /// Creates a virtual handle without an identifier, such as an ask reply
  /// endpoint.
  #[must_use]
  pub fn new_virtual(backend: ArcShared<dyn ActorRefBackend>) -> Self {
    Self { pid: None, backend: Some(backend) }
  }

  pub(crate) fn from_parts(pid: Option<Pid>, backend: ArcShared<dyn ActorRefBackend>) -> Self {
    Self { pid, backend: Some(backend) }
  }

  #[cfg(test)]
  pub(crate) const fn detached(pid: Pid) -> Self {
    Self { pid: Some(pid), backend: None }
  }

  /// Returns the identifier associated with the handle if it is known.
  #[must_use]
  pub const fn pid(&self) -> Option<Pid> {
    self.pid
  }

  /// Returns `true` when the reference does not point to a live actor.
  #[must_use]
  pub const fn is_dangling(&self) -> bool {
    self.backend.is_none()
  }

  /// Downgrades the handle to a weak reference that does not keep the actor
  /// alive.
  #[must_use]
  pub fn downgrade(&self) -> WeakActorRef {
    match &self.backend {
      | Some(backend) => WeakActorRef::new(self.pid, ArcShared::downgrade(backend)),
      | None => WeakActorRef::dangling(),
    }
  }

  /// Sends a fire-and-forget message to the referenced actor.
  ///
  /// # Errors
  ///
  /// Returns [`SendError`] when the reference is dangling, not started, shut
  /// down, or its bounded mailbox rejected the message.
  pub fn tell(&self, message: AnyMessage) -> Result<(), SendError> {
    let Some(backend) = self.backend.as_ref() else {
      return Err(SendError::NoRecipient(message));
    };
    backend.send(message)
  }

  /// Sends a message and returns a reply future bounded by `timeout`.
  ///
  /// # Errors
  ///
  /// Returns [`SendError`] when the request message cannot be enqueued.
  pub fn ask(&self, message: AnyMessage, timeout: Duration) -> Result<AskFuture, SendError> {
    let Some(backend) = self.backend.as_ref() else {
      return Err(SendError::NoRecipient(message));
    };
    backend.ask(message, timeout)
  }

  /// Sends a message and returns a reply future bounded by the reference's
  /// configured default timeout.
  ///
  /// # Errors
  ///
  /// Returns [`SendError`] when the request message cannot be enqueued.
  pub fn ask_default(&self, message: AnyMessage) -> Result<AskFuture, SendError> {
    let Some(backend) = self.backend.as_ref() else {
      return Err(SendError::NoRecipient(message));
    };
    backend.ask_default(message)
  }

  /// Starts the referenced actor.
  ///
  /// # Errors
  ///
  /// Returns [`StartError`] when the reference is dangling, terminal, or
  /// initialization fails.
  pub fn start(&self) -> Result<(), StartError> {
    let Some(backend) = self.backend.as_ref() else {
      return Err(StartError::Unsupported);
    };
    backend.start()
  }

  /// Stops the referenced actor. Idempotent; stopping a dangling reference
  /// has no effect.
  pub fn stop(&self) {
    if let Some(backend) = self.backend.as_ref() {
      backend.stop();
    }
  }

  /// Returns the current lifecycle status, `Shutdown` for dangling handles.
  #[must_use]
  pub fn status(&self) -> LifecycleStatus {
    match &self.backend {
      | Some(backend) => backend.status(),
      | None => LifecycleStatus::Shutdown,
    }
  }

  /// Returns `true` while the referenced actor accepts messages.
  #[must_use]
  pub fn is_running(&self) -> bool {
    self.status().accepts_messages()
  }

  /// Links `child` under this reference's supervision.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError`] when the child already has a supervisor or this
  /// reference kind does not supervise.
  pub fn link(&self, child: &ActorRef) -> Result<(), LinkError> {
    let Some(backend) = self.backend.as_ref() else {
      return Err(LinkError::Unsupported);
    };
    backend.link(child)
  }

  /// Removes `child` from this reference's supervision.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError::NotLinked`] when the child is not linked here.
  pub fn unlink(&self, child: &ActorRef) -> Result<(), LinkError> {
    let Some(backend) = self.backend.as_ref() else {
      return Err(LinkError::Unsupported);
    };
    backend.unlink(child)
  }

  /// Links `child` and starts it as one operation, rolling the link back if
  /// the start fails.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError`] when linking fails or
  /// [`LinkError::StartFailed`] when the subsequent start fails.
  pub fn start_link(&self, child: &ActorRef) -> Result<(), LinkError> {
    self.link(child)?;
    match child.start() {
      | Ok(()) => Ok(()),
      | Err(error) => {
        let _ = self.unlink(child);
        Err(LinkError::StartFailed(error))
      },
    }
  }

  /// Enumerates the linked children of this reference.
  #[must_use]
  pub fn linked_children(&self) -> Vec<ActorRef> {
    match &self.backend {
      | Some(backend) => backend.linked_children(),
      | None => Vec::new(),
    }
  }

  pub(crate) fn send_system(&self, message: SystemMessage) -> Result<(), SystemMessage> {
    let Some(backend) = self.backend.as_ref() else {
      return Err(message);
    };
    backend.send_system(message)
  }

  pub(crate) fn set_supervisor(&self, supervisor: &ActorRef) -> Result<(), LinkError> {
    let Some(backend) = self.backend.as_ref() else {
      return Err(LinkError::Unsupported);
    };
    backend.set_supervisor(supervisor)
  }

  pub(crate) fn clear_supervisor(&self) {
    if let Some(backend) = self.backend.as_ref() {
      backend.clear_supervisor();
    }
  }

  pub(crate) fn request_restart(&self, reason: &ActorError, max_retries: Option<u32>, window: Option<Duration>) {
    if let Some(backend) = self.backend.as_ref() {
      backend.request_restart(reason, max_retries, window);
    }
  }

  pub(crate) fn fault_reply(&self, error: AskError) -> bool {
    match &self.backend {
      | Some(backend) => backend.fault_reply(error),
      | None => false,
    }
  }
}

impl PartialEq for ActorRef {
  fn eq(&self, other: &Self) -> bool {
    match (self.pid, other.pid) {
      | (Some(left), Some(right)) => left == right,
      | _ => false,
    }
  }
}

impl fmt::Debug for ActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut builder = f.debug_struct("ActorRef");
    match &self.pid {
      | Some(pid) => {
        builder.field("pid", pid);
      },
      | None => {
        builder.field("pid", &"unbound");
      },
    }
    builder.field("dangling", &self.is_dangling()).finish()
  }
}
