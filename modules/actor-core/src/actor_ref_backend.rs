//! Contract every actor reference kind fulfils.

use alloc::vec::Vec;
use core::time::Duration;

use crate::{
  actor_error::ActorError, actor_ref::ActorRef, any_message::AnyMessage, ask_error::AskError, ask_future::AskFuture,
  lifecycle_status::LifecycleStatus, link_error::LinkError, send_error::SendError, start_error::StartError,
  system_message::SystemMessage,
};

/// Backend behind an [`ActorRef`].
///
/// Local cells implement the full contract. Virtual references (ask reply
/// endpoints) and remote transports implement the send surface and report
/// the rest as unsupported.
pub trait ActorRefBackend: Send + Sync {
  /// Enqueues a user message for the referenced actor.
  ///
  /// # Errors
  ///
  /// Returns [`SendError`] when the reference cannot accept the message.
  fn send(&self, message: AnyMessage) -> Result<(), SendError>;

  /// Enqueues a runtime control message for the referenced actor.
  ///
  /// # Errors
  ///
  /// Hands the message back when the reference can no longer accept it, so
  /// the supervision engine can fall back to a local decision.
  fn send_system(&self, message: SystemMessage) -> Result<(), SystemMessage>;

  /// Sends a message and returns a reply future bounded by `timeout`.
  ///
  /// # Errors
  ///
  /// Returns [`SendError`] when the request message cannot be enqueued.
  fn ask(&self, message: AnyMessage, timeout: Duration) -> Result<AskFuture, SendError>;

  /// Sends a message and returns a reply future bounded by the reference's
  /// configured default timeout.
  ///
  /// # Errors
  ///
  /// Returns [`SendError`] when the request message cannot be enqueued.
  fn ask_default(&self, message: AnyMessage) -> Result<AskFuture, SendError>;

  /// Starts the referenced actor.
  ///
  /// # Errors
  ///
  /// Returns [`StartError`] when the reference is terminal or initialization
  /// fails.
  fn start(&self) -> Result<(), StartError>;

  /// Stops the referenced actor. Idempotent.
  fn stop(&self);

  /// Returns the current lifecycle status.
  fn status(&self) -> LifecycleStatus;

  /// Links `child` under this reference's supervision.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError`] when the child already has a supervisor or the
  /// reference kind does not supervise.
  fn link(&self, child: &ActorRef) -> Result<(), LinkError>;

  /// Removes `child` from this reference's supervision.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError`] when the child is not linked here.
  fn unlink(&self, child: &ActorRef) -> Result<(), LinkError>;

  /// Installs the supervisor back-reference on this reference.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError::AlreadySupervised`] when a supervisor is already
  /// installed.
  fn set_supervisor(&self, supervisor: &ActorRef) -> Result<(), LinkError>;

  /// Clears the supervisor back-reference.
  fn clear_supervisor(&self);

  /// Runs the restart protocol with the provided budget. No-op for
  /// reference kinds without a local instance.
  fn request_restart(&self, reason: &ActorError, max_retries: Option<u32>, window: Option<Duration>) {
    let _ = (reason, max_retries, window);
  }

  /// Faults a pending reply channel, returning `true` when a waiter will
  /// observe the error. Only meaningful for reply endpoints.
  fn fault_reply(&self, error: AskError) -> bool {
    let _ = error;
    false
  }

  /// Enumerates the linked children of this reference.
  fn linked_children(&self) -> Vec<ActorRef> {
    Vec::new()
  }
}
