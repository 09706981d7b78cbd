//! Virtual reference completing an ask reply future.

use core::time::Duration;

use crate::{
  actor_ref::ActorRef,
  actor_ref_backend::ActorRefBackend,
  any_message::AnyMessage,
  ask_error::{AskError, AskResult},
  actor_future::ActorFuture,
  ask_future::AskFuture,
  lifecycle_status::LifecycleStatus,
  link_error::LinkError,
  send_error::SendError,
  start_error::StartError,
  system_message::SystemMessage,
};

/// Reply endpoint handed out as the sender of an `ask` request.
///
/// The first `tell` against it completes the future; everything else on the
/// reference contract is unsupported.
pub struct AskReplyEndpoint {
  future: ActorFuture<AskResult>,
}

impl AskReplyEndpoint {
  /// Creates an endpoint completing the provided future.
  #[must_use]
  pub const fn new(future: ActorFuture<AskResult>) -> Self {
    Self { future }
  }
}

impl ActorRefBackend for AskReplyEndpoint {
  fn send(&self, message: AnyMessage) -> Result<(), SendError> {
    // A reply arriving after a timeout fault loses the completion race.
    let _ = self.future.complete(Ok(message));
    Ok(())
  }

  fn send_system(&self, _message: SystemMessage) -> Result<(), SystemMessage> {
    Ok(())
  }

  fn ask(&self, message: AnyMessage, _timeout: Duration) -> Result<AskFuture, SendError> {
    Err(SendError::NoRecipient(message))
  }

  fn ask_default(&self, message: AnyMessage) -> Result<AskFuture, SendError> {
    Err(SendError::NoRecipient(message))
  }

  fn start(&self) -> Result<(), StartError> {
    Err(StartError::Unsupported)
  }

  fn stop(&self) {}

  fn status(&self) -> LifecycleStatus {
    if self.future.is_completed() { LifecycleStatus::Shutdown } else { LifecycleStatus::Running }
  }

  fn link(&self, _child: &ActorRef) -> Result<(), LinkError> {
    Err(LinkError::Unsupported)
  }

  fn unlink(&self, _child: &ActorRef) -> Result<(), LinkError> {
    Err(LinkError::Unsupported)
  }

  fn set_supervisor(&self, _supervisor: &ActorRef) -> Result<(), LinkError> {
    Err(LinkError::Unsupported)
  }

  fn clear_supervisor(&self) {}

  fn fault_reply(&self, error: AskError) -> bool {
    self.future.complete(Err(error))
  }
}
