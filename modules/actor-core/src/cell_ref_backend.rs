//! Reference backend for local actor cells.

use alloc::vec::Vec;
use core::time::Duration;

use cygnet_utils_core_rs::sync::ArcShared;

use crate::{
  actor_cell::ActorCell, actor_error::ActorError, actor_ref::ActorRef, actor_ref_backend::ActorRefBackend,
  any_message::AnyMessage, ask_future::AskFuture, lifecycle_status::LifecycleStatus, link_error::LinkError,
  send_error::SendError, start_error::StartError, system_message::SystemMessage,
};

/// Backend delegating the reference contract to an in-process [`ActorCell`].
pub struct CellRefBackend {
  cell: ArcShared<ActorCell>,
}

impl CellRefBackend {
  /// Creates a backend around the provided cell.
  #[must_use]
  pub const fn new(cell: ArcShared<ActorCell>) -> Self {
    Self { cell }
  }
}

impl ActorRefBackend for CellRefBackend {
  fn send(&self, message: AnyMessage) -> Result<(), SendError> {
    self.cell.send_user(message)
  }

  fn send_system(&self, message: SystemMessage) -> Result<(), SystemMessage> {
    self.cell.send_system(message)
  }

  fn ask(&self, message: AnyMessage, timeout: Duration) -> Result<AskFuture, SendError> {
    self.cell.ask(message, timeout)
  }

  fn ask_default(&self, message: AnyMessage) -> Result<AskFuture, SendError> {
    self.cell.ask_default(message)
  }

  fn start(&self) -> Result<(), StartError> {
    ActorCell::start(&self.cell)
  }

  fn stop(&self) {
    self.cell.stop();
  }

  fn status(&self) -> LifecycleStatus {
    self.cell.status()
  }

  fn link(&self, child: &ActorRef) -> Result<(), LinkError> {
    self.cell.link(child)
  }

  fn unlink(&self, child: &ActorRef) -> Result<(), LinkError> {
    self.cell.unlink(child)
  }

  fn set_supervisor(&self, supervisor: &ActorRef) -> Result<(), LinkError> {
    self.cell.set_supervisor(supervisor)
  }

  fn clear_supervisor(&self) {
    self.cell.clear_supervisor();
  }

  fn request_restart(&self, reason: &ActorError, max_retries: Option<u32>, window: Option<Duration>) {
    self.cell.request_restart(reason, max_retries, window);
  }

  fn linked_children(&self) -> Vec<ActorRef> {
    self.cell.linked_children()
  }
}
