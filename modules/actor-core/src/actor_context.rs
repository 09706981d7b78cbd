//! Execution context handed to behaviors and lifecycle hooks.

use alloc::vec::Vec;
use core::time::Duration;

use crate::{
  actor_cell::ActorCell,
  actor_error::ActorError,
  actor_ref::ActorRef,
  any_message::AnyMessage,
  behavior::{BehaviorFn, HotswapOp},
  link_error::LinkError,
  pid::Pid,
  send_error::SendError,
  system::ActorSystem,
};

/// Capabilities available to an actor while it processes one message.
///
/// Hotswap operations and `stop_self` are recorded here and applied by the
/// cell after the invocation returns, keeping the actor slot exclusively
/// borrowed for the duration of the call.
pub struct ActorContext<'a> {
  cell:           &'a ActorCell,
  sender:         Option<ActorRef>,
  hotswap_ops:    Vec<HotswapOp>,
  stop_requested: bool,
}

impl<'a> ActorContext<'a> {
  pub(crate) fn new(cell: &'a ActorCell, sender: Option<ActorRef>) -> Self {
    Self { cell, sender, hotswap_ops: Vec::new(), stop_requested: false }
  }

  /// Returns a handle to the running actor.
  #[must_use]
  pub fn self_ref(&self) -> ActorRef {
    self.cell.actor_ref()
  }

  /// Returns the identifier of the running actor.
  #[must_use]
  pub fn pid(&self) -> Pid {
    self.cell.pid()
  }

  /// Returns the system the actor lives in.
  #[must_use]
  pub fn system(&self) -> ActorSystem {
    ActorSystem::from_state(self.cell.system_state().clone())
  }

  /// Returns the sender of the message being processed, if one was
  /// attached.
  #[must_use]
  pub const fn sender(&self) -> Option<&ActorRef> {
    self.sender.as_ref()
  }

  /// Replies to the current sender.
  ///
  /// # Errors
  ///
  /// Returns [`SendError::NoRecipient`] when the message carried no reply
  /// channel, or the sender's own send failure.
  pub fn reply(&self, message: AnyMessage) -> Result<(), SendError> {
    match &self.sender {
      | Some(sender) => sender.tell(message),
      | None => Err(SendError::NoRecipient(message)),
    }
  }

  /// Replies to the current sender, discarding the message when no reply
  /// channel exists. Returns `true` when the reply was sent.
  pub fn try_reply(&self, message: AnyMessage) -> bool {
    self.reply(message).is_ok()
  }

  /// Sends `message` to `target` preserving the current sender as the reply
  /// channel.
  ///
  /// # Errors
  ///
  /// Returns the target's send failure.
  pub fn forward(&self, target: &ActorRef, message: AnyMessage) -> Result<(), SendError> {
    let message = match &self.sender {
      | Some(sender) => message.with_reply_to(sender.clone()),
      | None => message,
    };
    target.tell(message)
  }

  /// Pushes a behavior override; it handles messages from the next
  /// invocation on.
  pub fn push_behavior<F>(&mut self, behavior: F)
  where
    F: FnMut(&mut ActorContext<'_>, &AnyMessage) -> Result<(), ActorError> + Send + 'static, {
    self.hotswap_ops.push(HotswapOp::Push(alloc::boxed::Box::new(behavior) as BehaviorFn));
  }

  /// Pops the top behavior override; a no-op when only the base behavior
  /// remains.
  pub fn pop_behavior(&mut self) {
    self.hotswap_ops.push(HotswapOp::Pop);
  }

  /// Links `child` under the running actor's supervision.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError`] when the child already has a supervisor.
  pub fn link(&self, child: &ActorRef) -> Result<(), LinkError> {
    self.cell.link(child)
  }

  /// Removes `child` from the running actor's supervision.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError::NotLinked`] when the child is not linked here.
  pub fn unlink(&self, child: &ActorRef) -> Result<(), LinkError> {
    self.cell.unlink(child)
  }

  /// Stops the running actor once the current invocation returns.
  pub fn stop_self(&mut self) {
    self.stop_requested = true;
  }

  /// Reconfigures the receive timeout from the next idle transition on.
  pub fn set_receive_timeout(&self, timeout: Duration) {
    self.cell.set_receive_timeout(Some(timeout));
  }

  /// Disables the receive timeout.
  pub fn clear_receive_timeout(&self) {
    self.cell.set_receive_timeout(None);
  }

  pub(crate) fn into_pending(self) -> (Vec<HotswapOp>, bool) {
    (self.hotswap_ops, self.stop_requested)
  }
}
