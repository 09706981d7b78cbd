//! Core actor trait executed by the runtime.

use alloc::boxed::Box;

use crate::{actor_context::ActorContext, actor_error::ActorError, any_message::AnyMessage};

/// User-provided behavior plus lifecycle hooks.
///
/// Each callback returns [`Result<(), ActorError>`] so failures can drive
/// the supervision engine. The base `receive` behavior sits at the bottom of
/// the hotswap stack and is never removed.
pub trait Actor: Send {
  /// Invoked before the actor starts processing messages.
  ///
  /// Implementations can allocate resources or schedule initial work. A
  /// failure here aborts the start and shuts the reference down.
  fn pre_start(&mut self, _ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    Ok(())
  }

  /// Handles a single incoming message.
  ///
  /// Payloads arrive as [`AnyMessage`] values, enabling dynamic downcasting
  /// to the expected type. Errors are caught by the reference and reported
  /// to its supervisor.
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: &AnyMessage) -> Result<(), ActorError>;

  /// Invoked on the failed instance before a restart replaces it.
  ///
  /// `last_message` is the message being processed when the failure
  /// happened, if any.
  fn pre_restart(
    &mut self,
    _ctx: &mut ActorContext<'_>,
    _reason: &ActorError,
    _last_message: Option<&AnyMessage>,
  ) -> Result<(), ActorError> {
    Ok(())
  }

  /// Invoked on the fresh instance after a restart installed it.
  fn post_restart(&mut self, _ctx: &mut ActorContext<'_>, _reason: &ActorError) -> Result<(), ActorError> {
    Ok(())
  }

  /// Invoked when the actor is stopping permanently.
  ///
  /// Implementations should release resources; failures are logged because
  /// shutdown is already in progress.
  fn post_stop(&mut self, _ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    Ok(())
  }

  /// Offers a replacement instance for the next restart.
  ///
  /// Consulted on the failed instance before the factory; returning `Some`
  /// substitutes the factory product for that restart only.
  fn fresh_instance(&mut self) -> Option<Box<dyn Actor + Send>> {
    None
  }
}
