//! Tagged payload carried by a mailbox envelope.

use crate::{any_message::AnyMessage, system_message::SystemMessage};

/// Distinguishes user traffic from runtime control messages in one queue.
#[derive(Clone, Debug)]
pub enum MessagePayload {
  /// Application message handled by the actor's behavior.
  User(AnyMessage),
  /// Runtime control message handled by the reference itself.
  System(SystemMessage),
}

impl MessagePayload {
  /// Returns the user message when this payload carries one.
  #[must_use]
  pub const fn as_user(&self) -> Option<&AnyMessage> {
    match self {
      | Self::User(message) => Some(message),
      | Self::System(_) => None,
    }
  }

  /// Returns `true` when the payload is a runtime control message.
  #[must_use]
  pub const fn is_system(&self) -> bool {
    matches!(self, Self::System(_))
  }
}
