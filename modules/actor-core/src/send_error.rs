//! Errors produced when sending messages through an `ActorRef`.

use core::fmt;

use crate::any_message::AnyMessage;

/// Represents failures that can occur when handing a message to a reference.
///
/// Every variant returns the undelivered message to the caller.
pub enum SendError {
  /// The target reference has not been started yet.
  NotStarted(AnyMessage),
  /// The target reference has been shut down; the message was dead-lettered.
  Closed(AnyMessage),
  /// A bounded mailbox rejected the message within its push timeout.
  AppendFailed(AnyMessage),
  /// No reply target was available for the attempted send operation.
  NoRecipient(AnyMessage),
}

impl SendError {
  /// Returns a shared reference to the undelivered message.
  #[must_use]
  pub const fn message(&self) -> &AnyMessage {
    match self {
      | SendError::NotStarted(message)
      | SendError::Closed(message)
      | SendError::AppendFailed(message)
      | SendError::NoRecipient(message) => message,
    }
  }

  /// Consumes the error and returns the undelivered message.
  #[must_use]
  pub fn into_message(self) -> AnyMessage {
    match self {
      | SendError::NotStarted(message)
      | SendError::Closed(message)
      | SendError::AppendFailed(message)
      | SendError::NoRecipient(message) => message,
    }
  }
}

impl fmt::Debug for SendError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | SendError::NotStarted(_) => f.debug_tuple("NotStarted").finish(),
      | SendError::Closed(_) => f.debug_tuple("Closed").finish(),
      | SendError::AppendFailed(_) => f.debug_tuple("AppendFailed").finish(),
      | SendError::NoRecipient(_) => f.debug_tuple("NoRecipient").finish(),
    }
  }
}

impl fmt::Display for SendError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let reason = match self {
      | SendError::NotStarted(_) => "target reference is not started",
      | SendError::Closed(_) => "target reference is shut down",
      | SendError::AppendFailed(_) => "bounded mailbox rejected the message",
      | SendError::NoRecipient(_) => "no recipient available",
    };
    f.write_str(reason)
  }
}
