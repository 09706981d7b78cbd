//! One message in flight towards an actor.

use crate::{actor_ref::ActorRef, any_message::AnyMessage, message_payload::MessagePayload, system_message::SystemMessage};

/// Immutable triple of destination reference, payload, and reply channel.
///
/// The reply channel, when present, lives inside the user payload; the
/// dispatcher only needs the receiver and the tagged payload to deliver the
/// message.
#[derive(Clone, Debug)]
pub struct Envelope {
  receiver: ActorRef,
  payload:  MessagePayload,
}

impl Envelope {
  /// Creates an envelope carrying a user message.
  #[must_use]
  pub const fn user(receiver: ActorRef, message: AnyMessage) -> Self {
    Self { receiver, payload: MessagePayload::User(message) }
  }

  /// Creates an envelope carrying a system message.
  #[must_use]
  pub const fn system(receiver: ActorRef, message: SystemMessage) -> Self {
    Self { receiver, payload: MessagePayload::System(message) }
  }

  /// Returns the destination reference.
  #[must_use]
  pub const fn receiver(&self) -> &ActorRef {
    &self.receiver
  }

  /// Returns the tagged payload.
  #[must_use]
  pub const fn payload(&self) -> &MessagePayload {
    &self.payload
  }

  /// Consumes the envelope and returns the tagged payload.
  #[must_use]
  pub fn into_payload(self) -> MessagePayload {
    self.payload
  }
}
