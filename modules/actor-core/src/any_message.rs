//! Owned representation of a dynamically typed message.

use core::any::Any;
use core::fmt;

use cygnet_utils_core_rs::sync::ArcShared;

use crate::actor_ref::ActorRef;

/// Wraps an arbitrary payload for message passing.
///
/// The payload is reference counted, so cloning an `AnyMessage` is cheap and
/// the value is immutable once created. An optional reply reference rides
/// along with the payload.
pub struct AnyMessage {
  payload:  ArcShared<dyn Any + Send + Sync>,
  reply_to: Option<ActorRef>,
}

impl AnyMessage {
  /// Creates a new owned message from the provided payload.
  #[must_use]
  pub fn new<T>(payload: T) -> Self
  where
    T: Any + Send + Sync, {
    Self { payload: ArcShared::new(payload), reply_to: None }
  }

  /// Associates a reply target with this message and returns the updated
  /// instance.
  #[must_use]
  pub fn with_reply_to(mut self, reply_to: ActorRef) -> Self {
    self.reply_to = Some(reply_to);
    self
  }

  /// Returns the reply target, if any.
  #[must_use]
  pub const fn reply_to(&self) -> Option<&ActorRef> {
    self.reply_to.as_ref()
  }

  /// Attempts to view the payload as a value of type `T`.
  #[must_use]
  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.payload.downcast_ref::<T>()
  }

  /// Returns the payload as a trait object reference.
  #[must_use]
  pub fn payload(&self) -> &(dyn Any + Send + Sync) {
    &*self.payload
  }
}

impl Clone for AnyMessage {
  fn clone(&self) -> Self {
    Self { payload: self.payload.clone(), reply_to: self.reply_to.clone() }
  }
}

impl fmt::Debug for AnyMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AnyMessage")
      .field("type_id", &self.payload.type_id())
      .field("has_reply_to", &self.reply_to.is_some())
      .finish()
  }
}
