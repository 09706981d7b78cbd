//! Factory producing actor instances for starts and restarts.

use alloc::boxed::Box;

use crate::actor::Actor;

/// Produces a fresh actor instance.
///
/// The runtime calls this once at start and again for every restart that
/// the failed instance does not satisfy through `fresh_instance`.
pub trait ActorFactory: Send + Sync {
  /// Creates a new actor instance.
  fn create(&self) -> Box<dyn Actor + Send>;
}
