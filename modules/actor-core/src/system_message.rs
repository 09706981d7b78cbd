//! Internal control messages driving the supervision engine.

use crate::{actor_error::ActorError, actor_ref::ActorRef, max_restarts_exceeded::MaxRestartsExceeded};

/// Control messages exchanged between linked references.
///
/// System messages travel through the same mailbox as user traffic and keep
/// its ordering; they are distinguished by tag, not by queue.
#[derive(Clone, Debug)]
pub enum SystemMessage {
  /// A linked child failed while handling a message.
  ChildFailed {
    /// The failing child.
    child:  ActorRef,
    /// The failure raised by the child's behavior.
    reason: ActorError,
  },
  /// A linked child stopped cleanly.
  ChildStopped {
    /// The stopped child.
    child: ActorRef,
  },
  /// A linked child consumed its restart budget and stopped itself.
  Escalated(MaxRestartsExceeded),
  /// The receive-timeout timer fired for this reference.
  ReceiveTimeout,
}
