//! Failure modes surfaced through ask reply futures.

use core::fmt;

use crate::{actor_error::ActorError, any_message::AnyMessage};

/// Outcome type carried by ask reply futures.
pub type AskResult = Result<AnyMessage, AskError>;

/// Failures completing an ask reply future.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AskError {
  /// The reply deadline elapsed before a response arrived. Any later reply
  /// is discarded.
  TimedOut,
  /// The target actor stopped while the request was pending.
  ActorStopped,
  /// The target actor failed while handling the request.
  Failed(ActorError),
}

impl fmt::Display for AskError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::TimedOut => f.write_str("ask timed out"),
      | Self::ActorStopped => f.write_str("target actor stopped"),
      | Self::Failed(error) => write!(f, "target actor failed: {error}"),
    }
  }
}
