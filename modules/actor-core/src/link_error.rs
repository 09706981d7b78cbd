//! Errors produced by the link and unlink operations.

use core::fmt;

use crate::start_error::StartError;

/// Failures reported by supervision link management.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkError {
  /// The link target already has a supervisor.
  AlreadySupervised,
  /// The unlink target is not a linked child of this reference.
  NotLinked,
  /// The reference kind does not support link management.
  Unsupported,
  /// A `start_link` linked the child but failed to start it; the link was
  /// rolled back.
  StartFailed(StartError),
}

impl fmt::Display for LinkError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::AlreadySupervised => f.write_str("target already has a supervisor"),
      | Self::NotLinked => f.write_str("target is not a linked child"),
      | Self::Unsupported => f.write_str("reference kind does not support linking"),
      | Self::StartFailed(error) => write!(f, "linked child failed to start: {error}"),
    }
  }
}
