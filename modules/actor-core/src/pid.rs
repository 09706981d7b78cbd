//! Stable identity assigned to every actor reference.

use core::fmt;

/// Unique identifier of one actor within its system.
///
/// The value comes from the system's spawn counter and stays with the
/// reference for its whole life, restarts included. Two references name the
/// same actor exactly when their identifiers are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pid {
  raw: u64,
}

impl Pid {
  /// Wraps an already-allocated identifier value.
  #[must_use]
  pub const fn from_raw(raw: u64) -> Self {
    Self { raw }
  }

  /// Returns the underlying identifier value.
  #[must_use]
  pub const fn raw(self) -> u64 {
    self.raw
  }
}

impl fmt::Display for Pid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.raw)
  }
}
