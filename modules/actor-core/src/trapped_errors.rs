//! Set of failure codes a supervisor strategy traps.

use alloc::{borrow::Cow, vec::Vec};

use crate::actor_error::ActorError;

/// Failure codes a strategy intercepts instead of stopping the child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrappedErrors {
  /// Trap every failure regardless of its code.
  Any,
  /// Trap only failures whose code appears in the list.
  Codes(Vec<Cow<'static, str>>),
}

impl TrappedErrors {
  /// Creates a trap set matching every failure.
  #[must_use]
  pub const fn any() -> Self {
    Self::Any
  }

  /// Creates a trap set from the provided failure codes.
  #[must_use]
  pub fn codes<I>(codes: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Cow<'static, str>>, {
    Self::Codes(codes.into_iter().map(Into::into).collect())
  }

  /// Returns `true` when `error` matches this trap set.
  #[must_use]
  pub fn traps(&self, error: &ActorError) -> bool {
    match self {
      | Self::Any => true,
      | Self::Codes(codes) => codes.iter().any(|code| code == error.code()),
    }
  }
}

#[cfg(test)]
mod tests;
