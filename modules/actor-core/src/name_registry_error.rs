//! Errors produced by the process registry.

use alloc::string::String;
use core::fmt;

/// Failures registering a reference with the process registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameRegistryError {
  /// Another live reference already owns the requested name.
  DuplicateName(String),
}

impl fmt::Display for NameRegistryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::DuplicateName(name) => write!(f, "name already registered: {name}"),
    }
  }
}
