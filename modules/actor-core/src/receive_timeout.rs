//! Notification delivered when a receive timeout fires.

/// Message an actor receives after its mailbox stayed empty for the
/// configured receive-timeout duration.
///
/// The timer is one-shot; it re-arms only after the next invocation leaves
/// the mailbox empty again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReceiveTimeout;
