//! Shared-handle aliases and synchronization primitives.

mod arc_shared;
mod spin_sync_mutex;

pub use arc_shared::{ArcShared, WeakShared};
pub use spin_sync_mutex::SpinSyncMutex;
