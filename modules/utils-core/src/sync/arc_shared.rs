//! Reference-counted shared handles used across the runtime.

#[cfg(not(feature = "force-portable-arc"))]
pub use alloc::sync::{Arc as ArcShared, Weak as WeakShared};

#[cfg(feature = "force-portable-arc")]
pub use portable_atomic_util::{Arc as ArcShared, Weak as WeakShared};
