//! Spinlock-backed mutex used by the `no_std` runtime crates.

/// Thin wrapper around [`spin::Mutex`] with the lock surface the runtime
/// relies on.
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new spinlock-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Locks the mutex and returns a guard to the protected value.
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }

  /// Consumes the wrapper and returns the underlying value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }
}

impl<T: Default> Default for SpinSyncMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}
