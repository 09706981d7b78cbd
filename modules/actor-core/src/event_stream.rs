//! Broadcast channel for runtime events.

use alloc::vec::Vec;

use portable_atomic::{AtomicU64, Ordering};

use cygnet_utils_core_rs::sync::{ArcShared, SpinSyncMutex, WeakShared};

use crate::event_stream_event::EventStreamEvent;

/// Observer of runtime events.
///
/// Notification happens on whichever thread published the event, so
/// implementations must not block and must tolerate concurrent calls.
pub trait EventStreamSubscriber: Send + Sync + 'static {
  /// Called for every event published while the subscriber is registered.
  fn notify(&self, event: &EventStreamEvent);
}

/// Fan-out of runtime events to registered subscribers.
pub struct EventStream {
  subscribers: SpinSyncMutex<Vec<(u64, ArcShared<dyn EventStreamSubscriber>)>>,
  next_token:  AtomicU64,
}

impl EventStream {
  /// Creates an event stream with no subscribers.
  #[must_use]
  pub const fn new() -> Self {
    Self { subscribers: SpinSyncMutex::new(Vec::new()), next_token: AtomicU64::new(1) }
  }

  /// Registers a subscriber and returns the token that removes it again.
  pub fn subscribe(&self, subscriber: ArcShared<dyn EventStreamSubscriber>) -> u64 {
    let token = self.next_token.fetch_add(1, Ordering::AcqRel);
    self.subscribers.lock().push((token, subscriber));
    token
  }

  /// Registers a subscriber and ties its registration to the returned
  /// guard's lifetime.
  #[must_use]
  pub fn subscribe_scoped(
    stream: &ArcShared<Self>,
    subscriber: ArcShared<dyn EventStreamSubscriber>,
  ) -> EventStreamSubscription {
    let token = stream.subscribe(subscriber);
    EventStreamSubscription { stream: ArcShared::downgrade(stream), token }
  }

  /// Removes a subscriber registration. Unknown tokens are ignored.
  pub fn unsubscribe(&self, token: u64) {
    self.subscribers.lock().retain(|(registered, _)| *registered != token);
  }

  /// Returns the number of registered subscribers.
  #[must_use]
  pub fn subscriber_count(&self) -> usize {
    self.subscribers.lock().len()
  }

  /// Delivers `event` to every registered subscriber.
  ///
  /// The subscriber list is snapshotted first; a subscriber may therefore
  /// still see one event after unsubscribing concurrently.
  pub fn publish(&self, event: &EventStreamEvent) {
    let snapshot: Vec<_> = self.subscribers.lock().iter().map(|(_, subscriber)| subscriber.clone()).collect();
    for subscriber in snapshot {
      subscriber.notify(event);
    }
  }
}

impl Default for EventStream {
  fn default() -> Self {
    Self::new()
  }
}

/// Guard removing a subscriber registration when dropped.
///
/// The guard holds the stream weakly: it neither keeps the stream alive nor
/// does anything when the stream is already gone.
pub struct EventStreamSubscription {
  stream: WeakShared<EventStream>,
  token:  u64,
}

impl EventStreamSubscription {
  /// Returns the registration token behind this guard.
  #[must_use]
  pub const fn token(&self) -> u64 {
    self.token
  }

  /// Removes the registration now instead of at the end of scope.
  pub fn detach(self) {}
}

impl Drop for EventStreamSubscription {
  fn drop(&mut self) {
    if let Some(stream) = self.stream.upgrade() {
      stream.unsubscribe(self.token);
    }
  }
}
