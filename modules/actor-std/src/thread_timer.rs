//! Timer thread driving one-shot schedules.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::{Condvar, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use portable_atomic::AtomicBool as PortableAtomicBool;

use cygnet_utils_core_rs::{
  sync::ArcShared,
  timing::{Clock, TimerDriver, TimerHandle, TimerTask},
};

struct TimerEntry {
  deadline:  Duration,
  sequence:  u64,
  cancelled: ArcShared<PortableAtomicBool>,
  task:      Option<TimerTask>,
}

struct TimerShared {
  clock:    ArcShared<dyn Clock>,
  queue:    Mutex<TimerQueue>,
  wakeup:   Condvar,
  shutdown: AtomicBool,
}

struct TimerQueue {
  entries:  Vec<TimerEntry>,
  sequence: u64,
}

/// One background thread firing scheduled tasks when their deadline on the
/// shared clock passes.
///
/// Entries with equal deadlines fire in scheduling order. Tasks run on the
/// timer thread; they are expected to do nothing beyond enqueuing a message.
pub struct ThreadTimer {
  shared: ArcShared<TimerShared>,
  thread: Mutex<Option<JoinHandle<()>>>,
}

impl ThreadTimer {
  /// Spawns the timer thread against the provided clock.
  #[must_use]
  pub fn new(clock: ArcShared<dyn Clock>) -> Self {
    let shared = ArcShared::new(TimerShared {
      clock,
      queue: Mutex::new(TimerQueue { entries: Vec::new(), sequence: 0 }),
      wakeup: Condvar::new(),
      shutdown: AtomicBool::new(false),
    });

    let worker = shared.clone();
    let thread = std::thread::Builder::new()
      .name(String::from("cygnet-timer"))
      .spawn(move || Self::timer_loop(&worker))
      .ok();

    Self { shared, thread: Mutex::new(thread) }
  }

  /// Stops the timer thread; pending entries never fire. Idempotent.
  pub fn shutdown(&self) {
    self.shared.shutdown.store(true, Ordering::Release);
    self.shared.wakeup.notify_all();
    if let Ok(mut slot) = self.thread.lock() {
      if let Some(handle) = slot.take() {
        let _ = handle.join();
      }
    }
  }

  fn timer_loop(shared: &TimerShared) {
    let Ok(mut queue) = shared.queue.lock() else {
      return;
    };
    loop {
      if shared.shutdown.load(Ordering::Acquire) {
        return;
      }

      let now = shared.clock.now();
      let mut due = Vec::new();
      let mut index = 0;
      while index < queue.entries.len() {
        if queue.entries[index].deadline <= now {
          due.push(queue.entries.remove(index));
        } else {
          index += 1;
        }
      }

      if !due.is_empty() {
        due.sort_by_key(|entry| (entry.deadline, entry.sequence));
        drop(queue);
        for mut entry in due {
          if !entry.cancelled.load(Ordering::Acquire) {
            if let Some(task) = entry.task.take() {
              task();
            }
          }
        }
        queue = match shared.queue.lock() {
          | Ok(queue) => queue,
          | Err(_) => return,
        };
        continue;
      }

      let wait = queue
        .entries
        .iter()
        .map(|entry| entry.deadline.saturating_sub(now))
        .min()
        .unwrap_or(Duration::from_millis(50));
      queue = match shared.wakeup.wait_timeout(queue, wait) {
        | Ok((queue, _)) => queue,
        | Err(_) => return,
      };
    }
  }
}

impl TimerDriver for ThreadTimer {
  fn schedule_once(&self, delay: Duration, task: TimerTask) -> TimerHandle {
    let cancelled = ArcShared::new(PortableAtomicBool::new(false));
    let deadline = self.shared.clock.now().saturating_add(delay);

    if let Ok(mut queue) = self.shared.queue.lock() {
      queue.sequence += 1;
      let sequence = queue.sequence;
      queue.entries.push(TimerEntry { deadline, sequence, cancelled: cancelled.clone(), task: Some(task) });
    }
    self.shared.wakeup.notify_one();

    TimerHandle::new(cancelled)
  }
}

impl Drop for ThreadTimer {
  fn drop(&mut self) {
    self.shutdown();
  }
}
