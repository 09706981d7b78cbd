//! Fixed-size worker pool draining dispatcher tasks.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::{Condvar, Mutex};
use std::thread::JoinHandle;

use cygnet_actor_core_rs::{DispatchExecutor, DispatchTask};
use cygnet_utils_core_rs::sync::ArcShared;

struct PoolShared {
  queue:    Mutex<PoolQueue>,
  available: Condvar,
}

struct PoolQueue {
  tasks:    VecDeque<DispatchTask>,
  shutdown: bool,
}

/// Worker pool executing drain batches on dedicated OS threads.
///
/// Workers park on a condition variable while no work is queued. Shutdown
/// lets queued tasks finish before the workers exit.
pub struct ThreadPoolExecutor {
  shared:  ArcShared<PoolShared>,
  workers: Mutex<Vec<JoinHandle<()>>>,
}

impl ThreadPoolExecutor {
  /// Spawns `worker_count` threads ready to drain mailboxes.
  #[must_use]
  pub fn new(worker_count: NonZeroUsize) -> Self {
    let shared = ArcShared::new(PoolShared {
      queue: Mutex::new(PoolQueue { tasks: VecDeque::new(), shutdown: false }),
      available: Condvar::new(),
    });

    let mut workers = Vec::with_capacity(worker_count.get());
    for index in 0..worker_count.get() {
      let shared = shared.clone();
      let handle = std::thread::Builder::new()
        .name(format!("cygnet-dispatch-{index}"))
        .spawn(move || Self::worker_loop(&shared));
      match handle {
        | Ok(handle) => workers.push(handle),
        | Err(_) => break,
      }
    }

    Self { shared, workers: Mutex::new(workers) }
  }

  /// Drains remaining tasks and joins every worker. Idempotent.
  pub fn shutdown(&self) {
    {
      let Ok(mut queue) = self.shared.queue.lock() else {
        return;
      };
      queue.shutdown = true;
    }
    self.shared.available.notify_all();

    let workers = {
      let Ok(mut workers) = self.workers.lock() else {
        return;
      };
      core::mem::take(&mut *workers)
    };
    for worker in workers {
      let _ = worker.join();
    }
  }

  fn worker_loop(shared: &PoolShared) {
    loop {
      let task = {
        let Ok(mut queue) = shared.queue.lock() else {
          return;
        };
        loop {
          if let Some(task) = queue.tasks.pop_front() {
            break Some(task);
          }
          if queue.shutdown {
            break None;
          }
          queue = match shared.available.wait(queue) {
            | Ok(queue) => queue,
            | Err(_) => return,
          };
        }
      };

      match task {
        | Some(task) => task.run(),
        | None => return,
      }
    }
  }
}

impl DispatchExecutor for ThreadPoolExecutor {
  fn execute(&self, task: DispatchTask) {
    if let Ok(mut queue) = self.shared.queue.lock() {
      if queue.shutdown {
        return;
      }
      queue.tasks.push_back(task);
    }
    self.shared.available.notify_one();
  }
}

impl Drop for ThreadPoolExecutor {
  fn drop(&mut self) {
    self.shutdown();
  }
}

#[cfg(test)]
mod tests;
