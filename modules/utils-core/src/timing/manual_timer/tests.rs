use alloc::vec::Vec;
use core::time::Duration;

use super::ManualTimer;
use crate::{
  sync::{ArcShared, SpinSyncMutex},
  timing::TimerDriver,
};

fn recorder() -> (ArcShared<SpinSyncMutex<Vec<u32>>>, impl Fn(u32) -> alloc::boxed::Box<dyn FnOnce() + Send>) {
  let log = ArcShared::new(SpinSyncMutex::new(Vec::new()));
  let make = {
    let log = log.clone();
    move |value: u32| {
      let log = log.clone();
      alloc::boxed::Box::new(move || log.lock().push(value)) as alloc::boxed::Box<dyn FnOnce() + Send>
    }
  };
  (log, make)
}

#[test]
fn advance_fires_due_entries_in_order() {
  let timer = ManualTimer::new();
  let (log, task) = recorder();

  timer.schedule_once(Duration::from_millis(10), task(1));
  timer.schedule_once(Duration::from_millis(30), task(2));
  timer.schedule_once(Duration::from_millis(10), task(3));

  timer.advance(Duration::from_millis(10));
  assert_eq!(log.lock().clone(), [1, 3]);
  assert_eq!(timer.pending(), 1);

  timer.advance(Duration::from_millis(20));
  assert_eq!(log.lock().clone(), [1, 3, 2]);
}

#[test]
fn cancelled_entry_never_fires() {
  let timer = ManualTimer::new();
  let (log, task) = recorder();

  let handle = timer.schedule_once(Duration::from_millis(5), task(7));
  handle.cancel();
  timer.advance(Duration::from_millis(5));

  assert!(log.lock().is_empty());
  assert!(handle.is_cancelled());
}
