use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use cygnet_actor_core_rs::{
  ActorSystem, ActorSystemConfig, AnyMessage, Props, Actor, ActorContext, ActorError,
};
use cygnet_utils_core_rs::{sync::ArcShared, timing::ManualTimer};

use crate::monotonic_clock::MonotonicClock;

use super::ThreadPoolExecutor;

struct Counter {
  seen: ArcShared<AtomicUsize>,
}

impl Actor for Counter {
  fn receive(&mut self, _ctx: &mut ActorContext<'_>, _message: &AnyMessage) -> Result<(), ActorError> {
    self.seen.fetch_add(1, Ordering::AcqRel);
    Ok(())
  }
}

fn wait_until(deadline: Duration, condition: impl Fn() -> bool) -> bool {
  let start = Instant::now();
  while start.elapsed() < deadline {
    if condition() {
      return true;
    }
    std::thread::sleep(Duration::from_millis(1));
  }
  condition()
}

#[test]
fn pool_drains_dispatched_envelopes() {
  let pool = ArcShared::new(ThreadPoolExecutor::new(NonZeroUsize::new(2).expect("workers")));
  let config = ActorSystemConfig::new(
    ArcShared::new(MonotonicClock::new()),
    ArcShared::new(ManualTimer::new()),
    pool.clone(),
  );
  let system = ActorSystem::new(&config);

  let seen = ArcShared::new(AtomicUsize::new(0));
  let counter_seen = seen.clone();
  let reference = system
    .actor_of(&Props::from_fn(move || Counter { seen: counter_seen.clone() }), "counter")
    .expect("actor_of");

  for value in 0..100_u32 {
    reference.tell(AnyMessage::new(value)).expect("tell");
  }

  assert!(wait_until(Duration::from_secs(2), || seen.load(Ordering::Acquire) == 100));
  system.shutdown();
  pool.shutdown();
}

#[test]
fn shutdown_is_idempotent() {
  let pool = ThreadPoolExecutor::new(NonZeroUsize::new(1).expect("workers"));
  pool.shutdown();
  pool.shutdown();
}
