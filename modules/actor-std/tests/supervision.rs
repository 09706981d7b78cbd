use std::time::{Duration, Instant};

use cygnet_actor_core_rs::{
  Actor, ActorContext, ActorError, AnyMessage, FaultStrategy, LifeCycle, LifecycleStatus, MaxRestartsExceeded,
  Props, TrappedErrors,
};
use cygnet_utils_core_rs::sync::{ArcShared, SpinSyncMutex};

use cygnet_actor_std_rs::StdActorRuntime;

type Log = ArcShared<SpinSyncMutex<Vec<String>>>;

fn new_log() -> Log {
  ArcShared::new(SpinSyncMutex::new(Vec::new()))
}

fn count(log: &Log, entry: &str) -> usize {
  log.lock().iter().filter(|line| line.as_str() == entry).count()
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

struct Fail;

struct Worker {
  tag: &'static str,
  log: Log,
}

impl Worker {
  fn record(&self, entry: &str) {
    self.log.lock().push(format!("{}:{}", self.tag, entry));
  }
}

impl Actor for Worker {
  fn receive(&mut self, _ctx: &mut ActorContext<'_>, message: &AnyMessage) -> Result<(), ActorError> {
    if message.downcast_ref::<Fail>().is_some() {
      return Err(ActorError::recoverable("boom"));
    }
    if let Some(text) = message.downcast_ref::<&str>() {
      self.record(text);
    }
    Ok(())
  }

  fn pre_restart(
    &mut self,
    _ctx: &mut ActorContext<'_>,
    _reason: &ActorError,
    _last_message: Option<&AnyMessage>,
  ) -> Result<(), ActorError> {
    self.record("pre_restart");
    Ok(())
  }

  fn post_restart(&mut self, _ctx: &mut ActorContext<'_>, _reason: &ActorError) -> Result<(), ActorError> {
    self.record("post_restart");
    Ok(())
  }

  fn post_stop(&mut self, _ctx: &mut ActorContext<'_>) -> Result<(), ActorError> {
    self.record("post_stop");
    Ok(())
  }
}

fn worker_props(tag: &'static str, log: &Log) -> Props {
  let log = log.clone();
  Props::from_fn(move || Worker { tag, log: log.clone() }).with_life_cycle(LifeCycle::Permanent)
}

struct Supervisor {
  escalations: Log,
}

impl Actor for Supervisor {
  fn receive(&mut self, _ctx: &mut ActorContext<'_>, message: &AnyMessage) -> Result<(), ActorError> {
    if message.downcast_ref::<MaxRestartsExceeded>().is_some() {
      self.escalations.lock().push(String::from("max_restarts_exceeded"));
    }
    Ok(())
  }
}

fn supervisor_props(strategy: FaultStrategy, escalations: &Log) -> Props {
  let escalations = escalations.clone();
  Props::from_fn(move || Supervisor { escalations: escalations.clone() }).with_strategy(strategy)
}

#[test]
fn one_for_one_restarts_the_failing_child_in_place() {
  let runtime = StdActorRuntime::new();
  let log = new_log();
  let escalations = new_log();

  let strategy = FaultStrategy::one_for_one(TrappedErrors::any(), Some(3), Some(Duration::from_millis(1_000)));
  let parent =
    runtime.system().actor_of(&supervisor_props(strategy, &escalations), "parent").expect("parent");
  let child = runtime.system().actor_of(&worker_props("child", &log), "child").expect("child");
  parent.link(&child).expect("link");

  let pid_before = child.pid();
  child.tell(AnyMessage::new(Fail)).expect("failing tell");

  assert!(wait_until(Duration::from_secs(2), || count(&log, "child:post_restart") == 1));
  assert_eq!(count(&log, "child:pre_restart"), 1);
  assert_eq!(child.pid(), pid_before);

  child.tell(AnyMessage::new("after")).expect("tell after restart");
  assert!(wait_until(Duration::from_secs(2), || count(&log, "child:after") == 1));
  assert_eq!(child.status(), LifecycleStatus::Running);

  runtime.shutdown();
}

#[test]
fn all_for_one_restarts_every_sibling_exactly_once() {
  let runtime = StdActorRuntime::new();
  let log = new_log();
  let escalations = new_log();

  let strategy = FaultStrategy::all_for_one(TrappedErrors::any(), Some(5), Some(Duration::from_millis(1_000)));
  let parent =
    runtime.system().actor_of(&supervisor_props(strategy, &escalations), "parent").expect("parent");

  let mut children = Vec::new();
  for (tag, name) in [("c1", "c1"), ("c2", "c2"), ("c3", "c3")] {
    let child = runtime.system().actor_of(&worker_props(tag, &log), name).expect("child");
    parent.link(&child).expect("link");
    children.push(child);
  }

  children[1].tell(AnyMessage::new(Fail)).expect("failing tell");

  assert!(wait_until(Duration::from_secs(2), || {
    count(&log, "c1:post_restart") == 1 && count(&log, "c2:post_restart") == 1 && count(&log, "c3:post_restart") == 1
  }));

  for child in &children {
    assert_eq!(child.status(), LifecycleStatus::Running);
  }

  runtime.shutdown();
}

#[test]
fn exceeding_the_restart_budget_escalates_and_stops() {
  let runtime = StdActorRuntime::new();
  let log = new_log();
  let escalations = new_log();

  let strategy = FaultStrategy::one_for_one(TrappedErrors::any(), Some(2), Some(Duration::from_secs(60)));
  let parent =
    runtime.system().actor_of(&supervisor_props(strategy, &escalations), "parent").expect("parent");
  let child = runtime.system().actor_of(&worker_props("child", &log), "child").expect("child");
  parent.link(&child).expect("link");

  for _ in 0..2 {
    child.tell(AnyMessage::new(Fail)).expect("trapped failure");
  }
  assert!(wait_until(Duration::from_secs(2), || count(&log, "child:post_restart") == 2));

  child.tell(AnyMessage::new(Fail)).expect("budget-exceeding failure");

  assert!(wait_until(Duration::from_secs(2), || child.status() == LifecycleStatus::Shutdown));
  assert!(wait_until(Duration::from_secs(2), || count(&escalations, "max_restarts_exceeded") == 1));
  assert_eq!(count(&log, "child:post_restart"), 2);
  assert!(parent.linked_children().is_empty());

  runtime.shutdown();
}

#[test]
fn temporary_child_is_stopped_not_restarted() {
  let runtime = StdActorRuntime::new();
  let log = new_log();
  let escalations = new_log();

  let strategy = FaultStrategy::one_for_one(TrappedErrors::any(), Some(3), None);
  let parent =
    runtime.system().actor_of(&supervisor_props(strategy, &escalations), "parent").expect("parent");
  let child = {
    let log = log.clone();
    let props = Props::from_fn(move || Worker { tag: "child", log: log.clone() })
      .with_life_cycle(LifeCycle::Temporary);
    runtime.system().actor_of(&props, "child").expect("child")
  };
  parent.link(&child).expect("link");

  child.tell(AnyMessage::new(Fail)).expect("failing tell");

  assert!(wait_until(Duration::from_secs(2), || child.status() == LifecycleStatus::Shutdown));
  assert!(wait_until(Duration::from_secs(2), || parent.linked_children().is_empty()));
  assert_eq!(count(&log, "child:post_restart"), 0);
  assert_eq!(count(&log, "child:post_stop"), 1);

  runtime.shutdown();
}

#[test]
fn stop_is_idempotent_and_terminal_across_threads() {
  let runtime = StdActorRuntime::new();
  let log = new_log();
  let child = runtime.system().actor_of(&worker_props("child", &log), "child").expect("child");

  let mut stoppers = Vec::new();
  for _ in 0..4 {
    let reference = child.clone();
    stoppers.push(std::thread::spawn(move || reference.stop()));
  }
  for stopper in stoppers {
    stopper.join().expect("stopper thread");
  }

  assert_eq!(child.status(), LifecycleStatus::Shutdown);
  assert_eq!(count(&log, "child:post_stop"), 1);
  assert!(child.start().is_err());
  assert_eq!(child.status(), LifecycleStatus::Shutdown);

  runtime.shutdown();
}

#[test]
fn supervision_survives_a_storm_of_failures_and_work() {
  let runtime = StdActorRuntime::new();
  let log = new_log();
  let escalations = new_log();

  let strategy = FaultStrategy::one_for_one(TrappedErrors::any(), None, None);
  let parent =
    runtime.system().actor_of(&supervisor_props(strategy, &escalations), "parent").expect("parent");
  let child = runtime.system().actor_of(&worker_props("child", &log), "child").expect("child");
  parent.link(&child).expect("link");

  for _ in 0..10 {
    child.tell(AnyMessage::new(Fail)).expect("failure");
    child.tell(AnyMessage::new("work")).expect("work");
  }

  assert!(wait_until(Duration::from_secs(5), || count(&log, "child:post_restart") == 10));
  assert!(wait_until(Duration::from_secs(5), || child.status() == LifecycleStatus::Running));
  assert!(escalations.lock().is_empty());

  runtime.shutdown();
}
