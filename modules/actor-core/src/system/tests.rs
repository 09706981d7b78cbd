use alloc::{string::String, vec::Vec};
use core::time::Duration;

use cygnet_utils_core_rs::{
  sync::{ArcShared, SpinSyncMutex},
  timing::{ManualClock, ManualTimer},
};

use super::ActorSystem;
use crate::{
  actor::Actor,
  actor_context::ActorContext,
  actor_error::ActorError,
  any_message::AnyMessage,
  dispatcher::CallerExecutor,
  event_stream::{EventStream, EventStreamSubscriber},
  event_stream_event::EventStreamEvent,
  lifecycle_status::LifecycleStatus,
  props::Props,
  spawn_error::SpawnError,
  system_config::ActorSystemConfig,
};

fn manual_system() -> ActorSystem {
  let config = ActorSystemConfig::new(
    ArcShared::new(ManualClock::new()),
    ArcShared::new(ManualTimer::new()),
    ArcShared::new(CallerExecutor::new()),
  );
  ActorSystem::new(&config)
}

struct Echo;

impl Actor for Echo {
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: &AnyMessage) -> Result<(), ActorError> {
    if let Some(value) = message.downcast_ref::<u32>() {
      let _ = ctx.try_reply(AnyMessage::new(*value));
    }
    Ok(())
  }
}

#[test]
fn spawn_registers_and_lookup_finds_the_reference() {
  let system = manual_system();
  let reference = system.spawn(&Props::from_fn(|| Echo), "echo").expect("spawn");

  let found = system.lookup("echo").expect("lookup by name");
  assert_eq!(found.pid(), reference.pid());

  let Some(pid) = reference.pid() else { panic!("pid") };
  let by_pid = system.lookup_pid(pid).expect("lookup by pid");
  assert_eq!(by_pid.pid(), reference.pid());
}

#[test]
fn duplicate_names_are_rejected_at_spawn() {
  let system = manual_system();
  let _first = system.spawn(&Props::from_fn(|| Echo), "echo").expect("first spawn");

  match system.spawn(&Props::from_fn(|| Echo), "echo") {
    | Err(SpawnError::DuplicateName(name)) => assert_eq!(name, "echo"),
    | other => panic!("expected DuplicateName, got {other:?}"),
  }
}

#[test]
fn spawn_unnamed_references_are_only_reachable_by_pid() {
  let system = manual_system();
  let reference = system.spawn_unnamed(&Props::from_fn(|| Echo)).expect("spawn");

  let Some(pid) = reference.pid() else { panic!("pid") };
  assert!(system.lookup_pid(pid).is_some());
  assert_eq!(system.state().registered_count(), 1);
}

#[test]
fn stop_releases_the_name_for_reuse() {
  let system = manual_system();
  let first = system.actor_of(&Props::from_fn(|| Echo), "echo").expect("first");
  first.stop();

  assert!(system.lookup("echo").is_none());
  let second = system.actor_of(&Props::from_fn(|| Echo), "echo").expect("second");
  assert_ne!(second.pid(), first.pid());
}

#[test]
fn shutdown_stops_every_registered_reference() {
  let system = manual_system();
  let first = system.actor_of(&Props::from_fn(|| Echo), "one").expect("one");
  let second = system.actor_of(&Props::from_fn(|| Echo), "two").expect("two");

  system.shutdown();

  assert_eq!(first.status(), LifecycleStatus::Shutdown);
  assert_eq!(second.status(), LifecycleStatus::Shutdown);
  assert_eq!(system.state().registered_count(), 0);
  assert_eq!(system.spawn(&Props::from_fn(|| Echo), "late"), Err(SpawnError::Terminated));
}

struct Relay {
  target: crate::actor_ref::ActorRef,
}

impl Actor for Relay {
  fn receive(&mut self, ctx: &mut ActorContext<'_>, message: &AnyMessage) -> Result<(), ActorError> {
    if let Some(value) = message.downcast_ref::<u32>() {
      let _ = ctx.forward(&self.target, AnyMessage::new(*value));
    }
    Ok(())
  }
}

#[test]
fn forward_preserves_the_original_reply_channel() {
  let system = manual_system();
  let responder = system.actor_of(&Props::from_fn(|| Echo), "responder").expect("responder");

  let target = responder.clone();
  let relay = system
    .actor_of(&Props::from_fn(move || Relay { target: target.clone() }), "relay")
    .expect("relay");

  let future = relay.ask(AnyMessage::new(7_u32), Duration::from_secs(1)).expect("ask");
  let reply = future.wait().expect("reply");
  assert_eq!(reply.downcast_ref::<u32>(), Some(&7));
}

struct DeadletterProbe {
  seen: ArcShared<SpinSyncMutex<Vec<String>>>,
}

impl EventStreamSubscriber for DeadletterProbe {
  fn notify(&self, event: &EventStreamEvent) {
    if let EventStreamEvent::Deadletter(entry) = event {
      let label = match entry.pid() {
        | Some(pid) => alloc::format!("deadletter:{pid}"),
        | None => String::from("deadletter:unknown"),
      };
      self.seen.lock().push(label);
    }
  }
}

#[test]
fn sends_to_a_stopped_reference_are_dead_lettered() {
  let system = manual_system();
  let seen = ArcShared::new(SpinSyncMutex::new(Vec::new()));
  let _subscription = EventStream::subscribe_scoped(
    system.state().event_stream(),
    ArcShared::new(DeadletterProbe { seen: seen.clone() }),
  );

  let reference = system.actor_of(&Props::from_fn(|| Echo), "echo").expect("actor_of");
  reference.stop();
  let _ = reference.tell(AnyMessage::new(1_u32));

  assert_eq!(seen.lock().len(), 1);
}
