use alloc::string::String;

use super::NameRegistry;
use crate::{actor_ref::ActorRef, name_registry_error::NameRegistryError, pid::Pid};

fn reference(value: u64) -> (Pid, ActorRef) {
  let pid = Pid::from_raw(value);
  (pid, ActorRef::detached(pid))
}

#[test]
fn register_and_lookup_by_name_and_pid() {
  let mut registry = NameRegistry::new();
  let (pid, actor_ref) = reference(1);
  registry.register(pid, Some(String::from("worker")), actor_ref).expect("register");

  assert_eq!(registry.lookup("worker").and_then(|r| r.pid()), Some(pid));
  assert_eq!(registry.lookup_pid(pid).and_then(|r| r.pid()), Some(pid));
  assert_eq!(registry.len(), 1);
}

#[test]
fn duplicate_names_are_rejected() {
  let mut registry = NameRegistry::new();
  let (first_pid, first) = reference(1);
  let (second_pid, second) = reference(2);

  registry.register(first_pid, Some(String::from("worker")), first).expect("first register");
  let outcome = registry.register(second_pid, Some(String::from("worker")), second);

  assert_eq!(outcome, Err(NameRegistryError::DuplicateName(String::from("worker"))));
}

#[test]
fn unregister_releases_the_name() {
  let mut registry = NameRegistry::new();
  let (pid, actor_ref) = reference(3);
  registry.register(pid, Some(String::from("short-lived")), actor_ref).expect("register");

  registry.unregister(pid);

  assert!(registry.lookup("short-lived").is_none());
  assert!(registry.lookup_pid(pid).is_none());
  assert!(registry.is_empty());

  let (again_pid, again) = reference(4);
  registry.register(again_pid, Some(String::from("short-lived")), again).expect("name reusable");
}

#[test]
fn unnamed_references_are_listed() {
  let mut registry = NameRegistry::new();
  let (pid, actor_ref) = reference(5);
  registry.register(pid, None, actor_ref).expect("register");

  assert_eq!(registry.actor_refs().len(), 1);
  assert!(registry.lookup_pid(pid).is_some());
}
