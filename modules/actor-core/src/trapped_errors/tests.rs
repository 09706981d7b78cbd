use super::TrappedErrors;
use crate::actor_error::ActorError;

#[test]
fn any_traps_every_code() {
  let trap = TrappedErrors::any();
  assert!(trap.traps(&ActorError::recoverable("boom")));
  assert!(trap.traps(&ActorError::fatal("other")));
}

#[test]
fn codes_trap_only_listed_failures() {
  let trap = TrappedErrors::codes(["io", "parse"]);
  assert!(trap.traps(&ActorError::recoverable("io")));
  assert!(trap.traps(&ActorError::recoverable("parse")));
  assert!(!trap.traps(&ActorError::recoverable("oom")));
}
