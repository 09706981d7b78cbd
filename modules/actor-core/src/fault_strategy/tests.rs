use core::time::Duration;

use super::FaultStrategy;
use crate::{actor_error::ActorError, trapped_errors::TrappedErrors};

#[test]
fn no_strategy_traps_nothing() {
  let strategy = FaultStrategy::NoStrategy;
  assert!(!strategy.traps(&ActorError::recoverable("boom")));
  assert_eq!(strategy.budget(), (None, None));
}

#[test]
fn one_for_one_exposes_budget() {
  let strategy = FaultStrategy::one_for_one(TrappedErrors::any(), Some(3), Some(Duration::from_secs(1)));
  assert!(strategy.traps(&ActorError::recoverable("boom")));
  assert!(!strategy.is_all_for_one());
  assert_eq!(strategy.budget(), (Some(3), Some(Duration::from_secs(1))));
}

#[test]
fn all_for_one_respects_trap_codes() {
  let strategy = FaultStrategy::all_for_one(TrappedErrors::codes(["io"]), None, None);
  assert!(strategy.is_all_for_one());
  assert!(strategy.traps(&ActorError::recoverable("io")));
  assert!(!strategy.traps(&ActorError::recoverable("oom")));
}
