use alloc::{vec, vec::Vec};
use core::num::NonZeroUsize;
use core::time::Duration;

use cygnet_utils_core_rs::{sync::ArcShared, timing::ManualClock};
use proptest::prelude::*;

use super::{Mailbox, MailboxAppendError, MailboxPolicy, QueueMailbox};
use crate::{actor_ref::ActorRef, any_message::AnyMessage, envelope::Envelope};

fn mailbox(policy: MailboxPolicy) -> QueueMailbox {
  QueueMailbox::new(policy, ArcShared::new(ManualClock::new()))
}

fn envelope(value: u32) -> Envelope {
  Envelope::user(ActorRef::dangling(), AnyMessage::new(value))
}

fn value_of(envelope: &Envelope) -> u32 {
  let message = envelope.payload().as_user().expect("user envelope");
  *message.downcast_ref::<u32>().expect("u32 payload")
}

#[test]
fn dequeue_preserves_enqueue_order() {
  let mailbox = mailbox(MailboxPolicy::unbounded());
  for value in [3_u32, 1, 4, 1, 5] {
    mailbox.enqueue(envelope(value)).expect("enqueue");
  }

  let mut drained = Vec::new();
  while let Some(envelope) = mailbox.dequeue() {
    drained.push(value_of(&envelope));
  }
  assert_eq!(drained, vec![3, 1, 4, 1, 5]);
  assert!(mailbox.is_empty());
}

#[test]
fn bounded_mailbox_without_timeout_rejects_when_full() {
  let mailbox = mailbox(MailboxPolicy::bounded(NonZeroUsize::new(2).expect("capacity"), None));
  mailbox.enqueue(envelope(1)).expect("first");
  mailbox.enqueue(envelope(2)).expect("second");

  match mailbox.enqueue(envelope(3)) {
    | Err(MailboxAppendError::Full(rejected)) => assert_eq!(value_of(&rejected), 3),
    | other => panic!("expected Full, got {other:?}"),
  }
  assert_eq!(mailbox.len(), 2);
}

#[test]
fn bounded_mailbox_times_out_once_the_deadline_passes() {
  let policy = MailboxPolicy::bounded(NonZeroUsize::new(1).expect("capacity"), Some(Duration::ZERO));
  let mailbox = mailbox(policy);
  mailbox.enqueue(envelope(1)).expect("first");

  match mailbox.enqueue(envelope(2)) {
    | Err(MailboxAppendError::TimedOut(rejected)) => assert_eq!(value_of(&rejected), 2),
    | other => panic!("expected TimedOut, got {other:?}"),
  }
}

#[test]
fn dequeue_frees_space_for_bounded_producers() {
  let mailbox = mailbox(MailboxPolicy::bounded(NonZeroUsize::new(1).expect("capacity"), None));
  mailbox.enqueue(envelope(1)).expect("first");
  assert_eq!(value_of(&mailbox.dequeue().expect("head")), 1);
  mailbox.enqueue(envelope(2)).expect("after drain");
}

proptest! {
  #[test]
  fn fifo_holds_for_arbitrary_sequences(values in proptest::collection::vec(any::<u32>(), 0..64)) {
    let mailbox = mailbox(MailboxPolicy::unbounded());
    for value in &values {
      mailbox.enqueue(envelope(*value)).expect("enqueue");
    }

    let mut drained = Vec::new();
    while let Some(envelope) = mailbox.dequeue() {
      drained.push(value_of(&envelope));
    }
    prop_assert_eq!(drained, values);
  }
}
