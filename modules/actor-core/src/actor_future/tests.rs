use super::ActorFuture;

#[test]
fn first_completion_wins() {
  let future: ActorFuture<u32> = ActorFuture::pending();
  assert!(!future.is_completed());
  assert!(future.complete(1));
  assert!(!future.complete(2));
  assert_eq!(future.try_take(), Some(1));
}

#[test]
fn try_take_is_none_while_pending() {
  let future: ActorFuture<u32> = ActorFuture::pending();
  assert_eq!(future.try_take(), None);
}

#[test]
fn clones_share_completion_state() {
  let future: ActorFuture<&str> = ActorFuture::pending();
  let observer = future.clone();
  assert!(future.complete("done"));
  assert!(observer.is_completed());
  assert_eq!(observer.try_take(), Some("done"));
}

#[test]
fn wait_returns_the_completed_value() {
  let future: ActorFuture<u8> = ActorFuture::pending();
  future.complete(7);
  assert_eq!(future.wait(), 7);
}
