use std::time::Duration;

use cygnet_utils_core_rs::timing::Clock;

use super::MonotonicClock;

#[test]
fn reported_time_moves_forward() {
  let clock = MonotonicClock::new();
  let first = clock.now();
  std::thread::sleep(Duration::from_millis(5));
  let second = clock.now();
  assert!(second > first);
}
