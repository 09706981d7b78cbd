//! Assembly of a ready-to-use actor system on OS threads.

use std::num::NonZeroUsize;

use cygnet_actor_core_rs::{ActorSystem, ActorSystemConfig, LogLevel, LoggerSubscriber, DEFAULT_THROUGHPUT};
use cygnet_utils_core_rs::sync::ArcShared;

use crate::{
  monotonic_clock::MonotonicClock, thread_pool_executor::ThreadPoolExecutor, thread_timer::ThreadTimer,
  tracing_log_writer::TracingLogWriter,
};

const DEFAULT_WORKERS: usize = 4;

/// Actor system plus the OS resources backing it.
///
/// Dropping the runtime shuts everything down; [`StdActorRuntime::shutdown`]
/// does the same explicitly and is idempotent.
pub struct StdActorRuntime {
  system: ActorSystem,
  pool:   ArcShared<ThreadPoolExecutor>,
  timer:  ArcShared<ThreadTimer>,
}

impl StdActorRuntime {
  /// Creates a runtime with default settings.
  #[must_use]
  pub fn new() -> Self {
    StdActorRuntimeBuilder::new().build()
  }

  /// Returns a builder for customised runtimes.
  #[must_use]
  pub fn builder() -> StdActorRuntimeBuilder {
    StdActorRuntimeBuilder::new()
  }

  /// Returns the actor system.
  #[must_use]
  pub const fn system(&self) -> &ActorSystem {
    &self.system
  }

  /// Stops every actor, then the worker pool and the timer thread.
  pub fn shutdown(&self) {
    self.system.shutdown();
    self.pool.shutdown();
    self.timer.shutdown();
  }
}

impl Default for StdActorRuntime {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for StdActorRuntime {
  fn drop(&mut self) {
    self.shutdown();
  }
}

/// Configures worker count, throughput, and logging for a
/// [`StdActorRuntime`].
pub struct StdActorRuntimeBuilder {
  workers:    NonZeroUsize,
  throughput: u32,
  log_level:  Option<LogLevel>,
}

impl StdActorRuntimeBuilder {
  /// Creates a builder with default settings.
  #[must_use]
  pub fn new() -> Self {
    let workers = NonZeroUsize::new(DEFAULT_WORKERS).unwrap_or(NonZeroUsize::MIN);
    Self { workers, throughput: DEFAULT_THROUGHPUT, log_level: None }
  }

  /// Sets the number of dispatcher worker threads.
  #[must_use]
  pub const fn workers(mut self, workers: NonZeroUsize) -> Self {
    self.workers = workers;
    self
  }

  /// Sets the per-batch throughput quota.
  #[must_use]
  pub const fn throughput(mut self, throughput: u32) -> Self {
    self.throughput = throughput;
    self
  }

  /// Bridges event stream logging onto `tracing` at the given minimum
  /// level.
  #[must_use]
  pub const fn log_level(mut self, level: LogLevel) -> Self {
    self.log_level = Some(level);
    self
  }

  /// Builds the runtime: clock, timer thread, worker pool, actor system.
  #[must_use]
  pub fn build(self) -> StdActorRuntime {
    let clock = ArcShared::new(MonotonicClock::new());
    let timer = ArcShared::new(ThreadTimer::new(clock.clone()));
    let pool = ArcShared::new(ThreadPoolExecutor::new(self.workers));

    let config =
      ActorSystemConfig::new(clock, timer.clone(), pool.clone()).with_throughput(self.throughput);
    let system = ActorSystem::new(&config);

    if let Some(level) = self.log_level {
      let subscriber = LoggerSubscriber::new(level, ArcShared::new(TracingLogWriter::new()));
      system.state().event_stream().subscribe(ArcShared::new(subscriber));
    }

    StdActorRuntime { system, pool, timer }
  }
}

impl Default for StdActorRuntimeBuilder {
  fn default() -> Self {
    Self::new()
  }
}
