//! Actor construction configuration.

mod actor_factory;

pub use actor_factory::ActorFactory;

use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use cygnet_utils_core_rs::sync::ArcShared;

use crate::{
  actor::Actor, dispatcher::Dispatcher, fault_strategy::FaultStrategy, life_cycle::LifeCycle,
  mailbox::MailboxPolicy,
};

/// Configuration data used when creating actor references.
///
/// Everything is fixed at spawn time; in particular the dispatcher override
/// only applies because the reference has not started yet.
#[derive(Clone)]
pub struct Props {
  factory:         ArcShared<dyn ActorFactory>,
  mailbox:         MailboxPolicy,
  strategy:        FaultStrategy,
  life_cycle:      LifeCycle,
  receive_timeout: Option<Duration>,
  ask_timeout:     Option<Duration>,
  dispatcher:      Option<Dispatcher>,
}

impl Props {
  /// Creates properties around an existing factory.
  #[must_use]
  pub fn new(factory: ArcShared<dyn ActorFactory>) -> Self {
    Self {
      factory,
      mailbox: MailboxPolicy::default(),
      strategy: FaultStrategy::default(),
      life_cycle: LifeCycle::default(),
      receive_timeout: None,
      ask_timeout: None,
      dispatcher: None,
    }
  }

  /// Creates properties from a closure producing fresh actor instances.
  #[must_use]
  pub fn from_fn<A, F>(factory: F) -> Self
  where
    A: Actor + 'static,
    F: Fn() -> A + Send + Sync + 'static, {
    struct FnFactory<F>(F);

    impl<A, F> ActorFactory for FnFactory<F>
    where
      A: Actor + 'static,
      F: Fn() -> A + Send + Sync,
    {
      fn create(&self) -> Box<dyn Actor + Send> {
        Box::new((self.0)())
      }
    }

    Self::new(ArcShared::new(FnFactory(factory)))
  }

  /// Returns the actor factory.
  #[must_use]
  pub fn factory(&self) -> &ArcShared<dyn ActorFactory> {
    &self.factory
  }

  /// Returns the mailbox policy.
  #[must_use]
  pub const fn mailbox(&self) -> &MailboxPolicy {
    &self.mailbox
  }

  /// Updates the mailbox policy.
  #[must_use]
  pub fn with_mailbox(mut self, mailbox: MailboxPolicy) -> Self {
    self.mailbox = mailbox;
    self
  }

  /// Returns the fault-handling strategy installed on the reference.
  #[must_use]
  pub const fn strategy(&self) -> &FaultStrategy {
    &self.strategy
  }

  /// Updates the fault-handling strategy.
  #[must_use]
  pub fn with_strategy(mut self, strategy: FaultStrategy) -> Self {
    self.strategy = strategy;
    self
  }

  /// Returns the lifecycle policy.
  #[must_use]
  pub const fn life_cycle(&self) -> LifeCycle {
    self.life_cycle
  }

  /// Updates the lifecycle policy.
  #[must_use]
  pub fn with_life_cycle(mut self, life_cycle: LifeCycle) -> Self {
    self.life_cycle = life_cycle;
    self
  }

  /// Returns the receive timeout.
  #[must_use]
  pub const fn receive_timeout(&self) -> Option<Duration> {
    self.receive_timeout
  }

  /// Enables a receive timeout for the reference.
  #[must_use]
  pub fn with_receive_timeout(mut self, timeout: Duration) -> Self {
    self.receive_timeout = Some(timeout);
    self
  }

  /// Returns the default ask timeout.
  #[must_use]
  pub const fn ask_timeout(&self) -> Option<Duration> {
    self.ask_timeout
  }

  /// Configures the default ask timeout used by `ask_default`.
  #[must_use]
  pub fn with_ask_timeout(mut self, timeout: Duration) -> Self {
    self.ask_timeout = Some(timeout);
    self
  }

  /// Returns the dispatcher override.
  #[must_use]
  pub const fn dispatcher(&self) -> Option<&Dispatcher> {
    self.dispatcher.as_ref()
  }

  /// Routes the reference through a dispatcher other than the system
  /// default.
  #[must_use]
  pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
    self.dispatcher = Some(dispatcher);
    self
  }
}

impl fmt::Debug for Props {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Props")
      .field("mailbox", &self.mailbox)
      .field("strategy", &self.strategy)
      .field("life_cycle", &self.life_cycle)
      .field("receive_timeout", &self.receive_timeout)
      .field("ask_timeout", &self.ask_timeout)
      .field("has_dispatcher", &self.dispatcher.is_some())
      .finish()
  }
}
