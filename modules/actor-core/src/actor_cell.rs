//! Runtime container owning one actor's lifecycle, mailbox, and links.

use alloc::{boxed::Box, format, string::String, vec::Vec};
use core::time::Duration;

use hashbrown::HashMap;

use portable_atomic::{AtomicU8, Ordering};

use cygnet_utils_core_rs::{
  sync::{ArcShared, SpinSyncMutex},
  timing::TimerHandle,
};

use crate::{
  actor::Actor,
  actor_context::ActorContext,
  actor_error::ActorError,
  actor_future::ActorFuture,
  actor_ref::ActorRef,
  any_message::AnyMessage,
  ask_error::AskError,
  ask_future::AskFuture,
  ask_reply_endpoint::AskReplyEndpoint,
  behavior::HotswapStack,
  cell_ref_backend::CellRefBackend,
  dispatcher::Dispatcher,
  envelope::Envelope,
  fault_strategy::FaultStrategy,
  life_cycle::LifeCycle,
  lifecycle_stage::LifecycleStage,
  lifecycle_status::LifecycleStatus,
  link_error::LinkError,
  log_event::LogLevel,
  mailbox::{Mailbox, QueueMailbox},
  max_restarts_exceeded::MaxRestartsExceeded,
  message_invoker::MessageInvoker,
  message_payload::MessagePayload,
  pid::Pid,
  props::{ActorFactory, Props},
  receive_timeout::ReceiveTimeout,
  restart_statistics::RestartStatistics,
  send_error::SendError,
  start_error::StartError,
  supervision_event::SupervisionAction,
  system_message::SystemMessage,
  system_state::SystemState,
  weak_actor_ref::WeakActorRef,
};

/// Ask timeout applied when neither the reference nor the caller chose one.
pub const DEFAULT_ASK_TIMEOUT: Duration = Duration::from_secs(5);

/// Runtime container responsible for executing an actor instance.
///
/// The cell owns everything behind a reference: the mutable actor slot, the
/// hotswap stack, the linked-children map, the supervisor back-edge, and the
/// retry accounting driving the restart protocol. All mutation funnels
/// through the per-field locks; none of them is ever held while sending to
/// another reference.
pub struct ActorCell {
  pid:             Pid,
  name:            String,
  system:          ArcShared<SystemState>,
  factory:         ArcShared<dyn ActorFactory>,
  dispatcher:      Dispatcher,
  mailbox:         ArcShared<dyn Mailbox>,
  actor:           SpinSyncMutex<Box<dyn Actor + Send>>,
  hotswap:         SpinSyncMutex<HotswapStack>,
  status:          AtomicU8,
  self_ref:        SpinSyncMutex<Option<ActorRef>>,
  supervisor:      SpinSyncMutex<Option<WeakActorRef>>,
  children:        SpinSyncMutex<HashMap<Pid, ActorRef>>,
  strategy:        SpinSyncMutex<FaultStrategy>,
  life_cycle:      SpinSyncMutex<LifeCycle>,
  restart_stats:   SpinSyncMutex<RestartStatistics>,
  current_message: SpinSyncMutex<Option<AnyMessage>>,
  receive_timeout: SpinSyncMutex<Option<Duration>>,
  timeout_handle:  SpinSyncMutex<Option<TimerHandle>>,
  ask_timeout:     SpinSyncMutex<Option<Duration>>,
}

impl ActorCell {
  /// Creates a new cell from the provided runtime state and props.
  ///
  /// The cell starts `Unstarted`; callers obtain a reference through
  /// [`ActorCell::actor_ref`] and drive the lifecycle from there.
  pub fn create(system: ArcShared<SystemState>, pid: Pid, name: String, props: &Props) -> ArcShared<Self> {
    let mailbox: ArcShared<dyn Mailbox> = ArcShared::new(QueueMailbox::new(*props.mailbox(), system.clock().clone()));
    let dispatcher = props.dispatcher().cloned().unwrap_or_else(|| system.default_dispatcher().clone());
    let factory = props.factory().clone();
    let actor = factory.create();

    let cell = ArcShared::new(Self {
      pid,
      name,
      system,
      factory,
      dispatcher,
      mailbox,
      actor: SpinSyncMutex::new(actor),
      hotswap: SpinSyncMutex::new(HotswapStack::new()),
      status: AtomicU8::new(LifecycleStatus::Unstarted.as_u8()),
      self_ref: SpinSyncMutex::new(None),
      supervisor: SpinSyncMutex::new(None),
      children: SpinSyncMutex::new(HashMap::new()),
      strategy: SpinSyncMutex::new(props.strategy().clone()),
      life_cycle: SpinSyncMutex::new(props.life_cycle()),
      restart_stats: SpinSyncMutex::new(RestartStatistics::new()),
      current_message: SpinSyncMutex::new(None),
      receive_timeout: SpinSyncMutex::new(props.receive_timeout()),
      timeout_handle: SpinSyncMutex::new(None),
      ask_timeout: SpinSyncMutex::new(props.ask_timeout()),
    });

    let backend: ArcShared<dyn crate::actor_ref_backend::ActorRefBackend> =
      ArcShared::new(CellRefBackend::new(cell.clone()));
    *cell.self_ref.lock() = Some(ActorRef::new(pid, backend));
    cell
  }

  /// Returns the identifier allocated to this cell.
  #[must_use]
  pub const fn pid(&self) -> Pid {
    self.pid
  }

  /// Returns the display name of this cell.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Produces an [`ActorRef`] pointing at this cell.
  #[must_use]
  pub fn actor_ref(&self) -> ActorRef {
    self.self_ref.lock().clone().unwrap_or_else(ActorRef::dangling)
  }

  /// Returns the dispatcher this cell is scheduled on.
  #[must_use]
  pub const fn dispatcher(&self) -> &Dispatcher {
    &self.dispatcher
  }

  /// Returns the current lifecycle status.
  #[must_use]
  pub fn status(&self) -> LifecycleStatus {
    LifecycleStatus::from_u8(self.status.load(Ordering::Acquire))
  }

  pub(crate) const fn system_state(&self) -> &ArcShared<SystemState> {
    &self.system
  }

  /// Starts the actor: registers with the dispatcher, runs `pre_start`, and
  /// arms the receive timeout. Starting a running reference is a no-op.
  ///
  /// # Errors
  ///
  /// Returns [`StartError::AlreadyShutdown`] after a stop and
  /// [`StartError::InitializationFailed`] when `pre_start` fails; the
  /// latter shuts the reference down.
  pub fn start(self_arc: &ArcShared<Self>) -> Result<(), StartError> {
    let this = &**self_arc;
    let claimed = this
      .status
      .compare_exchange(
        LifecycleStatus::Unstarted.as_u8(),
        LifecycleStatus::Running.as_u8(),
        Ordering::AcqRel,
        Ordering::Acquire,
      )
      .is_ok();
    if !claimed {
      return match this.status() {
        | LifecycleStatus::Shutdown => Err(StartError::AlreadyShutdown),
        | _ => Ok(()),
      };
    }

    let invoker: ArcShared<dyn MessageInvoker> = self_arc.clone();
    this.dispatcher.attach(this.pid, this.mailbox.clone(), invoker);

    let result = {
      let mut actor = this.actor.lock();
      let mut ctx = ActorContext::new(this, None);
      let outcome = actor.pre_start(&mut ctx);
      drop(actor);
      let (ops, stop_requested) = ctx.into_pending();
      outcome.map(|()| (ops, stop_requested))
    };

    match result {
      | Ok((ops, stop_requested)) => {
        this.hotswap.lock().apply(ops);
        this.publish_lifecycle(LifecycleStage::Started);
        if stop_requested {
          this.stop();
        } else {
          this.arm_receive_timeout();
        }
        Ok(())
      },
      | Err(error) => {
        this.log(LogLevel::Error, format!("pre_start failed: {error}"));
        this.status.store(LifecycleStatus::Shutdown.as_u8(), Ordering::Release);
        this.dispatcher.detach(this.pid);
        this.system.unregister(this.pid);
        let _ = this.self_ref.lock().take();
        Err(StartError::InitializationFailed(error))
      },
    }
  }

  /// Stops the actor: runs `post_stop`, drains the mailbox, cascades to
  /// linked children, and notifies the supervisor. Idempotent.
  pub fn stop(&self) {
    let previous =
      LifecycleStatus::from_u8(self.status.swap(LifecycleStatus::Shutdown.as_u8(), Ordering::AcqRel));
    if previous.is_shutdown() {
      return;
    }

    self.cancel_receive_timeout();

    if previous != LifecycleStatus::Unstarted {
      let outcome = {
        let mut actor = self.actor.lock();
        let mut ctx = ActorContext::new(self, None);
        actor.post_stop(&mut ctx)
      };
      if let Err(error) = outcome {
        self.log(LogLevel::Warn, format!("post_stop failed: {error}"));
      }
      self.publish_lifecycle(LifecycleStage::Stopped);
    }

    while let Some(envelope) = self.mailbox.dequeue() {
      let payload = envelope.into_payload();
      if let MessagePayload::User(message) = &payload {
        if let Some(reply) = message.reply_to() {
          let _ = reply.fault_reply(AskError::ActorStopped);
        }
      }
      self.system.deadletter(Some(self.pid), payload);
    }

    let children: Vec<ActorRef> = {
      let mut map = self.children.lock();
      let snapshot = map.values().cloned().collect();
      map.clear();
      snapshot
    };
    for child in children {
      child.clear_supervisor();
      child.stop();
    }

    let supervisor = self.supervisor.lock().take().and_then(|weak| weak.upgrade());
    if let Some(parent) = supervisor {
      let _ = parent.send_system(SystemMessage::ChildStopped { child: self.actor_ref() });
    }

    self.dispatcher.detach(self.pid);
    self.system.unregister(self.pid);
    // The cell owns a handle to itself; dropping it breaks the cycle so the
    // cell is reclaimed once external references go away.
    let _ = self.self_ref.lock().take();
  }

  /// Enqueues a user message for this actor.
  ///
  /// # Errors
  ///
  /// Returns [`SendError::NotStarted`] before `start`,
  /// [`SendError::Closed`] after shutdown (the message is dead-lettered),
  /// or [`SendError::AppendFailed`] when a bounded mailbox rejects it.
  pub fn send_user(&self, message: AnyMessage) -> Result<(), SendError> {
    match self.status() {
      | LifecycleStatus::Unstarted => Err(SendError::NotStarted(message)),
      | LifecycleStatus::Shutdown => {
        self.system.deadletter(Some(self.pid), MessagePayload::User(message.clone()));
        Err(SendError::Closed(message))
      },
      | LifecycleStatus::Running | LifecycleStatus::BeingRestarted => {
        let envelope = Envelope::user(self.actor_ref(), message);
        self.dispatcher.dispatch(envelope).map_err(|error| {
          match error.into_envelope().into_payload() {
            | MessagePayload::User(message) => SendError::AppendFailed(message),
            | MessagePayload::System(_) => SendError::AppendFailed(AnyMessage::new(())),
          }
        })
      },
    }
  }

  /// Enqueues a control message for this actor.
  ///
  /// # Errors
  ///
  /// Hands the message back when this cell is shut down or its mailbox
  /// rejected it; the drop is recorded as a dead letter either way.
  pub(crate) fn send_system(&self, message: SystemMessage) -> Result<(), SystemMessage> {
    if self.status().is_shutdown() {
      self.system.deadletter(Some(self.pid), MessagePayload::System(message.clone()));
      return Err(message);
    }
    let envelope = Envelope::system(self.actor_ref(), message);
    match self.dispatcher.dispatch(envelope) {
      | Ok(()) => Ok(()),
      | Err(error) => {
        self.log(LogLevel::Warn, String::from("mailbox rejected a system message"));
        let payload = error.into_envelope().into_payload();
        self.system.deadletter(Some(self.pid), payload.clone());
        match payload {
          | MessagePayload::System(message) => Err(message),
          | MessagePayload::User(_) => Ok(()),
        }
      },
    }
  }

  /// Sends `message` and returns a reply future bounded by `timeout`.
  ///
  /// # Errors
  ///
  /// Returns the same failures as [`ActorCell::send_user`].
  pub fn ask(&self, message: AnyMessage, timeout: Duration) -> Result<AskFuture, SendError> {
    let future = ActorFuture::pending();
    let endpoint: ArcShared<dyn crate::actor_ref_backend::ActorRefBackend> =
      ArcShared::new(AskReplyEndpoint::new(future.clone()));
    let reply_ref = ActorRef::new_virtual(endpoint);
    self.send_user(message.with_reply_to(reply_ref))?;
    Ok(AskFuture::new(future, self.system.clock().clone(), timeout))
  }

  /// Sends `message` with the reference's configured default ask timeout.
  ///
  /// # Errors
  ///
  /// Returns the same failures as [`ActorCell::send_user`].
  pub fn ask_default(&self, message: AnyMessage) -> Result<AskFuture, SendError> {
    let timeout = self.ask_timeout.lock().unwrap_or(DEFAULT_ASK_TIMEOUT);
    self.ask(message, timeout)
  }

  /// Links `child` under this cell's supervision.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError::AlreadySupervised`] when the child already has a
  /// supervisor and [`LinkError::Unsupported`] for virtual references.
  pub fn link(&self, child: &ActorRef) -> Result<(), LinkError> {
    let Some(child_pid) = child.pid() else {
      return Err(LinkError::Unsupported);
    };
    child.set_supervisor(&self.actor_ref())?;
    self.children.lock().insert(child_pid, child.clone());
    Ok(())
  }

  /// Removes `child` from this cell's supervision.
  ///
  /// # Errors
  ///
  /// Returns [`LinkError::NotLinked`] when the child is not linked here.
  pub fn unlink(&self, child: &ActorRef) -> Result<(), LinkError> {
    let Some(child_pid) = child.pid() else {
      return Err(LinkError::NotLinked);
    };
    if self.children.lock().remove(&child_pid).is_none() {
      return Err(LinkError::NotLinked);
    }
    child.clear_supervisor();
    Ok(())
  }

  /// Enumerates the currently linked children.
  #[must_use]
  pub fn linked_children(&self) -> Vec<ActorRef> {
    self.children.lock().values().cloned().collect()
  }

  pub(crate) fn set_supervisor(&self, supervisor: &ActorRef) -> Result<(), LinkError> {
    let mut slot = self.supervisor.lock();
    if let Some(existing) = &*slot {
      if existing.upgrade().is_some() {
        return Err(LinkError::AlreadySupervised);
      }
    }
    *slot = Some(supervisor.downgrade());
    Ok(())
  }

  pub(crate) fn clear_supervisor(&self) {
    let _ = self.supervisor.lock().take();
  }

  /// Returns the supervisor installed on this cell, if it is still alive.
  #[must_use]
  pub fn supervisor(&self) -> Option<ActorRef> {
    self.supervisor.lock().clone().and_then(|weak| weak.upgrade())
  }

  /// Reconfigures the receive timeout; `None` disables it.
  pub fn set_receive_timeout(&self, timeout: Option<Duration>) {
    *self.receive_timeout.lock() = timeout;
    if timeout.is_none() {
      self.cancel_receive_timeout();
    }
  }

  /// Runs the restart protocol against this cell with the supplied budget.
  pub fn request_restart(&self, reason: &ActorError, max_retries: Option<u32>, window: Option<Duration>) {
    if !self.status().accepts_messages() {
      return;
    }
    self.dispatcher.suspend(self.pid);

    let now = self.system.monotonic_now();
    let attempts = self.restart_stats.lock().record_failure(now, window);
    if let Some(limit) = max_retries {
      if attempts > limit {
        self.escalate(reason, max_retries, window);
        return;
      }
    }

    self.status.store(LifecycleStatus::BeingRestarted.as_u8(), Ordering::Release);

    if self.life_cycle.lock().is_temporary() {
      self.publish_supervision(SupervisionAction::Stopped);
      self.stop();
      return;
    }

    if self.perform_restart(reason).is_err() {
      self.log(LogLevel::Warn, String::from("restart protocol failed; retrying once"));
      if self.perform_restart(reason).is_err() {
        self.publish_supervision(SupervisionAction::Stopped);
        self.stop();
        return;
      }
    }
    self.publish_supervision(SupervisionAction::Restarted);

    let grandchildren: Vec<ActorRef> = self.children.lock().values().cloned().collect();
    for child in grandchildren {
      child.request_restart(reason, max_retries, window);
    }
  }

  fn escalate(&self, reason: &ActorError, max_retries: Option<u32>, window: Option<Duration>) {
    self.log(
      LogLevel::Error,
      format!("restart budget exhausted after {} attempts", self.restart_stats.lock().retry_count()),
    );
    self.publish_supervision(SupervisionAction::Escalated);
    let notice = MaxRestartsExceeded::new(self.actor_ref(), max_retries, window, reason.clone());
    let supervisor = self.supervisor.lock().clone().and_then(|weak| weak.upgrade());
    if let Some(parent) = supervisor {
      let _ = parent.send_system(SystemMessage::Escalated(notice));
    }
    self.stop();
  }

  /// Restart protocol for a single actor (spec steps: hook the failed
  /// instance, install a fresh one, rerun the start hooks, resume).
  fn perform_restart(&self, reason: &ActorError) -> Result<(), ActorError> {
    let last_message = self.current_message.lock().clone();

    let pending = {
      let mut actor = self.actor.lock();
      let mut ctx = ActorContext::new(self, None);
      actor.pre_restart(&mut ctx, reason, last_message.as_ref())?;
      let fresh = match actor.fresh_instance() {
        | Some(instance) => instance,
        | None => self.factory.create(),
      };
      *actor = fresh;
      actor.pre_start(&mut ctx)?;
      actor.post_restart(&mut ctx, reason)?;
      drop(actor);
      ctx.into_pending()
    };

    let (ops, _stop_requested) = pending;
    {
      let mut stack = self.hotswap.lock();
      stack.clear();
      stack.apply(ops);
    }
    let _ = self.current_message.lock().take();
    self.status.store(LifecycleStatus::Running.as_u8(), Ordering::Release);
    self.publish_lifecycle(LifecycleStage::Restarted);
    self.dispatcher.resume(self.pid);
    Ok(())
  }

  fn handle_child_failed(&self, child: &ActorRef, reason: &ActorError) {
    let strategy = self.strategy.lock().clone();
    match &strategy {
      | FaultStrategy::NoStrategy => child.stop(),
      | FaultStrategy::OneForOne { trap, max_retries, window } => {
        if trap.traps(reason) {
          child.request_restart(reason, *max_retries, *window);
        } else {
          child.stop();
        }
      },
      | FaultStrategy::AllForOne { trap, max_retries, window } => {
        if trap.traps(reason) {
          let members: Vec<ActorRef> = self.children.lock().values().cloned().collect();
          for member in members {
            member.request_restart(reason, *max_retries, *window);
          }
        } else {
          child.stop();
        }
      },
    }
  }

  fn handle_child_stopped(&self, child: &ActorRef) {
    if let Some(child_pid) = child.pid() {
      let _ = self.children.lock().remove(&child_pid);
    }
    // A clean stop under all-for-one takes the remaining siblings down too.
    if self.strategy.lock().is_all_for_one() {
      let remaining: Vec<ActorRef> = self.children.lock().values().cloned().collect();
      for member in remaining {
        member.stop();
      }
    }
  }

  fn handle_system_message(&self, message: SystemMessage) {
    match message {
      | SystemMessage::ChildFailed { child, reason } => self.handle_child_failed(&child, &reason),
      | SystemMessage::ChildStopped { child } => self.handle_child_stopped(&child),
      | SystemMessage::Escalated(notice) => {
        if let Some(child_pid) = notice.child().pid() {
          let _ = self.children.lock().remove(&child_pid);
        }
        self.log(LogLevel::Error, format!("linked child exceeded its restart budget: {}", notice.reason()));
        self.deliver_to_behavior(AnyMessage::new(notice));
      },
      | SystemMessage::ReceiveTimeout => self.deliver_to_behavior(AnyMessage::new(ReceiveTimeout)),
    }
  }

  fn deliver_to_behavior(&self, message: AnyMessage) {
    let sender = message.reply_to().cloned();
    let mut ctx = ActorContext::new(self, sender);

    let taken = self.hotswap.lock().take_top();
    let result = match taken {
      | Some(mut behavior) => {
        let outcome = behavior(&mut ctx, &message);
        self.hotswap.lock().restore_top(behavior);
        outcome
      },
      | None => self.actor.lock().receive(&mut ctx, &message),
    };

    let (ops, stop_requested) = ctx.into_pending();
    match result {
      | Ok(()) => {
        self.hotswap.lock().apply(ops);
        let _ = self.current_message.lock().take();
        if stop_requested {
          self.stop();
        } else {
          self.arm_receive_timeout();
        }
      },
      | Err(error) => self.handle_failure(&message, error),
    }
  }

  /// Failure path of an invocation: suspend, fault the asker, and hand the
  /// decision to the supervisor when one exists.
  fn handle_failure(&self, message: &AnyMessage, error: ActorError) {
    self.log(LogLevel::Error, format!("behavior failed: {error}"));
    self.dispatcher.suspend(self.pid);

    if let Some(reply) = message.reply_to() {
      let _ = reply.fault_reply(AskError::Failed(error.clone()));
    }

    let supervisor = self.supervisor.lock().clone().and_then(|weak| weak.upgrade());
    match supervisor {
      | Some(parent) => {
        let notice = SystemMessage::ChildFailed { child: self.actor_ref(), reason: error };
        // A shut-down supervisor can no longer decide; fall back to this
        // reference's own lifecycle policy.
        if parent.send_system(notice).is_err() {
          self.apply_unsupervised_policy();
        }
      },
      | None => self.apply_unsupervised_policy(),
    }
  }

  fn apply_unsupervised_policy(&self) {
    if self.life_cycle.lock().is_temporary() {
      self.stop();
    } else {
      let _ = self.current_message.lock().take();
      self.dispatcher.resume(self.pid);
    }
  }

  fn arm_receive_timeout(&self) {
    let Some(timeout) = *self.receive_timeout.lock() else {
      return;
    };
    if !self.mailbox.is_empty() || self.status().is_shutdown() {
      return;
    }
    self.cancel_receive_timeout();
    let weak = self.actor_ref().downgrade();
    let handle = self.system.timer().schedule_once(
      timeout,
      Box::new(move || {
        if let Some(target) = weak.upgrade() {
          let _ = target.send_system(SystemMessage::ReceiveTimeout);
        }
      }),
    );
    *self.timeout_handle.lock() = Some(handle);
  }

  fn cancel_receive_timeout(&self) {
    if let Some(handle) = self.timeout_handle.lock().take() {
      handle.cancel();
    }
  }

  fn publish_lifecycle(&self, stage: LifecycleStage) {
    self.system.publish_lifecycle(self.pid, self.name.clone(), stage);
  }

  fn publish_supervision(&self, action: SupervisionAction) {
    self.system.publish_supervision(self.pid, action);
  }

  fn log(&self, level: LogLevel, message: String) {
    self.system.log(level, Some(self.pid), message);
  }
}


impl MessageInvoker for ActorCell {
  fn invoke(&self, envelope: Envelope) {
    if self.status().is_shutdown() {
      self.system.deadletter(Some(self.pid), envelope.into_payload());
      return;
    }

    self.cancel_receive_timeout();

    match envelope.into_payload() {
      | MessagePayload::User(message) => {
        *self.current_message.lock() = Some(message.clone());
        self.deliver_to_behavior(message);
      },
      | MessagePayload::System(message) => self.handle_system_message(message),
    }
  }
}
