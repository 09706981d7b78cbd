#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![no_std]

//! Local actor runtime core.
//!
//! Implements the reference lifecycle engine, the mailbox and dispatch
//! machinery, and the supervision engine binding parents to their linked
//! children. The crate is `no_std`; clocks, timers, and execution resources
//! are injected through the abstractions in `cygnet-utils-core-rs`, and the
//! std runtime lives in `cygnet-actor-std-rs`.

extern crate alloc;

#[cfg(test)]
extern crate std;

mod actor;
mod actor_cell;
mod actor_context;
mod actor_error;
mod actor_future;
mod actor_ref;
mod actor_ref_backend;
mod any_message;
mod ask_error;
mod ask_future;
mod ask_reply_endpoint;
mod behavior;
mod cell_ref_backend;
mod deadletter_entry;
mod dispatcher;
mod envelope;
mod event_stream;
mod event_stream_event;
mod fault_strategy;
mod life_cycle;
mod lifecycle_event;
mod lifecycle_stage;
mod lifecycle_status;
mod link_error;
mod log_event;
mod logger_subscriber;
mod mailbox;
mod max_restarts_exceeded;
mod message_invoker;
mod message_payload;
mod name_registry;
mod name_registry_error;
mod pid;
mod props;
mod receive_timeout;
mod restart_statistics;
mod send_error;
mod spawn_error;
mod start_error;
mod supervision_event;
mod system;
mod system_config;
mod system_message;
mod system_state;
mod trapped_errors;
mod weak_actor_ref;

pub use actor::Actor;
pub use actor_cell::{ActorCell, DEFAULT_ASK_TIMEOUT};
pub use actor_context::ActorContext;
pub use actor_error::{ActorError, ActorErrorDetail};
pub use actor_future::ActorFuture;
pub use actor_ref::ActorRef;
pub use actor_ref_backend::ActorRefBackend;
pub use any_message::AnyMessage;
pub use ask_error::{AskError, AskResult};
pub use ask_future::AskFuture;
pub use ask_reply_endpoint::AskReplyEndpoint;
pub use behavior::BehaviorFn;
pub use cell_ref_backend::CellRefBackend;
pub use deadletter_entry::DeadletterEntry;
pub use dispatcher::{CallerExecutor, DispatchExecutor, DispatchTask, Dispatcher, DEFAULT_THROUGHPUT};
pub use envelope::Envelope;
pub use event_stream::{EventStream, EventStreamSubscriber, EventStreamSubscription};
pub use event_stream_event::EventStreamEvent;
pub use fault_strategy::FaultStrategy;
pub use life_cycle::LifeCycle;
pub use lifecycle_event::LifecycleEvent;
pub use lifecycle_stage::LifecycleStage;
pub use lifecycle_status::LifecycleStatus;
pub use link_error::LinkError;
pub use log_event::{LogEvent, LogLevel};
pub use logger_subscriber::{LoggerSubscriber, LoggerWriter};
pub use mailbox::{Mailbox, MailboxAppendError, MailboxCapacity, MailboxPolicy, QueueMailbox};
pub use max_restarts_exceeded::MaxRestartsExceeded;
pub use message_invoker::MessageInvoker;
pub use message_payload::MessagePayload;
pub use name_registry::NameRegistry;
pub use name_registry_error::NameRegistryError;
pub use pid::Pid;
pub use props::{ActorFactory, Props};
pub use receive_timeout::ReceiveTimeout;
pub use restart_statistics::RestartStatistics;
pub use send_error::SendError;
pub use spawn_error::SpawnError;
pub use start_error::StartError;
pub use supervision_event::{SupervisionAction, SupervisionEvent};
pub use system::ActorSystem;
pub use system_config::ActorSystemConfig;
pub use system_message::SystemMessage;
pub use system_state::SystemState;
pub use trapped_errors::TrappedErrors;
pub use weak_actor_ref::WeakActorRef;
