//! Hotswap behavior stack.

use alloc::{boxed::Box, vec::Vec};

use crate::{actor_context::ActorContext, actor_error::ActorError, any_message::AnyMessage};

/// Behavior override installed with `push_behavior`.
pub type BehaviorFn = Box<dyn FnMut(&mut ActorContext<'_>, &AnyMessage) -> Result<(), ActorError> + Send>;

pub(crate) enum HotswapOp {
  Push(BehaviorFn),
  Pop,
}

/// Stack of behavior overrides; the top entry handles the next message.
///
/// The actor's base `receive` is conceptually pinned below the stack, so an
/// empty stack means the base behavior is active and popping an empty stack
/// is a no-op.
pub(crate) struct HotswapStack {
  stack: Vec<BehaviorFn>,
}

impl HotswapStack {
  pub(crate) const fn new() -> Self {
    Self { stack: Vec::new() }
  }

  pub(crate) fn push(&mut self, behavior: BehaviorFn) {
    self.stack.push(behavior);
  }

  pub(crate) fn pop(&mut self) {
    let _ = self.stack.pop();
  }

  /// Removes the active override for the duration of one invocation.
  pub(crate) fn take_top(&mut self) -> Option<BehaviorFn> {
    self.stack.pop()
  }

  /// Reinstates the override taken with [`Self::take_top`].
  pub(crate) fn restore_top(&mut self, behavior: BehaviorFn) {
    self.stack.push(behavior);
  }

  pub(crate) fn apply(&mut self, ops: Vec<HotswapOp>) {
    for op in ops {
      match op {
        | HotswapOp::Push(behavior) => self.push(behavior),
        | HotswapOp::Pop => self.pop(),
      }
    }
  }

  pub(crate) fn clear(&mut self) {
    self.stack.clear();
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.stack.is_empty()
  }
}
