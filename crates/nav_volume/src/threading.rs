//! Task spawning on rayon with per-task result channels.
//!
//! Each spawned task owns the sending half of a bounded crossbeam channel; the
//! caller keeps a [`TaskHandle`] and either blocks on [`TaskHandle::join`] or
//! checks [`TaskHandle::try_poll`]. Panics inside a task are caught on the
//! worker and delivered through the same channel instead of tearing down the
//! pool.
//!
//! # Usage
//!
//! ```ignore
//! let executor = TaskExecutor::new();
//!
//! // Queue work (non-blocking)
//! let handle = executor.spawn(move || expensive_computation());
//!
//! // Block until it finishes
//! let result = handle.join()?;
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use crossbeam_channel::{self as channel, Receiver, TryRecvError};

/// Unique identifier for a spawned task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
  fn next() -> Self {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    Self(COUNTER.fetch_add(1, Ordering::Relaxed))
  }

  /// Get the raw ID value.
  pub fn raw(&self) -> u64 {
    self.0
  }
}

/// Why a task produced no value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskFailure {
  /// The task panicked; carries the panic message when it was a string.
  Panicked(String),
  /// The task was dropped without sending a result.
  Disconnected,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    (*message).to_string()
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.clone()
  } else {
    "non-string panic payload".to_string()
  }
}

/// Receiving end of one spawned task.
#[derive(Debug)]
pub struct TaskHandle<T> {
  id: TaskId,
  receiver: Receiver<Result<T, TaskFailure>>,
}

impl<T> TaskHandle<T> {
  pub fn id(&self) -> TaskId {
    self.id
  }

  /// Block until the task finishes.
  pub fn join(self) -> Result<T, TaskFailure> {
    self
      .receiver
      .recv()
      .unwrap_or(Err(TaskFailure::Disconnected))
  }

  /// Non-blocking check: `None` while the task is still running.
  pub fn try_poll(&self) -> Option<Result<T, TaskFailure>> {
    match self.receiver.try_recv() {
      Ok(result) => Some(result),
      Err(TryRecvError::Empty) => None,
      Err(TryRecvError::Disconnected) => Some(Err(TaskFailure::Disconnected)),
    }
  }
}

#[cfg(test)]
impl<T> TaskHandle<T> {
  /// Handle whose sender is already gone.
  pub(crate) fn disconnected() -> Self {
    let (_, receiver) = channel::bounded(1);
    Self {
      id: TaskId::next(),
      receiver,
    }
  }
}

/// Task executor on rayon's global pool or on a dedicated pool.
#[derive(Clone, Default)]
pub struct TaskExecutor {
  pool: Option<Arc<rayon::ThreadPool>>,
  /// Tasks spawned but not yet finished.
  pending: Arc<AtomicUsize>,
}

impl TaskExecutor {
  /// Executor on rayon's global pool.
  pub fn new() -> Self {
    Self::default()
  }

  /// Executor on a dedicated pool.
  ///
  /// Useful when several navigation volumes should not compete with other
  /// rayon users.
  pub fn with_pool(pool: Arc<rayon::ThreadPool>) -> Self {
    Self {
      pool: Some(pool),
      pending: Arc::new(AtomicUsize::new(0)),
    }
  }

  /// Spawn a task (non-blocking).
  pub fn spawn<F, T>(&self, work: F) -> TaskHandle<T>
  where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
  {
    let id = TaskId::next();
    let (sender, receiver) = channel::bounded(1);
    let pending = Arc::clone(&self.pending);
    pending.fetch_add(1, Ordering::AcqRel);

    let job = move || {
      let result = panic::catch_unwind(AssertUnwindSafe(work))
        .map_err(|payload| TaskFailure::Panicked(panic_message(payload.as_ref())));
      pending.fetch_sub(1, Ordering::AcqRel);
      // Ignore send error (handle dropped = nobody is waiting)
      let _ = sender.send(result);
    };

    match &self.pool {
      Some(pool) => pool.spawn(job),
      None => rayon::spawn(job),
    }

    TaskHandle { id, receiver }
  }

  /// Get the number of worker threads.
  pub fn num_threads(&self) -> usize {
    match &self.pool {
      Some(pool) => pool.current_num_threads(),
      None => rayon::current_num_threads(),
    }
  }

  /// Get the number of tasks currently queued or running.
  pub fn pending_count(&self) -> usize {
    self.pending.load(Ordering::Acquire)
  }
}

impl std::fmt::Debug for TaskExecutor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TaskExecutor")
      .field("num_threads", &self.num_threads())
      .field("pending", &self.pending_count())
      .finish()
  }
}

// =============================================================================
// Tests
// =============================================================================
