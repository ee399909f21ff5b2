//! The single-threaded, cooperative event loop.
//!
//! All theme delivery happens here. Work posted through a [`LoopHandle`] is
//! never run inside the poster's call frame; it waits for the next
//! [`EventLoop::turn`]. Work posted *during* a turn is deferred to the turn
//! after that, which keeps a subscriber that publishes again from re-entering
//! the delivery that is currently running.
//!
//! # Example
//!
//! ```
//! use stranger_themes_core::EventLoop;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let event_loop = EventLoop::new();
//! let handle = event_loop.handle();
//! let ran = Arc::new(AtomicUsize::new(0));
//!
//! let counter = ran.clone();
//! handle.post(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//! assert_eq!(ran.load(Ordering::SeqCst), 0);
//!
//! event_loop.run_until_idle().unwrap();
//! assert_eq!(ran.load(Ordering::SeqCst), 1);
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::logging::targets;
use crate::task::{SharedTaskQueue, TaskId};

/// Default bound on turns per [`EventLoop::run_until_idle`] call.
pub const DEFAULT_MAX_TURNS: usize = 64;

/// A cloneable handle for posting work onto an [`EventLoop`].
#[derive(Clone)]
pub struct LoopHandle {
    queue: Arc<SharedTaskQueue>,
}

impl LoopHandle {
    /// Schedule `task` for the next turn of the loop.
    pub fn post<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.queue.post(task);
        tracing::trace!(target: targets::EVENT_LOOP, task = id.as_u64(), "task posted");
        id
    }

    /// Number of tasks waiting for a turn.
    pub fn pending_count(&self) -> usize {
        self.queue.pending_count()
    }
}

impl std::fmt::Debug for LoopHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopHandle")
            .field("pending", &self.pending_count())
            .finish()
    }
}

/// Owner of the task queue. Drives delivery one turn at a time.
pub struct EventLoop {
    handle: LoopHandle,
    max_turns: usize,
}

impl EventLoop {
    /// Create an event loop with [`DEFAULT_MAX_TURNS`].
    pub fn new() -> Self {
        Self::with_max_turns(DEFAULT_MAX_TURNS)
    }

    /// Create an event loop whose [`run_until_idle`](Self::run_until_idle)
    /// gives up after `max_turns` turns.
    pub fn with_max_turns(max_turns: usize) -> Self {
        Self {
            handle: LoopHandle {
                queue: Arc::new(SharedTaskQueue::new()),
            },
            max_turns: max_turns.max(1),
        }
    }

    /// A handle for posting work onto this loop.
    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    /// Configured turn limit.
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Whether no work is pending.
    pub fn is_idle(&self) -> bool {
        self.handle.pending_count() == 0
    }

    /// Number of tasks waiting for a turn.
    pub fn pending_count(&self) -> usize {
        self.handle.pending_count()
    }

    /// Run the tasks that were pending when this turn started.
    ///
    /// Every task in the batch runs even if an earlier one panics; the first
    /// panic is resumed once the batch is finished.
    ///
    /// Returns how many tasks ran.
    pub fn turn(&self) -> usize {
        let batch = self.handle.queue.take_all();
        let count = batch.len();
        if count == 0 {
            return 0;
        }

        let _span = tracing::trace_span!(target: targets::EVENT_LOOP, "turn", tasks = count).entered();
        let mut first_panic = None;
        for task in batch {
            let id = task.id().as_u64();
            tracing::trace!(target: targets::EVENT_LOOP, task = id, "running task");
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| task.run())) {
                tracing::error!(target: targets::EVENT_LOOP, task = id, "task panicked");
                first_panic.get_or_insert(payload);
            }
        }

        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }
        count
    }

    /// Run turns until the queue is empty.
    ///
    /// Returns the total number of tasks run, or
    /// [`CoreError::TurnLimitExceeded`] when work is still pending after
    /// `max_turns` turns.
    pub fn run_until_idle(&self) -> Result<usize> {
        let mut total = 0;
        for _ in 0..self.max_turns {
            if self.is_idle() {
                return Ok(total);
            }
            total += self.turn();
        }

        if self.is_idle() {
            return Ok(total);
        }

        let pending = self.pending_count();
        tracing::warn!(
            target: targets::EVENT_LOOP,
            turns = self.max_turns,
            pending,
            "event loop did not settle"
        );
        Err(CoreError::TurnLimitExceeded {
            turns: self.max_turns,
            pending,
        })
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(LoopHandle: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_post_is_deferred() {
        let event_loop = EventLoop::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let log_clone = log.clone();
        event_loop.handle().post(move || log_clone.lock().push("task"));
        log.lock().push("caller");

        assert_eq!(event_loop.turn(), 1);
        assert_eq!(*log.lock(), vec!["caller", "task"]);
    }

    #[test]
    fn test_nested_post_runs_next_turn() {
        let event_loop = EventLoop::new();
        let handle = event_loop.handle();
        let log = Arc::new(Mutex::new(Vec::new()));

        let log_clone = log.clone();
        let inner_handle = handle.clone();
        handle.post(move || {
            log_clone.lock().push(1);
            let log_inner = log_clone.clone();
            inner_handle.post(move || log_inner.lock().push(2));
        });

        assert_eq!(event_loop.turn(), 1);
        assert_eq!(*log.lock(), vec![1]);
        assert_eq!(event_loop.pending_count(), 1);

        assert_eq!(event_loop.turn(), 1);
        assert_eq!(*log.lock(), vec![1, 2]);
        assert!(event_loop.is_idle());
    }

    #[test]
    fn test_run_until_idle_counts_tasks() {
        let event_loop = EventLoop::new();
        let handle = event_loop.handle();
        for _ in 0..3 {
            handle.post(|| {});
        }
        assert_eq!(event_loop.run_until_idle().unwrap(), 3);
        assert_eq!(event_loop.run_until_idle().unwrap(), 0);
    }

    #[test]
    fn test_turn_limit() {
        fn repost(handle: LoopHandle) {
            let next = handle.clone();
            handle.post(move || repost(next));
        }

        let event_loop = EventLoop::with_max_turns(4);
        repost(event_loop.handle());

        let err = event_loop.run_until_idle().unwrap_err();
        assert_eq!(err, CoreError::TurnLimitExceeded { turns: 4, pending: 1 });
    }

    #[test]
    fn test_panicking_task_does_not_drop_batch() {
        let event_loop = EventLoop::new();
        let handle = event_loop.handle();
        let log = Arc::new(Mutex::new(Vec::new()));

        let before = log.clone();
        handle.post(move || before.lock().push("before"));
        handle.post(|| panic!("task failed"));
        let after = log.clone();
        handle.post(move || after.lock().push("after"));

        let result = panic::catch_unwind(AssertUnwindSafe(|| event_loop.turn()));
        assert!(result.is_err());
        assert_eq!(*log.lock(), vec!["before", "after"]);
        assert!(event_loop.is_idle());
    }
}
