//! Deferred task queue backing the event loop.
//!
//! Tasks are run in posting order on a later turn of the loop, never inside
//! the caller that posted them.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

/// A boxed task closure.
type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

/// A task taken off the queue, ready to run.
pub(crate) struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

impl TaskData {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn run(self) {
        (self.task)();
    }
}

/// FIFO of pending tasks.
#[derive(Default)]
struct TaskQueue {
    tasks: VecDeque<TaskData>,
}

impl TaskQueue {
    fn post(&mut self, task: BoxedTask) -> TaskId {
        let id = next_task_id();
        self.tasks.push_back(TaskData { id, task });
        id
    }

    fn take_all(&mut self) -> Vec<TaskData> {
        self.tasks.drain(..).collect()
    }
}

/// A thread-safe wrapper around the queue.
///
/// The lock is only held while the queue itself is touched. Tasks run after
/// [`SharedTaskQueue::take_all`] has released it, so a running task may post
/// more work.
#[derive(Default)]
pub(crate) struct SharedTaskQueue {
    inner: Mutex<TaskQueue>,
}

impl SharedTaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.lock().post(Box::new(task))
    }

    pub fn pending_count(&self) -> usize {
        self.inner.lock().tasks.len()
    }

    /// Remove and return every task that is pending right now.
    pub fn take_all(&self) -> Vec<TaskData> {
        self.inner.lock().take_all()
    }
}
