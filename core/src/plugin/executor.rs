//! Task executor over a tokio runtime

use spark_shared::{Task, TaskExecutor};
use tokio::runtime::Handle;

/// Runs engine tasks on a tokio runtime's blocking pool.
///
/// Profiler work (sampling, report upload, heap dumps) blocks, so tasks go
/// to `spawn_blocking` rather than the async workers. The join handle is
/// dropped: a task's outcome is its own concern.
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Executor for the runtime the caller is running inside, if any.
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl TaskExecutor for TokioExecutor {
    fn execute(&self, task: Task) {
        drop(self.handle.spawn_blocking(task));
    }
}
