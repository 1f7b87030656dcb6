use tokio_util::task::task_tracker::{TaskTracker, TaskTrackerToken};

/// Tracks outstanding fan-outs so process shutdown can wait for in-flight
/// work. One registration covers the full lifetime of a Query's fan-out,
/// finalize included. Waiting never cancels running work.
#[derive(Debug, Clone, Default)]
pub struct ShutdownCoordinator {
    tracker: TaskTracker,
}

/// Deregisters its unit of work when dropped.
#[derive(Debug)]
pub struct WorkGuard {
    _token: TaskTrackerToken,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            tracker: TaskTracker::new(),
        }
    }

    /// Registers one unit of outstanding work. The guard must be held until
    /// the work, including its finalize step, has completed.
    pub fn register(&self) -> WorkGuard {
        WorkGuard {
            _token: self.tracker.token(),
        }
    }

    pub fn outstanding(&self) -> usize {
        self.tracker.len()
    }

    /// Blocks until every registered unit of work has deregistered. New
    /// registrations are still accepted while waiting; the wait ends once
    /// the count reaches zero.
    pub async fn wait(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }
}
