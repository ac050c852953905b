//! # Agent Worker Pool
//!
//! A bounded executor shared by every debate running in the process.
//!
//! ## Design
//!
//! Tasks are spawned onto the Tokio runtime immediately, but each one must
//! hold a worker slot (a semaphore permit) while it runs. Slots are taken
//! when the task starts, not when it is submitted, so nothing pre-allocates
//! capacity it is not using. A dependent submission made after its
//! prerequisites have completed therefore never waits on them, even with a
//! single worker.
//!
//! ## Lifecycle
//!
//! ```text
//!  new() ──► submit()* ──► shutdown()
//!                            │ reject new submissions
//!                            │ wait for every accepted task
//!                            ▼ close worker slots
//! ```
//!
//! A task counts as accepted the moment `submit` returns `Ok`, whether or
//! not the runtime has polled it yet. The closed check and the pending
//! count share one lock, so no submission slips between them.
//!
//! ## Deadlines
//!
//! With a task timeout configured, a task that runs past it is dropped,
//! which cancels any request it was awaiting, and its handle resolves to
//! [`PoolError::TimedOut`]. Without one, tasks run until they finish.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{Notify, Semaphore};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{PoolError, Result};

/// Configuration for [`AgentPool`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tribune_pool::AgentPoolConfig;
///
/// let config = AgentPoolConfig::new()
///     .with_workers(8)
///     .with_task_timeout(Duration::from_secs(90));
/// assert_eq!(config.workers, 8);
/// ```
#[derive(Debug, Clone)]
pub struct AgentPoolConfig {
    /// Maximum number of tasks running at once.
    pub workers: usize,
    /// Per-task deadline, measured from when the task starts running.
    pub task_timeout: Option<Duration>,
}

impl AgentPoolConfig {
    /// Creates a config with default values.
    ///
    /// Defaults:
    /// - Workers: 4
    /// - Task timeout: none
    #[must_use]
    pub const fn new() -> Self {
        Self {
            workers: 4,
            task_timeout: None,
        }
    }

    /// Sets the number of workers.
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the per-task deadline.
    #[must_use]
    pub const fn with_task_timeout(mut self, timeout: Duration) -> Self {
        self.task_timeout = Some(timeout);
        self
    }

    /// Removes the per-task deadline.
    #[must_use]
    pub const fn without_task_timeout(mut self) -> Self {
        self.task_timeout = None;
        self
    }
}

impl Default for AgentPoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-capacity executor for agent invocations.
///
/// # Thread Safety
///
/// `AgentPool` is `Send + Sync`; share it behind an `Arc` and submit from
/// any number of concurrent callers.
pub struct AgentPool {
    slots: Arc<Semaphore>,
    workers: usize,
    task_timeout: Option<Duration>,
    tracker: Arc<Tracker>,
    active: Arc<AtomicUsize>,
}

impl AgentPool {
    /// Creates a pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NoWorkers`] if `config.workers` is zero.
    pub fn new(config: AgentPoolConfig) -> Result<Self> {
        if config.workers == 0 {
            return Err(PoolError::NoWorkers);
        }
        let workers = config.workers.min(Semaphore::MAX_PERMITS);

        info!(workers, timeout = ?config.task_timeout, "agent pool started");

        Ok(Self {
            slots: Arc::new(Semaphore::new(workers)),
            workers,
            task_timeout: config.task_timeout,
            tracker: Arc::new(Tracker::default()),
            active: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Submits a task for execution.
    ///
    /// The task waits for a free worker slot, then runs under the
    /// configured deadline. Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Closed`] once [`shutdown`](Self::shutdown) has begun.
    pub fn submit<F>(&self, task: F) -> Result<TaskHandle<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let pending = self.tracker.admit().map_err(|e| {
            warn!("submission rejected: agent pool is shut down");
            e
        })?;

        let slots = Arc::clone(&self.slots);
        let active = Arc::clone(&self.active);
        let deadline = self.task_timeout;

        let inner = tokio::spawn(async move {
            let _pending = pending;
            let _slot = slots.acquire_owned().await.map_err(|_| PoolError::Closed)?;
            let _active = ActiveGuard::enter(active);

            match deadline {
                Some(limit) => tokio::time::timeout(limit, task).await.map_err(|_| {
                    warn!(timeout = ?limit, "task cancelled at deadline");
                    PoolError::TimedOut(limit)
                }),
                None => Ok(task.await),
            }
        });

        Ok(TaskHandle { inner })
    }

    /// Stops accepting work and waits for every accepted task to finish.
    ///
    /// Idempotent; concurrent callers all return once the pool is drained.
    pub async fn shutdown(&self) {
        let pending = {
            let mut lifecycle = self.tracker.lock();
            lifecycle.closed = true;
            lifecycle.pending
        };
        info!(pending, active = self.active(), "agent pool draining");

        loop {
            let drained = self.tracker.drained.notified();
            tokio::pin!(drained);
            // Register before checking so a wakeup between the two is kept
            drained.as_mut().enable();
            if self.tracker.lock().pending == 0 {
                break;
            }
            drained.await;
        }

        if !self.slots.is_closed() {
            self.slots.close();
            info!("agent pool shut down");
        }
    }

    /// Number of accepted tasks that have not finished.
    pub fn pending(&self) -> usize {
        self.tracker.lock().pending
    }

    /// Maximum number of concurrently running tasks.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Number of tasks currently running.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Number of idle worker slots.
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }

    /// Returns true once shutdown has begun.
    pub fn is_closed(&self) -> bool {
        self.tracker.lock().closed
    }

    /// The configured per-task deadline.
    pub fn task_timeout(&self) -> Option<Duration> {
        self.task_timeout
    }
}

#[derive(Debug, Default)]
struct Lifecycle {
    closed: bool,
    pending: usize,
}

/// Admission control and drain signalling for submitted tasks.
#[derive(Debug, Default)]
struct Tracker {
    lifecycle: Mutex<Lifecycle>,
    drained: Notify,
}

impl Tracker {
    fn lock(&self) -> MutexGuard<'_, Lifecycle> {
        // The guarded state stays consistent even if a holder panicked
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn admit(self: &Arc<Self>) -> Result<PendingGuard> {
        let mut lifecycle = self.lock();
        if lifecycle.closed {
            return Err(PoolError::Closed);
        }
        lifecycle.pending += 1;
        Ok(PendingGuard(Arc::clone(self)))
    }
}

/// Held by an accepted task until its future completes or is dropped.
struct PendingGuard(Arc<Tracker>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        let remaining = {
            let mut lifecycle = self.0.lock();
            lifecycle.pending -= 1;
            lifecycle.pending
        };
        if remaining == 0 {
            self.0.drained.notify_waiters();
        }
    }
}

/// Tracks the running-task count for the lifetime of a task.
struct ActiveGuard(Arc<AtomicUsize>);

impl ActiveGuard {
    fn enter(counter: Arc<AtomicUsize>) -> Self {
        let now = counter.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(active = now, "task started");
        Self(counter)
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        let now = self.0.fetch_sub(1, Ordering::AcqRel) - 1;
        debug!(active = now, "task finished");
    }
}

/// Handle to a submitted task.
///
/// Dropping the handle detaches the task; it still runs to completion.
#[derive(Debug)]
pub struct TaskHandle<T> {
    inner: JoinHandle<Result<T>>,
}

impl<T> TaskHandle<T> {
    /// Waits for the task and returns its output.
    ///
    /// # Errors
    ///
    /// - [`PoolError::TimedOut`] if the task ran past its deadline
    /// - [`PoolError::Closed`] if the pool shut down before the task started
    /// - [`PoolError::TaskFailed`] if the task panicked or was aborted
    pub async fn join(self) -> Result<T> {
        match self.inner.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(PoolError::TaskFailed("aborted".to_string())),
            Err(e) => Err(PoolError::TaskFailed(e.to_string())),
        }
    }

    /// Cancels the task.
    pub fn abort(&self) {
        self.inner.abort();
    }

    /// Returns true if the task has finished.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}
