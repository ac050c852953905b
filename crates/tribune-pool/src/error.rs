//! Error types for the credential and worker pools.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for pool operations.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Errors raised by the credential pool and the agent worker pool.
#[derive(Debug, Error)]
pub enum PoolError {
    /// A credential pool was built from an empty collection.
    ///
    /// Raised at construction time only; `next()` cannot fail.
    #[error("credential pool requires at least one credential")]
    NoCredentials,

    /// A worker pool was configured with zero workers.
    #[error("worker pool requires at least one worker")]
    NoWorkers,

    /// The worker pool is shutting down and rejects new work.
    #[error("worker pool is shut down")]
    Closed,

    /// A task exceeded its deadline and was cancelled.
    #[error("task exceeded deadline of {0:?}")]
    TimedOut(Duration),

    /// A task panicked or was aborted before completing.
    #[error("task did not complete: {0}")]
    TaskFailed(String),
}
