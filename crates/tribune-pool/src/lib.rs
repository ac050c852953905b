//! # Tribune Pool
//!
//! Shared, process-wide resources for agent invocations: the credential
//! rotation pool and the bounded worker pool that executes invocations.
//!
//! ## Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`CredentialPool`] | Strict cyclic credential selection, safe under concurrency |
//! | [`AgentPool`] | Fixed-capacity executor with deadlines and graceful shutdown |
//!
//! Both are explicit objects built once at startup and passed by `Arc`
//! to whoever needs them. There are no global singletons.
//!
//! ## Quick Start
//!
//! ```rust
//! use tribune_pool::{AgentPool, AgentPoolConfig, Credential, CredentialPool};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), tribune_pool::PoolError> {
//! let credentials = CredentialPool::new(vec![
//!     Credential::new("key-a"),
//!     Credential::new("key-b"),
//! ])?;
//! assert_eq!(credentials.next().expose(), "key-a");
//! assert_eq!(credentials.next().expose(), "key-b");
//! assert_eq!(credentials.next().expose(), "key-a");
//!
//! let pool = AgentPool::new(AgentPoolConfig::new().with_workers(2))?;
//! let answer = pool.submit(async { 40 + 2 })?.join().await?;
//! assert_eq!(answer, 42);
//! pool.shutdown().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency Notes
//!
//! - The rotation cursor is the only state mutated by concurrent callers;
//!   every read-and-advance is a single atomic update
//! - Worker slots are acquired when a task starts running, never at
//!   submission, so a dependent task submitted after its prerequisites
//!   finish can always make progress even with one worker
//! - A task is accepted, and counted for shutdown, the moment `submit`
//!   returns `Ok`

mod error;
mod executor;
mod rotation;

pub use error::{PoolError, Result};
pub use executor::{AgentPool, AgentPoolConfig, TaskHandle};
pub use rotation::{Credential, CredentialPool};
