//! # Tribune Core
//!
//! Configured entry point for running venue debates against a hosted model.
//! Wires the credential pool, the worker pool, the Gemini transport, and
//! the debate orchestrator together from a single [`TribuneConfig`].
//!
//! ## Components
//!
//! | Crate | Role |
//! |-------|------|
//! | `tribune-pool` | Credential rotation, bounded worker pool |
//! | `tribune-council` | Agent invocation, failure policy, orchestration |
//! | `tribune-extract` | Point lists from free-form model output |
//! | `tribune-core` | Configuration, HTTP transport, facade |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     TRIBUNE CORE                        │
//! ├─────────────────────────────────────────────────────────┤
//! │                                                         │
//! │   config/tribune.toml + GEMINI_API_KEYS ...             │
//! │                    │                                    │
//! │                    ▼                                    │
//! │           ┌─────────────────┐                           │
//! │           │     Tribune     │  ← Facade                 │
//! │           └────────┬────────┘                           │
//! │                    │                                    │
//! │     ┌──────────────┼──────────────┐                     │
//! │     ▼              ▼              ▼                     │
//! │ ┌──────────┐ ┌────────────┐ ┌────────────────┐          │
//! │ │Credential│ │ AgentPool  │ │    Debate      │          │
//! │ │  Pool    │ │ (workers)  │ │  Orchestrator  │          │
//! │ └──────────┘ └────────────┘ └───────┬────────┘          │
//! │                                     ▼                   │
//! │                           ┌──────────────────┐          │
//! │                           │ GeminiTransport  │          │
//! │                           └──────────────────┘          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tribune_core::{Tribune, TribuneConfig};
//!
//! let config = TribuneConfig::resolve("config/tribune.toml")?;
//! let tribune = Tribune::new(config)?;
//!
//! let outcome = tribune.debate("Venue: Cafe Lumen\nNotes: ...").await?;
//! println!("{}", serde_json::to_string_pretty(&outcome)?);
//!
//! tribune.shutdown().await;
//! ```
//!
//! ## Security Notes
//!
//! - API keys never appear in logs or `Debug` output; only SHA-256
//!   fingerprints do
//! - A configuration without credentials is rejected at startup

mod config;
mod error;
mod gemini;
mod tribune;

pub use config::{
    parse_key_list, ModelConfig, PoolConfig, PromptConfig, TribuneConfig, DEFAULT_CONFIG_PATH,
    KEY_ENV_VARS,
};
pub use error::TribuneError;
pub use gemini::{GeminiTransport, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use tribune::Tribune;

// Re-export component types for convenience
pub use tribune_council::{
    AgentRole, DebateError, DebateOutcome, FailurePolicy, ModelTransport, TransportError,
};
pub use tribune_extract::{extract_points, extract_with_tier, Extraction, ExtractionTier, PointList};
pub use tribune_pool::{Credential, CredentialPool};

/// Core result type for Tribune operations.
pub type Result<T> = std::result::Result<T, TribuneError>;
