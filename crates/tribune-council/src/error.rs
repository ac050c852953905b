//! Error types for agent invocation and debate orchestration.

use thiserror::Error;
use tribune_pool::PoolError;

use crate::roles::AgentRole;

/// Failures reported by a model transport.
///
/// [`StructuredOutputUnsupported`](Self::StructuredOutputUnsupported) is a
/// capability mismatch, not a content or network problem; the agent recovers
/// from it with one plain-text retry. Every other variant is final.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The model rejected the structured-output request mode.
    #[error("structured output not supported: {0}")]
    StructuredOutputUnsupported(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The credential was rejected.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Non-success status from the model endpoint.
    #[error("model endpoint returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

impl TransportError {
    /// Returns true if the failure only concerns the structured-output mode.
    pub fn is_capability_mismatch(&self) -> bool {
        matches!(self, Self::StructuredOutputUnsupported(_))
    }
}

/// Errors that can end a debate.
#[derive(Debug, Error)]
pub enum DebateError {
    /// The model call for a role failed.
    #[error("{role} agent failed: {source}")]
    Transport {
        /// Role whose invocation failed.
        role: AgentRole,
        /// Underlying transport failure.
        source: TransportError,
    },

    /// The worker pool could not run the role's invocation.
    #[error("{role} agent could not run: {source}")]
    Pool {
        /// Role whose task failed.
        role: AgentRole,
        /// Underlying pool failure.
        source: PoolError,
    },
}

impl DebateError {
    /// The role whose failure this is.
    pub fn role(&self) -> AgentRole {
        match self {
            Self::Transport { role, .. } | Self::Pool { role, .. } => *role,
        }
    }
}
