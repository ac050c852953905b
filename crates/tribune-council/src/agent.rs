//! Single-role model invocation.
//!
//! An [`Agent`] turns `(credential, role, context)` into the model's raw
//! text answer. It owns no network code itself; requests go through a
//! [`ModelTransport`], which the core crate implements over HTTP and tests
//! implement with scripted replies.
//!
//! Requests first ask for structured (JSON) output. If the transport
//! reports that the model does not support that mode, the same request is
//! sent once more as plain text. Any other failure is returned as is.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use tribune_pool::Credential;

use crate::error::TransportError;
use crate::roles::{AgentRole, Instructions};

/// Transport to a generative model.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Sends one request and returns the model's text.
    ///
    /// `instruction` is the system-level instruction, `context` the user
    /// content. With `prefer_structured` set, the transport asks the model
    /// for JSON output and must report
    /// [`TransportError::StructuredOutputUnsupported`] if that mode is
    /// rejected.
    async fn send(
        &self,
        credential: &Credential,
        instruction: &str,
        context: &str,
        prefer_structured: bool,
    ) -> Result<String, TransportError>;
}

/// The trimmed text one role produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResult {
    /// Role that produced the text.
    pub role: AgentRole,
    /// Model output with surrounding whitespace removed.
    pub text: String,
}

impl AgentResult {
    /// An empty result, used when a failure is absorbed.
    pub fn empty(role: AgentRole) -> Self {
        Self {
            role,
            text: String::new(),
        }
    }
}

/// Invokes the model for any debate role.
pub struct Agent {
    transport: Arc<dyn ModelTransport>,
    instructions: Instructions,
    structured_output: bool,
}

impl Agent {
    /// Creates an agent with the built-in instructions and structured output enabled.
    pub fn new(transport: Arc<dyn ModelTransport>) -> Self {
        Self {
            transport,
            instructions: Instructions::default(),
            structured_output: true,
        }
    }

    /// Replaces the role instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: Instructions) -> Self {
        self.instructions = instructions;
        self
    }

    /// Enables or disables the structured-output first attempt.
    ///
    /// When disabled, every request is sent as plain text exactly once.
    #[must_use]
    pub fn with_structured_output(mut self, enabled: bool) -> Self {
        self.structured_output = enabled;
        self
    }

    /// The instructions in use.
    pub fn instructions(&self) -> &Instructions {
        &self.instructions
    }

    /// Runs one model call for `role` over `context`.
    ///
    /// # Errors
    ///
    /// Returns the transport's error. A capability mismatch on the first
    /// attempt triggers exactly one plain-text retry; the retry's error, if
    /// any, is what gets returned.
    pub async fn invoke(
        &self,
        credential: &Credential,
        role: AgentRole,
        context: &str,
    ) -> Result<AgentResult, TransportError> {
        let instruction = self.instructions.for_role(role);
        debug!(
            role = %role,
            transport = self.transport.name(),
            credential = %credential.fingerprint(),
            structured = self.structured_output,
            "invoking model"
        );

        let text = match self
            .transport
            .send(credential, instruction, context, self.structured_output)
            .await
        {
            Ok(text) => text,
            Err(err) if self.structured_output && err.is_capability_mismatch() => {
                warn!(role = %role, error = %err, "structured output rejected, retrying as plain text");
                self.transport.send(credential, instruction, context, false).await?
            }
            Err(err) => return Err(err),
        };

        Ok(AgentResult {
            role,
            text: text.trim().to_string(),
        })
    }
}
