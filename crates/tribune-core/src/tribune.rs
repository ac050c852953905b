//! The Tribune facade.
//!
//! Builds every runtime component from a [`TribuneConfig`] and exposes a
//! small API for running debates.

use std::sync::Arc;
use tracing::info;
use tribune_council::{Agent, DebateOrchestrator, DebateOutcome, ModelTransport};
use tribune_pool::{AgentPool, CredentialPool};

use crate::config::TribuneConfig;
use crate::gemini::GeminiTransport;
use crate::Result;

/// Configured debate runner.
///
/// One `Tribune` owns one credential rotation and one worker pool; every
/// debate it runs shares both. It is `Send + Sync` and can be shared
/// behind an `Arc` to serve concurrent requests.
///
/// # Example
///
/// ```rust,ignore
/// let tribune = Tribune::new(TribuneConfig::resolve("config/tribune.toml")?)?;
/// let outcome = tribune.debate(context).await?;
/// ```
pub struct Tribune {
    config: TribuneConfig,
    credentials: Arc<CredentialPool>,
    pool: Arc<AgentPool>,
    orchestrator: DebateOrchestrator,
}

impl Tribune {
    /// Creates a Tribune that talks to the configured Gemini endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid (e.g. no API keys)
    /// - The HTTP client cannot be built
    pub fn new(config: TribuneConfig) -> Result<Self> {
        config.validate()?;
        let transport = GeminiTransport::from_config(&config.model, config.pool.request_timeout())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a Tribune over a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_transport(config: TribuneConfig, transport: Arc<dyn ModelTransport>) -> Result<Self> {
        config.validate()?;

        let credentials = Arc::new(CredentialPool::new(config.credentials())?);
        let pool = Arc::new(AgentPool::new(config.pool.agent_pool_config())?);
        let agent = Agent::new(Arc::clone(&transport))
            .with_instructions(config.prompts.instructions())
            .with_structured_output(config.model.structured_output);
        let orchestrator =
            DebateOrchestrator::new(Arc::new(agent), Arc::clone(&credentials), Arc::clone(&pool));

        info!(
            transport = transport.name(),
            model = %config.model.model,
            credentials = credentials.len(),
            workers = pool.workers(),
            "Tribune initialized"
        );

        Ok(Self {
            config,
            credentials,
            pool,
            orchestrator,
        })
    }

    /// Runs one debate over `context`.
    ///
    /// # Errors
    ///
    /// Returns [`TribuneError::Debate`](crate::TribuneError::Debate) if the
    /// Judge fails. Optimist and Critic failures only empty their lists.
    pub async fn debate(&self, context: impl Into<String>) -> Result<DebateOutcome> {
        Ok(self.orchestrator.run(context).await?)
    }

    /// Stops accepting debates and waits for in-flight invocations.
    pub async fn shutdown(&self) {
        self.pool.shutdown().await;
    }

    /// Fingerprints of the credentials in rotation order.
    pub fn credential_fingerprints(&self) -> Vec<String> {
        self.credentials.fingerprints()
    }

    /// The active configuration.
    pub fn config(&self) -> &TribuneConfig {
        &self.config
    }

    /// The underlying orchestrator.
    pub fn orchestrator(&self) -> &DebateOrchestrator {
        &self.orchestrator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TribuneError;

    fn config_with_keys(keys: &[&str]) -> TribuneConfig {
        let mut config = TribuneConfig::default();
        config.model.api_keys = keys.iter().map(|k| k.to_string()).collect();
        config
    }

    #[test]
    fn test_new_requires_credentials() {
        let result = Tribune::new(TribuneConfig::default());
        assert!(matches!(result, Err(TribuneError::Config(_))));
    }

    #[test]
    fn test_new_builds_components() {
        let tribune = Tribune::new(config_with_keys(&["k1", "k2"])).unwrap();
        assert_eq!(tribune.credential_fingerprints().len(), 2);
        assert_eq!(tribune.orchestrator().pool().workers(), 4);
        assert_eq!(tribune.config().model.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_fingerprints_hide_secrets() {
        let tribune = Tribune::new(config_with_keys(&["very-secret-key"])).unwrap();
        let fingerprints = tribune.credential_fingerprints();
        assert_eq!(fingerprints[0].len(), 8);
        assert!(!fingerprints[0].contains("secret"));
    }
}
