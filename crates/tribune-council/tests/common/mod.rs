//! Scripted model transport shared by the council integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tribune_council::{Agent, AgentRole, DebateOrchestrator, ModelTransport, TransportError};
use tribune_pool::{AgentPool, AgentPoolConfig, Credential, CredentialPool};

/// One request as seen by the transport.
#[derive(Debug, Clone)]
pub struct Call {
    pub role: Option<AgentRole>,
    pub credential: String,
    pub context: String,
    pub structured: bool,
}

/// Replies per role, identified by the built-in instruction text.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: HashMap<AgentRole, Result<String, TransportError>>,
    delays: HashMap<AgentRole, Duration>,
    reject_structured: bool,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, role: AgentRole, text: &str) -> Self {
        self.replies.insert(role, Ok(text.to_string()));
        self
    }

    pub fn fail(mut self, role: AgentRole, err: TransportError) -> Self {
        self.replies.insert(role, Err(err));
        self
    }

    pub fn delay(mut self, role: AgentRole, delay: Duration) -> Self {
        self.delays.insert(role, delay);
        self
    }

    pub fn reject_structured_output(mut self) -> Self {
        self.reject_structured = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, role: AgentRole) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.role == Some(role))
            .collect()
    }
}

#[async_trait]
impl ModelTransport for ScriptedTransport {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn send(
        &self,
        credential: &Credential,
        instruction: &str,
        context: &str,
        prefer_structured: bool,
    ) -> Result<String, TransportError> {
        let role = AgentRole::ALL
            .into_iter()
            .find(|r| r.default_instruction() == instruction);
        self.calls.lock().unwrap().push(Call {
            role,
            credential: credential.expose().to_string(),
            context: context.to_string(),
            structured: prefer_structured,
        });

        if self.reject_structured && prefer_structured {
            return Err(TransportError::StructuredOutputUnsupported(
                "response_mime_type is not supported".to_string(),
            ));
        }

        let Some(role) = role else {
            return Err(TransportError::MalformedResponse("unknown instruction".into()));
        };
        if let Some(delay) = self.delays.get(&role) {
            tokio::time::sleep(*delay).await;
        }
        self.replies
            .get(&role)
            .cloned()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

pub fn credentials(keys: &[&str]) -> Arc<CredentialPool> {
    let creds = keys.iter().map(|k| Credential::new(*k)).collect();
    Arc::new(CredentialPool::new(creds).unwrap())
}

pub fn orchestrator(
    transport: Arc<ScriptedTransport>,
    keys: &[&str],
    workers: usize,
) -> DebateOrchestrator {
    let agent = Arc::new(Agent::new(transport));
    let pool = Arc::new(AgentPool::new(AgentPoolConfig::new().with_workers(workers)).unwrap());
    DebateOrchestrator::new(agent, credentials(keys), pool)
}
