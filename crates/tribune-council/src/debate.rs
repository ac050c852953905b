//! Debate orchestration facade.
//!
//! Runs the Optimist and Critic concurrently on the shared worker pool,
//! waits for both, then hands their extracted points to the Judge.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, info_span, Instrument};
use tribune_extract::{extract_points, PointList};
use tribune_pool::{AgentPool, CredentialPool, PoolError, TaskHandle};
use uuid::Uuid;

use crate::agent::{Agent, AgentResult};
use crate::error::{DebateError, TransportError};
use crate::policy::{FailurePolicy, PolicyTable};
use crate::roles::AgentRole;
use crate::synthesis::SynthesisInput;
use crate::Result;

type Submission = std::result::Result<TaskHandle<std::result::Result<AgentResult, TransportError>>, PoolError>;

/// The three point lists a debate produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateOutcome {
    /// Strengths, at most 6.
    pub optimist: PointList,
    /// Weaknesses, at most 6.
    pub critic: PointList,
    /// Verdict, at most 4.
    pub judge: PointList,
}

impl DebateOutcome {
    /// Returns true if no role produced any points.
    pub fn is_empty(&self) -> bool {
        self.optimist.is_empty() && self.critic.is_empty() && self.judge.is_empty()
    }
}

/// Orchestrates Optimist, Critic, and Judge for one context at a time.
///
/// Any number of debates may run concurrently against the same
/// orchestrator; they share the credential rotation and the worker pool.
pub struct DebateOrchestrator {
    agent: Arc<Agent>,
    credentials: Arc<CredentialPool>,
    pool: Arc<AgentPool>,
    policies: PolicyTable,
}

impl DebateOrchestrator {
    /// Creates an orchestrator with the standard failure policies.
    pub fn new(agent: Arc<Agent>, credentials: Arc<CredentialPool>, pool: Arc<AgentPool>) -> Self {
        Self {
            agent,
            credentials,
            pool,
            policies: PolicyTable::default(),
        }
    }

    /// Overrides the failure policy for one role.
    #[must_use]
    pub fn with_policy(mut self, role: AgentRole, policy: FailurePolicy) -> Self {
        self.policies.set(role, policy);
        self
    }

    /// The failure policy in effect for `role`.
    pub fn policy(&self, role: AgentRole) -> FailurePolicy {
        self.policies.get(role)
    }

    /// The shared worker pool.
    pub fn pool(&self) -> &Arc<AgentPool> {
        &self.pool
    }

    /// Runs a full debate over `context`.
    ///
    /// # Errors
    ///
    /// Returns a [`DebateError`] if a role governed by
    /// [`FailurePolicy::Propagate`] fails; by default only the Judge is.
    pub async fn run(&self, context: impl Into<String>) -> Result<DebateOutcome> {
        let run_id = Uuid::new_v4();
        self.run_inner(context.into())
            .instrument(info_span!("debate", %run_id))
            .await
    }

    async fn run_inner(&self, context: String) -> Result<DebateOutcome> {
        let context: Arc<str> = Arc::from(context);
        info!(context_chars = context.len(), "debate started");

        let optimist = self.submit(AgentRole::Optimist, Arc::clone(&context));
        let critic = self.submit(AgentRole::Critic, Arc::clone(&context));

        // Both sides are awaited before either outcome is inspected
        let (optimist, critic) = tokio::join!(
            settle(AgentRole::Optimist, optimist),
            settle(AgentRole::Critic, critic),
        );
        let optimist = self.policy(AgentRole::Optimist).resolve(AgentRole::Optimist, optimist)?;
        let critic = self.policy(AgentRole::Critic).resolve(AgentRole::Critic, critic)?;

        let positives = extract_points(&optimist.text, AgentRole::Optimist.max_points());
        let negatives = extract_points(&critic.text, AgentRole::Critic.max_points());
        debug!(positives = positives.len(), negatives = negatives.len(), "advocates finished");

        let synthesis = SynthesisInput::new(&context, &positives, &negatives).render();
        let judge = settle(AgentRole::Judge, self.submit(AgentRole::Judge, Arc::from(synthesis))).await;
        let judge = self.policy(AgentRole::Judge).resolve(AgentRole::Judge, judge)?;
        let verdict = extract_points(&judge.text, AgentRole::Judge.max_points());

        info!(
            positives = positives.len(),
            negatives = negatives.len(),
            verdict = verdict.len(),
            "debate finished"
        );

        Ok(DebateOutcome {
            optimist: positives,
            critic: negatives,
            judge: verdict,
        })
    }

    /// Schedules one role's invocation. The credential is drawn when the task
    /// starts running.
    fn submit(&self, role: AgentRole, context: Arc<str>) -> Submission {
        let agent = Arc::clone(&self.agent);
        let credentials = Arc::clone(&self.credentials);

        self.pool.submit(
            async move {
                let credential = credentials.next();
                agent.invoke(&credential, role, &context).await
            }
            .in_current_span(),
        )
    }
}

async fn settle(role: AgentRole, submission: Submission) -> Result<AgentResult> {
    let handle = submission.map_err(|source| DebateError::Pool { role, source })?;
    handle
        .join()
        .await
        .map_err(|source| DebateError::Pool { role, source })?
        .map_err(|source| DebateError::Transport { role, source })
}
