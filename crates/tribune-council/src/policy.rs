//! Per-role failure handling.

use tracing::warn;

use crate::agent::AgentResult;
use crate::error::DebateError;
use crate::roles::AgentRole;

/// What a debate does when one role's invocation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure and continue with empty output for the role.
    Absorb,
    /// Fail the whole debate.
    Propagate,
}

impl FailurePolicy {
    /// The standard policy: advocates are best-effort, the Judge is essential.
    pub const fn for_role(role: AgentRole) -> Self {
        match role {
            AgentRole::Optimist | AgentRole::Critic => Self::Absorb,
            AgentRole::Judge => Self::Propagate,
        }
    }

    /// Applies the policy to a role's outcome.
    pub fn resolve(
        self,
        role: AgentRole,
        outcome: Result<AgentResult, DebateError>,
    ) -> Result<AgentResult, DebateError> {
        match (self, outcome) {
            (_, Ok(result)) => Ok(result),
            (Self::Absorb, Err(err)) => {
                warn!(role = %role, error = %err, "agent failed, continuing with empty output");
                Ok(AgentResult::empty(role))
            }
            (Self::Propagate, Err(err)) => Err(err),
        }
    }
}

/// Failure policies for all three roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyTable {
    optimist: FailurePolicy,
    critic: FailurePolicy,
    judge: FailurePolicy,
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            optimist: FailurePolicy::for_role(AgentRole::Optimist),
            critic: FailurePolicy::for_role(AgentRole::Critic),
            judge: FailurePolicy::for_role(AgentRole::Judge),
        }
    }
}

impl PolicyTable {
    /// The policy for `role`.
    pub fn get(&self, role: AgentRole) -> FailurePolicy {
        match role {
            AgentRole::Optimist => self.optimist,
            AgentRole::Critic => self.critic,
            AgentRole::Judge => self.judge,
        }
    }

    /// Overrides the policy for `role`.
    pub fn set(&mut self, role: AgentRole, policy: FailurePolicy) {
        match role {
            AgentRole::Optimist => self.optimist = policy,
            AgentRole::Critic => self.critic = policy,
            AgentRole::Judge => self.judge = policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;

    fn failure(role: AgentRole) -> Result<AgentResult, DebateError> {
        Err(DebateError::Transport {
            role,
            source: TransportError::Network("down".into()),
        })
    }

    #[test]
    fn test_standard_policies() {
        let table = PolicyTable::default();
        assert_eq!(table.get(AgentRole::Optimist), FailurePolicy::Absorb);
        assert_eq!(table.get(AgentRole::Critic), FailurePolicy::Absorb);
        assert_eq!(table.get(AgentRole::Judge), FailurePolicy::Propagate);
    }

    #[test]
    fn test_absorb_yields_empty_text() {
        let result = FailurePolicy::Absorb
            .resolve(AgentRole::Critic, failure(AgentRole::Critic))
            .unwrap();
        assert_eq!(result, AgentResult::empty(AgentRole::Critic));
    }

    #[test]
    fn test_propagate_returns_error() {
        let result = FailurePolicy::Propagate.resolve(AgentRole::Judge, failure(AgentRole::Judge));
        assert_eq!(result.unwrap_err().role(), AgentRole::Judge);
    }

    #[test]
    fn test_success_passes_through() {
        let ok = AgentResult {
            role: AgentRole::Judge,
            text: "verdict".into(),
        };
        let result = FailurePolicy::Propagate
            .resolve(AgentRole::Judge, Ok(ok.clone()))
            .unwrap();
        assert_eq!(result, ok);
    }

    #[test]
    fn test_override() {
        let mut table = PolicyTable::default();
        table.set(AgentRole::Optimist, FailurePolicy::Propagate);
        assert_eq!(table.get(AgentRole::Optimist), FailurePolicy::Propagate);
        assert_eq!(table.get(AgentRole::Critic), FailurePolicy::Absorb);
    }
}
