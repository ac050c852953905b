//! The debate roles: Optimist, Critic, and Judge.
//!
//! Each role pairs a fixed instruction template with an output budget. The
//! Optimist and Critic are advocates for opposite sides; the Judge reads
//! both and settles the question.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

const OPTIMIST_INSTRUCTION: &str = "\
You are the Optimist agent. Read the venue description and point out its \
genuine strengths: what it does well, what people are likely to enjoy, and \
what makes it worth a visit. Stay grounded in the description and do not \
invent facts. Respond with a JSON array of 3 to 6 short strings, one \
strength per string, and nothing else.";

const CRITIC_INSTRUCTION: &str = "\
You are the Critic agent. Read the venue description and point out its \
weaknesses and risks: recurring complaints, inconsistencies, and anything \
that could disappoint a visitor. Stay grounded in the description and do \
not invent facts. Respond with a JSON array of 3 to 6 short strings, one \
weakness per string, and nothing else.";

const JUDGE_INSTRUCTION: &str = "\
You are the Judge agent. You receive a venue description together with an \
optimistic and a critical analysis, each as a JSON list of points. Weigh \
both sides and be decisive. Respond with a JSON array of 2 to 4 short \
strings: first the net verdict and which way it leans, then who the venue \
suits best, then the most important caution. Do not invent statistics and \
do not mention reviews, review sites, or the other agents.";

/// A participant in the debate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    /// Argues for the venue.
    Optimist,
    /// Argues against the venue.
    Critic,
    /// Weighs both sides and delivers the verdict.
    Judge,
}

impl AgentRole {
    /// All roles in debate order.
    pub const ALL: [AgentRole; 3] = [Self::Optimist, Self::Critic, Self::Judge];

    /// Human-readable role name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Optimist => "Optimist",
            Self::Critic => "Critic",
            Self::Judge => "Judge",
        }
    }

    /// Maximum number of points kept from this role's output.
    pub const fn max_points(&self) -> usize {
        match self {
            Self::Optimist | Self::Critic => 6,
            Self::Judge => 4,
        }
    }

    /// Number of points the instruction asks the model for.
    ///
    /// Advisory only; extraction enforces [`max_points`](Self::max_points)
    /// and nothing enforces the lower bound.
    pub const fn requested_points(&self) -> RangeInclusive<usize> {
        match self {
            Self::Optimist | Self::Critic => 3..=6,
            Self::Judge => 2..=4,
        }
    }

    /// The built-in instruction template for this role.
    pub const fn default_instruction(&self) -> &'static str {
        match self {
            Self::Optimist => OPTIMIST_INSTRUCTION,
            Self::Critic => CRITIC_INSTRUCTION,
            Self::Judge => JUDGE_INSTRUCTION,
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optimist => write!(f, "optimist"),
            Self::Critic => write!(f, "critic"),
            Self::Judge => write!(f, "judge"),
        }
    }
}

/// Instruction templates for all three roles.
///
/// Defaults to the built-in templates; individual roles can be overridden
/// from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    optimist: String,
    critic: String,
    judge: String,
}

impl Default for Instructions {
    fn default() -> Self {
        Self {
            optimist: OPTIMIST_INSTRUCTION.to_string(),
            critic: CRITIC_INSTRUCTION.to_string(),
            judge: JUDGE_INSTRUCTION.to_string(),
        }
    }
}

impl Instructions {
    /// Replaces the instruction for one role.
    #[must_use]
    pub fn with_override(mut self, role: AgentRole, instruction: impl Into<String>) -> Self {
        *self.slot_mut(role) = instruction.into();
        self
    }

    /// The instruction for `role`.
    pub fn for_role(&self, role: AgentRole) -> &str {
        match role {
            AgentRole::Optimist => &self.optimist,
            AgentRole::Critic => &self.critic,
            AgentRole::Judge => &self.judge,
        }
    }

    fn slot_mut(&mut self, role: AgentRole) -> &mut String {
        match role {
            AgentRole::Optimist => &mut self.optimist,
            AgentRole::Critic => &mut self.critic,
            AgentRole::Judge => &mut self.judge,
        }
    }
}
