//! # Tribune Council
//!
//! Multi-agent debate over a short venue description: an Optimist and a
//! Critic argue in parallel, then a Judge weighs both sides.
//!
//! ## Overview
//!
//! A caller hands the council a free-text context. Two independent model
//! calls run concurrently, their raw output is reduced to point lists, and
//! a third call synthesizes a verdict from both lists. The result is three
//! role-tagged lists of short statements.
//!
//! ## Failure Policy
//!
//! The two advocates are best-effort: if the Optimist or the Critic fails,
//! its side of the debate is simply empty and the Judge still runs. The
//! Judge is essential: its failure fails the whole debate, with no partial
//! result. This asymmetry is an explicit [`FailurePolicy`] per role, not an
//! accident of control flow.
//!
//! ## Architecture
//!
//! ```text
//!  ┌─────────────┐        ┌─────────────┐
//!  │  Optimist   │        │   Critic    │   concurrent, each with its
//!  │ (strengths) │        │ (weak spots)│   own rotated credential
//!  └──────┬──────┘        └──────┬──────┘
//!         │  extract ≤ 6         │  extract ≤ 6
//!         └──────────┬───────────┘
//!                    ▼  join (both, always)
//!            ┌───────────────┐
//!            │ SYNTHESIS     │  context + both lists + counts
//!            │ INPUT         │
//!            └───────┬───────┘
//!                    ▼
//!            ┌───────────────┐
//!            │    Judge      │  extract ≤ 4
//!            └───────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tribune_council::{Agent, DebateOrchestrator};
//!
//! let agent = Arc::new(Agent::new(transport));
//! let council = DebateOrchestrator::new(agent, credentials, pool);
//!
//! let outcome = council.run(context).await?;
//! println!("pros: {:?}", outcome.optimist);
//! println!("cons: {:?}", outcome.critic);
//! println!("verdict: {:?}", outcome.judge);
//! ```

pub mod agent;
pub mod debate;
pub mod error;
pub mod policy;
pub mod roles;
pub mod synthesis;

pub use agent::{Agent, AgentResult, ModelTransport};
pub use debate::{DebateOrchestrator, DebateOutcome};
pub use error::{DebateError, TransportError};
pub use policy::{FailurePolicy, PolicyTable};
pub use roles::{AgentRole, Instructions};
pub use synthesis::SynthesisInput;

/// Result type for council operations.
pub type Result<T> = std::result::Result<T, DebateError>;
