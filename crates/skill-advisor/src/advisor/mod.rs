//! Personalised progression advice for Old School RuneScape accounts.
//!
//! A [`Profile`] goes through a fixed set of rule evaluators. Each one either
//! proposes a recommendation at a priority tier or abstains, and the selector
//! keeps the top three. The engine is pure; the service wraps it with profile
//! storage and the router exposes both over HTTP.

pub mod content;
pub mod domain;
pub mod evaluation;
pub mod hiscores;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AdviceSet, GameMode, Goal, Membership, Profile, ProfileId, ProfileSubmission,
    Recommendation, SkillLevel, SkillLevels,
};
pub use evaluation::{
    AdviceEngine, Candidate, EngineError, Priority, Proposal, RuleEvaluator, Selector,
    ADVICE_LIMIT,
};
pub use hiscores::{fetch_hiscores, parse_hiscores, HiscoresClient, HiscoresError};
pub use repository::{JsonFileProfileStore, ProfileRecord, ProfileStore, StoreError};
pub use router::{advisor_router, HiscoresImport};
pub use service::{AdvisorService, AdvisorServiceError};
