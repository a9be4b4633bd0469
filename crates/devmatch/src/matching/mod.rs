//! Developer-to-project match scoring.
//!
//! The heart of the module is [`scoring::score_match`], a pure function that
//! gates a candidate on career and mandatory-skill minimums and then turns
//! capped, weighted level/years ratios into a bounded 0-100 score with a
//! line-per-requirement explanation. Around it sit the intake boundary for
//! upstream JSON documents, ranking, the profile directory and match ledger
//! abstractions, a service facade, and an axum router.

pub mod domain;
pub mod intake;
pub mod rank;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    DeveloperId, DeveloperProfile, ProjectId, ProjectMinimums, ProjectStatus, SkillCategory,
    SkillEntry, SkillKey, SkillRequirement,
};
pub use intake::{
    DeveloperDraft, DeveloperSubmission, IntakeError, ProjectDraft, ProjectSubmission,
    RequirementSubmission, SkillSubmission,
};
pub use rank::{rank_candidates, RankedMatch, RecommendationPolicy, RecommendationView};
pub use repository::{
    DeveloperRecord, DeveloperView, LedgerError, MatchLedger, MatchRecord, ProfileDirectory,
    ProjectRecord, ProjectView, RepositoryError,
};
pub use router::match_router;
pub use scoring::{
    score_match, FitBand, MatchDecision, MatchOutcome, RejectionReason, RequirementAssessment,
    RequirementCredit,
};
pub use service::{MatchService, MatchServiceError};
