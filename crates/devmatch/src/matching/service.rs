use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{DeveloperId, ProjectId, ProjectStatus};
use super::intake::{self, DeveloperSubmission, IntakeError, ProjectSubmission};
use super::rank::{rank_candidates, RankedMatch, RecommendationPolicy};
use super::repository::{
    DeveloperRecord, LedgerError, MatchLedger, MatchRecord, ProfileDirectory, ProjectRecord,
    RepositoryError,
};
use super::scoring::score_match;

/// Service composing the intake boundary, profile directory, scoring engine,
/// and match ledger.
pub struct MatchService<D, L> {
    directory: Arc<D>,
    ledger: Arc<L>,
    policy: RecommendationPolicy,
}

static DEVELOPER_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static PROJECT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_developer_id() -> DeveloperId {
    let id = DEVELOPER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DeveloperId(format!("dev-{id:06}"))
}

fn next_project_id() -> ProjectId {
    let id = PROJECT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProjectId(format!("proj-{id:06}"))
}

impl<D, L> MatchService<D, L>
where
    D: ProfileDirectory + 'static,
    L: MatchLedger + 'static,
{
    pub fn new(directory: Arc<D>, ledger: Arc<L>, policy: RecommendationPolicy) -> Self {
        Self {
            directory,
            ledger,
            policy,
        }
    }

    pub fn policy(&self) -> RecommendationPolicy {
        self.policy
    }

    /// Register a developer document, returning the directory-backed record.
    pub fn register_developer(
        &self,
        submission: DeveloperSubmission,
    ) -> Result<DeveloperRecord, MatchServiceError> {
        let draft = intake::developer_from_submission(submission)?;
        let record = DeveloperRecord {
            id: next_developer_id(),
            profile: draft.profile,
            skills: draft.skills,
        };

        let stored = self.directory.insert_developer(record)?;
        info!(
            developer = %stored.id,
            skills = stored.skills.len(),
            "developer registered"
        );
        Ok(stored)
    }

    /// Register a project document, returning the directory-backed record.
    pub fn register_project(
        &self,
        submission: ProjectSubmission,
    ) -> Result<ProjectRecord, MatchServiceError> {
        let draft = intake::project_from_submission(submission)?;
        let record = ProjectRecord {
            id: next_project_id(),
            company_name: draft.company_name,
            industry: draft.industry,
            project_name: draft.project_name,
            description: draft.description,
            status: ProjectStatus::Open,
            minimums: draft.minimums,
            requirements: draft.requirements,
        };

        let stored = self.directory.insert_project(record)?;
        if stored.requirements.is_empty() {
            warn!(project = %stored.id, "project registered without requirements");
        }
        info!(
            project = %stored.id,
            requirements = stored.requirements.len(),
            "project registered"
        );
        Ok(stored)
    }

    /// Fetch a registered developer for API responses.
    pub fn developer(&self, id: &DeveloperId) -> Result<DeveloperRecord, MatchServiceError> {
        self.directory
            .fetch_developer(id)?
            .ok_or_else(|| MatchServiceError::UnknownDeveloper(id.clone()))
    }

    /// Fetch a registered project for API responses.
    pub fn project(&self, id: &ProjectId) -> Result<ProjectRecord, MatchServiceError> {
        self.directory
            .fetch_project(id)?
            .ok_or_else(|| MatchServiceError::UnknownProject(id.clone()))
    }

    /// Projects still accepting candidates, in registration order.
    pub fn open_projects(&self) -> Result<Vec<ProjectRecord>, MatchServiceError> {
        let projects = self.directory.projects()?;
        Ok(projects
            .into_iter()
            .filter(|project| project.is_open())
            .collect())
    }

    /// Rank every registered developer against a project.
    pub fn recommend(
        &self,
        project_id: &ProjectId,
        limit: Option<usize>,
    ) -> Result<Vec<RankedMatch>, MatchServiceError> {
        let project = self.project(project_id)?;
        let developers = self.directory.developers()?;
        let limit = self.policy.resolve(limit);

        let ranked = rank_candidates(&project, &developers, limit);
        debug!(
            project = %project.id,
            candidates = developers.len(),
            ranked = ranked.len(),
            limit,
            "recommendations computed"
        );
        Ok(ranked)
    }

    /// Score one pair and record the acceptance in the ledger.
    ///
    /// Pairs that score 0 are refused: they are either ineligible or have
    /// nothing attainable, and the ledger tracks actionable matches only.
    pub fn accept_match(
        &self,
        project_id: &ProjectId,
        developer_id: &DeveloperId,
    ) -> Result<MatchRecord, MatchServiceError> {
        let project = self.project(project_id)?;
        let developer = self.developer(developer_id)?;

        let outcome = score_match(
            &developer.profile,
            &developer.skills,
            &project.minimums,
            &project.requirements,
        );
        if outcome.score == 0 {
            return Err(MatchServiceError::IneligibleMatch {
                explanation: outcome.explanation(),
            });
        }

        let record = MatchRecord {
            project_id: project.id.clone(),
            developer_id: developer.id.clone(),
            score: outcome.score,
            explanation: outcome.explanation(),
            recorded_at: Utc::now(),
        };
        self.ledger.save(record.clone())?;
        info!(
            project = %record.project_id,
            developer = %record.developer_id,
            score = record.score,
            "match recorded"
        );
        Ok(record)
    }

    /// Ledger contents, newest first.
    pub fn saved_matches(&self) -> Result<Vec<MatchRecord>, MatchServiceError> {
        let mut records = self.ledger.all()?;
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(records)
    }
}

/// Error raised by the match service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Directory(#[from] RepositoryError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("developer {0} is not registered")]
    UnknownDeveloper(DeveloperId),
    #[error("project {0} is not registered")]
    UnknownProject(ProjectId),
    #[error("pair is not eligible to match: {explanation}")]
    IneligibleMatch { explanation: String },
}
