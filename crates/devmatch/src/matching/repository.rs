use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    DeveloperId, DeveloperProfile, ProjectId, ProjectMinimums, ProjectStatus, SkillEntry,
    SkillRequirement,
};

/// Directory record for a registered developer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperRecord {
    pub id: DeveloperId,
    pub profile: DeveloperProfile,
    pub skills: Vec<SkillEntry>,
}

impl DeveloperRecord {
    pub fn view(&self) -> DeveloperView {
        DeveloperView {
            id: self.id.clone(),
            name: self.profile.name.clone(),
            role: self.profile.role.clone(),
            total_career_years: self.profile.total_career_years,
            headline: self.profile.headline.clone(),
            skills: self.skills.clone(),
        }
    }
}

/// Directory record for a registered project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub project_name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub minimums: ProjectMinimums,
    pub requirements: Vec<SkillRequirement>,
}

impl ProjectRecord {
    pub fn is_open(&self) -> bool {
        matches!(self.status, ProjectStatus::Open)
    }

    pub fn view(&self) -> ProjectView {
        ProjectView {
            id: self.id.clone(),
            company_name: self.company_name.clone(),
            industry: self.industry.clone(),
            project_name: self.project_name.clone(),
            description: self.description.clone(),
            status: self.status.label(),
            min_total_career: self.minimums.min_total_career,
            requirements: self.requirements.clone(),
        }
    }
}

/// Ledger record for an accepted (project, developer) match.
///
/// `explanation` stores the rendered breakdown verbatim; re-accepting the
/// same pair replaces the record wholesale, `recorded_at` included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub project_id: ProjectId,
    pub developer_id: DeveloperId,
    pub score: u8,
    pub explanation: String,
    pub recorded_at: DateTime<Utc>,
}

/// Storage abstraction over registered profiles so the service module can be
/// exercised in isolation.
pub trait ProfileDirectory: Send + Sync {
    fn insert_developer(&self, record: DeveloperRecord)
        -> Result<DeveloperRecord, RepositoryError>;
    fn fetch_developer(&self, id: &DeveloperId) -> Result<Option<DeveloperRecord>, RepositoryError>;
    /// All registered developers in registration order.
    fn developers(&self) -> Result<Vec<DeveloperRecord>, RepositoryError>;
    fn insert_project(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError>;
    fn fetch_project(&self, id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError>;
    /// All registered projects in registration order.
    fn projects(&self) -> Result<Vec<ProjectRecord>, RepositoryError>;
}

/// Error enumeration for directory failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Ledger abstraction for accepted matches.
pub trait MatchLedger: Send + Sync {
    /// Upsert keyed by (project, developer); a later save replaces the
    /// earlier record.
    fn save(&self, record: MatchRecord) -> Result<(), LedgerError>;
    fn all(&self) -> Result<Vec<MatchRecord>, LedgerError>;
}

/// Ledger dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a registered developer.
#[derive(Debug, Clone, Serialize)]
pub struct DeveloperView {
    pub id: DeveloperId,
    pub name: String,
    pub role: String,
    pub total_career_years: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    pub skills: Vec<SkillEntry>,
}

/// Sanitized representation of a registered project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: ProjectId,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub project_name: String,
    pub description: String,
    pub status: &'static str,
    pub min_total_career: f64,
    pub requirements: Vec<SkillRequirement>,
}
