use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::matching::domain::{
    DeveloperId, DeveloperProfile, ProjectId, ProjectMinimums, SkillCategory, SkillEntry,
    SkillRequirement,
};
use crate::matching::intake::{
    DeveloperSubmission, ProjectSubmission, RequirementSubmission, SkillSubmission,
};
use crate::matching::rank::RecommendationPolicy;
use crate::matching::repository::{
    DeveloperRecord, LedgerError, MatchLedger, MatchRecord, ProfileDirectory, ProjectRecord,
    RepositoryError,
};
use crate::matching::{match_router, MatchService};

pub(super) fn developer(name: &str, total_career_years: f64) -> DeveloperProfile {
    DeveloperProfile {
        name: name.to_string(),
        role: "backend".to_string(),
        total_career_years,
        headline: None,
    }
}

pub(super) fn skill(name: &str, level: u8, experience_years: f64) -> SkillEntry {
    SkillEntry {
        name: name.to_string(),
        category: SkillCategory::Language,
        level,
        experience_years,
        is_primary: false,
    }
}

pub(super) fn requirement(
    skill: &str,
    min_level: u8,
    min_years: f64,
    weight: u32,
    mandatory: bool,
) -> SkillRequirement {
    SkillRequirement {
        skill: skill.to_string(),
        category: SkillCategory::Language,
        min_level,
        min_years,
        weight,
        mandatory,
    }
}

pub(super) fn minimums(min_total_career: f64) -> ProjectMinimums {
    ProjectMinimums { min_total_career }
}

pub(super) fn skill_submission(
    name: &str,
    category: &str,
    level: i64,
    experience_years: f64,
    is_primary: bool,
) -> SkillSubmission {
    SkillSubmission {
        name: name.to_string(),
        category: category.to_string(),
        level,
        experience_years,
        is_primary,
    }
}

pub(super) fn requirement_submission(
    skill: &str,
    min_level: i64,
    min_years: f64,
    weight: i64,
    mandatory: bool,
) -> RequirementSubmission {
    RequirementSubmission {
        skill: skill.to_string(),
        category: "language".to_string(),
        min_level,
        min_years,
        weight,
        mandatory,
    }
}

pub(super) fn dev_submission(
    name: &str,
    role: &str,
    total_career_years: f64,
    skills: Vec<SkillSubmission>,
) -> DeveloperSubmission {
    DeveloperSubmission {
        name: name.to_string(),
        role: role.to_string(),
        total_career_years,
        headline: None,
        skills,
    }
}

/// Backend revamp fixture: two mandatory requirements and one optional, with
/// hand-checkable weights (5 + 3 + 2, attainable 20.0).
pub(super) fn commerce_project() -> ProjectSubmission {
    ProjectSubmission {
        company_name: "Hanbit Retail".to_string(),
        industry: Some("commerce".to_string()),
        project_name: "Commerce API Revamp".to_string(),
        description: "Rebuild the storefront order APIs.".to_string(),
        min_total_career: 3.0,
        requirements: vec![
            requirement_submission("Java", 4, 3.0, 5, true),
            requirement_submission("Spring Boot", 3, 2.0, 3, true),
            requirement_submission("Kubernetes", 2, 1.0, 2, false),
        ],
    }
}

/// Clears every gate and earns full ratios everywhere: scores 100.
pub(super) fn java_senior() -> DeveloperSubmission {
    dev_submission(
        "Ji-won Park",
        "backend",
        7.0,
        vec![
            skill_submission("Java", "language", 5, 6.0, true),
            skill_submission("Spring Boot", "framework", 4, 4.0, false),
            skill_submission("Kubernetes", "tool", 3, 2.0, false),
        ],
    )
}

/// Meets both mandatory requirements exactly but lacks the optional one:
/// scores 16/20 = 80.
pub(super) fn java_mid() -> DeveloperSubmission {
    dev_submission(
        "Marcus Lee",
        "backend",
        4.0,
        vec![
            skill_submission("Java", "language", 4, 3.0, true),
            skill_submission("Spring Boot", "framework", 3, 2.0, false),
        ],
    )
}

/// Two career years against the three-year minimum: rejected at the gate.
pub(super) fn junior_candidate() -> DeveloperSubmission {
    dev_submission(
        "Priya Nair",
        "backend",
        2.0,
        vec![skill_submission("Java", "language", 4, 2.0, true)],
    )
}

/// Strong elsewhere but holds no Java: rejected on the mandatory gate.
pub(super) fn python_specialist() -> DeveloperSubmission {
    dev_submission(
        "Tom Ochieng",
        "etc",
        8.0,
        vec![
            skill_submission("Python", "language", 5, 8.0, true),
            skill_submission("SQL", "db", 5, 8.0, false),
        ],
    )
}

pub(super) fn build_service() -> (
    MatchService<MemoryDirectory, MemoryLedger>,
    Arc<MemoryDirectory>,
    Arc<MemoryLedger>,
) {
    let directory = Arc::new(MemoryDirectory::default());
    let ledger = Arc::new(MemoryLedger::default());
    let service = MatchService::new(
        directory.clone(),
        ledger.clone(),
        RecommendationPolicy::default(),
    );
    (service, directory, ledger)
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    developers: Arc<Mutex<Vec<DeveloperRecord>>>,
    projects: Arc<Mutex<Vec<ProjectRecord>>>,
}

impl ProfileDirectory for MemoryDirectory {
    fn insert_developer(
        &self,
        record: DeveloperRecord,
    ) -> Result<DeveloperRecord, RepositoryError> {
        let mut guard = self.developers.lock().expect("directory mutex poisoned");
        if guard.iter().any(|held| held.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch_developer(
        &self,
        id: &DeveloperId,
    ) -> Result<Option<DeveloperRecord>, RepositoryError> {
        let guard = self.developers.lock().expect("directory mutex poisoned");
        Ok(guard.iter().find(|held| &held.id == id).cloned())
    }

    fn developers(&self) -> Result<Vec<DeveloperRecord>, RepositoryError> {
        let guard = self.developers.lock().expect("directory mutex poisoned");
        Ok(guard.clone())
    }

    fn insert_project(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        let mut guard = self.projects.lock().expect("directory mutex poisoned");
        if guard.iter().any(|held| held.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch_project(&self, id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        let guard = self.projects.lock().expect("directory mutex poisoned");
        Ok(guard.iter().find(|held| &held.id == id).cloned())
    }

    fn projects(&self) -> Result<Vec<ProjectRecord>, RepositoryError> {
        let guard = self.projects.lock().expect("directory mutex poisoned");
        Ok(guard.clone())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryLedger {
    records: Arc<Mutex<Vec<MatchRecord>>>,
}

impl MemoryLedger {
    pub(super) fn records(&self) -> Vec<MatchRecord> {
        self.records.lock().expect("ledger mutex poisoned").clone()
    }
}

impl MatchLedger for MemoryLedger {
    fn save(&self, record: MatchRecord) -> Result<(), LedgerError> {
        let mut guard = self.records.lock().expect("ledger mutex poisoned");
        match guard.iter_mut().find(|held| {
            held.project_id == record.project_id && held.developer_id == record.developer_id
        }) {
            Some(existing) => *existing = record,
            None => guard.push(record),
        }
        Ok(())
    }

    fn all(&self) -> Result<Vec<MatchRecord>, LedgerError> {
        Ok(self.records())
    }
}

pub(super) struct ConflictDirectory;

impl ProfileDirectory for ConflictDirectory {
    fn insert_developer(
        &self,
        _record: DeveloperRecord,
    ) -> Result<DeveloperRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch_developer(
        &self,
        _id: &DeveloperId,
    ) -> Result<Option<DeveloperRecord>, RepositoryError> {
        Ok(None)
    }

    fn developers(&self) -> Result<Vec<DeveloperRecord>, RepositoryError> {
        Ok(Vec::new())
    }

    fn insert_project(&self, _record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch_project(&self, _id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        Ok(None)
    }

    fn projects(&self) -> Result<Vec<ProjectRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableDirectory;

impl ProfileDirectory for UnavailableDirectory {
    fn insert_developer(
        &self,
        _record: DeveloperRecord,
    ) -> Result<DeveloperRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn fetch_developer(
        &self,
        _id: &DeveloperId,
    ) -> Result<Option<DeveloperRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn developers(&self) -> Result<Vec<DeveloperRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn insert_project(&self, _record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn fetch_project(&self, _id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn projects(&self) -> Result<Vec<ProjectRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }
}

pub(super) struct UnavailableLedger;

impl MatchLedger for UnavailableLedger {
    fn save(&self, _record: MatchRecord) -> Result<(), LedgerError> {
        Err(LedgerError::Unavailable("ledger offline".to_string()))
    }

    fn all(&self) -> Result<Vec<MatchRecord>, LedgerError> {
        Err(LedgerError::Unavailable("ledger offline".to_string()))
    }
}

pub(super) fn match_router_with_service(
    service: MatchService<MemoryDirectory, MemoryLedger>,
) -> axum::Router {
    match_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
