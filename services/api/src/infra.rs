use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use devmatch::matching::{
    DeveloperId, DeveloperRecord, LedgerError, MatchLedger, MatchRecord, ProfileDirectory,
    ProjectId, ProjectRecord, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Records keep registration order so equal-score rankings stay stable.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileDirectory {
    developers: Arc<Mutex<Vec<DeveloperRecord>>>,
    projects: Arc<Mutex<Vec<ProjectRecord>>>,
}

impl ProfileDirectory for InMemoryProfileDirectory {
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
pub(crate) struct InMemoryMatchLedger {
    records: Arc<Mutex<Vec<MatchRecord>>>,
}

impl MatchLedger for InMemoryMatchLedger {
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
        let guard = self.records.lock().expect("ledger mutex poisoned");
        Ok(guard.clone())
    }
}
