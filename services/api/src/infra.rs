use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};

use hireboard::config::CommissionSettings;
use hireboard::marketplace::commission::CommissionPolicy;
use hireboard::marketplace::jobs::{JobId, JobRecord, JobRepository, JobStatus, RepositoryError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) commission: CommissionSettings,
}

/// Which edit surface a request is acting for; each carries its own policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PolicyRole {
    Admin,
    Company,
}

impl Default for PolicyRole {
    fn default() -> Self {
        Self::Company
    }
}

impl PolicyRole {
    pub(crate) const fn label(self) -> &'static str {
        match self {
            PolicyRole::Admin => "admin",
            PolicyRole::Company => "company",
        }
    }

    pub(crate) fn policy(self, settings: &CommissionSettings) -> CommissionPolicy {
        match self {
            PolicyRole::Admin => settings.admin_policy(),
            PolicyRole::Company => settings.company_policy(),
        }
    }

    pub(crate) fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" | "internal" => Ok(Self::Admin),
            "company" => Ok(Self::Company),
            other => Err(format!("unknown role '{other}' (expected admin or company)")),
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryJobRepository {
    records: Arc<Mutex<HashMap<JobId, JobRecord>>>,
}

impl JobRepository for InMemoryJobRepository {
    fn insert(&self, record: JobRecord) -> Result<JobRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.job_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.job_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: JobRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.job_id) {
            guard.insert(record.job_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &JobId) -> Result<Option<JobRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn published(&self, limit: usize) -> Result<Vec<JobRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == JobStatus::Published)
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_role(raw: &str) -> Result<PolicyRole, String> {
    PolicyRole::parse(raw)
}
