use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::marketplace::commission::domain::{
    RawCommissionObject, RawJobCommission, RawSalaryRange,
};
use crate::marketplace::commission::CommissionPolicy;
use crate::marketplace::jobs::domain::{JobId, JobSubmission};
use crate::marketplace::jobs::repository::{JobRecord, JobRepository, RepositoryError};
use crate::marketplace::jobs::router::job_router;
use crate::marketplace::jobs::service::JobBoardService;

pub(super) fn posted_on() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

pub(super) fn submission() -> JobSubmission {
    JobSubmission {
        title: "Senior Backend Engineer".to_string(),
        company_name: "Meridian Analytics".to_string(),
        location: Some("Berlin".to_string()),
        posted_on: Some(posted_on()),
        commission: RawJobCommission {
            commission: Some(RawCommissionObject {
                commission_type: Some("percentage".to_string()),
                original_percentage: Some(20.0),
                reduction_percentage: Some(40.0),
                ..RawCommissionObject::default()
            }),
            salary: Some(RawSalaryRange {
                min: Some(80_000.0),
                max: Some(100_000.0),
                currency: Some("USD".to_string()),
            }),
            ..RawJobCommission::default()
        },
    }
}

pub(super) fn legacy_submission() -> JobSubmission {
    JobSubmission {
        title: "Recruitment Consultant".to_string(),
        company_name: "Harbor Staffing".to_string(),
        location: None,
        posted_on: Some(posted_on()),
        commission: RawJobCommission {
            commission_percentage: Some(15.0),
            commission_amount: Some(7_500.0),
            ..RawJobCommission::default()
        },
    }
}

pub(super) fn build_service() -> (JobBoardService<MemoryJobRepository>, Arc<MemoryJobRepository>) {
    let repository = Arc::new(MemoryJobRepository::default());
    let service = JobBoardService::new(repository.clone(), CommissionPolicy::admin());
    (service, repository)
}

pub(super) fn job_router_with_service(
    service: JobBoardService<MemoryJobRepository>,
) -> axum::Router {
    job_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryJobRepository {
    pub(super) records: Arc<Mutex<HashMap<JobId, JobRecord>>>,
}

impl JobRepository for MemoryJobRepository {
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
        guard.insert(record.job_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &JobId) -> Result<Option<JobRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn published(&self, limit: usize) -> Result<Vec<JobRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == crate::marketplace::jobs::domain::JobStatus::Published)
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl JobRepository for UnavailableRepository {
    fn insert(&self, _record: JobRecord) -> Result<JobRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: JobRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &JobId) -> Result<Option<JobRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn published(&self, _limit: usize) -> Result<Vec<JobRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
