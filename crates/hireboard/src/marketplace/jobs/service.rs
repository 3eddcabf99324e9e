use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::domain::{CommissionEditRequest, CommissionField, JobId, JobStatus, JobSubmission};
use super::repository::{JobCommissionView, JobRecord, JobRepository, ListingRow, RepositoryError};
use crate::marketplace::commission::{CommissionEngine, CommissionPolicy, SalaryRange};

/// Service composing the commission engine with a posting repository.
///
/// Edit surfaces hold no fee logic of their own: every field change flows
/// through [`JobBoardService::edit_commission`] and the stored spec is
/// replaced wholesale with the engine's result.
pub struct JobBoardService<R> {
    engine: CommissionEngine,
    repository: Arc<R>,
}

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_job_id() -> JobId {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobId(format!("job-{id:06}"))
}

impl<R> JobBoardService<R>
where
    R: JobRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: CommissionPolicy) -> Self {
        Self {
            engine: CommissionEngine::new(policy),
            repository,
        }
    }

    pub fn engine(&self) -> &CommissionEngine {
        &self.engine
    }

    /// Store a new posting, normalizing its commission fields on the way in.
    pub fn post(
        &self,
        submission: JobSubmission,
        posted_on: NaiveDate,
    ) -> Result<JobRecord, JobBoardError> {
        let commission = self.engine.normalize(&submission.commission);
        let salary = submission
            .commission
            .salary
            .as_ref()
            .map(SalaryRange::from_raw);

        let record = JobRecord {
            job_id: next_job_id(),
            title: submission.title,
            company_name: submission.company_name,
            location: submission.location,
            salary,
            commission,
            status: JobStatus::Draft,
            posted_on: submission.posted_on.unwrap_or(posted_on),
        };

        let stored = self.repository.insert(record)?;
        info!(job_id = %stored.job_id.0, "job posting stored");
        Ok(stored)
    }

    /// Move a draft posting onto the public board.
    pub fn publish(&self, job_id: &JobId) -> Result<JobRecord, JobBoardError> {
        let mut record = self
            .repository
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;
        record.status = JobStatus::Published;
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Read-only breakdown for recruiter-facing detail pages.
    pub fn commission(&self, job_id: &JobId) -> Result<JobCommissionView, JobBoardError> {
        let record = self
            .repository
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record.commission_view())
    }

    /// Apply one form-field edit to a posting's commission and persist the
    /// recomputed spec.
    pub fn edit_commission(
        &self,
        job_id: &JobId,
        edit: &CommissionEditRequest,
    ) -> Result<JobCommissionView, JobBoardError> {
        let mut record = self
            .repository
            .fetch(job_id)?
            .ok_or(RepositoryError::NotFound)?;

        let value = edit.value.unwrap_or(0.0);
        record.commission = match edit.field {
            CommissionField::OriginalPercentage => self
                .engine
                .set_original_percentage(&record.commission, value),
            CommissionField::ReductionPercentage => self
                .engine
                .set_reduction_percentage(&record.commission, value),
            CommissionField::RecruiterPercentage => self
                .engine
                .set_recruiter_percentage(&record.commission, value),
            CommissionField::FixedAmount => self.engine.set_fixed_amount(&record.commission, value),
            CommissionField::SalaryMax => {
                record.salary = Some(match record.salary.take() {
                    Some(salary) => SalaryRange::sanitized(salary.min, value, salary.currency),
                    None => SalaryRange::sanitized(
                        0.0,
                        value,
                        record.commission.currency.clone().unwrap_or_default(),
                    ),
                });
                self.engine.apply_salary(&record.commission, value)
            }
        };

        self.repository.update(record.clone())?;
        Ok(record.commission_view())
    }

    /// Formatted rows for list surfaces, most recent postings first.
    pub fn listing_rows(&self, limit: usize) -> Result<Vec<ListingRow>, JobBoardError> {
        let mut records = self.repository.published(limit)?;
        records.sort_by(|a, b| b.posted_on.cmp(&a.posted_on));
        Ok(records.iter().map(JobRecord::listing_row).collect())
    }
}

/// Error raised by the job board service.
#[derive(Debug, thiserror::Error)]
pub enum JobBoardError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
