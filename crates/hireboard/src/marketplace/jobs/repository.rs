use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{JobId, JobStatus};
use crate::marketplace::commission::{
    format_amount, CommissionBreakdownView, CommissionSpec, CommissionType, SalaryRange,
};

/// Stored posting: descriptive fields plus the normalized commission spec.
#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub job_id: JobId,
    pub title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub salary: Option<SalaryRange>,
    pub commission: CommissionSpec,
    pub status: JobStatus,
    pub posted_on: NaiveDate,
}

impl JobRecord {
    /// Wire view for edit forms and recruiter detail pages, carrying both
    /// the canonical object and the legacy flats.
    pub fn commission_view(&self) -> JobCommissionView {
        let legacy = self.commission.legacy_fields();
        JobCommissionView {
            job_id: self.job_id.clone(),
            title: self.title.clone(),
            status: self.status.label(),
            breakdown: CommissionBreakdownView::from_spec(&self.commission),
            commission: self.commission.clone(),
            commission_percentage: legacy.commission_percentage,
            commission_amount: legacy.commission_amount,
        }
    }

    /// Formatted row for jobs-list surfaces and the CSV export.
    pub fn listing_row(&self) -> ListingRow {
        let currency = self.commission.currency.as_deref();
        let fee = match self.commission.commission_type {
            CommissionType::Percentage => {
                format!("{}% of salary", self.commission.original_percentage)
            }
            CommissionType::Fixed => {
                format!("{} flat", format_amount(self.commission.fixed_amount, currency))
            }
        };

        ListingRow {
            job_id: self.job_id.0.clone(),
            title: self.title.clone(),
            company_name: self.company_name.clone(),
            status: self.status.label(),
            fee,
            recruiter_payout: format_amount(self.commission.recruiter_amount, currency),
        }
    }
}

/// Storage abstraction so the service layer can be exercised in isolation.
pub trait JobRepository: Send + Sync {
    fn insert(&self, record: JobRecord) -> Result<JobRecord, RepositoryError>;
    fn update(&self, record: JobRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &JobId) -> Result<Option<JobRecord>, RepositoryError>;
    fn published(&self, limit: usize) -> Result<Vec<JobRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Commission payload exposed over the job API.
#[derive(Debug, Clone, Serialize)]
pub struct JobCommissionView {
    pub job_id: JobId,
    pub title: String,
    pub status: &'static str,
    pub commission: CommissionSpec,
    pub commission_percentage: f64,
    pub commission_amount: f64,
    pub breakdown: CommissionBreakdownView,
}

/// Flat, display-ready listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    pub job_id: String,
    pub title: String,
    pub company_name: String,
    pub status: &'static str,
    pub fee: String,
    pub recruiter_payout: String,
}
