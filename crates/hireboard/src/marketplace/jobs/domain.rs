use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::marketplace::commission::domain::{lenient, RawJobCommission};

/// Identifier wrapper for marketplace job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Inbound posting payload from the external job-edit surfaces.
///
/// Commission and salary fields arrive in whatever shape the caller stores
/// (canonical object, legacy flats, or both) and are normalized on intake.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSubmission {
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub posted_on: Option<NaiveDate>,
    #[serde(flatten)]
    pub commission: RawJobCommission,
}

/// Lifecycle of a posting on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Draft,
    Published,
    Closed,
    Filled,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Draft => "draft",
            JobStatus::Published => "published",
            JobStatus::Closed => "closed",
            JobStatus::Filled => "filled",
        }
    }
}

/// One field-edit event from a commission form.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionEditRequest {
    pub field: CommissionField,
    #[serde(default, deserialize_with = "lenient::number")]
    pub value: Option<f64>,
}

/// Which control the user touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionField {
    OriginalPercentage,
    ReductionPercentage,
    RecruiterPercentage,
    FixedAmount,
    SalaryMax,
}
