//! Job posting intake and the commission edit surface behind the board UIs.

pub mod domain;
pub mod export;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{CommissionEditRequest, CommissionField, JobId, JobStatus, JobSubmission};
pub use export::{write_listing_csv, ExportError};
pub use repository::{JobCommissionView, JobRecord, JobRepository, ListingRow, RepositoryError};
pub use router::job_router;
pub use service::{JobBoardError, JobBoardService};
