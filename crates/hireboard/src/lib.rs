//! Domain services for the hireboard recruitment marketplace: job postings
//! and the recruiter-commission computation behind every fee-editing surface.

pub mod config;
pub mod error;
pub mod marketplace;
pub mod telemetry;
