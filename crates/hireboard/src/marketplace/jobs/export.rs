use std::io::Write;

use csv::Writer;

use super::repository::ListingRow;

/// Error raised while producing the listing export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write listing row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush listing export: {0}")]
    Io(#[from] std::io::Error),
}

/// Write listing rows as the flat CSV consumed by ops reporting.
pub fn write_listing_csv<W: Write>(writer: W, rows: &[ListingRow]) -> Result<(), ExportError> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record([
        "job_id",
        "title",
        "company",
        "status",
        "fee",
        "recruiter_payout",
    ])?;

    for row in rows {
        csv_writer.write_record([
            row.job_id.as_str(),
            row.title.as_str(),
            row.company_name.as_str(),
            row.status,
            row.fee.as_str(),
            row.recruiter_payout.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
