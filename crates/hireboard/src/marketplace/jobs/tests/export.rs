use super::common::*;
use crate::marketplace::jobs::export::write_listing_csv;

#[test]
fn listing_csv_contains_header_and_rows() {
    let (service, _) = build_service();
    let record = service
        .post(submission(), posted_on())
        .expect("posting stores");
    service.publish(&record.job_id).expect("publish works");

    let rows = service.listing_rows(10).expect("listing rows");
    let mut buffer = Vec::new();
    write_listing_csv(&mut buffer, &rows).expect("csv writes");

    let csv = String::from_utf8(buffer).expect("utf8 output");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("job_id,title,company,status,fee,recruiter_payout")
    );

    let row = lines.next().expect("one data row");
    assert!(row.contains("Senior Backend Engineer"));
    assert!(row.contains("20% of salary"));
    assert!(row.contains("\"USD 12,000\""));
}

#[test]
fn empty_listing_exports_header_only() {
    let mut buffer = Vec::new();
    write_listing_csv(&mut buffer, &[]).expect("csv writes");

    let csv = String::from_utf8(buffer).expect("utf8 output");
    assert_eq!(csv.trim(), "job_id,title,company,status,fee,recruiter_payout");
}
