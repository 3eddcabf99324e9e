use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::infra::{parse_date, parse_role, InMemoryJobRepository, PolicyRole};
use hireboard::config::AppConfig;
use hireboard::error::AppError;
use hireboard::marketplace::commission::domain::{
    RawCommissionObject, RawJobCommission, RawSalaryRange,
};
use hireboard::marketplace::commission::{CommissionBreakdownView, CommissionEngine};
use hireboard::marketplace::jobs::{
    write_listing_csv, CommissionEditRequest, CommissionField, JobBoardService, JobSubmission,
};

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Caller role selecting the policy dials (admin or company)
    #[arg(long, default_value = "company", value_parser = parse_role)]
    pub(crate) role: PolicyRole,
    /// Company fee as a percentage of salary
    #[arg(long)]
    pub(crate) percentage: Option<f64>,
    /// Company fee as a flat amount (switches the quote to fixed mode)
    #[arg(long)]
    pub(crate) fixed: Option<f64>,
    /// Platform reduction override; defaults to the role's configured value
    #[arg(long)]
    pub(crate) reduction: Option<f64>,
    /// Salary-range maximum the amounts derive from
    #[arg(long)]
    pub(crate) salary_max: Option<f64>,
    /// Salary currency code used for display
    #[arg(long, default_value = "USD")]
    pub(crate) currency: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Posting date used for the demo records (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) posted_on: Option<NaiveDate>,
    /// Write the closing listing export to this path instead of stdout
    #[arg(long)]
    pub(crate) csv_out: Option<PathBuf>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = CommissionEngine::new(args.role.policy(&config.commission));

    let commission_type = if args.fixed.is_some() && args.percentage.is_none() {
        "fixed"
    } else {
        "percentage"
    };

    let raw = RawJobCommission {
        commission: Some(RawCommissionObject {
            commission_type: Some(commission_type.to_string()),
            original_percentage: args.percentage,
            fixed_amount: args.fixed,
            reduction_percentage: args.reduction,
            ..RawCommissionObject::default()
        }),
        salary: args.salary_max.map(|max| RawSalaryRange {
            min: None,
            max: Some(max),
            currency: Some(args.currency.clone()),
        }),
        ..RawJobCommission::default()
    };

    let spec = engine.normalize(&raw);
    let breakdown = CommissionBreakdownView::from_spec(&spec);

    println!("Commission quote ({} policy)", args.role.label());
    println!("- Company fee: {}", breakdown.fee_label);
    println!(
        "- Platform reduction: {}% -> recruiter keeps {}%",
        breakdown.reduction_percentage, breakdown.recruiter_percentage
    );
    println!("- Recruiter payout: {}", breakdown.recruiter_payout_label);

    match serde_json::to_string_pretty(&spec.wire_payload()) {
        Ok(json) => println!("Wire payload:\n{json}"),
        Err(err) => println!("Wire payload unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { posted_on, csv_out } = args;
    let posted_on = posted_on.unwrap_or_else(|| Local::now().date_naive());

    let config = AppConfig::load()?;
    let repository = Arc::new(InMemoryJobRepository::default());
    let service = JobBoardService::new(repository, config.commission.admin_policy());

    println!("Job board demo");

    let percentage_job = service.post(
        JobSubmission {
            title: "Senior Backend Engineer".to_string(),
            company_name: "Meridian Analytics".to_string(),
            location: Some("Berlin".to_string()),
            posted_on: Some(posted_on),
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
        },
        posted_on,
    )?;

    let legacy_job = service.post(
        JobSubmission {
            title: "Recruitment Consultant".to_string(),
            company_name: "Harbor Staffing".to_string(),
            location: None,
            posted_on: Some(posted_on),
            commission: RawJobCommission {
                commission_amount: Some(7_500.0),
                ..RawJobCommission::default()
            },
        },
        posted_on,
    )?;

    for record in [&percentage_job, &legacy_job] {
        let view = record.commission_view();
        println!(
            "- Stored {} ({}): fee {}, recruiter payout {}",
            view.job_id.0,
            record.title,
            view.breakdown.fee_label,
            view.breakdown.recruiter_payout_label
        );
    }

    println!("\nAdjusting the platform cut on {}", percentage_job.job_id.0);
    let view = service.edit_commission(
        &percentage_job.job_id,
        &CommissionEditRequest {
            field: CommissionField::ReductionPercentage,
            value: Some(25.0),
        },
    )?;
    println!(
        "- Reduction {}% -> recruiter {}% ({})",
        view.breakdown.reduction_percentage,
        view.breakdown.recruiter_percentage,
        view.breakdown.recruiter_payout_label
    );

    service.publish(&percentage_job.job_id)?;
    service.publish(&legacy_job.job_id)?;

    let rows = service.listing_rows(50)?;
    println!("\nPublished listings");
    for row in &rows {
        println!(
            "- {} | {} | {} | fee {} | payout {}",
            row.job_id, row.title, row.company_name, row.fee, row.recruiter_payout
        );
    }

    match csv_out {
        Some(path) => {
            let file = File::create(&path)?;
            write_listing_csv(file, &rows)?;
            println!("\nListing export written to {}", path.display());
        }
        None => {
            let mut buffer = Vec::new();
            write_listing_csv(&mut buffer, &rows)?;
            println!("\nListing export:\n{}", String::from_utf8_lossy(&buffer));
        }
    }

    Ok(())
}
