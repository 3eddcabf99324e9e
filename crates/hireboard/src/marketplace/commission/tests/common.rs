use crate::marketplace::commission::domain::{
    RawCommissionObject, RawJobCommission, RawSalaryRange,
};
use crate::marketplace::commission::{CommissionEngine, CommissionPolicy, CommissionSpec};

pub(super) fn admin_engine() -> CommissionEngine {
    CommissionEngine::new(CommissionPolicy::admin())
}

pub(super) fn company_engine() -> CommissionEngine {
    CommissionEngine::new(CommissionPolicy::company())
}

pub(super) fn usd_salary(max: f64) -> RawSalaryRange {
    RawSalaryRange {
        min: Some(max * 0.8),
        max: Some(max),
        currency: Some("USD".to_string()),
    }
}

pub(super) fn percentage_raw(
    original_percentage: f64,
    reduction_percentage: f64,
    salary_max: f64,
) -> RawJobCommission {
    RawJobCommission {
        commission: Some(RawCommissionObject {
            commission_type: Some("percentage".to_string()),
            original_percentage: Some(original_percentage),
            reduction_percentage: Some(reduction_percentage),
            ..RawCommissionObject::default()
        }),
        salary: Some(usd_salary(salary_max)),
        ..RawJobCommission::default()
    }
}

pub(super) fn fixed_raw(fixed_amount: f64, reduction_percentage: f64) -> RawJobCommission {
    RawJobCommission {
        commission: Some(RawCommissionObject {
            commission_type: Some("fixed".to_string()),
            fixed_amount: Some(fixed_amount),
            reduction_percentage: Some(reduction_percentage),
            ..RawCommissionObject::default()
        }),
        ..RawJobCommission::default()
    }
}

pub(super) fn percentage_spec(
    engine: &CommissionEngine,
    original_percentage: f64,
    reduction_percentage: f64,
    salary_max: f64,
) -> CommissionSpec {
    engine.normalize(&percentage_raw(
        original_percentage,
        reduction_percentage,
        salary_max,
    ))
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
