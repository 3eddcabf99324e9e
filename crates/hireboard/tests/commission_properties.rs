//! Property-based invariants for the commission engine.
//!
//! Covers, over bounded generated inputs:
//! - Non-negativity of every derived share and amount
//! - Recruiter share bounded by the company fee
//! - Additivity of recruiter and platform shares
//! - Round-trip between the direct and reduction-based control paths
//! - Normalization idempotence
//! - Reduction clamping to policy bounds

use proptest::prelude::*;

use hireboard::marketplace::commission::domain::{
    RawCommissionObject, RawJobCommission, RawSalaryRange,
};
use hireboard::marketplace::commission::{CommissionEngine, CommissionPolicy};

const EPS: f64 = 1e-6;

fn engine() -> CommissionEngine {
    CommissionEngine::new(CommissionPolicy::admin())
}

fn percentage_raw(
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
        salary: Some(RawSalaryRange {
            min: Some(salary_max / 2.0),
            max: Some(salary_max),
            currency: Some("USD".to_string()),
        }),
        ..RawJobCommission::default()
    }
}

/// Company fee percentages, deliberately wider than the policy cap.
fn fee_pct() -> impl Strategy<Value = f64> {
    0.0f64..120.0
}

/// Reduction inputs, including values far outside the valid range.
fn reduction_pct() -> impl Strategy<Value = f64> {
    -200.0f64..400.0
}

fn salary_max() -> impl Strategy<Value = f64> {
    1_000.0f64..1_000_000.0
}

proptest! {
    #[test]
    fn derived_figures_are_never_negative(
        fee in fee_pct(),
        reduction in reduction_pct(),
        salary in salary_max(),
    ) {
        let spec = engine().normalize(&percentage_raw(fee, reduction, salary));

        prop_assert!(spec.recruiter_percentage >= 0.0);
        prop_assert!(spec.platform_fee_percentage >= 0.0);
        prop_assert!(spec.original_amount >= 0.0);
        prop_assert!(spec.recruiter_amount >= 0.0);
    }

    #[test]
    fn recruiter_share_never_exceeds_company_fee(
        fee in fee_pct(),
        reduction in reduction_pct(),
        salary in salary_max(),
    ) {
        let spec = engine().normalize(&percentage_raw(fee, reduction, salary));

        prop_assert!(spec.recruiter_percentage <= spec.original_percentage + EPS);
        prop_assert!(spec.recruiter_amount <= spec.original_amount + EPS);
    }

    #[test]
    fn shares_add_up_to_the_company_fee(
        fee in 0.1f64..120.0,
        reduction in reduction_pct(),
        salary in salary_max(),
    ) {
        let spec = engine().normalize(&percentage_raw(fee, reduction, salary));

        prop_assert!(
            (spec.recruiter_percentage + spec.platform_fee_percentage
                - spec.original_percentage)
                .abs()
                < EPS
        );
    }

    #[test]
    fn direct_and_reduction_paths_round_trip(
        fee in 2.0f64..50.0,
        target in 1.0f64..50.0,
        salary in salary_max(),
    ) {
        let engine = engine();
        let spec = engine.normalize(&percentage_raw(fee, 40.0, salary));

        let direct = engine.set_recruiter_percentage(&spec, target);
        let replayed = engine.set_reduction_percentage(&spec, direct.reduction_percentage);

        // The direct edit may itself clamp; the round trip must land on the
        // clamped value, not the requested one.
        prop_assert!(
            (replayed.recruiter_percentage - direct.recruiter_percentage).abs() < EPS,
            "direct {} vs replayed {}",
            direct.recruiter_percentage,
            replayed.recruiter_percentage
        );
    }

    #[test]
    fn normalization_is_idempotent(
        fee in fee_pct(),
        reduction in reduction_pct(),
        salary in salary_max(),
    ) {
        let engine = engine();
        let raw = percentage_raw(fee, reduction, salary);
        prop_assert_eq!(engine.normalize(&raw), engine.normalize(&raw));
    }

    #[test]
    fn reduction_edits_stay_inside_policy_bounds(
        fee in fee_pct(),
        salary in salary_max(),
        attempted in -10_000.0f64..10_000.0,
    ) {
        let engine = engine();
        let policy = engine.policy();
        let spec = engine.normalize(&percentage_raw(fee, 40.0, salary));

        let updated = engine.set_reduction_percentage(&spec, attempted);

        prop_assert!(updated.reduction_percentage >= policy.min_reduction_percentage());
        prop_assert!(updated.reduction_percentage <= policy.max_reduction_percentage());
    }

    #[test]
    fn fixed_fee_payout_matches_the_reduction_formula(
        amount in 0.0f64..1_000_000.0,
        reduction in 0.0f64..100.0,
    ) {
        let engine = engine();
        let raw = RawJobCommission {
            commission: Some(RawCommissionObject {
                commission_type: Some("fixed".to_string()),
                fixed_amount: Some(amount),
                reduction_percentage: Some(reduction),
                ..RawCommissionObject::default()
            }),
            ..RawJobCommission::default()
        };

        let spec = engine.normalize(&raw);
        let expected = amount * (100.0 - reduction) / 100.0;

        prop_assert!((spec.recruiter_amount - expected).abs() < EPS);
        prop_assert!(spec.recruiter_amount <= spec.original_amount + EPS);
    }
}
