//! Recruitment-fee computation for job postings.
//!
//! Companies set a fee as a percentage of salary or a fixed amount; the
//! platform keeps a reduction cut and the recruiter receives the remainder.
//! The same figures were historically recomputed inline on every edit
//! surface; this module is the single implementation all of them call.

pub mod domain;
mod policy;
mod rules;
mod view;

#[cfg(test)]
mod tests;

pub use domain::{
    CommissionSpec, CommissionType, CommissionWirePayload, LegacyCommissionFields,
    RawCommissionObject, RawJobCommission, RawSalaryRange, SalaryRange,
};
pub use policy::CommissionPolicy;
pub use view::{format_amount, CommissionBreakdownView};

/// Stateless calculator applying one caller's policy dials.
///
/// Every operation is a pure function from `(spec, input)` to a fresh spec;
/// callers replace their held value with the return value. Nothing here
/// performs I/O or retains state between calls, so the engine is safe to run
/// on every keystroke of an edit form.
pub struct CommissionEngine {
    policy: CommissionPolicy,
}

impl CommissionEngine {
    pub fn new(policy: CommissionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CommissionPolicy {
        &self.policy
    }

    /// Collapse a raw job record (canonical object, legacy flats, both, or
    /// neither) into one fully derived spec.
    ///
    /// Malformed numeric fields read as zero, unknown type labels read as
    /// percentage, and a stored recruiter percentage is discarded in favor of
    /// recomputing it from the fee and reduction.
    pub fn normalize(&self, raw: &RawJobCommission) -> CommissionSpec {
        let canonical = raw.commission.as_ref();
        let legacy_percentage = rules::coerce(raw.commission_percentage);
        let legacy_amount = rules::coerce(raw.commission_amount);

        let commission_type = match canonical.and_then(|c| c.commission_type.as_deref()) {
            Some(label) => CommissionType::from_label(label),
            None if legacy_percentage > 0.0 => CommissionType::Percentage,
            None if legacy_amount > 0.0 => CommissionType::Fixed,
            None => CommissionType::Percentage,
        };

        let original_percentage =
            self.policy
                .clamp_original(match canonical.and_then(|c| c.original_percentage) {
                    Some(value) => rules::coerce(Some(value)),
                    None => legacy_percentage,
                });

        let fixed_amount = match canonical.and_then(|c| c.fixed_amount) {
            Some(value) => rules::coerce(Some(value)),
            None => legacy_amount,
        };

        let reduction_percentage =
            self.policy
                .clamp_reduction(match canonical.and_then(|c| c.reduction_percentage) {
                    Some(value) => rules::coerce(Some(value)),
                    None => self.policy.default_reduction_percentage(),
                });

        let salary_reference = raw.salary.as_ref().and_then(|salary| {
            let max = rules::coerce(salary.max);
            (max > 0.0).then_some(max)
        });
        let currency = raw
            .salary
            .as_ref()
            .and_then(|salary| salary.currency.clone())
            .filter(|code| !code.is_empty());

        match commission_type {
            CommissionType::Percentage => self.percentage_spec(
                original_percentage,
                fixed_amount,
                reduction_percentage,
                legacy_amount,
                salary_reference,
                currency,
            ),
            CommissionType::Fixed => {
                self.fixed_spec(fixed_amount, reduction_percentage, salary_reference, currency)
            }
        }
    }

    /// Set the company fee percentage; the spec becomes percentage-typed.
    pub fn set_original_percentage(&self, spec: &CommissionSpec, value: f64) -> CommissionSpec {
        let original_percentage = self.policy.clamp_original(rules::coerce(Some(value)));
        self.percentage_spec(
            original_percentage,
            spec.fixed_amount,
            spec.reduction_percentage,
            spec.original_amount,
            spec.salary_reference,
            spec.currency.clone(),
        )
    }

    /// Set the platform's reduction cut; out-of-range input snaps to the
    /// nearest policy bound.
    pub fn set_reduction_percentage(&self, spec: &CommissionSpec, value: f64) -> CommissionSpec {
        let reduction_percentage = self.policy.clamp_reduction(rules::coerce(Some(value)));
        match spec.commission_type {
            CommissionType::Percentage => self.percentage_spec(
                spec.original_percentage,
                spec.fixed_amount,
                reduction_percentage,
                spec.original_amount,
                spec.salary_reference,
                spec.currency.clone(),
            ),
            CommissionType::Fixed => self.fixed_spec(
                spec.fixed_amount,
                reduction_percentage,
                spec.salary_reference,
                spec.currency.clone(),
            ),
        }
    }

    /// Set the recruiter share directly, the alternate control path to
    /// reduction-based edits. The share can never exceed the company fee; the
    /// equivalent reduction is back-computed so both controls stay in sync.
    ///
    /// Fixed-fee specs have no recruiter percentage and pass through
    /// unchanged.
    pub fn set_recruiter_percentage(&self, spec: &CommissionSpec, value: f64) -> CommissionSpec {
        if spec.commission_type == CommissionType::Fixed {
            return spec.clone();
        }

        let original_percentage = spec.original_percentage;
        let upper = original_percentage;
        let lower = self.policy.min_commission_percentage().min(upper);
        let recruiter_percentage = rules::coerce(Some(value)).clamp(lower, upper);

        let reduction_percentage = if original_percentage > 0.0 {
            (original_percentage - recruiter_percentage) / original_percentage * 100.0
        } else {
            0.0
        };

        let original_amount = match spec.salary_reference {
            Some(salary_max) => rules::percentage_amount(salary_max, original_percentage),
            None => spec.original_amount,
        };
        let recruiter_amount = if original_percentage > 0.0 {
            original_amount * recruiter_percentage / original_percentage
        } else {
            0.0
        };

        CommissionSpec {
            commission_type: CommissionType::Percentage,
            original_percentage,
            fixed_amount: spec.fixed_amount,
            reduction_percentage,
            recruiter_percentage,
            platform_fee_percentage: (original_percentage - recruiter_percentage).max(0.0),
            original_amount,
            recruiter_amount,
            currency: spec.currency.clone(),
            salary_reference: spec.salary_reference,
        }
    }

    /// Set the flat fee amount; the spec becomes fixed-typed and the current
    /// reduction is applied to derive the recruiter payout.
    pub fn set_fixed_amount(&self, spec: &CommissionSpec, value: f64) -> CommissionSpec {
        let fixed_amount = rules::coerce(Some(value));
        self.fixed_spec(
            fixed_amount,
            spec.reduction_percentage,
            spec.salary_reference,
            spec.currency.clone(),
        )
    }

    /// Recompute derived amounts against a new salary-range maximum.
    /// Idempotent; runs whenever the salary fields change.
    pub fn apply_salary(&self, spec: &CommissionSpec, salary_max: f64) -> CommissionSpec {
        let salary = rules::coerce(Some(salary_max));
        let salary_reference = (salary > 0.0).then_some(salary);

        match spec.commission_type {
            CommissionType::Percentage => {
                let shares = rules::split_fee(
                    spec.original_percentage,
                    spec.reduction_percentage,
                    &self.policy,
                );
                CommissionSpec {
                    original_amount: rules::percentage_amount(salary, spec.original_percentage),
                    recruiter_amount: rules::percentage_amount(salary, shares.recruiter_percentage),
                    salary_reference,
                    ..spec.clone()
                }
            }
            CommissionType::Fixed => CommissionSpec {
                salary_reference,
                ..spec.clone()
            },
        }
    }

    fn percentage_spec(
        &self,
        original_percentage: f64,
        fixed_amount: f64,
        reduction_percentage: f64,
        fallback_amount: f64,
        salary_reference: Option<f64>,
        currency: Option<String>,
    ) -> CommissionSpec {
        let shares = rules::split_fee(original_percentage, reduction_percentage, &self.policy);

        // Amounts derive from the salary maximum when one is known; otherwise
        // the stored amount is carried so list pages still have a figure.
        let original_amount = match salary_reference {
            Some(salary_max) => rules::percentage_amount(salary_max, original_percentage),
            None => fallback_amount,
        };
        let recruiter_amount = if original_percentage > 0.0 {
            original_amount * shares.recruiter_percentage / original_percentage
        } else {
            0.0
        };

        CommissionSpec {
            commission_type: CommissionType::Percentage,
            original_percentage,
            fixed_amount,
            reduction_percentage,
            recruiter_percentage: shares.recruiter_percentage,
            platform_fee_percentage: shares.platform_fee_percentage,
            original_amount,
            recruiter_amount,
            currency,
            salary_reference,
        }
    }

    fn fixed_spec(
        &self,
        fixed_amount: f64,
        reduction_percentage: f64,
        salary_reference: Option<f64>,
        currency: Option<String>,
    ) -> CommissionSpec {
        CommissionSpec {
            commission_type: CommissionType::Fixed,
            original_percentage: 0.0,
            fixed_amount,
            reduction_percentage,
            recruiter_percentage: 0.0,
            platform_fee_percentage: 0.0,
            original_amount: fixed_amount,
            recruiter_amount: rules::reduced_amount(fixed_amount, reduction_percentage),
            currency,
            salary_reference,
        }
    }
}
