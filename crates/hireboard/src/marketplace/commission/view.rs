use serde::Serialize;

use super::domain::{CommissionSpec, CommissionType};

/// Display-ready breakdown for listing and detail surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionBreakdownView {
    pub fee_type: &'static str,
    pub original_percentage: f64,
    pub recruiter_percentage: f64,
    pub platform_fee_percentage: f64,
    pub reduction_percentage: f64,
    pub original_amount: f64,
    pub recruiter_amount: f64,
    pub fee_label: String,
    pub recruiter_payout_label: String,
}

impl CommissionBreakdownView {
    pub fn from_spec(spec: &CommissionSpec) -> Self {
        let currency = spec.currency.as_deref();
        let fee_label = match spec.commission_type {
            CommissionType::Percentage => {
                format!("{}% of salary", trim_pct(round2(spec.original_percentage)))
            }
            CommissionType::Fixed => format!("{} flat", format_amount(spec.fixed_amount, currency)),
        };

        Self {
            fee_type: spec.commission_type.label(),
            original_percentage: round2(spec.original_percentage),
            recruiter_percentage: round2(spec.recruiter_percentage),
            platform_fee_percentage: round2(spec.platform_fee_percentage),
            reduction_percentage: round2(spec.reduction_percentage),
            original_amount: round2(spec.original_amount),
            recruiter_amount: round2(spec.recruiter_amount),
            fee_label,
            recruiter_payout_label: format_amount(spec.recruiter_amount, currency),
        }
    }
}

/// Format a monetary amount the way list pages render it: whole units with
/// thousands separators, prefixed with the currency code when known.
pub fn format_amount(amount: f64, currency: Option<&str>) -> String {
    let whole = if amount.is_finite() && amount > 0.0 {
        amount.round() as u64
    } else {
        0
    };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match currency {
        Some(code) if !code.is_empty() => format!("{code} {grouped}"),
        _ => grouped,
    }
}

fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

fn trim_pct(value: f64) -> String {
    if (value - value.trunc()).abs() < f64::EPSILON {
        format!("{}", value.trunc() as i64)
    } else {
        format!("{value}")
    }
}
