const DEFAULT_ADMIN_REDUCTION_PCT: f64 = 40.0;
const DEFAULT_COMPANY_REDUCTION_PCT: f64 = 50.0;
const DEFAULT_MIN_REDUCTION_PCT: f64 = 0.0;
const DEFAULT_MAX_REDUCTION_PCT: f64 = 100.0;
const DEFAULT_MIN_COMMISSION_PCT: f64 = 1.0;
const DEFAULT_MAX_COMMISSION_PCT: f64 = 50.0;

/// Per-caller dials for the commission computation.
///
/// Admin/internal surfaces and company-facing surfaces run the same engine
/// under different defaults (40% vs 50% platform reduction), so the dials are
/// carried by the caller instead of being engine constants.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionPolicy {
    default_reduction_percentage: f64,
    min_reduction_percentage: f64,
    max_reduction_percentage: f64,
    min_commission_percentage: f64,
    max_commission_percentage: f64,
}

impl CommissionPolicy {
    pub fn new(
        default_reduction_percentage: f64,
        min_reduction_percentage: f64,
        max_reduction_percentage: f64,
        min_commission_percentage: f64,
        max_commission_percentage: f64,
    ) -> Self {
        let min_reduction = sanitize_pct(min_reduction_percentage, DEFAULT_MIN_REDUCTION_PCT);
        let max_reduction =
            sanitize_pct(max_reduction_percentage, DEFAULT_MAX_REDUCTION_PCT).max(min_reduction);
        let default_reduction = sanitize_pct(default_reduction_percentage, DEFAULT_ADMIN_REDUCTION_PCT)
            .clamp(min_reduction, max_reduction);
        let max_commission = sanitize_pct(max_commission_percentage, DEFAULT_MAX_COMMISSION_PCT);
        let min_commission =
            sanitize_pct(min_commission_percentage, DEFAULT_MIN_COMMISSION_PCT).min(max_commission);

        Self {
            default_reduction_percentage: default_reduction,
            min_reduction_percentage: min_reduction,
            max_reduction_percentage: max_reduction,
            min_commission_percentage: min_commission,
            max_commission_percentage: max_commission,
        }
    }

    /// Dials used by admin and internal job-edit surfaces.
    pub fn admin() -> Self {
        Self::new(
            DEFAULT_ADMIN_REDUCTION_PCT,
            DEFAULT_MIN_REDUCTION_PCT,
            DEFAULT_MAX_REDUCTION_PCT,
            DEFAULT_MIN_COMMISSION_PCT,
            DEFAULT_MAX_COMMISSION_PCT,
        )
    }

    /// Dials used by company-facing job-edit surfaces.
    pub fn company() -> Self {
        Self::new(
            DEFAULT_COMPANY_REDUCTION_PCT,
            DEFAULT_MIN_REDUCTION_PCT,
            DEFAULT_MAX_REDUCTION_PCT,
            DEFAULT_MIN_COMMISSION_PCT,
            DEFAULT_MAX_COMMISSION_PCT,
        )
    }

    pub fn default_reduction_percentage(&self) -> f64 {
        self.default_reduction_percentage
    }

    pub fn min_reduction_percentage(&self) -> f64 {
        self.min_reduction_percentage
    }

    pub fn max_reduction_percentage(&self) -> f64 {
        self.max_reduction_percentage
    }

    pub fn min_commission_percentage(&self) -> f64 {
        self.min_commission_percentage
    }

    pub fn max_commission_percentage(&self) -> f64 {
        self.max_commission_percentage
    }

    /// Snap a reduction percentage to the deployment bounds.
    pub fn clamp_reduction(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default_reduction_percentage;
        }
        value.clamp(self.min_reduction_percentage, self.max_reduction_percentage)
    }

    /// Bound a company-set fee percentage to `[0, max_commission]`.
    pub fn clamp_original(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        value.clamp(0.0, self.max_commission_percentage)
    }
}

impl Default for CommissionPolicy {
    fn default() -> Self {
        Self::admin()
    }
}

fn sanitize_pct(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        value
    } else {
        fallback
    }
}
