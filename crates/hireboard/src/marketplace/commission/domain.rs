use serde::{Deserialize, Serialize};

/// Salary band attached to a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

impl SalaryRange {
    /// Build a range with the `min >= 0`, `max >= min` guarantees enforced.
    pub fn sanitized(min: f64, max: f64, currency: impl Into<String>) -> Self {
        let min = if min.is_finite() && min > 0.0 { min } else { 0.0 };
        let max = if max.is_finite() && max > min { max } else { min };
        Self {
            min,
            max,
            currency: currency.into(),
        }
    }

    pub fn from_raw(raw: &RawSalaryRange) -> Self {
        Self::sanitized(
            raw.min.unwrap_or(0.0),
            raw.max.unwrap_or(0.0),
            raw.currency.clone().unwrap_or_default(),
        )
    }
}

/// Discriminant for how a company expresses its recruitment fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionType {
    Percentage,
    Fixed,
}

impl CommissionType {
    /// Read a stored type label; anything unrecognized reads as percentage.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "fixed" | "fixed_amount" | "flat" => Self::Fixed,
            _ => Self::Percentage,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CommissionType::Percentage => "percentage",
            CommissionType::Fixed => "fixed",
        }
    }
}

/// Canonical commission breakdown for one job posting.
///
/// Derived fields are always consistent with the inputs that produced them;
/// callers replace their held value with the engine's return value instead of
/// mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionSpec {
    #[serde(rename = "type")]
    pub commission_type: CommissionType,
    pub original_percentage: f64,
    pub fixed_amount: f64,
    pub reduction_percentage: f64,
    pub recruiter_percentage: f64,
    pub platform_fee_percentage: f64,
    pub original_amount: f64,
    pub recruiter_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_reference: Option<f64>,
}

impl CommissionSpec {
    /// Project the canonical spec onto the flat fields older records use.
    pub fn legacy_fields(&self) -> LegacyCommissionFields {
        LegacyCommissionFields {
            commission_percentage: match self.commission_type {
                CommissionType::Percentage => self.original_percentage,
                CommissionType::Fixed => 0.0,
            },
            commission_amount: self.original_amount,
        }
    }

    /// Persistence-boundary payload carrying both representations.
    pub fn wire_payload(&self) -> CommissionWirePayload {
        let legacy = self.legacy_fields();
        CommissionWirePayload {
            commission: self.clone(),
            commission_percentage: legacy.commission_percentage,
            commission_amount: legacy.commission_amount,
        }
    }
}

/// Flat representation predating the typed commission object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegacyCommissionFields {
    pub commission_percentage: f64,
    pub commission_amount: f64,
}

/// What the job-storage API accepts and returns: the typed object plus the
/// legacy flats, so old and new readers stay interoperable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionWirePayload {
    pub commission: CommissionSpec,
    pub commission_percentage: f64,
    pub commission_amount: f64,
}

/// Job-like input record as found in the wild: canonical object, legacy
/// flats, both, or neither, with every numeric field possibly malformed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJobCommission {
    #[serde(default)]
    pub commission: Option<RawCommissionObject>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub commission_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub commission_amount: Option<f64>,
    #[serde(default)]
    pub salary: Option<RawSalaryRange>,
}

/// Stored canonical commission object, read without trusting any field.
///
/// `recruiter_percentage` is accepted but deliberately not carried over;
/// stale external writes are repaired by recomputing it from the fee and
/// reduction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCommissionObject {
    #[serde(default, rename = "type")]
    pub commission_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub original_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fixed_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub reduction_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub recruiter_percentage: Option<f64>,
}

/// Salary block as submitted from edit forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSalaryRange {
    #[serde(default, deserialize_with = "lenient::number")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub max: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accept a number, a numeric string, or garbage; garbage reads as absent.
    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }))
    }
}
