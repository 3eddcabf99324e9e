use crate::infra::{AppState, PolicyRole};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use hireboard::marketplace::commission::domain::RawJobCommission;
use hireboard::marketplace::commission::{
    CommissionBreakdownView, CommissionEngine, CommissionSpec,
};
use hireboard::marketplace::jobs::{job_router, JobBoardService, JobRepository};

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteRequest {
    #[serde(default)]
    pub(crate) role: PolicyRole,
    #[serde(flatten)]
    pub(crate) job: RawJobCommission,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuoteResponse {
    pub(crate) role: &'static str,
    pub(crate) commission: CommissionSpec,
    pub(crate) commission_percentage: f64,
    pub(crate) commission_amount: f64,
    pub(crate) breakdown: CommissionBreakdownView,
}

pub(crate) fn with_job_routes<R>(service: Arc<JobBoardService<R>>) -> axum::Router
where
    R: JobRepository + 'static,
{
    job_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/commission/quote",
            axum::routing::post(quote_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless "what would the recruiter see" computation: normalize the
/// submitted record under the caller role's policy and return the breakdown
/// without persisting anything.
pub(crate) async fn quote_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let QuoteRequest { role, job } = payload;

    let engine = CommissionEngine::new(role.policy(&state.commission));
    let spec = engine.normalize(&job);
    let legacy = spec.legacy_fields();
    let breakdown = CommissionBreakdownView::from_spec(&spec);

    Json(QuoteResponse {
        role: role.label(),
        commission: spec,
        commission_percentage: legacy.commission_percentage,
        commission_amount: legacy.commission_amount,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let handle = PrometheusBuilder::new()
            .build_recorder()
            .handle();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(handle),
            commission: hireboard::config::CommissionSettings {
                admin_reduction_pct: 40.0,
                company_reduction_pct: 50.0,
                min_reduction_pct: 0.0,
                max_reduction_pct: 100.0,
                min_commission_pct: 1.0,
                max_commission_pct: 50.0,
            },
        }
    }

    fn quote_request(role: PolicyRole) -> QuoteRequest {
        let job: RawJobCommission = serde_json::from_value(serde_json::json!({
            "commission": {
                "type": "percentage",
                "original_percentage": 20
            },
            "salary": {"min": 80000, "max": 100000, "currency": "USD"}
        }))
        .expect("raw job deserializes");

        QuoteRequest { role, job }
    }

    #[tokio::test]
    async fn quote_endpoint_applies_the_admin_policy() {
        let Json(body) =
            quote_endpoint(Extension(test_state()), Json(quote_request(PolicyRole::Admin))).await;

        assert_eq!(body.role, "admin");
        assert_eq!(body.commission.reduction_percentage, 40.0);
        assert_eq!(body.commission.recruiter_percentage, 12.0);
        assert_eq!(body.commission_percentage, 20.0);
        assert_eq!(body.commission_amount, 20_000.0);
    }

    #[tokio::test]
    async fn quote_endpoint_applies_the_company_policy() {
        let Json(body) = quote_endpoint(
            Extension(test_state()),
            Json(quote_request(PolicyRole::Company)),
        )
        .await;

        assert_eq!(body.role, "company");
        assert_eq!(body.commission.reduction_percentage, 50.0);
        assert_eq!(body.commission.recruiter_percentage, 10.0);
        assert_eq!(body.breakdown.recruiter_payout_label, "USD 10,000");
    }
}
