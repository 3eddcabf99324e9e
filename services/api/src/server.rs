use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryJobRepository};
use crate::routes::with_job_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use hireboard::config::AppConfig;
use hireboard::error::AppError;
use hireboard::marketplace::jobs::JobBoardService;
use hireboard::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        commission: config.commission.clone(),
    };

    let repository = Arc::new(InMemoryJobRepository::default());
    // The served edit API is the admin/internal surface; company-side quotes
    // pick their own policy per request.
    let job_service = Arc::new(JobBoardService::new(
        repository,
        config.commission.admin_policy(),
    ));

    let app = with_job_routes(job_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hireboard job service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
