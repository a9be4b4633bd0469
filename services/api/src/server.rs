use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryMatchLedger, InMemoryProfileDirectory};
use crate::routes::with_match_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use devmatch::config::AppConfig;
use devmatch::error::AppError;
use devmatch::matching::MatchService;
use devmatch::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
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
    };

    let directory = Arc::new(InMemoryProfileDirectory::default());
    let ledger = Arc::new(InMemoryMatchLedger::default());
    let match_service = Arc::new(MatchService::new(
        directory,
        ledger,
        config.matching.recommendation_policy(),
    ));

    let app = with_match_routes(match_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "developer match service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
