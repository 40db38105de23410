use crate::cli::ServeArgs;
use crate::infra::{AppState, ProfileBackend};
use crate::routes::with_advisor_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skill_advisor::advisor::AdvisorService;
use skill_advisor::config::AppConfig;
use skill_advisor::error::AppError;
use skill_advisor::telemetry;
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

    let store = ProfileBackend::from_config(&config.storage);
    let store_description = store.describe();
    let advisor_service = Arc::new(AdvisorService::new(Arc::new(store)));
    info!(
        store = %store_description,
        rules = advisor_service.engine().evaluator_names().len(),
        "advice engine configured"
    );

    let app = with_advisor_routes(advisor_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "skill advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
