use crate::{AppConfig, routes};
use axum::routing::get;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayerBuilder;
use http::{Method, header};
use sea_orm::DatabaseConnection;
use sentry_tower::NewSentryLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;


/// Routes of the JSON api, without metrics and the sentry layers.
pub(crate) fn create_router(app_config: AppConfig, cors: CorsLayer, seaorm_pool: DatabaseConnection) -> Router {
    Router::new()
        .merge(routes::swagger::create_router())
        .nest("/courses", routes::courses::create_router())
        .nest("/practice", routes::practice::create_router())
        .nest("/users", routes::users::create_router())
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(Extension(app_config))
                .layer(Extension(seaorm_pool)),
        )
        .with_state(())
}

pub(crate) fn create_cors(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<_>, _>>()?,
        )
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));
    Ok(cors)
}

pub fn create_app(
    app_config: AppConfig,
    origins: &[String],
    seaorm_pool: DatabaseConnection,
) -> anyhow::Result<Router> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("practica")
        .with_default_metrics()
        .build_pair();

    if !origins.is_empty() {
        tracing::info!(?origins, "allowing origins");
    }

    let app = create_router(app_config, create_cors(origins)?, seaorm_pool)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(
            // Router layers are called bottom to top
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
                .layer(prometheus_layer),
        );
    Ok(app)
}
