use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/goals",
            get(handlers::goals::list_goals).post(handlers::goals::create_goal),
        )
        .route(
            "/api/goals/:id",
            get(handlers::goals::get_goal)
                .put(handlers::goals::update_goal)
                .delete(handlers::goals::delete_goal),
        )
        .route("/api/goals/:id/stats", get(handlers::goals::get_goal_stats))
        .route(
            "/api/progress",
            get(handlers::progress::list_progress).post(handlers::progress::upsert_progress),
        )
        .route("/api/stats", get(handlers::stats::get_stats));

    let probes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz));

    let cors = cors_layer(&state.config);

    Router::new()
        .merge(probes)
        .merge(api)
        .fallback(handlers::health::not_found)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = std::iter::once(&config.frontend_url)
        .chain(config.cors_extra_origins.iter())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
