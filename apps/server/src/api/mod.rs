use std::sync::Arc;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{AuthorRequest, AuthorResponse, BudgetRequest, BudgetResponse, YearStatsResponse},
};
use anyhow::Context;
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod authors;
mod budget;
mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        authors::add_author,
        budget::add_record,
        budget::get_year_stats
    ),
    components(schemas(
        AuthorRequest,
        AuthorResponse,
        BudgetRequest,
        BudgetResponse,
        YearStatsResponse
    )),
    tags((name = "budgetbook"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let mut origins = Vec::with_capacity(config.cors_allow.len());
        for origin in &config.cors_allow {
            let value: HeaderValue = origin
                .parse()
                .with_context(|| format!("Invalid CORS origin: {origin}"))?;
            origins.push(value);
        }
        CorsLayer::new().allow_origin(origins)
    };
    let cors = cors.allow_methods(Any).allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(authors::router())
        .merge(budget::router())
        .route("/openapi.json", get(move || async move { Json(openapi) }))
        .with_state(state);

    Ok(api
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}
