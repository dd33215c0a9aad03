use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{BudgetRequest, BudgetResponse, YearStatsParams, YearStatsResponse},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use budgetbook_core::budget::YearStatsQuery;

#[utoipa::path(
    post,
    path = "/budget/add",
    request_body = BudgetRequest,
    responses(
        (status = 200, body = BudgetResponse),
        (status = 400, description = "Month outside 1..=12 or malformed body"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn add_record(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BudgetRequest>, JsonRejection>,
) -> ApiResult<Json<BudgetResponse>> {
    let Json(request) = payload?;
    let record = state.budget_service.add_record(request.into()).await?;
    Ok(Json(BudgetResponse::from(record)))
}

#[utoipa::path(
    get,
    path = "/budget/year/{year}/stats",
    params(("year" = i32, Path, description = "Budget year"), YearStatsParams),
    responses(
        (status = 200, body = YearStatsResponse),
        (status = 400, description = "Invalid path or query parameters")
    )
)]
pub async fn get_year_stats(
    State(state): State<Arc<AppState>>,
    year: Result<Path<i32>, PathRejection>,
    params: Result<Query<YearStatsParams>, QueryRejection>,
) -> ApiResult<Json<YearStatsResponse>> {
    let Path(year) = year?;
    let Query(params) = params?;
    let stats = state.budget_service.get_year_stats(YearStatsQuery {
        year,
        limit: params.limit,
        offset: params.offset,
        author_name: params.author_name,
    })?;
    Ok(Json(YearStatsResponse::from(stats)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budget/add", post(add_record))
        .route("/budget/year/{year}/stats", get(get_year_stats))
}
