use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{AuthorRequest, AuthorResponse},
};
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

#[utoipa::path(
    post,
    path = "/author/add",
    request_body = AuthorRequest,
    responses((status = 200, body = AuthorResponse), (status = 400, description = "Malformed body"))
)]
pub async fn add_author(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AuthorRequest>, JsonRejection>,
) -> ApiResult<Json<AuthorResponse>> {
    let Json(request) = payload?;
    let author = state.author_service.add_author(request.into()).await?;
    Ok(Json(AuthorResponse::from(author)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/author/add", post(add_author))
}
