use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use super::{ApiQuery, ListQuery};
use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{FScoreListResponse, FScoreResponse, RefreshResponse, ScoreListResponse},
};

#[utoipa::path(
    get,
    path = "/admin/sheet/f-score",
    params(ListQuery),
    responses(
        (status = 200, body = FScoreListResponse),
        (status = 503, description = "Sheet source unavailable")
    ),
    tag = "F-Score"
)]
pub async fn list_fscores(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Json<ScoreListResponse<FScoreResponse>>> {
    let refresh = query.refresh.unwrap_or(true);
    let rows = state.fscore_service.list_records(refresh).await?;
    let last_updated = rows.iter().filter_map(|r| r.updated_at).max();
    let message = if refresh {
        "Data fetched successfully"
    } else {
        "Cached data returned"
    };
    let data = rows.into_iter().map(FScoreResponse::from).collect();
    Ok(Json(ScoreListResponse::new(message, data, last_updated)))
}

#[utoipa::path(
    get,
    path = "/admin/sheet/f-score/{ticker}",
    params(("ticker" = String, Path, description = "Stock ticker")),
    responses(
        (status = 200, body = FScoreResponse),
        (status = 404, description = "Ticker not found")
    ),
    tag = "F-Score"
)]
pub async fn get_fscore(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FScoreResponse>> {
    let row = state
        .fscore_service
        .get_record(&ticker)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("F-Score data not found for ticker: {}", ticker))
        })?;
    Ok(Json(FScoreResponse::from(row)))
}

#[utoipa::path(
    post,
    path = "/admin/sheet/f-score/refresh",
    responses(
        (status = 200, body = RefreshResponse),
        (status = 503, description = "Sheet source unavailable")
    ),
    tag = "F-Score"
)]
pub async fn refresh_fscores(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RefreshResponse>> {
    tracing::info!("Force refresh of F-Score data requested");
    let summary = state.fscore_service.refresh().await?;
    Ok(Json(RefreshResponse::from(summary)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/f-score", get(list_fscores))
        .route("/f-score/refresh", post(refresh_fscores))
        .route("/f-score/{ticker}", get(get_fscore))
}
