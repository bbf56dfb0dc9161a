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
    models::{RefreshResponse, ScoreListResponse, ZScoreListResponse, ZScoreResponse},
};

#[utoipa::path(
    get,
    path = "/admin/sheet/z-score",
    params(ListQuery),
    responses(
        (status = 200, body = ZScoreListResponse),
        (status = 503, description = "Sheet source unavailable")
    ),
    tag = "Z-Score"
)]
pub async fn list_zscores(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Json<ScoreListResponse<ZScoreResponse>>> {
    let refresh = query.refresh.unwrap_or(true);
    let rows = state.zscore_service.list_records(refresh).await?;
    let last_updated = rows.iter().filter_map(|r| r.updated_at).max();
    let message = if refresh {
        "Data fetched successfully"
    } else {
        "Cached data returned"
    };
    let data = rows.into_iter().map(ZScoreResponse::from).collect();
    Ok(Json(ScoreListResponse::new(message, data, last_updated)))
}

#[utoipa::path(
    get,
    path = "/admin/sheet/z-score/{ticker}",
    params(("ticker" = String, Path, description = "Stock ticker")),
    responses(
        (status = 200, body = ZScoreResponse),
        (status = 404, description = "Ticker not found")
    ),
    tag = "Z-Score"
)]
pub async fn get_zscore(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ZScoreResponse>> {
    let row = state
        .zscore_service
        .get_record(&ticker)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Z-Score data not found for ticker: {}", ticker))
        })?;
    Ok(Json(ZScoreResponse::from(row)))
}

#[utoipa::path(
    post,
    path = "/admin/sheet/z-score/refresh",
    responses(
        (status = 200, body = RefreshResponse),
        (status = 503, description = "Sheet source unavailable")
    ),
    tag = "Z-Score"
)]
pub async fn refresh_zscores(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RefreshResponse>> {
    tracing::info!("Force refresh of Z-Score data requested");
    let summary = state.zscore_service.refresh().await?;
    Ok(Json(RefreshResponse::from(summary)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/z-score", get(list_zscores))
        .route("/z-score/refresh", post(refresh_zscores))
        .route("/z-score/{ticker}", get(get_zscore))
}
