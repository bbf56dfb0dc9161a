use std::sync::Arc;

use axum::{extract::FromRequestParts, http::HeaderValue, routing::get, Json, Router};
use serde::{de, Deserialize, Deserializer};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::{IntoParams, OpenApi};

use crate::{config::Config, error::ApiError, main_lib::AppState, models};

pub mod fscores;
pub mod health;
pub mod zscores;

/// Query string extractor that reports malformed input as a JSON 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Shared query for the list endpoints.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Fetch the sheet and reconcile before listing. Defaults to true.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub refresh: Option<bool>,
}

/// Accepts `true/false`, `1/0`, `yes/no`, `on/off`, `t/f` and `y/n`, any case.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_flag(&raw)
                .ok_or_else(|| de::Error::custom(format!("invalid boolean value '{}'", raw)))
        })
        .transpose()
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health_check,
        zscores::list_zscores,
        zscores::get_zscore,
        zscores::refresh_zscores,
        fscores::list_fscores,
        fscores::get_fscore,
        fscores::refresh_fscores
    ),
    components(schemas(
        models::ZScoreResponse,
        models::ZScoreListResponse,
        models::FScoreResponse,
        models::FScoreYears,
        models::FScoreMetrics,
        models::FScoreCriteria,
        models::FScoreListResponse,
        models::RefreshResponse,
        models::RefreshStats,
        models::HealthResponse
    )),
    tags((name = "finscore"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };
    let cors = cors.allow_methods(Any).allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let admin = Router::new()
        .merge(zscores::router())
        .merge(fscores::router());

    Router::new()
        .merge(health::router())
        .nest("/admin/sheet", admin)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_forms() {
        for raw in ["true", "TRUE", "1", "yes", "on", " y ", "t"] {
            assert_eq!(parse_flag(raw), Some(true), "{raw}");
        }
        for raw in ["false", "0", "No", "off", "n", "f"] {
            assert_eq!(parse_flag(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag("2"), None);
    }
}
