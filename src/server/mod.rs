use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::foundation::error::CardError;
use crate::render::pipeline::OutfitCardPipeline;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<OutfitCardPipeline>,
    api_key: Arc<str>,
}

impl AppState {
    /// State serving `pipeline`, accepting only requests whose `key` equals `api_key`.
    pub fn new(pipeline: Arc<OutfitCardPipeline>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            pipeline,
            api_key: api_key.into(),
        }
    }
}

/// Query string of `GET /outfit-image`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OutfitQuery {
    /// Account id.
    pub uid: Option<String>,
    /// Account region.
    pub region: Option<String>,
    /// Caller API key.
    pub key: Option<String>,
}

impl OutfitQuery {
    /// Collect the known parameters from raw query pairs; the first occurrence of a repeated name
    /// wins and unknown names are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (name, value) in pairs {
            let field = match name.as_str() {
                "uid" => &mut query.uid,
                "region" => &mut query.region,
                "key" => &mut query.key,
                _ => continue,
            };
            field.get_or_insert(value);
        }
        query
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Failure response of the HTTP surface.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<CardError> for ApiError {
    fn from(err: CardError) -> Self {
        let message = match err {
            CardError::Account(_) => "Failed to fetch player info",
            CardError::Background(_) => "Failed to fetch background image",
            CardError::Validation(_) | CardError::Encode(_) | CardError::Other(_) => {
                "Failed to render outfit image"
            }
        };
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// Router with the single `GET /outfit-image` route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/outfit-image", get(outfit_image))
        .with_state(state)
}

async fn outfit_image(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(pairs) = query?;
    let query = OutfitQuery::from_pairs(pairs);
    let (uid, region) = match (non_empty(query.uid), non_empty(query.region)) {
        (Some(uid), Some(region)) => (uid, region),
        _ => {
            return Err(ApiError::new(
                StatusCode::BAD_REQUEST,
                "Missing uid or region",
            ));
        }
    };
    if query.key.as_deref() != Some(&*state.api_key) {
        return Err(ApiError::new(
            StatusCode::FORBIDDEN,
            "Invalid or missing API key",
        ));
    }

    tracing::info!(%uid, %region, "outfit image requested");
    let pipeline = state.pipeline.clone();
    let png = tokio::task::spawn_blocking(move || pipeline.render_png(&uid, &region))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "render task failed");
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render outfit image",
            )
        })??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("serve http")
}

#[cfg(test)]
#[path = "../../tests/unit/server/errors.rs"]
mod tests;
