//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::compose::{
    self, ComplexRouteResult, ComposeError, DirectRouteOutcome, NO_DIRECT_ROUTE_ADVISORY,
};
use crate::rasp::ScheduleResult;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/schedule", get(schedule))
        .route("/api/routes", get(direct_route))
        .route("/api/complex_route", get(complex_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up the schedule between two stations on a date.
///
/// The provider's payload is returned to the caller verbatim.
async fn schedule(
    State(state): State<AppState>,
    Query(params): Query<ScheduleParams>,
) -> Result<Json<ScheduleResult>, AppError> {
    let result = compose::schedule_lookup(
        state.rasp.as_ref(),
        &state.directory,
        params.from_station.as_deref().unwrap_or_default(),
        params.to_station.as_deref().unwrap_or_default(),
        params.date.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok(Json(result))
}

/// Look up a direct route between two stations on a date.
///
/// Responds with the provider payload when an itinerary exists, and with
/// a fixed advisory message when it does not. Both are 200 responses.
async fn direct_route(
    State(state): State<AppState>,
    Query(params): Query<DirectRouteParams>,
) -> Result<Response, AppError> {
    let outcome = compose::direct_route(
        state.rasp.as_ref(),
        &state.directory,
        params.origin.as_deref().unwrap_or_default(),
        params.destination.as_deref().unwrap_or_default(),
        params.date.as_deref().unwrap_or_default(),
    )
    .await?;

    let response = match outcome {
        DirectRouteOutcome::Found(direct_route) => {
            Json(DirectRouteResponse { direct_route }).into_response()
        }
        DirectRouteOutcome::NoDirectRoute => Json(AdvisoryResponse {
            message: NO_DIRECT_ROUTE_ADVISORY,
        })
        .into_response(),
    };

    Ok(response)
}

/// Compose a one-transfer route through an intermediate station.
async fn complex_route(
    State(state): State<AppState>,
    Query(params): Query<ComplexRouteParams>,
) -> Result<Json<ComplexRouteResult>, AppError> {
    let result = compose::complex_route(
        state.rasp.as_ref(),
        &state.directory,
        &state.archive,
        params.origin.as_deref().unwrap_or_default(),
        params.transfer.as_deref().unwrap_or_default(),
        params.destination.as_deref().unwrap_or_default(),
        params.date.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok(Json(result))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<ComposeError> for AppError {
    fn from(e: ComposeError) -> Self {
        match e {
            ComposeError::MissingParameter { .. } | ComposeError::StationNotFound(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
            ComposeError::Fetch(_) | ComposeError::Leg { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(status = %status, message = %message, "Request failed");
        } else {
            warn!(status = %status, message = %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
