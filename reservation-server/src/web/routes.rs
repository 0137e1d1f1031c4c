//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::allocator::{
    BestSeatFinder, LoggingReserver, ReserveError, SeatReserver, TracingObserver,
};
use crate::domain::{BookingReference, SeatRequest, TrainId};
use crate::store::{StoreError, TrainDto};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/booking_reference", get(booking_reference))
        .route("/data_for_train/:train_id", get(data_for_train))
        .route("/reserve", post(reserve))
        .route("/reset/:train_id", post(reset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Hand out a fresh booking reference.
async fn booking_reference(State(state): State<AppState>) -> String {
    state.references.next_reference().into_inner()
}

/// Current seats and bookings of one train.
async fn data_for_train(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
) -> Result<Json<TrainDto>, AppError> {
    let train_id = parse_train_id(&train_id)?;
    Ok(Json(state.store.train_data(&train_id)?))
}

/// Clear all bookings on one train.
async fn reset(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let train_id = parse_train_id(&train_id)?;
    state.store.reset(&train_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reserve seats for a party.
async fn reserve(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let req: ReserveRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid reserve request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let train_id = parse_train_id(&req.train_id)?;
    let seat_count = u32::try_from(req.seat_count).map_err(|_| AppError::BadRequest {
        message: if req.seat_count < 0 {
            format!("seat_count must be positive, got {}", req.seat_count)
        } else {
            format!("seat_count {} is out of range", req.seat_count)
        },
    })?;
    let booking_reference = match req.booking_reference {
        Some(reference) if !reference.is_empty() => BookingReference::new(reference),
        _ => state.references.next_reference(),
    };

    let request = SeatRequest::new(train_id, booking_reference, seat_count);

    let store = state.store.as_ref();
    let finder = BestSeatFinder::new(store, store, state.policy.as_ref());
    let reserver = LoggingReserver::new(finder, TracingObserver);
    let result = reserver.reserve(&request)?;

    Ok(Json(ReserveResponse::from_result(&result)).into_response())
}

fn parse_train_id(raw: &str) -> Result<TrainId, AppError> {
    TrainId::new(raw).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ReserveError> for AppError {
    fn from(e: ReserveError) -> Self {
        match e {
            ReserveError::InvalidArgument(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            ReserveError::TrainNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            ReserveError::Provider(_) | ReserveError::Booking(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::TrainNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
