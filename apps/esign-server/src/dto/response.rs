use std::panic::Location;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use esign_core::service::error::ServiceError;
use serde::Serialize;

use super::error::{Cause, ErrorCode, ErrorResponseRestDTO};
use crate::router::AppState;

pub(crate) enum ErrorResponse {
    BadRequest(ErrorResponseRestDTO),
    ServerError(ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic(panic_msg: String) -> Self {
        Self::ServerError(ErrorResponseRestDTO {
            code: ErrorCode::BR_0000,
            message: panic_msg,
            cause: Some(Cause {
                message: "Panic".to_string(),
            }),
        })
    }

    /// Logs the failed action at the handler's call site, then maps the error:
    /// validation failures become 400, platform failures 500.
    #[track_caller]
    pub(crate) fn from_service_error_with_trace(
        error: ServiceError,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        let location = Location::caller();
        tracing::error!(%error, %location, "Error while {action_description}");

        let body = ErrorResponseRestDTO::from(&error)
            .hide_cause(state.config.hide_error_response_cause);
        match error {
            ServiceError::Validation(_) => Self::BadRequest(body),
            ServiceError::EsignService { .. } => Self::ServerError(body),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(body) => (StatusCode::BAD_REQUEST, body),
            Self::ServerError(body) => (StatusCode::INTERNAL_SERVER_ERROR, body),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body with status `SUCCESS` for a service call, or the mapped error.
pub(crate) struct ServiceResponse<T, const SUCCESS: u16>(Result<T, ErrorResponse>);

pub(crate) type OkOrErrorResponse<T> = ServiceResponse<T, 200>;
pub(crate) type CreatedOrErrorResponse<T> = ServiceResponse<T, 201>;

impl<T, const SUCCESS: u16> ServiceResponse<T, SUCCESS> {
    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, ServiceError>,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self(Ok(value.into())),
            Err(error) => Self(Err(ErrorResponse::from_service_error_with_trace(
                error,
                state,
                action_description,
            ))),
        }
    }
}

impl<T: Serialize, const SUCCESS: u16> IntoResponse for ServiceResponse<T, SUCCESS> {
    fn into_response(self) -> Response {
        match self.0 {
            Ok(body) => {
                let status = StatusCode::from_u16(SUCCESS).unwrap_or(StatusCode::OK);
                (status, Json(body)).into_response()
            }
            Err(error) => error.into_response(),
        }
    }
}
