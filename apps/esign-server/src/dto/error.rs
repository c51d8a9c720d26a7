use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use esign_core::service::error::{self, ServiceError};
use serde::Serialize;

/// Error codes exposed over REST.
///
/// `BR_0001`..`BR_0006` mirror the core error codes, the rest are raised by
/// the server itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// Unexpected panic
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    /// Sample envelope not available
    BR_0007,
    /// Integration disabled
    BR_0008,
    /// Malformed request
    BR_0084,
}

impl From<error::ErrorCode> for ErrorCode {
    fn from(value: error::ErrorCode) -> Self {
        use error::ErrorCode as Core;

        match value {
            Core::Validation001 => Self::BR_0001,
            Core::Validation002 => Self::BR_0002,
            Core::Validation003 => Self::BR_0003,
            Core::Validation004 => Self::BR_0004,
            Core::Validation005 => Self::BR_0005,
            Core::Esign001 => Self::BR_0006,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponseRestDTO {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(self, hide: bool) -> Self {
        Self {
            cause: self.cause.filter(|_| !hide),
            ..self
        }
    }
}

impl From<&ServiceError> for ErrorResponseRestDTO {
    fn from(error: &ServiceError) -> Self {
        let code = error.error_code();

        let (message, cause) = match error {
            ServiceError::Validation(validation) => {
                (code.msg().to_owned(), Cause::from_error(validation))
            }
            ServiceError::EsignService { message, source } => {
                (message.clone(), Cause::from_error(source))
            }
        };

        Self {
            code: code.into(),
            message,
            cause: Some(cause),
        }
    }
}

#[derive(Serialize)]
pub struct Cause {
    pub message: String,
}

impl Cause {
    pub fn from_error(error: &impl std::error::Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// Only used for extractor rejections, which are always client errors.
impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

macro_rules! input_rejection {
    ($($rejection:ty),+ $(,)?) => {
        $(
            impl From<$rejection> for ErrorResponseRestDTO {
                fn from(rejection: $rejection) -> Self {
                    Self {
                        code: ErrorCode::BR_0084,
                        message: "General input validation error".to_owned(),
                        cause: Some(Cause {
                            message: rejection.body_text(),
                        }),
                    }
                }
            }
        )+
    };
}

input_rejection!(JsonRejection, QueryRejection, PathRejection);
