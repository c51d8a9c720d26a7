use thiserror::Error;

use crate::provider::esign_platform::error::EsignPlatformError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: `{0}`")]
    Validation(#[from] ValidationError),

    /// Any failure past argument validation: authentication, request mapping
    /// or the platform call itself.
    #[error("{message}")]
    EsignService {
        message: String,
        #[source]
        source: EsignPlatformError,
    },
}

impl ServiceError {
    pub(crate) fn esign_service(
        message: impl Into<String>,
    ) -> impl FnOnce(EsignPlatformError) -> Self {
        let message = message.into();
        move |source| Self::EsignService { message, source }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Validation(error) => error.error_code(),
            Self::EsignService { .. } => ErrorCode::Esign001,
        }
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid signer: {0}")]
    InvalidSigner(validator::ValidationErrors),
    #[error("Invalid document: {0}")]
    InvalidDocument(validator::ValidationErrors),
    #[error("Missing envelope id")]
    MissingEnvelopeId,
    #[error("Missing return URL")]
    MissingReturnUrl,
    #[error("Invalid return URL `{url}`: {source}")]
    InvalidReturnUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Missing status change start date and no last synchronization configured")]
    MissingFromDate,
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidSigner(_) => ErrorCode::Validation001,
            Self::InvalidDocument(_) => ErrorCode::Validation002,
            Self::MissingEnvelopeId => ErrorCode::Validation003,
            Self::MissingReturnUrl | Self::InvalidReturnUrl { .. } => ErrorCode::Validation004,
            Self::MissingFromDate => ErrorCode::Validation005,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Validation001,
    Validation002,
    Validation003,
    Validation004,
    Validation005,

    Esign001,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Validation001 => "Invalid signer",
            ErrorCode::Validation002 => "Invalid document",
            ErrorCode::Validation003 => "Missing envelope id",
            ErrorCode::Validation004 => "Invalid return URL",
            ErrorCode::Validation005 => "Missing status change start date",

            ErrorCode::Esign001 => "E-signature service error",
        }
    }
}
