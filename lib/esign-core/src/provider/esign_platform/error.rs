use thiserror::Error;

use crate::provider::http_client;

#[derive(Debug, Error)]
pub enum EsignPlatformError {
    #[error("HTTP client error: `{0}`")]
    HttpClient(#[from] http_client::Error),
    #[error("JWT assertion error: `{0}`")]
    JwtAssertion(#[from] jsonwebtoken::errors::Error),
    #[error("Invalid URL: `{0}`")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported token type `{0}`")]
    UnsupportedTokenType(String),
    #[error("No default account found for the user")]
    NoDefaultAccount,
    #[error("Envelope `{envelope_id}` has no content document")]
    MissingContentDocument { envelope_id: String },
    #[error("Status changes exceeded {max_pages} pages")]
    PaginationLimitExceeded { max_pages: u32 },
    #[error("Mapping error: `{0}`")]
    MappingError(String),
}
