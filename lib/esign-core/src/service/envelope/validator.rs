use time::OffsetDateTime;
use url::Url;
use validator::Validate;

use crate::model::document::Base64Document;
use crate::model::signer::SignerInfo;
use crate::service::error::ValidationError;

pub(super) fn validate_signer(signer: &SignerInfo) -> Result<(), ValidationError> {
    signer.validate().map_err(ValidationError::InvalidSigner)
}

pub(super) fn validate_document(document: &Base64Document) -> Result<(), ValidationError> {
    document.validate().map_err(ValidationError::InvalidDocument)
}

pub(super) fn validate_envelope_id(envelope_id: &str) -> Result<(), ValidationError> {
    if envelope_id.trim().is_empty() {
        return Err(ValidationError::MissingEnvelopeId);
    }

    Ok(())
}

pub(super) fn validate_return_url(return_url: &str) -> Result<Url, ValidationError> {
    if return_url.trim().is_empty() {
        return Err(ValidationError::MissingReturnUrl);
    }

    Url::parse(return_url).map_err(|source| ValidationError::InvalidReturnUrl {
        url: return_url.to_owned(),
        source,
    })
}

/// Explicit start date wins over the configured last synchronization.
pub(super) fn resolve_from_date(
    from_date: Option<OffsetDateTime>,
    last_synchronization: Option<OffsetDateTime>,
) -> Result<OffsetDateTime, ValidationError> {
    from_date
        .or(last_synchronization)
        .ok_or(ValidationError::MissingFromDate)
}
