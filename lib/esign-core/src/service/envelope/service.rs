use time::{Duration, OffsetDateTime};

use super::EnvelopeService;
use super::dto::EnvelopeStatusChangesDTO;
use super::mapper::{
    envelope_definition_from_request, jwt_grant_request, recipient_view_request,
    session_from_token,
};
use super::validator::{
    resolve_from_date, validate_document, validate_envelope_id, validate_return_url,
    validate_signer,
};
use crate::model::document::Base64Document;
use crate::model::signer::SignerInfo;
use crate::provider::esign_platform::docusign::oauth_base_path_for;
use crate::provider::esign_platform::error::EsignPlatformError;
use crate::provider::esign_platform::model::{
    ApiSession, Envelope, EnvelopeSummary, ListStatusChangesOptions, ViewUrl,
};
use crate::service::error::ServiceError;

const INITIALIZATION_FAILED: &str = "Failed to initialize e-signature service";
const CREATE_ENVELOPE_FAILED: &str = "Failed to create envelope";
const CREATE_SIGNING_URL_FAILED: &str = "Failed to create signing URL";
const GET_ENVELOPE_FAILED: &str = "Failed to get envelope";
const GET_STATUS_CHANGES_FAILED: &str = "Failed to get envelopes with updated status";
const GET_SIGNED_DOCUMENT_FAILED: &str = "Failed to get signed document from envelope";

const SESSION_RENEWAL_MARGIN: Duration = Duration::seconds(30);
const STATUS_ANY: &str = "any";
const CONTENT_DOCUMENT_TYPE: &str = "content";

impl EnvelopeService {
    /// Sends `document` to `signer` for embedded signing.
    ///
    /// # Arguments
    ///
    /// * `signer` - recipient, `id` is used as client user id
    /// * `document` - base64 document, anchor strings from the configuration
    ///   locate the signature (and optional date) fields
    pub async fn create_envelope(
        &self,
        signer: &SignerInfo,
        document: &Base64Document,
    ) -> Result<EnvelopeSummary, ServiceError> {
        validate_signer(signer)?;
        validate_document(document)?;

        let session = self.get_session().await?;
        let definition = envelope_definition_from_request(&self.config, signer, document);

        let summary = self
            .client
            .create_envelope(&session, &definition)
            .await
            .map_err(ServiceError::esign_service(CREATE_ENVELOPE_FAILED))?;

        tracing::info!(
            envelope_id = summary.envelope_id.as_deref().unwrap_or_default(),
            document = %document.name,
            "Created envelope"
        );

        Ok(summary)
    }

    /// Creates an embedded signing session URL; the platform redirects to
    /// `return_url` with `envelopeId` appended once the signer is done.
    pub async fn create_signing_url(
        &self,
        envelope_id: &str,
        signer: &SignerInfo,
        return_url: &str,
    ) -> Result<ViewUrl, ServiceError> {
        validate_envelope_id(envelope_id)?;
        validate_signer(signer)?;
        let return_url = validate_return_url(return_url)?;

        let session = self.get_session().await?;
        let request = recipient_view_request(signer, &return_url, envelope_id);

        self.client
            .create_recipient_view(&session, envelope_id, &request)
            .await
            .map_err(ServiceError::esign_service(CREATE_SIGNING_URL_FAILED))
    }

    pub async fn get_envelope(&self, envelope_id: &str) -> Result<Envelope, ServiceError> {
        validate_envelope_id(envelope_id)?;

        let session = self.get_session().await?;

        self.client
            .get_envelope(&session, envelope_id)
            .await
            .map_err(ServiceError::esign_service(GET_ENVELOPE_FAILED))
    }

    /// Collects all envelopes whose status changed since `from_date`, or since
    /// the configured last synchronization when no date is given.
    pub async fn get_envelopes_with_updated_status(
        &self,
        from_date: Option<OffsetDateTime>,
    ) -> Result<EnvelopeStatusChangesDTO, ServiceError> {
        let from_date = resolve_from_date(from_date, self.config.last_synchronization)?;

        let session = self.get_session().await?;

        let envelopes = self
            .collect_status_changes(&session, from_date)
            .await
            .map_err(ServiceError::esign_service(GET_STATUS_CHANGES_FAILED))?;

        tracing::info!(
            count = envelopes.len(),
            %from_date,
            "Fetched envelopes with updated status"
        );

        Ok(EnvelopeStatusChangesDTO {
            from_date,
            envelopes,
        })
    }

    /// Downloads the content document of a (completed) envelope.
    pub async fn get_signed_document(
        &self,
        envelope_id: &str,
    ) -> Result<Base64Document, ServiceError> {
        validate_envelope_id(envelope_id)?;

        let session = self.get_session().await?;

        self.download_content_document(&session, envelope_id)
            .await
            .map_err(ServiceError::esign_service(GET_SIGNED_DOCUMENT_FAILED))
    }

    async fn collect_status_changes(
        &self,
        session: &ApiSession,
        from_date: OffsetDateTime,
    ) -> Result<Vec<Envelope>, EsignPlatformError> {
        let max_pages = self.config.max_status_change_pages;
        let mut envelopes = vec![];
        let mut options = ListStatusChangesOptions {
            from_date,
            status: STATUS_ANY.to_owned(),
            start_position: None,
        };

        for _ in 0..max_pages {
            let page = self.client.list_status_changes(session, &options).await?;
            let has_next_page = page.has_next_page();
            envelopes.extend(page.envelopes);

            if !has_next_page {
                return Ok(envelopes);
            }

            options.start_position = Some(envelopes.len());
        }

        Err(EsignPlatformError::PaginationLimitExceeded { max_pages })
    }

    async fn download_content_document(
        &self,
        session: &ApiSession,
        envelope_id: &str,
    ) -> Result<Base64Document, EsignPlatformError> {
        let documents = self.client.list_documents(session, envelope_id).await?;

        let content = documents
            .envelope_documents
            .into_iter()
            .find(|document| document.r#type.as_deref() == Some(CONTENT_DOCUMENT_TYPE))
            .ok_or_else(|| EsignPlatformError::MissingContentDocument {
                envelope_id: envelope_id.to_owned(),
            })?;

        let listed_envelope_id = documents.envelope_id.as_deref().unwrap_or(envelope_id);
        let bytes = self
            .client
            .get_document(session, listed_envelope_id, &content.document_id)
            .await?;

        let name = content.name.unwrap_or(content.document_id);
        Base64Document::from_bytes(name, &bytes)
            .map_err(|e| EsignPlatformError::MappingError(e.to_string()))
    }

    /// Current session; authenticates on first use and once the token is
    /// about to expire. The lock is held while authenticating.
    async fn get_session(&self) -> Result<ApiSession, ServiceError> {
        let mut session = self.session.lock().await;

        if let Some(current) = session.as_ref() {
            if current.valid_until - SESSION_RENEWAL_MARGIN > OffsetDateTime::now_utc() {
                return Ok(current.clone());
            }
            tracing::debug!(account_id = %current.account_id, "E-signature session expired");
        }

        let renewed = self
            .authenticate()
            .await
            .map_err(ServiceError::esign_service(INITIALIZATION_FAILED))?;

        tracing::info!(
            account_id = %renewed.account_id,
            base_path = %renewed.base_path,
            "E-signature session initialized"
        );

        *session = Some(renewed.clone());
        Ok(renewed)
    }

    async fn authenticate(&self) -> Result<ApiSession, EsignPlatformError> {
        let oauth_base_path = match &self.config.oauth_base_path {
            Some(oauth_base_path) => oauth_base_path.to_owned(),
            None => oauth_base_path_for(&self.config.rest_api_url)?,
        };

        let issued_at = OffsetDateTime::now_utc();
        let token = self
            .client
            .request_jwt_user_token(&jwt_grant_request(&self.config, oauth_base_path.clone()))
            .await?;

        let user_info = self
            .client
            .get_user_info(&oauth_base_path, &token.access_token)
            .await?;

        let account = user_info
            .accounts
            .into_iter()
            .find(|account| account.is_default)
            .ok_or(EsignPlatformError::NoDefaultAccount)?;

        session_from_token(token, account, issued_at)
    }
}
