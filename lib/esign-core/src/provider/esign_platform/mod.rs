//! Client of the remote e-signature platform.

use url::Url;

use self::error::EsignPlatformError;
use self::model::{
    ApiSession, Envelope, EnvelopeDefinition, EnvelopeDocumentsResult, EnvelopeSummary,
    EnvelopesInformation, JwtGrantRequest, ListStatusChangesOptions, OAuthToken,
    RecipientViewRequest, UserInfo, ViewUrl,
};

pub mod docusign;
pub mod error;
pub mod model;

/// Calls of the platform REST API used by the envelope service.
///
/// Every envelope call is scoped to the account and base path of an
/// [`ApiSession`] obtained through [`Self::request_jwt_user_token`] and
/// [`Self::get_user_info`].
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait EsignPlatformClient: Send + Sync {
    async fn request_jwt_user_token(
        &self,
        request: &JwtGrantRequest,
    ) -> Result<OAuthToken, EsignPlatformError>;

    async fn get_user_info(
        &self,
        oauth_base_path: &Url,
        access_token: &str,
    ) -> Result<UserInfo, EsignPlatformError>;

    async fn create_envelope(
        &self,
        session: &ApiSession,
        definition: &EnvelopeDefinition,
    ) -> Result<EnvelopeSummary, EsignPlatformError>;

    async fn create_recipient_view(
        &self,
        session: &ApiSession,
        envelope_id: &str,
        request: &RecipientViewRequest,
    ) -> Result<ViewUrl, EsignPlatformError>;

    async fn get_envelope(
        &self,
        session: &ApiSession,
        envelope_id: &str,
    ) -> Result<Envelope, EsignPlatformError>;

    async fn list_status_changes(
        &self,
        session: &ApiSession,
        options: &ListStatusChangesOptions,
    ) -> Result<EnvelopesInformation, EsignPlatformError>;

    async fn list_documents(
        &self,
        session: &ApiSession,
        envelope_id: &str,
    ) -> Result<EnvelopeDocumentsResult, EsignPlatformError>;

    async fn get_document(
        &self,
        session: &ApiSession,
        envelope_id: &str,
        document_id: &str,
    ) -> Result<Vec<u8>, EsignPlatformError>;
}
