//! DocuSign eSignature REST API v2.1 client.
//!
//! <https://developers.docusign.com/docs/esign-rest-api/reference/>

use std::sync::Arc;

use time::OffsetDateTime;
use url::Url;

use self::dto::{JWT_BEARER_GRANT_TYPE, JwtBearerGrantForm};
use self::mapper::{create_jwt_assertion, envelopes_url, oauth_url, status_changes_url};
use super::EsignPlatformClient;
use super::error::EsignPlatformError;
use super::model::{
    ApiSession, Envelope, EnvelopeDefinition, EnvelopeDocumentsResult, EnvelopeSummary,
    EnvelopesInformation, JwtGrantRequest, ListStatusChangesOptions, OAuthToken,
    RecipientViewRequest, UserInfo, ViewUrl,
};
use crate::provider::http_client::HttpClient;

mod dto;
mod mapper;

pub const DEMO_OAUTH_BASE_PATH: &str = "https://account-d.docusign.com";
pub const PRODUCTION_OAUTH_BASE_PATH: &str = "https://account.docusign.com";

/// Picks the identity provider matching the REST API environment: the demo
/// (sandbox) authority for `*demo*` hosts, production otherwise.
pub fn oauth_base_path_for(rest_api_url: &Url) -> Result<Url, EsignPlatformError> {
    let base_path = if rest_api_url.as_str().to_lowercase().contains("demo") {
        DEMO_OAUTH_BASE_PATH
    } else {
        PRODUCTION_OAUTH_BASE_PATH
    };

    Ok(Url::parse(base_path)?)
}

pub struct DocuSignClient {
    http_client: Arc<dyn HttpClient>,
}

impl DocuSignClient {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait::async_trait]
impl EsignPlatformClient for DocuSignClient {
    async fn request_jwt_user_token(
        &self,
        request: &JwtGrantRequest,
    ) -> Result<OAuthToken, EsignPlatformError> {
        let assertion = create_jwt_assertion(request, OffsetDateTime::now_utc())?;
        let url = oauth_url(&request.oauth_base_path, "token")?;

        let token: OAuthToken = self
            .http_client
            .post(url.as_str())
            .form(JwtBearerGrantForm {
                grant_type: JWT_BEARER_GRANT_TYPE,
                assertion,
            })?
            .send()
            .await?
            .error_for_status()?
            .json()?;

        if !token.token_type.eq_ignore_ascii_case("bearer") {
            return Err(EsignPlatformError::UnsupportedTokenType(token.token_type));
        }

        Ok(token)
    }

    async fn get_user_info(
        &self,
        oauth_base_path: &Url,
        access_token: &str,
    ) -> Result<UserInfo, EsignPlatformError> {
        let url = oauth_url(oauth_base_path, "userinfo")?;

        Ok(self
            .http_client
            .get(url.as_str())
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json()?)
    }

    async fn create_envelope(
        &self,
        session: &ApiSession,
        definition: &EnvelopeDefinition,
    ) -> Result<EnvelopeSummary, EsignPlatformError> {
        let url = envelopes_url(session, &[])?;

        Ok(self
            .http_client
            .post(url.as_str())
            .bearer_auth(&session.access_token)
            .json(definition)?
            .send()
            .await?
            .error_for_status()?
            .json()?)
    }

    async fn create_recipient_view(
        &self,
        session: &ApiSession,
        envelope_id: &str,
        request: &RecipientViewRequest,
    ) -> Result<ViewUrl, EsignPlatformError> {
        let url = envelopes_url(session, &[envelope_id, "views", "recipient"])?;

        Ok(self
            .http_client
            .post(url.as_str())
            .bearer_auth(&session.access_token)
            .json(request)?
            .send()
            .await?
            .error_for_status()?
            .json()?)
    }

    async fn get_envelope(
        &self,
        session: &ApiSession,
        envelope_id: &str,
    ) -> Result<Envelope, EsignPlatformError> {
        let url = envelopes_url(session, &[envelope_id])?;

        Ok(self
            .http_client
            .get(url.as_str())
            .bearer_auth(&session.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()?)
    }

    async fn list_status_changes(
        &self,
        session: &ApiSession,
        options: &ListStatusChangesOptions,
    ) -> Result<EnvelopesInformation, EsignPlatformError> {
        let url = status_changes_url(session, options)?;

        Ok(self
            .http_client
            .get(url.as_str())
            .bearer_auth(&session.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()?)
    }

    async fn list_documents(
        &self,
        session: &ApiSession,
        envelope_id: &str,
    ) -> Result<EnvelopeDocumentsResult, EsignPlatformError> {
        let url = envelopes_url(session, &[envelope_id, "documents"])?;

        Ok(self
            .http_client
            .get(url.as_str())
            .bearer_auth(&session.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()?)
    }

    async fn get_document(
        &self,
        session: &ApiSession,
        envelope_id: &str,
        document_id: &str,
    ) -> Result<Vec<u8>, EsignPlatformError> {
        let url = envelopes_url(session, &[envelope_id, "documents", document_id])?;

        Ok(self
            .http_client
            .get(url.as_str())
            .bearer_auth(&session.access_token)
            .send()
            .await?
            .error_for_status()?
            .bytes())
    }
}
