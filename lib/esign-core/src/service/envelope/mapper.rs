use secrecy::ExposeSecret;
use time::{Duration, OffsetDateTime};
use url::Url;

use crate::config::core_config::EsignConfig;
use crate::model::document::Base64Document;
use crate::model::signer::SignerInfo;
use crate::provider::esign_platform::error::EsignPlatformError;
use crate::provider::esign_platform::model::{
    AnchorTab, ApiSession, Document, EnvelopeDefinition, JwtGrantRequest, OAuthToken,
    RecipientViewRequest, Recipients, Signer, Tabs, UserAccount,
};

const DOCUMENT_ID: &str = "1";
const RECIPIENT_ID: &str = "1";
const ROUTING_ORDER: &str = "1";
const ENVELOPE_STATUS_SENT: &str = "sent";
const AUTHENTICATION_METHOD_EMAIL: &str = "email";

pub(super) fn jwt_grant_request(config: &EsignConfig, oauth_base_path: Url) -> JwtGrantRequest {
    JwtGrantRequest {
        oauth_base_path,
        client_id: config.integrator_key.to_owned(),
        user_id: config.user_id.to_owned(),
        private_key: config.private_key.expose_secret().as_bytes().to_vec(),
        expires_in_hours: config.jwt_expires_in_hours,
        scopes: config.scopes.to_owned(),
    }
}

pub(super) fn session_from_token(
    token: OAuthToken,
    account: UserAccount,
    issued_at: OffsetDateTime,
) -> Result<ApiSession, EsignPlatformError> {
    let valid_until = issued_at
        .checked_add(Duration::seconds(token.expires_in))
        .ok_or_else(|| {
            EsignPlatformError::MappingError(format!(
                "token lifetime of {} seconds is out of range",
                token.expires_in
            ))
        })?;

    Ok(ApiSession {
        access_token: token.access_token,
        account_id: account.account_id,
        base_path: format!("{}/restapi", account.base_uri.trim_end_matches('/')),
        valid_until,
    })
}

pub(super) fn envelope_definition_from_request(
    config: &EsignConfig,
    signer: &SignerInfo,
    document: &Base64Document,
) -> EnvelopeDefinition {
    let date_signed_tabs = config
        .sign_date_anchor()
        .map(|anchor| vec![anchor_tab(anchor, true)]);

    EnvelopeDefinition {
        email_subject: Some(config.email_subject.to_owned()),
        documents: vec![Document {
            document_id: DOCUMENT_ID.to_owned(),
            document_base64: document.content.to_owned(),
            name: document.name.to_owned(),
            file_extension: document.file_extension().map(ToOwned::to_owned),
        }],
        recipients: Recipients {
            signers: vec![Signer {
                client_user_id: Some(signer.id.to_owned()),
                email: signer.email.to_owned(),
                name: signer.name.to_owned(),
                recipient_id: RECIPIENT_ID.to_owned(),
                routing_order: ROUTING_ORDER.to_owned(),
                tabs: Tabs {
                    sign_here_tabs: vec![anchor_tab(&config.sign_here_tag_anchor_string, false)],
                    date_signed_tabs,
                },
            }],
        },
        status: ENVELOPE_STATUS_SENT.to_owned(),
    }
}

fn anchor_tab(anchor_string: &str, ignore_if_not_present: bool) -> AnchorTab {
    AnchorTab {
        anchor_string: anchor_string.to_owned(),
        anchor_x_offset: "1".to_owned(),
        anchor_y_offset: "0".to_owned(),
        anchor_ignore_if_not_present: ignore_if_not_present.to_string(),
        anchor_units: "inches".to_owned(),
        document_id: DOCUMENT_ID.to_owned(),
        page_number: "1".to_owned(),
        recipient_id: RECIPIENT_ID.to_owned(),
    }
}

pub(super) fn recipient_view_request(
    signer: &SignerInfo,
    return_url: &Url,
    envelope_id: &str,
) -> RecipientViewRequest {
    let mut return_url = return_url.to_owned();
    return_url.query_pairs_mut().append_pair("envelopeId", envelope_id);

    RecipientViewRequest {
        authentication_method: AUTHENTICATION_METHOD_EMAIL.to_owned(),
        client_user_id: signer.id.to_owned(),
        email: signer.email.to_owned(),
        return_url: return_url.into(),
        user_name: signer.name.to_owned(),
    }
}
