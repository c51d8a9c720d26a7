//! Request and response shapes of the e-signature platform REST API.
//!
//! Only the fields read or written by this crate are modelled; everything else
//! the platform returns is ignored on deserialization.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;
use url::Url;

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDefinition {
    pub email_subject: Option<String>,
    pub documents: Vec<Document>,
    pub recipients: Recipients,
    pub status: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub document_id: String,
    pub document_base64: String,
    pub name: String,
    pub file_extension: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipients {
    pub signers: Vec<Signer>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signer {
    pub client_user_id: Option<String>,
    pub email: String,
    pub name: String,
    pub recipient_id: String,
    pub routing_order: String,
    pub tabs: Tabs,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tabs {
    pub sign_here_tabs: Vec<AnchorTab>,
    pub date_signed_tabs: Option<Vec<AnchorTab>>,
}

/// Field placed relative to an anchor string found in the document text.
/// Used for both "sign here" and "date signed" tabs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorTab {
    pub anchor_string: String,
    pub anchor_x_offset: String,
    pub anchor_y_offset: String,
    pub anchor_ignore_if_not_present: String,
    pub anchor_units: String,
    pub document_id: String,
    pub page_number: String,
    pub recipient_id: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeSummary {
    pub envelope_id: Option<String>,
    pub status: Option<String>,
    pub status_date_time: Option<String>,
    pub uri: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientViewRequest {
    pub authentication_method: String,
    pub client_user_id: String,
    pub email: String,
    pub return_url: String,
    pub user_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewUrl {
    pub url: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub envelope_id: Option<String>,
    pub status: Option<String>,
    pub email_subject: Option<String>,
    pub created_date_time: Option<String>,
    pub sent_date_time: Option<String>,
    pub delivered_date_time: Option<String>,
    pub completed_date_time: Option<String>,
    pub declined_date_time: Option<String>,
    pub voided_date_time: Option<String>,
    pub voided_reason: Option<String>,
    pub status_changed_date_time: Option<String>,
    pub envelope_uri: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopesInformation {
    #[serde(default)]
    pub envelopes: Vec<Envelope>,
    pub next_uri: Option<String>,
    pub previous_uri: Option<String>,
    pub result_set_size: Option<String>,
    pub start_position: Option<String>,
    pub end_position: Option<String>,
    pub total_set_size: Option<String>,
}

impl EnvelopesInformation {
    pub fn has_next_page(&self) -> bool {
        self.next_uri.as_deref().is_some_and(|uri| !uri.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListStatusChangesOptions {
    pub from_date: OffsetDateTime,
    pub status: String,
    pub start_position: Option<usize>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDocument {
    pub document_id: String,
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub uri: Option<String>,
    pub order: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDocumentsResult {
    pub envelope_id: Option<String>,
    #[serde(default)]
    pub envelope_documents: Vec<EnvelopeDocument>,
}

/// Parameters of the OAuth JWT bearer grant.
#[derive(Clone, Debug)]
pub struct JwtGrantRequest {
    pub oauth_base_path: Url,
    pub client_id: String,
    pub user_id: String,
    pub private_key: Vec<u8>,
    pub expires_in_hours: u32,
    pub scopes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub sub: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub accounts: Vec<UserAccount>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub account_id: String,
    pub is_default: bool,
    pub account_name: Option<String>,
    pub base_uri: String,
}

/// Authenticated context for envelope calls.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiSession {
    pub access_token: String,
    pub account_id: String,
    pub base_path: String,
    pub valid_until: OffsetDateTime,
}
