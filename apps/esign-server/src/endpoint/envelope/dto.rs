use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignerRestDTO {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentRestDTO {
    pub name: String,
    /// Base64 encoded document content.
    pub content: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateEnvelopeRequestRestDTO {
    pub signer: SignerRestDTO,
    pub document: DocumentRestDTO,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnvelopeSummaryResponseRestDTO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSigningUrlRequestRestDTO {
    pub signer: SignerRestDTO,
    pub return_url: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SigningUrlResponseRestDTO {
    pub url: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnvelopeResponseRestDTO {
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
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusChangesQuery {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub from: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnvelopeStatusChangesResponseRestDTO {
    #[serde(with = "time::serde::rfc3339")]
    pub from_date: OffsetDateTime,
    pub envelopes: Vec<EnvelopeResponseRestDTO>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignedDocumentResponseRestDTO {
    pub name: String,
    pub content: String,
}
