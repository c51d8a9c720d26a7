use esign_core::model::document::Base64Document;
use esign_core::model::signer::SignerInfo;
use esign_core::provider::esign_platform::model::{Envelope, EnvelopeSummary, ViewUrl};
use esign_core::service::envelope::dto::EnvelopeStatusChangesDTO;

use super::dto::{
    DocumentRestDTO, EnvelopeResponseRestDTO, EnvelopeStatusChangesResponseRestDTO,
    EnvelopeSummaryResponseRestDTO, SignedDocumentResponseRestDTO, SignerRestDTO,
    SigningUrlResponseRestDTO,
};

impl From<SignerRestDTO> for SignerInfo {
    fn from(value: SignerRestDTO) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}

impl From<DocumentRestDTO> for Base64Document {
    fn from(value: DocumentRestDTO) -> Self {
        Self {
            name: value.name,
            content: value.content,
        }
    }
}

impl From<EnvelopeSummary> for EnvelopeSummaryResponseRestDTO {
    fn from(value: EnvelopeSummary) -> Self {
        Self {
            envelope_id: value.envelope_id,
            status: value.status,
            status_date_time: value.status_date_time,
            uri: value.uri,
        }
    }
}

impl From<ViewUrl> for SigningUrlResponseRestDTO {
    fn from(value: ViewUrl) -> Self {
        Self { url: value.url }
    }
}

impl From<Envelope> for EnvelopeResponseRestDTO {
    fn from(value: Envelope) -> Self {
        Self {
            envelope_id: value.envelope_id,
            status: value.status,
            email_subject: value.email_subject,
            created_date_time: value.created_date_time,
            sent_date_time: value.sent_date_time,
            delivered_date_time: value.delivered_date_time,
            completed_date_time: value.completed_date_time,
            declined_date_time: value.declined_date_time,
            voided_date_time: value.voided_date_time,
            voided_reason: value.voided_reason,
            status_changed_date_time: value.status_changed_date_time,
        }
    }
}

impl From<EnvelopeStatusChangesDTO> for EnvelopeStatusChangesResponseRestDTO {
    fn from(value: EnvelopeStatusChangesDTO) -> Self {
        Self {
            from_date: value.from_date,
            envelopes: value.envelopes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Base64Document> for SignedDocumentResponseRestDTO {
    fn from(value: Base64Document) -> Self {
        Self {
            name: value.name,
            content: value.content,
        }
    }
}
