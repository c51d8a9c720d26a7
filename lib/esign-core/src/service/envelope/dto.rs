use time::OffsetDateTime;

use crate::provider::esign_platform::model::Envelope;

/// Envelopes whose status changed since `from_date`, collected over all pages.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvelopeStatusChangesDTO {
    pub from_date: OffsetDateTime,
    pub envelopes: Vec<Envelope>,
}
