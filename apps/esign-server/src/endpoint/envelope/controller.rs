use axum::Json;
use axum::extract::{Path, Query, State};
use axum_extra::extract::WithRejection;
use esign_core::model::signer::SignerInfo;

use super::dto::{
    CreateEnvelopeRequestRestDTO, CreateSigningUrlRequestRestDTO, EnvelopeResponseRestDTO,
    EnvelopeStatusChangesResponseRestDTO, EnvelopeSummaryResponseRestDTO,
    SignedDocumentResponseRestDTO, SigningUrlResponseRestDTO, StatusChangesQuery,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, OkOrErrorResponse};
use crate::router::AppState;

pub(crate) async fn create_envelope(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateEnvelopeRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EnvelopeSummaryResponseRestDTO> {
    let result = state
        .core
        .envelope_service
        .create_envelope(&request.signer.into(), &request.document.into())
        .await;
    CreatedOrErrorResponse::from_result(result, state, "creating envelope")
}

pub(crate) async fn get_envelope(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<EnvelopeResponseRestDTO> {
    let result = state.core.envelope_service.get_envelope(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting envelope")
}

pub(crate) async fn create_signing_url(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateSigningUrlRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<SigningUrlResponseRestDTO> {
    let signer: SignerInfo = request.signer.into();
    let result = state
        .core
        .envelope_service
        .create_signing_url(&id, &signer, &request.return_url)
        .await;
    OkOrErrorResponse::from_result(result, state, "creating signing URL")
}

pub(crate) async fn get_envelopes_with_updated_status(
    state: State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<StatusChangesQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<EnvelopeStatusChangesResponseRestDTO> {
    let result = state
        .core
        .envelope_service
        .get_envelopes_with_updated_status(query.from)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting envelopes with updated status")
}

pub(crate) async fn get_signed_document(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<SignedDocumentResponseRestDTO> {
    let result = state.core.envelope_service.get_signed_document(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting signed document")
}
