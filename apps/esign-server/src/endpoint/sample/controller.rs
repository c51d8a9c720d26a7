use axum::Json;
use axum::extract::State;
use axum::response::Html;
use esign_core::model::document::Base64Document;
use esign_core::model::signer::SignerInfo;

use crate::SampleConfig;
use crate::dto::error::{Cause, ErrorCode, ErrorResponseRestDTO};
use crate::dto::response::ErrorResponse;
use crate::endpoint::envelope::dto::EnvelopeSummaryResponseRestDTO;
use crate::router::AppState;

pub(crate) async fn sample_page() -> Html<&'static str> {
    Html(indoc::indoc! {r#"
        <!DOCTYPE html>
        <html>
        <head><title>E-signature sample</title></head>
        <body>
            <form method="post" action="/sample/envelope">
                <button type="submit">Send document for signature</button>
            </form>
        </body>
        </html>
    "#})
}

/// Sends the configured sample document to the configured sample signer.
pub(crate) async fn send_sample_envelope(
    state: State<AppState>,
) -> Result<Json<EnvelopeSummaryResponseRestDTO>, ErrorResponse> {
    if !state.core.is_enabled() {
        return Err(ErrorResponse::BadRequest(ErrorResponseRestDTO {
            code: ErrorCode::BR_0008,
            message: "E-signature integration is disabled".to_string(),
            cause: None,
        }));
    }

    let Some(sample) = state.config.sample.as_ref() else {
        return Err(ErrorResponse::BadRequest(ErrorResponseRestDTO {
            code: ErrorCode::BR_0007,
            message: "Sample envelope is not configured".to_string(),
            cause: None,
        }));
    };

    let document = load_sample_document(sample).await?;
    let signer = SignerInfo {
        id: sample.signer.id.to_owned(),
        name: sample.signer.name.to_owned(),
        email: sample.signer.email.to_owned(),
    };

    let result = state
        .core
        .envelope_service
        .create_envelope(&signer, &document)
        .await;

    match result {
        Ok(summary) => Ok(Json(summary.into())),
        Err(error) => Err(ErrorResponse::from_service_error_with_trace(
            error,
            state,
            "sending sample envelope",
        )),
    }
}

async fn load_sample_document(sample: &SampleConfig) -> Result<Base64Document, ErrorResponse> {
    let unavailable = |message: String| {
        tracing::error!(path = %sample.document_path.display(), "{message}");
        ErrorResponse::ServerError(ErrorResponseRestDTO {
            code: ErrorCode::BR_0007,
            message: "Sample document unavailable".to_string(),
            cause: Some(Cause { message }),
        })
    };

    let bytes = tokio::fs::read(&sample.document_path)
        .await
        .map_err(|e| unavailable(e.to_string()))?;

    let name = sample
        .document_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Base64Document::from_bytes(name, &bytes).map_err(|e| unavailable(e.to_string()))
}
