use serde_json::json;

use crate::utils::context::TestContext;

fn signer() -> serde_json::Value {
    json!({
        "id": "567",
        "name": "Jane Doe",
        "email": "jane@example.com"
    })
}

#[tokio::test]
async fn test_create_envelope_ok() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.authentication().await;
    context.vendor.create_envelope("envelope-1").await;

    // WHEN
    let resp = context
        .api
        .post(
            "/api/envelope/v1",
            json!({
                "signer": signer(),
                "document": { "name": "contract.pdf", "content": "JVBERi0xLjc=" }
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let resp = resp.json_value().await;
    assert_eq!(resp["envelopeId"], "envelope-1");
    assert_eq!(resp["status"], "sent");
}

#[tokio::test]
async fn test_create_envelope_invalid_signer() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.no_authentication().await;

    // WHEN
    let resp = context
        .api
        .post(
            "/api/envelope/v1",
            json!({
                "signer": { "id": "567", "name": "Jane Doe", "email": "not-an-email" },
                "document": { "name": "contract.pdf", "content": "JVBERi0xLjc=" }
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0001");
    assert_eq!(resp["message"], "Invalid signer");
}

#[tokio::test]
async fn test_create_envelope_missing_document() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.no_authentication().await;

    // WHEN
    let resp = context
        .api
        .post("/api/envelope/v1", json!({ "signer": signer() }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
}

#[tokio::test]
async fn test_get_envelope_ok() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.authentication().await;
    context.vendor.get_envelope("envelope-1").await;

    // WHEN
    let resp = context.api.get("/api/envelope/v1/envelope-1").await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["envelopeId"], "envelope-1");
    assert_eq!(resp["status"], "completed");
    assert_eq!(resp["completedDateTime"], "2024-05-02T08:00:00.0000000Z");
}

#[tokio::test]
async fn test_get_envelope_vendor_error() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.authentication().await;
    context.vendor.get_envelope_not_found("missing").await;

    // WHEN
    let resp = context.api.get("/api/envelope/v1/missing").await;

    // THEN
    assert_eq!(resp.status(), 500);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0006");
    assert_eq!(resp["message"], "Failed to get envelope");
    assert!(
        resp["cause"]["message"]
            .as_str()
            .unwrap()
            .contains("ENVELOPE_DOES_NOT_EXIST")
    );
}

#[tokio::test]
async fn test_get_envelope_vendor_error_hidden_cause() {
    // GIVEN
    let context =
        TestContext::new_with_config(Some("app:\n    hideErrorResponseCause: true".to_string()))
            .await;
    context.vendor.authentication().await;
    context.vendor.get_envelope_not_found("missing").await;

    // WHEN
    let resp = context.api.get("/api/envelope/v1/missing").await;

    // THEN
    assert_eq!(resp.status(), 500);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "Failed to get envelope");
    assert!(resp.get("cause").is_none());
}

#[tokio::test]
async fn test_authentication_failure() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.authentication_consent_required().await;

    // WHEN
    let resp = context.api.get("/api/envelope/v1/envelope-1").await;

    // THEN
    assert_eq!(resp.status(), 500);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "Failed to initialize e-signature service");
    assert!(
        resp["cause"]["message"]
            .as_str()
            .unwrap()
            .contains("consent_required")
    );
}

#[tokio::test]
async fn test_create_signing_url_ok() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.authentication().await;
    context
        .vendor
        .recipient_view(
            "envelope-1",
            "https://app.example.com/done?lang=en&envelopeId=envelope-1",
        )
        .await;

    // WHEN
    let resp = context
        .api
        .post(
            "/api/envelope/v1/envelope-1/signing-url",
            json!({
                "signer": signer(),
                "returnUrl": "https://app.example.com/done?lang=en"
            }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json_value().await["url"],
        "https://demo.docusign.net/Signing/StartInSession.aspx?t=abc"
    );
}

#[tokio::test]
async fn test_create_signing_url_blank_return_url() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.no_authentication().await;

    // WHEN
    let resp = context
        .api
        .post(
            "/api/envelope/v1/envelope-1/signing-url",
            json!({ "signer": signer(), "returnUrl": "" }),
        )
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0004");
}

#[tokio::test]
async fn test_status_changes_pagination() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.authentication().await;
    context
        .vendor
        .status_changes_page(None, &["envelope-1", "envelope-2"], "/envelopes?start_position=2")
        .await;
    context
        .vendor
        .status_changes_page(Some(2), &["envelope-3"], "")
        .await;

    // WHEN
    let resp = context
        .api
        .get("/api/envelope/v1/status-changes?from=2024-05-01T00:00:00Z")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["fromDate"], "2024-05-01T00:00:00Z");
    let envelopes = resp["envelopes"].as_array().unwrap();
    assert_eq!(envelopes.len(), 3);
    assert_eq!(envelopes[2]["envelopeId"], "envelope-3");
}

#[tokio::test]
async fn test_status_changes_without_from_date() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.no_authentication().await;

    // WHEN
    let resp = context.api.get("/api/envelope/v1/status-changes").await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0005");
}

#[tokio::test]
async fn test_status_changes_from_last_synchronization() {
    // GIVEN
    let context = TestContext::new_with_config(Some(
        "esign:\n    lastSynchronization: '2024-05-01T00:00:00Z'".to_string(),
    ))
    .await;
    context.vendor.authentication().await;
    context
        .vendor
        .status_changes_page(None, &["envelope-1"], "")
        .await;

    // WHEN
    let resp = context.api.get("/api/envelope/v1/status-changes").await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["envelopes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_signed_document_ok() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.authentication().await;
    context
        .vendor
        .signed_document("envelope-1", b"%PDF-1.7")
        .await;

    // WHEN
    let resp = context
        .api
        .get("/api/envelope/v1/envelope-1/signed-document")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["name"], "contract.pdf");
    assert_eq!(resp["content"], "JVBERi0xLjc=");
}
