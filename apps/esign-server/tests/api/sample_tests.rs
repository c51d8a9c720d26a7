use crate::utils::context::TestContext;

#[tokio::test]
async fn test_sample_page() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.get("/").await;

    // THEN
    assert_eq!(resp.status(), 200);
    let page = resp.text().await;
    assert!(page.contains(r#"<form method="post" action="/sample/envelope">"#));
}

#[tokio::test]
async fn test_send_sample_envelope_ok() {
    // GIVEN
    let context = TestContext::new().await;
    context.vendor.authentication().await;
    context.vendor.create_envelope("envelope-1").await;

    // WHEN
    let resp = context.api.post("/sample/envelope", None::<serde_json::Value>).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["envelopeId"], "envelope-1");
    assert_eq!(resp["status"], "sent");
}

#[tokio::test]
async fn test_send_sample_envelope_disabled() {
    // GIVEN
    let context =
        TestContext::new_with_config(Some("esign:\n    enabled: false".to_string())).await;
    context.vendor.no_authentication().await;

    // WHEN
    let resp = context.api.post("/sample/envelope", None::<serde_json::Value>).await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0008");
}

#[tokio::test]
async fn test_send_sample_envelope_missing_document() {
    // GIVEN
    let context = TestContext::new_with_config(Some(
        "app:\n    sample:\n        documentPath: '/nonexistent/sample.pdf'".to_string(),
    ))
    .await;
    context.vendor.no_authentication().await;

    // WHEN
    let resp = context.api.post("/sample/envelope", None::<serde_json::Value>).await;

    // THEN
    assert_eq!(resp.status(), 500);
    let resp = resp.json_value().await;
    assert_eq!(resp["code"], "BR_0007");
    assert_eq!(resp["message"], "Sample document unavailable");
}
