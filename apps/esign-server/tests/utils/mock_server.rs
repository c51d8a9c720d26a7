use serde_json::json;
use wiremock::http::Method;
use wiremock::matchers::{
    body_partial_json, body_string_contains, header, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, ResponseTemplate};

use crate::fixtures::ACCOUNT_ID;

/// Stand-in for the e-signature platform: identity provider and REST API.
pub struct MockServer {
    mock: wiremock::MockServer,
}

impl MockServer {
    pub async fn new() -> Self {
        let mock = wiremock::MockServer::start().await;
        Self { mock }
    }

    pub fn uri(&self) -> String {
        self.mock.uri()
    }

    fn envelopes_path(&self, suffix: &str) -> String {
        format!("/restapi/v2.1/accounts/{ACCOUNT_ID}/envelopes{suffix}")
    }

    pub async fn authentication(&self) {
        Mock::given(method(Method::POST))
            .and(path("/oauth/token"))
            .and(body_string_contains(
                "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access-token",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&self.mock)
            .await;

        Mock::given(method(Method::GET))
            .and(path("/oauth/userinfo"))
            .and(header("Authorization", "Bearer access-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sub": "user-guid",
                "accounts": [
                    {
                        "account_id": "other-account",
                        "is_default": false,
                        "base_uri": "https://eu.docusign.net"
                    },
                    {
                        "account_id": ACCOUNT_ID,
                        "is_default": true,
                        "base_uri": self.uri()
                    }
                ]
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn no_authentication(&self) {
        Mock::given(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.mock)
            .await;
    }

    pub async fn authentication_consent_required(&self) {
        Mock::given(method(Method::POST))
            .and(path("/oauth/token"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "consent_required" })),
            )
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn create_envelope(&self, envelope_id: &str) {
        Mock::given(method(Method::POST))
            .and(path(self.envelopes_path("")))
            .and(header("Authorization", "Bearer access-token"))
            .and(body_partial_json(json!({
                "emailSubject": "Please sign this document",
                "status": "sent",
                "recipients": {
                    "signers": [{ "clientUserId": "567", "email": "jane@example.com" }]
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "envelopeId": envelope_id,
                "status": "sent",
                "statusDateTime": "2024-05-01T10:00:00.0000000Z",
                "uri": format!("/envelopes/{envelope_id}")
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn get_envelope(&self, envelope_id: &str) {
        Mock::given(method(Method::GET))
            .and(path(self.envelopes_path(&format!("/{envelope_id}"))))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "envelopeId": envelope_id,
                "status": "completed",
                "emailSubject": "Please sign this document",
                "completedDateTime": "2024-05-02T08:00:00.0000000Z"
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn get_envelope_not_found(&self, envelope_id: &str) {
        Mock::given(method(Method::GET))
            .and(path(self.envelopes_path(&format!("/{envelope_id}"))))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errorCode": "ENVELOPE_DOES_NOT_EXIST",
                "message": "The envelope specified either does not exist or you have no rights to it."
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn recipient_view(&self, envelope_id: &str, expected_return_url: &str) {
        Mock::given(method(Method::POST))
            .and(path(
                self.envelopes_path(&format!("/{envelope_id}/views/recipient")),
            ))
            .and(body_partial_json(json!({
                "authenticationMethod": "email",
                "clientUserId": "567",
                "returnUrl": expected_return_url
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "url": "https://demo.docusign.net/Signing/StartInSession.aspx?t=abc"
            })))
            .expect(1)
            .mount(&self.mock)
            .await;
    }

    pub async fn status_changes_page(
        &self,
        start_position: Option<usize>,
        envelope_ids: &[&str],
        next_uri: &str,
    ) {
        let envelopes: Vec<_> = envelope_ids
            .iter()
            .map(|envelope_id| json!({ "envelopeId": envelope_id, "status": "completed" }))
            .collect();

        let mock = Mock::given(method(Method::GET))
            .and(path(self.envelopes_path("")))
            .and(query_param("status", "any"))
            .and(query_param("from_date", "2024-05-01T00:00:00Z"));

        let mock = match start_position {
            Some(start_position) => mock.and(query_param("start_position", start_position.to_string())),
            None => mock.and(query_param_is_missing("start_position")),
        };

        mock.respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "envelopes": envelopes,
            "resultSetSize": envelope_ids.len().to_string(),
            "nextUri": next_uri
        })))
        .expect(1)
        .mount(&self.mock)
        .await;
    }

    pub async fn signed_document(&self, envelope_id: &str, content: &[u8]) {
        Mock::given(method(Method::GET))
            .and(path(self.envelopes_path(&format!("/{envelope_id}/documents"))))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "envelopeId": envelope_id,
                "envelopeDocuments": [
                    { "documentId": "certificate", "name": "Summary", "type": "summary" },
                    { "documentId": "1", "name": "contract.pdf", "type": "content" }
                ]
            })))
            .expect(1)
            .mount(&self.mock)
            .await;

        Mock::given(method(Method::GET))
            .and(path(
                self.envelopes_path(&format!("/{envelope_id}/documents/1")),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
            .expect(1)
            .mount(&self.mock)
            .await;
    }
}
