use esign_core::config::core_config::AppConfig;
use esign_server::ServerConfig;
use secrecy::SecretString;

pub const ACCOUNT_ID: &str = "account-1";

const PRIVATE_KEY: &str = include_str!("private_key.pem");

pub fn sample_document_path() -> String {
    format!("{}/tests/fixtures/sample.pdf", std::env!("CARGO_MANIFEST_DIR"))
}

/// Base configuration with both the identity provider and the REST API
/// pointed at `vendor_url`.
pub fn create_config(
    vendor_url: &str,
    additional_config: Option<String>,
) -> AppConfig<ServerConfig> {
    let root = std::env!("CARGO_MANIFEST_DIR");
    let base_config = std::fs::read_to_string(format!("{root}/../../config/config.yml")).unwrap();

    let test_config = indoc::formatdoc! {"
        esign:
            enabled: true
            integratorKey: 'integrator-key'
            userId: 'user-guid'
            restApiUrl: '{vendor_url}/restapi'
            oauthBasePath: '{vendor_url}'
            requestTimeoutSeconds: 5
        app:
            traceLevel: 'debug'
            sample:
                signer:
                    id: '567'
                    name: 'Jane Doe'
                    email: 'jane@example.com'
                documentPath: '{document_path}'
    ", document_path = sample_document_path()};

    let configs = [base_config, test_config]
        .into_iter()
        .chain(additional_config);

    let mut config = AppConfig::<ServerConfig>::from_yaml(configs).unwrap();
    config.core.esign.private_key = SecretString::from(PRIVATE_KEY);
    config
}
