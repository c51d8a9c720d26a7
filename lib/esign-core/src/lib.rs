use std::sync::Arc;
use std::time::Duration;

use config::core_config::{CoreConfig, EsignConfig};
use provider::esign_platform::docusign::DocuSignClient;
use provider::http_client::HttpClient;
use provider::http_client::reqwest_client::ReqwestClient;
use service::envelope::EnvelopeService;

pub mod config;
pub mod model;
pub mod provider;
pub mod service;

#[derive(Clone)]
pub struct EsignCore {
    pub envelope_service: EnvelopeService,
    config: Arc<EsignConfig>,
}

impl EsignCore {
    /// Wires the envelope service to the DocuSign REST API.
    ///
    /// Without an injected `http_client` a reqwest client is built, honoring
    /// `requestTimeoutSeconds` from the configuration.
    pub fn new(
        config: CoreConfig,
        http_client: Option<Arc<dyn HttpClient>>,
    ) -> Result<Self, provider::http_client::Error> {
        let esign_config = Arc::new(config.esign);

        let http_client: Arc<dyn HttpClient> = match http_client {
            Some(http_client) => http_client,
            None => match esign_config.request_timeout_seconds {
                Some(timeout) => Arc::new(ReqwestClient::with_timeout(Duration::from_secs(
                    timeout,
                ))?),
                None => Arc::new(ReqwestClient::default()),
            },
        };

        let platform_client = Arc::new(DocuSignClient::new(http_client));

        Ok(Self {
            envelope_service: EnvelopeService::new(platform_client, esign_config.clone()),
            config: esign_config,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}
