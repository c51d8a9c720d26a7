use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::core_config::EsignConfig;
use crate::provider::esign_platform::EsignPlatformClient;
use crate::provider::esign_platform::model::ApiSession;

pub mod dto;
pub mod service;

pub(crate) mod mapper;
pub(crate) mod validator;

/// Envelope operations against the e-signature platform.
///
/// Authenticates lazily on first use; the resulting [`ApiSession`] is shared by
/// all clones of the service and renewed shortly before the token expires.
#[derive(Clone)]
pub struct EnvelopeService {
    client: Arc<dyn EsignPlatformClient>,
    config: Arc<EsignConfig>,
    session: Arc<Mutex<Option<ApiSession>>>,
}

impl EnvelopeService {
    pub fn new(client: Arc<dyn EsignPlatformClient>, config: Arc<EsignConfig>) -> Self {
        Self {
            client,
            config,
            session: Arc::new(Mutex::new(None)),
        }
    }
}
