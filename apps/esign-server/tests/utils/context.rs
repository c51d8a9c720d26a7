use esign_server::router::start_server;
use tokio::task::JoinHandle;

use super::api_client::Client;
use super::mock_server::MockServer;
use crate::fixtures;

pub struct TestContext {
    pub api: Client,
    pub vendor: MockServer,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_config(None).await
    }

    pub async fn new_with_config(additional_config: Option<String>) -> Self {
        let vendor = MockServer::new().await;

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config(&vendor.uri(), additional_config);
        let _handle = tokio::spawn(async move { start_server(listener, config).await });

        Self {
            api: Client::new(base_url),
            vendor,
            _handle,
        }
    }
}
