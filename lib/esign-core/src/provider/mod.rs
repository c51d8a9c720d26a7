pub mod esign_platform;
pub mod http_client;
