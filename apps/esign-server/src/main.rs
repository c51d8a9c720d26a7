use std::net::{Ipv4Addr, SocketAddr, TcpListener};
use std::path::PathBuf;

use clap::Parser;
use esign_core::config::core_config::AppConfig;
use esign_server::ServerConfig;
use esign_server::router::start_server;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_CONFIG: &str = "config/config.yml";
const DEFAULT_PORT: u16 = 3000;

/// E-signature envelope service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Additional config files, merged over the default one in the given order
    #[arg(short, long, value_name = "FILE")]
    config: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config_files: Vec<PathBuf> = std::iter::once(PathBuf::from(DEFAULT_CONFIG))
        .chain(cli.config)
        .collect();
    let app_config =
        AppConfig::<ServerConfig>::from_files(&config_files).expect("Failed creating config");

    initialize_tracing(&app_config.app);

    let addr = SocketAddr::new(
        app_config
            .app
            .server_ip
            .unwrap_or(Ipv4Addr::UNSPECIFIED.into()),
        app_config.app.server_port.unwrap_or(DEFAULT_PORT),
    );
    let listener = TcpListener::bind(addr).expect("Failed to bind to address");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
        .block_on(start_server(listener, app_config))
}

/// `RUST_LOG` takes precedence over the configured `traceLevel`.
fn initialize_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("debug")))
        .expect("Failed to create env filter");

    let fmt_layer = tracing_subscriber::fmt::layer();
    let registry = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        registry.with(fmt_layer.json().flatten_event(true)).init();
    } else {
        registry.with(fmt_layer).init();
    }
}
