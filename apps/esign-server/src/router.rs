use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use esign_core::EsignCore;
use esign_core::config::core_config::AppConfig;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnBodyChunk, DefaultOnEos, TraceLayer};
use tracing::{Span, info, info_span};

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{envelope, sample};

pub(crate) struct InternalAppState {
    pub core: EsignCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>) {
    let core = EsignCore::new(config.core, None).expect("Failed to initialize core");
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: Arc::new(config.app),
    });

    listener
        .set_nonblocking(true)
        .expect("Failed to set listener to non-blocking");
    let listener =
        tokio::net::TcpListener::from_std(listener).expect("Failed to convert TCP listener");
    if let Ok(addr) = listener.local_addr() {
        info!(enabled = state.core.is_enabled(), "Starting server at http://{addr}");
    }

    axum::serve(listener, router(state))
        .await
        .expect("Failed to start axum server");
}

fn router(state: AppState) -> Router {
    use envelope::controller as envelopes;
    use sample::controller as sample_page;

    let envelope_api = Router::new()
        .route("/", post(envelopes::create_envelope))
        .route(
            "/status-changes",
            get(envelopes::get_envelopes_with_updated_status),
        )
        .route("/{id}", get(envelopes::get_envelope))
        .route("/{id}/signing-url", post(envelopes::create_signing_url))
        .route("/{id}/signed-document", get(envelopes::get_signed_document));

    Router::new()
        .nest("/api/envelope/v1", envelope_api)
        .route("/", get(sample_page::sample_page))
        .route("/sample/envelope", post(sample_page::send_sample_envelope))
        .layer(trace_layer())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl Fn(&Request<Body>) -> Span + Clone,
    impl Fn(&Request<Body>, &Span) + Clone,
    impl Fn(&Response<Body>, Duration, &Span) + Clone,
    DefaultOnBodyChunk,
    DefaultOnEos,
    (),
> {
    TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            info_span!(
                "http_request",
                method = %request.method(),
                path = request.uri().path(),
                service = "esign-server",
            )
        })
        .on_request(|request: &Request<Body>, _: &Span| {
            tracing::debug!(
                "SERVICE CALL START {} {}",
                request.method(),
                request.uri().path()
            )
        })
        .on_response(|response: &Response<Body>, latency: Duration, _: &Span| {
            tracing::debug!(
                latency_ms = latency.as_millis(),
                "SERVICE CALL END {}",
                response.status()
            )
        })
        // failures are already logged by the handlers
        .on_failure(())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let details = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "Unknown panic message".to_string());

    tracing::error!("Panic occurred: {details}");

    ErrorResponse::for_panic(details).into_response()
}
