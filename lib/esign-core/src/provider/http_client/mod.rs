//! Minimal HTTP abstraction used by the platform clients.
//!
//! Requests are assembled with [`RequestBuilder`] and handed to an
//! [`HttpClient`] implementation as a single [`Request`] value, which keeps
//! the transport mockable in unit tests.

pub mod reqwest_client;

use std::collections::HashMap;
use std::fmt;
use std::panic::Location;

use itertools::Itertools;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::Display;
use thiserror::Error;

const MAX_ERROR_DETAILS_LEN: usize = 512;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, Error>;
}

impl dyn HttpClient {
    pub fn get(&self, url: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Get, url)
    }

    pub fn post(&self, url: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::Post, url)
    }
}

pub type Headers = HashMap<String, String>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.0)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Headers,
    pub body: Vec<u8>,
    pub request: Request,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Form encoding error: {0}")]
    FormEncoding(#[from] serde_urlencoded::ser::Error),
    #[error("HTTP status code is error: {status}{}", format_details(.details))]
    ErrorStatus {
        status: StatusCode,
        details: Option<String>,
    },
}

fn format_details(details: &Option<String>) -> String {
    details
        .as_ref()
        .map(|details| format!(" - {details}"))
        .unwrap_or_default()
}

impl Error {
    fn logged(self, location: &Location, request: &Request) -> Self {
        tracing::error!(
            method = %request.method,
            url = %request.url,
            %location,
            "HTTP request failed: {self}"
        );
        tracing::trace!(
            headers = %RedactedHeaders(&request.headers),
            body = %BodyPreview(request.body.as_deref()),
            "Failed request"
        );
        self
    }
}

impl Response {
    /// Turns 4xx/5xx responses into [`Error::ErrorStatus`]. The beginning of
    /// the body, usually the vendor error payload, is kept as details.
    #[track_caller]
    pub fn error_for_status(self) -> Result<Self, Error> {
        if !self.status.is_error() {
            return Ok(self);
        }

        let error = Error::ErrorStatus {
            status: self.status,
            details: error_details(&self.body),
        };
        Err(error.logged(Location::caller(), &self.request))
    }

    #[track_caller]
    pub fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        serde_json::from_slice(&self.body)
            .map_err(|e| Error::Json(e).logged(Location::caller(), &self.request))
    }

    pub fn bytes(self) -> Vec<u8> {
        self.body
    }
}

pub struct RequestBuilder<'a> {
    client: &'a dyn HttpClient,
    request: Request,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(client: &'a dyn HttpClient, method: Method, url: &str) -> Self {
        Self {
            client,
            request: Request {
                method,
                url: url.to_owned(),
                headers: Headers::new(),
                body: None,
            },
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.request.headers.insert(name.to_owned(), value.into());
        self
    }

    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    #[track_caller]
    pub fn form<T: Serialize>(self, value: T) -> Result<Self, Error> {
        let location = Location::caller();
        let encoded = serde_urlencoded::to_string(value)
            .map_err(|e| Error::FormEncoding(e).logged(location, &self.request))?;

        Ok(self
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encoded.into_bytes()))
    }

    #[track_caller]
    pub fn json<T: Serialize>(self, value: T) -> Result<Self, Error> {
        let location = Location::caller();
        let encoded = serde_json::to_vec(&value)
            .map_err(|e| Error::Json(e).logged(location, &self.request))?;

        Ok(self.header("Content-Type", "application/json").body(encoded))
    }

    fn body(mut self, body: Vec<u8>) -> Self {
        self.request.body = Some(body);
        self
    }

    #[track_caller]
    pub fn send(self) -> impl Future<Output = Result<Response, Error>> + Send + 'a {
        let location = Location::caller();
        let Self { client, request } = self;

        async move {
            let method = request.method;
            let url = request.url.clone();
            let for_logging = request.clone();

            match client.send(request).await {
                Ok(response) => {
                    tracing::debug!(%method, %url, status = %response.status, %location, "HTTP request");
                    tracing::trace!(
                        request_headers = %RedactedHeaders(&response.request.headers),
                        request_body = %BodyPreview(response.request.body.as_deref()),
                        response_headers = %RedactedHeaders(&response.headers),
                        response_body = %BodyPreview(Some(&response.body)),
                        "HTTP exchange"
                    );
                    Ok(response)
                }
                Err(error) => Err(error.logged(location, &for_logging)),
            }
        }
    }
}

fn error_details(body: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();

    (!text.is_empty()).then(|| text.chars().take(MAX_ERROR_DETAILS_LEN).collect())
}

/// Header listing for trace logs with credentials masked.
struct RedactedHeaders<'a>(&'a Headers);

impl fmt::Display for RedactedHeaders<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<none>");
        }

        let listing = self
            .0
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    format!("{name}: <redacted>")
                } else {
                    format!("{name}: {value}")
                }
            })
            .join(", ");
        f.write_str(&listing)
    }
}

struct BodyPreview<'a>(Option<&'a [u8]>);

impl fmt::Display for BodyPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.map(std::str::from_utf8) {
            None => f.write_str("<none>"),
            Some(Ok(text)) => f.write_str(text),
            Some(Err(_)) => write!(f, "<{} bytes>", self.0.map_or(0, <[u8]>::len)),
        }
    }
}
