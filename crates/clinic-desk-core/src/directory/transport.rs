//! HTTP transport seam.
//!
//! Every backend call goes through [`HttpTransport`] so tests can script
//! responses without a server. The production implementation is a blocking
//! reqwest client. One request, one resolution; no retries.

use thiserror::Error;
use url::Url;

/// Transport errors: the request never produced a status line.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to {url} failed: {reason}")]
    Failed { url: String, reason: String },
}

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    /// JSON body for POSTs
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
            body: None,
        }
    }

    pub fn post(url: Url, body: String) -> Self {
        Self {
            method: Method::Post,
            url,
            body: Some(body),
        }
    }
}

/// Status and raw body of a completed exchange. Non-200 statuses are not an
/// error at this layer; callers decide what to do with them.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Blocking request/response execution.
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> TransportResult<HttpResponse>;
}

/// Production transport over a blocking reqwest client.
///
/// Sets `Content-Type: application/json` on every request, matching the
/// backend contract.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> TransportResult<HttpResponse> {
        let builder = match request.method {
            Method::Get => self.client.get(request.url.clone()),
            Method::Post => self.client.post(request.url.clone()),
        };
        let builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json");
        let builder = match &request.body {
            Some(body) => builder.body(body.clone()),
            None => builder,
        };

        let fail = |reason: String| TransportError::Failed {
            url: request.url.to_string(),
            reason,
        };

        let response = builder.send().map_err(|e| fail(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| fail(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
