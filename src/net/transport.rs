//! Raw HTTP exchange behind a mockable seam.
//!
//! Client-side (`csr`): real requests via `gloo-net`, raced against a
//! `gloo-timers` timeout. Elsewhere the browser transport fails every request
//! as a network error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::error::{ApiError, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// `application/x-www-form-urlencoded` payload, already encoded.
    Form(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), headers: Vec::new(), body: RequestBody::Empty }
    }

    /// Form-encoded POST.
    pub fn post_form(url: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields.iter().copied())
            .finish();
        Self { method: Method::Post, url: url.into(), headers: Vec::new(), body: RequestBody::Form(encoded) }
    }

    /// Header lookup, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set a header, replacing any existing value with the same name.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.to_owned()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// One request/response exchange. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Send `request`, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only when no response arrived; any HTTP
    /// status, including failures, is an `Ok` response.
    async fn send(&self, request: ApiRequest, timeout: Duration) -> Result<ApiResponse, TransportError>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest, timeout: Duration) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Form(body) => builder
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body),
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let timeout_ms = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
            let exchange = std::pin::pin!(async move {
                let resp = prepared
                    .send()
                    .await
                    .map_err(|e| TransportError::Network(e.to_string()))?;
                let status = resp.status();
                let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
                Ok::<_, TransportError>(ApiResponse { status, body })
            });
            let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));

            match select(exchange, timer).await {
                Either::Left((outcome, _)) => outcome,
                Either::Right(((), _)) => Err(TransportError::Timeout(u64::from(timeout_ms))),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, timeout);
            Err(TransportError::Network("not available outside the browser".to_owned()))
        }
    }
}
