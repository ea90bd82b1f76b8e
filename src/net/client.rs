//! Shared API client with request and response interceptors.
//!
//! REQUEST
//! =======
//! Before each send the persisted token is read and, when present, copied
//! verbatim into `Authorization`. Absence is not an error.
//!
//! RESPONSE
//! ========
//! 2xx passes through. Anything else is classified into an [`ApiError`],
//! handed to [`FailureEffects`] (notice, and for 401 token purge plus hard
//! redirect to `/login`), then returned to the caller unchanged.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::error::{ApiError, TransportError, extract_detail};
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::config::ApiConfig;
use crate::routes::LOGIN_PATH;
use crate::util::notify::Notifier;
use crate::util::redirect::Redirector;
use crate::util::storage::{KeyValueStore, TOKEN_KEY, read_token};

/// Map a transport outcome onto the failure taxonomy.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for missing or non-2xx responses.
pub fn classify_outcome(outcome: Result<ApiResponse, TransportError>) -> Result<ApiResponse, ApiError> {
    match outcome {
        Ok(resp) if resp.is_success() => Ok(resp),
        Ok(resp) => Err(ApiError::from_status(resp.status, extract_detail(&resp.body))),
        Err(e) => Err(ApiError::Network(e)),
    }
}

/// Side effects run for every failed request.
#[derive(Clone)]
pub struct FailureEffects {
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    redirector: Arc<dyn Redirector>,
}

impl FailureEffects {
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>, redirector: Arc<dyn Redirector>) -> Self {
        Self { store, notifier, redirector }
    }

    pub fn apply(&self, error: &ApiError) {
        if let Some(notice) = error.notice() {
            self.notifier.notify(notice);
        }
        if error.is_session_expired() {
            self.store.remove(TOKEN_KEY);
            self.redirector.hard_redirect(LOGIN_PATH);
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
    store: Arc<dyn KeyValueStore>,
    effects: FailureEffects,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        redirector: Arc<dyn Redirector>,
    ) -> Self {
        let effects = FailureEffects::new(Arc::clone(&store), notifier, redirector);
        Self { config, transport, store, effects }
    }

    /// Absolute-from-root URL for an endpoint path such as `/token`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_path)
    }

    /// Outgoing interceptor.
    pub fn attach_token(&self, request: &mut ApiRequest) {
        if let Some(token) = read_token(self.store.as_ref()) {
            request.set_header("Authorization", &token);
        }
    }

    /// Send `request` through both interceptors.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] after its side effects have run.
    pub async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.attach_token(&mut request);
        log::debug!("{:?} {}", request.method, request.url);
        let outcome = self.transport.send(request, self.config.timeout).await;
        classify_outcome(outcome).inspect_err(|err| {
            log::debug!("request failed: {err}");
            self.effects.apply(err);
        })
    }

    /// `GET` an endpoint and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiClient::execute`] failures and [`ApiError::Decode`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::get(self.endpoint(path))).await?.json()
    }

    /// `POST` form fields to an endpoint and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiClient::execute`] failures and [`ApiError::Decode`].
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, fields: &[(&str, &str)]) -> Result<T, ApiError> {
        self.execute(ApiRequest::post_form(self.endpoint(path), fields)).await?.json()
    }
}
