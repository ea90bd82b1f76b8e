//! Scripted collaborators shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::net::client::ApiClient;
use crate::net::error::TransportError;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::util::notify::{Notice, Notifier};
use crate::util::redirect::Redirector;
use crate::util::storage::{KeyValueStore, MemoryStore};

// =========================================================================
// MockTransport
// =========================================================================

pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<ApiResponse, TransportError>>) -> Self {
        Self { responses: Mutex::new(responses.into()), requests: Mutex::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest, _timeout: Duration) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
    }
}

pub fn respond(status: u16, body: &str) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse { status, body: body.to_owned() })
}

pub fn token_body() -> &'static str {
    r#"{"access_token":"abcd1234","token_type":"Bearer"}"#
}

pub fn profile_body() -> &'static str {
    r##"{
        "username": "neo",
        "level": 7,
        "title": "Awakened",
        "exp": 1200,
        "avatarUrl": "/avatars/neo.png",
        "cash": 90,
        "attributes": [{ "label": "Focus", "value": 64, "color": "#2ecc71" }],
        "skills": [{ "name": "Kung Fu", "level": "Master", "type": "combat" }]
    }"##
}

// =========================================================================
// Recorders
// =========================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Default)]
pub struct RecordingRedirector {
    targets: Mutex<Vec<String>>,
}

impl RecordingRedirector {
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

impl Redirector for RecordingRedirector {
    fn hard_redirect(&self, path: &str) {
        self.targets.lock().unwrap().push(path.to_owned());
    }
}

// =========================================================================
// Harness
// =========================================================================

/// An [`ApiClient`] wired to scripted responses and recording collaborators.
pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub redirector: Arc<RecordingRedirector>,
    pub client: ApiClient,
}

impl Harness {
    pub fn new(responses: Vec<Result<ApiResponse, TransportError>>) -> Self {
        Self::with_store(MemoryStore::new(), responses)
    }

    pub fn with_store(store: MemoryStore, responses: Vec<Result<ApiResponse, TransportError>>) -> Self {
        let transport = Arc::new(MockTransport::new(responses));
        let store = Arc::new(store);
        let notifier = Arc::new(RecordingNotifier::default());
        let redirector = Arc::new(RecordingRedirector::default());
        let client = ApiClient::new(
            ApiConfig::default(),
            transport.clone(),
            store.clone(),
            notifier.clone(),
            redirector.clone(),
        );
        Self { transport, store, notifier, redirector, client }
    }

    pub fn dyn_store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }

    pub fn dyn_notifier(&self) -> Arc<dyn Notifier> {
        self.notifier.clone()
    }
}
