//! Auth token and user profile for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in two places: [`SessionState::token`] for the UI and the
//! persistent `token` key for the HTTP client and route guard. Every mutating
//! operation here writes both.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP layer has already notified the user by the time an error reaches
//! this module. `login` reduces failures to `false`; profile fetches log and
//! keep the previous profile.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use super::handle::StateHandle;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::{Credentials, UserProfile};
use crate::util::notify::{Notice, Notifier};
use crate::util::storage::{KeyValueStore, TOKEN_KEY, read_token};

pub const LOGGED_OUT_MESSAGE: &str = "Signed out safely";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub profile: UserProfile,
}

impl SessionState {
    /// Initial state at app start: persisted token, sentinel profile.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        Self { token: read_token(store), profile: UserProfile::sentinel() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Session operations over a [`SessionState`] handle.
#[derive(Clone)]
pub struct SessionStore<H> {
    state: H,
    api: ApiClient,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
}

impl<H: StateHandle<SessionState>> SessionStore<H> {
    pub fn new(state: H, api: ApiClient, store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { state, api, store, notifier }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// Exchange credentials for a token. Nothing is stored on failure.
    pub async fn login(&self, credentials: &Credentials) -> bool {
        match api::request_token(&self.api, credentials).await {
            Ok(response) => {
                let token = response.authorization();
                self.store.set(TOKEN_KEY, &token);
                self.state.write_state(|s| s.token = Some(token));
                log::info!("signed in as {}", credentials.username);
                true
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                false
            }
        }
    }

    /// Load the profile unless a real one is already present.
    pub async fn fetch_profile(&self) {
        if self.state.read_state(|s| s.profile.is_loaded()) {
            log::debug!("profile already loaded, skipping fetch");
            return;
        }
        self.refresh_profile().await;
    }

    /// Fetch the profile unconditionally and replace it wholesale.
    pub async fn refresh_profile(&self) {
        match api::fetch_current_profile(&self.api).await {
            Ok(profile) => self.state.write_state(|s| s.profile = profile),
            Err(err) => log::error!("failed to fetch user profile: {err}"),
        }
    }

    pub fn logout(&self) {
        self.state.write_state(|s| {
            s.token = None;
            s.profile = UserProfile::sentinel();
        });
        self.store.remove(TOKEN_KEY);
        self.notifier.notify(Notice::success(LOGGED_OUT_MESSAGE));
        log::info!("signed out");
    }
}
