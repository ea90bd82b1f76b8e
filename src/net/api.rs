//! REST endpoints consumed by the session store.
//!
//! Paths are relative to the client's base path (`/api` by default).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{Credentials, TokenResponse, UserProfile};

pub const TOKEN_ENDPOINT: &str = "/token";
pub const PROFILE_ENDPOINT: &str = "/users/me";

/// Exchange credentials for a token via `POST /token`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// without `access_token`/`token_type`.
pub async fn request_token(client: &ApiClient, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
    client.post_form(TOKEN_ENDPOINT, &credentials.form_fields()).await
}

/// Fetch the signed-in user's profile via `GET /users/me`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a body
/// that is not a profile.
pub async fn fetch_current_profile(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.get_json(PROFILE_ENDPOINT).await
}
