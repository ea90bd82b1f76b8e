//! Wire DTOs for the backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend JSON exactly (`avatarUrl`, `type`), and
//! integer fields accept integral floats since the backend serializes some
//! counters (notably `cash`) as floats.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Username carried by the placeholder profile.
pub const SENTINEL_USERNAME: &str = "Loading...";

/// A labelled numeric stat rendered as a colored bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub label: String,
    pub value: f64,
    /// CSS color for the bar.
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Display label such as `"Lv.3"` or `"Master"`.
    pub level: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The signed-in user's profile as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub level: i64,
    pub title: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub exp: i64,
    pub avatar_url: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub cash: i64,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl UserProfile {
    /// Placeholder shown before the first fetch and after logout.
    pub fn sentinel() -> Self {
        Self {
            username: SENTINEL_USERNAME.to_owned(),
            level: 0,
            title: String::new(),
            exp: 0,
            avatar_url: String::new(),
            cash: 0,
            attributes: Vec::new(),
            skills: Vec::new(),
        }
    }

    /// Whether a real profile has replaced the sentinel.
    pub fn is_loaded(&self) -> bool {
        self.username != SENTINEL_USERNAME && self.level != 0
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::sentinel()
    }
}

/// Login form fields posted to `/token`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// OAuth2 password-grant form fields.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("grant_type", "password"),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

/// Response body of `POST /token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    /// Authorization header value, e.g. `"Bearer abc"`.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
