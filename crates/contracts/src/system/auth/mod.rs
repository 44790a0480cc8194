//! Wire shapes of the authentication endpoints.
//!
//! The authentication protocol itself lives behind those endpoints; this
//! crate only carries the request/response bodies and the resulting user
//! descriptor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserInfo {
    /// Name to show in the header: full name when known, login otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user: UserInfo = serde_json::from_str(r#"{ "id": "u1", "username": "admin" }"#).unwrap();
        assert_eq!(user.display_name(), "admin");

        let named = UserInfo {
            full_name: Some("Ada Lovelace".into()),
            ..user
        };
        assert_eq!(named.display_name(), "Ada Lovelace");
    }
}
