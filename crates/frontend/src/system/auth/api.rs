use anyhow::anyhow;
use contracts::shared::forms::RequestOutcome;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Reply of the login endpoint: credentials accepted, or a structured
/// rejection the form layer can normalize.
pub enum LoginReply {
    Accepted(LoginResponse),
    Rejected(RequestOutcome),
}

/// Login with username and password.
pub async fn login(username: String, password: String) -> anyhow::Result<LoginReply> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/system/auth/login", api_base()))
        .json(&request)
        .map_err(|e| anyhow!("failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| anyhow!("failed to send request: {}", e))?;

    if response.ok() {
        let body = response
            .json::<LoginResponse>()
            .await
            .map_err(|e| anyhow!("failed to parse response: {}", e))?;
        return Ok(LoginReply::Accepted(body));
    }

    // Rejections come back as a structured outcome body.
    match response.json::<RequestOutcome>().await {
        Ok(outcome) => Ok(LoginReply::Rejected(outcome)),
        Err(e) => Err(anyhow!(
            "login failed with status {}: {}",
            response.status(),
            e
        )),
    }
}

/// Refresh the access token using the refresh token.
pub async fn refresh_token(refresh_token: String) -> anyhow::Result<RefreshResponse> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/system/auth/refresh", api_base()))
        .json(&request)
        .map_err(|e| anyhow!("failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| anyhow!("failed to send request: {}", e))?;

    if !response.ok() {
        return Err(anyhow!("refresh failed: {}", response.status()));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| anyhow!("failed to parse response: {}", e))
}

/// Logout (revoke the refresh token).
pub async fn logout(refresh_token: String) -> anyhow::Result<()> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/system/auth/logout", api_base()))
        .json(&request)
        .map_err(|e| anyhow!("failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| anyhow!("failed to send request: {}", e))?;

    if !response.ok() {
        return Err(anyhow!("logout failed: {}", response.status()));
    }

    Ok(())
}

/// Current user info for a valid access token.
pub async fn get_current_user(access_token: &str) -> anyhow::Result<UserInfo> {
    let response = Request::get(&format!("{}/api/system/auth/me", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| anyhow!("failed to send request: {}", e))?;

    if !response.ok() {
        return Err(anyhow!("get current user failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| anyhow!("failed to parse response: {}", e))
}
