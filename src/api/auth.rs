//! Authentication against the quotation API.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use super::client::{self, Client, ClientError};

/// Login request credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login error.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login failed: {0}")]
    LoginFailed(#[from] ClientError),
}

/// Successful login response.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Session token returned by the API.
    pub token: Option<String>,
}

/// Authenticate against the API.
///
/// Failures are logged here before being returned to the caller.
pub async fn login(client: &Client, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
    info!("starting authentication");

    match try_login(client, credentials).await {
        Ok(response) => {
            info!(token = ?response.token, "login succeeded");
            Ok(response)
        }
        Err(e) => {
            error!(error = %e, "login failed");
            Err(AuthError::LoginFailed(e))
        }
    }
}

async fn try_login(client: &Client, credentials: &Credentials) -> client::Result<LoginResponse> {
    let body = json!({
        "username": credentials.username,
        "password": credentials.password,
    });

    let bytes = client.request(Method::POST, "/auth/login", Some(&body)).await?;

    Ok(serde_json::from_slice(&bytes)?)
}
