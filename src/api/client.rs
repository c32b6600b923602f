//! HTTP client wrapper for the quotation API.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Settings;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Subscription key header expected by the API gateway.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Quotation API error response.
#[derive(Debug, Error)]
#[error("api error {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// HTTP client for the quotation API.
/// Attaches the fixed authentication headers to every request and surfaces
/// non-2xx responses as errors.
pub struct Client {
    http_client: HttpClient,
    base_url: String,
    headers: HeaderMap,
}

impl Client {
    /// Creates a new API client from the loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", settings.auth_token))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            SUBSCRIPTION_KEY_HEADER,
            HeaderValue::from_str(&settings.subscription_key)?,
        );

        Ok(Self {
            http_client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    /// Sends an HTTP request to the API.
    /// The body, when present, is sent as JSON.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .headers(self.headers.clone());

        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(method = %method, endpoint = %endpoint, "sending request");

        let response = request.send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(self.parse_error_response(status, &bytes));
        }

        Ok(bytes.to_vec())
    }

    /// Creates a ClientError from an error response.
    fn parse_error_response(&self, status: StatusCode, body: &[u8]) -> ClientError {
        #[derive(Deserialize)]
        struct ErrorResponse {
            message: Option<String>,
        }

        let message = match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(resp) => resp
                .message
                .unwrap_or_else(|| String::from_utf8_lossy(body).to_string()),
            Err(_) => String::from_utf8_lossy(body).to_string(),
        };

        let api_err = ApiError {
            status: status.as_u16(),
            message,
        };

        warn!(status = api_err.status, message = %api_err.message, "api error");

        ClientError::Api(api_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use std::path::PathBuf;

    fn test_client() -> Client {
        let settings = Settings {
            api_base_url: "https://api.example/".to_string(),
            auth_token: "tok".to_string(),
            subscription_key: String::new(),
            log_level: "INFO".to_string(),
            log_file_path: PathBuf::from("logs/test.log"),
        };
        Client::from_settings(&settings).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = test_client();
        assert_eq!(client.base_url, "https://api.example");
    }

    #[test]
    fn test_fixed_headers_attached() {
        let client = test_client();
        assert_eq!(client.headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
        assert_eq!(
            client.headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(client.headers.get(SUBSCRIPTION_KEY_HEADER).unwrap(), "");
    }

    #[test]
    fn test_error_response_prefers_json_message() {
        let client = test_client();
        let err = client.parse_error_response(
            StatusCode::UNAUTHORIZED,
            br#"{"message":"bad credentials"}"#,
        );

        match err {
            ClientError::Api(api) => {
                assert_eq!(api.status, 401);
                assert_eq!(api.message, "bad credentials");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_response_falls_back_to_raw_body() {
        let client = test_client();
        let err = client.parse_error_response(StatusCode::INTERNAL_SERVER_ERROR, b"boom");

        match err {
            ClientError::Api(api) => {
                assert_eq!(api.status, 500);
                assert_eq!(api.message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
