//! Quotation retrieval.

use reqwest::Method;
use serde_json::Value;

use super::client::{Client, Result};

/// Fetch a quotation by id.
///
/// Errors propagate to the caller untouched.
pub async fn get_quotation(client: &Client, id: &str) -> Result<Value> {
    let endpoint = format!("/api/quotation/{}", id);
    let bytes = client.request(Method::GET, &endpoint, None).await?;

    Ok(serde_json::from_slice(&bytes)?)
}
