use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use super::Tool;

/// Failure modes of a fetch.
///
/// A non-200 status keeps its status code here even though the displayed
/// message stays the generic `Failed to fetch {url}`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch {url}")]
    BadStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Fetches the text body of a URL with a single GET.
pub struct UrlFetcher;

#[derive(Debug, Deserialize)]
struct FetchUrlArgs {
    url: String,
}

impl UrlFetcher {
    pub fn new() -> Self {
        Self
    }

    /// Issue one GET and return the body text on a 200 response.
    ///
    /// The client lives only for the duration of the call. No retry, no
    /// explicit timeout; transport defaults apply.
    pub async fn fetch_url(&self, url: &str) -> Result<String, FetchError> {
        let client = reqwest::Client::new();
        let response = client.get(url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            log::warn!("UrlFetcher: {} returned {}", url, status);
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl Tool for UrlFetcher {
    fn name(&self) -> &str {
        "fetch_url"
    }

    fn description(&self) -> &str {
        "Fetch url text response"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": { "type": "string" }
            },
            "required": ["url"]
        })
    }

    async fn call(&self, args: Value) -> Result<Value> {
        let args: FetchUrlArgs = serde_json::from_value(args)
            .context("Invalid arguments for fetch_url")?;
        let body = self.fetch_url(&args.url).await?;
        Ok(json!(body))
    }
}
