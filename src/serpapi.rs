use reqwest::Client;
use serde_json::Value;
use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::FetchError;

/// Where the API key comes from.
#[derive(Clone)]
pub enum Credential {
    /// Read from this environment variable on every request. A missing
    /// variable is sent as an empty key and left for the API to reject.
    Env(String),
    Fixed(String),
}

// Never print a key.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Env(var) => f.debug_tuple("Env").field(var).finish(),
            Credential::Fixed(_) => f.debug_tuple("Fixed").field(&"<redacted>").finish(),
        }
    }
}

impl Credential {
    fn resolve(&self) -> String {
        match self {
            Credential::Env(var) => env::var(var).unwrap_or_default(),
            Credential::Fixed(key) => key.clone(),
        }
    }
}

#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
    base_url: String,
    credential: Credential,
}

impl fmt::Debug for SerpApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiClient")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

impl SerpApiClient {
    pub fn new(
        base_url: impl Into<String>,
        credential: Credential,
        timeout: Option<Duration>,
    ) -> Result<SerpApiClient, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(SerpApiClient {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
        })
    }

    /// Runs one search and returns the raw JSON document.
    pub async fn search(&self, params: &[(&str, &str)]) -> Result<Value, FetchError> {
        let api_key = self.credential.resolve();
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(params)
            .query(&[("api_key", api_key.as_str()), ("output", "json")])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => return Err(FetchError::Status(status)),
            Err(e) => return Err(FetchError::Body(e)),
        };

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(FetchError::Api(message.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(body)
    }
}
