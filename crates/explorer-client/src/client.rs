use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ExplorerClientError, Result};
use crate::types::{ExoplanetQueryRequest, ExoplanetQueryResponse};

/// Typed client for the exoplanet explorer API
///
/// Holds no per-request state; cloning is cheap and concurrent calls
/// are independent.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ExplorerClient {
    /// Create a new client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ExplorerClientError::Config(format!("invalid base URL: {e}")))?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Query exoplanets matching the given criteria
    ///
    /// Issues exactly one `POST /exoplanets/query` with the request as
    /// the JSON body. No validation, retries, or caching happen here;
    /// transport and server errors propagate to the caller unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn query_exoplanets(
        &self,
        req: &ExoplanetQueryRequest,
    ) -> Result<ExoplanetQueryResponse> {
        self.post_json("/exoplanets/query", req).await
    }

    /// POST a JSON body and deserialize the response as `T`
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = make_url(&self.base_url, path);

        let response = self.http.post(url.as_str()).json(body).send().await?;

        handle_error(response).await?.json().await.map_err(|e| {
            if e.is_decode() {
                ExplorerClientError::Parse(e.to_string())
            } else {
                ExplorerClientError::Http(e)
            }
        })
    }
}

// -- Helper functions --

/// Build a URL from a base and path
fn make_url(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    url.set_path(path);
    url
}

/// Check an HTTP response for errors
async fn handle_error(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Try to parse error body
    let body = response.text().await.unwrap_or_default();
    let (error_type, message) = parse_error_body(&body);

    Err(ExplorerClientError::Api {
        status: status.as_u16(),
        error_type,
        message,
    })
}

/// Parse an error response body into (type, message)
fn parse_error_body(body: &str) -> (String, String) {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let error = &json["error"];
        let error_type = error["type"].as_str().unwrap_or("unknown").to_owned();
        let message = error["message"].as_str().unwrap_or(body).to_owned();
        (error_type, message)
    } else {
        ("unknown".to_owned(), body.to_owned())
    }
}
