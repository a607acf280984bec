//! Pure FACEIT Data API client.
//!
//! A minimal client for the FACEIT Data API v4. Supports listing the past
//! matches of a hub, one page at a time, newest first.
//!
//! # Example
//!
//! ```rust,ignore
//! use faceit_client::FaceitClient;
//!
//! let client = FaceitClient::new("your-api-key".into());
//!
//! let page = client.hub_matches("hub-id", 0, 10).await?;
//! for m in &page.items {
//!     println!("{} {}", m.match_id, m.status);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{FaceitError, Result};
pub use types::{Faction, HubMatch, MatchList, MatchPage, Teams, STATUS_FINISHED};

use std::time::Duration;

const BASE_URL: &str = "https://open.faceit.com";

const RATE_LIMIT_HEADER: &str = "X-RateLimit-Remaining-hour";

#[derive(Clone)]
pub struct FaceitClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FaceitClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Build a client whose requests give up after `timeout`.
    pub fn with_timeout(api_key: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different host (proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of a hub's past matches, newest first.
    pub async fn hub_matches(&self, hub_id: &str, offset: u32, limit: u32) -> Result<MatchPage> {
        let url = format!("{}/data/v4/hubs/{}/matches", self.base_url, hub_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[
                ("type", "past".to_string()),
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FaceitError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let rate_limit_remaining = resp
            .headers()
            .get(RATE_LIMIT_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let list: MatchList = resp.json().await?;
        tracing::debug!(hub_id, offset, count = list.items.len(), "Fetched hub match page");

        Ok(MatchPage {
            items: list.items,
            rate_limit_remaining,
        })
    }
}
