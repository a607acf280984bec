use serde::Deserialize;

/// Match status reported once a match has been played out.
pub const STATUS_FINISHED: &str = "FINISHED";

/// One page of `GET /hubs/{id}/matches`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchList {
    #[serde(default)]
    pub items: Vec<HubMatch>,
}

/// A match as listed under a hub.
///
/// `demo_url` and `teams` are only reliably present once the match has
/// finished, so both are optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct HubMatch {
    pub match_id: String,
    pub status: String,
    #[serde(default)]
    pub demo_url: Option<Vec<String>>,
    #[serde(default)]
    pub teams: Option<Teams>,
}

impl HubMatch {
    pub fn is_finished(&self) -> bool {
        self.status == STATUS_FINISHED
    }

    /// First demo URL, if the API listed any.
    pub fn primary_demo_url(&self) -> Option<&str> {
        self.demo_url
            .as_ref()
            .and_then(|urls| urls.first())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Teams {
    pub faction1: Faction,
    pub faction2: Faction,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Faction {
    pub name: String,
}

/// A fetched page plus the quota header that came with it.
#[derive(Debug, Clone)]
pub struct MatchPage {
    pub items: Vec<HubMatch>,
    /// Value of `X-RateLimit-Remaining-hour`, when the API sent it.
    pub rate_limit_remaining: Option<String>,
}
