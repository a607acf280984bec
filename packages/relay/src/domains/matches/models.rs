use anyhow::{Context, Result};
use faceit_client::HubMatch;

/// A finished match ready to be relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub hub_name: String,
    pub demo_url: String,
    pub faction1: String,
    pub faction2: String,
}

impl Match {
    /// Build from a listed match. Finished matches must carry a demo URL and
    /// both team names.
    pub fn from_hub_match(listed: &HubMatch, hub_name: &str) -> Result<Self> {
        let demo_url = listed
            .primary_demo_url()
            .with_context(|| format!("Match {} has no demo_url", listed.match_id))?;
        let teams = listed
            .teams
            .as_ref()
            .with_context(|| format!("Match {} has no teams", listed.match_id))?;

        Ok(Self {
            id: listed.match_id.clone(),
            hub_name: hub_name.to_string(),
            demo_url: demo_url.to_string(),
            faction1: teams.faction1.name.clone(),
            faction2: teams.faction2.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{finished_match, mock_demo_url};

    #[test]
    fn test_from_finished_match() {
        let m = Match::from_hub_match(&finished_match("m7"), "Cup").unwrap();
        assert_eq!(
            m,
            Match {
                id: "m7".to_string(),
                hub_name: "Cup".to_string(),
                demo_url: mock_demo_url("m7"),
                faction1: "m7_blu".to_string(),
                faction2: "m7_red".to_string(),
            }
        );
    }

    #[test]
    fn test_first_demo_url_wins() {
        let mut listed = finished_match("m7");
        listed.demo_url = Some(vec!["https://a/1.gz".to_string(), "https://b/2.gz".to_string()]);
        let m = Match::from_hub_match(&listed, "Cup").unwrap();
        assert_eq!(m.demo_url, "https://a/1.gz");
    }

    #[test]
    fn test_missing_demo_url_is_an_error() {
        let mut listed = finished_match("m7");
        listed.demo_url = Some(vec![]);
        assert!(Match::from_hub_match(&listed, "Cup").is_err());

        listed.demo_url = None;
        assert!(Match::from_hub_match(&listed, "Cup").is_err());
    }

    #[test]
    fn test_missing_teams_is_an_error() {
        let mut listed = finished_match("m7");
        listed.teams = None;
        let err = Match::from_hub_match(&listed, "Cup").unwrap_err();
        assert!(err.to_string().contains("m7"));
    }
}
