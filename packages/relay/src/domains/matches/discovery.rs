//! Match discovery.
//!
//! Walks a hub's match history newest-first, page by page, until it meets the
//! hub's watermark or runs out of history. Finished matches seen on the way
//! are returned oldest-first so they can be relayed in the order they were
//! played.

use anyhow::Result;
use std::collections::VecDeque;
use tracing::{debug, info};

use crate::domains::hubs::Hub;
use crate::domains::matches::models::Match;
use crate::kernel::BaseMatchSource;

/// Matches requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Finished matches played since `hub.last`, oldest first.
///
/// The watermark match itself is never included. Any failed page aborts
/// discovery for the hub.
pub async fn discover_new_matches(hub: &Hub, source: &dyn BaseMatchSource) -> Result<Vec<Match>> {
    info!(hub_id = %hub.id, hub = %hub.name, last = ?hub.last, "Discovering new matches");

    let mut new_matches = VecDeque::new();
    let mut offset = 0;

    'pages: loop {
        let page_number = offset / PAGE_SIZE;
        debug!(hub_id = %hub.id, page = page_number, "Fetching match page");

        let page = source.fetch_page(&hub.id, offset, PAGE_SIZE).await?;
        info!(
            hub_id = %hub.id,
            page = page_number,
            remaining = page.rate_limit_remaining.as_deref().unwrap_or("unknown"),
            "FACEIT requests available this hour"
        );

        if page.items.is_empty() {
            info!(hub_id = %hub.id, "Reached end of available matches");
            break;
        }

        for listed in &page.items {
            if hub.last.as_deref() == Some(listed.match_id.as_str()) {
                info!(hub_id = %hub.id, match_id = %listed.match_id, "Found last uploaded match");
                break 'pages;
            }
            if listed.is_finished() {
                new_matches.push_front(Match::from_hub_match(listed, &hub.name)?);
            } else {
                debug!(
                    match_id = %listed.match_id,
                    status = %listed.status,
                    "Skipping unfinished match"
                );
            }
        }

        offset += PAGE_SIZE;
    }

    info!(hub_id = %hub.id, count = new_matches.len(), "Discovery complete");
    Ok(new_matches.into())
}
