//! Run orchestrator.
//!
//! One pass over every hub in the store: discover, then for each new match
//! download, patch and upload, advancing the hub's watermark as each upload
//! is issued. A failing hub is logged and left behind; the others still run.

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::config::PersistMode;
use crate::domains::demos::{patch_demo, upload_demo};
use crate::domains::hubs::{Hub, HubStore};
use crate::domains::matches::{discover_new_matches, Match};
use crate::kernel::RelayDeps;

/// What happened to one hub during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubOutcome {
    pub hub_id: String,
    pub hub_name: String,
    /// Uploads issued before the hub finished or failed.
    pub uploaded: usize,
    pub last_before: Option<String>,
    pub last_after: Option<String>,
    /// Full error chain when the hub was abandoned.
    pub error: Option<String>,
}

impl HubOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn advanced(&self) -> bool {
        self.last_before != self.last_after
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<HubOutcome>,
}

impl RunReport {
    pub fn total_uploaded(&self) -> usize {
        self.outcomes.iter().map(|o| o.uploaded).sum()
    }

    pub fn failed(&self) -> impl Iterator<Item = &HubOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

/// Download, patch and upload a single match.
pub async fn relay_match(m: &Match, deps: &RelayDeps) -> Result<()> {
    info!(
        hub = %m.hub_name,
        match_id = %m.id,
        "Relaying {} vs {}",
        m.faction1,
        m.faction2
    );

    let demo = deps
        .downloader
        .download(&m.demo_url)
        .await
        .with_context(|| format!("Failed to download demo for match {}", m.id))?;

    let patched = patch_demo(demo, &m.hub_name)
        .with_context(|| format!("Failed to patch demo for match {}", m.id))?;

    upload_demo(m, patched, deps.uploader.as_ref()).await?;
    Ok(())
}

async fn relay_new_matches(hub: &mut Hub, deps: &RelayDeps, uploaded: &mut usize) -> Result<()> {
    let new_matches = discover_new_matches(hub, deps.match_source.as_ref()).await?;

    for m in &new_matches {
        relay_match(m, deps).await?;
        hub.last = Some(m.id.clone());
        *uploaded += 1;
    }
    Ok(())
}

/// Relay everything new for one hub. Errors end the hub early and are
/// reported in the outcome rather than returned.
pub async fn process_hub(hub: &mut Hub, deps: &RelayDeps) -> HubOutcome {
    let last_before = hub.last.clone();
    let mut uploaded = 0;

    let result = relay_new_matches(hub, deps, &mut uploaded).await;
    if let Err(e) = &result {
        error!(hub_id = %hub.id, hub = %hub.name, uploaded, error = ?e, "Hub processing failed");
    }

    HubOutcome {
        hub_id: hub.id.clone(),
        hub_name: hub.name.clone(),
        uploaded,
        last_before,
        last_after: hub.last.clone(),
        error: result.err().map(|e| format!("{:#}", e)),
    }
}

/// Run one full pass over the store.
///
/// The store is written once at the end whatever happened to the hubs. In
/// [`PersistMode::EachHub`] it is also written after every hub whose
/// watermark moved.
pub async fn run(store: &HubStore, deps: &RelayDeps, persist: PersistMode) -> Result<RunReport> {
    let mut hubs = store.load()?;
    info!(count = hubs.len(), path = %store.path().display(), "Starting relay run");

    let mut report = RunReport::default();
    for i in 0..hubs.len() {
        let outcome = process_hub(&mut hubs[i], deps).await;

        if persist == PersistMode::EachHub && outcome.advanced() {
            if let Err(e) = store.save(&hubs) {
                warn!(
                    hub_id = %outcome.hub_id,
                    error = ?e,
                    "Failed to persist watermark after hub"
                );
            }
        }
        report.outcomes.push(outcome);
    }

    store.save(&hubs).context("Failed to persist hub watermarks")?;

    info!(
        hubs = report.outcomes.len(),
        uploaded = report.total_uploaded(),
        failed = report.failed().count(),
        "Relay run complete"
    );
    Ok(report)
}
