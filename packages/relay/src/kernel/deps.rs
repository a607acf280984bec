//! Relay dependencies (using traits for testability)
//!
//! This module provides the dependency container used by the run orchestrator.
//! All external services use trait abstractions to enable testing.

use anyhow::{Context, Result};
use async_trait::async_trait;
use demostf::{DemoUpload, DemosTfOptions, DemosTfService, UploadReceipt};
use faceit_client::{FaceitClient, MatchPage};
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{BaseDemoDownloader, BaseDemoUploader, BaseMatchSource, HttpDemoDownloader};

// =============================================================================
// FaceitClient Adapter (implements BaseMatchSource trait)
// =============================================================================

/// Wrapper around FaceitClient that implements BaseMatchSource trait
pub struct FaceitAdapter(pub FaceitClient);

#[async_trait]
impl BaseMatchSource for FaceitAdapter {
    async fn fetch_page(&self, hub_id: &str, offset: u32, limit: u32) -> Result<MatchPage> {
        self.0
            .hub_matches(hub_id, offset, limit)
            .await
            .with_context(|| {
                format!("Failed to list matches for hub {} at offset {}", hub_id, offset)
            })
    }
}

// =============================================================================
// DemosTfService Adapter (implements BaseDemoUploader trait)
// =============================================================================

/// Wrapper around DemosTfService that implements BaseDemoUploader trait
pub struct DemosTfAdapter(pub DemosTfService);

#[async_trait]
impl BaseDemoUploader for DemosTfAdapter {
    async fn upload(&self, upload: DemoUpload) -> Result<UploadReceipt> {
        let name = upload.name.clone();
        self.0
            .upload(upload)
            .await
            .with_context(|| format!("Failed to upload {} to demos.tf", name))
    }
}

// =============================================================================
// RelayDeps
// =============================================================================

/// Relay dependencies, one set per run
#[derive(Clone)]
pub struct RelayDeps {
    pub match_source: Arc<dyn BaseMatchSource>,
    pub downloader: Arc<dyn BaseDemoDownloader>,
    pub uploader: Arc<dyn BaseDemoUploader>,
}

impl RelayDeps {
    pub fn new(
        match_source: Arc<dyn BaseMatchSource>,
        downloader: Arc<dyn BaseDemoDownloader>,
        uploader: Arc<dyn BaseDemoUploader>,
    ) -> Self {
        Self {
            match_source,
            downloader,
            uploader,
        }
    }

    /// Wire up the production FACEIT, download and demos.tf clients.
    pub fn from_config(config: &Config) -> Result<Self> {
        let faceit = FaceitClient::with_timeout(config.faceit_api_key.clone(), config.http_timeout)
            .context("Failed to create FACEIT client")?
            .with_base_url(config.faceit_base_url.clone());

        let mut demostf_options = DemosTfOptions::new(config.demostf_api_key.clone());
        demostf_options.base_url = config.demostf_base_url.clone();
        demostf_options.timeout = Some(config.transfer_timeout);
        let demostf =
            DemosTfService::new(demostf_options).context("Failed to create demos.tf client")?;

        let downloader = HttpDemoDownloader::new(config.transfer_timeout)?;

        Ok(Self::new(
            Arc::new(FaceitAdapter(faceit)),
            Arc::new(downloader),
            Arc::new(DemosTfAdapter(demostf)),
        ))
    }
}
