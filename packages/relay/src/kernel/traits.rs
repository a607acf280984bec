// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Paging, patching and watermark handling live in the domains and use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseMatchSource, BaseDemoUploader)

use anyhow::Result;
use async_trait::async_trait;
use demostf::{DemoUpload, UploadReceipt};
use faceit_client::MatchPage;

// =============================================================================
// Match Source Trait (Infrastructure - hub match history)
// =============================================================================

#[async_trait]
pub trait BaseMatchSource: Send + Sync {
    /// Fetch one page of a hub's past matches, newest first.
    /// Non-2xx responses are errors.
    async fn fetch_page(&self, hub_id: &str, offset: u32, limit: u32) -> Result<MatchPage>;
}

// =============================================================================
// Demo Downloader Trait (Infrastructure - replay retrieval)
// =============================================================================

#[async_trait]
pub trait BaseDemoDownloader: Send + Sync {
    /// Download a gzip-compressed demo and return the decompressed bytes
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

// =============================================================================
// Demo Uploader Trait (Infrastructure - replay hosting)
// =============================================================================

#[async_trait]
pub trait BaseDemoUploader: Send + Sync {
    /// Post a demo. Returns whatever the host answered; only transport
    /// failures are errors.
    async fn upload(&self, upload: DemoUpload) -> Result<UploadReceipt>;
}
