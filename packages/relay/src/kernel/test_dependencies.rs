// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into RelayDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use demostf::{DemoUpload, UploadReceipt};
use faceit_client::{Faction, HubMatch, MatchPage, Teams, STATUS_FINISHED};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::{BaseDemoDownloader, BaseDemoUploader, BaseMatchSource, RelayDeps};

/// Size of the demo the mock downloader serves when no body was registered.
pub const DEFAULT_MOCK_DEMO_LEN: usize = 512;

/// A finished match with a demo URL of `https://demos.test/{id}.dem.gz`.
pub fn finished_match(id: &str) -> HubMatch {
    HubMatch {
        match_id: id.to_string(),
        status: STATUS_FINISHED.to_string(),
        demo_url: Some(vec![mock_demo_url(id)]),
        teams: Some(Teams {
            faction1: Faction {
                name: format!("{}_blu", id),
            },
            faction2: Faction {
                name: format!("{}_red", id),
            },
        }),
    }
}

/// A match with the given non-finished status and no demo.
pub fn match_with_status(id: &str, status: &str) -> HubMatch {
    HubMatch {
        match_id: id.to_string(),
        status: status.to_string(),
        demo_url: None,
        teams: None,
    }
}

pub fn mock_demo_url(match_id: &str) -> String {
    format!("https://demos.test/{}.dem.gz", match_id)
}

// =============================================================================
// Mock Match Source
// =============================================================================

/// Arguments captured from a fetch_page call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCall {
    pub hub_id: String,
    pub offset: u32,
    pub limit: u32,
}

#[derive(Default)]
pub struct MockMatchSource {
    pages: Mutex<HashMap<String, Vec<Vec<HubMatch>>>>,
    failing_hubs: Mutex<HashSet<String>>,
    calls: Mutex<Vec<PageCall>>,
}

impl MockMatchSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page (newest first) to a hub's history.
    pub fn with_page(self, hub_id: &str, page: Vec<HubMatch>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .entry(hub_id.to_string())
            .or_default()
            .push(page);
        self
    }

    /// Split a newest-first history into pages of `limit`.
    pub fn with_history(self, hub_id: &str, history: Vec<HubMatch>, limit: usize) -> Self {
        let mut source = self;
        for chunk in history.chunks(limit) {
            source = source.with_page(hub_id, chunk.to_vec());
        }
        source
    }

    /// Make every page request for this hub fail.
    pub fn failing_for(self, hub_id: &str) -> Self {
        self.failing_hubs.lock().unwrap().insert(hub_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<PageCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, hub_id: &str) -> Vec<PageCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.hub_id == hub_id)
            .collect()
    }
}

#[async_trait]
impl BaseMatchSource for MockMatchSource {
    async fn fetch_page(&self, hub_id: &str, offset: u32, limit: u32) -> Result<MatchPage> {
        self.calls.lock().unwrap().push(PageCall {
            hub_id: hub_id.to_string(),
            offset,
            limit,
        });

        if self.failing_hubs.lock().unwrap().contains(hub_id) {
            anyhow::bail!("FACEIT API error (503): mock outage for hub {}", hub_id);
        }

        let index = (offset / limit.max(1)) as usize;
        let items = self
            .pages
            .lock()
            .unwrap()
            .get(hub_id)
            .and_then(|pages| pages.get(index))
            .cloned()
            .unwrap_or_default();

        Ok(MatchPage {
            items,
            rate_limit_remaining: Some("1000".to_string()),
        })
    }
}

// =============================================================================
// Mock Demo Downloader
// =============================================================================

#[derive(Default)]
pub struct MockDemoDownloader {
    demos: Mutex<HashMap<String, Vec<u8>>>,
    failing_urls: Mutex<HashSet<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockDemoDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `demo` (already decompressed) for `url`.
    pub fn with_demo(self, url: &str, demo: Vec<u8>) -> Self {
        self.demos.lock().unwrap().insert(url.to_string(), demo);
        self
    }

    pub fn failing_for(self, url: &str) -> Self {
        self.failing_urls.lock().unwrap().insert(url.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseDemoDownloader for MockDemoDownloader {
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(url.to_string());

        if self.failing_urls.lock().unwrap().contains(url) {
            anyhow::bail!("Demo download error 404 Not Found: {}", url);
        }

        Ok(self
            .demos
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| vec![0xAB; DEFAULT_MOCK_DEMO_LEN]))
    }
}

// =============================================================================
// Mock Demo Uploader
// =============================================================================

#[derive(Default)]
pub struct MockDemoUploader {
    failing_files: Mutex<HashSet<String>>,
    receipt_body: Mutex<Option<String>>,
    uploads: Mutex<Vec<DemoUpload>>,
}

impl MockDemoUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the transport for the upload of this match.
    pub fn failing_for_match(self, match_id: &str) -> Self {
        self.failing_files
            .lock()
            .unwrap()
            .insert(format!("{}.dem", match_id));
        self
    }

    /// Answer every upload with this body instead of a success message.
    pub fn answering(self, body: &str) -> Self {
        *self.receipt_body.lock().unwrap() = Some(body.to_string());
        self
    }

    pub fn uploads(&self) -> Vec<DemoUpload> {
        self.uploads.lock().unwrap().clone()
    }

    /// File names of every upload issued, in order
    pub fn uploaded_files(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.file_name.clone())
            .collect()
    }
}

#[async_trait]
impl BaseDemoUploader for MockDemoUploader {
    async fn upload(&self, upload: DemoUpload) -> Result<UploadReceipt> {
        if self.failing_files.lock().unwrap().contains(&upload.file_name) {
            anyhow::bail!("connection reset while uploading {}", upload.file_name);
        }

        let body = self
            .receipt_body
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| format!("STV available at: https://demos.tf/{}", upload.file_name));
        self.uploads.lock().unwrap().push(upload);

        Ok(UploadReceipt { status: 200, body })
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mocks bundled together, with handles kept for assertions.
pub struct TestDependencies {
    pub match_source: Arc<MockMatchSource>,
    pub downloader: Arc<MockDemoDownloader>,
    pub uploader: Arc<MockDemoUploader>,
}

impl TestDependencies {
    pub fn new(
        match_source: MockMatchSource,
        downloader: MockDemoDownloader,
        uploader: MockDemoUploader,
    ) -> Self {
        Self {
            match_source: Arc::new(match_source),
            downloader: Arc::new(downloader),
            uploader: Arc::new(uploader),
        }
    }

    pub fn with_matches(match_source: MockMatchSource) -> Self {
        Self::new(match_source, MockDemoDownloader::new(), MockDemoUploader::new())
    }

    pub fn deps(&self) -> RelayDeps {
        RelayDeps::new(
            self.match_source.clone(),
            self.downloader.clone(),
            self.uploader.clone(),
        )
    }
}
