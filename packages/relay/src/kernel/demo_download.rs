use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use flate2::write::GzDecoder;
use futures::StreamExt;

use super::BaseDemoDownloader;

/// Streams gzip-compressed demos over HTTP and inflates them in memory.
pub struct HttpDemoDownloader {
    client: reqwest::Client,
}

impl HttpDemoDownloader {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create demo download client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BaseDemoDownloader for HttpDemoDownloader {
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request demo {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Demo download error {}: {}", status, body);
        }

        let mut compressed_bytes = 0usize;
        let mut decoder = GzDecoder::new(Vec::new());
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("Failed while streaming demo body")?;
            compressed_bytes += chunk.len();
            decoder
                .write_all(&chunk)
                .context("Demo body is not valid gzip")?;
        }
        let demo = decoder.finish().context("Demo gzip stream is truncated")?;

        tracing::debug!(url, compressed_bytes, bytes = demo.len(), "Demo downloaded");
        Ok(demo)
    }
}
