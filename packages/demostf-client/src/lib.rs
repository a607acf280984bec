// demos.tf upload client

pub mod models;

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;

pub use crate::models::{DemoUpload, UploadReceipt};

const DEFAULT_BASE_URL: &str = "https://api.demos.tf";

#[derive(Debug, Error)]
pub enum DemosTfError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("demos.tf transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, DemosTfError>;

#[derive(Debug, Clone)]
pub struct DemosTfOptions {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl DemosTfOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemosTfService {
    options: DemosTfOptions,
    client: Client,
}

impl DemosTfService {
    pub fn new(options: DemosTfOptions) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { options, client })
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.options.base_url.trim_end_matches('/'))
    }

    /// Post a demo as a multipart form.
    ///
    /// Any response that arrives is returned as a receipt, whatever its
    /// status; only transport failures are errors.
    pub async fn upload(&self, upload: DemoUpload) -> Result<UploadReceipt> {
        let size = upload.demo.len();
        let demo_part = Part::bytes(upload.demo)
            .file_name(upload.file_name)
            .mime_str("application/octet-stream")?;

        let form = Form::new()
            .text("key", self.options.api_key.clone())
            .text("name", upload.name)
            .text("blu", upload.blu)
            .text("red", upload.red)
            .part("demo", demo_part);

        tracing::debug!(url = %self.upload_url(), bytes = size, "Posting demo to demos.tf");

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(UploadReceipt { status, body })
    }
}
