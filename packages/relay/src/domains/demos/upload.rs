use anyhow::Result;
use demostf::{DemoUpload, UploadReceipt};
use tracing::info;

use crate::domains::matches::Match;
use crate::kernel::BaseDemoUploader;

/// Name demos.tf lists the demo under. The double slash matches earlier uploads.
pub fn upload_name(match_id: &str) -> String {
    format!("https://faceit.com/en//room/{}.dem", match_id)
}

pub fn build_upload(m: &Match, demo: Vec<u8>) -> DemoUpload {
    DemoUpload {
        name: upload_name(&m.id),
        blu: m.faction1.clone(),
        red: m.faction2.clone(),
        file_name: format!("{}.dem", m.id),
        demo,
    }
}

/// Upload a patched demo. The receipt is logged but not judged: any answer
/// from demos.tf counts as an issued upload.
pub async fn upload_demo(
    m: &Match,
    demo: Vec<u8>,
    uploader: &dyn BaseDemoUploader,
) -> Result<UploadReceipt> {
    info!(match_id = %m.id, bytes = demo.len(), "Uploading to demos.tf");
    let receipt = uploader.upload(build_upload(m, demo)).await?;
    info!(
        match_id = %m.id,
        status = receipt.status,
        body = %receipt.body,
        "Uploaded demo"
    );
    Ok(receipt)
}
