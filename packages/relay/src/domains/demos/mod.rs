pub mod patch;
pub mod upload;

pub use patch::{branding_text, patch_demo, patch_header, PatchError, HEADER_LEN, HEADER_OFFSET};
pub use upload::{build_upload, upload_demo, upload_name};
