/// Everything demos.tf needs to list an uploaded demo.
#[derive(Debug, Clone)]
pub struct DemoUpload {
    /// Display name; demos.tf shows this as the demo title.
    pub name: String,
    pub blu: String,
    pub red: String,
    /// File name sent with the `demo` part.
    pub file_name: String,
    pub demo: Vec<u8>,
}

/// Raw outcome of an upload. demos.tf answers with plain text, including
/// for rejected demos, so nothing here is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub status: u16,
    pub body: String,
}

impl UploadReceipt {
    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
