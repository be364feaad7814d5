//! In-memory files attached to multipart requests, and transfer progress.

use tokio::sync::watch;

/// A file picked by the user and ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// MIME type; `None` lets the sender guess from the file name.
    pub mime_type: Option<String>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Publishes the completed fraction (0.0..=1.0) of a long-running transfer.
#[derive(Debug)]
pub struct TransferProgress {
    sender: watch::Sender<f64>,
}

impl TransferProgress {
    /// Creates a reporter and the receiver observers subscribe to.
    pub fn channel() -> (Self, watch::Receiver<f64>) {
        let (sender, receiver) = watch::channel(0.0);
        (Self { sender }, receiver)
    }

    /// Reports `done` of `total` bytes. Unknown totals report nothing until `finish`.
    pub fn report(&self, done: u64, total: Option<u64>) {
        if let Some(total) = total.filter(|t| *t > 0) {
            let fraction = (done as f64 / total as f64).clamp(0.0, 1.0);
            self.sender.send_replace(fraction);
        }
    }

    pub fn finish(&self) {
        self.sender.send_replace(1.0);
    }

    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.sender.subscribe()
    }
}
