//! Loading picked files from disk into upload parts.

use collart_core::error::{CollartError, Result};
use collart_core::upload::UploadFile;
use std::path::Path;

/// Reads `path` and guesses its MIME type from the extension.
pub async fn load_upload_file(path: &Path) -> Result<UploadFile> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CollartError::io(format!("Not a file: {}", path.display())))?;

    let bytes = tokio::fs::read(path).await?;
    let mime_type = Some(guess_mime_type(&file_name));

    Ok(UploadFile {
        file_name,
        bytes,
        mime_type,
    })
}

/// MIME type for a file name, `application/octet-stream` when unknown.
pub fn guess_mime_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
