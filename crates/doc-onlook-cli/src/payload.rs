//! Turning local files into send payloads.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use doc_onlook_core::FileDescriptor;

use crate::error::CliError;

/// File name announced when none is given.
fn default_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// File type announced when none is given: the lowercase extension, or empty.
pub fn infer_type(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Read `path` and base64-encode it into a [`FileDescriptor`].
pub async fn load_file(
    path: &Path,
    name: Option<String>,
    file_type: Option<String>,
) -> Result<FileDescriptor, CliError> {
    if path.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "{} is a directory",
            path.display()
        )));
    }

    let bytes = tokio::fs::read(path).await?;

    Ok(FileDescriptor::new(
        name.unwrap_or_else(|| default_name(path)),
        file_type.unwrap_or_else(|| infer_type(path)),
        STANDARD.encode(bytes),
    ))
}
