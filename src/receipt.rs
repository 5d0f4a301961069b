use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{BilledError, Result};
use crate::models::ReceiptFile;

pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Lowercased extension of a file name, if it has one.
pub fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Media type inferred from the file name's extension.
pub fn infer_media_type(file_name: &str) -> String {
    match extension(file_name).as_deref() {
        Some("jpg") => "image/jpg".to_string(),
        Some("jpeg") => "image/jpeg".to_string(),
        Some("png") => "image/png".to_string(),
        Some(other) if !other.is_empty() => format!("image/{other}"),
        _ => "application/octet-stream".to_string(),
    }
}

/// Accept the receipt only when its extension is one of jpg, jpeg or png.
/// Returns the matched extension.
pub fn validate(file: &ReceiptFile) -> Result<String> {
    match extension(&file.name) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(BilledError::InvalidFileType {
            file_name: file.name.clone(),
        }),
    }
}

/// Read a receipt from disk; the media type is inferred from its name.
pub fn from_path(path: &Path) -> Result<ReceiptFile> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let media_type = infer_media_type(&name);
    Ok(ReceiptFile {
        name,
        media_type,
        bytes,
    })
}

/// Key for an uploaded receipt, scoped to its owner and stored name.
/// The same bytes under another name get another key.
pub fn file_key(owner_email: &str, file_name: &str, bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(owner_email.as_bytes());
    hasher.update([0u8]);
    hasher.update(sanitized_file_name(file_name).as_bytes());
    hasher.update([0u8]);
    hasher.update(bytes);
    hex::encode(&hasher.finalize()[..16])
}

/// Keep only characters that are safe in a stored file name.
pub fn sanitized_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "receipt".to_string()
    } else {
        cleaned
    }
}
