//! Text extraction from uploaded resume documents.
//!
//! PDF goes through `pdf-extract`; plain-text formats are read directly.
//! Empty output is not an error here — the structuring layer falls back to a
//! minimal record when there is nothing to work with.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file format '.{0}' — upload a .pdf, .txt, or .md resume")]
    UnsupportedFormat(String),

    #[error("failed to extract PDF text: {0}")]
    Pdf(String),
}

/// Extracts raw text from uploaded bytes based on the file extension
/// (lowercased, without the leading dot).
pub fn extract_text(bytes: &[u8], extension: &str) -> Result<String, ExtractError> {
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string())),
        "txt" | "md" | "text" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}
