use lopdf::Document;
use tracing::debug;

use crate::error::ExtractError;

/// Extracts the text layer of a PDF, one line group per page separated by `\n`.
///
/// Pages without text are skipped.
pub fn extract_text(content: &[u8]) -> Result<String, ExtractError> {
    let document = Document::load_mem(content)
        .map_err(|e| ExtractError::Parse(format!("Invalid PDF document: {}", e)))?;

    // get_pages is keyed by page number, so iteration is already in page order
    let pages = document.get_pages();
    debug!(pages = pages.len(), "PDF document opened");

    let mut texts = Vec::with_capacity(pages.len());
    for &page_number in pages.keys() {
        let raw = document.extract_text(&[page_number]).map_err(|e| {
            ExtractError::Parse(format!(
                "Failed to read text of page {}: {}",
                page_number, e
            ))
        })?;

        // lopdf terminates every text object with a newline
        let text = raw.trim_end_matches(['\r', '\n']);
        if text.trim().is_empty() {
            debug!(page = page_number, "Page has no text layer");
            continue;
        }
        texts.push(text.to_string());
    }

    Ok(texts.join("\n"))
}
