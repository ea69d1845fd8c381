pub mod docx_extractor;
pub mod format;
pub mod pdf_extractor;
pub mod text_extractor;

use bytes::Bytes;

use crate::error::ExtractError;

pub use format::{file_extension, FileFormat};

/// Trimmed text of a successful extraction together with its word count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
    pub word_count: usize,
}

impl ExtractionResult {
    /// Trims `raw` and counts its words. Returns `None` when nothing but
    /// whitespace is left.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            text: text.to_string(),
            word_count: count_words(text),
        })
    }
}

/// Number of whitespace-delimited tokens; runs of whitespace count once.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Runs the extractor for `format` over `content` on the blocking pool, so a
/// slow parse never holds up other requests on the same worker.
///
/// A panic inside one of the parsing libraries is reported as
/// [`ExtractError::Unknown`].
pub async fn extract_text(format: FileFormat, content: Bytes) -> Result<String, ExtractError> {
    run_blocking(move || match format {
        FileFormat::Pdf => pdf_extractor::extract_text(&content),
        FileFormat::Docx => docx_extractor::extract_text(&content),
        FileFormat::Text => text_extractor::extract_text(&content),
    })
    .await
}

async fn run_blocking<F>(job: F) -> Result<String, ExtractError>
where
    F: FnOnce() -> Result<String, ExtractError> + Send + 'static,
{
    tokio::task::spawn_blocking(job).await.map_err(|e| {
        if e.is_panic() {
            ExtractError::Unknown(format!("Parser panicked: {}", e))
        } else {
            ExtractError::Unknown(format!("Extraction task failed: {}", e))
        }
    })?
}
