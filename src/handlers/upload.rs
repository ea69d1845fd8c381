use axum::{extract::Multipart, response::Json};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::config::MAX_FILE_SIZE_BYTES;
use crate::error::{AppError, AppResult};
use crate::models::{UploadResponse, UploadedFile};
use crate::services::{self, file_extension, ExtractionResult, FileFormat};

const FILE_FIELD: &str = "file";

/// `POST /upload`: extract the text of a single PDF, DOCX or TXT upload.
pub async fn upload_handler(mut multipart: Multipart) -> AppResult<Json<UploadResponse>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string()[..8].to_string();

    info!(request_id = %request_id, "Starting upload extraction request");

    let (format, file) = read_upload(&mut multipart, &request_id).await?;

    info!(
        request_id = %request_id,
        file_name = %file.name,
        file_size = file.size,
        format = %format,
        "File received"
    );

    validate_size(file.size).map_err(|e| {
        warn!(
            request_id = %request_id,
            file_size = file.size,
            max_size = MAX_FILE_SIZE_BYTES,
            "File size out of bounds"
        );
        e
    })?;

    let extract_start = Instant::now();
    let raw_text = services::extract_text(format, file.content.clone())
        .await
        .map_err(|e| {
            error!(
                request_id = %request_id,
                format = %format,
                error = %e,
                "Text extraction failed"
            );
            AppError::from(e)
        })?;

    debug!(
        request_id = %request_id,
        raw_length = raw_text.len(),
        extraction_time_ms = extract_start.elapsed().as_millis() as u64,
        "Extractor finished"
    );

    let result = ExtractionResult::from_raw(&raw_text).ok_or_else(|| {
        warn!(request_id = %request_id, file_name = %file.name, "No text found in file");
        AppError::NoTextFound
    })?;

    let total_time = start.elapsed().as_millis() as u64;

    info!(
        request_id = %request_id,
        text_length = result.text.len(),
        word_count = result.word_count,
        total_time_ms = total_time,
        "Request completed successfully"
    );

    Ok(Json(UploadResponse::new(file.name, result.text, result.word_count)))
}

/// Reads the `file` field. The extension is checked before the payload is
/// read so unsupported uploads are rejected without buffering them.
async fn read_upload(
    multipart: &mut Multipart,
    request_id: &str,
) -> AppResult<(FileFormat, UploadedFile)> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            debug!(request_id = %request_id, field_name = ?field.name(), "Skipping multipart field");
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let extension = file_extension(file_name.as_deref());
        let Some(format) = FileFormat::from_extension(&extension) else {
            warn!(
                request_id = %request_id,
                file_name = ?file_name,
                extension = %extension,
                "Unsupported file format"
            );
            return Err(AppError::unsupported_format(extension));
        };

        let content = field.bytes().await.map_err(|e| {
            error!(request_id = %request_id, error = %e, "Failed to read file data");
            AppError::from(e)
        })?;

        return Ok((format, UploadedFile::new(file_name, content)));
    }

    warn!(request_id = %request_id, "No file field in multipart body");
    Err(AppError::MissingFile)
}

/// Payload must be non-empty and at most [`MAX_FILE_SIZE_BYTES`].
pub fn validate_size(size: usize) -> AppResult<()> {
    if size == 0 {
        return Err(AppError::EmptyFile);
    }
    if size > MAX_FILE_SIZE_BYTES {
        return Err(AppError::FileTooLarge {
            limit_mb: MAX_FILE_SIZE_BYTES / (1024 * 1024),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_size_bounds() {
        assert!(matches!(validate_size(0), Err(AppError::EmptyFile)));
        assert!(validate_size(1).is_ok());
        assert!(validate_size(MAX_FILE_SIZE_BYTES).is_ok());
        assert!(matches!(
            validate_size(MAX_FILE_SIZE_BYTES + 1),
            Err(AppError::FileTooLarge { limit_mb: 10 })
        ));
    }
}
