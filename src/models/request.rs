use bytes::Bytes;

use crate::services::format::{file_extension, FileFormat};

/// A single uploaded file, owned by the request that received it.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub extension: String,
    pub size: usize,
    pub content: Bytes,
}

impl UploadedFile {
    pub fn new(name: Option<String>, content: Bytes) -> Self {
        let extension = file_extension(name.as_deref());
        Self {
            name: name.unwrap_or_default(),
            extension,
            size: content.len(),
            content,
        }
    }

    pub fn format(&self) -> Option<FileFormat> {
        FileFormat::from_extension(&self.extension)
    }
}
