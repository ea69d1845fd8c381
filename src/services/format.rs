use std::fmt;
use std::path::Path;

/// Document formats the service can extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Docx,
    Text,
}

impl FileFormat {
    /// Maps a lowercase extension token (as produced by [`file_extension`]) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".pdf" => Some(FileFormat::Pdf),
            ".docx" => Some(FileFormat::Docx),
            ".txt" => Some(FileFormat::Text),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Pdf => "pdf",
            FileFormat::Docx => "docx",
            FileFormat::Text => "txt",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the lowercase extension of `filename` including the leading dot,
/// or an empty string when there is none.
///
/// `"report.PDF"` gives `".pdf"`; `"archive.tar.gz"` gives `".gz"`;
/// `"README"`, `".bashrc"` and `"name."` give `""`.
pub fn file_extension(filename: Option<&str>) -> String {
    let Some(name) = filename.filter(|name| !name.is_empty()) else {
        return String::new();
    };

    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_lowercase()),
        _ => String::new(),
    }
}
