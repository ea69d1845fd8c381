use encoding_rs::WINDOWS_1252;
use tracing::debug;

use crate::error::ExtractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252,
}

/// Encodings tried for plain text uploads, in priority order.
pub const DECODE_ORDER: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
];

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "windows-1252",
        }
    }

    /// Strict decode: `None` if `bytes` is not valid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),
            TextEncoding::Windows1252 => WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }
}

/// Decodes `bytes` with the first encoding in [`DECODE_ORDER`] that accepts them.
pub fn decode(bytes: &[u8]) -> Result<(String, TextEncoding), ExtractError> {
    for encoding in DECODE_ORDER {
        if let Some(text) = encoding.decode(bytes) {
            debug!(encoding = encoding.name(), "Decoded plain text");
            return Ok((text, encoding));
        }
        debug!(encoding = encoding.name(), "Plain text is not valid in encoding");
    }

    Err(ExtractError::Encoding {
        tried: DECODE_ORDER
            .iter()
            .map(TextEncoding::name)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

pub fn extract_text(content: &[u8]) -> Result<String, ExtractError> {
    decode(content).map(|(text, _)| text)
}
