//! Document ingestion — turns an uploaded PDF into plain text.
//!
//! Page-local text extraction is delegated to `pdf-extract`; this module only
//! walks pages in stored order and joins their text.
//!
//! Known limitation: with the default `PageSeparator::None`, the last word of
//! one page and the first word of the next can run together.

use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("uploaded document is empty")]
    Empty,

    #[error("could not read PDF: {0}")]
    Invalid(String),

    #[error("PDF parser aborted while reading the document")]
    ParserPanicked,
}

/// What goes between the text of consecutive pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSeparator {
    /// Pages are concatenated directly.
    #[default]
    None,
    Newline,
}

impl PageSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            PageSeparator::None => "",
            PageSeparator::Newline => "\n",
        }
    }
}

/// Uploaded binary payload, owned by the request that received it.
#[derive(Debug, Clone)]
pub struct RawDocument {
    bytes: Bytes,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Text of every page, in page order, joined into one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

impl ExtractedText {
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Extracts the text of `doc`, page by page, joined with `separator`.
///
/// A document with no extractable text (blank or image-only pages) yields an
/// empty string, not an error. Malformed or undecryptable documents fail.
pub fn extract_text(
    doc: &RawDocument,
    separator: PageSeparator,
) -> Result<ExtractedText, DocumentParseError> {
    if doc.is_empty() {
        return Err(DocumentParseError::Empty);
    }

    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(doc.as_bytes())
    }))
    .map_err(|_| DocumentParseError::ParserPanicked)?
    .map_err(|e| DocumentParseError::Invalid(e.to_string()))?;

    Ok(ExtractedText {
        page_count: pages.len(),
        text: pages.join(separator.as_str()),
    })
}
