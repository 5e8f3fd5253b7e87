//! Multipart form collection shared by the upload endpoints.

use std::collections::HashMap;

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};
use bytes::Bytes;

use crate::document::{extract_text, PageSeparator, RawDocument};
use crate::errors::AppError;

/// Every part of a multipart upload, split into files and text fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    files: HashMap<String, Bytes>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// Reads every part of `multipart`. Bodies over `upload_limit` bytes are
    /// rejected with `PayloadTooLarge`.
    pub async fn collect(mut multipart: Multipart, upload_limit: usize) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, upload_limit, "Malformed multipart body"))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let context = format!("Could not read '{name}'");

            if field.file_name().is_some() {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, upload_limit, &context))?;
                form.files.insert(name, data);
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, upload_limit, &context))?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// The uploaded file named `name`; absent or zero-length uploads are rejected.
    pub fn require_file(&self, name: &str) -> Result<RawDocument, AppError> {
        self.files
            .get(name)
            .filter(|bytes| !bytes.is_empty())
            .map(|bytes| RawDocument::new(bytes.clone()))
            .ok_or_else(|| AppError::Validation(format!("A PDF file in field '{name}' is required")))
    }

    /// The text field named `name`, which must contain more than whitespace.
    pub fn require_text(&self, name: &str) -> Result<String, AppError> {
        self.fields
            .get(name)
            .filter(|value| !value.trim().is_empty())
            .cloned()
            .ok_or_else(|| AppError::Validation(format!("'{name}' cannot be empty")))
    }
}

fn multipart_error(err: MultipartError, upload_limit: usize, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Upload exceeds the {upload_limit} byte limit"))
    } else {
        AppError::Validation(format!("{context}: {}", err.body_text()))
    }
}

/// Runs PDF extraction off the async runtime.
pub async fn extract_upload(doc: RawDocument, separator: PageSeparator) -> Result<String, AppError> {
    let extracted = tokio::task::spawn_blocking(move || extract_text(&doc, separator))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    tracing::debug!(
        pages = extracted.page_count,
        chars = extracted.text.len(),
        "extracted uploaded document"
    );
    Ok(extracted.into_string())
}
