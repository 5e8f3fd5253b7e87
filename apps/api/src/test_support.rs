//! Shared test doubles and fixtures.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{Config, GenerationConfig, DEFAULT_COHERE_BASE_URL};
use crate::document::PageSeparator;
use crate::generation::{GenerationRequest, GenerationResult};
use crate::llm_client::{GenerationError, TextGenerator};
use crate::state::AppState;

enum Reply {
    Text(String),
    Fail { status: u16, message: String },
}

/// `TextGenerator` that records every request and answers with a fixed reply.
pub struct ScriptedGenerator {
    reply: Reply,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Reply::Fail {
                status,
                message: message.to_string(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(GenerationResult { text: text.clone() }),
            Reply::Fail { status, message } => Err(GenerationError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        generation: GenerationConfig {
            api_key: None,
            base_url: DEFAULT_COHERE_BASE_URL.to_string(),
            model: None,
            timeout: None,
        },
        page_separator: PageSeparator::None,
        max_upload_bytes: 1024 * 1024,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(generator: Arc<ScriptedGenerator>) -> AppState {
    AppState {
        generator,
        config: test_config(),
    }
}

/// Builds a minimal valid PDF with one Helvetica text line per page.
/// An empty string produces a page with an empty content stream.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    // 1 = catalog, 2 = page tree, 3 = font, then (page, contents) pairs.
    let mut objects: Vec<String> = Vec::new();
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 4 + i * 2).collect();
    let kids = page_ids
        .iter()
        .map(|id| format!("{id} 0 R"))
        .collect::<Vec<_>>()
        .join(" ");

    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{kids}] /Count {} /MediaBox [0 0 612 792] >>",
        pages.len()
    ));
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );

    for (i, text) in pages.iter().enumerate() {
        let content_id = page_ids[i] + 1;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {content_id} 0 R >>"
        ));
        let stream = if text.is_empty() {
            String::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", escape_pdf_string(text))
        };
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    out
}

fn escape_pdf_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

pub const MULTIPART_BOUNDARY: &str = "saathi-test-boundary";

/// One part of a hand-built `multipart/form-data` body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a [u8]),
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{name}.pdf\"\r\n\
                         Content-Type: application/pdf\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")
}
