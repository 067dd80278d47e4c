//! Résumé parsers: strategies that turn an uploaded file into a `PartialResume`.
//!
//! `CommandParser` hands the file to an external program and reads JSON from
//! its stdout. `LlmResumeParser` extracts the text locally and asks the model
//! for the same JSON shape. Any error here makes the analyzer fall back.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::prompts::{RESUME_PARSE_PROMPT, RESUME_PARSE_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::PartialResume;

/// Upper bound on résumé text forwarded to the model.
const MAX_PROMPT_CHARS: usize = 12_000;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parser timed out after {0:?}")]
    Timeout(Duration),

    #[error("Parser exited with code {code:?}: {stderr}")]
    Process { code: Option<i32>, stderr: String },

    #[error("Parser produced no output")]
    EmptyOutput,

    #[error("Malformed parser output: {0}")]
    Malformed(String),

    #[error("Parser reported an error: {0}")]
    Application(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("No text could be extracted from the file")]
    EmptyText,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// An uploaded résumé file.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Lower-cased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }

    /// Document kind from the extension, falling back to the PDF magic bytes.
    pub fn kind(&self) -> Result<DocumentKind, ParseError> {
        match self.extension().as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("txt") | Some("md") | Some("text") => Ok(DocumentKind::PlainText),
            _ if self.bytes.starts_with(b"%PDF") => Ok(DocumentKind::Pdf),
            Some(other) => Err(ParseError::UnsupportedFormat(other.to_string())),
            None => Err(ParseError::UnsupportedFormat("unknown".to_string())),
        }
    }
}

/// A résumé parsing strategy. Carried by the analyzer as `Arc<dyn ResumeParser>`.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    fn name(&self) -> &'static str;

    async fn parse(&self, upload: &ResumeUpload) -> Result<PartialResume, ParseError>;
}

// ────────────────────────────────────────────────────────────────────────────
// CommandParser: external program
// ────────────────────────────────────────────────────────────────────────────

/// Runs `program [args..] <temp file path>` and reads one JSON object from stdout.
/// The program signals an application-level failure with `{"error": "..."}`.
pub struct CommandParser {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandParser {
    /// `command` is the program followed by its leading arguments.
    pub fn new(command: &[String], timeout: Duration) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
            timeout,
        })
    }
}

#[async_trait]
impl ResumeParser for CommandParser {
    fn name(&self) -> &'static str {
        "command"
    }

    async fn parse(&self, upload: &ResumeUpload) -> Result<PartialResume, ParseError> {
        let suffix = format!(".{}", upload.extension().unwrap_or_else(|| "pdf".to_string()));
        // Removed when `file` is dropped at the end of this call.
        let file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(&suffix)
            .tempfile()?;
        tokio::fs::write(file.path(), &upload.bytes).await?;
        debug!("Résumé written to {}", file.path().display());

        let mut command = tokio::process::Command::new(&self.program);
        command.args(&self.args).arg(file.path()).kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| ParseError::Timeout(self.timeout))??;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(ParseError::Process {
                code: output.status.code(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            warn!("Résumé parser stderr: {stderr}");
        }

        parse_parser_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extracts the JSON object from parser stdout, tolerating log lines around it.
pub fn parse_parser_output(stdout: &str) -> Result<PartialResume, ParseError> {
    if stdout.trim().is_empty() {
        return Err(ParseError::EmptyOutput);
    }

    let (start, end) = match (stdout.find('{'), stdout.rfind('}')) {
        (Some(start), Some(end)) if end > start => (start, end),
        _ => return Err(ParseError::Malformed("no JSON object in output".to_string())),
    };

    let value: Value = serde_json::from_str(&stdout[start..=end])
        .map_err(|e| ParseError::Malformed(e.to_string()))?;

    match value.get("error") {
        None | Some(Value::Null) => {}
        Some(Value::String(message)) => return Err(ParseError::Application(message.clone())),
        Some(other) => return Err(ParseError::Application(other.to_string())),
    }

    serde_json::from_value(value).map_err(|e| ParseError::Malformed(e.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// LlmResumeParser: local text extraction + model structuring
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmResumeParser {
    llm: LlmClient,
}

impl LlmResumeParser {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeParser for LlmResumeParser {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn parse(&self, upload: &ResumeUpload) -> Result<PartialResume, ParseError> {
        let text = extract_text(upload).await?;
        let excerpt: String = text.chars().take(MAX_PROMPT_CHARS).collect();
        let prompt = RESUME_PARSE_PROMPT.replace("{resume_text}", &excerpt);

        Ok(self
            .llm
            .call_json::<PartialResume>(&prompt, RESUME_PARSE_SYSTEM)
            .await?)
    }
}

/// Plain text of the upload. PDF extraction runs on the blocking pool.
pub async fn extract_text(upload: &ResumeUpload) -> Result<String, ParseError> {
    let text = match upload.kind()? {
        DocumentKind::PlainText => String::from_utf8_lossy(&upload.bytes).into_owned(),
        DocumentKind::Pdf => {
            let bytes = upload.bytes.clone();
            tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
            })
            .await
            .map_err(|e| ParseError::Extraction(e.to_string()))?
            .map_err(ParseError::Extraction)?
        }
    };

    if text.trim().is_empty() {
        return Err(ParseError::EmptyText);
    }
    Ok(text)
}
