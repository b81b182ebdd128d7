//! Content generation wire model and call.
//!
//! Typed request/response structures for the `generateContent` endpoint.
//! The call is one-shot: the full transcript comes back in a single
//! response, no streaming.

use crate::client::GeminiClient;
use crate::error::{Result, TranscribeError};
use crate::files::UploadedFile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single part of a content block: inline text or an uploaded-file
/// reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Part {
    /// Inline text.
    Text {
        /// The text payload.
        text: String,
    },
    /// Reference to a previously uploaded file.
    FileData {
        /// The file reference.
        #[serde(rename = "fileData")]
        file_data: FileData,
    },
}

impl Part {
    /// Create a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a file-reference part from an uploaded file handle.
    #[must_use]
    pub fn file(file: &UploadedFile) -> Self {
        Self::FileData {
            file_data: FileData {
                file_uri: file.uri.clone(),
                mime_type: file.mime_type.clone(),
            },
        }
    }
}

/// Uploaded-file reference inside a [`Part`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    /// Canonical URI of the uploaded file.
    pub file_uri: String,
    /// MIME type of the uploaded file.
    pub mime_type: String,
}

/// An ordered list of parts forming one content block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    /// The parts, in order.
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a content block from parts.
    #[must_use]
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }
}

/// Request body for a `generateContent` call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerateContentRequest {
    /// The content blocks to send.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Create a request from a single content block.
    #[must_use]
    pub fn new(content: Content) -> Self {
        Self {
            contents: vec![content],
        }
    }
}

/// One generation candidate in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The generated content, absent when generation was blocked.
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content of a response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// The generated parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Response body of a `generateContent` call.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// The generation candidates; the first one carries the transcript.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Extract the response text: the concatenated text parts of the first
    /// candidate. Returns `None` when no candidate carries text.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;

        let mut out = String::new();
        let mut found = false;
        for part in &content.parts {
            if let Part::Text { text } = part {
                out.push_str(text);
                found = true;
            }
        }

        found.then_some(out)
    }
}

impl GeminiClient {
    /// Issue a single synchronous `generateContent` request to the named
    /// model.
    ///
    /// # Errors
    ///
    /// Transport failures and non-success HTTP statuses; the call is made
    /// exactly once, with no retry.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let api_key = self.api_key()?;

        let url = format!("{}/v1beta/{model}:generateContent", self.base_url());

        debug!(model, "requesting content generation");

        let response = self
            .http_client()
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscribeError::from_status(status, body));
        }

        Ok(response.json().await?)
    }
}
