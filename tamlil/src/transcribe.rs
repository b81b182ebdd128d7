//! Verbatim transcription pipeline.
//!
//! A [`TranscriptionModel`] binds a [`GeminiClient`] to a model id and an
//! instructional prompt. Transcription is strictly sequential: upload the
//! audio, issue one generation request referencing the uploaded handle,
//! return the text.

use crate::client::GeminiClient;
use crate::error::{Result, TranscribeError};
use crate::files::UploadedFile;
use crate::generate::{Content, GenerateContentRequest, Part};
use async_trait::async_trait;
use std::path::Path;
use tracing::info;

/// Default model served by the transcription endpoint.
pub const DEFAULT_MODEL: &str = "models/gemini-3-flash-preview";

/// The fixed instructional prompt: verbatim transcription, Hebrew, no
/// preamble or postamble.
pub const TRANSCRIPTION_INSTRUCTION: &str = "Transcribe this audio file exactly as spoken.
Use a clean verbatim transcription in Hebrew.
Produce the transcription text only, do not add any other preamble or postamble text to the transcription.";

/// Optional instruction to skip sung content and transcribe speech only.
pub const SKIP_MUSIC_INSTRUCTION: &str =
    "Skip any music or song segments and transcribe only spoken speaker content.";

/// Builds the instruction text sent ahead of the audio reference.
///
/// The base instruction is fixed; skipping sung content is a configurable
/// addition rather than hardcoded behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriptionPrompt {
    skip_music: bool,
}

impl TranscriptionPrompt {
    /// Create the default prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Instruct the model to skip musical or song segments.
    #[must_use]
    pub const fn skip_music(mut self, skip: bool) -> Self {
        self.skip_music = skip;
        self
    }

    /// Render the full instruction text.
    #[must_use]
    pub fn text(&self) -> String {
        if self.skip_music {
            format!("{TRANSCRIPTION_INSTRUCTION}\n{SKIP_MUSIC_INSTRUCTION}")
        } else {
            TRANSCRIPTION_INSTRUCTION.to_string()
        }
    }
}

/// A completed transcription.
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// The transcribed text, newline-separated.
    pub text: String,
    /// The model that served the request.
    pub model: String,
}

impl TranscriptionResult {
    /// Iterate over transcript lines in original (logical) order.
    ///
    /// Splits on `\n` without trimming or filtering, so text ending in a
    /// newline yields a trailing empty line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Trait for audio transcription providers.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Check if the provider is configured and ready.
    fn is_available(&self) -> bool;

    /// Transcribe an audio file.
    ///
    /// # Errors
    ///
    /// Propagates upload and generation failures unchanged; no retry or
    /// recovery is attempted.
    async fn transcribe(&self, path: &Path) -> Result<TranscriptionResult>;
}

/// A Gemini model bound to the transcription workflow.
#[derive(Debug, Clone)]
pub struct TranscriptionModel {
    client: GeminiClient,
    model: String,
    prompt: TranscriptionPrompt,
}

impl TranscriptionModel {
    /// Create a model bound to the given client and model id.
    #[must_use]
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            prompt: TranscriptionPrompt::default(),
        }
    }

    /// Replace the instruction prompt.
    #[must_use]
    pub const fn with_prompt(mut self, prompt: TranscriptionPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    /// The model id this transcriber sends requests to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the generation request for an uploaded file: the instruction
    /// text first, the file reference last.
    #[must_use]
    pub fn build_request(instruction: &str, file: &UploadedFile) -> GenerateContentRequest {
        GenerateContentRequest::new(Content::new(vec![
            Part::text(instruction),
            Part::file(file),
        ]))
    }
}

#[async_trait]
impl Transcriber for TranscriptionModel {
    fn name(&self) -> &str {
        "gemini"
    }

    fn is_available(&self) -> bool {
        self.client.is_available()
    }

    async fn transcribe(&self, path: &Path) -> Result<TranscriptionResult> {
        let uploaded = self.client.upload_file(path).await?;

        let request = Self::build_request(&self.prompt.text(), &uploaded);
        let response = self.client.generate_content(&self.model, &request).await?;

        let text = response.text().ok_or(TranscribeError::EmptyResponse)?;

        info!(
            model = %self.model,
            text_len = text.len(),
            "transcription complete"
        );

        Ok(TranscriptionResult {
            text,
            model: self.model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded(uri: &str) -> UploadedFile {
        UploadedFile {
            name: "files/abc".to_string(),
            uri: uri.to_string(),
            mime_type: "audio/mpeg".to_string(),
        }
    }

    #[test]
    fn test_default_instruction_is_verbatim() {
        assert_eq!(
            TranscriptionPrompt::new().text(),
            "Transcribe this audio file exactly as spoken.\n\
             Use a clean verbatim transcription in Hebrew.\n\
             Produce the transcription text only, do not add any other preamble or postamble text to the transcription."
        );
    }

    #[test]
    fn test_skip_music_appends_clause() {
        let text = TranscriptionPrompt::new().skip_music(true).text();
        assert!(text.starts_with(TRANSCRIPTION_INSTRUCTION));
        assert!(text.ends_with(SKIP_MUSIC_INSTRUCTION));
        assert_eq!(text.matches('\n').count(), 3);
    }

    #[test]
    fn test_request_part_order() {
        let file = uploaded("A");
        let request = TranscriptionModel::build_request(TRANSCRIPTION_INSTRUCTION, &file);

        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts.first(),
            Some(&Part::text(TRANSCRIPTION_INSTRUCTION)),
            "instruction text must come first"
        );
        match parts.last() {
            Some(Part::FileData { file_data }) => assert_eq!(file_data.file_uri, "A"),
            other => panic!("last part must reference the upload, got {other:?}"),
        }
    }

    #[test]
    fn test_lines_preserved_in_order() {
        let result = TranscriptionResult {
            text: "שלום\nעולם".to_string(),
            model: DEFAULT_MODEL.to_string(),
        };
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines, ["שלום", "עולם"]);
    }

    #[test]
    fn test_trailing_newline_yields_empty_line() {
        let result = TranscriptionResult {
            text: "שלום\n".to_string(),
            model: DEFAULT_MODEL.to_string(),
        };
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines, ["שלום", ""]);
    }

    #[test]
    fn test_model_creation() {
        let model = GeminiClient::new("test-key").transcription_model(DEFAULT_MODEL);
        assert_eq!(model.name(), "gemini");
        assert_eq!(model.model(), DEFAULT_MODEL);
        assert!(model.is_available());
    }

    #[test]
    fn test_unconfigured_client_is_unavailable() {
        let model = GeminiClient::builder().build().transcription_model(DEFAULT_MODEL);
        assert!(!model.is_available());
    }
}
