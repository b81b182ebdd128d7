//! Files API upload.
//!
//! Audio is shipped to the service once and referenced by an opaque handle
//! in the subsequent generation request, instead of re-sending raw bytes.

use crate::client::GeminiClient;
use crate::error::{Result, TranscribeError};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Supported audio containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// MP3 audio.
    Mp3,
    /// WAV audio.
    Wav,
    /// AIFF audio.
    Aiff,
    /// AAC audio.
    Aac,
    /// OGG audio.
    Ogg,
    /// FLAC audio.
    Flac,
}

impl AudioFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mp3" | "mpeg" | "mpga" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            "aiff" | "aif" => Some(Self::Aiff),
            "aac" | "m4a" => Some(Self::Aac),
            "ogg" | "oga" | "opus" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }

    /// Get the MIME type for this format.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Aiff => "audio/aiff",
            Self::Aac => "audio/aac",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
        }
    }
}

/// Opaque server-side handle to an uploaded file.
///
/// Created by [`GeminiClient::upload_file`], consumed by a generation
/// request. The service expires uploads on its own schedule; no explicit
/// release call exists.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Resource name, e.g. `files/abc-123`.
    pub name: String,
    /// Canonical URI used to reference the file in generation requests.
    pub uri: String,
    /// MIME type recorded by the service.
    pub mime_type: String,
}

/// Envelope returned by the Files API upload endpoint.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    file: UploadedFile,
}

impl GeminiClient {
    /// Upload a local audio file, obtaining an [`UploadedFile`] handle.
    ///
    /// The file must exist and carry a recognized audio extension; format
    /// and content validation beyond that is left to the service.
    ///
    /// # Errors
    ///
    /// [`TranscribeError::FileNotFound`] if the path does not exist,
    /// [`TranscribeError::UnsupportedFormat`] for unrecognized extensions,
    /// and the usual transport/API errors for a rejected upload. The upload
    /// is attempted exactly once.
    pub async fn upload_file(&self, path: &Path) -> Result<UploadedFile> {
        let api_key = self.api_key()?;

        if !path.exists() {
            return Err(TranscribeError::FileNotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let format = AudioFormat::from_extension(extension)
            .ok_or_else(|| TranscribeError::UnsupportedFormat(extension.to_string()))?;

        let data = tokio::fs::read(path).await?;

        debug!(
            path = %path.display(),
            format = ?format,
            bytes = data.len(),
            "uploading audio file"
        );

        let url = format!("{}/upload/v1beta/files", self.base_url());

        let response = self
            .http_client()
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("X-Goog-Upload-Protocol", "raw")
            .header(reqwest::header::CONTENT_TYPE, format.mime_type())
            .body(data)
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

        let uploaded: UploadResponse = response.json().await?;

        info!(name = %uploaded.file.name, "upload complete");

        Ok(uploaded.file)
    }
}
