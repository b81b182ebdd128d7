//! Tamlil - verbatim Hebrew transcription over the Gemini API.
//!
//! The workflow is a single linear pipeline executed once per invocation:
//!
//! 1. **Configure** - build a [`client::GeminiClient`] bound to the
//!    `GOOGLE_API_KEY` credential
//! 2. **Upload** - ship the local audio file through the Files API,
//!    obtaining an opaque [`files::UploadedFile`] handle
//! 3. **Request** - issue one synchronous `generateContent` call carrying
//!    the fixed instructional prompt plus the file reference
//! 4. **Print** - split the returned text on newline boundaries, in
//!    original logical order
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tamlil::prelude::*;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let model = GeminiClient::from_env().transcription_model(DEFAULT_MODEL);
//!     let result = model.transcribe(Path::new("test.mp3")).await?;
//!     for line in result.lines() {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod display;
pub mod error;
pub mod files;
pub mod generate;
pub mod transcribe;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::client::{API_KEY_ENV, GEMINI_API_BASE_URL, GeminiClient, GeminiClientBuilder};
    pub use crate::display::reorder_rtl;
    pub use crate::error::{Result, TranscribeError};
    pub use crate::files::{AudioFormat, UploadedFile};
    pub use crate::transcribe::{
        DEFAULT_MODEL, Transcriber, TranscriptionModel, TranscriptionPrompt, TranscriptionResult,
    };
}
