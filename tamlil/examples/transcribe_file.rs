//! Transcribe a local audio file.
//!
//! ```bash
//! export GOOGLE_API_KEY=AIza...
//! cargo run --example transcribe_file -- test.mp3
//! ```

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use tamlil::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "test.mp3".to_string())
        .into();

    let model = GeminiClient::from_env().transcription_model(DEFAULT_MODEL);
    let result = model.transcribe(&path).await?;

    println!("--- Transcript using model {} ---", result.model);
    for line in result.lines() {
        println!("{line}");
    }

    Ok(())
}
