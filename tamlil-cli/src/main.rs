//! Tamlil CLI - verbatim Hebrew transcription of a local audio file.
//!
//! Uploads the file to the Gemini API, requests a one-shot transcription,
//! and prints the transcript to stdout line by line.

#![allow(clippy::print_stdout)] // CLI program intentionally uses stdout

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tamlil::prelude::*;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Tamlil - verbatim Hebrew audio transcription
#[derive(Parser, Debug)]
#[command(name = "tamlil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the audio file to transcribe
    #[arg(value_name = "AUDIO")]
    audio: PathBuf,

    /// Model to use
    #[arg(short, long, env = "TAMLIL_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Skip music or song segments, transcribe spoken content only
    #[arg(long)]
    skip_music: bool,

    /// Reorder each printed line into visual right-to-left order
    ///
    /// By default lines are printed in logical order and the terminal is
    /// responsible for bidirectional rendering.
    #[arg(long)]
    rtl: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are a success path; everything else prints
            // the usage message and exits 1, before any network access.
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");

    match rt.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tamlil={level},tamlil_cli={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 3)
        .with_writer(std::io::stderr)
        .init();
}

/// Main async entry point: Configure -> Upload -> Request -> Print.
async fn run(cli: Cli) -> Result<()> {
    let client = GeminiClient::from_env();

    let prompt = TranscriptionPrompt::new().skip_music(cli.skip_music);
    let model = client.transcription_model(cli.model).with_prompt(prompt);

    let result = model.transcribe(&cli.audio).await?;

    println!("\n--- Transcript using model {} ---\n", result.model);

    for line in result.lines() {
        if cli.rtl {
            println!("{}", reorder_rtl(line));
        } else {
            println!("{line}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_audio_argument() {
        let err = Cli::try_parse_from(["tamlil"]).unwrap_err();
        assert!(err.use_stderr());

        let rendered = err.to_string();
        assert!(rendered.contains("Usage:"));
        assert!(rendered.contains("tamlil"));
    }

    #[test]
    fn test_audio_path_passed_unmodified() {
        let cli = Cli::try_parse_from(["tamlil", "recordings/שיחה.mp3"]).expect("parses");
        assert_eq!(cli.audio, PathBuf::from("recordings/שיחה.mp3"));
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert!(!cli.skip_music);
        assert!(!cli.rtl);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "tamlil",
            "test.mp3",
            "--skip-music",
            "--rtl",
            "-m",
            "models/gemini-3-pro-preview",
        ])
        .expect("parses");

        assert!(cli.skip_music);
        assert!(cli.rtl);
        assert_eq!(cli.model, "models/gemini-3-pro-preview");
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = Cli::try_parse_from(["tamlil", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
