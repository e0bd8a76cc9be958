//! CLI binary for pdf-summarize.
//!
//! A thin shim over the library crate: parse exactly one path, run the
//! pipeline, print the envelope as one JSON line on stdout and exit 0 or 1.
//! Diagnostics go to stderr through `tracing` and are off unless `RUST_LOG`
//! asks for them.

use anyhow::{Context, Result};
use clap::Parser;
use pdf_summarize::{summarize, Envelope, SummarizeError, SummarizerConfig};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const PROGRAM: &str = "pdf-summarize";

/// Summarize a PDF with the remote summarization service.
#[derive(Parser, Debug)]
#[command(
    name = PROGRAM,
    version,
    about = "Summarize a PDF with the remote summarization service",
    long_about = "Reads a PDF, sends it base64-encoded to the summarization endpoint and \
prints exactly one JSON object on stdout: {\"success\": true, \"data\": ...} on success or \
{\"error\": \"...\"} on failure. Exit code is 0 on success and 1 on any failure.",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Path to the PDF file. Taken verbatim: `-x.pdf`, `--help` and `""`
    /// are all paths.
    #[arg(allow_hyphen_values = true)]
    pdf_file_path: OsString,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries only the envelope; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    // ── Arguments ────────────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!("Argument error: {}", e);
            let usage = SummarizeError::Usage {
                program: PROGRAM.to_string(),
            };
            return emit(&usage.into());
        }
    };

    // ── Run ──────────────────────────────────────────────────────────────
    let path = PathBuf::from(cli.pdf_file_path);
    let envelope = summarize(&path, &SummarizerConfig::default()).await;
    emit(&envelope)
}

/// Print the envelope as one JSON line and map it to an exit code.
fn emit(envelope: &Envelope) -> Result<ExitCode> {
    let line = envelope
        .to_json_line()
        .context("Failed to serialise envelope")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{line}").context("Failed to write to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(if envelope.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
