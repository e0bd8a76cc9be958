//! Summarization entry points.
//!
//! Each function runs the whole pipeline and always returns an
//! [`Envelope`]: failures at any stage are folded into the error shape
//! instead of being propagated, so the caller only has to print the result
//! and pick an exit code.

use crate::config::SummarizerConfig;
use crate::envelope::Envelope;
use crate::error::SummarizeError;
use crate::pipeline::transport::{classify_response, HttpTransport, SummarizeRequest, Transport};
use crate::pipeline::{encode, input};
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Summarize a local PDF through the configured HTTP endpoint.
///
/// This is the primary entry point for the library.
///
/// # Example
/// ```rust,no_run
/// use pdf_summarize::{summarize, SummarizerConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let envelope = summarize("paper.pdf", &SummarizerConfig::default()).await;
/// println!("{}", envelope.to_json_line().unwrap());
/// # }
/// ```
pub async fn summarize(path: impl AsRef<Path>, config: &SummarizerConfig) -> Envelope {
    let start = Instant::now();
    info!("Starting summarization: {}", path.as_ref().display());

    // No client is built for a path that does not exist.
    let path = match input::resolve_local(path) {
        Ok(p) => p,
        Err(e) => return finish(Err(e), start),
    };

    let result = match HttpTransport::new(config) {
        Ok(transport) => run_resolved(&path, &transport).await,
        Err(e) => Err(e),
    };
    finish(result, start)
}

/// Summarize a local PDF through any [`Transport`].
///
/// The transport is not invoked when the path does not exist or cannot be
/// read.
pub async fn summarize_with<T: Transport>(path: impl AsRef<Path>, transport: &T) -> Envelope {
    let start = Instant::now();
    info!("Starting summarization: {}", path.as_ref().display());

    let result = match input::resolve_local(path) {
        Ok(p) => run_resolved(&p, transport).await,
        Err(e) => Err(e),
    };
    finish(result, start)
}

/// Summarize PDF bytes already in memory.
///
/// No file is touched; useful when the document comes from an upload or a
/// database rather than disk.
pub async fn summarize_bytes<T: Transport>(bytes: &[u8], transport: &T) -> Envelope {
    let start = Instant::now();
    info!("Starting summarization of {} in-memory bytes", bytes.len());

    let result = send_encoded(encode::encode_bytes(bytes), transport).await;
    finish(result, start)
}

/// Synchronous wrapper around [`summarize`].
///
/// Creates a single-threaded tokio runtime internally. Must not be called
/// from inside another tokio runtime (`block_on` panics there); use
/// [`summarize`] in async code.
pub fn summarize_sync(path: impl AsRef<Path>, config: &SummarizerConfig) -> Envelope {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt.block_on(summarize(path, config)),
        Err(e) => SummarizeError::Internal(format!("Failed to create tokio runtime: {e}")).into(),
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Encode and send a path that `input::resolve_local` already accepted.
async fn run_resolved<T: Transport>(path: &Path, transport: &T) -> Result<Value, SummarizeError> {
    let pdf_content = encode::encode_file(path).await?;
    send_encoded(pdf_content, transport).await
}

async fn send_encoded<T: Transport>(
    pdf_content: String,
    transport: &T,
) -> Result<Value, SummarizeError> {
    let request = SummarizeRequest { pdf_content };
    let response = transport.send(&request).await?;
    classify_response(response)
}

fn finish(result: Result<Value, SummarizeError>, start: Instant) -> Envelope {
    let elapsed_ms = start.elapsed().as_millis();
    match &result {
        Ok(_) => info!("Summarization complete in {}ms", elapsed_ms),
        Err(e) => warn!("Summarization failed after {}ms: {}", elapsed_ms, e),
    }
    result.into()
}
