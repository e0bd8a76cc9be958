//! # pdf-summarize
//!
//! Send a PDF to a remote summarization endpoint and get the answer back as
//! one line of JSON.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF path
//!  │
//!  ├─ 1. Input      check the file exists
//!  ├─ 2. Encode     read bytes → standard base64
//!  ├─ 3. Transport  POST {"pdf_content": "<base64>"} (60 s timeout)
//!  ├─ 4. Classify   200 → data (JSON or raw text), otherwise error
//!  └─ 5. Envelope   {"success": true, "data": …} | {"error": "…"}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_summarize::{summarize, SummarizerConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let envelope = summarize("document.pdf", &SummarizerConfig::default()).await;
//!     println!("{}", envelope.to_json_line()?);
//!     std::process::exit(if envelope.is_error() { 1 } else { 0 });
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf-summarize` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf-summarize = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod envelope;
pub mod error;
pub mod pipeline;
pub mod summarize;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{SummarizerConfig, SummarizerConfigBuilder, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
pub use envelope::Envelope;
pub use error::SummarizeError;
pub use pipeline::transport::{HttpTransport, RawResponse, SummarizeRequest, Transport};
pub use summarize::{summarize, summarize_bytes, summarize_sync, summarize_with};
