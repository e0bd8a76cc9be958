//! Error types for the pdf-summarize library.
//!
//! Every failure the tool can hit is a variant of [`SummarizeError`], and
//! every variant's `Display` text is exactly the message that ends up in the
//! `{"error": "..."}` envelope printed on stdout. Nothing is retried; the
//! pipeline stops at the first error and folds it into an
//! [`crate::envelope::Envelope`].
//!
//! A 200 response whose body is not JSON is **not** an error: it is returned
//! as a success carrying the raw text.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf-summarize library.
#[derive(Debug, Error)]
pub enum SummarizeError {
    // ── Invocation errors ─────────────────────────────────────────────────
    /// Wrong number of command-line arguments.
    #[error("Usage: {program} <pdf_file_path>")]
    Usage { program: String },

    // ── Input errors ──────────────────────────────────────────────────────
    /// Nothing exists at the given path.
    #[error("PDF file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The path exists but could not be read (permissions, directory, …).
    #[error("Failed to read PDF: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Transport errors ──────────────────────────────────────────────────
    /// No response arrived before the configured timeout.
    #[error("Request timed out after {secs} seconds")]
    Timeout { secs: u64 },

    /// DNS, connect, TLS or any other fault below HTTP.
    #[error("Network error: {detail}")]
    Network { detail: String },

    /// The endpoint answered with a status other than 200.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Unexpected error: {0}")]
    Internal(String),
}

impl SummarizeError {
    /// Map a reqwest failure onto the transport taxonomy.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            SummarizeError::Timeout { secs: timeout_secs }
        } else {
            SummarizeError::Network {
                detail: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_display() {
        let e = SummarizeError::Usage {
            program: "pdf-summarize".into(),
        };
        assert_eq!(e.to_string(), "Usage: pdf-summarize <pdf_file_path>");
    }

    #[test]
    fn not_found_display() {
        let e = SummarizeError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert_eq!(e.to_string(), "PDF file not found: /tmp/missing.pdf");
    }

    #[test]
    fn read_failed_display_uses_io_message() {
        let e = SummarizeError::ReadFailed {
            path: PathBuf::from("locked.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.to_string(), "Failed to read PDF: denied");
    }

    #[test]
    fn timeout_display() {
        let e = SummarizeError::Timeout { secs: 60 };
        assert_eq!(e.to_string(), "Request timed out after 60 seconds");
    }

    #[test]
    fn http_display() {
        let e = SummarizeError::Http {
            status: 503,
            body: "busy".into(),
        };
        assert_eq!(e.to_string(), "HTTP 503: busy");
    }

    #[test]
    fn network_display() {
        let e = SummarizeError::Network {
            detail: "connection refused".into(),
        };
        assert!(e.to_string().starts_with("Network error: "));
        assert!(e.to_string().contains("connection refused"));
    }
}
