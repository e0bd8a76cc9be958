//! Configuration for a summarization run.
//!
//! The CLI always runs with [`SummarizerConfig::default()`]: the fixed
//! production endpoint and a 60 second timeout. The builder exists for
//! library callers and tests that need to point the transport somewhere
//! else (a staging deployment, a local stub server).

use crate::error::SummarizeError;

/// Production summarization endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://jtwx63qbu1.execute-api.us-east-1.amazonaws.com/default/pdf-summarizer-function";

/// Total request timeout, covering connect, upload and body download.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for [`crate::pipeline::transport::HttpTransport`].
///
/// # Example
/// ```rust
/// use pdf_summarize::SummarizerConfig;
///
/// let config = SummarizerConfig::builder()
///     .endpoint("http://127.0.0.1:8080/summarize")
///     .timeout_secs(5)
///     .build()
///     .unwrap();
/// assert_eq!(config.timeout_secs, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// URL the encoded PDF is POSTed to.
    pub endpoint: String,

    /// Total timeout for the HTTP call in seconds. Default: 60.
    ///
    /// Summaries of long documents are slow to generate. The value also
    /// appears verbatim in the timeout error message.
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SummarizerConfig {
    /// Create a new builder for `SummarizerConfig`.
    pub fn builder() -> SummarizerConfigBuilder {
        SummarizerConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`SummarizerConfig`].
#[derive(Debug)]
pub struct SummarizerConfigBuilder {
    config: SummarizerConfig,
}

impl SummarizerConfigBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<SummarizerConfig, SummarizeError> {
        let c = &self.config;
        let url = reqwest::Url::parse(&c.endpoint).map_err(|e| {
            SummarizeError::InvalidConfig(format!("endpoint '{}' is not a URL: {}", c.endpoint, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SummarizeError::InvalidConfig(format!(
                "endpoint must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if c.timeout_secs == 0 {
            return Err(SummarizeError::InvalidConfig(
                "timeout must be >= 1 second".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production() {
        let c = SummarizerConfig::default();
        assert_eq!(c.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(c.timeout_secs, 60);
    }

    #[test]
    fn builder_default_is_valid() {
        assert_eq!(
            SummarizerConfig::builder().build().unwrap(),
            SummarizerConfig::default()
        );
    }

    #[test]
    fn rejects_non_url_endpoint() {
        let err = SummarizerConfig::builder()
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = SummarizerConfig::builder()
            .endpoint("ftp://example.com/upload")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("ftp"), "got: {err}");
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = SummarizerConfig::builder().timeout_secs(0).build().unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidConfig(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: timeout must be >= 1 second"
        );
        assert!(err.to_string().is_ascii());
    }
}
