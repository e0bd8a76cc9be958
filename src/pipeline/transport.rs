//! Network stage: POST the encoded PDF and classify the reply.
//!
//! Delivery and classification are separate: a [`Transport`] only has to
//! hand back a [`RawResponse`] (or a timeout / network error), and
//! [`classify_response`] turns that into endpoint data or an HTTP error
//! without touching the network.
//!
//! ## Classification
//!
//! | Outcome | Result |
//! |---------|--------|
//! | status 200, JSON body | `Ok(json)` |
//! | status 200, other body | `Ok(Value::String(body))` |
//! | any other status | `Err(Http { status, body })` |
//! | timeout | `Err(Timeout { secs })` |
//! | DNS / connect / TLS fault | `Err(Network { detail })` |

use crate::config::SummarizerConfig;
use crate::error::SummarizeError;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, warn};

/// JSON body sent to the endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    /// Standard base64 of the whole PDF.
    pub pdf_content: String,
}

/// Status and body of an HTTP reply, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Anything that can deliver a [`SummarizeRequest`].
///
/// Implementations return `Err` only for transport-level failures
/// ([`SummarizeError::Timeout`], [`SummarizeError::Network`]); every HTTP
/// status, including errors, is an `Ok(RawResponse)`.
pub trait Transport {
    fn send(
        &self,
        request: &SummarizeRequest,
    ) -> impl Future<Output = Result<RawResponse, SummarizeError>> + Send;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl HttpTransport {
    /// Build a client whose total timeout is `config.timeout_secs`.
    pub fn new(config: &SummarizerConfig) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SummarizeError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &SummarizeRequest) -> Result<RawResponse, SummarizeError> {
        let body = serde_json::to_vec(request)
            .map_err(|e| SummarizeError::Internal(format!("Failed to serialise request: {e}")))?;

        info!("POST {} ({} bytes)", self.endpoint, body.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SummarizeError::from_reqwest(e, self.timeout_secs))?;

        let status = response.status().as_u16();
        // The total timeout still applies while the body streams in.
        let body = response
            .text()
            .await
            .map_err(|e| SummarizeError::from_reqwest(e, self.timeout_secs))?;

        debug!("Endpoint replied HTTP {} with {} bytes", status, body.len());
        Ok(RawResponse { status, body })
    }
}

/// Turn a raw reply into endpoint data or an HTTP error.
///
/// Only status 200 counts as success. A 200 body that is not JSON is kept
/// as a plain string rather than rejected.
pub fn classify_response(response: RawResponse) -> Result<Value, SummarizeError> {
    if response.status != 200 {
        warn!("Endpoint returned HTTP {}", response.status);
        return Err(SummarizeError::Http {
            status: response.status,
            body: response.body,
        });
    }

    match serde_json::from_str::<Value>(&response.body) {
        Ok(json) => Ok(json),
        Err(e) => {
            debug!("Response body is not JSON ({}); returning raw text", e);
            Ok(Value::String(response.body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn request_serialises_single_field() {
        let req = SummarizeRequest {
            pdf_content: "JVBERi0x".into(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"pdf_content":"JVBERi0x"}"#
        );
    }

    #[test]
    fn ok_json_body_is_parsed() {
        let data = classify_response(raw(200, r#"{"summary":"ok"}"#)).unwrap();
        assert_eq!(data, json!({"summary": "ok"}));
    }

    #[test]
    fn ok_text_body_falls_back_to_string() {
        let data = classify_response(raw(200, "plain text")).unwrap();
        assert_eq!(data, Value::String("plain text".into()));
    }

    #[test]
    fn ok_empty_body_is_empty_string() {
        let data = classify_response(raw(200, "")).unwrap();
        assert_eq!(data, Value::String(String::new()));
    }

    #[test]
    fn non_200_is_http_error() {
        let err = classify_response(raw(503, "busy")).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503: busy");
    }

    #[test]
    fn other_2xx_is_still_an_error() {
        let err = classify_response(raw(201, "{}")).unwrap_err();
        assert!(matches!(err, SummarizeError::Http { status: 201, .. }));
    }

    #[test]
    fn transport_uses_configured_endpoint() {
        let config = SummarizerConfig::builder()
            .endpoint("http://127.0.0.1:9/summarize")
            .build()
            .unwrap();
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.endpoint(), "http://127.0.0.1:9/summarize");
    }
}
