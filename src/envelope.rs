//! The single JSON object printed for every run.
//!
//! Success and failure share stdout, so callers (shell scripts, the web
//! front-end that shells out to this tool) parse exactly one line and branch
//! on which key is present:
//!
//! ```text
//! {"success":true,"data":{"summary":"..."}}
//! {"error":"HTTP 503: busy"}
//! ```

use crate::error::SummarizeError;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

/// Outcome of one summarization run.
///
/// Serialises as `{"success":true,"data":…}` or `{"error":"…"}`; the
/// `success` key is written by the serialiser and is always `true`.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// The endpoint answered 200. `data` is its JSON body, or the raw text
    /// when the body was not JSON.
    Success { data: Value },
    /// Any failure, rendered as a human-readable message.
    Error { error: String },
}

impl Envelope {
    /// Wrap endpoint data in a success envelope.
    pub fn success(data: Value) -> Self {
        Envelope::Success { data }
    }

    /// Build an error envelope from a message.
    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error { .. })
    }

    /// Serialise to a single line of JSON.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Envelope::Success { data } => {
                let mut st = serializer.serialize_struct("Envelope", 2)?;
                st.serialize_field("success", &true)?;
                st.serialize_field("data", data)?;
                st.end()
            }
            Envelope::Error { error } => {
                let mut st = serializer.serialize_struct("Envelope", 1)?;
                st.serialize_field("error", error)?;
                st.end()
            }
        }
    }
}

impl From<SummarizeError> for Envelope {
    fn from(err: SummarizeError) -> Self {
        Envelope::error(err.to_string())
    }
}

impl From<Result<Value, SummarizeError>> for Envelope {
    fn from(result: Result<Value, SummarizeError>) -> Self {
        match result {
            Ok(data) => Envelope::success(data),
            Err(e) => e.into(),
        }
    }
}
