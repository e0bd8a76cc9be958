//! Pipeline stages for PDF summarization.
//!
//! Each submodule implements exactly one step, so each can be tested on its
//! own and the network stage can be swapped for a mock.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ encode ──▶ transport ──▶ classify
//! (path)    (base64)   (HTTP POST)   (200 / non-200)
//! ```
//!
//! 1. [`input`]     — check that the user-supplied path exists
//! 2. [`encode`]    — read the file once and base64-wrap it
//! 3. [`transport`] — POST `{"pdf_content": ...}` and classify the reply;
//!    the only stage with network I/O

pub mod encode;
pub mod input;
pub mod transport;
