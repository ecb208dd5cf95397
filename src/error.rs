//! Errors raised at the crate's parsing edges.
//!
//! The store operations themselves are total; only decoding configuration or
//! a serialized transcript can fail.

/// Errors produced while decoding chat configuration or transcripts.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// A `ChatConfig` JSON document could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A serialized `ChatLog` could not be parsed.
    #[error("transcript parse failed: {0}")]
    TranscriptParse(String),
}
