use thiserror::Error;

/// Lifecycle misuse of a [`StreamingDocument`](crate::StreamingDocument).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The operation needs an idle document, but a stream is active.
    #[error("document is currently streaming")]
    Streaming,
    /// The operation needs an active stream.
    #[error("document is not streaming")]
    NotStreaming,
}
