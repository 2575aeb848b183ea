/// Error signal of a stream, and failure of a result handle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// The upstream failed.
    #[error("Stream failed: {0}")]
    Failed(String),
    /// The result completer was dropped before the result was redeemed.
    #[error("Result completer was dropped before the result was redeemed.")]
    Abandoned,
}

impl StreamError {
    /// Returns a `StreamError::Failed` with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
