use tokio::sync::oneshot;

use crate::StreamError;

/// Redeems the result observed through a [`ResultHandle`].
///
/// The result is redeemed at most once. Dropping a completer that has not
/// redeemed its result resolves the handle with [`StreamError::Abandoned`].
///
/// [`ResultHandle`]: crate::ResultHandle
#[derive(Debug)]
pub struct ResultCompleter<R> {
    /// Sender for the result, `None` once redeemed.
    result_tx: Option<oneshot::Sender<Result<R, StreamError>>>,
}

impl<R> ResultCompleter<R> {
    /// Returns a new `ResultCompleter`, wrapping the provided sender.
    pub(crate) fn new(result_tx: oneshot::Sender<Result<R, StreamError>>) -> Self {
        Self {
            result_tx: Some(result_tx),
        }
    }

    /// Redeems the result.
    ///
    /// Returns `true` if this call redeemed the result, `false` if it had
    /// already been redeemed. Redeeming after the handle is dropped still
    /// counts as redeeming; the value is discarded.
    pub fn complete(&mut self, result: Result<R, StreamError>) -> bool {
        let Some(result_tx) = self.result_tx.take() else {
            return false;
        };

        if let Err(_result) = result_tx.send(result) {
            tracing::debug!("Result handle was dropped before the result was redeemed.");
        }

        true
    }

    /// Returns whether the result has been redeemed.
    pub fn is_completed(&self) -> bool {
        self.result_tx.is_none()
    }

    /// Returns whether the [`ResultHandle`] has been dropped.
    ///
    /// Always returns `false` once the result has been redeemed, as the
    /// completer no longer observes the handle.
    ///
    /// [`ResultHandle`]: crate::ResultHandle
    pub fn is_handle_dropped(&self) -> bool {
        self.result_tx
            .as_ref()
            .is_some_and(oneshot::Sender::is_closed)
    }
}

impl<R> Drop for ResultCompleter<R> {
    fn drop(&mut self) {
        if self.result_tx.is_some() {
            tracing::debug!("Result completer dropped without redeeming the result.");
        }
    }
}
