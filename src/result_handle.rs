use std::pin::Pin;

use futures::{
    future::{FusedFuture, Future},
    task::{Context, Poll},
};
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::{ResultCompleter, StreamError};

/// Returns a connected [`ResultCompleter`] and [`ResultHandle`].
///
/// The handle resolves with whatever the completer redeems, or with
/// [`StreamError::Abandoned`] if the completer is dropped first.
pub fn result_channel<R>() -> (ResultCompleter<R>, ResultHandle<R>) {
    let (result_tx, result_rx) = oneshot::channel::<Result<R, StreamError>>();

    (ResultCompleter::new(result_tx), ResultHandle::new(result_rx))
}

/// Handle to the terminal result of a subscriber.
///
/// Awaiting the handle takes the result. [`try_result`] peeks at it without
/// taking it, so the handle can still be awaited afterwards.
///
/// [`try_result`]: ResultHandle::try_result
#[derive(Debug)]
pub struct ResultHandle<R> {
    /// Receiver for the redeemed result, `None` once it has been received.
    result_rx: Option<oneshot::Receiver<Result<R, StreamError>>>,
    /// Received result that has not yet been returned by `poll`.
    result: Option<Result<R, StreamError>>,
}

impl<R> ResultHandle<R> {
    /// Returns a new `ResultHandle`, wrapping the provided receiver.
    pub(crate) fn new(result_rx: oneshot::Receiver<Result<R, StreamError>>) -> Self {
        Self {
            result_rx: Some(result_rx),
            result: None,
        }
    }

    /// Returns the result if it has been redeemed, without waiting or taking
    /// it.
    ///
    /// Returns `None` while the result is pending, and after the handle has
    /// been awaited to completion.
    pub fn try_result(&mut self) -> Option<&Result<R, StreamError>> {
        if self.result.is_none() {
            if let Some(result_rx) = self.result_rx.as_mut() {
                let result = match result_rx.try_recv() {
                    Ok(result) => result,
                    Err(TryRecvError::Empty) => return None,
                    Err(TryRecvError::Closed) => Err(StreamError::Abandoned),
                };
                self.result_rx = None;
                self.result = Some(result);
            }
        }

        self.result.as_ref()
    }
}

// The cached result is never pinned.
impl<R> Unpin for ResultHandle<R> {}

impl<R> Future for ResultHandle<R> {
    type Output = Result<R, StreamError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;

        if let Some(result) = this.result.take() {
            return Poll::Ready(result);
        }

        // Already returned the result.
        let Some(result_rx) = this.result_rx.as_mut() else {
            return Poll::Pending;
        };

        let poll = Pin::new(result_rx).poll(cx).map(|result| match result {
            Ok(result) => result,
            // Completer dropped without sending.
            Err(_recv_error) => Err(StreamError::Abandoned),
        });
        if poll.is_ready() {
            this.result_rx = None;
        }

        poll
    }
}

impl<R> FusedFuture for ResultHandle<R> {
    fn is_terminated(&self) -> bool {
        self.result_rx.is_none() && self.result.is_none()
    }
}
