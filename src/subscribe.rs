use std::{
    fmt::{self, Debug},
    ops::ControlFlow,
    pin::Pin,
};

use futures::{
    future::Future,
    stream::Stream,
    task::{Context, Poll},
};

use crate::{StreamError, Subscriber};

/// Maximum number of items relayed in one call to `poll`.
const ITEMS_PER_POLL: usize = 32;

/// Future that feeds a stream's items to a [`Subscriber`].
///
/// Resolves once the subscriber has received a terminal signal or has
/// cancelled the stream.
pub struct Subscribe<St, S> {
    /// Underlying stream that produces values.
    stream: Pin<Box<St>>,
    /// Receives the stream's signals.
    subscriber: S,
    /// Progress of the subscription.
    state: SubscribeState,
}

/// Progress of a [`Subscribe`] future.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubscribeState {
    /// `on_subscribe` has not been called.
    NotSubscribed,
    /// Items are being relayed.
    Subscribed,
    /// A terminal signal was delivered, or the subscriber cancelled.
    Done,
}

impl<St, S> fmt::Debug for Subscribe<St, S>
where
    S: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribe")
            .field("stream", &"..")
            .field("subscriber", &self.subscriber)
            .field("state", &self.state)
            .finish()
    }
}

impl<St, S> Subscribe<St, S> {
    /// Returns a new `Subscribe`, feeding `stream` to `subscriber`.
    pub(crate) fn new(stream: St, subscriber: S) -> Self {
        Self {
            stream: Box::pin(stream),
            subscriber,
            state: SubscribeState::NotSubscribed,
        }
    }

    /// Returns the subscriber.
    pub fn subscriber(&self) -> &S {
        &self.subscriber
    }

    /// Returns the subscriber, consuming this future.
    pub fn into_subscriber(self) -> S {
        self.subscriber
    }
}

impl<T, St, S> Future for Subscribe<St, S>
where
    St: Stream<Item = Result<T, StreamError>>,
    S: Subscriber<T> + Unpin,
{
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;

        match this.state {
            SubscribeState::NotSubscribed => {
                this.state = SubscribeState::Subscribed;
                if let ControlFlow::Break(()) = this.subscriber.on_subscribe() {
                    tracing::debug!("Subscriber cancelled the stream on subscribe.");
                    this.state = SubscribeState::Done;
                    return Poll::Ready(());
                }
            }
            SubscribeState::Subscribed => {}
            SubscribeState::Done => return Poll::Ready(()),
        }

        for _ in 0..ITEMS_PER_POLL {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Some(Ok(item))) => {
                    if let ControlFlow::Break(()) = this.subscriber.on_next(item) {
                        tracing::debug!("Subscriber cancelled the stream.");
                        this.state = SubscribeState::Done;
                        return Poll::Ready(());
                    }
                }
                Poll::Ready(Some(Err(error))) => {
                    this.state = SubscribeState::Done;
                    this.subscriber.on_error(error);
                    return Poll::Ready(());
                }
                Poll::Ready(None) => {
                    this.state = SubscribeState::Done;
                    this.subscriber.on_complete();
                    return Poll::Ready(());
                }
            }
        }

        // Yield to the executor so an always-ready stream cannot starve it.
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
