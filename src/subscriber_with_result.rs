use futures::{
    future::{Future, FutureExt, Map},
    stream::Stream,
};

use crate::{ResultHandle, StreamError, SubscribeExt, Subscriber};

/// Boxed [`SubscriberWithResult`] for elements `T` and result `R`.
pub type BoxSubscriberWithResult<'s, T, R> =
    SubscriberWithResult<Box<dyn Subscriber<T> + Send + 's>, ResultHandle<R>>;

/// A subscriber paired with a handle to the result it redeems.
///
/// The result is redeemed when the subscriber receives a completion or error
/// signal, or otherwise cancels the stream. That coupling is upheld by
/// whoever builds the pair; this type only holds both parts.
///
/// By convention `S: Subscriber<T>` and `Fut: Future<Output = R>`, but no
/// bounds are required to construct or read a `SubscriberWithResult`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriberWithResult<S, Fut> {
    /// Consumer of the stream.
    subscriber: S,
    /// Handle to the subscriber's terminal result.
    result: Fut,
}

impl<S, Fut> SubscriberWithResult<S, Fut> {
    /// Returns a new `SubscriberWithResult`.
    pub fn new(subscriber: S, result: Fut) -> Self {
        Self { subscriber, result }
    }

    /// Returns the subscriber.
    pub fn subscriber(&self) -> &S {
        &self.subscriber
    }

    /// Returns the result handle.
    pub fn result(&self) -> &Fut {
        &self.result
    }

    /// Returns the subscriber and result handle.
    pub fn into_parts(self) -> (S, Fut) {
        (self.subscriber, self.result)
    }

    /// Maps the eventual result with `f`, keeping the same subscriber.
    pub fn map_result<F, R>(self, f: F) -> SubscriberWithResult<S, Map<Fut, F>>
    where
        Fut: Future,
        F: FnOnce(Fut::Output) -> R,
    {
        let Self { subscriber, result } = self;

        SubscriberWithResult::new(subscriber, result.map(f))
    }

    /// Feeds `stream` to the subscriber, then waits for the result.
    pub async fn consume<T, St>(self, stream: St) -> Fut::Output
    where
        St: Stream<Item = Result<T, StreamError>>,
        S: Subscriber<T> + Unpin,
        Fut: Future,
    {
        let Self { subscriber, result } = self;

        stream.subscribe(subscriber).await;
        result.await
    }
}

impl<S, Fut> From<(S, Fut)> for SubscriberWithResult<S, Fut> {
    fn from((subscriber, result): (S, Fut)) -> Self {
        Self::new(subscriber, result)
    }
}
