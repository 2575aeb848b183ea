use futures::stream::Stream;

use crate::Subscribe;

/// Provides the `.subscribe()` method for `Stream`s to feed their items to a
/// [`Subscriber`].
///
/// [`Subscriber`]: crate::Subscriber
pub trait SubscribeExt {
    /// Returns a future that relays this stream's items to `subscriber`.
    ///
    /// `Ok` items are delivered through `on_next`, an `Err` item terminates
    /// the stream through `on_error`, and the end of the stream is delivered
    /// through `on_complete`. The stream is not polled after the subscriber
    /// cancels.
    ///
    /// # Parameters
    ///
    /// * `subscriber`: Receives the stream's signals.
    fn subscribe<S>(self, subscriber: S) -> Subscribe<Self, S>
    where
        Self: Sized;
}

impl<St> SubscribeExt for St
where
    St: Stream,
{
    fn subscribe<S>(self, subscriber: S) -> Subscribe<Self, S>
    where
        Self: Sized,
    {
        Subscribe::new(self, subscriber)
    }
}
