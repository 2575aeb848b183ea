use std::ops::ControlFlow;

use crate::{
    result_channel, ResultCompleter, ResultHandle, StreamError, Subscriber, SubscriberWithResult,
};

/// Returns a subscriber that cancels the stream as soon as it is subscribed,
/// and redeems `()`.
pub fn cancel() -> SubscriberWithResult<Cancel, ResultHandle<()>> {
    let (result_completer, result_handle) = result_channel::<()>();

    SubscriberWithResult::new(Cancel { result_completer }, result_handle)
}

/// Subscriber that cancels on subscribe.
#[derive(Debug)]
pub struct Cancel {
    /// Redeems `()` on cancellation.
    result_completer: ResultCompleter<()>,
}

impl<T> Subscriber<T> for Cancel {
    fn on_subscribe(&mut self) -> ControlFlow<()> {
        self.result_completer.complete(Ok(()));
        ControlFlow::Break(())
    }

    fn on_next(&mut self, _item: T) -> ControlFlow<()> {
        self.result_completer.complete(Ok(()));
        ControlFlow::Break(())
    }

    fn on_error(&mut self, error: StreamError) {
        self.result_completer.complete(Err(error));
    }

    fn on_complete(&mut self) {
        self.result_completer.complete(Ok(()));
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use futures::{stream, StreamExt};

    use super::cancel;
    use crate::{StreamError, Subscriber};

    #[tokio::test]
    async fn never_polls_stream() {
        let mut polled = 0u32;

        let result = cancel()
            .consume(
                stream::iter([1, 2])
                    .inspect(|_| polled += 1)
                    .map(Ok::<u32, StreamError>),
            )
            .await;

        assert_eq!(Ok(()), result);
        assert_eq!(0, polled);
    }

    #[test]
    fn item_delivered_without_subscribe_cancels() {
        let (mut subscriber, mut result) = cancel().into_parts();

        assert_eq!(ControlFlow::Break(()), subscriber.on_next(1u32));
        assert_eq!(Some(&Ok(())), result.try_result());
    }
}
