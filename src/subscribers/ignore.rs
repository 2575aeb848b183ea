use std::ops::ControlFlow;

use crate::{
    result_channel, ResultCompleter, ResultHandle, StreamError, Subscriber, SubscriberWithResult,
};

/// Returns a subscriber that discards every item, and redeems `()` when the
/// stream completes.
pub fn ignore() -> SubscriberWithResult<Ignore, ResultHandle<()>> {
    let (result_completer, result_handle) = result_channel::<()>();

    SubscriberWithResult::new(Ignore { result_completer }, result_handle)
}

/// Subscriber that discards items.
#[derive(Debug)]
pub struct Ignore {
    /// Redeems `()` on completion.
    result_completer: ResultCompleter<()>,
}

impl<T> Subscriber<T> for Ignore {
    fn on_next(&mut self, _item: T) -> ControlFlow<()> {
        ControlFlow::Continue(())
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
    use futures::{stream, StreamExt};

    use super::ignore;
    use crate::StreamError;

    #[tokio::test]
    async fn drains_stream_and_redeems_unit() {
        let mut polled = 0u32;

        let result = ignore()
            .consume(
                stream::iter(["a", "b"])
                    .inspect(|_| polled += 1)
                    .map(Ok::<&str, StreamError>),
            )
            .await;

        assert_eq!(Ok(()), result);
        assert_eq!(2, polled);
    }

    #[tokio::test]
    async fn redeems_error() {
        let result = ignore()
            .consume(stream::iter([Ok(1u32), Err(StreamError::failed("boom"))]))
            .await;

        assert_eq!(Err(StreamError::failed("boom")), result);
    }
}
