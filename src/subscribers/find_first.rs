use std::ops::ControlFlow;

use crate::{
    result_channel, ResultCompleter, ResultHandle, StreamError, Subscriber, SubscriberWithResult,
};

/// Returns a subscriber that redeems the first item and cancels the stream,
/// or redeems `None` if the stream completes empty.
pub fn find_first<T>() -> SubscriberWithResult<FindFirst<T>, ResultHandle<Option<T>>> {
    let (result_completer, result_handle) = result_channel::<Option<T>>();

    SubscriberWithResult::new(FindFirst { result_completer }, result_handle)
}

/// Subscriber that takes the first item.
#[derive(Debug)]
pub struct FindFirst<T> {
    /// Redeems the first item.
    result_completer: ResultCompleter<Option<T>>,
}

impl<T> Subscriber<T> for FindFirst<T> {
    fn on_next(&mut self, item: T) -> ControlFlow<()> {
        self.result_completer.complete(Ok(Some(item)));
        ControlFlow::Break(())
    }

    fn on_error(&mut self, error: StreamError) {
        self.result_completer.complete(Err(error));
    }

    fn on_complete(&mut self) {
        self.result_completer.complete(Ok(None));
    }
}

#[cfg(test)]
mod tests {
    use futures::{stream, StreamExt};

    use super::find_first;
    use crate::StreamError;

    #[tokio::test]
    async fn redeems_first_item_and_stops() {
        let mut polled = 0u32;

        let first = find_first::<u32>()
            .consume(
                stream::iter([7, 8, 9])
                    .inspect(|_| polled += 1)
                    .map(Ok::<u32, StreamError>),
            )
            .await;

        assert_eq!(Ok(Some(7)), first);
        assert_eq!(1, polled);
    }

    #[tokio::test]
    async fn redeems_none_for_empty_stream() {
        let first = find_first::<u32>()
            .consume(stream::empty::<Result<u32, StreamError>>())
            .await;

        assert_eq!(Ok(None), first);
    }

    #[tokio::test]
    async fn redeems_error_before_first_item() {
        let first = find_first::<u32>()
            .consume(stream::iter([Err(StreamError::failed("boom")), Ok(1)]))
            .await;

        assert_eq!(Err(StreamError::failed("boom")), first);
    }
}
