use std::ops::ControlFlow;

use crate::{
    result_channel, ResultCompleter, ResultHandle, StreamError, Subscriber, SubscriberWithResult,
};

/// Returns a subscriber that calls `f` with every item, and redeems `()` when
/// the stream completes.
pub fn for_each<T, F>(f: F) -> SubscriberWithResult<ForEach<F>, ResultHandle<()>>
where
    F: FnMut(T),
{
    let (result_completer, result_handle) = result_channel::<()>();

    SubscriberWithResult::new(
        ForEach {
            f,
            result_completer,
        },
        result_handle,
    )
}

/// Subscriber that calls a function with every item.
#[derive(Debug)]
pub struct ForEach<F> {
    /// Called with every item.
    f: F,
    /// Redeems `()` on completion.
    result_completer: ResultCompleter<()>,
}

impl<T, F> Subscriber<T> for ForEach<F>
where
    F: FnMut(T),
{
    fn on_next(&mut self, item: T) -> ControlFlow<()> {
        if self.result_completer.is_completed() {
            return ControlFlow::Break(());
        }

        (self.f)(item);
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
    use std::sync::{Arc, Mutex};

    use futures::{stream, StreamExt};

    use super::for_each;
    use crate::StreamError;

    #[tokio::test]
    async fn calls_f_for_every_item() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in_subscriber = Arc::clone(&seen);

        let result = for_each(move |n: u32| {
            seen_in_subscriber
                .lock()
                .expect("Expected to lock `seen`.")
                .push(n)
        })
        .consume(stream::iter([3, 1, 2]).map(Ok::<u32, StreamError>))
        .await;

        assert_eq!(Ok(()), result);
        assert_eq!(vec![3, 1, 2], *seen.lock().expect("Expected to lock `seen`."));
    }

    #[tokio::test]
    async fn redeems_error() {
        let mut count = 0u32;

        let result = for_each(|_: u32| count += 1)
            .consume(stream::iter([Ok(1), Ok(2), Err(StreamError::failed("boom"))]))
            .await;

        assert_eq!(Err(StreamError::failed("boom")), result);
        assert_eq!(2, count);
    }
}
