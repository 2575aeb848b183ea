use std::ops::ControlFlow;

use crate::{
    result_channel, ResultCompleter, ResultHandle, StreamError, Subscriber, SubscriberWithResult,
};

/// [`Fold`] that collects items into a `Vec`.
pub type ToVec<T> = Fold<Vec<T>, fn(Vec<T>, T) -> Vec<T>>;

/// Returns a subscriber that folds every item into an accumulator, and
/// redeems the final accumulator when the stream completes.
pub fn fold<T, A, F>(init: A, f: F) -> SubscriberWithResult<Fold<A, F>, ResultHandle<A>>
where
    F: FnMut(A, T) -> A,
{
    let (result_completer, result_handle) = result_channel::<A>();

    SubscriberWithResult::new(Fold::new(init, f, result_completer), result_handle)
}

/// Returns a subscriber that collects every item, and redeems them in order
/// when the stream completes.
pub fn to_vec<T>() -> SubscriberWithResult<ToVec<T>, ResultHandle<Vec<T>>> {
    fold(Vec::new(), push as fn(Vec<T>, T) -> Vec<T>)
}

fn push<T>(mut items: Vec<T>, item: T) -> Vec<T> {
    items.push(item);
    items
}

/// Subscriber that folds items into an accumulator.
#[derive(Debug)]
pub struct Fold<A, F> {
    /// Accumulated value, `None` once redeemed.
    acc: Option<A>,
    /// Combines the accumulator with the next item.
    f: F,
    /// Redeems the final accumulator.
    result_completer: ResultCompleter<A>,
}

impl<A, F> Fold<A, F> {
    fn new(init: A, f: F, result_completer: ResultCompleter<A>) -> Self {
        Self {
            acc: Some(init),
            f,
            result_completer,
        }
    }
}

impl<T, A, F> Subscriber<T> for Fold<A, F>
where
    F: FnMut(A, T) -> A,
{
    fn on_next(&mut self, item: T) -> ControlFlow<()> {
        match self.acc.take() {
            Some(acc) => {
                self.acc = Some((self.f)(acc, item));
                ControlFlow::Continue(())
            }
            None => ControlFlow::Break(()),
        }
    }

    fn on_error(&mut self, error: StreamError) {
        self.acc = None;
        self.result_completer.complete(Err(error));
    }

    fn on_complete(&mut self) {
        if let Some(acc) = self.acc.take() {
            self.result_completer.complete(Ok(acc));
        }
    }
}
