use std::ops::ControlFlow;

use crate::StreamError;

/// Receives a sequence of `T`s followed by at most one terminal signal.
///
/// Returning [`ControlFlow::Break`] from [`on_subscribe`] or [`on_next`]
/// cancels the stream, and no further signals are delivered. A subscriber
/// that cancels is responsible for redeeming its own result.
///
/// [`on_subscribe`]: Subscriber::on_subscribe
/// [`on_next`]: Subscriber::on_next
pub trait Subscriber<T> {
    /// Called once before any element is delivered.
    fn on_subscribe(&mut self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Receives the next element.
    fn on_next(&mut self, item: T) -> ControlFlow<()>;

    /// Receives the error that terminated the stream.
    fn on_error(&mut self, error: StreamError);

    /// Called when the stream ends without error.
    fn on_complete(&mut self);
}

impl<T, S> Subscriber<T> for Box<S>
where
    S: Subscriber<T> + ?Sized,
{
    fn on_subscribe(&mut self) -> ControlFlow<()> {
        (**self).on_subscribe()
    }

    fn on_next(&mut self, item: T) -> ControlFlow<()> {
        (**self).on_next(item)
    }

    fn on_error(&mut self, error: StreamError) {
        (**self).on_error(error)
    }

    fn on_complete(&mut self) {
        (**self).on_complete()
    }
}

impl<T, S> Subscriber<T> for &mut S
where
    S: Subscriber<T> + ?Sized,
{
    fn on_subscribe(&mut self) -> ControlFlow<()> {
        (**self).on_subscribe()
    }

    fn on_next(&mut self, item: T) -> ControlFlow<()> {
        (**self).on_next(item)
    }

    fn on_error(&mut self, error: StreamError) {
        (**self).on_error(error)
    }

    fn on_complete(&mut self) {
        (**self).on_complete()
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::Subscriber;
    use crate::StreamError;

    #[derive(Debug, Default)]
    struct Recorder {
        items: Vec<u32>,
        error: Option<StreamError>,
        completed: bool,
    }

    impl Subscriber<u32> for Recorder {
        fn on_next(&mut self, item: u32) -> ControlFlow<()> {
            self.items.push(item);
            ControlFlow::Continue(())
        }

        fn on_error(&mut self, error: StreamError) {
            self.error = Some(error);
        }

        fn on_complete(&mut self) {
            self.completed = true;
        }
    }

    #[test]
    fn on_subscribe_defaults_to_continue() {
        let mut recorder = Recorder::default();

        assert_eq!(ControlFlow::Continue(()), recorder.on_subscribe());
    }

    #[test]
    fn boxed_subscriber_delegates_signals() {
        let mut subscriber: Box<dyn Subscriber<u32>> = Box::new(Recorder::default());

        assert_eq!(ControlFlow::Continue(()), subscriber.on_subscribe());
        assert_eq!(ControlFlow::Continue(()), subscriber.on_next(1));
        subscriber.on_complete();
    }

    #[test]
    fn mut_ref_subscriber_delegates_signals() {
        fn signal<S>(mut subscriber: S)
        where
            S: Subscriber<u32>,
        {
            let _ = subscriber.on_next(1);
            let _ = subscriber.on_next(2);
            subscriber.on_error(StreamError::failed("boom"));
        }

        let mut recorder = Recorder::default();
        signal(&mut recorder);

        assert_eq!(vec![1, 2], recorder.items);
        assert_eq!(Some(StreamError::failed("boom")), recorder.error);
        assert!(!recorder.completed);
    }
}
