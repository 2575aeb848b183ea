#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Pairs a stream subscriber with a handle to the result it redeems.
//!
//! A [`SubscriberWithResult`] bundles two things into one value:
//!
//! * how to feed a stream: the [`Subscriber`], and
//! * how to learn what happened: a future, usually a [`ResultHandle`], that
//!   resolves when the subscriber receives a completion or error signal, or
//!   cancels the stream.
//!
//! The pairing itself holds no logic. The subscriber is responsible for
//! redeeming the result, typically through a [`ResultCompleter`] obtained
//! from [`result_channel`].
//!
//! # Usage
//!
//! Add the following to `Cargo.toml`
//!
//! ```toml
//! subscriber_with_result = "0.1.0"
//! ```
//!
//! # Examples
//!
//! ## Stock subscribers
//!
//! ```rust
//! use futures::{stream, StreamExt};
//!
//! use subscriber_with_result::{subscribers, StreamError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let subscriber_with_result = subscribers::to_vec::<u32>();
//!
//!     let items = subscriber_with_result
//!         .consume(stream::iter([1, 2, 3]).map(Ok::<u32, StreamError>))
//!         .await;
//!
//!     assert_eq!(Ok(vec![1, 2, 3]), items);
//! }
//! ```
//!
//! ## Custom subscriber
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use futures::stream;
//!
//! use subscriber_with_result::{
//!     result_channel, ResultCompleter, StreamError, Subscriber, SubscriberWithResult,
//! };
//!
//! /// Counts items until the stream terminates.
//! struct Count {
//!     n: usize,
//!     result_completer: ResultCompleter<usize>,
//! }
//!
//! impl<T> Subscriber<T> for Count {
//!     fn on_next(&mut self, _item: T) -> ControlFlow<()> {
//!         self.n += 1;
//!         ControlFlow::Continue(())
//!     }
//!
//!     fn on_error(&mut self, error: StreamError) {
//!         self.result_completer.complete(Err(error));
//!     }
//!
//!     fn on_complete(&mut self) {
//!         self.result_completer.complete(Ok(self.n));
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let (result_completer, result_handle) = result_channel::<usize>();
//!     let subscriber_with_result = SubscriberWithResult::new(
//!         Count {
//!             n: 0,
//!             result_completer,
//!         },
//!         result_handle,
//!     );
//!
//!     let count = subscriber_with_result
//!         .consume(stream::iter([Ok('a'), Ok('b'), Err(StreamError::failed("eof"))]))
//!         .await;
//!
//!     assert_eq!(Err(StreamError::failed("eof")), count);
//! }
//! ```

pub use crate::{
    result_completer::ResultCompleter,
    result_handle::{result_channel, ResultHandle},
    stream_error::StreamError,
    subscribe::Subscribe,
    subscribe_ext::SubscribeExt,
    subscriber::Subscriber,
    subscriber_with_result::{BoxSubscriberWithResult, SubscriberWithResult},
};

pub mod subscribers;

mod result_completer;
mod result_handle;
mod stream_error;
mod subscribe;
mod subscribe_ext;
mod subscriber;
mod subscriber_with_result;
