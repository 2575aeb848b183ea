//! Ready-made subscribers, each paired with the result it redeems.
//!
//! Every subscriber here redeems `Err(error)` when it receives an error
//! signal, and [`StreamError::Abandoned`] if it is dropped before the stream
//! terminates.
//!
//! [`StreamError::Abandoned`]: crate::StreamError::Abandoned

pub use self::{
    cancel::{cancel, Cancel},
    find_first::{find_first, FindFirst},
    fold::{fold, to_vec, Fold, ToVec},
    for_each::{for_each, ForEach},
    ignore::{ignore, Ignore},
};

mod cancel;
mod find_first;
mod fold;
mod for_each;
mod ignore;
