//! matchkit Future - matchers over the completion state of a future
//!
//! The `future_completed_*` matchers poll once and never wait; the
//! `future_will_complete_*` matchers block the calling thread until the
//! future settles. Both inspect any [`Completion`], most commonly a
//! [`futures::future::Shared`] built with [`completion`].

pub mod completion;
pub mod matchers;

pub use completion::{
    completion, settled_from_channel, Completion, Interrupted, IntoSettled, Settled,
};
pub use matchers::{
    future_completed_with_error, future_completed_with_error_that, future_completed_with_value,
    future_completed_with_value_that, future_will_complete_with_error,
    future_will_complete_with_error_that, future_will_complete_with_value,
    future_will_complete_with_value_that, FutureError, FutureValue,
};
