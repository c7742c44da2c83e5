//! Completion sources
//!
//! A [`Completion`] is anything whose eventual outcome can be read either
//! without waiting ([`Completion::settled_now`]) or by blocking until it settles
//! ([`Completion::wait`]).

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::{FutureExt, Shared};
use matchkit_core::{log_op_end, log_op_error, log_op_start, panic_message, ExError, ExErrorKind};
use matchkit_core_types::schema::OP_AWAIT_FUTURE;
use thiserror::Error;

/// Final state of a future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T, E> {
    Value(T),
    Error(E),
    /// The producing side went away without delivering an outcome
    Cancelled,
}

/// Future outputs that can be read as a [`Settled`] state.
pub trait IntoSettled {
    type Value;
    type Error;

    fn into_settled(self) -> Settled<Self::Value, Self::Error>;
}

impl<T, E> IntoSettled for Result<T, E> {
    type Value = T;
    type Error = E;

    fn into_settled(self) -> Settled<T, E> {
        match self {
            Ok(value) => Settled::Value(value),
            Err(err) => Settled::Error(err),
        }
    }
}

impl<T, E> IntoSettled for Settled<T, E> {
    type Value = T;
    type Error = E;

    fn into_settled(self) -> Settled<T, E> {
        self
    }
}

/// A blocking wait ended without an outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("wait interrupted: {reason}")]
pub struct Interrupted {
    pub reason: String,
}

impl From<Interrupted> for ExError {
    fn from(err: Interrupted) -> Self {
        ExError::new(ExErrorKind::Interrupted)
            .with_op(OP_AWAIT_FUTURE)
            .with_message(err.to_string())
    }
}

/// Read access to the outcome of an asynchronous computation.
pub trait Completion {
    type Value;
    type Error;

    /// The outcome if it is already available. Never blocks.
    fn settled_now(&self) -> Option<Settled<Self::Value, Self::Error>>;

    /// Block until the outcome is available.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] when the wait ends without an outcome.
    fn wait(&self) -> Result<Settled<Self::Value, Self::Error>, Interrupted>;
}

impl<F> Completion for Shared<F>
where
    F: Future,
    F::Output: IntoSettled + Clone,
{
    type Value = <F::Output as IntoSettled>::Value;
    type Error = <F::Output as IntoSettled>::Error;

    /// # Panics
    ///
    /// Propagates a panic raised while polling the underlying future.
    fn settled_now(&self) -> Option<Settled<Self::Value, Self::Error>> {
        let polled = self.clone().now_or_never();
        tracing::trace!(
            component = module_path!(),
            op = OP_AWAIT_FUTURE,
            ready = polled.is_some(),
        );
        polled.map(IntoSettled::into_settled)
    }

    fn wait(&self) -> Result<Settled<Self::Value, Self::Error>, Interrupted> {
        let started = Instant::now();
        log_op_start!(OP_AWAIT_FUTURE);

        match panic::catch_unwind(AssertUnwindSafe(|| block_on(self.clone()))) {
            Ok(output) => {
                log_op_end!(OP_AWAIT_FUTURE, started);
                Ok(output.into_settled())
            }
            Err(payload) => {
                let err = Interrupted {
                    reason: panic_message(payload.as_ref()),
                };
                log_op_error!(OP_AWAIT_FUTURE, err.clone(), started = started);
                Err(err)
            }
        }
    }
}

impl<T: Clone, E: Clone> Completion for Settled<T, E> {
    type Value = T;
    type Error = E;

    fn settled_now(&self) -> Option<Settled<T, E>> {
        Some(self.clone())
    }

    fn wait(&self) -> Result<Settled<T, E>, Interrupted> {
        Ok(self.clone())
    }
}

/// Make a future inspectable by the matchers.
pub fn completion<F>(future: F) -> Shared<F>
where
    F: Future,
    F::Output: Clone,
{
    future.shared()
}

/// Outcome delivered through a oneshot channel; a dropped sender reads as
/// [`Settled::Cancelled`].
pub async fn settled_from_channel<T, E>(
    receiver: oneshot::Receiver<Result<T, E>>,
) -> Settled<T, E> {
    match receiver.await {
        Ok(outcome) => outcome.into_settled(),
        Err(oneshot::Canceled) => Settled::Cancelled,
    }
}
