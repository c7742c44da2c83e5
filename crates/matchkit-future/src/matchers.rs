use std::fmt::Debug;

use matchkit_core::matchers::{anything, Anything};
use matchkit_core::{Condition, Description, Matcher, SelfDescribing};

use crate::completion::{Completion, Settled};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Look once, never wait
    Now,
    Blocking,
}

impl Mode {
    fn settle<C: Completion + ?Sized>(
        self,
        actual: &C,
        not_done: &str,
        mismatch: &mut Description,
    ) -> Option<Settled<C::Value, C::Error>> {
        match self {
            Mode::Now => {
                let settled = actual.settled_now();
                if settled.is_none() {
                    mismatch.append_text(not_done);
                }
                settled
            }
            Mode::Blocking => match actual.wait() {
                Ok(settled) => Some(settled),
                Err(_) => {
                    mismatch.append_text("a future that was interrupted");
                    None
                }
            },
        }
    }
}

/// Matches a future that completed to a value satisfying the inner matcher.
#[derive(Debug, Clone)]
pub struct FutureValue<M> {
    matcher: M,
    mode: Mode,
}

pub fn future_completed_with_value() -> FutureValue<Anything> {
    future_completed_with_value_that(anything())
}

pub fn future_completed_with_value_that<M>(matcher: M) -> FutureValue<M> {
    FutureValue {
        matcher,
        mode: Mode::Now,
    }
}

/// Like [`future_completed_with_value`], but waits for the outcome.
pub fn future_will_complete_with_value() -> FutureValue<Anything> {
    future_will_complete_with_value_that(anything())
}

pub fn future_will_complete_with_value_that<M>(matcher: M) -> FutureValue<M> {
    FutureValue {
        matcher,
        mode: Mode::Blocking,
    }
}

impl<M: SelfDescribing> SelfDescribing for FutureValue<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a future that completed to a value that ")
            .append_description_of(&self.matcher);
    }
}

impl<C, M> Matcher<C> for FutureValue<M>
where
    C: Completion + ?Sized,
    C::Error: Debug,
    M: Matcher<C::Value>,
{
    fn check(&self, actual: &C, mismatch: &mut Description) -> bool {
        let settled = match self
            .mode
            .settle(actual, "a future that was not completed", mismatch)
        {
            Some(settled) => settled,
            None => return false,
        };
        let condition = match &settled {
            Settled::Value(value) => Condition::matched(value),
            Settled::Error(err) => {
                mismatch
                    .append_text("a future that completed exceptionally with ")
                    .append_value(err);
                Condition::not_matched()
            }
            Settled::Cancelled => {
                mismatch.append_text("a future that was cancelled");
                Condition::not_matched()
            }
        };
        condition.matching(
            &self.matcher,
            mismatch,
            "a future that completed to a value that ",
        )
    }
}

/// Matches a future that completed with an error satisfying the inner
/// matcher.
#[derive(Debug, Clone)]
pub struct FutureError<M> {
    matcher: M,
    mode: Mode,
}

pub fn future_completed_with_error() -> FutureError<Anything> {
    future_completed_with_error_that(anything())
}

pub fn future_completed_with_error_that<M>(matcher: M) -> FutureError<M> {
    FutureError {
        matcher,
        mode: Mode::Now,
    }
}

pub fn future_will_complete_with_error() -> FutureError<Anything> {
    future_will_complete_with_error_that(anything())
}

pub fn future_will_complete_with_error_that<M>(matcher: M) -> FutureError<M> {
    FutureError {
        matcher,
        mode: Mode::Blocking,
    }
}

impl<M: SelfDescribing> SelfDescribing for FutureError<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a future that completed with an error that ")
            .append_description_of(&self.matcher);
    }
}

impl<C, M> Matcher<C> for FutureError<M>
where
    C: Completion + ?Sized,
    C::Value: Debug,
    M: Matcher<C::Error>,
{
    fn check(&self, actual: &C, mismatch: &mut Description) -> bool {
        let settled = match self
            .mode
            .settle(actual, "a future that was not done", mismatch)
        {
            Some(settled) => settled,
            None => return false,
        };
        let condition = match &settled {
            Settled::Error(err) => Condition::matched(err),
            Settled::Value(value) => {
                mismatch
                    .append_text("a future that completed to a value that was ")
                    .append_value(value);
                Condition::not_matched()
            }
            Settled::Cancelled => {
                mismatch.append_text("a future that was cancelled");
                Condition::not_matched()
            }
        };
        condition.matching(
            &self.matcher,
            mismatch,
            "a future completed exceptionally with ",
        )
    }
}
