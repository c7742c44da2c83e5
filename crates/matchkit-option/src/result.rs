use std::fmt::Debug;

use matchkit_core::matchers::{anything, Anything};
use matchkit_core::{Condition, Description, Matcher, SelfDescribing};

/// Matches `Ok(v)` where `v` satisfies the inner matcher.
#[derive(Debug, Clone)]
pub struct IsOk<M> {
    matcher: M,
}

pub fn ok() -> IsOk<Anything> {
    ok_with_value_that(anything())
}

pub fn ok_with_value_that<M>(matcher: M) -> IsOk<M> {
    IsOk { matcher }
}

impl<M: SelfDescribing> SelfDescribing for IsOk<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a Result that is Ok with value that ")
            .append_description_of(&self.matcher);
    }
}

impl<T, E: Debug, M: Matcher<T>> Matcher<Result<T, E>> for IsOk<M> {
    fn check(&self, actual: &Result<T, E>, mismatch: &mut Description) -> bool {
        let condition = match actual {
            Ok(value) => Condition::matched(value),
            Err(err) => {
                mismatch.append_text("was Err with error ").append_value(err);
                Condition::not_matched()
            }
        };
        condition.matching(&self.matcher, mismatch, "was Ok with value that ")
    }
}

/// Matches `Err(e)` where `e` satisfies the inner matcher.
#[derive(Debug, Clone)]
pub struct IsErr<M> {
    matcher: M,
}

pub fn err() -> IsErr<Anything> {
    err_that(anything())
}

pub fn err_that<M>(matcher: M) -> IsErr<M> {
    IsErr { matcher }
}

impl<M: SelfDescribing> SelfDescribing for IsErr<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a Result that is Err with error that ")
            .append_description_of(&self.matcher);
    }
}

impl<T: Debug, E, M: Matcher<E>> Matcher<Result<T, E>> for IsErr<M> {
    fn check(&self, actual: &Result<T, E>, mismatch: &mut Description) -> bool {
        let condition = match actual {
            Err(err) => Condition::matched(err),
            Ok(value) => {
                mismatch.append_text("was Ok with value ").append_value(value);
                Condition::not_matched()
            }
        };
        condition.matching(&self.matcher, mismatch, "was Err with error that ")
    }
}
