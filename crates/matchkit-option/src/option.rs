use std::fmt::Debug;

use matchkit_core::matchers::{anything, Anything};
use matchkit_core::{Condition, Description, Matcher, SelfDescribing};

/// Matches `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyOption;

pub fn empty_option() -> EmptyOption {
    EmptyOption
}

impl SelfDescribing for EmptyOption {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("an Option that's empty");
    }
}

impl<T: Debug> Matcher<Option<T>> for EmptyOption {
    fn check(&self, actual: &Option<T>, mismatch: &mut Description) -> bool {
        match actual {
            None => true,
            Some(value) => {
                mismatch.append_text("was present with ").append_value(value);
                false
            }
        }
    }
}

/// Matches `Some(v)` where `v` satisfies the inner matcher.
#[derive(Debug, Clone)]
pub struct PresentOption<M> {
    matcher: M,
}

pub fn option_with_value() -> PresentOption<Anything> {
    option_with_value_that(anything())
}

pub fn option_with_value_that<M>(matcher: M) -> PresentOption<M> {
    PresentOption { matcher }
}

impl<M: SelfDescribing> SelfDescribing for PresentOption<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("an Option with a value that ")
            .append_description_of(&self.matcher);
    }
}

impl<T, M: Matcher<T>> Matcher<Option<T>> for PresentOption<M> {
    fn check(&self, actual: &Option<T>, mismatch: &mut Description) -> bool {
        let condition = match actual {
            Some(value) => Condition::matched(value),
            None => {
                mismatch.append_text("was not present");
                Condition::not_matched()
            }
        };
        condition.matching(&self.matcher, mismatch, "was an Option whose value ")
    }
}
