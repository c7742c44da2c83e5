//! Runtime type checks over `dyn Any`

use std::any::Any;
use std::marker::PhantomData;

use crate::condition::Condition;
use crate::description::Description;
use crate::language::{add_article, short_type_name};
use crate::matcher::{BoxMatcher, Matcher, SelfDescribing};

/// Matches a `dyn Any` holding a `T`, optionally checking the downcast value.
pub struct InstanceOf<T: 'static> {
    inner: Option<BoxMatcher<T>>,
    _type: PhantomData<fn() -> T>,
}

pub fn instance_of<T: 'static>() -> InstanceOf<T> {
    InstanceOf {
        inner: None,
        _type: PhantomData,
    }
}

pub fn instance_of_that<T: 'static, M: Matcher<T> + 'static>(matcher: M) -> InstanceOf<T> {
    InstanceOf {
        inner: Some(Box::new(matcher)),
        _type: PhantomData,
    }
}

impl<T: 'static> SelfDescribing for InstanceOf<T> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(add_article(&short_type_name::<T>()));
        if let Some(inner) = &self.inner {
            description
                .append_text(" that ")
                .append_description_of(inner);
        }
    }
}

impl<T: 'static> Matcher<dyn Any> for InstanceOf<T> {
    fn check(&self, actual: &dyn Any, mismatch: &mut Description) -> bool {
        let condition = match actual.downcast_ref::<T>() {
            Some(value) => Condition::matched(value),
            None => {
                mismatch
                    .append_text("was not an instance of ")
                    .append_text(short_type_name::<T>());
                Condition::not_matched()
            }
        };
        match &self.inner {
            Some(inner) => condition.matching(inner, mismatch, ""),
            None => matches!(condition, Condition::Matched(_)),
        }
    }
}
