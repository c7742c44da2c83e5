//! Function-projection matcher: check `f(value)` instead of `value`

use std::fmt::Debug;
use std::marker::PhantomData;

use matchkit_core::{Description, Matcher, SelfDescribing};

use crate::access::catch_panic;

/// Matches values whose image under a named function satisfies a matcher.
#[derive(Debug, Clone)]
pub struct Mapped<F, M, B> {
    name: String,
    function: F,
    matcher: M,
    _image: PhantomData<fn() -> B>,
}

/// `name` labels the function in descriptions, e.g. `"str::len"`.
pub fn mapped<A, B, F, M>(name: impl Into<String>, function: F, matcher: M) -> Mapped<F, M, B>
where
    A: ?Sized,
    F: Fn(&A) -> B,
    M: Matcher<B>,
{
    Mapped {
        name: name.into(),
        function,
        matcher,
        _image: PhantomData,
    }
}

impl<F, M: SelfDescribing, B> SelfDescribing for Mapped<F, M, B> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text(&self.name)
            .append_text("(value) = ")
            .append_description_of(&self.matcher);
    }
}

impl<A, B, F, M> Matcher<A> for Mapped<F, M, B>
where
    A: Debug + ?Sized,
    F: Fn(&A) -> B,
    M: Matcher<B>,
{
    fn check(&self, actual: &A, mismatch: &mut Description) -> bool {
        let image = match catch_panic(&self.name, || (self.function)(actual)) {
            Ok(image) => image,
            Err(message) => {
                mismatch
                    .append_text(&self.name)
                    .append_text(" threw panic with message ")
                    .append_value(&message);
                return false;
            }
        };
        let mut inner = mismatch.scratch();
        if self.matcher.check(&image, &mut inner) {
            return true;
        }
        mismatch
            .append_text(&self.name)
            .append_text("(")
            .append_value(actual)
            .append_text(") ")
            .append_text(inner.as_str());
        false
    }
}
