//! Value and logical matchers: anything, equality, negation, conjunction

use std::fmt::Debug;

use crate::description::Description;
use crate::matcher::{BoxMatcher, Matcher, SelfDescribing};

/// Matches every value. Describes itself as `ANYTHING`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

pub fn anything() -> Anything {
    Anything
}

impl SelfDescribing for Anything {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("ANYTHING");
    }
}

impl<T: ?Sized> Matcher<T> for Anything {
    fn check(&self, _actual: &T, _mismatch: &mut Description) -> bool {
        true
    }
}

/// Matches values equal to the expected one.
#[derive(Debug, Clone)]
pub struct IsEqual<V> {
    expected: V,
}

pub fn equal_to<V>(expected: V) -> IsEqual<V> {
    IsEqual { expected }
}

impl<V: Debug> SelfDescribing for IsEqual<V> {
    fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }
}

fn was<A: Debug + ?Sized>(actual: &A, mismatch: &mut Description) -> bool {
    mismatch.append_text("was ").append_value(actual);
    false
}

impl<V: PartialEq + Debug> Matcher<V> for IsEqual<V> {
    fn check(&self, actual: &V, mismatch: &mut Description) -> bool {
        actual == &self.expected || was(actual, mismatch)
    }
}

impl Matcher<str> for IsEqual<String> {
    fn check(&self, actual: &str, mismatch: &mut Description) -> bool {
        actual == self.expected || was(actual, mismatch)
    }
}

impl Matcher<str> for IsEqual<&str> {
    fn check(&self, actual: &str, mismatch: &mut Description) -> bool {
        actual == self.expected || was(actual, mismatch)
    }
}

impl Matcher<String> for IsEqual<&str> {
    fn check(&self, actual: &String, mismatch: &mut Description) -> bool {
        actual == self.expected || was(actual, mismatch)
    }
}

/// Decorator that reads better in descriptions: `is <inner>`.
#[derive(Debug, Clone)]
pub struct Is<M> {
    inner: M,
}

pub fn is<M>(inner: M) -> Is<M> {
    Is { inner }
}

/// Shorthand for `is(equal_to(value))`
pub fn is_value<V>(value: V) -> Is<IsEqual<V>> {
    is(equal_to(value))
}

impl<M: SelfDescribing> SelfDescribing for Is<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("is ")
            .append_description_of(&self.inner);
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Is<M> {
    fn check(&self, actual: &T, mismatch: &mut Description) -> bool {
        self.inner.check(actual, mismatch)
    }
}

/// Inverts a matcher.
#[derive(Debug, Clone)]
pub struct Not<M> {
    inner: M,
}

pub fn not<M>(inner: M) -> Not<M> {
    Not { inner }
}

impl<M: SelfDescribing> SelfDescribing for Not<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("not ")
            .append_description_of(&self.inner);
    }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Not<M> {
    fn check(&self, actual: &T, mismatch: &mut Description) -> bool {
        if self.inner.matches(actual) {
            mismatch
                .append_text("was ")
                .append_description_of(&self.inner);
            false
        } else {
            true
        }
    }
}

/// Matches when every inner matcher matches.
pub struct AllOf<T: ?Sized> {
    matchers: Vec<BoxMatcher<T>>,
}

pub fn all_of<T: ?Sized>(matchers: impl IntoIterator<Item = BoxMatcher<T>>) -> AllOf<T> {
    AllOf {
        matchers: matchers.into_iter().collect(),
    }
}

impl<T: ?Sized> SelfDescribing for AllOf<T> {
    fn describe_to(&self, description: &mut Description) {
        description.append_list("(", " and ", ")", self.matchers.iter());
    }
}

impl<T: ?Sized> Matcher<T> for AllOf<T> {
    /// Reports the first failing matcher, followed by its mismatch.
    fn check(&self, actual: &T, mismatch: &mut Description) -> bool {
        for matcher in &self.matchers {
            let mut inner = mismatch.scratch();
            if !matcher.check(actual, &mut inner) {
                mismatch
                    .append_description_of(matcher)
                    .append_text(" ")
                    .append_text(inner.as_str());
                return false;
            }
        }
        true
    }
}

/// Matches when at least one inner matcher matches.
pub struct AnyOf<T: ?Sized> {
    matchers: Vec<BoxMatcher<T>>,
}

pub fn any_of<T: ?Sized>(matchers: impl IntoIterator<Item = BoxMatcher<T>>) -> AnyOf<T> {
    AnyOf {
        matchers: matchers.into_iter().collect(),
    }
}

impl<T: ?Sized> SelfDescribing for AnyOf<T> {
    fn describe_to(&self, description: &mut Description) {
        description.append_list("(", " or ", ")", self.matchers.iter());
    }
}

impl<T: ?Sized> Matcher<T> for AnyOf<T> {
    fn check(&self, actual: &T, mismatch: &mut Description) -> bool {
        let mut failures = Vec::with_capacity(self.matchers.len());
        for matcher in &self.matchers {
            let mut inner = mismatch.scratch();
            if matcher.check(actual, &mut inner) {
                return true;
            }
            failures.push(inner);
        }
        mismatch.append_text("no matcher matched: ");
        for (i, failure) in failures.iter().enumerate() {
            if i > 0 {
                mismatch.append_text(", ");
            }
            mismatch.append_text(failure.as_str());
        }
        false
    }
}

/// Matches values accepted by a plain predicate function.
#[derive(Clone)]
pub struct Predicate<F> {
    description: String,
    test: F,
}

/// Wrap `test` as a matcher described by `description`.
pub fn predicate<F>(description: impl Into<String>, test: F) -> Predicate<F> {
    Predicate {
        description: description.into(),
        test,
    }
}

impl<F> SelfDescribing for Predicate<F> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(&self.description);
    }
}

impl<T, F> Matcher<T> for Predicate<F>
where
    T: Debug + ?Sized,
    F: Fn(&T) -> bool,
{
    fn check(&self, actual: &T, mismatch: &mut Description) -> bool {
        (self.test)(actual) || was(actual, mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::boxed;

    fn mismatch_of<T: ?Sized, M: Matcher<T>>(matcher: &M, actual: &T) -> String {
        let mut d = Description::new();
        matcher.describe_mismatch(actual, &mut d);
        d.into_string()
    }

    #[test]
    fn test_anything_matches_everything() {
        assert!(anything().matches(&1));
        assert!(anything().matches("text"));
        assert_eq!(anything().description(), "ANYTHING");
    }

    #[test]
    fn test_equal_to_describes_and_mismatches() {
        let m = equal_to(1);
        assert_eq!(m.description(), "<1>");
        assert!(m.matches(&1));
        assert_eq!(mismatch_of(&m, &2), "was <2>");
        assert_eq!(mismatch_of(&m, &1), "");
    }

    #[test]
    fn test_equal_to_strings() {
        assert!(equal_to("bar").matches("bar"));
        assert!(equal_to("bar").matches(&"bar".to_string()));
        assert!(equal_to("bar".to_string()).matches("bar"));
        assert_eq!(mismatch_of(&equal_to("bar"), "baz"), "was \"baz\"");
    }

    #[test]
    fn test_is_decorates_description_only() {
        let m = is_value(true);
        assert_eq!(m.description(), "is <true>");
        assert_eq!(mismatch_of(&m, &false), "was <false>");
    }

    #[test]
    fn test_not() {
        let m = not(equal_to(1));
        assert_eq!(m.description(), "not <1>");
        assert!(m.matches(&2));
        assert_eq!(mismatch_of(&m, &1), "was <1>");
    }

    #[test]
    fn test_all_of_reports_first_failure() {
        let m: AllOf<i32> = all_of([
            boxed(predicate("positive", |n: &i32| *n > 0)),
            boxed(equal_to(3)),
        ]);
        assert_eq!(m.description(), "(positive and <3>)");
        assert!(m.matches(&3));
        assert_eq!(mismatch_of(&m, &4), "<3> was <4>");
        assert_eq!(mismatch_of(&m, &-1), "positive was <-1>");
    }

    #[test]
    fn test_any_of() {
        let m: AnyOf<i32> = any_of([boxed(equal_to(1)), boxed(equal_to(2))]);
        assert_eq!(m.description(), "(<1> or <2>)");
        assert!(m.matches(&2));
        assert_eq!(
            mismatch_of(&m, &3),
            "no matcher matched: was <3>, was <3>"
        );
    }
}
