//! Number node matchers
//!
//! A `serde_json::Number` may hold an `i64`, a `u64` or an `f64`. Typed
//! matchers project the number first; a number that does not fit the
//! projection is a mismatch, never a panic.

use matchkit_core::matchers::{anything, equal_to, is};
use matchkit_core::{Description, Matcher, SelfDescribing};
use serde_json::{Number, Value};

use crate::node::{JsonNode, JsonNodeType, NodeMatcher};

/// Matches number nodes whose value satisfies a matcher over [`Number`].
pub struct IsJsonNumber {
    matcher: Box<dyn Matcher<Number>>,
}

impl IsJsonNumber {
    pub fn new(matcher: impl Matcher<Number> + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
        }
    }
}

/// Any number node
pub fn json_number() -> IsJsonNumber {
    IsJsonNumber::new(is(anything()))
}

/// A number node equal to `n` in whichever representation `n` holds
pub fn json_number_from(n: &Number) -> IsJsonNumber {
    if let Some(i) = n.as_i64() {
        json_int(i)
    } else if let Some(u) = n.as_u64() {
        json_uint(u)
    } else if let Some(f) = n.as_f64() {
        json_float(f)
    } else {
        json_number()
    }
}

pub fn json_int(expected: i64) -> IsJsonNumber {
    json_int_that(is(equal_to(expected)))
}

pub fn json_int_that(matcher: impl Matcher<i64> + 'static) -> IsJsonNumber {
    IsJsonNumber::new(Projected::new(matcher, Number::as_i64, "i64"))
}

pub fn json_uint(expected: u64) -> IsJsonNumber {
    json_uint_that(is(equal_to(expected)))
}

pub fn json_uint_that(matcher: impl Matcher<u64> + 'static) -> IsJsonNumber {
    IsJsonNumber::new(Projected::new(matcher, Number::as_u64, "u64"))
}

pub fn json_float(expected: f64) -> IsJsonNumber {
    json_float_that(is(equal_to(expected)))
}

pub fn json_float_that(matcher: impl Matcher<f64> + 'static) -> IsJsonNumber {
    IsJsonNumber::new(Projected::new(matcher, Number::as_f64, "f64"))
}

impl SelfDescribing for IsJsonNumber {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a number node with value that ")
            .append_description_of(&self.matcher);
    }
}

impl NodeMatcher for IsJsonNumber {
    const NODE_TYPE: JsonNodeType = JsonNodeType::Number;

    fn check_node(&self, node: JsonNode<'_>, mismatch: &mut Description) -> bool {
        let Some(Value::Number(number)) = node.value() else {
            return false;
        };
        let mut inner = mismatch.scratch();
        if self.matcher.check(number, &mut inner) {
            return true;
        }
        mismatch
            .append_text("was a number node with value that ")
            .append_text(inner.as_str());
        false
    }
}

impl_json_matcher!(IsJsonNumber);

/// Adapts a matcher over a primitive to a matcher over [`Number`].
struct Projected<M, P> {
    matcher: M,
    project: fn(&Number) -> Option<P>,
    target: &'static str,
}

impl<M, P> Projected<M, P> {
    fn new(matcher: M, project: fn(&Number) -> Option<P>, target: &'static str) -> Self {
        Self {
            matcher,
            project,
            target,
        }
    }
}

impl<M: SelfDescribing, P> SelfDescribing for Projected<M, P> {
    fn describe_to(&self, description: &mut Description) {
        self.matcher.describe_to(description);
    }
}

impl<M: Matcher<P>, P> Matcher<Number> for Projected<M, P> {
    fn check(&self, actual: &Number, mismatch: &mut Description) -> bool {
        match (self.project)(actual) {
            Some(value) => self.matcher.check(&value, mismatch),
            None => {
                mismatch
                    .append_text("was <")
                    .append_text(actual.to_string())
                    .append_text(">, which is not representable as ")
                    .append_text(self.target);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchkit_core::matchers::{close_to, greater_than};
    use serde_json::json;

    fn mismatch_of(matcher: &IsJsonNumber, actual: &Value) -> String {
        let mut d = Description::new();
        Matcher::<Value>::describe_mismatch(matcher, actual, &mut d);
        d.into_string()
    }

    #[test]
    fn test_int_matches_and_describes() {
        let m = json_int(1);
        assert!(Matcher::<Value>::matches(&m, &json!(1)));
        assert_eq!(m.description(), "a number node with value that is <1>");
        assert_eq!(
            mismatch_of(&m, &json!(2)),
            "was a number node with value that was <2>"
        );
    }

    #[test]
    fn test_type_mismatch() {
        assert_eq!(
            mismatch_of(&json_number(), &json!("1")),
            "was not a number node, but a string node"
        );
    }

    #[test]
    fn test_float_does_not_project_to_int() {
        assert_eq!(
            mismatch_of(&json_int(1), &json!(1.5)),
            "was a number node with value that was <1.5>, which is not representable as i64"
        );
    }

    #[test]
    fn test_large_unsigned() {
        let m = json_uint(u64::MAX);
        assert!(Matcher::<Value>::matches(&m, &json!(u64::MAX)));
        assert_eq!(
            mismatch_of(&json_int(0), &json!(u64::MAX)),
            format!(
                "was a number node with value that was <{}>, which is not representable as i64",
                u64::MAX
            )
        );
    }

    #[test]
    fn test_float_matchers() {
        assert!(Matcher::<Value>::matches(&json_float(0.5), &json!(0.5)));
        assert!(Matcher::<Value>::matches(
            &json_float_that(close_to(1.0, 0.1)),
            &json!(1.05)
        ));
        // integers widen to f64
        assert!(Matcher::<Value>::matches(&json_float(2.0), &json!(2)));
    }

    #[test]
    fn test_int_that() {
        let m = json_int_that(greater_than(3));
        assert!(Matcher::<Value>::matches(&m, &json!(4)));
        assert!(!Matcher::<Value>::matches(&m, &json!(3)));
    }

    #[test]
    fn test_number_from_literal() {
        let n = json!(-7);
        let Value::Number(number) = &n else {
            panic!("not a number");
        };
        assert_eq!(json_number_from(number).description(), "a number node with value that is <-7>");
    }
}
