//! Matchers that bridge into the JSON tree from text or from serializable
//! values

use matchkit_core::{Condition, Description, Matcher, SelfDescribing};
use serde::Serialize;
use serde_json::Value;

use crate::literal::parse_json;

/// Matches strings that parse as JSON and whose tree satisfies a matcher.
#[derive(Debug, Clone)]
pub struct IsJsonStringMatching<M> {
    matcher: M,
}

pub fn is_json_string_matching<M: Matcher<Value>>(matcher: M) -> IsJsonStringMatching<M> {
    IsJsonStringMatching { matcher }
}

impl<M: SelfDescribing> SelfDescribing for IsJsonStringMatching<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("A JSON string that matches ")
            .append_description_of(&self.matcher);
    }
}

impl<M: Matcher<Value>> Matcher<str> for IsJsonStringMatching<M> {
    fn check(&self, actual: &str, mismatch: &mut Description) -> bool {
        match parse_json(actual) {
            Ok(tree) => Condition::matched(&tree).matching(&self.matcher, mismatch, ""),
            Err(err) => {
                mismatch
                    .append_text(" but the string was not valid JSON ")
                    .append_value(&err.to_string());
                false
            }
        }
    }
}

impl<M: Matcher<Value>> Matcher<String> for IsJsonStringMatching<M> {
    fn check(&self, actual: &String, mismatch: &mut Description) -> bool {
        Matcher::<str>::check(self, actual.as_str(), mismatch)
    }
}

/// Matches any serializable value by its `serde_json` tree.
#[derive(Debug, Clone)]
pub struct JsonSerialized<M> {
    matcher: M,
}

pub fn json_serialized<M: Matcher<Value>>(matcher: M) -> JsonSerialized<M> {
    JsonSerialized { matcher }
}

impl<M: SelfDescribing> SelfDescribing for JsonSerialized<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a value serializing to ")
            .append_description_of(&self.matcher);
    }
}

impl<T, M> Matcher<T> for JsonSerialized<M>
where
    T: Serialize + ?Sized,
    M: Matcher<Value>,
{
    fn check(&self, actual: &T, mismatch: &mut Description) -> bool {
        match serde_json::to_value(actual) {
            Ok(tree) => Condition::matched(&tree).matching(&self.matcher, mismatch, ""),
            Err(err) => {
                mismatch
                    .append_text("could not be serialized: ")
                    .append_text(err.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::number::json_int;
    use crate::object::json_object;

    #[test]
    fn test_string_matching_valid_json() {
        let m = is_json_string_matching(json_int(1));
        assert_eq!(
            m.description(),
            "A JSON string that matches a number node with value that is <1>"
        );
        assert!(m.matches("1"));
        assert!(m.matches(&" 1 ".to_string()));

        let mut d = Description::new();
        m.describe_mismatch("2", &mut d);
        assert_eq!(d.as_str(), "was a number node with value that was <2>");
    }

    #[test]
    fn test_string_matching_invalid_json() {
        let m = is_json_string_matching(json_int(1));
        let mut d = Description::new();
        m.describe_mismatch("{", &mut d);
        assert!(d.as_str().starts_with(" but the string was not valid JSON \"EOF while parsing"));
    }

    #[test]
    fn test_serialized() {
        let m = json_serialized(json_object().with("a", json_int(1)).unwrap());
        assert!(m.matches(&HashMap::from([("a", 1)])));

        let mut d = Description::new();
        m.describe_mismatch(&HashMap::from([("a", 2)]), &mut d);
        assert_eq!(
            d.as_str(),
            "{\n  a: was a number node with value that was <2>\n}"
        );
    }

    #[test]
    fn test_serialization_failure_is_a_mismatch() {
        // non-string map keys cannot become JSON object keys
        let m = json_serialized(json_object());
        let mut d = Description::new();
        m.describe_mismatch(&HashMap::from([((1, 2), 3)]), &mut d);
        assert!(d.as_str().starts_with("could not be serialized: "));
    }
}
