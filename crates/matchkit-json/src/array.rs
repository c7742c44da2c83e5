//! Array node matchers

use matchkit_core::matchers::{anything, contains, is};
use matchkit_core::{BoxMatcher, Description, Matcher, Result, SelfDescribing};
use serde_json::Value;

use crate::literal::json_value;
use crate::node::{JsonNode, JsonNodeType, NodeMatcher};

/// Matches array nodes whose element slice satisfies a matcher.
pub struct IsJsonArray {
    matcher: Box<dyn Matcher<[Value]>>,
}

pub fn json_array() -> IsJsonArray {
    json_array_that(is(anything()))
}

/// Array node whose elements satisfy `matcher`, e.g. `contains(...)` or
/// `every_item(json_text())`.
pub fn json_array_that(matcher: impl Matcher<[Value]> + 'static) -> IsJsonArray {
    IsJsonArray {
        matcher: Box::new(matcher),
    }
}

/// Array node whose elements match `elements` one-to-one, in order.
///
/// # Errors
///
/// Fails when an element is an object literal that cannot be turned into a
/// matcher (see [`json_value`]).
pub fn json_array_from(elements: &[Value]) -> Result<IsJsonArray> {
    let matchers = elements
        .iter()
        .map(|element| json_value(element).map(|m| Box::new(m) as BoxMatcher<Value>))
        .collect::<Result<Vec<_>>>()?;
    Ok(json_array_that(contains(matchers)))
}

impl SelfDescribing for IsJsonArray {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("an array node whose elements ")
            .append_description_of(&self.matcher);
    }
}

impl NodeMatcher for IsJsonArray {
    const NODE_TYPE: JsonNodeType = JsonNodeType::Array;

    fn check_node(&self, node: JsonNode<'_>, mismatch: &mut Description) -> bool {
        let Some(Value::Array(elements)) = node.value() else {
            return false;
        };
        let mut inner = mismatch.scratch();
        if self.matcher.check(elements.as_slice(), &mut inner) {
            return true;
        }
        mismatch
            .append_text("was an array node whose elements ")
            .append_text(inner.as_str());
        false
    }
}

impl_json_matcher!(IsJsonArray);

#[cfg(test)]
mod tests {
    use super::*;
    use matchkit_core::matchers::{every_item, has_len};
    use serde_json::json;

    use crate::text::json_text;

    #[test]
    fn test_any_array() {
        assert!(Matcher::<Value>::matches(&json_array(), &json!([1, "a"])));
        assert!(!Matcher::<Value>::matches(&json_array(), &json!({})));
    }

    #[test]
    fn test_array_that() {
        let m = json_array_that(every_item(json_text()));
        assert!(Matcher::<Value>::matches(&m, &json!(["a", "b"])));

        let mut d = Description::new();
        Matcher::<Value>::describe_mismatch(&m, &json!(["a", 1]), &mut d);
        assert_eq!(
            d.as_str(),
            "was an array node whose elements an item was not a string node, but a number node"
        );
    }

    #[test]
    fn test_array_len() {
        let m = json_array_that(has_len(2));
        assert_eq!(
            m.description(),
            "an array node whose elements a collection with size <2>"
        );
        assert!(Matcher::<Value>::matches(&m, &json!([1, 2])));
    }

    #[test]
    fn test_array_from_literal() {
        let literal = json!([1, "two", null]);
        let Value::Array(elements) = &literal else {
            panic!("not an array");
        };
        let m = json_array_from(elements).unwrap();
        assert!(Matcher::<Value>::matches(&m, &literal));

        let mut d = Description::new();
        Matcher::<Value>::describe_mismatch(&m, &json!([1, "three", null]), &mut d);
        assert_eq!(
            d.as_str(),
            "was an array node whose elements item 1: was a text node with value that was \"three\""
        );
    }
}
