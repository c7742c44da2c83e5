//! String ("text") node matchers

use matchkit_core::matchers::{anything, equal_to, is};
use matchkit_core::{Description, Matcher, SelfDescribing};
use serde_json::Value;

use crate::node::{JsonNode, JsonNodeType, NodeMatcher};

/// Matches string nodes whose text satisfies a matcher over `str`.
pub struct IsJsonText {
    matcher: Box<dyn Matcher<str>>,
}

pub fn json_text() -> IsJsonText {
    json_text_that(is(anything()))
}

pub fn json_text_eq(expected: impl Into<String>) -> IsJsonText {
    json_text_that(is(equal_to(expected.into())))
}

pub fn json_text_that(matcher: impl Matcher<str> + 'static) -> IsJsonText {
    IsJsonText {
        matcher: Box::new(matcher),
    }
}

impl SelfDescribing for IsJsonText {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a text node with value that ")
            .append_description_of(&self.matcher);
    }
}

impl NodeMatcher for IsJsonText {
    const NODE_TYPE: JsonNodeType = JsonNodeType::String;

    fn check_node(&self, node: JsonNode<'_>, mismatch: &mut Description) -> bool {
        let Some(Value::String(text)) = node.value() else {
            return false;
        };
        let mut inner = mismatch.scratch();
        if self.matcher.check(text.as_str(), &mut inner) {
            return true;
        }
        mismatch
            .append_text("was a text node with value that ")
            .append_text(inner.as_str());
        false
    }
}

impl_json_matcher!(IsJsonText);
