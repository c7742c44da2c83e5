//! Boolean node matchers

use matchkit_core::matchers::{anything, equal_to, is};
use matchkit_core::{Description, Matcher, SelfDescribing};
use serde_json::Value;

use crate::node::{JsonNode, JsonNodeType, NodeMatcher};

pub struct IsJsonBoolean {
    matcher: Box<dyn Matcher<bool>>,
}

pub fn json_boolean() -> IsJsonBoolean {
    json_boolean_that(is(anything()))
}

pub fn json_bool(expected: bool) -> IsJsonBoolean {
    json_boolean_that(is(equal_to(expected)))
}

pub fn json_boolean_that(matcher: impl Matcher<bool> + 'static) -> IsJsonBoolean {
    IsJsonBoolean {
        matcher: Box::new(matcher),
    }
}

impl SelfDescribing for IsJsonBoolean {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a boolean node with value that ")
            .append_description_of(&self.matcher);
    }
}

impl NodeMatcher for IsJsonBoolean {
    const NODE_TYPE: JsonNodeType = JsonNodeType::Boolean;

    fn check_node(&self, node: JsonNode<'_>, mismatch: &mut Description) -> bool {
        let Some(Value::Bool(value)) = node.value() else {
            return false;
        };
        let mut inner = mismatch.scratch();
        if self.matcher.check(value, &mut inner) {
            return true;
        }
        mismatch
            .append_text("was a boolean node with value that ")
            .append_text(inner.as_str());
        false
    }
}

impl_json_matcher!(IsJsonBoolean);
