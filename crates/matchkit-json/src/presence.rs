//! Null and missing node matchers

use matchkit_core::{Description, SelfDescribing};

use crate::node::{JsonNode, JsonNodeType, NodeMatcher};

/// Matches an explicit JSON `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsJsonNull;

pub fn json_null() -> IsJsonNull {
    IsJsonNull
}

impl SelfDescribing for IsJsonNull {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("a null node");
    }
}

impl NodeMatcher for IsJsonNull {
    const NODE_TYPE: JsonNodeType = JsonNodeType::Null;

    fn check_node(&self, _node: JsonNode<'_>, _mismatch: &mut Description) -> bool {
        true
    }
}

/// Matches an absent object member.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsJsonMissing;

pub fn json_missing() -> IsJsonMissing {
    IsJsonMissing
}

impl SelfDescribing for IsJsonMissing {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("a missing node");
    }
}

impl NodeMatcher for IsJsonMissing {
    const NODE_TYPE: JsonNodeType = JsonNodeType::Missing;

    fn check_node(&self, _node: JsonNode<'_>, _mismatch: &mut Description) -> bool {
        true
    }
}

impl_json_matcher!(IsJsonNull, IsJsonMissing);
