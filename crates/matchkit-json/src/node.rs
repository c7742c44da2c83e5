//! JSON node model and the type-check shared by every JSON matcher

use std::fmt;

use matchkit_core::language::add_article;
use matchkit_core::{Description, Matcher, SelfDescribing};
use serde_json::Value;

/// Kind tag of a JSON node.
///
/// `Missing` is the kind of a lookup that found nothing; it is distinct from
/// an explicit `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonNodeType {
    Array,
    Boolean,
    Missing,
    Null,
    Number,
    Object,
    String,
}

impl JsonNodeType {
    /// Lowercase name used in mismatch text
    pub fn name(&self) -> &'static str {
        match self {
            JsonNodeType::Array => "array",
            JsonNodeType::Boolean => "boolean",
            JsonNodeType::Missing => "missing",
            JsonNodeType::Null => "null",
            JsonNodeType::Number => "number",
            JsonNodeType::Object => "object",
            JsonNodeType::String => "string",
        }
    }
}

impl fmt::Display for JsonNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON value as seen by a matcher: either present or structurally absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNode<'a> {
    Missing,
    Present(&'a Value),
}

impl<'a> JsonNode<'a> {
    pub fn node_type(&self) -> JsonNodeType {
        match self {
            JsonNode::Missing => JsonNodeType::Missing,
            JsonNode::Present(value) => value_type(value),
        }
    }

    /// Look up an object member. Anything that is not an object, or an
    /// object without `key`, yields `Missing`.
    pub fn get(&self, key: &str) -> JsonNode<'a> {
        match *self {
            JsonNode::Present(Value::Object(map)) => map.get(key).into(),
            _ => JsonNode::Missing,
        }
    }

    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            JsonNode::Missing => None,
            JsonNode::Present(value) => Some(value),
        }
    }
}

impl<'a> From<&'a Value> for JsonNode<'a> {
    fn from(value: &'a Value) -> Self {
        JsonNode::Present(value)
    }
}

impl<'a> From<Option<&'a Value>> for JsonNode<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(JsonNode::Missing, JsonNode::Present)
    }
}

pub fn value_type(value: &Value) -> JsonNodeType {
    match value {
        Value::Null => JsonNodeType::Null,
        Value::Bool(_) => JsonNodeType::Boolean,
        Value::Number(_) => JsonNodeType::Number,
        Value::String(_) => JsonNodeType::String,
        Value::Array(_) => JsonNodeType::Array,
        Value::Object(_) => JsonNodeType::Object,
    }
}

/// A matcher usable both on a bare [`Value`] and on a [`JsonNode`] produced
/// by an object lookup.
pub trait JsonMatcher: Matcher<Value> + for<'n> Matcher<JsonNode<'n>> {}

impl<M> JsonMatcher for M where M: Matcher<Value> + for<'n> Matcher<JsonNode<'n>> + ?Sized {}

/// Boxed JSON matcher, as produced by [`crate::json_value`]
pub type BoxJsonMatcher = Box<dyn JsonMatcher>;

/// Matcher for one node kind. `check_node` only sees nodes of `NODE_TYPE`.
pub(crate) trait NodeMatcher: SelfDescribing {
    const NODE_TYPE: JsonNodeType;

    fn check_node(&self, node: JsonNode<'_>, mismatch: &mut Description) -> bool;
}

pub(crate) fn check_typed<M: NodeMatcher>(
    matcher: &M,
    node: JsonNode<'_>,
    mismatch: &mut Description,
) -> bool {
    let actual = node.node_type();
    if actual != M::NODE_TYPE {
        mismatch
            .append_text("was not ")
            .append_text(add_article(M::NODE_TYPE.name()))
            .append_text(" node, but ")
            .append_text(add_article(actual.name()))
            .append_text(" node");
        return false;
    }
    matcher.check_node(node, mismatch)
}

/// Implement `Matcher<Value>` and `Matcher<JsonNode>` for node matchers.
macro_rules! impl_json_matcher {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'n> ::matchkit_core::Matcher<$crate::node::JsonNode<'n>> for $ty {
                fn check(
                    &self,
                    actual: &$crate::node::JsonNode<'n>,
                    mismatch: &mut ::matchkit_core::Description,
                ) -> bool {
                    $crate::node::check_typed(self, *actual, mismatch)
                }
            }

            impl ::matchkit_core::Matcher<::serde_json::Value> for $ty {
                fn check(
                    &self,
                    actual: &::serde_json::Value,
                    mismatch: &mut ::matchkit_core::Description,
                ) -> bool {
                    $crate::node::check_typed(
                        self,
                        $crate::node::JsonNode::Present(actual),
                        mismatch,
                    )
                }
            }
        )*
    };
}
