//! Object node matcher: the JSON binding of the composite engine

use std::sync::Arc;

use matchkit_core::composite::{
    defer_check_owned, describe_members, describe_nested_mismatches, Members,
};
use matchkit_core::{Description, Result, SelfDescribing};
use serde_json::Value;

use crate::node::{JsonMatcher, JsonNode, JsonNodeType, NodeMatcher};

/// Matches object nodes member by member.
///
/// Members are checked against the node's field of the same name; a field
/// that is absent is presented to its matcher as [`JsonNode::Missing`].
/// Fields the object has but no member names are ignored.
#[derive(Debug, Clone, Default)]
pub struct IsJsonObject {
    members: Members<dyn JsonMatcher>,
}

/// An object node with no member constraints
pub fn json_object() -> IsJsonObject {
    IsJsonObject::default()
}

impl IsJsonObject {
    /// Copy of this matcher with one more member. `self` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::DuplicateMember` when `key` is already present.
    pub fn with(
        &self,
        key: impl Into<String>,
        matcher: impl JsonMatcher + 'static,
    ) -> Result<Self> {
        Ok(Self {
            members: self.members.append(key, Arc::new(matcher))?,
        })
    }

    pub fn members(&self) -> &Members<dyn JsonMatcher> {
        &self.members
    }
}

/// Identifier-like keys print bare; anything else prints as a JSON string.
pub fn json_key(key: &str, description: &mut Description) {
    if is_identifier(key) {
        description.append_text(key);
    } else {
        description.append_text(Value::String(key.to_owned()).to_string());
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl SelfDescribing for IsJsonObject {
    fn describe_to(&self, description: &mut Description) {
        describe_members(self.members.pairs(), description, json_key);
    }
}

impl NodeMatcher for IsJsonObject {
    const NODE_TYPE: JsonNodeType = JsonNodeType::Object;

    fn check_node(&self, node: JsonNode<'_>, mismatch: &mut Description) -> bool {
        let mismatches = self.members.collect_mismatches(|member| {
            defer_check_owned(member.matcher(), node.get(member.name()))
        });
        if mismatches.is_empty() {
            return true;
        }
        if mismatch.is_discarding() {
            return false;
        }
        describe_nested_mismatches(self.members.names(), &mismatches, mismatch, json_key);
        false
    }
}

impl_json_matcher!(IsJsonObject);

#[cfg(test)]
mod tests {
    use super::*;
    use matchkit_core::{ExErrorKind, Matcher};
    use serde_json::json;

    use crate::boolean::json_bool;
    use crate::number::json_int;

    #[test]
    fn test_identifier_keys() {
        assert!(is_identifier("foo"));
        assert!(is_identifier("_foo1"));
        assert!(!is_identifier("1foo"));
        assert!(!is_identifier("two words"));
        assert!(!is_identifier(""));

        let mut d = Description::new();
        json_key("two words", &mut d);
        assert_eq!(d.as_str(), "\"two words\"");
    }

    #[test]
    fn test_with_is_copy_on_append() {
        let base = json_object().with("foo", json_int(1)).unwrap();
        let extended = base.with("bar", json_bool(true)).unwrap();
        assert_eq!(base.members().len(), 1);
        assert_eq!(extended.members().len(), 2);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let base = json_object().with("foo", json_int(1)).unwrap();
        let err = base.with("foo", json_int(2)).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::DuplicateMember);
        assert_eq!(err.member(), Some("foo"));
        assert_eq!(base.members().len(), 1);
    }

    #[test]
    fn test_empty_object_matches_any_object() {
        assert!(Matcher::<Value>::matches(&json_object(), &json!({"a": 1})));
        assert_eq!(json_object().description(), "{\n}");
    }
}
