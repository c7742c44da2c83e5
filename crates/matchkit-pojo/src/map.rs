//! String-keyed map matcher

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use matchkit_core::composite::{
    bare_key, defer_check, describe_members, describe_nested_mismatches, DeferredMismatch,
    Members,
};
use matchkit_core::{Description, Matcher, Result, SelfDescribing};

use crate::access::AccessError;

/// Matches maps entry by entry. A key the map lacks renders `did not exist`.
pub struct IsMap<V> {
    members: Members<dyn Matcher<V>>,
}

pub fn map_with<V>() -> IsMap<V> {
    IsMap {
        members: Members::new(),
    }
}

impl<V> IsMap<V> {
    /// Copy of this matcher constraining one more key.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::DuplicateMember` when `key` is already present.
    pub fn with(&self, key: impl Into<String>, matcher: impl Matcher<V> + 'static) -> Result<Self> {
        Ok(Self {
            members: self.members.append(key, Arc::new(matcher))?,
        })
    }

    fn check_entries<'a>(
        &self,
        lookup: impl Fn(&str) -> Option<&'a V>,
        mismatch: &mut Description,
    ) -> bool
    where
        V: 'a,
    {
        let mismatches = self.members.collect_mismatches(|member| match lookup(member.name()) {
            Some(value) => defer_check(member.matcher(), value),
            None => {
                let render: DeferredMismatch<'_> = Box::new(|description: &mut Description| {
                    description.append_text(AccessError::Missing.to_string());
                });
                Some(render)
            }
        });
        if mismatches.is_empty() {
            return true;
        }
        if mismatch.is_discarding() {
            return false;
        }
        describe_nested_mismatches(self.members.names(), &mismatches, mismatch, bare_key);
        false
    }
}

impl<V> Clone for IsMap<V> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
        }
    }
}

impl<V> Default for IsMap<V> {
    fn default() -> Self {
        map_with()
    }
}

impl<V> fmt::Debug for IsMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IsMap")
            .field("members", &self.members)
            .finish()
    }
}

impl<V> SelfDescribing for IsMap<V> {
    fn describe_to(&self, description: &mut Description) {
        describe_members(self.members.pairs(), description, bare_key);
    }
}

impl<V, S: BuildHasher> Matcher<HashMap<String, V, S>> for IsMap<V> {
    fn check(&self, actual: &HashMap<String, V, S>, mismatch: &mut Description) -> bool {
        self.check_entries(|key| actual.get(key), mismatch)
    }
}

impl<V> Matcher<BTreeMap<String, V>> for IsMap<V> {
    fn check(&self, actual: &BTreeMap<String, V>, mismatch: &mut Description) -> bool {
        self.check_entries(|key| actual.get(key), mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchkit_core::matchers::{equal_to, greater_than};
    use matchkit_core::ExErrorKind;

    fn scores() -> IsMap<i32> {
        map_with()
            .with("alice", equal_to(1))
            .and_then(|m| m.with("bob", greater_than(5)))
            .and_then(|m| m.with("carol", equal_to(3)))
            .unwrap()
    }

    #[test]
    fn test_hash_map() {
        let actual = HashMap::from([
            ("alice".to_string(), 1),
            ("bob".to_string(), 2),
            ("carol".to_string(), 3),
        ]);
        let mut d = Description::new();
        assert!(!scores().check(&actual, &mut d));
        assert_eq!(d.as_str(), "{\n  ...\n  bob: <2> was less than <5>\n  ...\n}");
    }

    #[test]
    fn test_btree_map_missing_key() {
        let actual = BTreeMap::from([("alice".to_string(), 1), ("bob".to_string(), 9)]);
        let mut d = Description::new();
        assert!(!scores().check(&actual, &mut d));
        assert_eq!(d.as_str(), "{\n  ...\n  carol: did not exist\n}");
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            scores().description(),
            "{\n  alice: <1>\n  bob: a value greater than <5>\n  carol: <3>\n}"
        );
    }

    #[test]
    fn test_duplicate_key() {
        let err = scores().with("bob", equal_to(0)).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::DuplicateMember);
    }
}
