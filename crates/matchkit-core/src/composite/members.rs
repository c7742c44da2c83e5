//! Ordered, duplicate-free list of named sub-matchers

use std::fmt;
use std::sync::Arc;

use matchkit_core_types::schema::{OP_ADD_MEMBER, OP_COMPOSITE_CHECK};

use crate::errors::{ExError, MatchError, Result};

use super::collector::{DeferredMismatch, MismatchCollector};

/// One (name, sub-matcher) binding inside a composite.
pub struct NamedMember<M: ?Sized> {
    name: String,
    matcher: Arc<M>,
}

impl<M: ?Sized> NamedMember<M> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }
}

impl<M: ?Sized> Clone for NamedMember<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            matcher: Arc::clone(&self.matcher),
        }
    }
}

/// The declared members of a composite matcher, in declaration order.
///
/// Appending is a functional update: [`Members::append`] returns a new list
/// and leaves the receiver untouched, so a partially built composite can be
/// reused as a prefix. Sub-matchers are shared between copies.
pub struct Members<M: ?Sized> {
    entries: Vec<NamedMember<M>>,
}

impl<M: ?Sized> Members<M> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Return a copy of this list with `name` bound to `matcher` at the end.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::DuplicateMember` if `name` is already declared.
    /// Existing bindings are never overwritten.
    pub fn append(&self, name: impl Into<String>, matcher: Arc<M>) -> Result<Self> {
        let name = name.into();
        if self.contains(&name) {
            let err: ExError = MatchError::DuplicateMember { name }.into();
            crate::log_op_error!(OP_ADD_MEMBER, err.clone());
            return Err(err);
        }

        let mut entries = self.entries.clone();
        entries.push(NamedMember { name, matcher });
        Ok(Self { entries })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|member| member.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedMember<M>> {
        self.entries.iter()
    }

    /// Member names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|member| member.name.as_str())
    }

    /// (name, sub-matcher) pairs in declaration order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &M)> {
        self.entries
            .iter()
            .map(|member| (member.name.as_str(), &*member.matcher))
    }

    /// Evaluate every member and collect the failures.
    ///
    /// `evaluate` is called once per member, in declaration order, and returns
    /// the member's deferred mismatch when it fails. All members are
    /// evaluated even after the first failure.
    pub fn collect_mismatches<'a, F>(&'a self, mut evaluate: F) -> MismatchCollector<'a>
    where
        F: FnMut(&'a NamedMember<M>) -> Option<DeferredMismatch<'a>>,
    {
        let mut collector = MismatchCollector::new();
        for member in &self.entries {
            if let Some(render) = evaluate(member) {
                collector.record_deferred(member.name.as_str(), render);
            }
        }
        tracing::trace!(
            component = module_path!(),
            op = OP_COMPOSITE_CHECK,
            members = self.entries.len(),
            mismatches = collector.len(),
        );
        collector
    }
}

impl<M: ?Sized> Default for Members<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ?Sized> Clone for Members<M> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<M: ?Sized> fmt::Debug for Members<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
