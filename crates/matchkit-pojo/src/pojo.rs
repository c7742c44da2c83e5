//! Struct matcher: the accessor-based binding of the composite engine

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use matchkit_core::composite::{
    bare_key, defer_check, defer_check_owned, describe_members, describe_nested_mismatches,
    DeferredMismatch, Members,
};
use matchkit_core::language::short_type_name;
use matchkit_core::{Description, Matcher, Result, SelfDescribing};

use crate::access::{catch_panic, Access, AccessError};

/// One member of an [`IsPojo`]: reads a value from `A` and checks it.
pub trait PojoMember<A: ?Sized>: SelfDescribing {
    /// Read the member named `name` from `actual` and check it. Returns the
    /// deferred mismatch when the value fails or cannot be read.
    fn evaluate<'a>(&'a self, name: &str, actual: &'a A) -> Option<DeferredMismatch<'a>>;
}

struct AccessorMember<F, M, V> {
    accessor: F,
    matcher: M,
    _value: PhantomData<fn() -> V>,
}

impl<F, M: SelfDescribing, V> SelfDescribing for AccessorMember<F, M, V> {
    fn describe_to(&self, description: &mut Description) {
        self.matcher.describe_to(description);
    }
}

impl<A, F, M, V> PojoMember<A> for AccessorMember<F, M, V>
where
    A: ?Sized,
    F: for<'x> Fn(&'x A) -> Access<'x, V>,
    M: Matcher<V>,
    V: 'static,
{
    fn evaluate<'a>(&'a self, name: &str, actual: &'a A) -> Option<DeferredMismatch<'a>> {
        let access = catch_panic(name, || (self.accessor)(actual))
            .unwrap_or_else(|message| Access::Failed(AccessError::Panicked { message }));
        match access {
            Access::Borrowed(value) => defer_check(&self.matcher, value),
            Access::Owned(value) => defer_check_owned(&self.matcher, value),
            Access::Failed(err) => {
                let render: DeferredMismatch<'a> =
                    Box::new(move |description: &mut Description| {
                        description.append_text(err.to_string());
                    });
                Some(render)
            }
        }
    }
}

/// Matches a value of type `A` member by member.
///
/// Rendered with the short type name in front of the member block:
///
/// ```text
/// Person {
///   ...
///   age: was <41>
/// }
/// ```
pub struct IsPojo<A: ?Sized> {
    type_name: String,
    members: Members<dyn PojoMember<A>>,
}

pub fn pojo<A: ?Sized>() -> IsPojo<A> {
    IsPojo {
        type_name: short_type_name::<A>(),
        members: Members::new(),
    }
}

impl<A: ?Sized> IsPojo<A> {
    /// Copy of this matcher with a member read through `accessor`.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::DuplicateMember` when `name` is already present.
    pub fn with_access<F, M, V>(
        &self,
        name: impl Into<String>,
        accessor: F,
        matcher: M,
    ) -> Result<Self>
    where
        F: for<'x> Fn(&'x A) -> Access<'x, V> + 'static,
        M: Matcher<V> + 'static,
        V: 'static,
    {
        let member = AccessorMember {
            accessor,
            matcher,
            _value: PhantomData,
        };
        Ok(Self {
            type_name: self.type_name.clone(),
            members: self.members.append(name, Arc::new(member))?,
        })
    }

    /// Member borrowed from a field, e.g. `|p: &Person| &p.name`.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::DuplicateMember` when `name` is already present.
    pub fn with<F, M, V>(&self, name: impl Into<String>, accessor: F, matcher: M) -> Result<Self>
    where
        F: for<'x> Fn(&'x A) -> &'x V + 'static,
        M: Matcher<V> + 'static,
        V: 'static,
    {
        self.with_access(name, move |actual: &A| Access::Borrowed(accessor(actual)), matcher)
    }

    /// Member computed by value, e.g. `|p: &Person| p.name.len()`.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::DuplicateMember` when `name` is already present.
    pub fn with_value<F, M, V>(
        &self,
        name: impl Into<String>,
        accessor: F,
        matcher: M,
    ) -> Result<Self>
    where
        F: Fn(&A) -> V + 'static,
        M: Matcher<V> + 'static,
        V: 'static,
    {
        self.with_access(name, move |actual: &A| Access::Owned(accessor(actual)), matcher)
    }

    /// Member read by a fallible accessor. `Err(e)` renders as
    /// `threw an exception: <E>: <e>`.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::DuplicateMember` when `name` is already present.
    pub fn with_result<F, M, V, E>(
        &self,
        name: impl Into<String>,
        accessor: F,
        matcher: M,
    ) -> Result<Self>
    where
        F: Fn(&A) -> std::result::Result<V, E> + 'static,
        M: Matcher<V> + 'static,
        V: 'static,
        E: fmt::Display,
    {
        self.with_access(
            name,
            move |actual: &A| match accessor(actual) {
                Ok(value) => Access::Owned(value),
                Err(err) => Access::Failed(AccessError::errored(&err)),
            },
            matcher,
        )
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn members(&self) -> &Members<dyn PojoMember<A>> {
        &self.members
    }
}

impl<A: ?Sized> Clone for IsPojo<A> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            members: self.members.clone(),
        }
    }
}

impl<A: ?Sized> fmt::Debug for IsPojo<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IsPojo")
            .field("type_name", &self.type_name)
            .field("members", &self.members)
            .finish()
    }
}

impl<A: ?Sized> SelfDescribing for IsPojo<A> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(&self.type_name).append_text(" ");
        describe_members(self.members.pairs(), description, bare_key);
    }
}

impl<A: ?Sized> Matcher<A> for IsPojo<A> {
    fn check(&self, actual: &A, mismatch: &mut Description) -> bool {
        let mismatches = self
            .members
            .collect_mismatches(|member| member.matcher().evaluate(member.name(), actual));
        if mismatches.is_empty() {
            return true;
        }
        if mismatch.is_discarding() {
            return false;
        }
        mismatch.append_text(&self.type_name).append_text(" ");
        describe_nested_mismatches(self.members.names(), &mismatches, mismatch, bare_key);
        false
    }
}
