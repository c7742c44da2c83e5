//! Two-step "extract, then match" helper for wrapper matchers
//!
//! A wrapper (Option, Result, future, JSON string, ...) first tries to
//! extract the inner value, writing its own mismatch text when that fails,
//! then hands the inner value to a sub-matcher with a phrase prefix.

use crate::description::Description;
use crate::matcher::Matcher;

/// Outcome of the extraction step.
#[derive(Debug)]
pub enum Condition<'a, T: ?Sized> {
    Matched(&'a T),
    NotMatched,
}

impl<T: ?Sized> Clone for Condition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Condition<'_, T> {}

impl<'a, T: ?Sized> Condition<'a, T> {
    pub fn matched(value: &'a T) -> Self {
        Condition::Matched(value)
    }

    pub fn not_matched() -> Self {
        Condition::NotMatched
    }

    /// Chain a further extraction step
    pub fn and_then<U: ?Sized, F>(self, step: F) -> Condition<'a, U>
    where
        F: FnOnce(&'a T) -> Condition<'a, U>,
    {
        match self {
            Condition::Matched(value) => step(value),
            Condition::NotMatched => Condition::NotMatched,
        }
    }

    /// Run `matcher` against the extracted value.
    ///
    /// On failure the mismatch reads `prefix` followed by the matcher's own
    /// mismatch text. A `NotMatched` condition fails without writing anything,
    /// because the extraction step already explained itself.
    pub fn matching<M>(self, matcher: &M, mismatch: &mut Description, prefix: &str) -> bool
    where
        M: Matcher<T> + ?Sized,
    {
        match self {
            Condition::NotMatched => false,
            Condition::Matched(value) => {
                let mut inner = mismatch.scratch();
                if matcher.check(value, &mut inner) {
                    true
                } else {
                    mismatch.append_text(prefix).append_text(inner.as_str());
                    false
                }
            }
        }
    }
}
