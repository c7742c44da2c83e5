//! Generic engine shared by every composite binding
//!
//! A composite matcher owns an ordered [`Members`] list. During a check it
//! evaluates each member with [`Members::collect_mismatches`], and if any
//! failed it hands the declared order plus the [`MismatchCollector`] to
//! [`describe_nested_mismatches`].

pub mod collector;
pub mod members;
pub mod render;

pub use collector::{DeferredMismatch, MismatchCollector};
pub use members::{Members, NamedMember};
pub use render::{
    bare_key, describe_members, describe_nested_mismatches, indent_description, ELLIPSIS_LINE,
};

use crate::description::Description;
use crate::matcher::Matcher;

/// Evaluate `matcher` against `actual` and, on failure, defer its mismatch
/// description.
///
/// The returned closure re-runs the check against the caller's sink, so no
/// text is produced unless the mismatch is actually rendered.
pub fn defer_check<'a, T, M>(matcher: &'a M, actual: &'a T) -> Option<DeferredMismatch<'a>>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if matcher.matches(actual) {
        None
    } else {
        let render: DeferredMismatch<'a> = Box::new(move |description: &mut Description| {
            matcher.describe_mismatch(actual, description)
        });
        Some(render)
    }
}

/// Like [`defer_check`], but the deferred closure takes ownership of the
/// value (for members computed on the fly).
pub fn defer_check_owned<'a, T, M>(matcher: &'a M, actual: T) -> Option<DeferredMismatch<'a>>
where
    T: 'a,
    M: Matcher<T> + ?Sized,
{
    if matcher.matches(&actual) {
        None
    } else {
        let render: DeferredMismatch<'a> = Box::new(move |description: &mut Description| {
            matcher.describe_mismatch(&actual, description)
        });
        Some(render)
    }
}
