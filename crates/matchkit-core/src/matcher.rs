//! The matcher contract shared by leaves, wrappers and composites

use std::rc::Rc;
use std::sync::Arc;

use crate::description::Description;

/// Something that can describe itself into a [`Description`].
pub trait SelfDescribing {
    fn describe_to(&self, description: &mut Description);

    /// Render the self-description to an owned string
    fn description(&self) -> String {
        let mut description = Description::new();
        self.describe_to(&mut description);
        description.into_string()
    }
}

/// A predicate over `T` with an expectation description and a mismatch
/// description.
///
/// Implementors provide the diagnosing [`Matcher::check`]; `matches` and
/// `describe_mismatch` are derived from it so the verdict and the diagnosis
/// can never disagree.
///
/// # Contract
///
/// - `check` writes to `mismatch` only when it returns `false`.
/// - Evaluation is free of side effects other than description writes and
///   diagnostic logging; checking the same value twice yields the same text.
pub trait Matcher<T: ?Sized>: SelfDescribing {
    /// Evaluate `actual`, describing why it failed into `mismatch`.
    fn check(&self, actual: &T, mismatch: &mut Description) -> bool;

    fn matches(&self, actual: &T) -> bool {
        self.check(actual, &mut Description::discard())
    }

    /// Describe why `actual` does not match. Writes nothing when it does.
    fn describe_mismatch(&self, actual: &T, description: &mut Description) {
        self.check(actual, description);
    }
}

/// Boxed matcher over `T`.
pub type BoxMatcher<T> = Box<dyn Matcher<T>>;

/// Box a matcher for use in a heterogeneous list (`all_of`, `contains`, ...).
pub fn boxed<T: ?Sized, M: Matcher<T> + 'static>(matcher: M) -> BoxMatcher<T> {
    Box::new(matcher)
}

macro_rules! forward_pointer_impls {
    ($($ptr:ident),*) => {
        $(
            impl<S: SelfDescribing + ?Sized> SelfDescribing for $ptr<S> {
                fn describe_to(&self, description: &mut Description) {
                    (**self).describe_to(description)
                }
            }

            impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for $ptr<M> {
                fn check(&self, actual: &T, mismatch: &mut Description) -> bool {
                    (**self).check(actual, mismatch)
                }
            }
        )*
    };
}

forward_pointer_impls!(Box, Arc, Rc);

impl<S: SelfDescribing + ?Sized> SelfDescribing for &S {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn check(&self, actual: &T, mismatch: &mut Description) -> bool {
        (**self).check(actual, mismatch)
    }
}
