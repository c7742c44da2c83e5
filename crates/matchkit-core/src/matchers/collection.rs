//! Matchers over slices (and `Vec`s, which forward to the slice impls)

use std::fmt::Debug;

use crate::description::Description;
use crate::matcher::{BoxMatcher, Matcher, SelfDescribing};

use super::logical::equal_to;

macro_rules! forward_vec {
    ($t:ident $(, $extra:ident)*; $ty:ty) => {
        impl<$t $(, $extra)*> Matcher<Vec<$t>> for $ty
        where
            $ty: Matcher<[$t]>,
        {
            fn check(&self, actual: &Vec<$t>, mismatch: &mut Description) -> bool {
                Matcher::<[$t]>::check(self, actual.as_slice(), mismatch)
            }
        }
    };
}

/// Matches empty slices.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEmpty;

pub fn empty() -> IsEmpty {
    IsEmpty
}

impl SelfDescribing for IsEmpty {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("an empty collection");
    }
}

impl<T: Debug> Matcher<[T]> for IsEmpty {
    fn check(&self, actual: &[T], mismatch: &mut Description) -> bool {
        if actual.is_empty() {
            return true;
        }
        mismatch
            .append_text("was ")
            .append_value_list("[", ", ", "]", actual);
        false
    }
}

forward_vec!(T; IsEmpty);

/// Matches slices whose length satisfies a matcher.
#[derive(Debug, Clone)]
pub struct HasLen<M> {
    len: M,
}

pub fn has_len(len: usize) -> HasLen<super::logical::IsEqual<usize>> {
    has_len_that(equal_to(len))
}

pub fn has_len_that<M: Matcher<usize>>(len: M) -> HasLen<M> {
    HasLen { len }
}

impl<M: SelfDescribing> SelfDescribing for HasLen<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a collection with size ")
            .append_description_of(&self.len);
    }
}

impl<T, M: Matcher<usize>> Matcher<[T]> for HasLen<M> {
    fn check(&self, actual: &[T], mismatch: &mut Description) -> bool {
        let mut inner = mismatch.scratch();
        if self.len.check(&actual.len(), &mut inner) {
            return true;
        }
        mismatch
            .append_text("collection size ")
            .append_text(inner.as_str());
        false
    }
}

forward_vec!(T, M; HasLen<M>);

/// Matches slices item-by-item, in order, with exactly one matcher per item.
pub struct Contains<T> {
    matchers: Vec<BoxMatcher<T>>,
}

pub fn contains<T>(matchers: impl IntoIterator<Item = BoxMatcher<T>>) -> Contains<T> {
    Contains {
        matchers: matchers.into_iter().collect(),
    }
}

/// In-order containment of exactly these values
pub fn contains_values<V>(values: impl IntoIterator<Item = V>) -> Contains<V>
where
    V: PartialEq + Debug + 'static,
{
    contains(
        values
            .into_iter()
            .map(|value| Box::new(equal_to(value)) as BoxMatcher<V>),
    )
}

impl<T> SelfDescribing for Contains<T> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("iterable containing ")
            .append_list("[", ", ", "]", self.matchers.iter());
    }
}

impl<T: Debug> Matcher<[T]> for Contains<T> {
    fn check(&self, actual: &[T], mismatch: &mut Description) -> bool {
        for (index, item) in actual.iter().enumerate() {
            let Some(matcher) = self.matchers.get(index) else {
                mismatch.append_text("not matched: ").append_value(item);
                return false;
            };
            let mut inner = mismatch.scratch();
            if !matcher.check(item, &mut inner) {
                mismatch
                    .append_text(format!("item {}: ", index))
                    .append_text(inner.as_str());
                return false;
            }
        }
        if let Some(next) = self.matchers.get(actual.len()) {
            mismatch
                .append_text("no item was ")
                .append_description_of(next);
            return false;
        }
        true
    }
}

forward_vec!(T; Contains<T>);

/// Matches slices whose items pair up one-to-one with the matchers, in any
/// order.
pub struct ContainsInAnyOrder<T> {
    matchers: Vec<BoxMatcher<T>>,
}

pub fn contains_in_any_order<T>(
    matchers: impl IntoIterator<Item = BoxMatcher<T>>,
) -> ContainsInAnyOrder<T> {
    ContainsInAnyOrder {
        matchers: matchers.into_iter().collect(),
    }
}

impl<T> SelfDescribing for ContainsInAnyOrder<T> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("iterable with items ")
            .append_list("[", ", ", "]", self.matchers.iter())
            .append_text(" in any order");
    }
}

impl<T: Debug> Matcher<[T]> for ContainsInAnyOrder<T> {
    fn check(&self, actual: &[T], mismatch: &mut Description) -> bool {
        let mut remaining: Vec<&BoxMatcher<T>> = self.matchers.iter().collect();
        for item in actual {
            if remaining.is_empty() {
                mismatch.append_text("no match for: ").append_value(item);
                return false;
            }
            match remaining.iter().position(|matcher| matcher.matches(item)) {
                Some(found) => {
                    remaining.remove(found);
                }
                None => {
                    mismatch.append_text("not matched: ").append_value(item);
                    return false;
                }
            }
        }
        if remaining.is_empty() {
            return true;
        }
        mismatch
            .append_text("no item matches: ")
            .append_list("", ", ", "", remaining.iter().copied())
            .append_text(" in ")
            .append_value_list("[", ", ", "]", actual);
        false
    }
}

forward_vec!(T; ContainsInAnyOrder<T>);

/// Matches slices in which every item satisfies the matcher.
#[derive(Debug, Clone)]
pub struct EveryItem<M> {
    matcher: M,
}

pub fn every_item<M>(matcher: M) -> EveryItem<M> {
    EveryItem { matcher }
}

impl<M: SelfDescribing> SelfDescribing for EveryItem<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("every item is ")
            .append_description_of(&self.matcher);
    }
}

impl<T, M: Matcher<T>> Matcher<[T]> for EveryItem<M> {
    fn check(&self, actual: &[T], mismatch: &mut Description) -> bool {
        for item in actual {
            let mut inner = mismatch.scratch();
            if !self.matcher.check(item, &mut inner) {
                mismatch.append_text("an item ").append_text(inner.as_str());
                return false;
            }
        }
        true
    }
}

forward_vec!(T, M; EveryItem<M>);

/// Matches slices with at least one item satisfying the matcher.
#[derive(Debug, Clone)]
pub struct HasItem<M> {
    matcher: M,
}

pub fn has_item<M>(matcher: M) -> HasItem<M> {
    HasItem { matcher }
}

impl<M: SelfDescribing> SelfDescribing for HasItem<M> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a collection containing ")
            .append_description_of(&self.matcher);
    }
}

impl<T, M: Matcher<T>> Matcher<[T]> for HasItem<M> {
    fn check(&self, actual: &[T], mismatch: &mut Description) -> bool {
        if actual.is_empty() {
            mismatch.append_text("was empty");
            return false;
        }
        let mut failures = Vec::with_capacity(actual.len());
        for item in actual {
            let mut inner = mismatch.scratch();
            if self.matcher.check(item, &mut inner) {
                return true;
            }
            failures.push(inner);
        }
        mismatch.append_text("mismatches were: [");
        for (i, failure) in failures.iter().enumerate() {
            if i > 0 {
                mismatch.append_text(", ");
            }
            mismatch.append_text(failure.as_str());
        }
        mismatch.append_text("]");
        false
    }
}

forward_vec!(T, M; HasItem<M>);
