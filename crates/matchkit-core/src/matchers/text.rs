//! Substring matchers over `str` and `String`

use crate::description::Description;
use crate::matcher::{Matcher, SelfDescribing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextRelation {
    StartsWith,
    EndsWith,
    Contains,
}

impl TextRelation {
    fn phrase(self) -> &'static str {
        match self {
            TextRelation::StartsWith => "a string starting with ",
            TextRelation::EndsWith => "a string ending with ",
            TextRelation::Contains => "a string containing ",
        }
    }

    fn holds(self, actual: &str, expected: &str) -> bool {
        match self {
            TextRelation::StartsWith => actual.starts_with(expected),
            TextRelation::EndsWith => actual.ends_with(expected),
            TextRelation::Contains => actual.contains(expected),
        }
    }
}

/// Matches strings by a substring relation.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    relation: TextRelation,
    expected: String,
}

pub fn starts_with(prefix: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        relation: TextRelation::StartsWith,
        expected: prefix.into(),
    }
}

pub fn ends_with(suffix: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        relation: TextRelation::EndsWith,
        expected: suffix.into(),
    }
}

pub fn contains_string(needle: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        relation: TextRelation::Contains,
        expected: needle.into(),
    }
}

impl SelfDescribing for SubstringMatcher {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text(self.relation.phrase())
            .append_value(self.expected.as_str());
    }
}

impl Matcher<str> for SubstringMatcher {
    fn check(&self, actual: &str, mismatch: &mut Description) -> bool {
        if self.relation.holds(actual, &self.expected) {
            return true;
        }
        mismatch.append_text("was ").append_value(actual);
        false
    }
}

impl Matcher<String> for SubstringMatcher {
    fn check(&self, actual: &String, mismatch: &mut Description) -> bool {
        Matcher::<str>::check(self, actual.as_str(), mismatch)
    }
}
