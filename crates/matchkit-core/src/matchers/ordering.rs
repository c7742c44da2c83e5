//! Ordering and numeric-tolerance matchers

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::description::Description;
use crate::matcher::{Matcher, SelfDescribing};

/// Compares the actual value against a bound.
#[derive(Debug, Clone)]
pub struct OrderingComparison<V> {
    expected: V,
    accept_less: bool,
    accept_equal: bool,
    accept_greater: bool,
    phrase: &'static str,
}

fn comparison<V>(
    expected: V,
    less: bool,
    equal: bool,
    greater: bool,
    phrase: &'static str,
) -> OrderingComparison<V> {
    OrderingComparison {
        expected,
        accept_less: less,
        accept_equal: equal,
        accept_greater: greater,
        phrase,
    }
}

pub fn greater_than<V>(expected: V) -> OrderingComparison<V> {
    comparison(expected, false, false, true, "greater than")
}

pub fn greater_than_or_equal_to<V>(expected: V) -> OrderingComparison<V> {
    comparison(expected, false, true, true, "equal to or greater than")
}

pub fn less_than<V>(expected: V) -> OrderingComparison<V> {
    comparison(expected, true, false, false, "less than")
}

pub fn less_than_or_equal_to<V>(expected: V) -> OrderingComparison<V> {
    comparison(expected, true, true, false, "less than or equal to")
}

fn relation(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less than",
        Ordering::Equal => "equal to",
        Ordering::Greater => "greater than",
    }
}

impl<V: Debug> SelfDescribing for OrderingComparison<V> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a value ")
            .append_text(self.phrase)
            .append_text(" ")
            .append_value(&self.expected);
    }
}

impl<V: PartialOrd + Debug> Matcher<V> for OrderingComparison<V> {
    fn check(&self, actual: &V, mismatch: &mut Description) -> bool {
        let accepted = match actual.partial_cmp(&self.expected) {
            Some(Ordering::Less) => self.accept_less,
            Some(Ordering::Equal) => self.accept_equal,
            Some(Ordering::Greater) => self.accept_greater,
            None => false,
        };
        if !accepted {
            mismatch.append_value(actual).append_text(" was ");
            match actual.partial_cmp(&self.expected) {
                Some(ordering) => mismatch.append_text(relation(ordering)),
                None => mismatch.append_text("not comparable to"),
            };
            mismatch.append_text(" ").append_value(&self.expected);
        }
        accepted
    }
}

/// Matches floating-point values within `delta` of `expected`.
#[derive(Debug, Clone, Copy)]
pub struct CloseTo {
    expected: f64,
    delta: f64,
}

pub fn close_to(expected: f64, delta: f64) -> CloseTo {
    CloseTo { expected, delta }
}

impl SelfDescribing for CloseTo {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a numeric value within ")
            .append_value(&self.delta)
            .append_text(" of ")
            .append_value(&self.expected);
    }
}

impl Matcher<f64> for CloseTo {
    fn check(&self, actual: &f64, mismatch: &mut Description) -> bool {
        let excess = (actual - self.expected).abs() - self.delta;
        if excess <= 0.0 {
            return true;
        }
        mismatch
            .append_value(actual)
            .append_text(" differed by ")
            .append_value(&excess)
            .append_text(" more than delta ")
            .append_value(&self.delta);
        false
    }
}
