//! Shared fixtures for the JSON integration tests
#![allow(dead_code)]

use matchkit_core::matchers::is;
use matchkit_core::{Description, Matcher};
use matchkit_json::{json_bool, json_int, json_null, json_object, IsJsonObject};
use serde_json::Value;

/// `{foo: is 1, bar: is false, baz: is {foo: is null}}`
pub fn foo_bar_baz() -> IsJsonObject {
    json_object()
        .with("foo", is(json_int(1)))
        .and_then(|m| m.with("bar", is(json_bool(false))))
        .and_then(|m| {
            m.with(
                "baz",
                is(json_object().with("foo", is(json_null()))?),
            )
        })
        .expect("fixture members are unique")
}

pub fn mismatch_of<M: Matcher<Value> + ?Sized>(matcher: &M, actual: &Value) -> String {
    let mut description = Description::new();
    matcher.describe_mismatch(actual, &mut description);
    description.into_string()
}
