//! Shared fixture for the struct matcher tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;

use matchkit_core::{Description, Matcher};

#[derive(Debug, Clone, PartialEq)]
pub struct SomeStruct {
    pub foo: i32,
    pub bar: String,
    pub extras: HashMap<String, String>,
}

impl SomeStruct {
    pub fn new() -> Self {
        Self {
            foo: 42,
            bar: "bar".to_string(),
            extras: HashMap::from([("colour".to_string(), "blue".to_string())]),
        }
    }

    pub fn baz(&self) -> SomeStruct {
        self.clone()
    }

    pub fn fails(&self) -> Result<i32, FixtureError> {
        Err(FixtureError("Error!".to_string()))
    }

    pub fn explodes(&self) -> i32 {
        panic!("Boom!")
    }

    pub fn extra(&self, key: &str) -> Option<&String> {
        self.extras.get(key)
    }
}

#[derive(Debug)]
pub struct FixtureError(pub String);

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn mismatch_of<T: ?Sized, M: Matcher<T> + ?Sized>(matcher: &M, actual: &T) -> String {
    let mut description = Description::new();
    matcher.describe_mismatch(actual, &mut description);
    description.into_string()
}
