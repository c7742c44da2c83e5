//! matchkit Core - matcher contract and structural mismatch-diff engine
//!
//! This crate provides the pieces every matcher family builds on:
//! - The [`Matcher`] / [`SelfDescribing`] contract and the [`Description`] sink
//! - The composite engine: ordered named members, the per-evaluation
//!   mismatch collector and the ellipsis-compressing renderer
//! - Standard leaf, logical and collection matchers
//! - Assertion entry points (`assert_that`, `check_that`)
//! - The error and logging facilities shared by the other crates

pub mod assert;
pub mod composite;
pub mod condition;
pub mod description;
pub mod errors;
pub mod language;
pub mod logging_facility;
pub mod matcher;
pub mod matchers;

// Used by the logging macros
#[doc(hidden)]
pub use matchkit_core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use assert::{assert_that, check_that};
pub use composite::{Members, MismatchCollector};
pub use condition::Condition;
pub use description::Description;
pub use errors::{panic_message, ExError, ExErrorKind, MatchError, Result};
pub use matcher::{boxed, BoxMatcher, Matcher, SelfDescribing};
