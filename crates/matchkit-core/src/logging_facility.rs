//! Structured logging facility for matchkit
//!
//! - Single initialization point via `init(profile)`
//! - Operation macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Matchers log at `trace` level while they evaluate, so nothing is emitted
//! unless the filter (`RUST_LOG`) asks for it.
//!
//! # Usage
//!
//! ```rust
//! use matchkit_core::logging_facility::{init, Profile};
//!
//! // Initialize once at test-harness startup
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op)` - timed operation started
//! - `log_op_end!(op, started)` - timed operation finished
//! - `log_op_error!(op, err)` - construction error
//! - `log_op_error!(op, err, started = started, extra = ...)` - timed operation failed

use std::time::Instant;

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

/// Milliseconds since `started`, as logged in `duration_ms`
#[doc(hidden)]
pub fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
