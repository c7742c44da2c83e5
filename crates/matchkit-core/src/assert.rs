//! Assertion entry points

use std::time::Instant;

use matchkit_core_types::schema::OP_CHECK_THAT;

use crate::description::Description;
use crate::errors::{ExError, ExErrorKind, Result};
use crate::matcher::Matcher;
use crate::{log_op_end, log_op_error, log_op_start};

/// Check `actual` against `matcher` without panicking.
///
/// # Errors
///
/// Returns `ExErrorKind::AssertionFailed` when the value does not match. The
/// error message is the full report:
///
/// ```text
///
/// Expected: <matcher description>
///      but: <mismatch description>
/// ```
pub fn check_that<T, M>(actual: &T, matcher: &M) -> Result<()>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    let started = Instant::now();
    log_op_start!(OP_CHECK_THAT);

    let mut mismatch = Description::new();
    if matcher.check(actual, &mut mismatch) {
        log_op_end!(OP_CHECK_THAT, started);
        return Ok(());
    }

    let mut expected = Description::new();
    expected.append_description_of(matcher);

    let mut report = Description::new();
    report
        .append_text("\nExpected: ")
        .append_text(expected.as_str())
        .append_text("\n     but: ")
        .append_text(mismatch.as_str());

    let err = ExError::new(ExErrorKind::AssertionFailed)
        .with_op(OP_CHECK_THAT)
        .with_message(report.into_string());
    log_op_error!(
        OP_CHECK_THAT,
        err.clone(),
        started = started,
        matcher = expected.as_str(),
    );
    Err(err)
}

/// Assert that `actual` satisfies `matcher`.
///
/// # Panics
///
/// Panics with the expectation and mismatch report when it does not.
#[track_caller]
pub fn assert_that<T, M>(actual: &T, matcher: &M)
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if let Err(err) = check_that(actual, matcher) {
        panic!("{}", err.message());
    }
}
