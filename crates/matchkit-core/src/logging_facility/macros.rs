//! Operation logging macros
//!
//! Timed operations (`check_that`, `await_future`) pass the `Instant` they
//! started at and the macro derives `duration_ms`. Error events carry the
//! `err.kind`, `err.code` and `member` keys of
//! `matchkit_core_types::schema`; extra fields such as `matcher` can follow
//! the timed form.

/// Log the start of a timed operation
///
/// # Example
///
/// ```
/// # use matchkit_core::log_op_start;
/// log_op_start!("check_that");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::matchkit_core_types::schema::EVENT_START,
        )
    };
}

/// Log the successful end of a timed operation
///
/// # Example
///
/// ```
/// # use matchkit_core::log_op_end;
/// let started = std::time::Instant::now();
/// log_op_end!("check_that", started);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, $started:expr) => {
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::matchkit_core_types::schema::EVENT_END,
            duration_ms = $crate::logging_facility::elapsed_ms($started),
        )
    };
}

/// Log a failed operation
///
/// The error is converted into `ExError` first. The untimed form is for
/// construction errors; the timed form takes `started = <Instant>` and any
/// extra fields after it.
///
/// # Example
///
/// ```
/// # use matchkit_core::{log_op_error, errors::MatchError};
/// let err = MatchError::DuplicateMember { name: "foo".to_string() };
/// log_op_error!("add_member", err);
///
/// let started = std::time::Instant::now();
/// let err = MatchError::InvalidInput { reason: "bad".to_string() };
/// log_op_error!("check_that", err, started = started, matcher = "ANYTHING");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::matchkit_core_types::schema::EVENT_END_ERROR,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            member = ex_err.member(),
        );
    }};
    ($op:expr, $err:expr, started = $started:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::matchkit_core_types::schema::EVENT_END_ERROR,
            duration_ms = $crate::logging_facility::elapsed_ms($started),
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            member = ex_err.member(),
            $($($field)+)?
        );
    }};
}
