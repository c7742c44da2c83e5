#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use matchkit_core::errors::{ExErrorKind, MatchError};
use matchkit_core::logging_facility::test_capture::init_test_capture;
use matchkit_core::matchers::{equal_to, greater_than};
use matchkit_core::{check_that, log_op_end, log_op_error, log_op_start, Members};
use matchkit_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_MATCHER,
    FIELD_MEMBER, OP_ADD_MEMBER, OP_CHECK_THAT, OP_COMPOSITE_CHECK,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, std::time::Instant::now());

    let end_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.is(op_name, EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    let duration = end_events[0].field(FIELD_DURATION_MS).unwrap();
    assert!(duration.parse::<u64>().is_ok());
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = MatchError::DuplicateMember {
        name: "foo".to_string(),
    };
    log_op_error!(op_name, err);

    let error_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.is(op_name, EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1);
    assert_eq!(
        error_events[0].field(FIELD_ERR_CODE),
        Some(ExErrorKind::DuplicateMember.code())
    );
    assert_eq!(error_events[0].field(FIELD_MEMBER), Some("foo"));
    assert_eq!(error_events[0].field(FIELD_DURATION_MS), None);
}

#[test]
fn test_failed_check_that_logs_expected_description() {
    let capture = init_test_capture();

    let sut = greater_than(7_777_001);
    let err = check_that(&3, &sut).unwrap_err();
    assert_eq!(err.code(), ExErrorKind::AssertionFailed.code());

    let logged: Vec<_> = capture
        .events_for(OP_CHECK_THAT)
        .into_iter()
        .filter(|e| e.is(OP_CHECK_THAT, EVENT_END_ERROR))
        .filter(|e| e.field(FIELD_MATCHER).is_some_and(|m| m.contains("7777001")))
        .collect();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].field(FIELD_ERR_CODE), Some("ERR_ASSERTION_FAILED"));
    assert!(logged[0].field(FIELD_DURATION_MS).is_some());
    assert!(err.message().contains(logged[0].field(FIELD_MATCHER).unwrap()));
}

#[test]
fn test_check_that_brackets_with_start_and_end() {
    let capture = init_test_capture();

    check_that(&"unique-check-value-4", &equal_to("unique-check-value-4")).unwrap();
    assert!(check_that(&5, &equal_to(6)).is_err());

    capture.assert_event_exists(OP_CHECK_THAT, EVENT_START);
    capture.assert_event_exists(OP_CHECK_THAT, EVENT_END);
    capture.assert_event_exists(OP_CHECK_THAT, EVENT_END_ERROR);
}

#[test]
fn test_composite_evaluation_traces_counts() {
    let capture = init_test_capture();

    let members = Members::<str>::new()
        .append("a", Arc::from("x"))
        .and_then(|m| m.append("b", Arc::from("y")))
        .and_then(|m| m.append("c", Arc::from("z")))
        .and_then(|m| m.append("unique_member_5", Arc::from("w")))
        .unwrap();
    let collector = members.collect_mismatches(|_| None);
    assert!(collector.is_empty());

    let traced = capture.count_events(|e| {
        e.op.as_deref() == Some(OP_COMPOSITE_CHECK)
            && e.field("members") == Some("4")
            && e.field("mismatches") == Some("0")
    });
    assert!(traced >= 1, "Composite check should emit a trace event");
}

#[test]
fn test_duplicate_member_is_logged() {
    let capture = init_test_capture();

    let members = Members::<str>::new()
        .append("unique_dup_6", Arc::from("x"))
        .unwrap();
    assert!(members.append("unique_dup_6", Arc::from("y")).is_err());

    let logged = capture.count_events(|e| {
        e.is(OP_ADD_MEMBER, EVENT_END_ERROR)
            && e.field(FIELD_MEMBER) == Some("unique_dup_6")
            && e.field(FIELD_ERR_CODE) == Some(ExErrorKind::DuplicateMember.code())
    });
    assert_eq!(logged, 1);
}
