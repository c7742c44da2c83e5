#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;

use matchkit_core::matchers::{contains_values, equal_to, is};
use matchkit_core::{assert_that, check_that, ExErrorKind};
use matchkit_option::{empty_option, err_that, ok_with_value_that, option_with_value_that};

#[test]
fn test_lookup_result_reads_naturally() {
    let ages = HashMap::from([("ada", 36)]);

    assert_that(&ages.get("ada").copied(), &option_with_value_that(is(equal_to(36))));
    assert_that(&ages.get("bob").copied(), &empty_option());
}

#[test]
fn test_failure_report_nests_inner_mismatch() {
    let parsed: Result<Vec<i32>, String> = Ok(vec![1, 2]);

    let err = check_that(&parsed, &ok_with_value_that(contains_values([1, 3]))).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::AssertionFailed);
    assert_eq!(
        err.message(),
        "\nExpected: a Result that is Ok with value that iterable containing [<1>, <3>]\n     but: was Ok with value that item 1: was <2>"
    );
}

#[test]
fn test_nested_options() {
    let nested: Option<Option<i32>> = Some(None);

    let err = check_that(&nested, &option_with_value_that(option_with_value_that(equal_to(1))))
        .unwrap_err();

    assert!(err
        .message()
        .ends_with("but: was an Option whose value was not present"));
}

#[test]
#[should_panic(expected = "was Ok with value <1>")]
fn test_assert_that_panics_with_mismatch() {
    let value: Result<i32, String> = Ok(1);
    assert_that(&value, &err_that(equal_to("boom".to_string())));
}
