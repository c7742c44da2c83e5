#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Struct matcher behaviour: descriptions, ellipsis rendering and the
//! accessor failure outcomes

mod common;

use std::any::Any;

use common::{mismatch_of, SomeStruct};
use matchkit_core::matchers::{anything, equal_to, instance_of_that, is, starts_with};
use matchkit_core::{ExErrorKind, Matcher, SelfDescribing};
use matchkit_pojo::{pojo, Access, IsPojo};

fn nested(foo: i32) -> IsPojo<SomeStruct> {
    pojo::<SomeStruct>()
        .with("foo", |s: &SomeStruct| &s.foo, is(equal_to(foo)))
        .unwrap()
}

#[test]
fn test_single_member_matches() {
    let sut = pojo::<SomeStruct>()
        .with("foo", |s: &SomeStruct| &s.foo, is(equal_to(42)))
        .unwrap();

    assert!(sut.matches(&SomeStruct::new()));
}

#[test]
fn test_nested_pojo_matches() {
    let sut = pojo::<SomeStruct>()
        .with_value("baz", |s: &SomeStruct| s.baz(), is(nested(42)))
        .and_then(|m| m.with("bar", |s: &SomeStruct| &s.bar, is(equal_to("bar".to_string()))))
        .unwrap();

    assert!(sut.matches(&SomeStruct::new()));
}

#[test]
fn test_description() {
    let sut = pojo::<SomeStruct>()
        .with_value("baz", |s: &SomeStruct| s.baz(), is(nested(42)))
        .and_then(|m| m.with("foo", |s: &SomeStruct| &s.foo, is(equal_to(42))))
        .and_then(|m| m.with("bar", |s: &SomeStruct| &s.bar, is(equal_to("bar".to_string()))))
        .unwrap();

    assert_eq!(
        sut.description(),
        "SomeStruct {\n  baz: is SomeStruct {\n    foo: is <42>\n  }\n  foo: is <42>\n  bar: is \"bar\"\n}"
    );
}

#[test]
fn test_nested_mismatch_with_trailing_ellipsis() {
    let sut = pojo::<SomeStruct>()
        .with_value("baz", |s: &SomeStruct| s.baz(), is(nested(43)))
        .and_then(|m| m.with("foo", |s: &SomeStruct| &s.foo, is(equal_to(42))))
        .and_then(|m| m.with("bar", |s: &SomeStruct| &s.bar, is(equal_to("bar".to_string()))))
        .unwrap();

    assert_eq!(
        mismatch_of(&sut, &SomeStruct::new()),
        "SomeStruct {\n  baz: SomeStruct {\n    foo: was <42>\n  }\n  ...\n}"
    );
}

#[test]
fn test_every_member_mismatching() {
    let sut = pojo::<SomeStruct>()
        .with("foo", |s: &SomeStruct| &s.foo, is(equal_to(41)))
        .and_then(|m| m.with_value("baz", |s: &SomeStruct| s.baz(), is(nested(43))))
        .and_then(|m| m.with("bar", |s: &SomeStruct| &s.bar, is(equal_to("not-bar".to_string()))))
        .unwrap();

    assert_eq!(
        mismatch_of(&sut, &SomeStruct::new()),
        "SomeStruct {\n  foo: was <42>\n  baz: SomeStruct {\n    foo: was <42>\n  }\n  bar: was \"bar\"\n}"
    );
}

#[test]
fn test_accessor_error_is_rendered_as_exception() {
    let sut = pojo::<SomeStruct>()
        .with_result("fails", |s: &SomeStruct| s.fails(), is(anything()))
        .unwrap();

    assert_eq!(
        mismatch_of(&sut, &SomeStruct::new()),
        "SomeStruct {\n  fails: threw an exception: FixtureError: Error!\n}"
    );
}

#[test]
fn test_accessor_panic_does_not_abort_siblings() {
    // GIVEN a panicking member between two failing ones
    let sut = pojo::<SomeStruct>()
        .with("foo", |s: &SomeStruct| &s.foo, is(equal_to(1)))
        .and_then(|m| m.with_value("explodes", |s: &SomeStruct| s.explodes(), is(anything())))
        .and_then(|m| m.with("bar", |s: &SomeStruct| &s.bar, is(equal_to("x".to_string()))))
        .unwrap();

    // THEN every member is reported
    assert_eq!(
        mismatch_of(&sut, &SomeStruct::new()),
        "SomeStruct {\n  foo: was <42>\n  explodes: threw an exception: panic: Boom!\n  bar: was \"bar\"\n}"
    );
}

#[test]
fn test_absent_member_did_not_exist() {
    let sut = pojo::<SomeStruct>()
        .with_access(
            "nickname",
            |s: &SomeStruct| Access::<'_, String>::from(s.extra("nickname")),
            is(anything()),
        )
        .and_then(|m| {
            m.with_access(
                "colour",
                |s: &SomeStruct| Access::<'_, String>::from(s.extra("colour")),
                starts_with("bl"),
            )
        })
        .unwrap();

    assert_eq!(
        mismatch_of(&sut, &SomeStruct::new()),
        "SomeStruct {\n  nickname: did not exist\n  ...\n}"
    );
}

#[test]
fn test_wrong_runtime_type_via_any() {
    let sut = instance_of_that(nested(42));
    let other: Box<dyn Any> = Box::new(7_u64);

    assert_eq!(
        mismatch_of(&sut, other.as_ref()),
        "was not an instance of SomeStruct"
    );

    let same: Box<dyn Any> = Box::new(SomeStruct::new());
    assert!(sut.matches(same.as_ref()));
}

#[test]
fn test_duplicate_member_name() {
    let sut = nested(42);
    let err = sut
        .with("foo", |s: &SomeStruct| &s.foo, is(equal_to(42)))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::DuplicateMember);
    assert!(err.message().starts_with("Multiple entries with same key: "));
    assert_eq!(sut.members().len(), 1);
}

#[test]
fn test_members_are_evaluated_lazily_per_check() {
    let sut = nested(42);
    let mut changed = SomeStruct::new();

    assert!(sut.matches(&changed));
    changed.foo = 7;
    assert_eq!(
        mismatch_of(&sut, &changed),
        "SomeStruct {\n  foo: was <7>\n}"
    );
}
