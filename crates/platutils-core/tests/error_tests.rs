#![allow(clippy::unwrap_used, clippy::expect_used)]

use platutils_core::{
    compare_errors, compare_where, make_error, make_error_at, raise_error, raise_error_at, Cause,
    Error, ErrorCode,
};

const MSG: &str = "test error text";

fn expected(id: &str, code: ErrorCode, message: &str, where_: &str) -> Error {
    make_error_at(id, code, message, where_)
}

#[test]
fn test_make_error() {
    let err = make_error("test1", ErrorCode::BAD_REQUEST, MSG);

    let want = expected(
        "test1",
        ErrorCode::BAD_REQUEST,
        MSG,
        "test_make_error() - error_tests.rs(NN)",
    );
    assert!(
        compare_errors(Some(&err), Some(&want)),
        "\nExpected:\n{}\nGot.....:\n{}",
        want.full_info(),
        err.full_info()
    );
    assert_eq!(err.message(), MSG);
    assert_eq!(err.id(), "test1");
    assert!(err.recommended_actions().is_empty());
    assert!(err.nested().is_none());
}

fn build_in_helper() -> Error {
    make_error("test1", ErrorCode::BAD_REQUEST, "helper return")
}

#[test]
fn test_make_error_stamps_direct_caller() {
    let err = build_in_helper();
    assert!(
        compare_where(err.where_(), "build_in_helper() - error_tests.rs(NN)"),
        "unexpected where: {}",
        err.where_()
    );
}

#[test]
fn test_make_error_permission_rule() {
    let err = make_error("p", ErrorCode::UNKNOWN, "permission error reading secret");
    assert_eq!(err.code(), ErrorCode::UNAUTHORIZED);

    let err = make_error("p", ErrorCode::NOT_FOUND, "permission error reading secret");
    assert_eq!(err.code(), ErrorCode::NOT_FOUND);
}

#[test]
fn test_raise_error_with_standard_error() {
    let nested = std::io::Error::new(std::io::ErrorKind::Other, "an instance of a standard error type");
    let err = raise_error(
        "test1",
        ErrorCode::BAD_REQUEST,
        "raising a Error here because a call generated",
        nested,
    );

    let want = expected(
        "test1",
        ErrorCode::BAD_REQUEST,
        "raising a Error here because a call generated, an instance of a standard error type",
        "test_raise_error_with_standard_error() - error_tests.rs(NN)",
    );
    assert!(
        compare_errors(Some(&err), Some(&want)),
        "\nExpected:\n{}\nGot.....:\n{}",
        want.full_info(),
        err.full_info()
    );
    assert!(err.nested().is_none());
}

#[test]
fn test_raise_error_at_permission_inference() {
    let nested = Cause::from_boxed(anyhow::anyhow!("something about a permission error etc").into());
    let err = raise_error_at(
        "t",
        ErrorCode::UNKNOWN,
        "failed to so something",
        "somewhere() - something.rs (NN)",
        nested,
    );

    assert_eq!(err.code(), ErrorCode::UNAUTHORIZED);
    assert_eq!(
        err.message(),
        "failed to so something, something about a permission error etc"
    );
    assert!(err.nested().is_none());
}

#[test]
fn test_raise_error_at_structured_nested() {
    let nested = make_error_at(
        "test1",
        ErrorCode::UNAUTHORIZED,
        "something about a permission error etc",
        "test_raise_error() - error_tests.rs(NN)",
    );
    let err = raise_error_at(
        "test1",
        ErrorCode::UNKNOWN,
        "failed to so something",
        "somewhere() - something.rs (NN)",
        nested,
    );

    let want = expected(
        "test1",
        ErrorCode::UNAUTHORIZED,
        "failed to so something",
        "somewhere() - something.rs (NN)",
    )
    .with_nested_cause(expected(
        "test1",
        ErrorCode::UNAUTHORIZED,
        "something about a permission error etc",
        "test_raise_error() - error_tests.rs(NN)",
    ));

    assert!(
        compare_errors(Some(&err), Some(&want)),
        "\nExpected:\n{}\nGot.....:\n{}",
        want.full_info(),
        err.full_info()
    );
    assert_eq!(err.message(), "failed to so something");
}

#[test]
fn test_raise_error_with_opaque_value() {
    let err = raise_error(
        "test1",
        ErrorCode::INVALID_INPUT,
        "unexpected value",
        Cause::debug(&(3, "three")),
    );
    assert_eq!(err.message(), "unexpected value, (3, \"three\")");
    assert_eq!(err.code(), ErrorCode::INVALID_INPUT);
}

#[test]
fn test_full_info_with_nested_error() {
    let mut outer = make_error("test1", ErrorCode::BAD_REQUEST, "very bad request");
    let inner = make_error("test1", ErrorCode::INVALID_INPUT, "try giving me the right data");
    let inner_where = inner.where_().to_string();

    outer.add_nested_cause(inner);

    assert_eq!(
        outer.full_info(),
        format!(
            "{} test1 Bad Request very bad request\nNested Errors...\n{} test1 Unprocessable Entity try giving me the right data",
            outer.where_(),
            inner_where
        )
    );
}

#[test]
fn test_full_info_nested_chain_is_inlined() {
    let leaf = make_error_at("", ErrorCode::INTERNAL, "disk full", "leaf() - a.rs(1)")
        .with_details("volume /data");
    let middle = raise_error_at("", ErrorCode::UNKNOWN, "write failed", "middle() - b.rs(2)", leaf);
    let top = raise_error_at("", ErrorCode::UNKNOWN, "save failed", "top() - c.rs(3)", middle)
        .with_recommended_actions(["check the volume"]);

    assert_eq!(
        top.full_info(),
        "top() - c.rs(3) Internal Server Error save failed\n\
         Recommended actions...\n\
         check the volume\n\
         Nested Errors...\n\
         middle() - b.rs(2) Internal Server Error write failed\n\
         Nested Errors...\n\
         leaf() - a.rs(1) Internal Server Error disk full\n\
         volume /data"
    );
}

#[test]
fn test_full_info_equals_single_line_when_bare() {
    let err = make_error("id", ErrorCode::NOT_FOUND, "nothing here");
    assert_eq!(err.full_info(), err.to_string());
}

#[test]
fn test_mutators() {
    let mut err = make_error("id", ErrorCode::NOT_FOUND, "nothing here");

    err.set_message("something else");
    err.add_details("first");
    err.add_details("second");
    err.add_recommended_actions(["a", "b"]);
    err.add_recommended_actions(["c"]);

    assert_eq!(err.message(), "something else");
    assert_eq!(err.details(), "second");
    assert_eq!(err.recommended_actions(), ["a", "b", "c"]);
}

#[test]
fn test_question_mark_propagation() {
    fn load() -> platutils_core::Result<u32> {
        Err(make_error("cfg", ErrorCode::NOT_FOUND, "no config"))
    }

    fn run() -> platutils_core::Result<u32> {
        let value = load()?;
        Ok(value + 1)
    }

    let err = run().unwrap_err();
    assert_eq!(err.code(), ErrorCode::NOT_FOUND);
}

#[test]
fn test_error_converts_into_anyhow() {
    let err = make_error("id", ErrorCode::INTERNAL, "boom");
    let single_line = err.to_string();
    let any: anyhow::Error = err.into();
    assert_eq!(any.to_string(), single_line);
    assert!(any.downcast_ref::<Error>().is_some());
}
