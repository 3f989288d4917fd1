#![allow(clippy::unwrap_used, clippy::expect_used)]

use platutils_core::{compare_errors, make_error_at, ErrorCode};
use platutils_location::handler::ERROR_URI_SCHEME_MISMATCH;
use platutils_location::memory::{ERROR_CONNECT_FAIL, HANDLER_ID};
use platutils_location::{Handler, MemoryHandler};
use serde_json::json;
use uuid::Uuid;

fn unique_path() -> String {
    format!("/secret/services/ms/ALL/ms/mgmtsvc/{}", Uuid::now_v7())
}

#[test]
fn test_verify_scheme_rejects_other_schemes() {
    let handler = MemoryHandler::new();
    let err = handler.verify_scheme("test.local").unwrap_err();
    assert_eq!(err.code(), ErrorCode::INVALID_INPUT);
    assert!(err.to_string().contains(ERROR_URI_SCHEME_MISMATCH));
    assert_eq!(err.message(), "wrong uri scheme memory:");
}

#[test]
fn test_connect() {
    let mut handler = MemoryHandler::new();
    handler.connect("memory://").unwrap();
    handler.connect("memory://ms,mgmtsvc@").unwrap();

    let err = handler.connect("vault://ms,mgmtsvc@/secret").unwrap_err();
    assert_eq!(err.message(), "failed to connect");
    assert_eq!(err.code(), ErrorCode::INVALID_INPUT);
}

#[test]
fn test_put_get_data() {
    let mut handler = MemoryHandler::new();
    let uri = format!("memory://{}/test1", unique_path());
    let data = json!({"one": "1", "two": "2", "four": "4", "five": "5"});

    handler.put_data(&uri, data.clone()).unwrap();

    let stored = handler.get_data(&uri).unwrap();
    assert_eq!(stored, data);
    assert_eq!(stored["two"], "2");
}

#[test]
fn test_get_missing_data() {
    let mut handler = MemoryHandler::new();
    let path = unique_path();
    let err = handler.get_data(&format!("memory://{path}")).unwrap_err();

    let expected = make_error_at(
        HANDLER_ID,
        ErrorCode::NOT_FOUND,
        format!("no data at: {path}"),
        "read() - memory.rs(NN)",
    );
    assert!(
        compare_errors(Some(&err), Some(&expected)),
        "\nExpected:\n{}\nGot.....:\n{}",
        expected.full_info(),
        err.full_info()
    );
}

#[test]
fn test_wrong_scheme_is_connect_failure() {
    let mut handler = MemoryHandler::new();
    let err = handler.get_data("vault://ms,mgmtsvc@/secret/x").unwrap_err();

    assert_eq!(err.message(), ERROR_CONNECT_FAIL);
    assert_eq!(err.code(), ErrorCode::INVALID_INPUT);
    let nested = err.nested().and_then(|n| n.as_structured()).unwrap();
    assert_eq!(nested.message(), "wrong uri scheme memory:");
}

#[test]
fn test_delete_data() {
    let mut handler = MemoryHandler::new();
    let uri = format!("memory://{}", unique_path());

    // Deleting absent data is not an error
    handler.delete_data(&uri).unwrap();

    handler.put_data(&uri, json!("hello")).unwrap();
    handler.delete_data(&uri).unwrap();
    assert_eq!(
        handler.get_data(&uri).unwrap_err().code(),
        ErrorCode::NOT_FOUND
    );
}

#[test]
fn test_list_data() {
    let mut handler = MemoryHandler::new();
    let base = unique_path();
    for item in ["a", "b", "dir/c", "dir/d"] {
        handler
            .put_data(&format!("memory://{base}/{item}"), json!(item))
            .unwrap();
    }

    let items = handler.list_data(&format!("memory://{base}")).unwrap();
    assert_eq!(items, ["a", "b"]);

    let info = handler.list(&base);
    assert_eq!(info.path_list, ["dir"]);

    let items = handler.list_data(&format!("memory://{base}/dir")).unwrap();
    assert_eq!(items, ["c", "d"]);
}

#[test]
fn test_handlers_do_not_share_data() {
    let uri = format!("memory://{}", unique_path());
    let mut first = MemoryHandler::new();
    let mut second = MemoryHandler::new();

    first.put_data(&uri, json!(1)).unwrap();
    assert!(second.get_data(&uri).is_err());
}
