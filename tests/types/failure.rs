use std::error::Error;

use error_boundary::Failure;

#[test]
fn new_failure_has_message_and_no_causes() {
    let failure = Failure::new("hello world");

    assert_eq!(failure.message(), "hello world");
    assert!(failure.causes().is_empty());
    assert!(!failure.is_aggregate());
}

#[test]
fn clones_share_identity() {
    let failure = Failure::new("boom");
    let copy = failure.clone();

    assert!(Failure::ptr_eq(&failure, &copy));
    assert_eq!(failure, copy);
}

#[test]
fn equal_contents_are_not_the_same_failure() {
    let a = Failure::new("boom");
    let b = Failure::new("boom");

    assert_eq!(a, b);
    assert!(!Failure::ptr_eq(&a, &b));
}

#[test]
fn aggregate_keeps_causes_in_order_and_by_identity() {
    let first = Failure::new("Fail A");
    let second = Failure::new("Fail B");

    let combined = Failure::aggregate([first.clone(), second.clone()]);

    assert!(combined.is_aggregate());
    assert_eq!(combined.message(), "Caught 2 errors: [Fail A, Fail B]");
    assert_eq!(combined.causes().len(), 2);
    assert!(Failure::ptr_eq(&combined.causes()[0], &first));
    assert!(Failure::ptr_eq(&combined.causes()[1], &second));
}

#[test]
fn with_causes_uses_the_given_message() {
    let failure = Failure::with_causes("batch failed", [Failure::new("row 3")]);

    assert_eq!(failure.message(), "batch failed");
    assert_eq!(failure.causes()[0].message(), "row 3");
}

#[test]
fn display_prints_the_message() {
    let failure = Failure::aggregate([Failure::new("timeout")]);
    assert_eq!(failure.to_string(), "Caught 1 error: [timeout]");
}

#[test]
fn source_is_the_first_cause() {
    let combined = Failure::aggregate([Failure::new("a"), Failure::new("b")]);
    let source = combined.source().map(|s| s.to_string());
    assert_eq!(source.as_deref(), Some("a"));

    assert!(Failure::new("leaf").source().is_none());
}

#[test]
fn tree_renders_nested_causes() {
    let inner = Failure::aggregate([Failure::new("x"), Failure::new("y")]);
    let outer = Failure::aggregate([inner, Failure::new("z")]);

    assert_eq!(
        outer.tree(),
        "Caught 2 errors: [Caught 2 errors: [x, y], z]\n  Caught 2 errors: [x, y]\n    x\n    y\n  z"
    );
}

#[test]
fn converts_from_text() {
    let from_str: Failure = "short".into();
    let from_string: Failure = String::from("owned").into();

    assert_eq!(from_str.message(), "short");
    assert_eq!(from_string.message(), "owned");
}

#[test]
fn failure_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Failure>();
}
