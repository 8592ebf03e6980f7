use std::panic::panic_any;

use error_boundary::normalize::UNKNOWN_VALUE_MESSAGE;
use error_boundary::{boundary, boundary_list, try_boundary_list, Failure};

#[test]
fn returns_value() {
    let value = boundary(|| Ok::<_, Failure>("value"));
    assert_eq!(value, Ok("value"));
}

#[test]
fn returned_failure_is_not_rewrapped() {
    let original = Failure::new("returned, not raised");
    let returned = original.clone();

    let err = boundary(move || Err::<(), _>(returned)).unwrap_err();
    assert!(Failure::ptr_eq(&err, &original));
}

#[test]
fn returned_plain_error_is_converted() {
    let err = boundary(|| "12a".parse::<u8>().map_err(|e| e.to_string())).unwrap_err();
    assert_eq!(err.message(), "invalid digit found in string");
}

#[test]
fn catches_panic_with_static_message() {
    let err = boundary(|| -> Result<(), Failure> { panic!("hello world") }).unwrap_err();
    assert_eq!(err.message(), "hello world");
}

#[test]
fn catches_panic_with_formatted_message() {
    let id = 7;
    let err = boundary(|| -> Result<(), Failure> { panic!("user {} not found", id) }).unwrap_err();
    assert_eq!(err.message(), "user 7 not found");
}

#[test]
fn raised_failure_keeps_identity() {
    let original = Failure::new("raised");
    let raised = original.clone();

    let err = boundary(move || -> Result<(), Failure> { panic_any(raised) }).unwrap_err();
    assert!(Failure::ptr_eq(&err, &original));
}

#[test]
fn non_text_panic_uses_fallback_message() {
    let err = boundary(|| -> Result<(), Failure> { panic_any(404_u16) }).unwrap_err();
    assert_eq!(err.message(), UNKNOWN_VALUE_MESSAGE);
}

#[test]
fn nested_boundaries_do_not_double_wrap() {
    let inner = boundary(|| -> Result<(), Failure> { panic!("deep") });
    let outer = boundary(move || inner);

    let err = outer.unwrap_err();
    assert_eq!(err.message(), "deep");
    assert!(err.causes().is_empty());
}

#[test]
fn boundary_macro_wraps_expression() {
    let value = error_boundary::boundary!(Ok::<_, Failure>(3));
    assert_eq!(value, Ok(3));

    let err = error_boundary::boundary!({
        let empty: Vec<u8> = Vec::new();
        Ok::<_, Failure>(empty[1])
    })
    .unwrap_err();
    assert!(err.message().contains("index out of bounds"));
}

#[test]
fn boundary_list_returns_values() {
    let list = boundary_list(|| vec![Ok::<_, Failure>("a"), Ok("b"), Ok("c")]);
    assert_eq!(list, Ok(vec!["a", "b", "c"]));
}

#[test]
fn boundary_list_aggregates_errors() {
    let list = boundary_list(|| vec![Ok("a"), Err(Failure::new("Fail A")), Ok("b"), Ok("c")]);
    assert_eq!(list.unwrap_err().message(), "Caught 1 error: [Fail A]");
}

#[test]
fn boundary_list_reports_panic_as_single_failure() {
    let err = boundary_list(|| -> Vec<Result<u8, Failure>> { panic!("no connection") })
        .unwrap_err();

    assert_eq!(err.message(), "no connection");
    assert!(!err.is_aggregate());
}

#[test]
fn boundary_list_catches_panic_during_iteration() {
    let err = boundary_list(|| {
        (0..3).map(|n| {
            if n == 2 {
                panic!("iterator broke at {}", n);
            }
            Ok::<_, Failure>(n)
        })
    })
    .unwrap_err();

    assert_eq!(err.message(), "iterator broke at 2");
    assert!(!err.is_aggregate());
}

#[test]
fn boundary_list_preserves_order_of_powers() {
    let result = boundary_list(|| {
        [3_i32, 2, 1, -1, -2].map(|n| {
            if n < 0 {
                Err(Failure::new(format!("{} is not >= 0", n)))
            } else {
                Ok(2_u32.pow(n as u32))
            }
        })
    });

    assert_eq!(
        result.unwrap_err().message(),
        "Caught 2 errors: [-1 is not >= 0, -2 is not >= 0]"
    );
}

#[test]
fn try_boundary_list_reports_returned_error_alone() {
    let err = try_boundary_list(|| Err::<Vec<Result<u8, Failure>>, _>("refused")).unwrap_err();

    assert_eq!(err.message(), "refused");
    assert!(!err.is_aggregate());
}

#[test]
fn try_boundary_list_aggregates_produced_sequence() {
    let result = try_boundary_list(|| {
        Ok::<_, Failure>(vec![Ok(1), Err(Failure::new("bad row")), Ok(3)])
    });

    assert_eq!(result.unwrap_err().message(), "Caught 1 error: [bad row]");
}
