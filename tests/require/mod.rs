use std::panic::{self, AssertUnwindSafe};

use error_boundary::{
    boundary, raise, require_error, require_error_with, require_value, Failure,
    EXPECTED_ERROR_MESSAGE,
};

fn caught_failure<F: FnOnce()>(f: F) -> Failure {
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).unwrap_err();
    *payload.downcast::<Failure>().expect("panic payload should be a Failure")
}

#[test]
fn require_value_returns_the_exact_value() {
    let value = vec![1, 2, 3];
    let ptr = value.as_ptr();

    let returned = require_value(Ok::<_, Failure>(value));
    assert_eq!(returned.as_ptr(), ptr);
}

#[test]
fn require_value_raises_the_same_failure() {
    let original = Failure::new("fail");
    let raised = original.clone();

    let caught = caught_failure(move || {
        require_value(Err::<(), _>(raised));
    });

    assert!(Failure::ptr_eq(&caught, &original));
    assert_eq!(caught.message(), "fail");
}

#[test]
fn require_value_raises_converted_plain_errors() {
    let caught = caught_failure(|| {
        require_value(Err::<(), _>("plain"));
    });
    assert_eq!(caught.message(), "plain");
}

#[test]
fn require_error_returns_the_same_failure() {
    let original = Failure::new("success");
    let found = require_error(Err::<(), _>(original.clone()));

    assert!(Failure::ptr_eq(&found, &original));
}

#[test]
fn require_error_raises_default_message_for_values() {
    let caught = caught_failure(|| {
        let _ = require_error(Ok::<_, Failure>(()));
    });
    assert_eq!(caught.message(), EXPECTED_ERROR_MESSAGE);
    assert_eq!(caught.message(), "Expected value to be an error.");
}

#[test]
fn require_error_with_raises_custom_message() {
    let caught = caught_failure(|| {
        let _ = require_error_with(Ok::<_, Failure>(1), "should be an error");
    });
    assert_eq!(caught.message(), "should be an error");
}

#[test]
fn boundary_catches_what_require_value_raises() {
    let original = Failure::new("round trip");
    let raised = original.clone();

    let outcome = boundary(move || Ok::<(), Failure>(require_value(Err::<(), _>(raised))));
    assert!(Failure::ptr_eq(&outcome.unwrap_err(), &original));
}

#[test]
fn require_value_of_required_error_raises_that_instance() {
    let failure = require_error(boundary(|| -> Result<(), Failure> { panic!("inner") }));
    let expected = failure.clone();

    let caught = caught_failure(move || {
        require_value(Err::<(), _>(failure));
    });
    assert!(Failure::ptr_eq(&caught, &expected));
}

#[test]
fn raise_panics_with_the_failure() {
    let original = Failure::new("direct");
    let raised = original.clone();

    let caught = caught_failure(move || raise(raised));
    assert!(Failure::ptr_eq(&caught, &original));
}
