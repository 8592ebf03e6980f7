use error_boundary::serialize::{serialize, SerializeOptions};
use error_boundary::{boundary_list, Failure};
use serde_json::json;

#[test]
fn single_failure_has_message_and_no_causes() {
    let value = serialize(&Failure::new("timeout"), &SerializeOptions::default());
    assert_eq!(value, json!({ "message": "timeout", "causes": [] }));
}

#[test]
fn aggregated_failure_lists_causes_in_order() {
    let err = boundary_list(|| vec![Err::<(), _>("Fail A"), Ok(()), Err("Fail B")]).unwrap_err();
    let value = serialize(&err, &SerializeOptions::default());

    assert_eq!(
        value,
        json!({
            "message": "Caught 2 errors: [Fail A, Fail B]",
            "causes": [
                { "message": "Fail A", "causes": [] },
                { "message": "Fail B", "causes": [] }
            ]
        })
    );
}

#[test]
fn omitted_keys_become_null_at_every_level() {
    let nested = Failure::aggregate([Failure::aggregate([Failure::new("inner")])]);
    let value = serialize(&nested, &SerializeOptions::default().omit("message"));

    assert!(value["message"].is_null());
    assert!(value["causes"][0]["message"].is_null());
    assert!(value["causes"][0]["causes"][0]["message"].is_null());
    assert_eq!(value["causes"][0]["causes"][0]["causes"], json!([]));
}

#[test]
fn omitting_causes_keeps_the_key() {
    let failure = Failure::aggregate([Failure::new("a")]);
    let value = serialize(&failure, &SerializeOptions::default().omit("causes"));

    let object = value.as_object().unwrap();
    assert!(object.contains_key("causes"));
    assert!(object["causes"].is_null());
}

#[test]
fn output_survives_a_text_round_trip() {
    let failure = Failure::aggregate([Failure::new("x"), Failure::new("y")]);
    let value = serialize(&failure, &SerializeOptions::default());

    let text = serde_json::to_string(&value).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn failure_serializes_through_serde() {
    let failure = Failure::new("plain");
    let text = serde_json::to_string(&failure).unwrap();
    let back: Failure = serde_json::from_str(&text).unwrap();
    assert_eq!(back.message(), "plain");
}
