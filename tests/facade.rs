mod common;

use test_log::test;

use serde_json::{json, Value};
use tagvariant::{ustr, UnwrapError, VariantValue};

fn samples() -> Vec<Value> {
    vec![
        json!(null),
        json!(0),
        json!("None"),
        json!([1, 2, 3]),
        json!({"Some": {"nested": true}}),
    ]
}

#[test]
fn some_properties() {
    for v in samples() {
        assert!(some!(v).is_some());
        assert!(!some!(v).is_none());
        assert_eq!(some!(v).unwrap(), v);
        assert_eq!(some!(v).unwrap_or(json!("default")), v);
    }
}

#[test]
fn none_properties() {
    assert!(none!().is_none());
    assert!(!none!().is_some());
    assert_eq!(none!().unwrap_or(json!(3)), json!(3));
    let error = none!().try_unwrap().unwrap_err();
    assert!(error.to_string().contains("None"));
}

#[test]
#[should_panic(expected = "called `unwrap` on a `None` value")]
fn unwrap_none() {
    none!().unwrap();
}

#[test]
fn ok_properties() {
    for v in samples() {
        assert!(ok!(v).is_ok());
        assert!(!ok!(v).is_err());
        assert_eq!(ok!(v).unwrap_ok(), v);
        assert_eq!(ok!(v).unwrap_or_else(json!(42)), v);
        assert_eq!(
            ok!(v).try_unwrap_err(),
            Err(UnwrapError::WrongVariant {
                operation: "unwrap_err",
                expected: "Err",
                found: ustr("Ok"),
            })
        );
    }
}

#[test]
fn err_properties() {
    for e in samples() {
        assert!(err!(e).is_err());
        assert!(!err!(e).is_ok());
        assert_eq!(err!(e).unwrap_err(), e);
        assert_eq!(err!(e).unwrap_or_else(json!(42)), json!(42));
        assert!(err!(e).try_unwrap_ok().is_err());
    }
}

#[test]
fn unwrap_or_else_is_eager() {
    assert_eq!(err!("boom").unwrap_or_else(json!(42)), json!(42));
    assert_eq!(VariantValue::err("boom").unwrap_or_else("fine"), "fine");
}

#[test]
#[should_panic(expected = "called `unwrap_ok` on a `Err` value")]
fn unwrap_ok_on_err() {
    err!("boom").unwrap_ok();
}

#[test]
#[should_panic(expected = "called `unwrap_err` on a `Ok` value")]
fn unwrap_err_on_ok() {
    ok!(1).unwrap_err();
}

#[test]
#[should_panic(expected = "called `unwrap` on a `Some` value without payload")]
fn unwrap_payloadless_some() {
    common::decode(r#""Some""#).unwrap();
}

#[test]
fn native_round_trips() {
    for option in [Some(1), None] {
        assert_eq!(VariantValue::from(option).into_option(), Ok(option));
    }
    for result in [Ok(1), Err(2)] {
        assert_eq!(VariantValue::from(result).into_result(), Ok(result));
    }
}
