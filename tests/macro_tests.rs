use serde_xton::{encode, xton, Value, XtonMap};

#[test]
fn test_xton_macro_null() {
    let value = xton!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_xton_macro_booleans() {
    let true_val = xton!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = xton!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_xton_macro_numbers() {
    let int_val = xton!(42);
    assert_eq!(int_val, Value::Number(42.0));

    let float_val = xton!(3.5);
    assert_eq!(float_val, Value::Number(3.5));

    let negative_val = xton!(-123);
    assert_eq!(negative_val, Value::Number(-123.0));
}

#[test]
fn test_xton_macro_strings() {
    let string_val = xton!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = xton!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_xton_macro_arrays() {
    let empty_array = xton!([]);
    assert_eq!(empty_array, Value::Array(vec![]));

    let mixed_array = xton!([1, "hello", true, null]);
    assert_eq!(
        mixed_array,
        Value::Array(vec![
            Value::Number(1.0),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );

    let nested = xton!([[1, 2], [3, 4]]);
    assert_eq!(encode(&nested).unwrap(), "[[1/2]/[3/4]]");
}

#[test]
fn test_xton_macro_objects() {
    let empty_object = xton!({});
    assert_eq!(empty_object, Value::Object(XtonMap::new()));

    let obj = xton!({
        "name": "Alice",
        "age": 30,
        "active": true,
    });

    match obj {
        Value::Object(map) => {
            assert_eq!(map.len(), 3);
            assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
            assert_eq!(map.get("age"), Some(&Value::Number(30.0)));
            assert_eq!(map.get("active"), Some(&Value::Bool(true)));
            let keys: Vec<_> = map.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["name", "age", "active"]);
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_xton_macro_expressions() {
    let name = String::from("Bob");
    let scores = vec![1, 2, 3];

    let value = xton!({
        "name": name,
        "scores": scores
    });

    assert_eq!(encode(&value).unwrap(), "<name-'Bob'/scores-[1/2/3]>");
}

#[test]
fn test_xton_macro_nested_encoding() {
    let value = xton!({"config": {"debug": false, "level": null}});
    assert_eq!(
        encode(&value).unwrap(),
        "config-<debug-\\false/level-\\none>"
    );
}
