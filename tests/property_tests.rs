//! Property-based tests for the codec's round-trip guarantees
//!
//! Random `Value` trees must survive `decode(encode(v))` unchanged, and
//! typed data must survive `from_str(to_string(x))`.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_xton::{
    decode, encode, encode_pretty, from_str, to_string, Value, XtonMap,
};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,8}",
        "[0-9][0-9a-z.]{0,5}",
        "[ -~]{0,12}",
        "\\PC{0,8}",
        Just(String::new()),
        Just("\\true".to_string()),
        Just("-1".to_string()),
        Just("1e".to_string()),
    ]
}

fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<i32>().prop_map(f64::from),
        any::<f64>().prop_filter("finite", |n| n.is_finite()),
        (-1_000_000i64..1_000_000).prop_map(|n| n as f64 / 1000.0),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_number().prop_map(Value::Number),
        arb_string().prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_string(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<XtonMap>())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_value_roundtrip(value in arb_value()) {
        let text = encode(&value).unwrap();
        prop_assert_eq!(decode(&text).unwrap(), value, "encoded as {}", text);
    }

    #[test]
    fn prop_pretty_roundtrip(value in arb_value()) {
        let text = encode_pretty(&value).unwrap();
        prop_assert_eq!(decode(&text).unwrap(), value);
    }

    #[test]
    fn prop_encoding_is_idempotent(value in arb_value()) {
        let first = encode(&value).unwrap();
        let second = encode(&decode(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_single_entry_root(key in arb_string(), inner in arb_value()) {
        let mut map = XtonMap::new();
        map.insert(key, inner);
        let value = Value::Object(map);
        prop_assert_eq!(decode(&encode(&value).unwrap()).unwrap(), value);
    }

    #[test]
    fn prop_decode_never_panics(text in "\\PC{0,40}") {
        let _ = decode(&text);
    }

    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u32(n in any::<u32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_string(s in "\\PC{0,20}") {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_string(v in prop::collection::vec(arb_string(), 0..10)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }
}
