//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_xton::{decode, encode, from_value, to_value, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn describe(value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Array(items) => {
            println!("{}array of {}", pad, items.len());
            for item in items {
                describe(item, depth + 1);
            }
        }
        Value::Object(map) => {
            println!("{}object with {} keys", pad, map.len());
            for (key, item) in map {
                println!("{}  {}:", pad, key);
                describe(item, depth + 2);
            }
        }
        other => println!("{}{} {:?}", pad, other.type_name(), other),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = decode("<host-'localhost'/port-8080/features-[auth/logging]/debug-\\true>")?;

    println!("Structure:");
    describe(&config, 1);
    println!();

    if let Value::Object(obj) = &config {
        if let Some(host) = obj.get("host").and_then(Value::as_str) {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = obj.get("port").and_then(Value::as_i64) {
            println!("Accessing field 'port': {}\n", port);
        }
    }

    // Convert existing struct to Value and back
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as XTon: {}", encode(&user_value)?);

    let user_back: User = from_value(user_value)?;
    println!("User back: {:?}", user_back);

    Ok(())
}
