//! Using the xton! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use serde_xton::{encode, encode_pretty, xton, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let null_val = xton!(null);
    let bool_val = xton!(true);
    let number = xton!(42);
    let text = xton!("Hello, XTon!");

    println!("Primitives:");
    println!("  null:   {}", encode(&null_val)?);
    println!("  bool:   {}", encode(&bool_val)?);
    println!("  number: {}", encode(&number)?);
    println!("  text:   {}\n", encode(&text)?);

    let numbers = xton!([1, 2, 3, 4, 5]);
    let mixed = xton!([1, "two", true, null]);

    println!("Arrays:");
    println!("  Numbers: {}", encode(&numbers)?);
    println!("  Mixed:   {}\n", encode(&mixed)?);

    let config = xton!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Nested structures:");
    println!("{}\n", encode_pretty(&config)?);

    let items = vec![
        xton!({"id": 1, "status": "active"}),
        xton!({"id": 2, "status": "pending"}),
    ];

    let summary = xton!({
        "total": 2,
        "items": items
    });

    println!("Dynamic construction:");
    println!("{}\n", encode(&summary)?);

    if let Value::Object(obj) = &config {
        if let Some(Value::Object(app)) = obj.get("app") {
            if let Some(name) = app.get("name").and_then(|v| v.as_str()) {
                println!("Accessing values:");
                println!("  App name: {}", name);
            }
        }

        if let Some(Value::Array(features)) = obj.get("features") {
            println!("  Features: {}", features.len());
        }
    }

    Ok(())
}
