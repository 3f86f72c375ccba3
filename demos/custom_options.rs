//! Customizing XTon output and decoding limits with XtonOptions.
//!
//! Run with: RUST_LOG=serde_xton=trace cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_xton::{decode, decode_with_options, to_string_with_options, XtonOptions};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct Wrapper {
    config: Config,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let wrapper = Wrapper {
        config: Config {
            name: "MyApp".to_string(),
            version: "1.0.0".to_string(),
            debug: true,
        },
    };

    println!("Default (compact, collapsed root):");
    println!("{}\n", serde_xton::to_string(&wrapper)?);

    println!("Explicit root object:");
    let explicit = XtonOptions::new().with_collapse_top_level(false);
    println!("{}\n", to_string_with_options(&wrapper, &explicit)?);

    println!("Pretty, 4-space indent:");
    let pretty = XtonOptions::pretty().with_indent(4);
    println!("{}\n", to_string_with_options(&wrapper, &pretty)?);

    let shallow = XtonOptions::new().with_max_depth(2);
    match decode_with_options("[[[1]]]", &shallow) {
        Ok(value) => println!("Decoded: {:?}", value),
        Err(err) => println!("Depth limit: {}", err),
    }

    match decode("<a-1") {
        Ok(value) => println!("Decoded: {:?}", value),
        Err(err) => println!("Syntax error: {}", err),
    }

    Ok(())
}
