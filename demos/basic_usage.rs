// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the properties crate.
//!
//! This example demonstrates:
//! - Loading properties from in-memory text
//! - Typed getters (string, int, float, bool)
//! - Structural queries (key existence, subkeys)
//! - Telling a missing key from a valueless section
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use keyprops::prelude::*;

const CONFIG: &str = "
# service configuration
source = some source
destination = some destination # with comment
bind_port = 9345

[section1]
float = 4.5
bool.true = yes
bool.false = 0
";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let props: Properties = CONFIG.parse()?;

    println!("source       = {}", props.get_string("source")?);
    println!("destination  = {}", props.get_string("destination")?);
    println!("bind_port    = {}", props.get_int("bind_port")?);
    println!("float        = {}", props.get_float("section1.float")?);
    println!("bool.true    = {}", props.get_bool("section1.bool.true")?);
    println!("bool.false   = {}", props.get_bool("section1.bool.false")?);

    let subkeys: Vec<String> = props.subkeys("section1")?.into_iter().collect();
    println!("section1 has: {}", subkeys.join(", "));

    match props.get_string("section1") {
        Err(PropertiesError::NoValue { key }) => println!("'{}' is a section, not a value", key),
        other => println!("unexpected: {:?}", other),
    }

    match props.get_string("missing") {
        Err(e) if e.is_not_found() => println!("'missing' is not configured"),
        other => println!("unexpected: {:?}", other),
    }

    println!("port as default: {}", props.get_or_default("port", "8080"));

    Ok(())
}
