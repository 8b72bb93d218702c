#![allow(dead_code)]

use std::path::Path;

pub const EXAMPLE_COM_ZONE: &str = r#"{"$origin":"example.com","a":[{"ttl":60,"value":"10.0.0.1"}]}"#;

pub const EXAMPLE_ORG_ZONE: &str = r#"{
    "$origin": "example.org",
    "a": [
        {"ttl": 300, "value": "192.0.2.10"},
        {"ttl": 300, "value": "192.0.2.11"}
    ]
}"#;

pub const NO_ADDRESS_ZONE: &str = r#"{"$origin":"empty.example","a":[]}"#;

pub fn write_zone(dir: &Path, file_name: &str, contents: &str) {
    std::fs::write(dir.join(file_name), contents).unwrap();
}
