//! Mapping an array of records into each of the four NDS shapes.
//!
//! Run with: cargo run --example mapper

use nds_path::{map, MapperConfig, Value};
use std::error::Error;

const RECORDS: &str = r#"[
    {"foo": "boo1", "foo2": "boo2", "a1": {"type": "number", "value": 1}, "b": ["3"], "c": ["4"]},
    {"foo": "boo3", "foo2": "boo4", "s2": {"type": "number", "value": 2}, "b": ["3"], "c": ["4"]},
    {"foo": "boo5", "foo2": "boo6", "b3": {"type": "number", "value": 3}, "b": ["3"], "c": ["4"]}
]"#;

fn config(map_to_objects: bool, map_to_tuples: bool) -> String {
    let targets: [String; 5] = if map_to_objects {
        ["byPath", "byPointer", "byRegex", "byIndex", "byPointerParsed"].map(|t| format!("{:?}", t))
    } else {
        ["0", "1", "2", "3", "4"].map(String::from)
    };
    format!(
        r#"{{
            "mapToObjects": {map_to_objects},
            "mapToTuples": {map_to_tuples},
            "mappings": [
                {{"src": ["foo2"], "target": {}}},
                {{"src": "/foo", "target": {}}},
                {{"src": ["/^[a-zA-Z]\\d$/", "value"], "target": {}}},
                {{"src": {{"path": ["b", 0], "parse": "number"}}, "target": {}}},
                {{"src": {{"path": "/c/0", "parse": "number"}}, "target": {}}}
            ]
        }}"#,
        targets[0], targets[1], targets[2], targets[3], targets[4]
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    let data: Value = serde_json::from_str(RECORDS)?;

    for (title, objects, tuples) in [
        ("Object tuples", true, true),
        ("Object series", true, false),
        ("Array tuples", false, true),
        ("Array series", false, false),
    ] {
        let config: MapperConfig = serde_json::from_str(&config(objects, tuples))?;
        let mapped = map(&data, &config)?;
        println!("{}:", title);
        println!("{}\n", serde_json::to_string_pretty(&mapped)?);
    }

    // A rule that does not resolve for every element fails the whole call.
    let strict: MapperConfig = serde_json::from_str(
        r#"{"mapToObjects": true, "mappings": [{"src": "/a1/value", "target": "v"}]}"#,
    )?;
    if let Err(e) = map(&data, &strict) {
        println!("Mapping error: {}", e);
    }

    Ok(())
}
