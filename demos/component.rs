//! Driving a component through its states.
//!
//! Run with: cargo run --example component

use nds_path::{nds, ArrayElementMapper, Component, NdsInverter};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut mapper = Component::new(ArrayElementMapper);
    println!("state: {:?}", mapper.state());

    mapper.set_data_in(nds!([{"x": 1, "y": 4}, {"x": 2, "y": 5}]));
    println!("state: {:?}", mapper.state());

    mapper.set_config(nds!({
        "mapToObjects": false,
        "mappings": [{"src": "/x", "target": 0}, {"src": "/y", "target": 1}]
    }));
    println!("state: {:?}", mapper.state());
    println!("output: {}\n", serde_json::to_string(mapper.output())?);

    // Feed the mapper's rows into an inverter.
    let rows = mapper.output().data_out.clone().unwrap_or_default();
    let mut inverter = Component::new(NdsInverter);
    inverter.set_config(nds!({"elementsAreObjects": false}));
    let out = inverter.set_data_in(rows);
    println!("inverted: {}\n", serde_json::to_string(out)?);

    // Errors replace the previous dataOut.
    let out = inverter.set_data_in(nds!([[1, 2], [3]]));
    println!("error: {}", serde_json::to_string(out)?);

    Ok(())
}
