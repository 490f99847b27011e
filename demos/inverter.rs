//! Inverting each NDS shape and inverting back.
//!
//! Run with: cargo run --example inverter

use nds_path::{invert, nds, InverterConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let cases = [
        ("Object tuples", InverterConfig::new(true, true), nds!([
            {"a": 1, "b": 4},
            {"a": 2, "b": 5},
            {"a": 3, "b": 6}
        ])),
        ("Object series", InverterConfig::new(true, false), nds!({
            "a": [1, 2, 3],
            "b": [4, 5, 6]
        })),
        ("Array tuples", InverterConfig::new(false, true), nds!([[1, 4], [2, 5], [3, 6]])),
        ("Array series", InverterConfig::new(false, false), nds!([[1, 2, 3], [4, 5, 6]])),
    ];

    for (title, config, data) in cases {
        let inverted = invert(&data, &config)?;
        let back = invert(&inverted, &config.transposed())?;
        println!("{}:", title);
        println!("  input:    {}", data);
        println!("  inverted: {}", inverted);
        println!("  back:     {}\n", back);
    }

    match invert(&nds!([[1, 2], [3]]), &InverterConfig::new(false, true)) {
        Ok(v) => println!("unexpected: {}", v),
        Err(e) => println!("Ragged input: {}", e),
    }

    Ok(())
}
