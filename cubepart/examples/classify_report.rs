//! Print the unit, type and side of every pin in a CubeMX report.
//!
//! Run with: cargo run --example classify_report -- path/to/report.csv

use cubepart::prelude::*;
use std::path::PathBuf;

fn main() -> Result<(), CubePartError> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/stm32f103c8.csv"));

    let rows = cubepart::read_report(&path)?;
    let part_name = cubepart::part_name_from_path(&path);
    let result = CubePartCore::convert(&rows, &part_name, &ConvertOptions::default())?;

    println!("{} ({} pins)", result.part_name, result.total_pins());
    for pin in &result.pins {
        println!(
            "  {:>4}  {:<8} {:<14} {:<6} {}",
            pin.pin, pin.unit, pin.electrical_type, pin.side, pin.name
        );
    }
    println!("Peripherals: {}", result.peripherals().join(", "));
    Ok(())
}
