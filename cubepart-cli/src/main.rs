//! cubepart CLI - convert an STM32CubeMX pin report into a KiPart CSV.

use clap::Parser;
use cubepart::{ConvertOptions, CubePartCore};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "cubepart")]
#[command(about = "Convert an STM32CubeMX pin report to a KiPart CSV file", long_about = None)]
#[command(version)]
struct Cli {
    /// CubeMX pin report (CSV)
    #[arg(value_name = "INPUT", default_value = "input.csv")]
    input: PathBuf,

    /// KiPart CSV to write
    #[arg(value_name = "OUTPUT", default_value = "output.csv")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    process::exit(handle_convert(&cli.input, &cli.output));
}

fn handle_convert(input: &PathBuf, output: &PathBuf) -> i32 {
    println!("Generating {} file.", output.display());

    match CubePartCore::convert_file(input, output, &ConvertOptions::default()) {
        Ok(result) => {
            tracing::info!(
                "{}: {} pins ({} power, {} system, {} gpio, {} peripheral, {} unused)",
                result.part_name,
                result.total_pins(),
                result.stats.power,
                result.stats.system,
                result.stats.gpio,
                result.stats.peripheral,
                result.stats.unused
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
