//! Core conversion pipeline shared by the library API and the CLI.
//!
//! report -> classify -> sort -> KiPart table

use std::io::Read;
use std::path::Path;

use crate::classifier::classify_all;
use crate::parser::report::{read_report, read_report_from_reader};
use crate::parser::schema::{PinDescriptor, RawPinRow, Unit};
use crate::sort::sort_descriptors;
use crate::writer::write_kipart_file;

#[derive(Debug, thiserror::Error)]
pub enum CubePartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Line {line}: expected 5 fields (Pin, Name, Type, Signal, Label), found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("Line {line}: empty line inside the pin table")]
    BlankLine { line: usize },
    #[error("Line {line}: pin {pin} has unrecognized peripheral signal '{signal}'")]
    UnrecognizedSignal {
        line: usize,
        pin: String,
        signal: String,
    },
}

/// Options for a conversion run.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Prefix sort keys with the unit so each unit's pins stay together
    pub group_by_unit: bool,
    /// Part name for the first output row; derived from the input path when `None`
    pub part_name: Option<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            group_by_unit: true,
            part_name: None,
        }
    }
}

/// Converted part: pins in output order plus counts.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub part_name: String,
    pub pins: Vec<PinDescriptor>,
    pub stats: ConversionStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub power: usize,
    pub system: usize,
    pub gpio: usize,
    pub peripheral: usize,
    pub unused: usize,
    pub ungrouped: usize,
}

impl ConversionStats {
    pub fn total(&self) -> usize {
        self.power + self.system + self.gpio + self.peripheral + self.unused + self.ungrouped
    }
}

impl ConversionResult {
    pub fn total_pins(&self) -> usize {
        self.pins.len()
    }

    /// Distinct peripheral units, in output order.
    pub fn peripherals(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for pin in &self.pins {
            if let Unit::Peripheral(name) = &pin.unit {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }
}

fn pins_to_stats(pins: &[PinDescriptor]) -> ConversionStats {
    let mut stats = ConversionStats::default();
    for p in pins {
        match p.unit {
            Unit::Power => stats.power += 1,
            Unit::System => stats.system += 1,
            Unit::Gpio => stats.gpio += 1,
            Unit::Peripheral(_) => stats.peripheral += 1,
            Unit::Unused => stats.unused += 1,
            Unit::Ungrouped => stats.ungrouped += 1,
        }
    }
    stats
}

/// Part name for an input file: file name without a `.csv` extension, upper-cased.
pub fn part_name_from_path(path: &Path) -> String {
    let is_csv = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    let name = if is_csv {
        path.file_stem()
    } else {
        path.file_name()
    };
    name.map(|n| n.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

/// Conversion API used by the CLI.
pub struct CubePartCore;

impl CubePartCore {
    /// Classify and order already parsed rows.
    pub fn convert(
        rows: &[RawPinRow],
        part_name: &str,
        options: &ConvertOptions,
    ) -> Result<ConversionResult, CubePartError> {
        let classified = classify_all(rows)?;
        let pins = sort_descriptors(classified, options.group_by_unit);
        let stats = pins_to_stats(&pins);
        let part_name = options
            .part_name
            .clone()
            .unwrap_or_else(|| part_name.to_string());
        Ok(ConversionResult {
            part_name,
            pins,
            stats,
        })
    }

    /// Read a report from `reader` and convert it.
    pub fn convert_reader<R: Read>(
        reader: R,
        part_name: &str,
        options: &ConvertOptions,
    ) -> Result<ConversionResult, CubePartError> {
        let rows = read_report_from_reader(reader)?;
        Self::convert(&rows, part_name, options)
    }

    /// Convert the report at `input` and write the KiPart table to `output`.
    pub fn convert_file(
        input: &Path,
        output: &Path,
        options: &ConvertOptions,
    ) -> Result<ConversionResult, CubePartError> {
        let rows = read_report(input)?;
        tracing::info!("Read {} pins from {}", rows.len(), input.display());

        let result = Self::convert(&rows, &part_name_from_path(input), options)?;
        write_kipart_file(output, &result.part_name, &result.pins)?;
        Ok(result)
    }
}
