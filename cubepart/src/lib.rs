//! cubepart - STM32CubeMX pin report to KiPart CSV conversion
//!
//! Reads the pin list exported by STM32CubeMX and produces a pin table that
//! KiPart turns into a multi-unit KiCad schematic symbol. Each pin is sorted
//! into a unit (power, system, GPIO or one unit per peripheral), given a
//! KiPart electrical type and a side of the symbol body.
//!
//! # Quick Start
//!
//! ```no_run
//! use cubepart::{CubePartCore, ConvertOptions};
//! use std::path::Path;
//!
//! let result = CubePartCore::convert_file(
//!     Path::new("stm32f103c8.csv"),
//!     Path::new("output.csv"),
//!     &ConvertOptions::default(),
//! ).unwrap();
//!
//! println!("{}: {} pins", result.part_name, result.total_pins());
//! ```

pub mod classifier;
pub mod core;
pub mod parser;
pub mod sort;
pub mod writer;

// Re-export main types
pub use crate::core::{
    part_name_from_path, ConversionResult, ConversionStats, ConvertOptions, CubePartCore,
    CubePartError,
};
pub use classifier::classify;
pub use parser::schema::{ElectricalType, PinDescriptor, RawPinRow, Side, Unit};
pub use sort::{natural_key, sort_key};
pub use writer::write_kipart;

/// Read a pin report (convenience wrapper).
pub fn read_report(path: &std::path::Path) -> Result<Vec<RawPinRow>, CubePartError> {
    parser::report::read_report(path)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ConversionResult, ConversionStats, ConvertOptions, CubePartCore, CubePartError,
        ElectricalType, PinDescriptor, RawPinRow, Side, Unit,
    };
}
