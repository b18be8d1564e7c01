//! KiPart CSV writer
//!
//! Output layout: part name row, empty row, column header row, then one row
//! per pin in `Pin, Unit, Type, Name, Side` order.

use crate::core::CubePartError;
use crate::parser::schema::PinDescriptor;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column header row of a KiPart pin table
pub const KIPART_COLUMNS: [&str; 5] = ["Pin", "Unit", "Type", "Name", "Side"];

#[derive(Serialize)]
struct KiPartRow<'a> {
    pin: &'a str,
    unit: &'a str,
    #[serde(rename = "type")]
    electrical_type: &'a str,
    name: &'a str,
    side: &'a str,
}

impl<'a> From<&'a PinDescriptor> for KiPartRow<'a> {
    fn from(p: &'a PinDescriptor) -> Self {
        KiPartRow {
            pin: &p.pin,
            unit: p.unit.as_str(),
            electrical_type: p.electrical_type.as_str(),
            name: &p.name,
            side: p.side.as_str(),
        }
    }
}

/// Write the KiPart table for `pins` (already in output order).
pub fn write_kipart<W: Write>(
    writer: W,
    part_name: &str,
    pins: &[PinDescriptor],
) -> Result<(), CubePartError> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .quote_style(QuoteStyle::Necessary)
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record([part_name])?;
    csv_writer.write_record([""])?;
    csv_writer.write_record(KIPART_COLUMNS)?;
    for pin in pins {
        csv_writer.serialize(KiPartRow::from(pin))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the KiPart table to a file, replacing it if it exists.
pub fn write_kipart_file(
    path: &Path,
    part_name: &str,
    pins: &[PinDescriptor],
) -> Result<(), CubePartError> {
    let file = File::create(path)?;
    write_kipart(BufWriter::new(file), part_name, pins)?;
    tracing::info!("Wrote {} pins to {}", pins.len(), path.display());
    Ok(())
}
