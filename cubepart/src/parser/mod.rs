//! Pin report parsing
//!
//! - `schema`: raw rows and classified pin descriptors
//! - `report`: CSV reader for CubeMX pin reports

pub mod report;
pub mod schema;

pub use report::{read_report, read_report_from_reader};
pub use schema::{ElectricalType, PinDescriptor, RawPinRow, Side, Unit};
