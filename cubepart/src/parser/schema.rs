//! Pin report data structures

use std::fmt;

/// One row of a CubeMX pin report, as read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPinRow {
    pub pin: String,
    pub name: String,
    pub pin_type: String,
    pub signal: String,
    pub label: String,
    /// 1-based line in the source file (0 when built in memory)
    pub line: usize,
}

impl RawPinRow {
    /// Build a row that did not come from a file.
    pub fn new(pin: &str, name: &str, pin_type: &str, signal: &str, label: &str) -> Self {
        Self {
            pin: pin.to_string(),
            name: name.to_string(),
            pin_type: pin_type.to_string(),
            signal: signal.to_string(),
            label: label.to_string(),
            line: 0,
        }
    }
}

/// Logical symbol unit a pin is grouped into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// No unit assigned (KiPart puts these in the default unit)
    #[default]
    Ungrouped,
    Power,
    System,
    Gpio,
    /// On-chip peripheral, named by its signal prefix (`USART`, `SPI`, ...)
    Peripheral(String),
    Unused,
}

impl Unit {
    /// Unit for a signal prefix. `GPIO`, `SYS` and `PWR` signals join the
    /// matching fixed unit instead of forming a peripheral of that name.
    pub fn from_prefix(prefix: String) -> Self {
        match prefix.as_str() {
            "GPIO" => Unit::Gpio,
            "SYS" => Unit::System,
            "PWR" => Unit::Power,
            _ => Unit::Peripheral(prefix),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Unit::Ungrouped => "",
            Unit::Power => "PWR",
            Unit::System => "SYS",
            Unit::Gpio => "GPIO",
            Unit::Peripheral(name) => name,
            Unit::Unused => "unused",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// KiPart electrical pin type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElectricalType {
    #[default]
    Tristate,
    PowerIn,
    Input,
    Output,
    Bidirectional,
    Noconnect,
}

impl ElectricalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElectricalType::Tristate => "tristate",
            ElectricalType::PowerIn => "power_in",
            ElectricalType::Input => "input",
            ElectricalType::Output => "output",
            ElectricalType::Bidirectional => "bidirectional",
            ElectricalType::Noconnect => "noconnect",
        }
    }
}

impl fmt::Display for ElectricalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Side of the symbol body the pin is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classified pin, ready to be sorted and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinDescriptor {
    pub pin: String,
    pub name: String,
    pub unit: Unit,
    pub electrical_type: ElectricalType,
    pub side: Side,
    /// Signal name; only used for ordering
    pub alt_key: String,
}
