//! Pin Classification Module
//!
//! Maps raw CubeMX pin rows to KiPart pin descriptors: which symbol unit
//! the pin belongs to, its electrical type and the side it is drawn on.
//!
//! Rules are matched on substrings of the CubeMX pin type and applied in a
//! fixed order. A later rule overwrites everything an earlier rule set.

use crate::core::CubePartError;
use crate::parser::schema::{ElectricalType, PinDescriptor, RawPinRow, Side, Unit};
use regex::Regex;
use std::sync::OnceLock;

/// Peripherals whose pins are drawn on the right side of their unit
pub const RIGHT_SIDE_PERIPHERALS: &[&str] = &[
    "CAN", "DAC", "ETH", "FSMC", "I2C", "I2S", "SDIO", "SPI", "USB", "USART", "UART", "TIM",
];

/// Signal names look like `USART1_TX`, `SYS_JTMS-SWDIO`, `ADC1_IN0`
fn peripheral_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([A-Z0-9]+)[\w-]+").expect("static regex"))
}

/// Extract the peripheral name from a signal (`USART1_TX` -> `USART`).
///
/// Returns `None` if the signal is not a peripheral pin name.
pub fn peripheral_name(signal: &str) -> Option<String> {
    let caps = peripheral_pattern().captures(signal)?;
    let prefix = caps.get(1)?.as_str();
    // Drop the instance number: USART1 -> USART, I2C2 -> I2C
    let base = prefix.trim_end_matches(|c: char| c.is_ascii_digit());
    if base.is_empty() {
        Some(prefix.to_string())
    } else {
        Some(base.to_string())
    }
}

pub fn is_right_side_peripheral(name: &str) -> bool {
    RIGHT_SIDE_PERIPHERALS.contains(&name)
}

fn with_label(name: &str, label: &str) -> String {
    if label.is_empty() {
        name.to_string()
    } else {
        format!("{}({})", name, label)
    }
}

/// Classify a single pin row.
///
/// Fails only for an `I/O` pin whose signal is not a recognisable
/// peripheral pin name.
pub fn classify(row: &RawPinRow) -> Result<PinDescriptor, CubePartError> {
    let pin_type = row.pin_type.as_str();

    let mut unit = Unit::Ungrouped;
    let mut electrical_type = ElectricalType::Tristate;
    let mut side = Side::Left;
    let mut name = row.name.clone();
    let mut matched: Vec<&'static str> = Vec::new();

    if pin_type.contains("Power") {
        matched.push("Power");
        unit = Unit::Power;
        electrical_type = ElectricalType::PowerIn;
        side = if row.name.contains("VSS") {
            Side::Top
        } else if row.name.contains("VDD") {
            Side::Bottom
        } else {
            Side::Left
        };
        name = row.name.clone();
    }

    if pin_type.contains("Boot") || pin_type.contains("Reset") {
        matched.push("Boot/Reset");
        unit = Unit::System;
        electrical_type = ElectricalType::Input;
        side = Side::Left;
        name = row.name.clone();
    }

    if pin_type.contains("Input") {
        matched.push("Input");
        unit = Unit::Gpio;
        electrical_type = ElectricalType::Input;
        side = Side::Left;
        name = with_label(&row.name, &row.label);
    }

    if pin_type.contains("Output") {
        matched.push("Output");
        unit = Unit::Gpio;
        electrical_type = ElectricalType::Output;
        side = Side::Right;
        name = with_label(&row.name, &row.label);
    }

    if pin_type.contains("I/O") {
        matched.push("I/O");
        if row.signal.is_empty() {
            unit = Unit::Unused;
            electrical_type = ElectricalType::Noconnect;
            side = Side::Left;
            name = row.name.clone();
        } else {
            let peripheral = peripheral_name(&row.signal).ok_or_else(|| {
                CubePartError::UnrecognizedSignal {
                    line: row.line,
                    pin: row.pin.clone(),
                    signal: row.signal.clone(),
                }
            })?;
            side = if is_right_side_peripheral(&peripheral) {
                Side::Right
            } else {
                Side::Left
            };
            unit = Unit::from_prefix(peripheral);
            electrical_type = ElectricalType::Bidirectional;
            name = with_label(&format!("{}/{}", row.name, row.signal), &row.label);
        }
    }

    if matched.len() > 1 {
        tracing::debug!(
            "Pin {} ({}) matched rules {:?}; last one wins",
            row.pin,
            row.pin_type,
            matched
        );
    }

    Ok(PinDescriptor {
        pin: row.pin.clone(),
        name,
        unit,
        electrical_type,
        side,
        alt_key: row.signal.clone(),
    })
}

/// Classify every row, preserving input order.
pub fn classify_all(rows: &[RawPinRow]) -> Result<Vec<PinDescriptor>, CubePartError> {
    rows.iter().map(classify).collect()
}
