//! Natural ordering of pins
//!
//! Embedded numbers are zero padded to a fixed width so that a plain string
//! comparison puts `PA2` before `PA10`.

use crate::parser::schema::PinDescriptor;

/// Minimum width of a digit run in a sort key
pub const DIGIT_WIDTH: usize = 5;

/// Zero pad every run of ASCII digits in `text` to `DIGIT_WIDTH`.
///
/// Runs already longer than the width are left as they are.
pub fn natural_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len() + DIGIT_WIDTH);
    let mut digits = String::new();

    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if !digits.is_empty() {
            push_padded(&mut key, &digits);
            digits.clear();
        }
        key.push(c);
    }
    if !digits.is_empty() {
        push_padded(&mut key, &digits);
    }
    key
}

fn push_padded(key: &mut String, digits: &str) {
    key.push_str(&format!("{:0>width$}", digits, width = DIGIT_WIDTH));
}

/// Sort key for a pin: the signal (or the name when there is no signal),
/// optionally prefixed by the unit so each unit stays contiguous.
pub fn sort_key(pin: &PinDescriptor, group_by_unit: bool) -> String {
    let source = if pin.alt_key.is_empty() {
        &pin.name
    } else {
        &pin.alt_key
    };
    let key = natural_key(source);
    if group_by_unit {
        format!("{}{}", pin.unit.as_str(), key)
    } else {
        key
    }
}

/// Return the pins in output order. Equal keys keep their input order.
pub fn sort_descriptors(pins: Vec<PinDescriptor>, group_by_unit: bool) -> Vec<PinDescriptor> {
    let mut sorted = pins;
    sorted.sort_by_cached_key(|p| sort_key(p, group_by_unit));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{ElectricalType, Side, Unit};

    fn pin(name: &str, alt_key: &str, unit: Unit) -> PinDescriptor {
        PinDescriptor {
            pin: name.to_string(),
            name: name.to_string(),
            unit,
            electrical_type: ElectricalType::Tristate,
            side: Side::Left,
            alt_key: alt_key.to_string(),
        }
    }

    #[test]
    fn test_natural_key_padding() {
        assert_eq!(natural_key("PA2"), "PA00002");
        assert_eq!(natural_key("USART1_TX"), "USART00001_TX");
        assert_eq!(natural_key("12"), "00012");
        assert_eq!(natural_key("VDD"), "VDD");
        assert_eq!(natural_key(""), "");
    }

    #[test]
    fn test_long_digit_runs_untouched() {
        assert_eq!(natural_key("X1234567"), "X1234567");
        assert_eq!(natural_key("A12345B"), "A12345B");
    }

    #[test]
    fn test_natural_order() {
        let pins = vec![
            pin("PA2", "", Unit::Ungrouped),
            pin("PA10", "", Unit::Ungrouped),
            pin("PA1", "", Unit::Ungrouped),
        ];
        let sorted = sort_descriptors(pins, true);
        let names: Vec<_> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["PA1", "PA2", "PA10"]);
    }

    #[test]
    fn test_signal_takes_precedence_over_name() {
        let p = pin("PA9", "USART1_TX", Unit::Peripheral("USART".to_string()));
        assert_eq!(sort_key(&p, false), "USART00001_TX");
        assert_eq!(sort_key(&p, true), "USARTUSART00001_TX");
    }

    #[test]
    fn test_unit_grouping() {
        let pins = vec![
            pin("PB1", "", Unit::Unused),
            pin("VDD", "", Unit::Power),
            pin("PA1", "", Unit::Unused),
        ];

        let grouped = sort_descriptors(pins.clone(), true);
        let names: Vec<_> = grouped.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["VDD", "PA1", "PB1"]);

        let flat = sort_descriptors(pins, false);
        let names: Vec<_> = flat.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["PA1", "PB1", "VDD"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut a = pin("VSS", "", Unit::Power);
        a.pin = "8".to_string();
        let mut b = pin("VSS", "", Unit::Power);
        b.pin = "23".to_string();
        let sorted = sort_descriptors(vec![a, b], true);
        assert_eq!(sorted[0].pin, "8");
        assert_eq!(sorted[1].pin, "23");
    }
}
