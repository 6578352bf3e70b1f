//! Human-readable rendering of event values

use crate::types::ValueType;

const QUANTITY_UNITS: [&str; 6] = [
    "",
    " thousand",
    " million",
    " billion",
    " trillion",
    " quadrillion",
];

/// Format `value` according to what the event measures
#[must_use]
pub fn format_readable_value(value_type: ValueType, value: f64) -> String {
    match value_type {
        ValueType::Number => {
            let precision = if value.floor() == value && value.abs() < 1000.0 {
                0
            } else {
                2
            };
            format_quantity(value, precision)
        }
        ValueType::Bytes => format_bytes(value),
        ValueType::Nanoseconds => format_time_ns(value),
        ValueType::Microseconds => format_time_ns(value * 1e3),
        ValueType::Milliseconds => format_time_ns(value * 1e6),
    }
}

/// Plain quantity with a word suffix ("1.50 million")
#[must_use]
pub fn format_quantity(value: f64, precision: usize) -> String {
    let mut scaled = value;
    let mut unit = 0;
    while unit + 1 < QUANTITY_UNITS.len() && scaled.abs() >= 1000.0 {
        scaled /= 1000.0;
        unit += 1;
    }
    format!("{scaled:.precision$}{}", QUANTITY_UNITS[unit])
}

/// Decimal (1000-based) byte size; negative values keep their sign
#[must_use]
pub fn format_bytes(value: f64) -> String {
    let magnitude = bytesize::to_string(value.abs() as u64, false);
    if value < 0.0 && value.abs() >= 1.0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Duration given in nanoseconds, in the largest fitting unit
#[must_use]
pub fn format_time_ns(ns: f64) -> String {
    let abs = ns.abs();
    if abs < 1e3 {
        format!("{ns:.0} ns")
    } else if abs < 1e6 {
        format!("{:.2} us", ns / 1e3)
    } else if abs < 1e9 {
        format!("{:.2} ms", ns / 1e6)
    } else {
        format!("{:.2} s", ns / 1e9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_integral_small() {
        assert_eq!(format_readable_value(ValueType::Number, 0.0), "0");
        assert_eq!(format_readable_value(ValueType::Number, 42.0), "42");
        assert_eq!(format_readable_value(ValueType::Number, -7.0), "-7");
    }

    #[test]
    fn test_number_fractional_gets_two_decimals() {
        assert_eq!(format_readable_value(ValueType::Number, 12.5), "12.50");
    }

    #[test]
    fn test_number_suffixes() {
        assert_eq!(format_readable_value(ValueType::Number, 1500.0), "1.50 thousand");
        assert_eq!(format_readable_value(ValueType::Number, 2_500_000.0), "2.50 million");
        assert_eq!(format_readable_value(ValueType::Number, 3e9), "3.00 billion");
        assert_eq!(format_readable_value(ValueType::Number, -4e12), "-4.00 trillion");
        assert_eq!(format_readable_value(ValueType::Number, 5e15), "5.00 quadrillion");
        // Beyond the last suffix the number just grows
        assert_eq!(format_readable_value(ValueType::Number, 7e18), "7000.00 quadrillion");
    }

    #[test]
    fn test_bytes() {
        assert_eq!(format_readable_value(ValueType::Bytes, 512.0), "512 B");
        assert_eq!(format_readable_value(ValueType::Bytes, 2_500.0), "2.5 KB");
        assert_eq!(format_readable_value(ValueType::Bytes, 1_500_000.0), "1.5 MB");
        assert_eq!(format_readable_value(ValueType::Bytes, -2_500.0), "-2.5 KB");
    }

    #[test]
    fn test_time_units() {
        assert_eq!(format_readable_value(ValueType::Nanoseconds, 750.0), "750 ns");
        assert_eq!(format_readable_value(ValueType::Nanoseconds, 1_500.0), "1.50 us");
        assert_eq!(format_readable_value(ValueType::Microseconds, 2_500.0), "2.50 ms");
        assert_eq!(format_readable_value(ValueType::Milliseconds, 3_000.0), "3.00 s");
        assert_eq!(format_readable_value(ValueType::Milliseconds, 0.5), "500.00 us");
    }
}
