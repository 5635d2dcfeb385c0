//! Unit conversion utilities
//!
//! Handles conversion between Imperial (inch) and Metric (mm) systems.
//! The engine stores every dimension in inches; user-entered values are
//! converted on the way in. Supports decimal and fractional inch parsing
//! and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch.
const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Imperial system (inches)
    Imperial,
    /// Metric system (mm)
    Metric,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Imperial
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "Imperial"),
            Self::Metric => write!(f, "Metric"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            "metric" | "mm" => Ok(Self::Metric),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Convert a user-entered dimension to inches.
///
/// * `value` - Value in the given system's display unit (in or mm)
/// * `system` - Measurement system the value was entered in
pub fn to_inches(value: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Imperial => value,
        MeasurementSystem::Metric => value / MM_PER_INCH,
    }
}

/// Convert an internal inch value to the display unit of the given system.
pub fn from_inches(value_in: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Imperial => value_in,
        MeasurementSystem::Metric => value_in * MM_PER_INCH,
    }
}

/// Format an internal inch value for display
///
/// * `value_in` - Value in inches
/// * `system` - Target measurement system
pub fn format_length(value_in: f64, system: MeasurementSystem) -> String {
    format!("{:.3}", from_inches(value_in, system))
}

/// Parse a length string to inches
///
/// Imperial input accepts decimals and fractions ("1 1/2", "5/8").
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => {
            let mm = input.parse::<f64>().map_err(|e| e.to_string())?;
            Ok(mm / MM_PER_INCH)
        }
        MeasurementSystem::Imperial => {
            // Check for fraction
            if input.contains('/') {
                let negative = input.starts_with('-');
                let unsigned = input.trim_start_matches('-');
                let parts: Vec<&str> = unsigned.split_whitespace().collect();
                let mut total_inches = 0.0;

                for part in parts {
                    if part.contains('/') {
                        let frac_parts: Vec<&str> = part.split('/').collect();
                        if frac_parts.len() == 2 {
                            let num =
                                frac_parts[0].parse::<f64>().map_err(|_| "Invalid numerator")?;
                            let den = frac_parts[1]
                                .parse::<f64>()
                                .map_err(|_| "Invalid denominator")?;
                            if den == 0.0 {
                                return Err("Division by zero".to_string());
                            }
                            total_inches += num / den;
                        } else {
                            return Err("Invalid fraction format".to_string());
                        }
                    } else {
                        total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                    }
                }
                Ok(if negative { -total_inches } else { total_inches })
            } else {
                // Decimal inches
                input.parse::<f64>().map_err(|e| e.to_string())
            }
        }
    }
}

/// Get the unit label for the given system ("in" or "mm")
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Imperial => "in",
        MeasurementSystem::Metric => "mm",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imperial_passthrough() {
        assert_eq!(to_inches(40.0, MeasurementSystem::Imperial), 40.0);
        assert_eq!(parse_length("40", MeasurementSystem::Imperial).unwrap(), 40.0);
        assert_eq!(format_length(40.0, MeasurementSystem::Imperial), "40.000");
    }

    #[test]
    fn test_metric_conversion() {
        // 1 inch = 25.4 mm
        assert_eq!(to_inches(25.4, MeasurementSystem::Metric), 1.0);
        assert_eq!(from_inches(1.0, MeasurementSystem::Metric), 25.4);
        assert_eq!(parse_length("25.4", MeasurementSystem::Metric).unwrap(), 1.0);
        assert_eq!(format_length(0.5, MeasurementSystem::Metric), "12.700");
    }

    #[test]
    fn test_imperial_fraction() {
        // 1 1/2 inch = 1.5 inch
        assert_eq!(parse_length("1 1/2", MeasurementSystem::Imperial).unwrap(), 1.5);

        // 5 1/8 inch = 5.125 inch
        assert_eq!(parse_length("5 1/8", MeasurementSystem::Imperial).unwrap(), 5.125);

        // Just fraction: 1/4 inch
        assert_eq!(parse_length("1/4", MeasurementSystem::Imperial).unwrap(), 0.25);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label(MeasurementSystem::Imperial), "in");
        assert_eq!(unit_label(MeasurementSystem::Metric), "mm");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(parse_length("-10.5", MeasurementSystem::Imperial).unwrap(), -10.5);
        assert_eq!(parse_length("-25.4", MeasurementSystem::Metric).unwrap(), -1.0);
        assert_eq!(parse_length("-1/2", MeasurementSystem::Imperial).unwrap(), -0.5);
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(parse_length("0", MeasurementSystem::Imperial).unwrap(), 0.0);
        assert_eq!(parse_length("0", MeasurementSystem::Metric).unwrap(), 0.0);
        assert_eq!(parse_length("", MeasurementSystem::Imperial).unwrap(), 0.0);
    }

    #[test]
    fn test_whitespace_handling() {
        assert_eq!(parse_length("  10.5  ", MeasurementSystem::Imperial).unwrap(), 10.5);
        assert_eq!(parse_length("  1  1/2  ", MeasurementSystem::Imperial).unwrap(), 1.5);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_length("abc", MeasurementSystem::Metric).is_err());
        assert!(parse_length("1/0", MeasurementSystem::Imperial).is_err()); // Division by zero
        assert!(parse_length("1/2/3", MeasurementSystem::Imperial).is_err()); // Invalid fraction
    }

    #[test]
    fn test_system_parsing() {
        assert_eq!("imperial".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Imperial);
        assert_eq!("mm".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Metric);
        assert!("furlongs".parse::<MeasurementSystem>().is_err());
    }

    #[test]
    fn test_system_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MeasurementSystem::Imperial).unwrap(), "\"imperial\"");
        let back: MeasurementSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(back, MeasurementSystem::Metric);
    }
}
