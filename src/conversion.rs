//! Temperature conversion engine
//!
//! Every ordered pair of distinct units maps to exactly one entry of
//! [`FORMULAS`]. Identity pairs bypass the table and return the input.

use crate::constants::IDENTITY_FORMULA_TEXT;
use crate::types::Unit;

/// A linear conversion between two units
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    pub from: Unit,
    pub to: Unit,
    pub apply: fn(f64) -> f64,
    pub description: &'static str,
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    (c * 9.0 / 5.0) + 32.0
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0 + 273.15
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    (k - 273.15) * 9.0 / 5.0 + 32.0
}

pub static FORMULAS: [Formula; 6] = [
    Formula {
        from: Unit::Celsius,
        to: Unit::Fahrenheit,
        apply: celsius_to_fahrenheit,
        description: "°F = (°C × 9/5) + 32",
    },
    Formula {
        from: Unit::Fahrenheit,
        to: Unit::Celsius,
        apply: fahrenheit_to_celsius,
        description: "°C = (°F - 32) × 5/9",
    },
    Formula {
        from: Unit::Celsius,
        to: Unit::Kelvin,
        apply: celsius_to_kelvin,
        description: "K = °C + 273.15",
    },
    Formula {
        from: Unit::Kelvin,
        to: Unit::Celsius,
        apply: kelvin_to_celsius,
        description: "°C = K - 273.15",
    },
    Formula {
        from: Unit::Fahrenheit,
        to: Unit::Kelvin,
        apply: fahrenheit_to_kelvin,
        description: "K = (°F - 32) × 5/9 + 273.15",
    },
    Formula {
        from: Unit::Kelvin,
        to: Unit::Fahrenheit,
        apply: kelvin_to_fahrenheit,
        description: "°F = (K - 273.15) × 9/5 + 32",
    },
];

/// Look up the formula for an ordered pair. `None` for identity pairs.
pub fn formula_for(from: Unit, to: Unit) -> Option<&'static Formula> {
    FORMULAS.iter().find(|f| f.from == from && f.to == to)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormulaUsed {
    Identity,
    Linear(&'static str),
}

impl FormulaUsed {
    pub fn description(&self) -> &'static str {
        match *self {
            FormulaUsed::Identity => IDENTITY_FORMULA_TEXT,
            FormulaUsed::Linear(description) => description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    /// Full-precision result
    pub value: f64,
    pub unit: Unit,
    pub formula: FormulaUsed,
}

impl ConversionResult {
    /// Result rounded to two decimal places
    pub fn rounded(&self) -> f64 {
        (self.value * 100.0).round() / 100.0
    }

    /// Text for the result region, e.g. `212.00 °F`
    pub fn display_value(&self) -> String {
        format!("{:.2} {}", self.value, self.unit.symbol())
    }
}

pub fn convert(value: f64, from: Unit, to: Unit) -> ConversionResult {
    match formula_for(from, to) {
        Some(formula) => ConversionResult {
            value: (formula.apply)(value),
            unit: to,
            formula: FormulaUsed::Linear(formula.description),
        },
        None => ConversionResult {
            value,
            unit: to,
            formula: FormulaUsed::Identity,
        },
    }
}

/// Text for the result region while no valid input exists
pub fn placeholder(unit: Unit) -> String {
    format!("00.00 {}", unit.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 7] = [-459.67, -40.0, -0.5, 0.0, 36.6, 100.0, 1.0e6];

    #[test]
    fn test_table_covers_every_distinct_pair_once() {
        for from in Unit::ALL {
            for to in Unit::ALL {
                let count = FORMULAS
                    .iter()
                    .filter(|f| f.from == from && f.to == to)
                    .count();
                let expected = if from == to { 0 } else { 1 };
                assert_eq!(count, expected, "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn test_identity_returns_input_exactly() {
        for unit in Unit::ALL {
            for x in SAMPLES {
                let result = convert(x, unit, unit);
                assert_eq!(result.value, x);
                assert_eq!(result.formula, FormulaUsed::Identity);
                assert_eq!(result.formula.description(), IDENTITY_FORMULA_TEXT);
            }
        }
    }

    #[test]
    fn test_round_trip_every_pair() {
        for a in Unit::ALL {
            for b in Unit::ALL {
                for x in SAMPLES {
                    let there = convert(x, a, b).value;
                    let back = convert(there, b, a).value;
                    assert!(
                        (back - x).abs() < 1e-9 * x.abs().max(1.0),
                        "{:?}->{:?}->{:?}: {} became {}",
                        a,
                        b,
                        a,
                        x,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(convert(0.0, Unit::Celsius, Unit::Fahrenheit).rounded(), 32.0);
        assert_eq!(
            convert(100.0, Unit::Celsius, Unit::Fahrenheit).rounded(),
            212.0
        );
        assert_eq!(
            convert(32.0, Unit::Fahrenheit, Unit::Kelvin).rounded(),
            273.15
        );
        assert_eq!(convert(-40.0, Unit::Fahrenheit, Unit::Celsius).rounded(), -40.0);
        assert_eq!(convert(0.0, Unit::Kelvin, Unit::Celsius).rounded(), -273.15);
    }

    #[test]
    fn test_display_value_has_two_decimals() {
        let result = convert(100.0, Unit::Celsius, Unit::Fahrenheit);
        assert_eq!(result.display_value(), "212.00 °F");

        let result = convert(25.0, Unit::Celsius, Unit::Kelvin);
        assert_eq!(result.display_value(), "298.15 K");
    }

    #[test]
    fn test_formula_description() {
        let result = convert(10.0, Unit::Kelvin, Unit::Fahrenheit);
        assert_eq!(result.formula.description(), "°F = (K - 273.15) × 9/5 + 32");
        assert!(formula_for(Unit::Kelvin, Unit::Kelvin).is_none());
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(placeholder(Unit::Fahrenheit), "00.00 °F");
        assert_eq!(placeholder(Unit::Kelvin), "00.00 K");
    }
}
