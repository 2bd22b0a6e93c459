//! Command-line interface parsing and validation
//!
//! This module handles CLI argument parsing using clap and validates
//! user inputs for correctness.

use crate::constants::MAX_TEMPERATURE_INPUT_LENGTH;
use crate::types::Unit;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tempconv")]
#[command(version = "0.0.1")]
#[command(about = "Convert temperatures between Celsius, Fahrenheit and Kelvin", long_about = None)]
pub struct Cli {
    /// Initial temperature to convert
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Source unit (celsius, fahrenheit, kelvin or c/f/k)
    #[arg(short = 'f', long, value_name = "UNIT", default_value = "celsius")]
    pub from: Unit,

    /// Target unit (celsius, fahrenheit, kelvin or c/f/k)
    #[arg(short = 't', long, value_name = "UNIT", default_value = "fahrenheit")]
    pub to: Unit,

    /// Enable logging to specified file
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Directory holding the saved theme preference
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<String>,
}

impl Cli {
    /// Validate CLI arguments
    /// Returns error if the initial value would not fit in the input field
    pub fn validate(&self) -> Result<(), String> {
        if let Some(value) = &self.value {
            if value.chars().count() > MAX_TEMPERATURE_INPUT_LENGTH {
                return Err(format!(
                    "Initial value too long (maximum {} characters)",
                    MAX_TEMPERATURE_INPUT_LENGTH
                ));
            }
        }
        Ok(())
    }
}
