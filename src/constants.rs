//! Application-wide constants

/// Minimum terminal width required to run the application
pub const MIN_TERMINAL_WIDTH: u16 = 50;

/// Minimum terminal height required to run the application
pub const MIN_TERMINAL_HEIGHT: u16 = 16;

/// Maximum length for the temperature input buffer (characters)
pub const MAX_TEMPERATURE_INPUT_LENGTH: usize = 32;

/// How long a toast stays fully visible before it starts hiding
pub const TOAST_VISIBLE_MS: u64 = 3000;

/// Length of the hiding phase after a toast's visible period
pub const TOAST_HIDE_MS: u64 = 400;

/// Duration of the pressed highlight on a button
pub const BUTTON_PRESS_MS: u64 = 300;

/// Frame duration in milliseconds for the UI render loop (targeting 60 FPS)
pub const FRAME_DURATION_MS: u64 = 16;

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Placeholder shown in the formula region while no valid input exists
pub const EMPTY_FORMULA_PROMPT: &str = "Enter temperature to see formula";

/// Formula text shown when source and target units are equal
pub const IDENTITY_FORMULA_TEXT: &str = "No conversion needed (same units)";

pub const CONVERTED_MESSAGE: &str = "Temperature converted successfully!";

pub const SWAPPED_MESSAGE: &str = "Units swapped successfully!";
