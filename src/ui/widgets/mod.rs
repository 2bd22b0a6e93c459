//! UI widget components
//!
//! Overlays drawn on top of the converter form.

pub mod help;
pub mod toast;
