// Library exports for testing
pub mod app;
pub mod cli;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod persistence;
pub mod toast;
pub mod types;
pub mod ui;
pub mod validator;
