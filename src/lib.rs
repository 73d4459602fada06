//! tally: classify JSON token lists into numbers and single letters.
//!
//! - `engine`: classifier, response filter, configuration and errors
//! - `input`: request parsing and file / clipboard loading
//! - `app`: form state machine driven by key events
//! - `ui`: ratatui rendering and the terminal loop
//! - `cli`: clap surface shared by the binary

pub mod app;
pub mod cli;
pub mod engine;
pub mod input;
pub mod ui;
