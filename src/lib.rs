//! A tiny tagged console-output helper.
//!
//! Prints lines to standard output, optionally prefixed with a
//! severity tag in the form `TAG: message`.

pub mod output;

pub use output::{debug, error, info, message, tagged, warning};
