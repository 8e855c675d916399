//! Output formatting module
//!
//! Provides two output formats:
//! - Rich terminal output with colors
//! - JSON on stdout

pub mod json;
pub mod terminal;

pub use json::print_json;
pub use terminal::{print_certificate_check, print_header, print_identifications};
