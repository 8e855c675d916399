//! Progress indicators for CLI mode
//!
//! This module provides progress display using indicatif and console.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a progress bar for a run over `total` files
///
/// A single file doesn't warrant a bar, so a hidden one is returned.
pub fn create_file_progress(total: u64, message: &str) -> ProgressBar {
    if total <= 1 {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    if let Ok(bar_style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        bar.set_style(bar_style.progress_chars("#>-"));
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Print a pass status
pub fn print_pass(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

/// Print a fail status
pub fn print_fail(message: &str) {
    println!("  {} {}", style("✗").red(), message);
}

/// Print an info status
pub fn print_info(message: &str) {
    println!("  {} {}", style("ℹ").cyan(), message);
}
