//! Terminal colorization for validation output
//!
//! Applies ANSI escape codes to validation messages using crossterm.

use crossterm::style::{Color, Stylize};
use gridspec::Diagnostic;

/// Format one diagnostic line
///
/// Entries that were dropped entirely are marked red, partially used
/// entries yellow.
pub fn format_diagnostic(diagnostic: &Diagnostic, colorize: bool) -> String {
    let (marker, color) = if diagnostic.drops_entry() {
        ("✗", Color::Red)
    } else {
        ("!", Color::Yellow)
    };

    if colorize {
        format!("{} {}", marker.with(color), diagnostic)
    } else {
        format!("{} {}", marker, diagnostic)
    }
}

/// Format the closing summary line
pub fn format_summary(definition_count: usize, diagnostic_count: usize, colorize: bool) -> String {
    let (text, color) = if diagnostic_count == 0 {
        (format!("✓ Valid grid spec ({} definition(s))", definition_count), Color::Green)
    } else {
        (
            format!(
                "✗ {} problem(s), {} definition(s) kept",
                diagnostic_count, definition_count
            ),
            Color::Red,
        )
    };

    if colorize {
        text.with(color).to_string()
    } else {
        text
    }
}
