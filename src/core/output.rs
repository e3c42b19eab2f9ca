//! Output formatting utilities for the diagnostic CLI.
//!
//! Standardized message styling so every subcommand reports errors and
//! results the same way. Library code never prints; only the CLI layer
//! calls these.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("{}", message.bright_black());
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smoke tests: these only verify the helpers do not panic on unusual
    // input; the exact escape sequences depend on terminal detection.

    #[test]
    fn test_print_helpers_accept_empty_strings() {
        print_error("");
        print_success("");
        print_info("");
    }

    #[test]
    fn test_print_helpers_accept_unicode() {
        print_success("committed scène.blend ✓");
        print_info("branch: función");
    }
}
