// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Console output for the `form-coach` CLI.
//!
//! Plain messages go through `info!`, `warn!`, `error!`, `success!`, `verbose!`
//! and `section!`. Coaching feedback goes through `issue!` (one line per
//! detected fault, colored by [`Severity`]) and `good_form!`.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::{ColoredString, Colorize};

use crate::results::Severity;

/// Global verbosity flag.
static VERBOSE: AtomicBool = AtomicBool::new(true);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Paint `text` in the color of `severity`: red, orange or yellow.
#[must_use]
pub fn paint(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::High => text.red().bold(),
        Severity::Medium => text.truecolor(255, 165, 0).bold(),
        Severity::Low => text.yellow().bold(),
    }
}

/// Coaching line for one detected fault.
#[must_use]
pub fn issue_line(message: &str, severity: Severity) -> String {
    paint(&format!("⚠️  {message}"), severity).to_string()
}

/// Macro for standard info messages.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

/// Macro for warning messages.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "WARNING ⚠️".yellow().bold(), format!($($arg)*));
    }}
}

/// Macro for error messages.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), format!($($arg)*));
    }}
}

/// Macro for success messages.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        println!("{} {}", "✅".green(), format!($($arg)*));
    }}
}

/// Macro for verbose messages.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!("{}", format!($($arg)*));
        }
    }
}

/// Macro for section headers.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {{
        use colored::Colorize;
        if $crate::cli::logging::is_verbose() {
            println!();
            println!("{}", format!($($arg)*).cyan().bold());
        }
    }}
}

/// Macro for one detected fault, colored by severity. Always printed.
#[macro_export]
macro_rules! issue {
    ($severity:expr, $($arg:tt)*) => {
        println!(
            "{}",
            $crate::cli::logging::issue_line(&format!($($arg)*), $severity)
        );
    }
}

/// Macro for a frame with no detected faults.
#[macro_export]
macro_rules! good_form {
    () => {{
        use colored::Colorize;
        if $crate::cli::logging::is_verbose() {
            println!("{}", "✓ Good form!".green().bold());
        }
    }}
}
