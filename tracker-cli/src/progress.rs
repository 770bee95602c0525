//! Spinner shown while a check is in flight.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for the checking phase. Draws to stderr and stays hidden when
/// stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(spinner_style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Clear the spinner and leave a green checkmark line on stderr
    pub fn finish_success(&self, message: &str) {
        self.bar.finish_and_clear();
        if self.bar.is_hidden() {
            return;
        }
        eprintln!("{} {}", style("✓").green().bold(), message);
    }

    pub fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}
