//! Plain-text rendering of a check result.

use console::style;
use tracker_core::{Snapshot, footer_text};

/// Text version of the results panel: one block per milestone, then the
/// overall completion line.
pub fn render_text(snapshot: &Snapshot, today: &str, color: bool) -> String {
    let Some(results) = snapshot.results else {
        return "No results yet\n".to_string();
    };

    let mut out = String::new();
    let identifier = snapshot.checked_identifier.as_deref().unwrap_or_default();
    out.push_str(&format!("Your Progress for {identifier}\n\n"));

    for (milestone, completed) in results.iter() {
        let (glyph, label) = if completed {
            ("✓", "Completed")
        } else {
            ("✗", "Pending")
        };
        let (glyph, label) = if !color {
            (glyph.to_string(), label.to_string())
        } else if completed {
            (
                style(glyph).green().bold().to_string(),
                style(label).green().to_string(),
            )
        } else {
            (
                style(glyph).red().bold().to_string(),
                style(label).red().to_string(),
            )
        };

        out.push_str(&format!("  {glyph} {:<16} {label}\n", milestone.title()));
        out.push_str(&format!("    {}\n", milestone.description()));
        out.push_str(&format!("    {}\n", footer_text(completed, today)));
    }

    let progress = snapshot.progress.to_string();
    let progress = if color {
        style(progress).bold().to_string()
    } else {
        progress
    };
    out.push_str(&format!("\nOverall Completion: {progress}\n"));
    out
}
