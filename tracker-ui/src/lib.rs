//! # tracker-ui
//!
//! Leptos components for the event tracker page.
//!
//! The components are driven by a [`tracker_core::Snapshot`] signal plus a
//! few callbacks, which keeps them free of timers and randomness. The
//! browser build (`tracker-web`) owns the state machine and feeds them
//! reactively; [`render_page`] renders the same tree to a static HTML
//! document through Leptos SSR.
//!
//! ## Quick Start
//!
//! ```rust
//! use tracker_ui::{render_page, PageOptions};
//! use tracker_core::Snapshot;
//!
//! let html = render_page(&Snapshot::default(), &PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Check Progress"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(missing_docs)]

pub mod components;
pub mod styles;

use components::TrackerDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracker_core::Snapshot;

/// Options for static rendering.
#[derive(Clone, Debug, Default)]
pub struct PageOptions {
    /// Date label used in "Completed on ..." footers
    pub today: String,
}

/// Render a complete HTML page for one checker snapshot.
///
/// The output is a standalone document with the stylesheet inlined.
pub fn render_page(snapshot: &Snapshot, options: &PageOptions) -> String {
    let doc = view! {
        <TrackerDocument snapshot=snapshot.clone() today=options.today.clone() />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tracker_core::{
        Checker, FixedClock, FixedProgressSource, MilestoneSet, Clock, Timings,
    };

    fn revealed(set: MilestoneSet, identifier: &str) -> Snapshot {
        let mut checker = Checker::new(Timings::default(), FixedProgressSource::new(set));
        checker.set_identifier(identifier);
        let mut next = checker.submit().ok();
        while let Some(timer) = next {
            next = checker.fire(timer.ticket);
        }
        checker.snapshot()
    }

    fn options() -> PageOptions {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        PageOptions {
            today: clock.today_label(),
        }
    }

    #[test]
    fn initial_page_shows_form_and_tips() {
        let html = render_page(&Snapshot::default(), &options());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Event Tracker"));
        assert!(html.contains("UPI ID"));
        assert!(html.contains("Enter your UPI ID"));
        assert!(html.contains("Check Progress"));
        assert!(html.contains(r#"class="submit-btn submit-btn-idle""#));
        assert!(!html.contains("Your Progress"));
        assert!(!html.contains("Overall Completion"));
        for tip in components::TIPS {
            assert!(html.contains(tip), "missing tip {tip}");
        }
    }

    #[test]
    fn checking_page_shows_spinner_label() {
        let mut checker = Checker::new(
            Timings::default(),
            FixedProgressSource::new(MilestoneSet::all_completed()),
        );
        checker.set_identifier("alice@upi");
        checker.submit().unwrap();

        let html = render_page(&checker.snapshot(), &options());
        assert!(html.contains("Checking..."));
        assert!(!html.contains("Check Progress"));
        assert!(!html.contains("Your Progress"));
    }

    #[test]
    fn revealed_page_shows_progress_and_cards() {
        let snapshot = revealed(MilestoneSet::new(true, true, true, false), "alice@upi");
        let html = render_page(&snapshot, &options());

        assert!(html.contains("Your Progress"));
        assert!(html.contains("New Check"));
        assert!(html.contains("75%"));
        assert!(html.contains("Checked for UPI ID"));
        assert!(html.contains("alice@upi"));
        assert_eq!(html.matches("Completed on 3/7/2025").count(), 3);
        assert_eq!(html.matches("Action required to complete this step").count(), 1);
        assert!(!html.contains("Check Progress"));
    }

    #[test]
    fn reset_keeps_panel_fading_until_form_is_cleared() {
        let mut checker = Checker::new(
            Timings::default(),
            FixedProgressSource::new(MilestoneSet::new(true, true, false, false)),
        );
        checker.set_identifier("erin@upi");
        let mut next = checker.submit().ok();
        while let Some(timer) = next {
            next = checker.fire(timer.ticket);
        }
        checker.reset().unwrap();

        let html = render_page(&checker.snapshot(), &options());
        assert!(html.contains(r#"class="panel fade-out-up""#));
        assert!(!html.contains(r#"class="panel fade-in-up""#));
        assert!(html.contains("Your Progress"));
        assert!(html.contains("50%"));
        assert!(!html.contains("Check Progress"));
        assert!(!html.contains("upi-input"));
    }

    #[test]
    fn page_after_reset_matches_initial_render() {
        let mut checker = Checker::new(
            Timings::default(),
            FixedProgressSource::new(MilestoneSet::all_completed()),
        );
        checker.set_identifier("bob@upi");
        let mut next = checker.submit().ok();
        while let Some(timer) = next {
            next = checker.fire(timer.ticket);
        }
        let clear = checker.reset().unwrap();
        checker.fire(clear.ticket);

        let initial = render_page(&Snapshot::default(), &options());
        let after = render_page(&checker.snapshot(), &options());
        pretty_assertions::assert_eq!(after, initial);
        assert!(!after.contains("bob@upi"));
    }
}
