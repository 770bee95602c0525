//! Page shell - header, form/results switch, tips

use leptos::prelude::*;
use tracker_core::Snapshot;

use super::{CheckForm, ResultsPanel, TipsPanel};
use crate::styles::TRACKER_CSS;

/// The tracker page body.
///
/// Renders the form until results are revealed, then the results panel.
/// After a reset the panel stays mounted while it fades out, and the form
/// returns once the identifier has been cleared. All state lives in
/// `snapshot`; user intent goes out through the callbacks.
#[component]
pub fn TrackerPage(
    /// Current checker state
    snapshot: Signal<Snapshot>,
    /// Date label for completed cards
    #[prop(into)]
    today: Signal<String>,
    /// Input text changed
    on_input: Callback<String>,
    /// Form submitted with a non-blank identifier
    on_submit: Callback<()>,
    /// "New Check" pressed
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="tracker">
            <div class="backdrop" aria-hidden="true">
                <span class="blob blob-violet"></span>
                <span class="blob blob-amber"></span>
                <span class="blob blob-pink"></span>
            </div>

            <div class="tracker-column">
                <header class="tracker-header">
                    <h1>"Event Tracker"</h1>
                    <p>"Track your journey milestones"</p>
                </header>

                <Show when=move || snapshot.with(|s| s.phase.shows_form())>
                    <CheckForm snapshot=snapshot on_input=on_input on_submit=on_submit />
                </Show>
                <Show when=move || snapshot.with(|s| s.phase.shows_results_panel())>
                    <ResultsPanel snapshot=snapshot completed_on=today on_reset=on_reset />
                </Show>

                <TipsPanel />
            </div>
        </div>
    }
}

/// Standalone HTML document around [`TrackerPage`], used for static output.
#[component]
pub fn TrackerDocument(
    /// State to render
    snapshot: Snapshot,
    /// Date label for completed cards
    today: String,
) -> impl IntoView {
    let snapshot = Signal::stored(snapshot);
    let noop_input = Callback::new(|_: String| {});
    let noop = Callback::new(|_: ()| {});

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Event Tracker"</title>
                <style>{TRACKER_CSS}</style>
            </head>
            <body>
                <TrackerPage
                    snapshot=snapshot
                    today=today
                    on_input=noop_input
                    on_submit=noop
                    on_reset=noop
                />
            </body>
        </html>
    }
}
